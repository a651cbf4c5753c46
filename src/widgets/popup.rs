use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rectangle of at most `width` x `height` centered in `frame_area`
pub fn centered_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    Rect {
        x: frame_area.x + frame_area.width.saturating_sub(popup_width) / 2,
        y: frame_area.y + frame_area.height.saturating_sub(popup_height) / 2,
        width: popup_width,
        height: popup_height,
    }
}

/// Rectangle hugging the right edge of `frame_area`, `right_margin` cells in,
/// starting `y_offset` rows below its top. Clipped to the frame.
pub fn top_right(frame_area: Rect, width: u16, height: u16, right_margin: u16, y_offset: u16) -> Rect {
    let width = width.min(frame_area.width.saturating_sub(right_margin));
    let y = frame_area.y.saturating_add(y_offset);
    let bottom = frame_area.y.saturating_add(frame_area.height);

    Rect {
        x: frame_area.x + frame_area.width.saturating_sub(width + right_margin),
        y,
        width,
        height: height.min(bottom.saturating_sub(y)),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
