//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const SUCCESS: Color = Color::Rgb(107, 203, 119);
    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const PINK: Color = Color::Rgb(255, 107, 157);

    // Shared cursor style for textarea widgets
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Tab bar at the top of the screen
pub mod tabs {
    use super::*;

    pub const ACTIVE: Style = Style::new()
        .fg(Color::Rgb(0, 217, 255))
        .add_modifier(Modifier::BOLD);
    pub const INACTIVE: Style = Style::new()
        .fg(Color::Rgb(130, 133, 158))
        .add_modifier(Modifier::DIM);
    pub const SESSION: Color = Color::Rgb(198, 120, 221);
}

/// List tables
pub mod table {
    use super::*;

    pub const BORDER: Color = Color::Rgb(0, 217, 255);
    pub const BORDER_LOADING: Color = Color::Rgb(90, 92, 119);
    pub const HEADER: Style = Style::new()
        .fg(Color::Rgb(255, 217, 61))
        .add_modifier(Modifier::BOLD);
    pub const ROW: Color = Color::Rgb(236, 236, 244);
    pub const ROW_SELECTED_BG: Color = Color::Rgb(55, 55, 85);
    pub const ROW_SELECTED_INDICATOR: Color = Color::Rgb(255, 107, 157);
    pub const EMPTY: Color = Color::Rgb(90, 92, 119);
    pub const LOADING: Color = Color::Rgb(130, 133, 158);
    pub const LOAD_ERROR: Color = Color::Rgb(224, 108, 117);

    pub const STATUS_PENDING: Color = Color::Rgb(255, 217, 61);
    pub const STATUS_APPROVED: Color = Color::Rgb(107, 203, 119);
    pub const STATUS_REJECTED: Color = Color::Rgb(224, 108, 117);
}

/// Pager bar below each table
pub mod pager {
    use super::*;

    pub const PAGE: Color = Color::Rgb(180, 182, 200);
    pub const CURRENT: Style = Style::new()
        .fg(Color::Rgb(26, 26, 46))
        .bg(Color::Rgb(0, 217, 255))
        .add_modifier(Modifier::BOLD);
    pub const ELLIPSIS: Color = Color::Rgb(90, 92, 119);
    pub const NAV_ENABLED: Style = Style::new().fg(Color::Rgb(0, 217, 255));
    pub const NAV_DISABLED: Style = Style::new()
        .fg(Color::Rgb(90, 92, 119))
        .add_modifier(Modifier::DIM);
}

/// Search field above each table
pub mod search {
    use super::*;

    pub const BORDER_ACTIVE: Color = Color::Rgb(255, 107, 157);
    pub const BORDER_INACTIVE: Color = Color::Rgb(90, 92, 119);
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
}

/// Confirmation dialog
pub mod dialog {
    use super::*;

    pub const BORDER: Color = Color::Rgb(224, 108, 117);
    pub const BACKGROUND: Color = Color::Rgb(26, 26, 46);
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const KEY: Style = Style::new()
        .fg(Color::Rgb(255, 217, 61))
        .add_modifier(Modifier::BOLD);
}

/// Help popup styles
pub mod help {
    use super::*;

    pub const BORDER: Color = Color::Rgb(0, 217, 255);
    pub const BACKGROUND: Color = Color::Rgb(26, 26, 46);
    pub const SECTION_HEADER: Style = Style::new()
        .fg(Color::Rgb(0, 217, 255))
        .add_modifier(Modifier::BOLD);
    pub const KEY: Style = Style::new()
        .fg(Color::Rgb(255, 217, 61))
        .add_modifier(Modifier::BOLD);
    pub const DESCRIPTION: Color = Color::Rgb(236, 236, 244);
    pub const FOOTER: Color = Color::Rgb(90, 92, 119);
}

/// Notification styles
pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const SUCCESS: NotificationColors = NotificationColors {
        fg: Color::Rgb(26, 26, 46),
        bg: Color::Rgb(107, 203, 119),
        border: Color::Rgb(140, 225, 150),
    };

    pub const ERROR: NotificationColors = NotificationColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(224, 108, 117),
        border: Color::Rgb(255, 135, 145),
    };
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = Color::Rgb(130, 133, 158);
    pub const DESCRIPTION: Color = Color::Rgb(90, 92, 119);
    pub const SEPARATOR: Color = Color::Rgb(90, 92, 119);
}
