use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use worknest::api::{ApiClient, ApiHandle};
use worknest::api::worker::spawn_worker;
use worknest::config::{self, ConfigResult, Overrides, Settings};
use worknest::error::WorknestError;
use worknest::model::Role;
use worknest::{App, NotificationStore};

/// Terminal client for the WorkNest HR administration API
#[derive(Parser, Debug)]
#[command(version, about = "Terminal client for the WorkNest HR administration API")]
struct Args {
    /// Backend base URL (overrides api.base_url)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Rows per table page (overrides pager.page_size)
    #[arg(long, value_name = "N")]
    page_size: Option<usize>,

    /// Id recorded as the approver of leave decisions
    #[arg(long, value_name = "ID")]
    user_id: Option<String>,

    /// Role to act as; only managers may delete or approve
    #[arg(long, value_enum)]
    role: Option<Role>,

    /// Config file to read instead of ~/.config/worknest/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Writes to /tmp/worknest-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/worknest-debug.log")
            .expect("Failed to open /tmp/worknest-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== WORKNEST DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    let config_result = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };

    // Reject bad flags before touching the terminal
    let settings = Settings::resolve(
        &config_result.config,
        Overrides {
            base_url: args.base_url,
            page_size: args.page_size,
            user_id: args.user_id,
            role: args.role,
        },
    )?;
    let api = connect(&settings)?;

    let notifications = NotificationStore::with_ttl(settings.notification_ttl);
    let app = App::new(
        settings.session.clone(),
        settings.page_size,
        chrono::Local::now().date_naive(),
        api,
        notifications,
    );

    let terminal = init_terminal()?;
    let result = run(terminal, app, config_result);
    restore_terminal()?;

    let mut app = result?;
    app.api.shutdown();

    #[cfg(debug_assertions)]
    log::debug!("=== WORKNEST DEBUG SESSION ENDED ===");

    Ok(())
}

/// Build the HTTP client and start the worker thread that owns it
fn connect(settings: &Settings) -> Result<ApiHandle, WorknestError> {
    let client = ApiClient::new(&settings.base_url, settings.timeout)?;
    log::debug!("Connecting to {}", client.base_url());
    Ok(spawn_worker(client))
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_result: ConfigResult) -> Result<App> {
    if let Some(warning) = config_result.warning {
        app.notifications.error(warning);
    }

    app.activate_tab(app.active_tab);

    loop {
        // Toasts expire on their own, so every pass redraws
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}
