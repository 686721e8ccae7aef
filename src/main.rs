use anyhow::{Context, Result};
use clap::Parser;
use dialogdemo::app::App;
use dialogdemo::cli::Cli;
use dialogdemo::config::Config;
use dialogdemo::styles::{init_theme, ThemeType};
use dialogdemo::utils::get_log_dir;
use tracing::info;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Subcommands print and exit without touching the terminal or the log
    if cli.execute()? {
        return Ok(());
    }

    setup_panic_hook();

    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let file_appender = tracing_appender::rolling::never(&log_dir, "dialogdemo.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let config_path = cli.config_path();
    let config = Config::load_or_create(&config_path)
        .context("Failed to load configuration")?
        .with_overrides(cli.theme, cli.keymap);

    let theme_type = if std::env::var_os("NO_COLOR").is_some() {
        ThemeType::NoColor
    } else {
        config.theme_type()
    };
    init_theme(theme_type);
    info!(
        "Config {:?}, theme {}, keymap {}",
        config_path,
        theme_type.name(),
        config.keymap.preset.name()
    );

    let mut app = App::new(config, config_path);
    let result = app.run();

    drop(guard);
    result
}
