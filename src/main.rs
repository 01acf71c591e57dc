use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use glowlist::LogLevel;
use glowlist::core::config::{self, CliOverrides, Notices};
use glowlist::tui;
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(name = "glowlist", about = "A small terminal todo list")]
struct Args {
    /// Title shown above the list
    #[arg(short, long)]
    title: Option<String>,

    /// Log verbosity written to the log file
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Read settings from this file instead of ~/.glowlist/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Logging isn't up yet, so config messages are reported once it is
    let mut notices = Notices::default();
    let loaded = match &args.config {
        Some(path) => config::load_config_from(path, &mut notices),
        None => config::load_config(&mut notices),
    };
    let (file_config, config_error) = match loaded {
        Ok(c) => (c, None),
        Err(e) => (config::GlowlistConfig::default(), Some(e)),
    };

    let cli = CliOverrides {
        title: args.title,
        log_level: args.log_level,
    };
    let resolved = config::resolve(&file_config, &cli, &mut notices);

    // File logger: stdout belongs to the terminal UI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level.into(), log_config, log_file);
    }

    notices.replay();
    if let Some(e) = config_error {
        log::warn!("Falling back to default config: {}", e);
    }
    log::info!("Glowlist starting up (title: {:?})", resolved.title);

    tui::run(&resolved)
}
