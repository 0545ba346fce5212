use std::str::FromStr;

use log::LevelFilter;
use satchel_config::LoggingConfig;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode, ThreadLogMode};

pub mod registry;
pub mod session;

pub use registry::PlayerRegistry;
pub use session::{ClearTarget, InventorySessions, InventorySummary, SectionSummary, SessionError};

pub use satchel_config as config;
pub use satchel_inventory as inventory;

/// Installs the terminal logger described by `config`.
///
/// Does nothing when logging is disabled or a logger was already installed.
pub fn init_log(config: &LoggingConfig) {
    if !config.enabled {
        return;
    }

    let level = LevelFilter::from_str(&config.level).unwrap_or(LevelFilter::Info);

    let mut builder = ConfigBuilder::new();
    if config.threads {
        builder.set_thread_level(LevelFilter::Info);
        builder.set_thread_mode(ThreadLogMode::Both);
    } else {
        builder.set_thread_level(LevelFilter::Off);
    }
    if !config.timestamp {
        builder.set_time_level(LevelFilter::Off);
    }
    builder.set_target_level(LevelFilter::Off);

    let color = if config.color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    if TermLogger::init(level, builder.build(), TerminalMode::Mixed, color).is_err() {
        log::debug!("A logger is already installed, keeping it");
    }
}
