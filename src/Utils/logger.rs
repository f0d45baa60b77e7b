//! console/file logging for the engine
use crate::Utils::config::LogSettings;
use chrono::Local;
use log::info;
use simplelog::*;
use std::fs::File;

/// `diff_tree_<date>_<time>.log` in the working directory
pub fn default_log_file_name() -> String {
    format!("diff_tree_{}.log", Local::now().format("%Y-%m-%d_%H-%M-%S"))
}

/// Installs the global logger described by `settings`.
///
/// Returns false when nothing was installed: level `Off`, no sink requested,
/// or a logger already set for this process. A log file that cannot be created
/// is skipped and the console sink still goes up.
pub fn init_logger(settings: &LogSettings) -> bool {
    if settings.level == LevelFilter::Off {
        return false;
    }
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if settings.console {
        loggers.push(TermLogger::new(
            settings.level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }

    if let Some(ref filename) = settings.file {
        match File::create(filename) {
            Ok(file) => loggers.push(WriteLogger::new(settings.level, Config::default(), file)),
            Err(e) => eprintln!("cannot create log file {}: {}", filename, e),
        }
    }

    if loggers.is_empty() {
        return false;
    }
    let installed = CombinedLogger::init(loggers).is_ok();
    if installed {
        info!("logger initialized at level {}", settings.level);
    }
    installed
}
