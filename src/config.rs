//! Runtime configuration for logging and output.
//!
//! Both are plain values built once in `main` and handed to whoever needs
//! them; nothing here is stored globally apart from the installed logger.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;
use std::str::FromStr;

/// Environment variable holding the default log level.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
/// Any non-empty value disables coloured output (<https://no-color.org>).
pub const NO_COLOR_ENV: &str = "NO_COLOR";
/// Default cap on the number of addresses `list` will print.
pub const DEFAULT_LIST_LIMIT: u64 = 65_536;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: LevelFilter::Info,
        }
    }
}

impl LogConfig {
    /// `--debug` wins, then the `LOG_LEVEL` value, then `info`.
    pub fn resolve(debug: bool, env_level: Option<&str>) -> Result<LogConfig, Box<dyn Error>> {
        if debug {
            return Ok(LogConfig {
                level: LevelFilter::Debug,
            });
        }
        match env_level.map(str::trim).filter(|s| !s.is_empty()) {
            Some(level) => {
                let level = LevelFilter::from_str(level)
                    .map_err(|_| format!("invalid {LOG_LEVEL_ENV} '{level}'"))?;
                Ok(LogConfig { level })
            }
            None => Ok(LogConfig::default()),
        }
    }

    /// Same as [`LogConfig::resolve`], reading `LOG_LEVEL` from the environment.
    pub fn from_env(debug: bool) -> Result<LogConfig, Box<dyn Error>> {
        let env_level = std::env::var(LOG_LEVEL_ENV).ok();
        LogConfig::resolve(debug, env_level.as_deref())
    }
}

/// Install the log4rs logger.
///
/// A YAML file, when given, fully describes the logging setup. Otherwise
/// messages go to stderr at the configured level so stdout stays clean for
/// results.
pub fn init_logging(config: &LogConfig, config_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    if let Some(file) = config_file {
        log4rs::init_file(file, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", file.display()))?;
        log::debug!("logging configured from {}", file.display());
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l:<5})} {t} - {m}{n}")))
        .build();
    let log_config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(config.level))?;
    log4rs::init_config(log_config)?;
    Ok(())
}

/// How results are rendered on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub color: bool,
    pub list_limit: u64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            color: true,
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl OutputConfig {
    pub fn resolve(no_color_flag: bool, no_color_env: Option<&str>) -> OutputConfig {
        let env_disables = no_color_env.map_or(false, |v| !v.is_empty());
        OutputConfig {
            color: !(no_color_flag || env_disables),
            ..OutputConfig::default()
        }
    }

    pub fn from_env(no_color_flag: bool) -> OutputConfig {
        let env = std::env::var(NO_COLOR_ENV).ok();
        OutputConfig::resolve(no_color_flag, env.as_deref())
    }
}
