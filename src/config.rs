//! Start-up configuration
//!
//! Parsed by hand from the command line:
//!
//! ```text
//! arrayviz [--size N] [--speed MS] [--lang python|java|c] [--capacity N] [--log FILE]
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Smallest generated array
pub const MIN_ARRAY_SIZE: usize = 3;

/// Largest generated array
pub const MAX_ARRAY_SIZE: usize = 10;

/// Fastest selectable step speed
pub const MIN_SPEED: Duration = Duration::from_millis(50);

/// Slowest selectable step speed
pub const MAX_SPEED: Duration = Duration::from_millis(3000);

/// Language the code pane displays the operations in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    Java,
    C,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Python, Language::Java, Language::C];

    pub fn label(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Java => "java",
            Language::C => "c",
        }
    }

    /// C arrays cannot grow past their declared capacity
    pub fn is_fixed_capacity(self) -> bool {
        matches!(self, Language::C)
    }

    pub fn next(self) -> Self {
        match self {
            Language::Python => Language::Java,
            Language::Java => Language::C,
            Language::C => Language::Python,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "python" | "py" => Ok(Language::Python),
            "java" => Ok(Language::Java),
            "c" => Ok(Language::C),
            _ => Err(ConfigError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Errors raised while reading the command line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown flag '{0}'")]
    UnknownFlag(String),

    #[error("flag '{0}' expects a value")]
    MissingValue(String),

    #[error("invalid value '{value}' for '{flag}'")]
    InvalidValue { flag: String, value: String },

    #[error("array size must be between {min} and {max}, got {got}")]
    SizeOutOfRange { got: usize, min: usize, max: usize },

    #[error("unknown language '{0}' (expected python, java or c)")]
    UnknownLanguage(String),

    #[error("capacity {capacity} is smaller than the array size {size}")]
    CapacityTooSmall { capacity: usize, size: usize },
}

/// Settings the app starts with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub size: usize,
    pub speed: Duration,
    pub language: Language,
    /// Capacity of the fixed-size C array
    pub capacity: usize,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            size: 8,
            speed: Duration::from_millis(600),
            language: Language::Python,
            capacity: MAX_ARRAY_SIZE,
            log_file: None,
        }
    }
}

impl Config {
    /// Parse the arguments that follow the program name
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let flag = arg.as_ref().to_string();
            let mut value = || {
                args.next()
                    .map(|v| v.as_ref().to_string())
                    .ok_or_else(|| ConfigError::MissingValue(flag.clone()))
            };

            match flag.as_str() {
                "--size" | "-n" => config.size = parse_number(&flag, &value()?)?,
                "--speed" | "-s" => {
                    let ms: u64 = parse_number(&flag, &value()?)?;
                    config.speed = Duration::from_millis(ms).clamp(MIN_SPEED, MAX_SPEED);
                }
                "--lang" | "-l" => config.language = value()?.parse()?,
                "--capacity" | "-c" => config.capacity = parse_number(&flag, &value()?)?,
                "--log" => config.log_file = Some(PathBuf::from(value()?)),
                _ => return Err(ConfigError::UnknownFlag(flag.clone())),
            }
        }

        if !(MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&config.size) {
            return Err(ConfigError::SizeOutOfRange {
                got: config.size,
                min: MIN_ARRAY_SIZE,
                max: MAX_ARRAY_SIZE,
            });
        }
        if config.capacity < config.size {
            return Err(ConfigError::CapacityTooSmall {
                capacity: config.capacity,
                size: config.size,
            });
        }

        Ok(config)
    }
}

fn parse_number<T: FromStr>(flag: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}
