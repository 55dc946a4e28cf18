use std::fmt;
use std::time::Duration;

/// Parameters for a single run.
///
/// The defaults reproduce the classic demo: a ten second countdown
/// drawn as a 30 character `#`/`-` bar.
#[derive(Clone, Debug)]
pub struct RunConfig {
    duration_secs: u64,
    bar_size: usize,
}

impl RunConfig {
    /// Creates a run configuration from a duration in whole seconds
    /// and a bar width in characters.
    ///
    /// Both must be at least 1; the timer divides the duration into
    /// half-second steps and a zero-width bar has nothing to draw.
    pub fn new(duration_secs: u64, bar_size: usize) -> Result<RunConfig, ConfigError> {
        if duration_secs == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if bar_size == 0 {
            return Err(ConfigError::ZeroBarSize);
        }
        Ok(RunConfig {
            duration_secs,
            bar_size,
        })
    }

    /// The configured duration.
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }

    /// The bar width in characters.
    pub fn bar_size(&self) -> usize {
        self.bar_size
    }

    /// Number of timer steps: two per second, 500ms each.
    pub(crate) fn half_steps(&self) -> u64 {
        self.duration_secs * 2
    }
}

impl Default for RunConfig {
    fn default() -> RunConfig {
        RunConfig {
            duration_secs: 10,
            bar_size: 30,
        }
    }
}

/// An invalid [`RunConfig`] parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    ZeroDuration,
    ZeroBarSize,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDuration => write!(f, "duration must be at least 1 second"),
            ConfigError::ZeroBarSize => write!(f, "bar size must be at least 1 character"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_demo_constants() {
        let config = RunConfig::default();
        assert_eq!(config.duration(), Duration::from_secs(10));
        assert_eq!(config.bar_size(), 30);
        assert_eq!(config.half_steps(), 20);
    }

    #[test]
    fn rejects_zero_duration() {
        assert_eq!(
            RunConfig::new(0, 30).unwrap_err(),
            ConfigError::ZeroDuration
        );
    }

    #[test]
    fn rejects_zero_bar_size() {
        assert_eq!(RunConfig::new(5, 0).unwrap_err(), ConfigError::ZeroBarSize);
    }

    #[test]
    fn half_second_resolution() {
        let config = RunConfig::new(2, 10).unwrap();
        assert_eq!(config.half_steps(), 4);
    }
}
