use simplelog::*;
use std::fs::File;

/// Where and how verbosely the crate logs.
///
/// The simplifier reports fired rewrites at `trace`, the differentiator reports
/// derivative requests at `debug`, gradient construction at `info` and failed
/// evaluations at `warn`.
#[derive(Clone, Debug, PartialEq)]
pub struct LoggerSettings {
    pub level: LevelFilter,
    pub log_to_console: bool,
    pub log_to_file: Option<String>,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            log_to_console: true,
            log_to_file: None,
        }
    }
}

impl LoggerSettings {
    pub fn new() -> Self {
        Self::default()
    }

    ////////////////////////////////logging functions
    /// Set logging level (Off, Error, Warn, Info, Debug, Trace)
    pub fn set_log_level(&mut self, level: LevelFilter) {
        self.level = level;
    }

    /// Enable logging to file
    pub fn set_log_file(&mut self, filename: String) {
        self.log_to_file = Some(filename);
    }

    /// Enable/disable console logging
    pub fn set_console_logging(&mut self, enabled: bool) {
        self.log_to_console = enabled;
    }

    /// Enable debug logging
    pub fn enable_debug_logging(&mut self) {
        self.set_log_level(LevelFilter::Debug);
    }

    /// Disable logging
    pub fn disable_logging(&mut self) {
        self.set_log_level(LevelFilter::Off);
    }

    /// Initialize the global logger based on current settings.
    /// Only the first successful call installs a logger; later calls leave it as is.
    pub fn init_logger(&self) {
        let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

        // Console logger
        if self.log_to_console {
            loggers.push(TermLogger::new(
                self.level,
                Config::default(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            ));
        }

        // File logger
        if let Some(ref filename) = self.log_to_file {
            if let Ok(file) = File::create(filename) {
                loggers.push(WriteLogger::new(self.level, Config::default(), file));
            }
        }

        if !loggers.is_empty() {
            let _ = CombinedLogger::init(loggers);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters() {
        let mut settings = LoggerSettings::new();
        assert_eq!(settings.level, LevelFilter::Info);
        settings.enable_debug_logging();
        settings.set_console_logging(false);
        settings.set_log_file("ad.log".to_string());
        assert_eq!(settings.level, LevelFilter::Debug);
        assert!(!settings.log_to_console);
        assert_eq!(settings.log_to_file.as_deref(), Some("ad.log"));
        settings.disable_logging();
        assert_eq!(settings.level, LevelFilter::Off);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        let mut settings = LoggerSettings::new();
        settings.set_log_level(LevelFilter::Warn);
        settings.init_logger();
        settings.init_logger();
    }
}
