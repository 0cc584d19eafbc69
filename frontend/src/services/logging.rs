use log::{Level, LevelFilter, Log, Metadata, Record};

/// Console logger. Tags each line with the component that produced it.
///
/// Also installed as the `log` backend so records from `shared` show up with
/// their module path as the component.
pub struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    pub fn init(level: LevelFilter) {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::write(Level::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::write(Level::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::write(Level::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::write(Level::Error, component, message);
    }

    fn write(level: Level, component: &str, message: &str) {
        let line = format!("[{}] {}", component, message);
        match level {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            Self::write(record.level(), record.target(), &record.args().to_string());
        }
    }

    fn flush(&self) {}
}
