use colored::Colorize;

use super::api::Logger;

/// Forwards plugin notices to the `log` facade, prefixed with the plugin name.
pub struct LogLogger {
    plugin_name: String,
}

impl LogLogger {
    pub fn new(plugin_name: impl Into<String>) -> Self {
        Self {
            plugin_name: plugin_name.into(),
        }
    }
}

impl Logger for LogLogger {
    fn info(&self, message: &str) {
        log::info!("[{}] {}", self.plugin_name, message);
    }

    fn success(&self, message: &str) {
        log::info!("[{}] {}", self.plugin_name, message.green());
    }

    fn warning(&self, message: &str) {
        log::warn!("[{}] {}", self.plugin_name, message);
    }

    fn error(&self, message: &str) {
        log::error!("[{}] {}", self.plugin_name, message);
    }

    fn debug(&self, message: &str) {
        log::debug!("[{}] {}", self.plugin_name, message);
    }
}
