use hopperfilter_config::ConfigSource;
use hopperfilter_registry::RecipeRegistry;

use crate::item::ItemFactory;

/// What the host hands a plugin while loading and unloading it.
pub trait PluginContext: Send + Sync {
    /// Namespace for every key the plugin creates, usually the plugin id.
    fn get_namespace(&self) -> &str;
    fn get_logger(&self) -> &dyn Logger;
    fn get_config(&self) -> &dyn ConfigSource;
    fn get_recipes(&self) -> &dyn RecipeRegistry;
    fn get_item_factory(&self) -> &dyn ItemFactory;
}

pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn success(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);

    fn log(&self, level: log::Level, message: &str) {
        match level {
            log::Level::Error => self.error(message),
            log::Level::Warn => self.warning(message),
            log::Level::Info => self.info(message),
            log::Level::Debug | log::Level::Trace => self.debug(message),
        }
    }
}
