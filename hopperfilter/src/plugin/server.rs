use std::sync::Arc;

use hopperfilter_config::{ConfigSource, PluginConfig};
use hopperfilter_registry::{RecipeRegistry, RecipeTable};

use super::{
    api::{Logger, PluginContext, PluginMetadata},
    logger::LogLogger,
};
use crate::item::{HopperItemFactory, ItemFactory};

/// The context a standalone host gives the plugin: its config, the shared
/// recipe table and a logger tagged with the plugin name.
pub struct ServerContext {
    namespace: String,
    config: PluginConfig,
    recipes: Arc<RecipeTable>,
    items: HopperItemFactory,
    logger: LogLogger,
}

impl ServerContext {
    pub fn new(metadata: &PluginMetadata, config: PluginConfig, recipes: Arc<RecipeTable>) -> Self {
        Self {
            namespace: metadata.id.to_string(),
            config,
            recipes,
            items: HopperItemFactory,
            logger: LogLogger::new(metadata.name),
        }
    }
}

impl PluginContext for ServerContext {
    fn get_namespace(&self) -> &str {
        &self.namespace
    }

    fn get_logger(&self) -> &dyn Logger {
        &self.logger
    }

    fn get_config(&self) -> &dyn ConfigSource {
        &self.config
    }

    fn get_recipes(&self) -> &dyn RecipeRegistry {
        &*self.recipes
    }

    fn get_item_factory(&self) -> &dyn ItemFactory {
        &self.items
    }
}
