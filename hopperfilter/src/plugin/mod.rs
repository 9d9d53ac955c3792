pub mod api;
mod logger;
mod server;

use hopperfilter_registry::Identifier;

pub use api::{Logger, Plugin, PluginContext, PluginMetadata};
pub use logger::LogLogger;
pub use server::ServerContext;

use crate::recipe::RecipeManager;

pub const METADATA: PluginMetadata<'static> = PluginMetadata {
    id: "hopperfilterx",
    name: "HopperFilterX",
    version: env!("CARGO_PKG_VERSION"),
    authors: &["MrH00k"],
    description: "Hoppers that only let chosen items through.",
};

/// Path of the key stored on filtered hopper items.
pub const FILTERED_HOPPER_KEY: &str = "filtered_hopper";

#[derive(Default)]
pub struct HopperFilterPlugin {
    recipes: RecipeManager,
}

impl HopperFilterPlugin {
    pub fn recipes(&self) -> &RecipeManager {
        &self.recipes
    }
}

impl Plugin for HopperFilterPlugin {
    fn on_load(&mut self, server: &dyn PluginContext) -> Result<(), String> {
        let filtered_hopper_key = Identifier::new(server.get_namespace(), FILTERED_HOPPER_KEY)
            .map_err(|err| err.to_string())?;
        self.recipes.initialize(server, &filtered_hopper_key);

        server.get_logger().info("Plugin loaded!");
        Ok(())
    }

    fn on_unload(&mut self, server: &dyn PluginContext) -> Result<(), String> {
        self.recipes.unregister_recipes(server);

        server.get_logger().info("Plugin unloaded!");
        Ok(())
    }
}
