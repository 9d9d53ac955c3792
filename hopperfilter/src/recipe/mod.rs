use hopperfilter_registry::{Identifier, IngredientSlot, ItemStack, RegistryError, ShapedRecipe};
use parking_lot::Mutex;

use crate::{error::HopperError, plugin::api::PluginContext};

pub const RECIPE_NAME: &str = "filtered_hopper_recipe";
pub const RECIPE_ENABLED_OPTION: &str = "recipe.enabled";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    /// Registration was attempted under this key.
    Enabled(Identifier),
    /// The recipe is turned off in the config.
    Disabled(Identifier),
    TornDown,
}

/// Registers the filtered hopper recipe on startup and removes it on
/// shutdown. Failures are reported through the plugin logger and never
/// returned to the host.
pub struct RecipeManager {
    state: Mutex<LifecycleState>,
}

impl Default for RecipeManager {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeManager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(LifecycleState::Uninitialized),
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state.lock().clone()
    }

    pub fn recipe_key(&self) -> Option<Identifier> {
        match &*self.state.lock() {
            LifecycleState::Enabled(key) | LifecycleState::Disabled(key) => Some(key.clone()),
            LifecycleState::Uninitialized | LifecycleState::TornDown => None,
        }
    }

    pub fn initialize(&self, server: &dyn PluginContext, filtered_hopper_key: &Identifier) {
        let logger = server.get_logger();

        let recipe_key = match Identifier::new(server.get_namespace(), RECIPE_NAME) {
            Ok(key) => key,
            Err(err) => {
                logger.error(&format!("Failed to create recipe key: {err}"));
                return;
            }
        };

        let enabled = server.get_config().get_bool(RECIPE_ENABLED_OPTION, true);

        // Stays locked across `add` so teardown always sees a finished registration.
        let mut state = self.state.lock();
        if *state == LifecycleState::TornDown {
            logger.warning(
                "Recipes were already unregistered, ignoring initialization until restart",
            );
            return;
        }

        if !enabled {
            *state = LifecycleState::Disabled(recipe_key);
            logger.info(
                "Filtered hopper crafting recipe is disabled in config.toml - use /hopper give command instead",
            );
            return;
        }
        *state = LifecycleState::Enabled(recipe_key.clone());

        let result = server.get_item_factory().create_filtered_hopper(filtered_hopper_key);
        match filtered_hopper_recipe(recipe_key, result).and_then(|recipe| {
            let description = describe(&recipe);
            server.get_recipes().add(recipe).map(|()| description)
        }) {
            Ok(description) => {
                logger.info(&format!("Registered crafting recipe: {description}"));
                logger.success("Filtered hopper crafting recipe registered successfully");
            }
            Err(err @ RegistryError::DuplicateKey(_)) => {
                logger.warning(&format!("Recipe may already be registered: {err}"));
            }
            Err(err) => {
                logger.log(
                    err.severity(),
                    &format!("Failed to register filtered hopper recipe: {err}"),
                );
                logger.debug(&format!(
                    "Recipe registration error details: {}",
                    HopperError::kind(&err)
                ));
            }
        }
    }

    /// Removes the recipe registered by [`Self::initialize`]. Does nothing
    /// when no registration was attempted or it was already removed.
    pub fn unregister_recipes(&self, server: &dyn PluginContext) {
        let key = {
            let mut state = self.state.lock();
            match std::mem::replace(&mut *state, LifecycleState::TornDown) {
                LifecycleState::Enabled(key) => key,
                LifecycleState::Disabled(_) | LifecycleState::TornDown => return,
                LifecycleState::Uninitialized => {
                    *state = LifecycleState::Uninitialized;
                    return;
                }
            }
        };

        let logger = server.get_logger();
        match server.get_recipes().remove(&key) {
            Ok(_) => logger.info("Unregistered filtered hopper recipe"),
            Err(err) => logger.warning(&format!("Failed to unregister recipe: {err}")),
        }
    }
}

/// The filtered hopper recipe:
/// ```text
/// I R I   iron ingot, redstone, iron ingot
/// I C I   iron ingot, chest, iron ingot
///   I     iron ingot
/// ```
pub fn filtered_hopper_recipe(
    key: Identifier,
    result: ItemStack,
) -> Result<ShapedRecipe, RegistryError> {
    ShapedRecipe::builder(key, result)
        .shape(&["IRI", "ICI", " I "])
        .ingredient('I', IngredientSlot::item(Identifier::vanilla("iron_ingot")))
        .ingredient('R', IngredientSlot::item(Identifier::vanilla("redstone")))
        .ingredient('C', IngredientSlot::item(Identifier::vanilla("chest")))
        .build()
}

fn describe(recipe: &ShapedRecipe) -> String {
    let result = recipe.result();
    format!(
        "{} = {}x {}",
        recipe.describe_ingredients(),
        result.count,
        result.custom_name.as_deref().unwrap_or(&result.item.path)
    )
}

#[cfg(test)]
mod test {
    use std::{collections::BTreeMap, sync::Barrier, thread, time::Duration};

    use hopperfilter_config::{ConfigSource, PluginConfig};
    use hopperfilter_registry::{
        Identifier, IngredientSlot, RecipeRegistry, RecipeTable, RegistryError, ShapedRecipe,
    };
    use parking_lot::Mutex;

    use super::{describe, filtered_hopper_recipe, LifecycleState, RecipeManager};
    use crate::{
        item::{HopperItemFactory, ItemFactory},
        plugin::api::{Logger, PluginContext},
    };

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Notice {
        Info,
        Success,
        Warning,
        Error,
        Debug,
    }

    #[derive(Default)]
    struct RecordingLogger {
        notices: Mutex<Vec<(Notice, String)>>,
    }

    impl RecordingLogger {
        fn levels(&self) -> Vec<Notice> {
            self.notices.lock().iter().map(|(level, _)| *level).collect()
        }

        fn count(&self, level: Notice) -> usize {
            self.levels().into_iter().filter(|l| *l == level).count()
        }

        fn push(&self, level: Notice, message: &str) {
            self.notices.lock().push((level, message.to_string()));
        }
    }

    impl Logger for RecordingLogger {
        fn info(&self, message: &str) {
            self.push(Notice::Info, message);
        }
        fn success(&self, message: &str) {
            self.push(Notice::Success, message);
        }
        fn warning(&self, message: &str) {
            self.push(Notice::Warning, message);
        }
        fn error(&self, message: &str) {
            self.push(Notice::Error, message);
        }
        fn debug(&self, message: &str) {
            self.push(Notice::Debug, message);
        }
    }

    /// Records every call before handing it to a real table.
    #[derive(Default)]
    struct RecordingRegistry {
        table: RecipeTable,
        added: Mutex<Vec<ShapedRecipe>>,
        removed: Mutex<Vec<Identifier>>,
        reject_add: Option<RegistryError>,
        /// Parks `add` between the two barriers.
        add_gate: Option<(Barrier, Barrier)>,
    }

    impl RecipeRegistry for RecordingRegistry {
        fn add(&self, recipe: ShapedRecipe) -> Result<(), RegistryError> {
            self.added.lock().push(recipe.clone());
            if let Some((entered, release)) = &self.add_gate {
                entered.wait();
                release.wait();
            }
            if let Some(err) = &self.reject_add {
                return Err(err.clone());
            }
            self.table.add(recipe)
        }

        fn remove(&self, key: &Identifier) -> Result<ShapedRecipe, RegistryError> {
            self.removed.lock().push(key.clone());
            self.table.remove(key)
        }
    }

    struct TestContext {
        namespace: &'static str,
        config: PluginConfig,
        registry: RecordingRegistry,
        logger: RecordingLogger,
    }

    impl TestContext {
        fn with_config(config: &str) -> Self {
            Self {
                namespace: "hopperfilterx",
                config: PluginConfig::parse(config).unwrap(),
                registry: RecordingRegistry::default(),
                logger: RecordingLogger::default(),
            }
        }

        fn rejecting(err: RegistryError) -> Self {
            let mut context = Self::with_config("");
            context.registry.reject_add = Some(err);
            context
        }
    }

    impl PluginContext for TestContext {
        fn get_namespace(&self) -> &str {
            self.namespace
        }
        fn get_logger(&self) -> &dyn Logger {
            &self.logger
        }
        fn get_config(&self) -> &dyn ConfigSource {
            &self.config
        }
        fn get_recipes(&self) -> &dyn RecipeRegistry {
            &self.registry
        }
        fn get_item_factory(&self) -> &dyn ItemFactory {
            &HopperItemFactory
        }
    }

    fn output_key() -> Identifier {
        "hopperfilterx:filtered_hopper".parse().unwrap()
    }

    fn recipe_key() -> Identifier {
        "hopperfilterx:filtered_hopper_recipe".parse().unwrap()
    }

    #[test]
    fn enabled_registers_fixed_shape() {
        let context = TestContext::with_config("[recipe]\nenabled = true\n");
        let manager = RecipeManager::new();
        manager.initialize(&context, &output_key());

        let added = context.registry.added.lock();
        assert_eq!(added.len(), 1);
        let recipe = &added[0];
        assert_eq!(recipe.key(), &recipe_key());
        assert_eq!(recipe.rows(), ["IRI", "ICI", " I "]);

        let expected: BTreeMap<_, _> = [
            ('I', IngredientSlot::item(Identifier::vanilla("iron_ingot"))),
            ('R', IngredientSlot::item(Identifier::vanilla("redstone"))),
            ('C', IngredientSlot::item(Identifier::vanilla("chest"))),
        ]
        .into_iter()
        .collect();
        assert_eq!(recipe.ingredients(), &expected);
        assert_eq!(
            recipe.result(),
            &HopperItemFactory.create_filtered_hopper(&output_key())
        );

        assert!(context.registry.table.keys().contains(&recipe_key()));
        assert_eq!(context.logger.count(Notice::Success), 1);
        assert_eq!(context.logger.count(Notice::Warning), 0);
        assert_eq!(manager.state(), LifecycleState::Enabled(recipe_key()));
        assert_eq!(manager.recipe_key(), Some(recipe_key()));
    }

    #[test]
    fn missing_option_defaults_to_enabled() {
        let context = TestContext::with_config("");
        RecipeManager::new().initialize(&context, &output_key());
        assert_eq!(context.registry.added.lock().len(), 1);
    }

    #[test]
    fn disabled_skips_registry() {
        let context = TestContext::with_config("[recipe]\nenabled = false\n");
        let manager = RecipeManager::new();
        manager.initialize(&context, &output_key());

        assert!(context.registry.added.lock().is_empty());
        assert_eq!(context.logger.levels(), [Notice::Info]);
        assert_eq!(manager.state(), LifecycleState::Disabled(recipe_key()));

        manager.unregister_recipes(&context);
        assert!(context.registry.removed.lock().is_empty());
        assert_eq!(manager.state(), LifecycleState::TornDown);
    }

    #[test]
    fn duplicate_key_only_warns() {
        let context = TestContext::rejecting(RegistryError::DuplicateKey(recipe_key()));
        let manager = RecipeManager::new();
        manager.initialize(&context, &output_key());

        assert_eq!(context.registry.added.lock().len(), 1);
        assert_eq!(context.logger.levels(), [Notice::Warning]);
        assert_eq!(manager.state(), LifecycleState::Enabled(recipe_key()));
    }

    #[test]
    fn second_initialize_is_rejected_by_registry() {
        let context = TestContext::with_config("");
        let manager = RecipeManager::new();
        manager.initialize(&context, &output_key());
        manager.initialize(&context, &output_key());

        assert_eq!(context.registry.added.lock().len(), 2);
        assert_eq!(context.registry.table.len(), 1);
        assert_eq!(context.logger.count(Notice::Success), 1);
        assert_eq!(context.logger.count(Notice::Warning), 1);
    }

    #[test]
    fn other_failures_log_error_and_kind() {
        let context = TestContext::rejecting(RegistryError::Closed);
        RecipeManager::new().initialize(&context, &output_key());

        assert_eq!(context.logger.levels(), [Notice::Error, Notice::Debug]);
        let notices = context.logger.notices.lock();
        assert!(notices[0].1.contains("Recipe registry is closed"));
        assert!(notices[1].1.ends_with("Closed"));
    }

    #[test]
    fn invalid_namespace_is_reported() {
        let mut context = TestContext::with_config("");
        context.namespace = "Hopper Filter";
        let manager = RecipeManager::new();
        manager.initialize(&context, &output_key());

        assert!(context.registry.added.lock().is_empty());
        assert_eq!(context.logger.levels(), [Notice::Error]);
        assert_eq!(manager.state(), LifecycleState::Uninitialized);
    }

    #[test]
    fn unregister_twice_removes_once() {
        let context = TestContext::with_config("");
        let manager = RecipeManager::new();
        manager.initialize(&context, &output_key());

        manager.unregister_recipes(&context);
        manager.unregister_recipes(&context);

        assert_eq!(*context.registry.removed.lock(), [recipe_key()]);
        assert!(context.registry.table.is_empty());
        assert_eq!(manager.state(), LifecycleState::TornDown);
        assert_eq!(manager.recipe_key(), None);
    }

    #[test]
    fn unregister_before_initialize_is_noop() {
        let context = TestContext::with_config("");
        let manager = RecipeManager::new();
        manager.unregister_recipes(&context);

        assert!(context.registry.removed.lock().is_empty());
        assert!(context.logger.levels().is_empty());
        assert_eq!(manager.state(), LifecycleState::Uninitialized);

        manager.initialize(&context, &output_key());
        assert!(context.registry.table.keys().contains(&recipe_key()));
    }

    #[test]
    fn failed_removal_only_warns() {
        let context = TestContext::rejecting(RegistryError::Closed);
        let manager = RecipeManager::new();
        manager.initialize(&context, &output_key());
        manager.unregister_recipes(&context);

        assert_eq!(context.registry.removed.lock().len(), 1);
        assert_eq!(context.logger.levels().last(), Some(&Notice::Warning));
        assert_eq!(manager.state(), LifecycleState::TornDown);
    }

    #[test]
    fn initialize_after_teardown_is_ignored() {
        let context = TestContext::with_config("");
        let manager = RecipeManager::new();
        manager.initialize(&context, &output_key());
        manager.unregister_recipes(&context);
        manager.initialize(&context, &output_key());

        assert_eq!(context.registry.added.lock().len(), 1);
        assert!(context.registry.table.is_empty());
        assert_eq!(context.logger.levels().last(), Some(&Notice::Warning));
        assert_eq!(manager.state(), LifecycleState::TornDown);
    }

    #[test]
    fn recipe_uses_five_iron_ingots() {
        let recipe = filtered_hopper_recipe(
            recipe_key(),
            HopperItemFactory.create_filtered_hopper(&output_key()),
        )
        .unwrap();
        assert_eq!(
            recipe.describe_ingredients(),
            "5x minecraft:iron_ingot + 1x minecraft:redstone + 1x minecraft:chest"
        );
        assert_eq!(
            describe(&recipe),
            "5x minecraft:iron_ingot + 1x minecraft:redstone + 1x minecraft:chest = 1x Filtered Hopper"
        );
    }

    #[test]
    fn unknown_key_on_add_is_not_a_duplicate() {
        let context = TestContext::rejecting(RegistryError::UnknownKey(recipe_key()));
        RecipeManager::new().initialize(&context, &output_key());

        assert_eq!(context.logger.levels(), [Notice::Warning, Notice::Debug]);
        let notices = context.logger.notices.lock();
        assert!(notices[0].1.starts_with("Failed to register filtered hopper recipe"));
        assert!(notices[1].1.ends_with("UnknownKey"));
    }

    #[test]
    fn teardown_during_registration_still_removes() {
        let mut context = TestContext::with_config("");
        context.registry.add_gate = Some((Barrier::new(2), Barrier::new(2)));
        let manager = RecipeManager::new();

        thread::scope(|scope| {
            let (entered, release) = context.registry.add_gate.as_ref().unwrap();
            scope.spawn(|| manager.initialize(&context, &output_key()));
            entered.wait();
            scope.spawn(|| manager.unregister_recipes(&context));
            thread::sleep(Duration::from_millis(50));
            release.wait();
        });

        assert_eq!(context.registry.added.lock().len(), 1);
        assert_eq!(*context.registry.removed.lock(), [recipe_key()]);
        assert!(context.registry.table.is_empty());
        assert_eq!(manager.state(), LifecycleState::TornDown);
    }
}
