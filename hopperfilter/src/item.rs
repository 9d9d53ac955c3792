use hopperfilter_registry::{Identifier, ItemStack};

pub const FILTERED_HOPPER_NAME: &str = "Filtered Hopper";

/// Builds the special items handed out by the plugin.
pub trait ItemFactory: Send + Sync {
    fn create_filtered_hopper(&self, key: &Identifier) -> ItemStack;
}

/// A plain hopper renamed and tagged with the filtered hopper key.
#[derive(Debug, Default, Clone, Copy)]
pub struct HopperItemFactory;

impl ItemFactory for HopperItemFactory {
    fn create_filtered_hopper(&self, key: &Identifier) -> ItemStack {
        ItemStack::new(Identifier::vanilla("hopper"), 1)
            .with_custom_name(FILTERED_HOPPER_NAME)
            .with_marker(key.clone())
    }
}
