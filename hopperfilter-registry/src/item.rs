use serde::{Deserialize, Serialize};

use crate::Identifier;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item: Identifier,
    pub count: u8,
    /// Display name shown instead of the item's translated name.
    pub custom_name: Option<String>,
    /// Plugin owned tag used to recognise special items, e.g. a filtered hopper.
    pub marker: Option<Identifier>,
}

impl ItemStack {
    pub fn new(item: Identifier, count: u8) -> Self {
        Self {
            item,
            count,
            custom_name: None,
            marker: None,
        }
    }

    #[must_use]
    pub fn with_custom_name(mut self, name: impl Into<String>) -> Self {
        self.custom_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Identifier) -> Self {
        self.marker = Some(marker);
        self
    }
}
