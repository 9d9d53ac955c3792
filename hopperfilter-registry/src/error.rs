use thiserror::Error;

use crate::Identifier;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Duplicate recipe ignored with ID {0}")]
    DuplicateKey(Identifier),
    #[error("No recipe registered with ID {0}")]
    UnknownKey(Identifier),
    #[error("Recipe registry is closed")]
    Closed,
    #[error("Invalid recipe {key}: {reason}")]
    InvalidRecipe { key: Identifier, reason: String },
}

impl RegistryError {
    /// Short name of the failure, used in debug output.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateKey(_) => "DuplicateKey",
            Self::UnknownKey(_) => "UnknownKey",
            Self::Closed => "Closed",
            Self::InvalidRecipe { .. } => "InvalidRecipe",
        }
    }
}
