use hopperfilter_registry::RegistryError;
use std::fmt::Display;

/// Errors the plugin recovers from by reporting them instead of failing.
pub trait HopperError: Send + std::error::Error + Display {
    fn severity(&self) -> log::Level;

    /// Short name of the failure for debug output.
    fn kind(&self) -> &'static str;
}

impl HopperError for RegistryError {
    fn severity(&self) -> log::Level {
        match self {
            Self::DuplicateKey(_) | Self::UnknownKey(_) => log::Level::Warn,
            Self::Closed | Self::InvalidRecipe { .. } => log::Level::Error,
        }
    }

    fn kind(&self) -> &'static str {
        RegistryError::kind(self)
    }
}
