#![deny(clippy::all)]

pub mod error;
pub mod item;
pub mod plugin;
pub mod recipe;
