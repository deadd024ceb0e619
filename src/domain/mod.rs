// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module holds the values the rest of the crate passes around: parsed
//! documents, their dynamically typed values, resource names and errors. It
//! is independent of any file format or storage concern.

pub mod config_document;
pub mod config_value;
pub mod errors;
pub mod resource_location;

// Re-export commonly used types
pub use config_document::ConfigDocument;
pub use config_value::ConfigValue;
pub use errors::{ConfigError, Result};
pub use resource_location::ResourceLocation;
