// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing port implementations.
//!
//! Each adapter implements one trait from the ports layer for a concrete
//! technology: resources compiled into the binary, a directory on disk, or
//! the YAML format.

pub mod data_dir;
pub mod embedded;
#[cfg(feature = "yaml")]
pub mod yaml;

pub use data_dir::DataDirectory;
pub use embedded::EmbeddedResources;
#[cfg(feature = "yaml")]
pub use yaml::YamlParser;
