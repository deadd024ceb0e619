// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loads a bundled YAML configuration resource and reads one value from it.
//!
//! The crate is deliberately small: a [`ConfigLoader`](service::ConfigLoader)
//! turns a resource name into a parsed [`ConfigDocument`](domain::ConfigDocument),
//! and a [`DemoValueAccessor`](service::DemoValueAccessor) pulls the `demo` key
//! out of `demo.yaml`. The `monorepo` binary prints that value.
//!
//! # Architecture
//!
//! - **Domain Layer**: Core types (`ConfigDocument`, `ConfigValue`, `ResourceLocation`, errors)
//! - **Ports**: Trait definitions (`ConfigParser`, `ResourceProvider`)
//! - **Adapters**: Embedded bundled data, a filesystem data directory and the YAML parser
//! - **Service**: The loader and the demo accessor
//!
//! The bundled `data/` directory is compiled into the binary. The loader receives
//! its resource provider as a dependency, so it can be pointed at any directory
//! instead.
//!
//! # Feature Flags
//!
//! - `yaml`: Enable the YAML parser and the bundled loader (default)
//! - `cli`: Build the `monorepo` binary (default)
//!
//! # Quick Start
//!
//! ```rust
//! use monorepo::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let value = DemoValueAccessor::new(ConfigLoader::bundled()).get_demo_value()?;
//! assert_eq!(value, ConfigValue::Integer(10));
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{ConfigDocument, ConfigError, ConfigValue, ResourceLocation, Result};
    pub use crate::ports::{ConfigParser, ResourceProvider};
    pub use crate::service::{ConfigLoader, DemoValueAccessor};

    pub use crate::adapters::{DataDirectory, EmbeddedResources};
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlParser;
}
