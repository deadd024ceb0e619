// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer.
//!
//! The loader and the demonstration accessor built on top of it.

pub mod demo;
pub mod loader;

#[cfg(feature = "yaml")]
pub use demo::get_demo_value;
pub use demo::{DemoValueAccessor, DEMO_KEY, DEMO_RESOURCE};
pub use loader::ConfigLoader;
