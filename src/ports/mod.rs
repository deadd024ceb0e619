// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! These traits are the seams between the loader and the outside world: where
//! resource text comes from, and how it is parsed. Adapters implement them.

pub mod parser;
pub mod resource;

// Re-export commonly used types
pub use parser::ConfigParser;
pub use resource::ResourceProvider;
