// SPDX-License-Identifier: MIT OR Apache-2.0

//! Access to the demonstration value.

use crate::domain::{ConfigError, ConfigValue, Result};
use crate::ports::{ConfigParser, ResourceProvider};
use crate::service::loader::ConfigLoader;

/// Name of the bundled demonstration resource.
pub const DEMO_RESOURCE: &str = "demo.yaml";

/// Key holding the demonstration value.
pub const DEMO_KEY: &str = "demo";

/// Reads the `demo` key of `demo.yaml`.
///
/// Each call reloads the resource; no state is kept between calls.
///
/// # Examples
///
/// ```rust
/// use monorepo::domain::ConfigValue;
/// use monorepo::service::{ConfigLoader, DemoValueAccessor};
///
/// let accessor = DemoValueAccessor::new(ConfigLoader::bundled());
/// assert_eq!(accessor.get_demo_value().unwrap(), ConfigValue::Integer(10));
/// ```
#[derive(Debug, Clone)]
pub struct DemoValueAccessor<R, P> {
    loader: ConfigLoader<R, P>,
}

impl<R, P> DemoValueAccessor<R, P>
where
    R: ResourceProvider,
    P: ConfigParser,
{
    /// Creates an accessor that loads through `loader`.
    pub fn new(loader: ConfigLoader<R, P>) -> Self {
        Self { loader }
    }

    /// Returns the value bound to `demo`, exactly as parsed.
    ///
    /// # Errors
    ///
    /// Loader errors are returned unchanged; `KeyNotFound` if the document
    /// has no `demo` key.
    pub fn get_demo_value(&self) -> Result<ConfigValue> {
        self.loader
            .load(DEMO_RESOURCE)?
            .into_inner()
            .remove(DEMO_KEY)
            .ok_or_else(|| ConfigError::KeyNotFound {
                key: DEMO_KEY.to_string(),
            })
    }

    /// Returns the demonstration value, asserting that it is an integer.
    pub fn get_demo_integer(&self) -> Result<i64> {
        self.get_demo_value()?.expect_i64(DEMO_KEY)
    }
}

/// Reads the demonstration value from the bundled data directory.
#[cfg(feature = "yaml")]
pub fn get_demo_value() -> Result<ConfigValue> {
    DemoValueAccessor::new(ConfigLoader::bundled()).get_demo_value()
}
