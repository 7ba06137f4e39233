use crate::domain::factory::{MalayMoneyFactory, MoneyFactory, ThaiMoneyFactory};
use crate::error::{MintError, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Lazily caches one factory per country code.
///
/// An explicit object rather than process-global state, so callers (and
/// tests) can hold independent registries. Within one registry the
/// singleton guarantee holds: repeated lookups for a code return clones of
/// the same `Arc`, pointer-equal to the first.
///
/// The system is single-threaded, so `get_instance` takes `&mut self` and
/// needs no lock; shared use means wrapping the registry in a mutex.
#[derive(Default)]
pub struct FactoryRegistry {
    factories: HashMap<String, Arc<dyn MoneyFactory>>,
}

impl FactoryRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the factory for a 2-letter country code, constructing and
    /// caching it on first use.
    ///
    /// Codes match exactly; callers normalize case. The cache is consulted
    /// before the code is checked against the known countries.
    pub fn get_instance(&mut self, country_code: &str) -> Result<Arc<dyn MoneyFactory>> {
        if let Some(factory) = self.factories.get(country_code) {
            return Ok(Arc::clone(factory));
        }

        let factory: Arc<dyn MoneyFactory> = match country_code {
            "TH" => Arc::new(ThaiMoneyFactory),
            "MY" => Arc::new(MalayMoneyFactory),
            _ => return Err(MintError::UnknownCountry(country_code.to_string())),
        };

        self.factories
            .insert(country_code.to_string(), Arc::clone(&factory));
        Ok(factory)
    }
}
