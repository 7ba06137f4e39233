//! Domain layer: cash value objects, denomination tables, and the
//! per-country money factories.

pub mod cash;
pub mod denomination;
pub mod factory;
