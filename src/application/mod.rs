//! Application layer: the registry that resolves country codes to their
//! singleton money factories.

pub mod registry;
