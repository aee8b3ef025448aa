//! Infrastructure adapters (database backends).

pub mod persistence;
