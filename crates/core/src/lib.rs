//! Shared types and the domain error taxonomy.

pub mod error;
pub mod types;
