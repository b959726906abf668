//! Row models and insert payloads.

pub mod character;
