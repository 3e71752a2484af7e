//! Shared fixtures and assertions for settings-core integration tests

#![allow(dead_code)]

mod assertions;
mod fixtures;

pub use assertions::*;
pub use fixtures::*;
