//! Command implementations for the NBA clustering CLI

pub mod cluster;
pub mod common;
pub mod roster;
pub mod stats;

pub use common::ApiContext;
