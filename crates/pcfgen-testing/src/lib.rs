//! Testing infrastructure for pcfgen integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Fluent interface for declarative test setup
//! - `assertions`: Custom assertions for generated pages and JSON reports
//! - `fixtures`: Sample sheets, templates and configs

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
