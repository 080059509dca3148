//! Shared test fixtures for ChoiceForge crates.
//!
//! This crate provides data for testing. It depends only on
//! `choiceforge-core` so every other crate can use it as a dev-dependency.
//!
//! - [`demo`] - The demo catalogue of options and rules
//! - [`layouts`] - Small keyed layouts for eviction and validation tests
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! choiceforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use choiceforge_test::demo::{demo_layout, DEMO_RULES};
//! use choiceforge_test::layouts::two_sections;
//! ```

pub mod demo;
pub mod layouts;

pub use demo::{demo_layout, DemoCatalogue, DEMO_RULES};
pub use layouts::{single_section, two_sections, KeyedLayout};
