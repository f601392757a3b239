//! # vantage-core
//!
//! Core types and pure logic shared by every Vantage crate.
//!
//! This crate provides:
//! - Entity structs for the dashboard domain (projects, insights, models, analyses)
//! - Status, risk, and priority enums
//! - The project filter/sort/stats view used by the projects page
//! - Cross-cutting error types
//! - A JSON Schema registry for the entity types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod filter;
pub mod schema;
