//! Domain layer - Core types and pure scoring logic with no external dependencies
//!
//! This layer contains:
//! - Value Objects: content payloads, direction parameters, quality types
//! - Domain Services: benchmark comparison, classification, suggestions,
//!   and the built-in standards catalog

pub mod services;
pub mod value_objects;
