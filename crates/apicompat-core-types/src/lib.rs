//! Core types shared across apicompat facilities
//!
//! This crate provides the canonical field keys and event names used by
//! both the error facility and the logging facility, so that every
//! structured event emitted during classification has the same shape.

pub mod schema;
