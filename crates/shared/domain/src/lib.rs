//! # Domain Models
//!
//! This crate contains pure form-field types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, no validation logic. Just configuration data, the raw value
//! shapes callers can assign, and the hint message tables.

pub mod config;
pub mod constants;
pub mod hints;
pub mod value;
