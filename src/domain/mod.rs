//! Entity layer.
//!
//! ## Purpose
//! - Keep each demo's entity and its operations in one place.
//! - Entities own their status/greeting lines; drivers only orchestrate.
//!
//! ## Files
//! - `companion.rs` — mutable name/age companion, dog-year conversion,
//!   absent-reference error.
//! - `flower.rs` — read-only flower with a fixed greeting.
//!
//! ## Rule of thumb
//! No entity reads input or branches on it; classification and prompting
//! live in `drivers/*`.

pub mod companion;
pub mod flower;
