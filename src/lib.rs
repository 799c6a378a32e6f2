//! Interactive Hanami garden demos.
//!
//! Two small, unrelated console programs distilled from the Hanami
//! toy-language sample gardens:
//! - `hanami-pet` — a pet companion with a name/age pair, an owner-name
//!   prompt, and a derived dog-year value. The shipped program uses its
//!   companion slot before ever binding an entity to it, so every run stops
//!   with an absent-reference error right after the start banner. That
//!   failure is part of the observed behavior and is reproduced as-is.
//! - `hanami-flower` — a flower greeter that reads one name and answers
//!   with one of three fixed lines.
//!
//! ## Layers
//! - `domain/` — entities and their operations (data plus entity-owned
//!   console reporting).
//! - `drivers/` — per-program orchestration over generic reader/writer
//!   pairs; the binaries wire these to stdin/stdout.

pub mod domain;
pub mod drivers;
