//! Rule-based prompt and validation engine for LLM itinerary generation.
//!
//! Encodes the business rules that guide LLM-generated travel
//! itineraries, renders them as a deterministic text block for prompt
//! assembly, and spot-checks the structured content the model returns.
//!
//! # Modules
//!
//! - **`models`**: Domain types — [`RulesConfig`](models::RulesConfig),
//!   [`CostLevel`](models::CostLevel), [`TimeSlot`](models::TimeSlot),
//!   [`ItineraryActivity`](models::ItineraryActivity)
//! - **`validation`**: [`ValidationResult`](validation::ValidationResult)
//!   (hard violations + soft warnings)
//! - **`engine`**: [`RulesEngine`](engine::RulesEngine) — duration and
//!   budget gating, content validators, time-slot classification,
//!   overlap detection, rules-document rendering
//!
//! # Architecture
//!
//! Everything is value-in, value-out: no I/O, no clock, no randomness.
//! The engine's configuration is fixed at construction, so instances
//! are safe to share across threads without coordination. HTTP routing,
//! persistence, and the LLM call itself live in the surrounding
//! application and consume this crate through plain function calls.

pub mod engine;
pub mod models;
pub mod validation;
