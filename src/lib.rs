//! Core of the Tahrir publishing platform.
//!
//! The crate holds the parts with real invariants: the article lifecycle,
//! comment moderation, and the authentication/two-factor state machine.
//! Persistence, search indexing, and outbound delivery are consumed through
//! ports and supplied by the composition root.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
