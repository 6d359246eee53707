//! Shared types and models for the Irrigation Advisory Platform
//!
//! This crate contains the domain model shared between the backend and any
//! presentation-layer clients, plus the pure irrigation decision engine and
//! its static reference tables.

pub mod irrigation;
pub mod models;
pub mod types;

pub use irrigation::*;
pub use models::*;
pub use types::*;
