//! Domain models for the Irrigation Advisory Platform

pub mod crop;
pub mod location;
pub mod soil;
pub mod weather;

pub use crop::*;
pub use location::*;
pub use soil::*;
pub use weather::*;
