//! HTTP handlers for the Irrigation Advisory Platform

pub mod crop;
pub mod health;
pub mod location;
pub mod notification;
pub mod recommendation;
pub mod soil;
pub mod weather;

pub use crop::*;
pub use health::*;
pub use location::*;
pub use notification::*;
pub use recommendation::*;
pub use soil::*;
pub use weather::*;
