//! Business logic services for the Irrigation Advisory Platform

pub mod crop;
pub mod history;
pub mod irrigation;
pub mod location;
pub mod notification;
pub mod soil;
pub mod weather;

pub use crop::CropSelectionService;
pub use history::HistoryService;
pub use irrigation::IrrigationService;
pub use location::LocationService;
pub use notification::NotificationService;
pub use soil::SoilService;
pub use weather::WeatherService;
