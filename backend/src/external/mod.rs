//! External API integrations

pub mod agweather;
pub mod openweather;

pub use agweather::AgWeatherClient;
pub use openweather::OpenWeatherClient;
