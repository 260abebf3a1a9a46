//! Weather provider access
//!
//! - `open_weather`: HTTP client for the OpenWeatherMap current weather endpoint
//! - `recorder`: where hidden failure details end up

pub mod open_weather;
pub mod recorder;

pub use open_weather::{OpenWeatherClient, UNITS};
pub use recorder::{ErrorRecorder, MemoryRecorder, TracingRecorder};
