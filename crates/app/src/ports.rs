//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod classifier;
pub mod clock;
pub mod health_sensor;
pub mod weather_provider;

pub use classifier::WeatherClassifier;
pub use clock::{Clock, SystemClock};
pub use health_sensor::HealthSensor;
pub use weather_provider::WeatherProvider;
