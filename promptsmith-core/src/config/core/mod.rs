pub mod engine;
pub mod logging;
pub mod validation;

pub use engine::EngineConfig;
pub use logging::LoggingConfig;
pub use validation::ValidationConfig;
