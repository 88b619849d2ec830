// Models module

pub mod health;

// Re-export commonly used types
pub use health::HealthResponse;
