// Handlers module
// HTTP handlers exposed by the API

pub mod health;

pub use health::health_check;
