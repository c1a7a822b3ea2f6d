// Shared kernel used by every module

pub mod application; // Query trait for CQRS-style handlers
pub mod config; // Environment-driven configuration
pub mod errors; // Shared error types
pub mod infrastructure; // Database pool and migrations
pub mod utils; // Logging helpers

pub use config::DatabaseConfig;
pub use infrastructure::database::Database;
