// --- File: crates/wellbook_common/src/lib.rs ---

// Declare modules within this crate
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod services; // Service abstractions

// Re-export the shared HTTP client for easier access
pub use http::client::HTTP_CLIENT;

// This crate provides common functionality that can be used across the application.
// It includes the service abstractions, the shared HTTP client, and logging setup.
