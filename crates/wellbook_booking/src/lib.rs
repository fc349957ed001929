// --- File: crates/wellbook_booking/src/lib.rs ---
#[cfg(feature = "openapi")]
pub mod doc;
pub mod handlers;
pub mod logic;
pub mod routes;
#[cfg(test)]
mod routes_test;
pub mod validation;

pub use handlers::BookingState; // State for this crate's handlers
pub use routes::routes;
