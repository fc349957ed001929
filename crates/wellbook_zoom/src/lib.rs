// --- File: crates/wellbook_zoom/src/lib.rs ---
// Declare modules within this crate
pub mod logic;
#[cfg(test)]
mod logic_test;
pub mod service;
