// --- File: crates/wellbook_mailer/src/lib.rs ---
// Declare modules within this crate
pub mod logic;
pub mod service;
pub mod template;
#[cfg(test)]
mod template_test;
