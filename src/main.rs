//! ratings - Store and query rating and review records
//!
//! Command-line front end over the `rating_review` library: validates
//! candidate reviews against the record schema and persists them in the
//! configured document store.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;
mod commands;

/// Main entry point for the ratings CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
