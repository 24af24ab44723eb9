//! Core types for the Sari-Sari cart.

pub mod entry;

pub use entry::CartEntry;
