//! Core domain concepts shared across all subdomains.
//!
//! - [`quote::Quote`] — a newline-normalized quote ready to serve

pub mod quote;
