//! Request middleware.
//!
//! Purpose: cross-cutting request lifecycle concerns. Currently only request
//! correlation and access logging via [`Trace`].

pub mod trace;

pub use trace::Trace;
