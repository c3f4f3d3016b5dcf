//! Backend communication.
//!
//! # Services
//!
//! - [`upload`] - batch submission to the conversion server and the
//!   per-file result wire types

pub mod upload;

pub use upload::*;
