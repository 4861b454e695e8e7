//! Core types for Order Desk.

pub mod id;
pub mod status;

pub use id::*;
pub use status::*;
