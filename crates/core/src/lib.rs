//! Order Desk Core - Shared domain types.
//!
//! This crate provides the types shared by every Order Desk component:
//! - `api` - The HTTP service exposing customers and orders
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP. Storage and schema support are opt-in via the `postgres` and
//! `openapi` features.
//!
//! # Modules
//!
//! - [`types`] - Identifier newtypes and the order status enumeration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
