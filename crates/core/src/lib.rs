//! LunaDesire Core - Shared storefront types.
//!
//! This crate provides the types the storefront renders from:
//! - prices and the badge rules derived from them
//! - cursor-paginated connections
//! - storefront locales
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Prices, connections and locales

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
