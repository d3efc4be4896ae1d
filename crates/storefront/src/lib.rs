//! Lumière Storefront - the boutique's client-side store, as a library.
//!
//! This crate holds everything that used to live behind the page's event
//! handlers, stripped of any rendering technology:
//!
//! - [`cart`] / [`favorites`] - the persisted cart and favorite set
//! - [`catalog`] - the transient category/search/sort view over products
//! - [`storage`] - the key-value persistence capability and its backends
//! - [`events`] / [`notifications`] - semantic event fan-out and the toast
//!   queue the presentation layer drains
//! - [`slider`] / [`newsletter`] - the hero slider rotation state and the
//!   validated newsletter signup
//! - [`state`] - the single owned [`state::Storefront`] aggregate that
//!   handlers hold instead of ambient globals
//!
//! Everything is synchronous and single-writer: one user, one tab, one
//! mutation at a time. Persistence failures are soft - the in-memory state
//! stays authoritative for the session and failures surface as
//! diagnostics, never as crashes.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod favorites;
pub mod newsletter;
pub mod notifications;
pub mod slider;
pub mod state;
pub mod storage;

pub use error::{Result, StoreError};
