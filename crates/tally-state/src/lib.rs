//! Runtime state for the tally time tracker.
//!
//! Two independent pieces glue the UI together:
//! - [`EventBus`]: a synchronous, in-process publish/subscribe broker
//! - [`Store`]: a reactive value cell, three of which live in [`AppState`]
//!
//! Everything here is single-threaded and run-to-completion; `&mut self`
//! receivers make exclusive mutation a compile-time fact.

pub mod app;
pub mod bus;
pub mod store;

pub use app::{AppState, StateError};
pub use bus::{BusEvent, EventBus, SubscriptionId};
pub use store::{ObserverId, Store};
