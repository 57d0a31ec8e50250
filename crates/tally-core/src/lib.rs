//! Data model for the tally time tracker.
//!
//! This crate contains the fundamental types shared by the rest of the
//! application:
//! - Category: a trackable activity with accumulated time and a daily goal
//! - `TimeInterval`: an open tracking session, start instant only
//! - `IconKey`: the closed set of icon identities and their render handles

pub mod category;
pub mod icon;
pub mod interval;

pub use category::{Category, CategoryId, CategoryName, ValidationError};
pub use icon::{IconHandle, IconKey, UnknownIconKey};
pub use interval::TimeInterval;
