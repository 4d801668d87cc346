//! Change notification.
//!
//! - `event`: the fixed `GameEvent` tag vocabulary
//! - `observers`: callback registry with subscribe/unsubscribe handles

pub mod event;
pub mod observers;

pub use event::GameEvent;
pub use observers::{Observer, ObserverRegistry, SubscriberId};
