//! # Event Bus Module
//!
//! Synchronous publish/subscribe used to keep a UI in step with the model:
//! - the figure storage publishes `CanvasEvent::Updated` after each mutation
//! - the command manager publishes `HistoryEvent::CountsChanged`
//! - drawing settings publish `SettingsEvent`s when a value actually changes
//!
//! ## Usage
//!
//! ```rust
//! use figurekit_core::event_bus::{DrawingEvent, EventBus, EventCategory, EventFilter};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::History]),
//!     |event| {
//!         if let DrawingEvent::History(h) = event {
//!             println!("history: {:?}", h);
//!         }
//!     },
//! );
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
