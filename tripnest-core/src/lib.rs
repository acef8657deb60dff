//! TripNest core — the trip-planning wizard engine.
//!
//! A five-step wizard (Details → Activities → Travel Time → Flights →
//! Itinerary) over a single reducer-owned [`types::TripState`] record.
//! [`store::TripStore`] is the sole mutation path and snapshots every
//! transition; [`wizard::WizardController`] sequences the steps and
//! enforces entry guards; [`rank`] and [`weather`] hold the candidate
//! ranking and suitability logic each step applies to provider data.
//!
//! Data sources are abstract ([`provider`]); [`mock`] supplies demo
//! backends. Everything degrades gracefully: provider and persistence
//! failures are logged and swallowed, guard failures redirect silently.

pub mod action;
pub mod mock;
pub mod provider;
pub mod rank;
pub mod steps;
pub mod store;
pub mod types;
pub mod weather;
pub mod wizard;

pub use action::{TripAction, TripDetailsPatch};
pub use store::{JsonFileSnapshotStore, MemorySnapshotStore, SnapshotStore, TripStore};
pub use types::TripState;
pub use wizard::{Entry, StepId, WizardController, STEPS};
