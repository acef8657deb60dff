//! External data provider interfaces.
//!
//! The core is provider-agnostic: steps consume these traits and never care
//! whether the backend is a mock table or a real API client. Fetch failures
//! are caught at the call site and degrade to empty candidate sets.

use crate::types::{ActivityCandidate, AgeGroup, FlightOption, Forecast, TravelWindow};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Forecast and time-of-year recommendations for a destination.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Ordered 5-day forecast; the first day is "today".
    async fn get_forecast(&self, destination: &str) -> Result<Forecast>;

    /// Recommended travel windows for the destination.
    async fn get_better_travel_times(&self, destination: &str) -> Result<Vec<TravelWindow>>;
}

/// Attraction candidates for a destination, bucketed by age group.
#[async_trait]
pub trait AttractionsProvider: Send + Sync {
    async fn get_candidates(
        &self,
        destination: &str,
        group: AgeGroup,
    ) -> Result<Vec<ActivityCandidate>>;
}

/// Round-trip flight search.
#[async_trait]
pub trait FlightProvider: Send + Sync {
    async fn search(
        &self,
        origin: &str,
        destination: &str,
        depart: NaiveDate,
        ret: NaiveDate,
    ) -> Result<Vec<FlightOption>>;
}
