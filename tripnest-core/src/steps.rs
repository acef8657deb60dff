//! Step-entry lifecycle: the async loads each data-bearing step runs on
//! entry, and the Details form validation.
//!
//! Loads are explicit hooks, not render side effects: entering a step runs
//! its loader, readiness is the join of all outstanding fetches, and any
//! fetch failure degrades that slot to empty. Loader results are step-local;
//! shared [`TripState`] receives only explicit action commits. A result
//! abandoned by navigating away is dropped with the future and never reaches
//! shared state. No fetch has a timeout or retry.

use crate::action::{TripAction, TripDetailsPatch};
use crate::provider::{AttractionsProvider, FlightProvider, WeatherProvider};
use crate::store::TripStore;
use crate::types::{
    trip_length_days, ActivityCandidate, AgeGroup, FlightOption, Forecast, TravelWindow,
    Travelers,
};
use chrono::NaiveDate;
use tracing::warn;

// ─── Details form ─────────────────────────────────────────────

/// Raw user input for the Details step, pre-validation.
#[derive(Clone, Debug, Default)]
pub struct DetailsForm {
    pub destination: String,
    pub departure_city: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub travelers: Travelers,
    pub needs_medical_assistance: bool,
}

impl DetailsForm {
    /// Build the reducer patch, recomputing `num_days` from the dates.
    /// Call only after [`validate_details`] passed.
    pub fn to_patch(&self) -> TripDetailsPatch {
        let num_days = match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some(trip_length_days(start, end)),
            _ => None,
        };
        TripDetailsPatch {
            destination: Some(self.destination.clone()),
            departure_city: Some(self.departure_city.clone()),
            start_date: self.start_date,
            end_date: self.end_date,
            num_days,
            travelers: Some(self.travelers.clone()),
            needs_medical_assistance: Some(self.needs_medical_assistance),
        }
    }
}

/// A per-field validation failure. Non-fatal; blocks progression only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)
    }
}

fn field_error(field: &str, message: &str) -> FieldError {
    FieldError {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Validate the Details form. Returns all errors found.
pub fn validate_details(form: &DetailsForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if form.destination.trim().is_empty() {
        errors.push(field_error("destination", "Destination is required"));
    }
    if form.departure_city.trim().is_empty() {
        errors.push(field_error("departureCity", "Departure city is required"));
    }
    if form.start_date.is_none() {
        errors.push(field_error("startDate", "Start date is required"));
    }
    match (form.start_date, form.end_date) {
        (_, None) => errors.push(field_error("endDate", "End date is required")),
        (Some(start), Some(end)) if end < start => {
            errors.push(field_error("endDate", "End date must be after start date"));
        }
        _ => {}
    }
    if form.travelers.total() == 0 {
        errors.push(field_error("travelers", "At least one traveler is required"));
    }

    errors
}

// ─── Activities step ──────────────────────────────────────────

/// Attraction candidates bucketed by age group. Groups with no travelers
/// are never fetched and stay empty.
#[derive(Clone, Debug, Default)]
pub struct GroupedCandidates {
    pub kids: Vec<ActivityCandidate>,
    pub adults_under_50: Vec<ActivityCandidate>,
    pub adults_over_50: Vec<ActivityCandidate>,
}

/// Step-local data slot for the Activities step.
#[derive(Clone, Debug, Default)]
pub struct ActivityStepData {
    pub forecast: Option<Forecast>,
    pub groups: GroupedCandidates,
}

async fn fetch_group(
    attractions: &dyn AttractionsProvider,
    destination: &str,
    group: AgeGroup,
    traveler_count: u32,
) -> Vec<ActivityCandidate> {
    if traveler_count == 0 {
        return Vec::new();
    }
    match attractions.get_candidates(destination, group).await {
        Ok(candidates) => candidates,
        Err(e) => {
            warn!(?group, error = %e, "attraction fetch failed");
            Vec::new()
        }
    }
}

/// Entry hook for the Activities step.
///
/// Fetches the forecast (committed to shared state on success) and the
/// attraction candidates for every age group with at least one traveler.
/// The group fetches run concurrently; the step is ready when all settle.
pub async fn load_activities_step(
    store: &mut TripStore,
    weather: &dyn WeatherProvider,
    attractions: &dyn AttractionsProvider,
) -> ActivityStepData {
    let destination = store.state().destination.clone();
    let travelers = store.state().travelers.clone();

    let forecast = match weather.get_forecast(&destination).await {
        Ok(forecast) => Some(forecast),
        Err(e) => {
            warn!(error = %e, "forecast fetch failed");
            None
        }
    };
    if let Some(forecast) = &forecast {
        store
            .dispatch(TripAction::SetWeatherData(forecast.clone()))
            .await;
    }

    let (kids, adults_under_50, adults_over_50) = tokio::join!(
        fetch_group(attractions, &destination, AgeGroup::Kids, travelers.kids),
        fetch_group(
            attractions,
            &destination,
            AgeGroup::AdultsUnder50,
            travelers.adults_under_50,
        ),
        fetch_group(
            attractions,
            &destination,
            AgeGroup::AdultsOver50,
            travelers.adults_over_50,
        ),
    );

    ActivityStepData {
        forecast,
        groups: GroupedCandidates {
            kids,
            adults_under_50,
            adults_over_50,
        },
    }
}

// ─── Travel-time step ─────────────────────────────────────────

/// Entry hook for the TravelTime step. Commits the windows to shared state
/// on success; a fetch failure leaves both the slot and state empty.
pub async fn load_travel_time_step(
    store: &mut TripStore,
    weather: &dyn WeatherProvider,
) -> Vec<TravelWindow> {
    let destination = store.state().destination.clone();
    match weather.get_better_travel_times(&destination).await {
        Ok(windows) => {
            store
                .dispatch(TripAction::SetBetterTravelTimes(windows.clone()))
                .await;
            windows
        }
        Err(e) => {
            warn!(error = %e, "travel time fetch failed");
            Vec::new()
        }
    }
}

// ─── Flights step ─────────────────────────────────────────────

/// Entry hook for the Flights step. Candidates stay step-local until the
/// user selects one; only [`crate::wizard::WizardController::continue_flights`]
/// writes into shared state.
pub async fn load_flights_step(
    store: &TripStore,
    flights: &dyn FlightProvider,
) -> Vec<FlightOption> {
    let state = store.state();
    let (Some(depart), Some(ret)) = (state.start_date, state.end_date) else {
        warn!("flight search skipped: trip dates not set");
        return Vec::new();
    };
    match flights
        .search(&state.departure_city, &state.destination, depart, ret)
        .await
    {
        Ok(candidates) => candidates,
        Err(e) => {
            warn!(error = %e, "flight search failed");
            Vec::new()
        }
    }
}
