//! Trip actions and the pure reducer.
//!
//! Every mutation of [`TripState`] is expressed as a [`TripAction`] variant
//! and applied by [`reduce`]. The enum is closed and the match exhaustive,
//! so "unhandled action kind" is a compile error rather than a silent no-op.

use crate::types::{
    FlightOption, Forecast, SelectedActivity, StepIndex, TravelWindow, Travelers, TripState,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── Details patch ────────────────────────────────────────────

/// Partial update for the Details fields. Absent fields are left untouched
/// by the reducer. The caller recomputes `num_days` whenever it supplies
/// either date.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TripDetailsPatch {
    pub destination: Option<String>,
    pub departure_city: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub num_days: Option<u32>,
    pub travelers: Option<Travelers>,
    pub needs_medical_assistance: Option<bool>,
}

// ─── Actions ──────────────────────────────────────────────────

/// One state transition request against [`TripState`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TripAction {
    /// Shallow-merge Details fields into the state.
    SetTripDetails(TripDetailsPatch),
    /// Replace the selected activities wholesale (not merged).
    SetActivities(Vec<SelectedActivity>),
    SetWeatherData(Forecast),
    SetBetterTravelTimes(Vec<TravelWindow>),
    SetFlights(Vec<FlightOption>),
    SetCurrentStep(StepIndex),
    /// Add a step to the completed set; idempotent.
    CompleteStep(StepIndex),
    /// Restore all-defaults state.
    ResetTrip,
}

// ─── Reducer ──────────────────────────────────────────────────

/// Apply one action. Pure, total, deterministic; no side effects.
/// Persistence happens outside, in [`crate::store::TripStore`].
pub fn reduce(state: &TripState, action: &TripAction) -> TripState {
    let mut next = state.clone();
    match action {
        TripAction::SetTripDetails(patch) => {
            if let Some(destination) = &patch.destination {
                next.destination = destination.clone();
            }
            if let Some(departure_city) = &patch.departure_city {
                next.departure_city = departure_city.clone();
            }
            if let Some(start) = patch.start_date {
                next.start_date = Some(start);
            }
            if let Some(end) = patch.end_date {
                next.end_date = Some(end);
            }
            if let Some(num_days) = patch.num_days {
                next.num_days = num_days;
            }
            if let Some(travelers) = &patch.travelers {
                next.travelers = travelers.clone();
            }
            if let Some(medical) = patch.needs_medical_assistance {
                next.needs_medical_assistance = medical;
            }
        }
        TripAction::SetActivities(activities) => next.activities = activities.clone(),
        TripAction::SetWeatherData(forecast) => next.weather_data = Some(forecast.clone()),
        TripAction::SetBetterTravelTimes(windows) => next.better_travel_times = windows.clone(),
        TripAction::SetFlights(flights) => next.flights = flights.clone(),
        TripAction::SetCurrentStep(step) => next.current_step = *step,
        TripAction::CompleteStep(step) => {
            if !next.completed_steps.contains(step) {
                next.completed_steps.push(*step);
            }
        }
        TripAction::ResetTrip => next = TripState::default(),
    }
    next
}
