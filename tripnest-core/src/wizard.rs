//! Wizard step sequencing, guarded navigation, and completion marking.
//!
//! Five steps, entered by route. Entering a step checks its preconditions
//! against the current [`TripState`]; a missing prerequisite resolves to a
//! silent redirect, never an error shown to the user. An unmatched route
//! redirects to the first step.

use crate::action::TripAction;
use crate::steps::{validate_details, DetailsForm, FieldError};
use crate::store::TripStore;
use crate::types::{FlightOption, SelectedActivity, StepIndex, TripState};
use thiserror::Error;
use tracing::{debug, info};

// ─── Step identifiers ─────────────────────────────────────────

/// The five wizard steps, in order. Persisted state carries the plain
/// [`StepIndex`], not this enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepId {
    Details,
    Activities,
    TravelTime,
    Flights,
    Itinerary,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("no wizard step with index {0}")]
pub struct InvalidStep(pub StepIndex);

impl StepId {
    /// 1-based position in the wizard.
    pub fn index(self) -> StepIndex {
        match self {
            StepId::Details => 1,
            StepId::Activities => 2,
            StepId::TravelTime => 3,
            StepId::Flights => 4,
            StepId::Itinerary => 5,
        }
    }

    pub fn from_index(index: StepIndex) -> Result<Self, InvalidStep> {
        match index {
            1 => Ok(StepId::Details),
            2 => Ok(StepId::Activities),
            3 => Ok(StepId::TravelTime),
            4 => Ok(StepId::Flights),
            5 => Ok(StepId::Itinerary),
            other => Err(InvalidStep(other)),
        }
    }

    pub fn route(self) -> &'static str {
        match self {
            StepId::Details => "/plan/details",
            StepId::Activities => "/plan/activities",
            StepId::TravelTime => "/plan/travel-time",
            StepId::Flights => "/plan/flights",
            StepId::Itinerary => "/plan/itinerary",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StepId::Details => "Trip Details",
            StepId::Activities => "Activities",
            StepId::TravelTime => "Travel Time",
            StepId::Flights => "Flights",
            StepId::Itinerary => "Itinerary",
        }
    }

    pub fn from_route(path: &str) -> Option<Self> {
        STEPS.iter().find(|s| s.route == path).map(|s| s.id)
    }
}

/// One entry in the static step directory.
#[derive(Clone, Copy, Debug)]
pub struct StepInfo {
    pub id: StepId,
    pub label: &'static str,
    pub route: &'static str,
}

/// The step directory — static configuration, not mutable state.
pub const STEPS: [StepInfo; 5] = [
    StepInfo {
        id: StepId::Details,
        label: "Trip Details",
        route: "/plan/details",
    },
    StepInfo {
        id: StepId::Activities,
        label: "Activities",
        route: "/plan/activities",
    },
    StepInfo {
        id: StepId::TravelTime,
        label: "Travel Time",
        route: "/plan/travel-time",
    },
    StepInfo {
        id: StepId::Flights,
        label: "Flights",
        route: "/plan/flights",
    },
    StepInfo {
        id: StepId::Itinerary,
        label: "Itinerary",
        route: "/plan/itinerary",
    },
];

// ─── Guards ───────────────────────────────────────────────────

/// Outcome of a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entry {
    Entered(StepId),
    Redirected { to: StepId },
}

/// Step-entry precondition check. Returns the redirect target when a
/// prerequisite is missing. Destination is checked before activities.
fn guard_redirect(step: StepId, state: &TripState) -> Option<StepId> {
    match step {
        StepId::Details | StepId::Itinerary => None,
        StepId::Activities | StepId::Flights => {
            state.destination.is_empty().then_some(StepId::Details)
        }
        StepId::TravelTime => {
            if state.destination.is_empty() {
                Some(StepId::Details)
            } else if state.activities.is_empty() {
                Some(StepId::Activities)
            } else {
                None
            }
        }
    }
}

// ─── Controller ───────────────────────────────────────────────

/// Sequences the wizard: resolves routes, enforces guards, tracks
/// completion. Owns the injected [`TripStore`] for the session.
pub struct WizardController {
    store: TripStore,
}

impl WizardController {
    pub fn new(store: TripStore) -> Self {
        Self { store }
    }

    pub fn state(&self) -> &TripState {
        self.store.state()
    }

    pub fn store_mut(&mut self) -> &mut TripStore {
        &mut self.store
    }

    /// Attempt to enter the step at `path`. On success the current step is
    /// committed to state; on guard failure nothing is mutated and the
    /// caller is told where to go instead.
    pub async fn enter(&mut self, path: &str) -> Entry {
        let Some(step) = StepId::from_route(path) else {
            debug!(path, "unknown route, redirecting to details");
            return Entry::Redirected {
                to: StepId::Details,
            };
        };
        if let Some(to) = guard_redirect(step, self.store.state()) {
            debug!(step = step.label(), to = to.label(), "guard redirect");
            return Entry::Redirected { to };
        }
        self.store
            .dispatch(TripAction::SetCurrentStep(step.index()))
            .await;
        Entry::Entered(step)
    }

    /// Validate and commit the Details form, marking step 1 complete.
    /// Field errors block progression and leave state untouched.
    pub async fn submit_details(&mut self, form: &DetailsForm) -> Result<(), Vec<FieldError>> {
        let errors = validate_details(form);
        if !errors.is_empty() {
            return Err(errors);
        }
        self.store
            .dispatch(TripAction::SetTripDetails(form.to_patch()))
            .await;
        self.store.dispatch(TripAction::CompleteStep(1)).await;
        info!(destination = %self.store.state().destination, "trip details committed");
        Ok(())
    }

    /// Commit the activity selection and mark step 2 complete. Requires at
    /// least one selected activity; returns false (and commits nothing)
    /// otherwise.
    pub async fn continue_activities(&mut self, selection: Vec<SelectedActivity>) -> bool {
        if selection.is_empty() {
            return false;
        }
        self.store
            .dispatch(TripAction::SetActivities(selection))
            .await;
        self.store.dispatch(TripAction::CompleteStep(2)).await;
        true
    }

    /// Mark step 3 complete. Unconditional: the recommendations are
    /// advisory and the user may keep their dates.
    pub async fn continue_travel_time(&mut self) {
        self.store.dispatch(TripAction::CompleteStep(3)).await;
    }

    /// Commit the selected flight and mark step 4 complete. With no
    /// selection this is a no-op returning false.
    pub async fn continue_flights(&mut self, selected: Option<FlightOption>) -> bool {
        let Some(flight) = selected else {
            return false;
        };
        self.store
            .dispatch(TripAction::SetFlights(vec![flight]))
            .await;
        self.store.dispatch(TripAction::CompleteStep(4)).await;
        true
    }

    /// Discard the whole plan and return to defaults.
    pub async fn reset(&mut self) {
        self.store.dispatch(TripAction::ResetTrip).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::TripDetailsPatch;
    use crate::store::MemorySnapshotStore;
    use crate::types::SelectedActivity;
    use std::sync::Arc;

    fn controller() -> WizardController {
        WizardController::new(TripStore::new(Arc::new(MemorySnapshotStore::new())))
    }

    async fn with_destination(dest: &str) -> WizardController {
        let mut c = controller();
        c.store_mut()
            .dispatch(TripAction::SetTripDetails(TripDetailsPatch {
                destination: Some(dest.into()),
                ..Default::default()
            }))
            .await;
        c
    }

    fn activity(id: u32) -> SelectedActivity {
        SelectedActivity {
            id,
            name: "Senso-ji Temple".into(),
            kind: "temple".into(),
            rating: 4.7,
            weather_at_selection: None,
        }
    }

    #[test]
    fn step_directory_is_ordered_and_routed() {
        assert_eq!(STEPS.len(), 5);
        for (i, info) in STEPS.iter().enumerate() {
            assert_eq!(info.id.index() as usize, i + 1);
            assert_eq!(StepId::from_route(info.route), Some(info.id));
        }
        assert_eq!(StepId::from_index(3), Ok(StepId::TravelTime));
        assert_eq!(StepId::from_index(0), Err(InvalidStep(0)));
        assert_eq!(StepId::from_index(6), Err(InvalidStep(6)));
    }

    #[tokio::test]
    async fn unknown_route_redirects_to_details() {
        let mut c = controller();
        assert_eq!(
            c.enter("/plan/bogus").await,
            Entry::Redirected {
                to: StepId::Details
            }
        );
        // Redirect does not touch current_step.
        assert_eq!(c.state().current_step, 1);
    }

    #[tokio::test]
    async fn activities_requires_destination() {
        let mut c = controller();
        assert_eq!(
            c.enter("/plan/activities").await,
            Entry::Redirected {
                to: StepId::Details
            }
        );

        let mut c = with_destination("Tokyo, Japan").await;
        assert_eq!(
            c.enter("/plan/activities").await,
            Entry::Entered(StepId::Activities)
        );
        assert_eq!(c.state().current_step, 2);
    }

    #[tokio::test]
    async fn travel_time_checks_destination_then_activities() {
        let mut c = controller();
        assert_eq!(
            c.enter("/plan/travel-time").await,
            Entry::Redirected {
                to: StepId::Details
            }
        );

        let mut c = with_destination("Tokyo").await;
        assert_eq!(
            c.enter("/plan/travel-time").await,
            Entry::Redirected {
                to: StepId::Activities
            }
        );

        c.store_mut()
            .dispatch(TripAction::SetActivities(vec![activity(1)]))
            .await;
        assert_eq!(
            c.enter("/plan/travel-time").await,
            Entry::Entered(StepId::TravelTime)
        );
    }

    #[tokio::test]
    async fn flights_requires_destination_only() {
        let mut c = controller();
        assert_eq!(
            c.enter("/plan/flights").await,
            Entry::Redirected {
                to: StepId::Details
            }
        );

        let mut c = with_destination("Paris").await;
        assert_eq!(
            c.enter("/plan/flights").await,
            Entry::Entered(StepId::Flights)
        );
    }

    #[tokio::test]
    async fn details_and_itinerary_are_unguarded() {
        let mut c = controller();
        assert_eq!(
            c.enter("/plan/details").await,
            Entry::Entered(StepId::Details)
        );
        assert_eq!(
            c.enter("/plan/itinerary").await,
            Entry::Entered(StepId::Itinerary)
        );
        assert_eq!(c.state().current_step, 5);
    }

    #[tokio::test]
    async fn continue_activities_requires_selection() {
        let mut c = with_destination("Tokyo").await;
        assert!(!c.continue_activities(Vec::new()).await);
        assert!(!c.state().completed_steps.contains(&2));

        assert!(c.continue_activities(vec![activity(1)]).await);
        assert!(c.state().completed_steps.contains(&2));
        assert_eq!(c.state().activities.len(), 1);
    }

    #[tokio::test]
    async fn continue_travel_time_is_unconditional() {
        let mut c = controller();
        c.continue_travel_time().await;
        assert_eq!(c.state().completed_steps, vec![3]);
    }

    #[tokio::test]
    async fn continue_flights_without_selection_is_noop() {
        let mut c = controller();
        assert!(!c.continue_flights(None).await);
        assert!(c.state().flights.is_empty());
        assert!(!c.state().completed_steps.contains(&4));
    }

    #[tokio::test]
    async fn continue_flights_commits_single_selection() {
        let flight = crate::types::FlightOption {
            id: 3,
            airline: "Japan Airlines".into(),
            flight_number: "JA4821".into(),
            departure_city: "New York, USA".into(),
            destination_city: "Tokyo, Japan".into(),
            departure_date: "2024-06-01".parse().unwrap(),
            return_date: "2024-06-08".parse().unwrap(),
            departure_time: "09:30".into(),
            arrival_time: "14:45".into(),
            duration: crate::types::FlightDuration {
                hours: 13,
                minutes: 15,
            },
            layover: None,
            price: 820,
            seats_available: 12,
        };

        let mut c = controller();
        assert!(c.continue_flights(Some(flight.clone())).await);
        assert_eq!(c.state().flights, vec![flight]);
        assert!(c.state().completed_steps.contains(&4));
    }
}
