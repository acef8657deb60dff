//! End-to-end wizard walk against the mock providers.
//!
//! Run with `RUST_LOG=debug cargo run --bin plan_demo` to watch the step
//! transitions and snapshot writes.

use chrono::{Duration, Utc};
use std::sync::Arc;
use tripnest_core::mock::{MockAttractionsProvider, MockFlightProvider, MockWeatherProvider};
use tripnest_core::rank::{self, FlightSortKey};
use tripnest_core::steps::{self, DetailsForm};
use tripnest_core::types::Travelers;
use tripnest_core::weather::{current_weather, is_outdoor_suitable};
use tripnest_core::{Entry, JsonFileSnapshotStore, TripStore, WizardController};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let snapshot_path = std::env::temp_dir().join("tripnest-trip.json");
    let mut store = TripStore::new(Arc::new(JsonFileSnapshotStore::new(&snapshot_path)));
    store.restore().await;

    let weather = MockWeatherProvider;
    let attractions = MockAttractionsProvider;
    let flights = MockFlightProvider;

    let mut wizard = WizardController::new(store);
    wizard.reset().await;

    // Step 1 — Details. A fresh session gets bounced here from anywhere.
    assert!(matches!(
        wizard.enter("/plan/activities").await,
        Entry::Redirected { .. }
    ));
    wizard.enter("/plan/details").await;

    let today = Utc::now().date_naive();
    let form = DetailsForm {
        destination: "Tokyo, Japan".into(),
        departure_city: "New York, USA".into(),
        start_date: Some(today + Duration::days(30)),
        end_date: Some(today + Duration::days(34)),
        travelers: Travelers {
            kids: 1,
            adults_under_50: 2,
            adults_over_50: 0,
        },
        needs_medical_assistance: false,
    };
    wizard
        .submit_details(&form)
        .await
        .map_err(|errors| anyhow::anyhow!("details rejected: {errors:?}"))?;
    println!(
        "Trip: {} → {}, {} days",
        wizard.state().departure_city,
        wizard.state().destination,
        wizard.state().num_days
    );

    // Step 2 — Activities.
    wizard.enter("/plan/activities").await;
    let data = steps::load_activities_step(wizard.store_mut(), &weather, &attractions).await;
    let weather_now = data.forecast.as_ref().and_then(current_weather);
    if let Some(w) = weather_now {
        println!(
            "Current weather: {} ({}) — outdoor {}",
            w.main,
            w.description,
            if is_outdoor_suitable(&w.main) {
                "ok"
            } else {
                "not recommended"
            }
        );
    }
    let mut selection = Vec::new();
    for candidate in data
        .groups
        .kids
        .iter()
        .chain(data.groups.adults_under_50.iter())
        .take(3)
    {
        rank::toggle_activity(&mut selection, candidate, weather_now);
        println!("Selected: {}", candidate.name);
    }
    wizard.continue_activities(selection).await;

    // Step 3 — Travel time.
    wizard.enter("/plan/travel-time").await;
    let windows = steps::load_travel_time_step(wizard.store_mut(), &weather).await;
    for w in &windows {
        println!("Better time to visit: {} — {}", w.months, w.reason);
    }
    wizard.continue_travel_time().await;

    // Step 4 — Flights.
    wizard.enter("/plan/flights").await;
    let candidates = steps::load_flights_step(wizard.store_mut(), &flights).await;
    let by_price = rank::sort_flights(&candidates, FlightSortKey::Price);
    let chosen = by_price.first().cloned();
    if let Some(f) = &chosen {
        println!(
            "Cheapest flight: {} {} dep {} — ${}",
            f.airline, f.flight_number, f.departure_time, f.price
        );
    }
    wizard.continue_flights(chosen).await;

    // Step 5 — Itinerary.
    wizard.enter("/plan/itinerary").await;
    let state = wizard.state();
    println!("\nItinerary for {}:", state.destination);
    println!("  {} activities, {} flight(s) booked", state.activities.len(), state.flights.len());
    println!("  Completed steps: {:?}", state.completed_steps);
    println!("  Snapshot: {}", snapshot_path.display());

    Ok(())
}
