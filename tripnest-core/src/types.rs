use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── Scalar aliases ───────────────────────────────────────────

/// 1-based wizard step index (1..=5).
pub type StepIndex = u8;

// ─── Travelers ────────────────────────────────────────────────

/// Head counts for the travel party, split by the age groups the
/// attractions provider understands.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Travelers {
    pub kids: u32,
    #[serde(rename = "adultsUnder50")]
    pub adults_under_50: u32,
    #[serde(rename = "adultsOver50")]
    pub adults_over_50: u32,
}

impl Travelers {
    /// Total party size. Must be > 0 before the Details step can complete.
    pub fn total(&self) -> u32 {
        self.kids + self.adults_under_50 + self.adults_over_50
    }
}

// ─── Weather ──────────────────────────────────────────────────

/// One weather classification as reported by the forecast provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Coarse classification ("Clear", "Rain", "Thunderstorm", ...).
    pub main: String,
    /// Human-readable description ("light rain").
    pub description: String,
    /// Provider icon token ("10d").
    pub icon: String,
}

/// A single forecast day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub weather: WeatherSnapshot,
    pub temp_max_c: i32,
    pub temp_min_c: i32,
    /// Relative humidity, percent.
    pub humidity: u32,
    pub wind_kph: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub name: String,
    pub country: String,
}

/// Forecast snapshot for a destination. The first day is the canonical
/// "current" reference used for suitability checks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub location: LocationInfo,
    /// Ordered, nominally 5 days starting today.
    pub days: Vec<ForecastDay>,
}

// ─── Activities ───────────────────────────────────────────────

/// Age bucket an attraction fetch targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "kids")]
    Kids,
    #[serde(rename = "adultsUnder50")]
    AdultsUnder50,
    #[serde(rename = "adultsOver50")]
    AdultsOver50,
}

/// An externally sourced activity candidate. Immutable; never persisted
/// beyond the subset the user selects into [`TripState`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityCandidate {
    pub id: u32,
    pub name: String,
    /// Category token ("museum", "amusement_park", ...).
    pub kind: String,
    /// 0.0..=5.0.
    pub rating: f32,
}

/// An activity the user committed into the trip plan. Carries the weather
/// observed at the moment of selection; the snapshot is never re-evaluated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectedActivity {
    pub id: u32,
    pub name: String,
    pub kind: String,
    pub rating: f32,
    #[serde(rename = "weatherAtSelection")]
    pub weather_at_selection: Option<WeatherSnapshot>,
}

impl SelectedActivity {
    pub fn from_candidate(c: &ActivityCandidate, weather: Option<&WeatherSnapshot>) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            kind: c.kind.clone(),
            rating: c.rating,
            weather_at_selection: weather.cloned(),
        }
    }
}

// ─── Travel windows ───────────────────────────────────────────

/// A recommended time-of-year window for visiting the destination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelWindow {
    /// Month label, e.g. "March-April".
    pub months: String,
    pub reason: String,
}

// ─── Flights ──────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightDuration {
    pub hours: u32,
    pub minutes: u32,
}

impl FlightDuration {
    pub fn total_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layover {
    pub airport: String,
    pub duration: FlightDuration,
}

/// An externally sourced flight candidate.
///
/// `departure_time` / `arrival_time` are zero-padded `"HH:MM"` strings.
/// The padding is load-bearing: the departure-time sort key strips the
/// colon and compares the four digits numerically.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightOption {
    pub id: u32,
    pub airline: String,
    #[serde(rename = "flightNumber")]
    pub flight_number: String,
    #[serde(rename = "departureCity")]
    pub departure_city: String,
    #[serde(rename = "destinationCity")]
    pub destination_city: String,
    #[serde(rename = "departureDate")]
    pub departure_date: NaiveDate,
    #[serde(rename = "returnDate")]
    pub return_date: NaiveDate,
    #[serde(rename = "departureTime")]
    pub departure_time: String,
    #[serde(rename = "arrivalTime")]
    pub arrival_time: String,
    pub duration: FlightDuration,
    pub layover: Option<Layover>,
    /// Whole-currency units (USD in the mock provider).
    pub price: u32,
    #[serde(rename = "seatsAvailable")]
    pub seats_available: u32,
}

// ─── Trip state ───────────────────────────────────────────────

/// The canonical record for an in-progress trip plan — the single source
/// of truth. Pure data; every mutation goes through the reducer in
/// [`crate::action`] via [`crate::store::TripStore`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripState {
    /// Free-text destination label; empty = unset.
    pub destination: String,
    #[serde(rename = "departureCity")]
    pub departure_city: String,
    #[serde(rename = "startDate")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "endDate")]
    pub end_date: Option<NaiveDate>,
    /// Derived from the dates (`days between + 1`); recomputed whenever
    /// either date changes, never maintained independently.
    #[serde(rename = "numDays")]
    pub num_days: u32,
    pub travelers: Travelers,
    #[serde(rename = "needsMedicalAssistance")]
    pub needs_medical_assistance: bool,
    /// Selection order = insertion order; unique by id.
    pub activities: Vec<SelectedActivity>,
    /// Last fetched forecast for the destination.
    #[serde(rename = "weatherData")]
    pub weather_data: Option<Forecast>,
    #[serde(rename = "betterTravelTimes")]
    pub better_travel_times: Vec<TravelWindow>,
    /// At most one selected flight, by design.
    pub flights: Vec<FlightOption>,
    #[serde(rename = "currentStep")]
    pub current_step: StepIndex,
    /// Deduplicated, insertion-ordered.
    #[serde(rename = "completedSteps")]
    pub completed_steps: Vec<StepIndex>,
}

impl Default for TripState {
    fn default() -> Self {
        Self {
            destination: String::new(),
            departure_city: String::new(),
            start_date: None,
            end_date: None,
            num_days: 0,
            travelers: Travelers::default(),
            needs_medical_assistance: false,
            activities: Vec::new(),
            weather_data: None,
            better_travel_times: Vec::new(),
            flights: Vec::new(),
            current_step: 1,
            completed_steps: Vec::new(),
        }
    }
}

/// Inclusive trip length in days: start=end is a 1-day trip. An inverted
/// range (end before start, rejected by form validation) clamps to 1 rather
/// than producing a plausible-looking length.
pub fn trip_length_days(start: NaiveDate, end: NaiveDate) -> u32 {
    (end - start).num_days().max(0) as u32 + 1
}
