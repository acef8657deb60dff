//! Mock provider backends for the demo binary and local development.
//!
//! City-keyed fixture tables with generic fallbacks, plus randomized
//! forecast and flight generation. Lookup keys strip everything after the
//! first comma ("Tokyo, Japan" → "Tokyo").

use crate::provider::{AttractionsProvider, FlightProvider, WeatherProvider};
use crate::types::{
    ActivityCandidate, AgeGroup, FlightDuration, FlightOption, Forecast, ForecastDay, Layover,
    LocationInfo, TravelWindow, WeatherSnapshot,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;

fn city_key(label: &str) -> &str {
    label.split(',').next().unwrap_or(label).trim()
}

// ─── Weather ──────────────────────────────────────────────────

/// Randomized 5-day forecast plus a fixed travel-window table.
#[derive(Default)]
pub struct MockWeatherProvider;

const WEATHER_TYPES: [(&str, &str, &str); 7] = [
    ("Clear", "clear sky", "01d"),
    ("Clouds", "few clouds", "02d"),
    ("Clouds", "scattered clouds", "03d"),
    ("Clouds", "broken clouds", "04d"),
    ("Rain", "light rain", "10d"),
    ("Rain", "moderate rain", "10d"),
    ("Thunderstorm", "thunderstorm", "11d"),
];

fn window(months: &str, reason: &str) -> TravelWindow {
    TravelWindow {
        months: months.to_string(),
        reason: reason.to_string(),
    }
}

fn travel_windows_for(city: &str) -> Vec<TravelWindow> {
    match city {
        "Tokyo" => vec![
            window("March-April", "Cherry Blossom season"),
            window("October-November", "Autumn colors"),
        ],
        "Paris" => vec![
            window("April-June", "Mild temperatures and fewer tourists"),
            window("September-October", "Pleasant weather and cultural events"),
        ],
        "New York" => vec![
            window("April-June", "Spring blooms and comfortable temperatures"),
            window("September-November", "Fall colors and pleasant weather"),
        ],
        "Sydney" => vec![
            window("September-November", "Spring season with mild temperatures"),
            window("March-May", "Autumn with fewer tourists"),
        ],
        "London" => vec![
            window("May-September", "Warmer months with longer daylight hours"),
            window("December", "Christmas decorations and festivities"),
        ],
        "Rome" => vec![
            window("April-May", "Spring weather before summer crowds"),
            window("September-October", "Comfortable temperatures and fewer tourists"),
        ],
        "Bangkok" => vec![window("November-February", "Cooler and drier season")],
        "Dubai" => vec![window("November-March", "Pleasant temperatures")],
        _ => vec![
            window("April-May", "Spring season"),
            window("September-October", "Fall season"),
        ],
    }
}

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    async fn get_forecast(&self, destination: &str) -> Result<Forecast> {
        let mut rng = rand::thread_rng();
        let today = Utc::now().date_naive();

        let days = (0..5)
            .map(|i| {
                let (main, description, icon) = WEATHER_TYPES[rng.gen_range(0..WEATHER_TYPES.len())];
                let temp_max_c = rng.gen_range(15..30);
                let temp_min_c = temp_max_c - rng.gen_range(0..10);
                ForecastDay {
                    date: today + Duration::days(i),
                    weather: WeatherSnapshot {
                        main: main.to_string(),
                        description: description.to_string(),
                        icon: icon.to_string(),
                    },
                    temp_max_c,
                    temp_min_c,
                    humidity: rng.gen_range(40..80),
                    wind_kph: rng.gen_range(5..25),
                }
            })
            .collect();

        Ok(Forecast {
            location: LocationInfo {
                name: city_key(destination).to_string(),
                country: "Demo".to_string(),
            },
            days,
        })
    }

    async fn get_better_travel_times(&self, destination: &str) -> Result<Vec<TravelWindow>> {
        Ok(travel_windows_for(city_key(destination)))
    }
}

// ─── Attractions ──────────────────────────────────────────────

/// City fixture tables with a generic fallback per age group.
#[derive(Default)]
pub struct MockAttractionsProvider;

fn attraction(id: u32, name: &str, kind: &str, rating: f32) -> ActivityCandidate {
    ActivityCandidate {
        id,
        name: name.to_string(),
        kind: kind.to_string(),
        rating,
    }
}

fn attractions_for(city: &str, group: AgeGroup) -> Vec<ActivityCandidate> {
    match (city, group) {
        ("Tokyo", AgeGroup::Kids) => vec![
            attraction(1, "Tokyo Disneyland", "amusement_park", 4.8),
            attraction(2, "Ueno Zoo", "zoo", 4.5),
            attraction(3, "Ghibli Museum", "museum", 4.9),
            attraction(4, "KidZania Tokyo", "amusement_park", 4.6),
            attraction(5, "Tokyo Sea Life Park", "aquarium", 4.4),
        ],
        ("Tokyo", AgeGroup::AdultsUnder50) => vec![
            attraction(6, "Mount Fuji Day Trip", "hiking", 4.9),
            attraction(7, "Shibuya Crossing", "landmark", 4.7),
            attraction(8, "Shinjuku Nightlife", "entertainment", 4.8),
            attraction(9, "Tsukiji Fish Market", "market", 4.6),
            attraction(10, "Akihabara Electric Town", "shopping", 4.5),
        ],
        ("Tokyo", AgeGroup::AdultsOver50) => vec![
            attraction(11, "Senso-ji Temple", "temple", 4.7),
            attraction(12, "Tokyo National Museum", "museum", 4.8),
            attraction(13, "Imperial Palace Gardens", "garden", 4.6),
            attraction(14, "Meiji Shrine", "shrine", 4.7),
            attraction(15, "Hamarikyu Gardens", "garden", 4.5),
        ],
        ("Paris", AgeGroup::Kids) => vec![
            attraction(1, "Disneyland Paris", "amusement_park", 4.7),
            attraction(2, "Jardin d'Acclimatation", "amusement_park", 4.5),
            attraction(3, "Cité des Sciences et de l'Industrie", "museum", 4.6),
            attraction(4, "Aquarium de Paris", "aquarium", 4.4),
            attraction(5, "Parc Astérix", "amusement_park", 4.6),
        ],
        ("Paris", AgeGroup::AdultsUnder50) => vec![
            attraction(6, "Eiffel Tower", "landmark", 4.8),
            attraction(7, "Louvre Museum", "museum", 4.9),
            attraction(8, "Seine River Cruise", "tour", 4.7),
            attraction(9, "Montmartre", "neighborhood", 4.7),
            attraction(10, "Catacombs of Paris", "historical_site", 4.6),
        ],
        ("Paris", AgeGroup::AdultsOver50) => vec![
            attraction(11, "Notre-Dame Cathedral", "cathedral", 4.8),
            attraction(12, "Musée d'Orsay", "museum", 4.9),
            attraction(13, "Luxembourg Gardens", "garden", 4.7),
            attraction(14, "Sainte-Chapelle", "cathedral", 4.8),
            attraction(15, "Panthéon", "historical_site", 4.6),
        ],
        (_, AgeGroup::Kids) => vec![
            attraction(1, "Local Zoo", "zoo", 4.5),
            attraction(2, "Children's Museum", "museum", 4.6),
            attraction(3, "Water Park", "amusement_park", 4.7),
            attraction(4, "Science Center", "museum", 4.5),
            attraction(5, "Aquarium", "aquarium", 4.4),
        ],
        (_, AgeGroup::AdultsUnder50) => vec![
            attraction(6, "Hiking Trail", "hiking", 4.6),
            attraction(7, "Local Markets", "market", 4.5),
            attraction(8, "Adventure Sports", "adventure", 4.7),
            attraction(9, "Nightlife District", "entertainment", 4.6),
            attraction(10, "Shopping Center", "shopping", 4.4),
        ],
        (_, AgeGroup::AdultsOver50) => vec![
            attraction(11, "Historical Museum", "museum", 4.7),
            attraction(12, "Botanical Garden", "garden", 4.6),
            attraction(13, "Cultural Center", "cultural", 4.5),
            attraction(14, "Art Gallery", "museum", 4.6),
            attraction(15, "Historical Site", "historical_site", 4.7),
        ],
    }
}

#[async_trait]
impl AttractionsProvider for MockAttractionsProvider {
    async fn get_candidates(
        &self,
        destination: &str,
        group: AgeGroup,
    ) -> Result<Vec<ActivityCandidate>> {
        Ok(attractions_for(city_key(destination), group))
    }
}

// ─── Flights ──────────────────────────────────────────────────

/// Randomized flight search: 5-8 options, pre-sorted by price.
#[derive(Default)]
pub struct MockFlightProvider;

const AIRLINES: [&str; 10] = [
    "Delta Air Lines",
    "American Airlines",
    "United Airlines",
    "Air France",
    "British Airways",
    "Lufthansa",
    "Emirates",
    "Japan Airlines",
    "Singapore Airlines",
    "Qatar Airways",
];

const LAYOVER_AIRPORTS: [&str; 6] = ["JFK", "LHR", "CDG", "DXB", "SIN", "HND"];

fn flight_number(airline: &str, rng: &mut impl Rng) -> String {
    let prefix: String = airline
        .split(' ')
        .next()
        .unwrap_or(airline)
        .chars()
        .take(2)
        .collect::<String>()
        .to_uppercase();
    format!("{prefix}{}", rng.gen_range(1000..10000))
}

#[async_trait]
impl FlightProvider for MockFlightProvider {
    async fn search(
        &self,
        origin: &str,
        destination: &str,
        depart: NaiveDate,
        ret: NaiveDate,
    ) -> Result<Vec<FlightOption>> {
        let mut rng = rand::thread_rng();
        let count = rng.gen_range(5..=8);

        let mut flights: Vec<FlightOption> = (0..count)
            .map(|i| {
                let airline = AIRLINES[rng.gen_range(0..AIRLINES.len())];
                let duration = FlightDuration {
                    hours: rng.gen_range(1..=14),
                    minutes: rng.gen_range(0..60),
                };
                let dep_h = rng.gen_range(0..24u32);
                let dep_m = rng.gen_range(0..60u32);

                let mut arr_h = dep_h + duration.hours;
                let mut arr_m = dep_m + duration.minutes;
                if arr_m >= 60 {
                    arr_h += 1;
                    arr_m -= 60;
                }
                arr_h %= 24;

                let layover = (rng.gen_range(0..10) < 4).then(|| Layover {
                    airport: LAYOVER_AIRPORTS[rng.gen_range(0..LAYOVER_AIRPORTS.len())]
                        .to_string(),
                    duration: FlightDuration {
                        hours: rng.gen_range(1..=3),
                        minutes: rng.gen_range(0..60),
                    },
                });

                FlightOption {
                    id: i + 1,
                    airline: airline.to_string(),
                    flight_number: flight_number(airline, &mut rng),
                    departure_city: origin.to_string(),
                    destination_city: destination.to_string(),
                    departure_date: depart,
                    return_date: ret,
                    // Zero-padding here upholds the HHMM sort invariant.
                    departure_time: format!("{dep_h:02}:{dep_m:02}"),
                    arrival_time: format!("{arr_h:02}:{arr_m:02}"),
                    duration,
                    layover,
                    price: rng.gen_range(300..1500),
                    seats_available: rng.gen_range(1..=50),
                }
            })
            .collect();

        flights.sort_by_key(|f| f.price);
        Ok(flights)
    }
}
