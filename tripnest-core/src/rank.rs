//! Candidate ranking: flight sorting and activity selection set operations.

use crate::types::{ActivityCandidate, FlightOption, SelectedActivity, WeatherSnapshot};

// ─── Flight sorting ───────────────────────────────────────────

/// Sort criterion for flight candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlightSortKey {
    Price,
    Duration,
    DepartureTime,
}

/// Produce a new ordering of the candidates, ascending by the given key.
/// Stable: ties keep their original relative order.
pub fn sort_flights(flights: &[FlightOption], key: FlightSortKey) -> Vec<FlightOption> {
    let mut sorted = flights.to_vec();
    match key {
        FlightSortKey::Price => sorted.sort_by_key(|f| f.price),
        FlightSortKey::Duration => sorted.sort_by_key(|f| f.duration.total_minutes()),
        FlightSortKey::DepartureTime => sorted.sort_by_key(|f| departure_hhmm(f)),
    }
    sorted
}

/// Departure time as a 4-digit HHMM number. Correct only because times are
/// zero-padded to two digits each ("09:05" → 905 < "10:00" → 1000); the
/// padding invariant is upheld at the provider boundary.
fn departure_hhmm(flight: &FlightOption) -> u32 {
    flight
        .departure_time
        .replace(':', "")
        .parse()
        .unwrap_or(0)
}

// ─── Activity selection ───────────────────────────────────────

/// Toggle membership of a candidate in the selection, keyed by id.
///
/// Selecting captures the current weather as the activity's
/// `weather_at_selection` snapshot; it is never re-evaluated afterwards.
/// Deselecting preserves the order of the remaining entries.
pub fn toggle_activity(
    selection: &mut Vec<SelectedActivity>,
    candidate: &ActivityCandidate,
    weather_now: Option<&WeatherSnapshot>,
) {
    if is_selected(selection, candidate.id) {
        selection.retain(|a| a.id != candidate.id);
    } else {
        selection.push(SelectedActivity::from_candidate(candidate, weather_now));
    }
}

pub fn is_selected(selection: &[SelectedActivity], id: u32) -> bool {
    selection.iter().any(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(id: u32, price: u32, dur_min: u32, dep: &str) -> FlightOption {
        FlightOption {
            id,
            airline: "Test Air".into(),
            flight_number: format!("TA{id:04}"),
            departure_city: "New York, USA".into(),
            destination_city: "Tokyo, Japan".into(),
            departure_date: "2024-06-01".parse().unwrap(),
            return_date: "2024-06-08".parse().unwrap(),
            departure_time: dep.into(),
            arrival_time: "12:00".into(),
            duration: crate::types::FlightDuration {
                hours: dur_min / 60,
                minutes: dur_min % 60,
            },
            layover: None,
            price,
            seats_available: 10,
        }
    }

    fn candidate(id: u32) -> ActivityCandidate {
        ActivityCandidate {
            id,
            name: format!("Attraction {id}"),
            kind: "museum".into(),
            rating: 4.5,
        }
    }

    #[test]
    fn price_sort_is_stable_for_ties() {
        let flights = vec![
            flight(1, 900, 300, "08:00"),
            flight(2, 300, 400, "09:00"),
            flight(3, 300, 200, "10:00"),
            flight(4, 1200, 100, "11:00"),
        ];
        let sorted = sort_flights(&flights, FlightSortKey::Price);
        let ids: Vec<u32> = sorted.iter().map(|f| f.id).collect();
        // The two 300-priced flights keep their original relative order.
        assert_eq!(ids, vec![2, 3, 1, 4]);
    }

    #[test]
    fn duration_sort_uses_total_minutes() {
        // 2h10m (130) < 1h75m is impossible; compare 2h05m vs 1h70m-style traps
        let flights = vec![
            flight(1, 500, 125, "08:00"), // 2h05m
            flight(2, 500, 70, "09:00"),  // 1h10m
            flight(3, 500, 121, "10:00"), // 2h01m
        ];
        let sorted = sort_flights(&flights, FlightSortKey::Duration);
        let ids: Vec<u32> = sorted.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn departure_sort_relies_on_zero_padding() {
        let flights = vec![
            flight(1, 500, 100, "10:00"),
            flight(2, 500, 100, "09:05"),
            flight(3, 500, 100, "00:30"),
            flight(4, 500, 100, "23:59"),
        ];
        let sorted = sort_flights(&flights, FlightSortKey::DepartureTime);
        let ids: Vec<u32> = sorted.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![3, 2, 1, 4]);
    }

    #[test]
    fn toggle_twice_restores_prior_selection() {
        let weather = WeatherSnapshot {
            main: "Clear".into(),
            description: "clear sky".into(),
            icon: "01d".into(),
        };
        let mut selection = Vec::new();
        toggle_activity(&mut selection, &candidate(1), Some(&weather));
        toggle_activity(&mut selection, &candidate(2), Some(&weather));
        toggle_activity(&mut selection, &candidate(3), Some(&weather));
        let before = selection.clone();

        toggle_activity(&mut selection, &candidate(9), Some(&weather));
        assert!(is_selected(&selection, 9));
        toggle_activity(&mut selection, &candidate(9), Some(&weather));
        assert_eq!(selection, before);
    }

    #[test]
    fn deselect_preserves_order_of_remaining() {
        let mut selection = Vec::new();
        for id in [5, 1, 8] {
            toggle_activity(&mut selection, &candidate(id), None);
        }
        toggle_activity(&mut selection, &candidate(1), None);
        let ids: Vec<u32> = selection.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![5, 8]);
    }

    #[test]
    fn selection_captures_weather_snapshot() {
        let weather = WeatherSnapshot {
            main: "Rain".into(),
            description: "light rain".into(),
            icon: "10d".into(),
        };
        let mut selection = Vec::new();
        toggle_activity(&mut selection, &candidate(1), Some(&weather));
        assert_eq!(
            selection[0].weather_at_selection.as_ref().unwrap().main,
            "Rain"
        );
    }
}
