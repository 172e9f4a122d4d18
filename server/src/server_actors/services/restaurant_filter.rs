use chrono::NaiveTime;
use common::errors::QueryError;
use common::types::restaurant::{Restaurant, RestaurantRecord};
use common::utils::calculate_distance;

/// `true` when `current_time` falls strictly between the restaurant's
/// opening and closing times. Being exactly at either boundary is closed.
///
/// ## Errors
/// `QueryError::InvalidTimeOfDay` if the stored times do not parse.
pub fn is_open_now(record: &RestaurantRecord, current_time: NaiveTime) -> Result<bool, QueryError> {
    let (opens_at, closes_at) = record.opening_hours()?;
    Ok(current_time > opens_at && current_time < closes_at)
}

/// Open at `current_time` and strictly closer than `serving_radius_km` to
/// `position`. Distance is only computed for open restaurants.
pub fn is_close_by_and_open(
    record: &RestaurantRecord,
    current_time: NaiveTime,
    position: (f64, f64),
    serving_radius_km: f64,
) -> Result<bool, QueryError> {
    if !is_open_now(record, current_time)? {
        return Ok(false);
    }
    Ok(calculate_distance(position, record.position()) < serving_radius_km)
}

/// Selects the records that are open and in range and maps them to
/// [`Restaurant`], keeping the order in which `records` were given.
///
/// A single record with unparsable opening hours fails the whole batch.
pub fn find_restaurants_close_by(
    records: &[RestaurantRecord],
    latitude: f64,
    longitude: f64,
    current_time: NaiveTime,
    serving_radius_km: f64,
) -> Result<Vec<Restaurant>, QueryError> {
    records
        .iter()
        .map(|record| {
            is_close_by_and_open(record, current_time, (latitude, longitude), serving_radius_km)
                .map(|qualifies| qualifies.then(|| Restaurant::from(record)))
        })
        .filter_map(Result::transpose)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn create_restaurant(
        restaurant_id: &str,
        latitude: f64,
        longitude: f64,
        opens_at: &str,
        closes_at: &str,
    ) -> RestaurantRecord {
        RestaurantRecord {
            id: None,
            restaurant_id: restaurant_id.to_string(),
            name: format!("Restaurant {}!", restaurant_id),
            city: "Hsr Layout".to_string(),
            image_url: "www.google.com".to_string(),
            latitude,
            longitude,
            opens_at: opens_at.to_string(),
            closes_at: closes_at.to_string(),
            attributes: vec!["South Indian".to_string()],
        }
    }

    #[test]
    fn open_strictly_between_boundaries() {
        let record = create_restaurant("11", 20.0, 30.0, "17:00", "19:00");
        assert!(is_open_now(&record, at(18, 0)).unwrap());
        assert!(!is_open_now(&record, at(17, 0)).unwrap());
        assert!(!is_open_now(&record, at(19, 0)).unwrap());
        assert!(!is_open_now(&record, at(16, 59)).unwrap());
    }

    #[test]
    fn hours_crossing_midnight_are_never_open() {
        let record = create_restaurant("11", 20.0, 30.0, "22:00", "02:00");
        assert!(!is_open_now(&record, at(23, 0)).unwrap());
        assert!(!is_open_now(&record, at(1, 0)).unwrap());
    }

    #[test]
    fn co_located_restaurants_keep_their_order() {
        let records = vec![
            create_restaurant("11", 20.0, 30.0, "17:00", "19:00"),
            create_restaurant("12", 20.0, 30.0, "17:00", "19:00"),
        ];
        let found = find_restaurants_close_by(&records, 20.0, 30.0, at(18, 1), 3.0).unwrap();

        let ids: Vec<&str> = found.iter().map(|r| r.restaurant_id.as_str()).collect();
        assert_eq!(ids, vec!["11", "12"]);
    }

    #[test]
    fn order_follows_input_not_distance() {
        let records = vec![
            create_restaurant("far", 20.02, 30.0, "17:00", "19:00"),
            create_restaurant("near", 20.0, 30.0, "17:00", "19:00"),
        ];
        let found = find_restaurants_close_by(&records, 20.0, 30.0, at(18, 1), 5.0).unwrap();

        let ids: Vec<&str> = found.iter().map(|r| r.restaurant_id.as_str()).collect();
        assert_eq!(ids, vec!["far", "near"]);
    }

    #[test]
    fn restaurant_exactly_on_the_radius_is_excluded() {
        let record = create_restaurant("11", 20.01, 30.01, "17:00", "19:00");
        let radius = calculate_distance((20.0, 30.0), record.position());

        let found =
            find_restaurants_close_by(&[record.clone()], 20.0, 30.0, at(18, 0), radius).unwrap();
        assert!(found.is_empty());

        let found =
            find_restaurants_close_by(&[record], 20.0, 30.0, at(18, 0), radius + 1e-9).unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn too_far_during_peak_is_excluded() {
        let records = vec![create_restaurant("11", 20.0, 30.0, "17:00", "23:00")];
        let found = find_restaurants_close_by(&records, 20.9, 30.0, at(19, 0), 3.0).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn too_early_and_too_late_nothing_is_open() {
        let records = vec![
            create_restaurant("11", 20.0, 30.0, "17:00", "19:00"),
            create_restaurant("12", 20.0, 30.0, "17:00", "19:00"),
        ];
        assert!(
            find_restaurants_close_by(&records, 20.0, 30.0, at(7, 59), 5.0)
                .unwrap()
                .is_empty()
        );
        assert!(
            find_restaurants_close_by(&records, 20.0, 30.0, at(23, 1), 5.0)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn output_names_are_sanitized() {
        let mut record = create_restaurant("11", 20.0, 30.0, "17:00", "19:00");
        record.name = "A2B!!".to_string();

        let found = find_restaurants_close_by(&[record], 20.0, 30.0, at(18, 0), 3.0).unwrap();
        assert_eq!(found[0].name, "A2B");
    }

    #[test]
    fn unparsable_hours_fail_the_whole_query() {
        let records = vec![
            create_restaurant("11", 20.0, 30.0, "17:00", "19:00"),
            create_restaurant("12", 45.0, 30.0, "five pm", "19:00"),
        ];
        let err = find_restaurants_close_by(&records, 20.0, 30.0, at(18, 0), 3.0).unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidTimeOfDay {
                restaurant_id: "12".to_string(),
                value: "five pm".to_string(),
            }
        );
    }

    #[test]
    fn unpadded_stored_hour_fails_the_whole_query() {
        let records = vec![
            create_restaurant("11", 20.0, 30.0, "7:00", "19:00"),
            create_restaurant("12", 20.0, 30.0, "17:00", "19:00"),
        ];
        let err = find_restaurants_close_by(&records, 20.0, 30.0, at(18, 0), 3.0).unwrap_err();
        assert!(matches!(err, QueryError::InvalidTimeOfDay { ref value, .. } if value == "7:00"));
    }

    #[test]
    fn fractional_stored_seconds_are_accepted() {
        let records = vec![create_restaurant("11", 20.0, 30.0, "17:00:00.5", "19:00:00.250")];
        let found = find_restaurants_close_by(&records, 20.0, 30.0, at(18, 0), 3.0).unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn input_records_are_left_untouched() {
        let records = vec![create_restaurant("11", 20.0, 30.0, "17:00", "19:00")];
        let before = records.clone();
        let _ = find_restaurants_close_by(&records, 20.0, 30.0, at(18, 0), 3.0).unwrap();
        assert_eq!(records, before);
    }
}
