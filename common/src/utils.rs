use crate::constants::{
    EARTH_RADIUS_KM, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE,
    NANOS_DIGITS,
};
use chrono::NaiveTime;

/// Great-circle distance in kilometers between two `(latitude, longitude)`
/// points given in degrees, using the haversine formula on a spherical Earth.
pub fn calculate_distance(point1: (f64, f64), point2: (f64, f64)) -> f64 {
    let lat1 = point1.0.to_radians();
    let lat2 = point2.0.to_radians();
    let delta_lat = (point2.0 - point1.0).to_radians();
    let delta_lon = (point2.1 - point1.1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

fn is_two_digits(field: &str) -> bool {
    field.len() == 2 && field.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a wall-clock time laid out exactly as `HH:MM`, `HH:MM:SS` or
/// `HH:MM:SS.fraction` (up to nine fraction digits).
///
/// Every field is zero-padded to two digits, surrounding whitespace is not
/// accepted and there are no leap seconds.
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let (clock, fraction) = match value.split_once('.') {
        Some((clock, fraction)) => (clock, Some(fraction)),
        None => (value, None),
    };

    let fields: Vec<&str> = clock.split(':').collect();
    if !(2..=3).contains(&fields.len()) || !fields.iter().all(|field| is_two_digits(field)) {
        return None;
    }
    let hour: u32 = fields[0].parse().ok()?;
    let minute: u32 = fields[1].parse().ok()?;
    let second: u32 = match fields.get(2) {
        Some(field) => field.parse().ok()?,
        None => 0,
    };
    if second > 59 {
        return None;
    }

    let nanos: u32 = match fraction {
        None => 0,
        Some(digits)
            if fields.len() == 3
                && (1..=NANOS_DIGITS).contains(&digits.len())
                && digits.bytes().all(|b| b.is_ascii_digit()) =>
        {
            format!("{:0<width$}", digits, width = NANOS_DIGITS).parse().ok()?
        }
        Some(_) => return None,
    };

    NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)
}

/// `true` when both values are real numbers inside Earth-coordinate bounds.
pub fn is_valid_position(latitude: f64, longitude: f64) -> bool {
    (MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude)
        && (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude)
}
