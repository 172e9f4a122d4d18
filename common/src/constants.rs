pub const SERVER_IP_ADDRESS: &str = "127.0.0.1";
pub const BASE_PORT: u16 = 8080;
/// Seconds the client waits for an answer before giving up.
pub const TIMEOUT_SECONDS: u64 = 5;

pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const PEAK_HOURS_RADIUS_KM: f64 = 3.0;
pub const NORMAL_HOURS_RADIUS_KM: f64 = 5.0;
/// Daily peak windows as `(start, end)` wall-clock times, both ends inclusive.
pub const PEAK_WINDOWS: [(&str, &str); 3] = [
    ("08:00", "10:00"),
    ("13:00", "14:00"),
    ("19:00", "21:00"),
];

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Most digits accepted after the decimal point of a stored time.
pub const NANOS_DIGITS: usize = 9;

pub const DEFAULT_RESTAURANTS_FILE: &str = "data/restaurants.json";

pub const BAD_REQUEST: u16 = 400;
pub const INTERNAL_SERVER_ERROR: u16 = 500;
