use chrono::{Duration, NaiveTime};
use common::constants::{NORMAL_HOURS_RADIUS_KM, PEAK_HOURS_RADIUS_KM, PEAK_WINDOWS};
use common::utils::parse_time_of_day;

/// A daily window during which the serving radius shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl PeakWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Builds a window from two stored-time strings such as `"08:00"`.
    pub fn parse(start: &str, end: &str) -> Option<Self> {
        Some(Self::new(parse_time_of_day(start)?, parse_time_of_day(end)?))
    }

    /// Both boundary minutes count as inside: `time` must be strictly after
    /// the minute before `start` and strictly before the minute after `end`.
    pub fn contains(&self, time: NaiveTime) -> bool {
        let (lower, lower_wrapped) = self.start.overflowing_sub_signed(Duration::minutes(1));
        let (upper, upper_wrapped) = self.end.overflowing_add_signed(Duration::minutes(1));

        (lower_wrapped != 0 || time > lower) && (upper_wrapped != 0 || time < upper)
    }
}

/// Immutable schedule handed to [`RadiusPolicy`].
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusPolicyConfig {
    pub peak_windows: Vec<PeakWindow>,
    pub peak_radius_km: f64,
    pub normal_radius_km: f64,
}

impl Default for RadiusPolicyConfig {
    fn default() -> Self {
        Self {
            peak_windows: PEAK_WINDOWS
                .iter()
                .filter_map(|&(start, end)| PeakWindow::parse(start, end))
                .collect(),
            peak_radius_km: PEAK_HOURS_RADIUS_KM,
            normal_radius_km: NORMAL_HOURS_RADIUS_KM,
        }
    }
}

/// Maps a wall-clock time to the serving radius in kilometers.
///
/// There are exactly two tiers: `peak_radius_km` inside any peak window,
/// `normal_radius_km` everywhere else.
#[derive(Debug, Clone, Default)]
pub struct RadiusPolicy {
    config: RadiusPolicyConfig,
}

impl RadiusPolicy {
    pub fn new(config: RadiusPolicyConfig) -> Self {
        Self { config }
    }

    pub fn is_peak_hour(&self, current_time: NaiveTime) -> bool {
        self.config
            .peak_windows
            .iter()
            .any(|window| window.contains(current_time))
    }

    pub fn radius_for(&self, current_time: NaiveTime) -> f64 {
        if self.is_peak_hour(current_time) {
            self.config.peak_radius_km
        } else {
            self.config.normal_radius_km
        }
    }
}
