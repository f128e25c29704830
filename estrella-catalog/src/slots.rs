use crate::route::Route;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A half-hour-aligned time of day eligible for booking, rendered `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

impl FromStr for TimeSlot {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| SlotError::Malformed(s.to_string()))?;
        let hour: u32 = h.parse().map_err(|_| SlotError::Malformed(s.to_string()))?;
        let minute: u32 = m.parse().map_err(|_| SlotError::Malformed(s.to_string()))?;
        Self::from_hm(hour, minute).ok_or_else(|| SlotError::Malformed(s.to_string()))
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = SlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SlotError {
    #[error("Malformed time slot: {0}")]
    Malformed(String),
}

/// Bookable departures for a route: `HH:00` and `HH:30` for every hour of
/// its operating rule, both boundary hours included. Pure function of the
/// static rule table; always non-empty and strictly ascending.
pub fn generate_slots(route: Route) -> Vec<TimeSlot> {
    let rule = route.hours();
    let mut slots = Vec::with_capacity(2 * (rule.end_hour - rule.start_hour + 1) as usize);
    for hour in rule.start_hour..=rule.end_hour {
        // from_hm only fails past 23:59, which the static rules never reach
        slots.extend(TimeSlot::from_hm(hour, 0));
        slots.extend(TimeSlot::from_hm(hour, 30));
    }
    slots
}
