use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical key for a local calendar date, rendered as `YYYY-MM-DD`.
///
/// All date comparisons in the engine are calendar-day granular and use
/// local civil time, never UTC instants: "today" must stay bookable for the
/// whole local day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Current local calendar date.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Strictly earlier than the given calendar date (time of day ignored).
    pub fn is_before(&self, other: &DateKey) -> bool {
        self.0 < other.0
    }

    /// Strictly earlier than the current local calendar date.
    pub fn is_past(&self) -> bool {
        self.is_before(&Self::today())
    }

    /// Display form used on ticket rows and boarding proofs: `dd/mm/yyyy`.
    pub fn display_dmy(&self) -> String {
        format!(
            "{:02}/{:02}/{:04}",
            self.0.day(),
            self.0.month(),
            self.0.year()
        )
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for DateKey {
    type Err = DateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, '-');
        let (y, m, d) = match (parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d)) => (y, m, d),
            _ => return Err(DateKeyError::Malformed(s.to_string())),
        };
        let year: i32 = y.parse().map_err(|_| DateKeyError::Malformed(s.to_string()))?;
        let month: u32 = m.parse().map_err(|_| DateKeyError::Malformed(s.to_string()))?;
        let day: u32 = d.parse().map_err(|_| DateKeyError::Malformed(s.to_string()))?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| DateKeyError::Malformed(s.to_string()))
    }
}

impl TryFrom<String> for DateKey {
    type Error = DateKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.to_string()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DateKeyError {
    #[error("Malformed date key: {0}")]
    Malformed(String),
}
