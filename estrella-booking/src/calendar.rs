use chrono::{Datelike, NaiveDate};
use estrella_shared::DateKey;
use serde::Serialize;

/// Weekday header, Monday first, as the calendar renders it.
pub const WEEKDAYS: [&str; 7] = ["Lun", "Mar", "Mié", "Jue", "Vie", "Sáb", "Dom"];

/// One selectable cell of the calendar grid.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CalendarDay {
    pub day: u32,
    pub date: DateKey,
    /// Strictly before today; the UI renders these unclickable.
    pub disabled: bool,
    pub selected: bool,
}

/// Pure view-model for one month of the date picker: a Monday-first grid
/// with leading blank cells, each day flagged disabled when it is already
/// in the past. The presentation layer only walks this structure.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    /// Empty cells before day 1, so the grid starts on Monday.
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
}

impl CalendarMonth {
    /// Build the grid for a month. Returns None only for an out-of-range
    /// year/month pair.
    pub fn build(
        year: i32,
        month: u32,
        today: DateKey,
        selected: Option<DateKey>,
    ) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let leading_blanks = first.weekday().num_days_from_monday();

        let mut days = Vec::with_capacity(31);
        let mut current = first;
        while current.month() == month {
            let date = DateKey::from_date(current);
            days.push(CalendarDay {
                day: current.day(),
                date,
                disabled: date.is_before(&today),
                selected: selected == Some(date),
            });
            current = current.succ_opt()?;
        }

        Some(Self {
            year,
            month,
            leading_blanks,
            days,
        })
    }

    /// Year/month of the previous month, for the back navigation arrow.
    pub fn prev(&self) -> (i32, u32) {
        if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        }
    }

    /// Year/month of the next month.
    pub fn next(&self) -> (i32, u32) {
        if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        }
    }
}
