use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::model::holiday::{movable_holidays, FIXED_HOLIDAYS};

/// Name of the national holiday falling on `date`, if any. Fixed dates win over movable ones.
pub fn is_holiday(date: NaiveDate) -> Option<&'static str> {
    let (month, day) = (date.month(), date.day());

    if let Some(fixed) = FIXED_HOLIDAYS.iter().find(|h| h.month == month && h.day == day) {
        return Some(fixed.name);
    }

    movable_holidays(date.year())
        .iter()
        .find(|h| h.month == month && h.day == day)
        .map(|h| h.name)
}

/// Weekends are never registrable.
pub fn can_register(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EligibilityPolicy {
    pub holiday_blocks_registration: bool,
}

impl EligibilityPolicy {
    pub fn new(holiday_blocks_registration: bool) -> Self {
        Self { holiday_blocks_registration }
    }

    /// Whether trips may be recorded on `date`. Also the definition of a working day.
    pub fn is_registrable(&self, date: NaiveDate) -> bool {
        if !can_register(date) {
            return false;
        }
        !(self.holiday_blocks_registration && is_holiday(date).is_some())
    }
}
