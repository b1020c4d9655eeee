use chrono::NaiveDate;

use crate::eligibility::{can_register, is_holiday, EligibilityPolicy};
use crate::model::store::AttendanceStore;
use crate::model::trip::DayRecord;
use crate::time::{calendar_grid, YearMonth};

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
    pub is_weekend: bool,
    pub holiday: Option<&'static str>,
    /// Trips may be recorded: in the viewed month and allowed by the policy.
    pub active: bool,
    pub record: DayRecord,
}

/// Monday-start weeks of cells for the calendar screen.
pub fn build_month_view(
    store: &AttendanceStore,
    month: YearMonth,
    today: NaiveDate,
    policy: EligibilityPolicy,
) -> Vec<[CalendarCell; 7]> {
    calendar_grid(month)
        .into_iter()
        .map(|week| {
            week.map(|date| {
                let in_month = month.contains(date);
                CalendarCell {
                    date,
                    in_month,
                    is_today: date == today,
                    is_weekend: !can_register(date),
                    holiday: is_holiday(date),
                    active: in_month && policy.is_registrable(date),
                    record: store.get_record(date),
                }
            })
        })
        .collect()
}
