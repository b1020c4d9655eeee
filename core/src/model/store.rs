use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::model::trip::{DayRecord, DayStatus, Leg, Person};
use crate::time::YearMonth;

/// Sparse attendance record keyed by `yyyy-MM-dd`. A missing day means nothing was recorded.
///
/// Every write returns a new store and leaves `self` untouched, so a caller can keep
/// the "before" value around while the "after" value is being composed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct AttendanceStore {
    days: BTreeMap<NaiveDate, DayRecord>,
}

impl AttendanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    /// Record for `date`, or the all-false record when the day is absent.
    pub fn get_record(&self, date: NaiveDate) -> DayRecord {
        self.days.get(&date).copied().unwrap_or_default()
    }

    pub fn set_trip_state(&self, date: NaiveDate, person: Person, leg: Leg, done: bool) -> Self {
        self.with_record(date, |record| record.person_mut(person).set(leg, done))
    }

    pub fn toggle_trip(&self, date: NaiveDate, person: Person, leg: Leg) -> Self {
        let current = self.get_record(date).person(person).get(leg);
        self.set_trip_state(date, person, leg, !current)
    }

    pub fn set_day_status(&self, date: NaiveDate, person: Person, status: DayStatus) -> Self {
        self.with_record(date, |record| *record.person_mut(person) = status.trip_state())
    }

    pub fn day_status(&self, date: NaiveDate, person: Person) -> DayStatus {
        self.get_record(date).person(person).status()
    }

    /// Recorded days inside `month`, in date order.
    pub fn month_entries(&self, month: YearMonth) -> impl Iterator<Item = (NaiveDate, &DayRecord)> {
        self.days
            .range(month.first_day()..=month.last_day())
            .map(|(date, record)| (*date, record))
    }

    fn with_record<F>(&self, date: NaiveDate, edit: F) -> Self
    where
        F: FnOnce(&mut DayRecord),
    {
        let mut next = self.clone();
        let mut record = next.get_record(date);
        edit(&mut record);
        next.days.insert(date, record);
        next
    }
}
