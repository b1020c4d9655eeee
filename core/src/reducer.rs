use chrono::NaiveDate;

use crate::model::store::AttendanceStore;
use crate::model::trip::{DayStatus, Leg, Person};

/// A single edit to the attendance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleLeg { date: NaiveDate, person: Person, leg: Leg },
    SetLeg { date: NaiveDate, person: Person, leg: Leg, done: bool },
    SetStatus { date: NaiveDate, person: Person, status: DayStatus },
}

impl Action {
    pub fn date(&self) -> NaiveDate {
        match self {
            Action::ToggleLeg { date, .. }
            | Action::SetLeg { date, .. }
            | Action::SetStatus { date, .. } => *date,
        }
    }

    pub fn person(&self) -> Person {
        match self {
            Action::ToggleLeg { person, .. }
            | Action::SetLeg { person, .. }
            | Action::SetStatus { person, .. } => *person,
        }
    }
}

/// Pure transition: persisting the result is the caller's job.
pub fn reduce(store: &AttendanceStore, action: &Action) -> AttendanceStore {
    match *action {
        Action::ToggleLeg { date, person, leg } => store.toggle_trip(date, person, leg),
        Action::SetLeg { date, person, leg, done } => store.set_trip_state(date, person, leg, done),
        Action::SetStatus { date, person, status } => store.set_day_status(date, person, status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_dispatches_each_action() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        let store = AttendanceStore::new();

        let toggled = reduce(&store, &Action::ToggleLeg { date, person: Person::Jorge, leg: Leg::Outbound });
        assert!(toggled.get_record(date).jorge.outbound_done);

        let set = reduce(&toggled, &Action::SetLeg { date, person: Person::Jorge, leg: Leg::Outbound, done: false });
        assert!(!set.get_record(date).jorge.outbound_done);

        let status = reduce(&set, &Action::SetStatus { date, person: Person::William, status: DayStatus::Full });
        assert_eq!(status.day_status(date, Person::William), DayStatus::Full);

        assert!(store.is_empty());
        assert!(toggled.get_record(date).jorge.outbound_done);
    }
}
