#[cfg(test)]
mod tests {
    use crate::config::Profile;
    use crate::model::store::AttendanceStore;
    use crate::model::trip::{DayStatus, Leg, Person};
    use crate::reducer::Action;
    use crate::repository::MemoryStoreRepository;
    use crate::service::tracker_service::TrackerService;
    use crate::time::YearMonth;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_confirmed_change_is_persisted() {
        let mut service = TrackerService::new(MemoryStoreRepository::new(), Profile::extended());
        let date = d(2024, 2, 12);

        service.request(Action::SetStatus { date, person: Person::Jorge, status: DayStatus::Full }).unwrap();
        assert!(service.store().is_empty());
        assert!(service.pending().is_some());

        let applied = service.confirm().unwrap();
        assert_eq!(applied.date(), date);
        assert!(service.pending().is_none());
        assert_eq!(service.store().day_status(date, Person::Jorge), DayStatus::Full);
        assert_eq!(service.repository().saved(), Some(service.store().clone()));
    }

    #[test]
    fn test_cancel_leaves_store_and_slot_untouched() {
        let mut service = TrackerService::new(MemoryStoreRepository::new(), Profile::basic());
        service.request(Action::ToggleLeg { date: d(2024, 2, 12), person: Person::William, leg: Leg::Outbound }).unwrap();

        assert!(service.cancel().is_some());
        assert!(service.confirm().is_none());
        assert!(service.store().is_empty());
        assert_eq!(service.repository().saved(), None);
    }

    #[test]
    fn test_weekend_is_rejected_in_both_profiles() {
        let saturday = d(2024, 2, 17);
        let mut basic = TrackerService::new(MemoryStoreRepository::new(), Profile::basic());
        assert!(basic.request(Action::ToggleLeg { date: saturday, person: Person::Jorge, leg: Leg::Outbound }).is_err());

        let mut extended = TrackerService::new(MemoryStoreRepository::new(), Profile::extended());
        assert!(extended.request(Action::SetStatus { date: saturday, person: Person::Jorge, status: DayStatus::Full }).is_err());
        assert!(extended.pending().is_none());
    }

    #[test]
    fn test_holiday_blocks_only_in_extended_profile() {
        let carnaval = d(2024, 2, 13);
        let mut basic = TrackerService::new(MemoryStoreRepository::new(), Profile::basic());
        assert!(basic.request(Action::ToggleLeg { date: carnaval, person: Person::Jorge, leg: Leg::Outbound }).is_ok());

        let mut extended = TrackerService::new(MemoryStoreRepository::new(), Profile::extended());
        let err = extended
            .request(Action::SetStatus { date: carnaval, person: Person::Jorge, status: DayStatus::Full })
            .unwrap_err();
        assert!(err.to_string().contains("Carnaval"));
    }

    #[test]
    fn test_profile_restricts_edit_model() {
        let date = d(2024, 2, 12);
        let mut basic = TrackerService::new(MemoryStoreRepository::new(), Profile::basic());
        assert!(basic.request(Action::SetStatus { date, person: Person::Jorge, status: DayStatus::Full }).is_err());

        let mut extended = TrackerService::new(MemoryStoreRepository::new(), Profile::extended());
        assert!(extended.request(Action::ToggleLeg { date, person: Person::Jorge, leg: Leg::Outbound }).is_err());
    }

    #[test]
    fn test_failed_write_keeps_memory_ahead() {
        let mut service = TrackerService::new(MemoryStoreRepository::failing(), Profile::basic());
        let date = d(2024, 2, 12);
        service.request(Action::ToggleLeg { date, person: Person::Jorge, leg: Leg::Return }).unwrap();

        assert!(service.confirm().is_some());
        assert!(service.record(date).jorge.return_done);
        assert_eq!(service.repository().saved(), None);
    }

    #[test]
    fn test_loads_existing_store_and_derives_stats() {
        let date = d(2024, 2, 12);
        let existing = AttendanceStore::new().set_trip_state(date, Person::Jorge, Leg::Outbound, true);
        let service = TrackerService::new(MemoryStoreRepository::with_store(existing), Profile::basic());

        let stats = service.stats(YearMonth::new(2024, 2).unwrap(), d(2024, 2, 29));
        assert_eq!(stats.jorge.confirmed_total, 300);
        assert_eq!(stats.jorge.completed_trips, 0);
    }

    #[test]
    fn test_basic_toggle_twice_restores_leg() {
        let mut service = TrackerService::new(MemoryStoreRepository::new(), Profile::basic());
        let date = d(2024, 2, 14);
        let action = Action::ToggleLeg { date, person: Person::William, leg: Leg::Return };

        service.request(action).unwrap();
        service.confirm();
        assert!(service.record(date).william.return_done);

        let change = service.request(action).unwrap();
        assert!(change.before.return_done);
        assert!(!change.after.return_done);
        service.confirm();
        assert!(!service.record(date).william.return_done);
    }
}
