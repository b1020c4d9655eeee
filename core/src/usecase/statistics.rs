use chrono::NaiveDate;

use crate::eligibility::EligibilityPolicy;
use crate::model::stats::{MonthlyStats, PersonStats, WorkingDays};
use crate::model::store::AttendanceStore;
use crate::model::trip::Person;
use crate::time::YearMonth;

pub fn working_days(month: YearMonth, today: NaiveDate, policy: EligibilityPolicy) -> WorkingDays {
    let mut days = WorkingDays::default();
    for date in month.days().filter(|d| policy.is_registrable(*d)) {
        days.total += 1;
        if date > today {
            days.remaining += 1;
        } else {
            days.passed += 1;
        }
    }
    days
}

/// Derives every monthly figure from the store. Nothing here is cached or persisted.
pub fn compute_monthly_stats(
    store: &AttendanceStore,
    month: YearMonth,
    today: NaiveDate,
    cost_per_leg: u64,
    policy: EligibilityPolicy,
) -> MonthlyStats {
    let working_days = working_days(month, today, policy);
    let remaining_potential = working_days.remaining as u64 * cost_per_leg * 2;

    let person_stats = |person: Person| {
        let mut legs = 0u32;
        let mut active_days = 0u32;
        for (_, record) in store.month_entries(month) {
            let state = record.person(person);
            legs += state.legs_done();
            if state.any() {
                active_days += 1;
            }
        }

        let confirmed_total = legs as u64 * cost_per_leg;
        let average_per_active_day = if active_days > 0 {
            confirmed_total as f64 / active_days as f64
        } else {
            0.0
        };

        PersonStats {
            confirmed_total,
            // two legs make a trip, a lone leg is dropped
            completed_trips: legs / 2,
            active_days,
            average_per_active_day,
            forecast: confirmed_total + remaining_potential,
        }
    };

    let jorge = person_stats(Person::Jorge);
    let william = person_stats(Person::William);

    let attendance_efficiency = if working_days.total > 0 {
        let active = (jorge.active_days + william.active_days) as f64;
        (100.0 * active / (working_days.total as f64 * 2.0)).round() as u32
    } else {
        0
    };

    MonthlyStats {
        month,
        cost_per_leg,
        jorge,
        william,
        working_days,
        attendance_efficiency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::trip::{DayStatus, Leg};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn feb_2024() -> YearMonth {
        YearMonth::new(2024, 2).unwrap()
    }

    #[test]
    fn test_single_leg_counts_cost_but_not_trip() {
        let store = AttendanceStore::new().set_trip_state(d(2024, 2, 12), Person::Jorge, Leg::Outbound, true);
        let stats = compute_monthly_stats(&store, feb_2024(), d(2024, 2, 29), 300, EligibilityPolicy::new(false));

        assert_eq!(stats.jorge.confirmed_total, 300);
        assert_eq!(stats.jorge.completed_trips, 0);
        assert_eq!(stats.jorge.active_days, 1);
        assert_eq!(stats.jorge.average_per_active_day, 300.0);
        assert_eq!(stats.william, PersonStats::default());
    }

    #[test]
    fn test_half_legs_are_truncated_across_days() {
        // three lone legs: 1.5 trips -> 1
        let store = AttendanceStore::new()
            .set_trip_state(d(2024, 2, 12), Person::William, Leg::Outbound, true)
            .set_trip_state(d(2024, 2, 13), Person::William, Leg::Return, true)
            .set_trip_state(d(2024, 2, 14), Person::William, Leg::Outbound, true);
        let stats = compute_monthly_stats(&store, feb_2024(), d(2024, 2, 29), 300, EligibilityPolicy::new(false));

        assert_eq!(stats.william.confirmed_total, 900);
        assert_eq!(stats.william.completed_trips, 1);
        assert_eq!(stats.william.active_days, 3);
    }

    #[test]
    fn test_no_active_days_gives_zero_average() {
        let stats = compute_monthly_stats(&AttendanceStore::new(), feb_2024(), d(2024, 2, 1), 300, EligibilityPolicy::new(true));
        assert_eq!(stats.jorge.average_per_active_day, 0.0);
        assert_eq!(stats.william.average_per_active_day, 0.0);
        assert_eq!(stats.attendance_efficiency, 0);
    }

    #[test]
    fn test_other_months_are_ignored() {
        let store = AttendanceStore::new()
            .set_day_status(d(2024, 1, 31), Person::Jorge, DayStatus::Full)
            .set_day_status(d(2024, 3, 1), Person::Jorge, DayStatus::Full);
        let stats = compute_monthly_stats(&store, feb_2024(), d(2024, 2, 29), 300, EligibilityPolicy::new(true));
        assert_eq!(stats.jorge.confirmed_total, 0);
    }

    #[test]
    fn test_working_days_follow_holiday_policy() {
        // February 2024: 21 weekdays, Carnaval on Tuesday the 13th
        let today = d(2024, 2, 13);
        let blocking = working_days(feb_2024(), today, EligibilityPolicy::new(true));
        assert_eq!(blocking, WorkingDays { total: 20, passed: 8, remaining: 12 });

        let lenient = working_days(feb_2024(), today, EligibilityPolicy::new(false));
        assert_eq!(lenient, WorkingDays { total: 21, passed: 9, remaining: 12 });
    }

    #[test]
    fn test_forecast_and_efficiency() {
        let mut store = AttendanceStore::new();
        // Jorge rides full days on the first two working days, William one leg on the first
        store = store
            .set_day_status(d(2024, 2, 1), Person::Jorge, DayStatus::Full)
            .set_day_status(d(2024, 2, 2), Person::Jorge, DayStatus::Full)
            .set_day_status(d(2024, 2, 1), Person::William, DayStatus::ReturnOnly);

        let today = d(2024, 2, 13);
        let stats = compute_monthly_stats(&store, feb_2024(), today, 300, EligibilityPolicy::new(true));

        assert_eq!(stats.jorge.confirmed_total, 1200);
        assert_eq!(stats.jorge.completed_trips, 2);
        assert_eq!(stats.jorge.average_per_active_day, 600.0);
        assert_eq!(stats.jorge.forecast, 1200 + 12 * 600);
        assert_eq!(stats.william.forecast, 300 + 12 * 600);
        assert_eq!(stats.group_forecast(), stats.jorge.forecast + stats.william.forecast);
        // round(100 * 3 / 40) = round(7.5) = 8
        assert_eq!(stats.attendance_efficiency, 8);
    }

    #[test]
    fn test_future_month_has_everything_remaining() {
        let stats = compute_monthly_stats(&AttendanceStore::new(), feb_2024(), d(2024, 1, 10), 300, EligibilityPolicy::new(true));
        assert_eq!(stats.working_days.passed, 0);
        assert_eq!(stats.working_days.remaining, 20);
        assert_eq!(stats.jorge.forecast, 20 * 600);
    }
}
