use chrono::{Datelike, NaiveDate};

use crate::config::Profile;
use crate::eligibility::{can_register, is_holiday};
use crate::model::stats::MonthlyStats;
use crate::model::store::AttendanceStore;
use crate::model::trip::DayRecord;
use crate::time::{weekday_short_pt, YearMonth};
use crate::usecase::statistics::compute_monthly_stats;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub date: NaiveDate,
    pub weekday: &'static str,
    pub holiday: Option<&'static str>,
    pub record: DayRecord,
}

/// Printable month summary: totals plus one row per weekday.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    pub month: YearMonth,
    pub title: String,
    pub stats: MonthlyStats,
    pub rows: Vec<ReportRow>,
}

pub struct ReportUseCase<'a> {
    store: &'a AttendanceStore,
    profile: &'a Profile,
}

impl<'a> ReportUseCase<'a> {
    pub fn new(store: &'a AttendanceStore, profile: &'a Profile) -> Self {
        Self { store, profile }
    }

    pub fn build(&self, month: YearMonth, today: NaiveDate) -> MonthlyReport {
        let stats = compute_monthly_stats(
            self.store,
            month,
            today,
            self.profile.cost_per_leg,
            self.profile.policy(),
        );

        let rows = month
            .days()
            .filter(|date| can_register(*date))
            .map(|date| ReportRow {
                date,
                weekday: weekday_short_pt(date.weekday()),
                holiday: is_holiday(date),
                record: self.store.get_record(date),
            })
            .collect();

        MonthlyReport {
            month,
            title: format!("Relatório de Viagens - {}", month.label()),
            stats,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::trip::{Leg, Person};

    #[test]
    fn test_report_lists_weekdays_with_marks() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 12).unwrap();
        let store = AttendanceStore::new().set_trip_state(date, Person::William, Leg::Outbound, true);
        let profile = Profile::basic();
        let month = YearMonth::new(2024, 2).unwrap();

        let report = ReportUseCase::new(&store, &profile).build(month, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        assert_eq!(report.title, "Relatório de Viagens - fevereiro 2024");
        assert_eq!(report.rows.len(), 21);
        assert_eq!(report.rows[0].weekday, "Qui");

        let row = report.rows.iter().find(|r| r.date == date).unwrap();
        assert_eq!(row.weekday, "Seg");
        assert!(row.record.william.outbound_done);

        let carnaval = report.rows.iter().find(|r| r.holiday.is_some()).unwrap();
        assert_eq!(carnaval.holiday, Some("Carnaval"));
        assert_eq!(report.stats.william.confirmed_total, 300);
    }
}
