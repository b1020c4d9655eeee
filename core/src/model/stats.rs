use serde::{Deserialize, Serialize};

use crate::model::trip::Person;
use crate::time::YearMonth;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PersonStats {
    /// Kz spent on legs actually ridden this month.
    pub confirmed_total: u64,
    /// Round trips, counting half a trip per leg and truncating.
    pub completed_trips: u32,
    /// Days with at least one leg ridden.
    pub active_days: u32,
    pub average_per_active_day: f64,
    /// `confirmed_total` plus a full round trip on every remaining working day.
    pub forecast: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkingDays {
    pub total: u32,
    pub passed: u32,
    pub remaining: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MonthlyStats {
    pub month: YearMonth,
    pub cost_per_leg: u64,
    pub jorge: PersonStats,
    pub william: PersonStats,
    pub working_days: WorkingDays,
    /// Percentage of possible rider-days that had any attendance.
    pub attendance_efficiency: u32,
}

impl MonthlyStats {
    pub fn person(&self, person: Person) -> &PersonStats {
        match person {
            Person::Jorge => &self.jorge,
            Person::William => &self.william,
        }
    }

    pub fn group_total(&self) -> u64 {
        self.jorge.confirmed_total + self.william.confirmed_total
    }

    pub fn group_forecast(&self) -> u64 {
        self.jorge.forecast + self.william.forecast
    }
}
