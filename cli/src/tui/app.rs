use chrono::{Datelike, Duration, NaiveDate};
use mototracker_core::{
    usecase::month_view::{build_month_view, CalendarCell},
    Action, DayStatus, Leg, MonthlyStats, PendingChange, Person, StatusModel, StoreRepository,
    TrackerService, YearMonth,
};

pub struct App<R: StoreRepository> {
    pub service: TrackerService<R>,
    pub today: NaiveDate,
    pub month: YearMonth,
    pub cursor: NaiveDate,
    pub person: Person,
    pub message: Option<String>,
}

impl<R: StoreRepository> App<R> {
    pub fn new(service: TrackerService<R>, today: NaiveDate) -> Self {
        App {
            service,
            today,
            month: YearMonth::of(today),
            cursor: today,
            person: Person::Jorge,
            message: None,
        }
    }

    pub fn weeks(&self) -> Vec<[CalendarCell; 7]> {
        build_month_view(self.service.store(), self.month, self.today, self.service.profile().policy())
    }

    pub fn stats(&self) -> MonthlyStats {
        self.service.stats(self.month, self.today)
    }

    pub fn pending(&self) -> Option<&PendingChange> {
        self.service.pending()
    }

    pub fn move_days(&mut self, days: i64) {
        if let Some(date) = self.cursor.checked_add_signed(Duration::days(days)) {
            self.cursor = date;
            self.month = YearMonth::of(date);
        }
    }

    pub fn next_month(&mut self) {
        if let Some(month) = self.month.next() {
            self.jump_to_month(month);
        }
    }

    pub fn previous_month(&mut self) {
        if let Some(month) = self.month.previous() {
            self.jump_to_month(month);
        }
    }

    fn jump_to_month(&mut self, month: YearMonth) {
        self.month = month;
        let day = self.cursor.day().min(month.last_day().day());
        self.cursor = month.first_day().with_day(day).unwrap_or(month.first_day());
    }

    pub fn go_today(&mut self) {
        self.cursor = self.today;
        self.month = YearMonth::of(self.today);
    }

    pub fn switch_person(&mut self) {
        self.person = match self.person {
            Person::Jorge => Person::William,
            Person::William => Person::Jorge,
        };
    }

    /// Per-leg profiles flip `leg`; full-day profiles ignore it.
    pub fn request_leg(&mut self, leg: Leg) {
        if self.service.profile().status_model != StatusModel::PerLegToggle {
            self.message = Some("Use 1-4 para definir o estado do dia".to_string());
            return;
        }
        self.request(Action::ToggleLeg { date: self.cursor, person: self.person, leg });
    }

    pub fn request_status(&mut self, status: DayStatus) {
        if self.service.profile().status_model != StatusModel::FullDayStatus {
            self.message = Some("Use i/r para marcar ida ou regresso".to_string());
            return;
        }
        self.request(Action::SetStatus { date: self.cursor, person: self.person, status });
    }

    pub fn cycle_status(&mut self) {
        let next = self.service.store().day_status(self.cursor, self.person).next();
        self.request_status(next);
    }

    fn request(&mut self, action: Action) {
        match self.service.request(action) {
            Ok(_) => self.message = None,
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    pub fn confirm(&mut self) {
        if self.service.confirm().is_some() {
            self.message = Some("Alteração guardada".to_string());
        }
    }

    pub fn cancel(&mut self) {
        self.service.cancel();
        self.message = None;
    }
}
