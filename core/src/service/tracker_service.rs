use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::config::{Profile, StatusModel};
use crate::eligibility::is_holiday;
use crate::model::stats::MonthlyStats;
use crate::model::store::AttendanceStore;
use crate::model::trip::DayRecord;
use crate::reducer::Action;
use crate::repository::StoreRepository;
use crate::service::confirmation::{ConfirmationGate, PendingChange};
use crate::time::{display_date, YearMonth};
use crate::usecase::statistics::compute_monthly_stats;

/// Owns the attendance store for the running application.
///
/// Edits go through the confirmation gate; every confirmed edit is reduced into a
/// new store and then flushed to the repository as a whole.
pub struct TrackerService<R: StoreRepository> {
    repo: R,
    profile: Profile,
    store: AttendanceStore,
    gate: ConfirmationGate,
}

impl<R: StoreRepository> TrackerService<R> {
    pub fn new(repo: R, profile: Profile) -> Self {
        let store = repo.load();
        Self {
            repo,
            profile,
            store,
            gate: ConfirmationGate::default(),
        }
    }

    pub fn store(&self) -> &AttendanceStore {
        &self.store
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn pending(&self) -> Option<&PendingChange> {
        self.gate.pending()
    }

    pub fn record(&self, date: NaiveDate) -> DayRecord {
        self.store.get_record(date)
    }

    pub fn is_registrable(&self, date: NaiveDate) -> bool {
        self.profile.policy().is_registrable(date)
    }

    /// Stages `action` for confirmation. The store is not touched.
    pub fn request(&mut self, action: Action) -> Result<PendingChange> {
        let date = action.date();
        if !self.is_registrable(date) {
            let reason = match is_holiday(date) {
                Some(name) if self.profile.holiday_blocks_registration => format!("feriado ({})", name),
                _ => "fim de semana".to_string(),
            };
            return Err(anyhow!("Cannot register trips on {}: {}", display_date(date), reason));
        }

        let allowed = match (self.profile.status_model, &action) {
            (StatusModel::PerLegToggle, Action::ToggleLeg { .. } | Action::SetLeg { .. }) => true,
            (StatusModel::FullDayStatus, Action::SetStatus { .. }) => true,
            _ => false,
        };
        if !allowed {
            return Err(anyhow!(
                "Action not available in the {:?} profile, which edits days by {:?}",
                self.profile.kind,
                self.profile.status_model
            ));
        }

        let change = self.gate.request(&self.store, action);
        tracing::debug!(?action, "change staged");
        Ok(change)
    }

    /// Applies the staged change and persists the whole store. Returns the applied action.
    pub fn confirm(&mut self) -> Option<Action> {
        let (action, next) = self.gate.confirm(&self.store)?;
        self.store = next;
        self.persist();
        tracing::info!(?action, "change confirmed");
        Some(action)
    }

    pub fn cancel(&mut self) -> Option<PendingChange> {
        let discarded = self.gate.cancel();
        if discarded.is_some() {
            tracing::debug!("change cancelled");
        }
        discarded
    }

    pub fn stats(&self, month: YearMonth, today: NaiveDate) -> MonthlyStats {
        compute_monthly_stats(&self.store, month, today, self.profile.cost_per_leg, self.profile.policy())
    }

    // A failed write leaves memory ahead of disk until the next successful save.
    fn persist(&self) {
        if let Err(e) = self.repo.save(&self.store) {
            tracing::warn!(error = %e, "failed to persist attendance store");
        }
    }
}
