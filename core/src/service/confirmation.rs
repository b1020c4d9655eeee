use crate::model::store::AttendanceStore;
use crate::model::trip::TripState;
use crate::reducer::{reduce, Action};
use crate::time::display_date;

/// A staged edit together with the rider's state before and after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingChange {
    pub action: Action,
    pub before: TripState,
    pub after: TripState,
}

impl PendingChange {
    pub fn stage(store: &AttendanceStore, action: Action) -> Self {
        let before = *store.get_record(action.date()).person(action.person());
        let after = *reduce(store, &action).get_record(action.date()).person(action.person());
        Self { action, before, after }
    }

    pub fn is_noop(&self) -> bool {
        self.before == self.after
    }

    /// Question shown before applying the change.
    pub fn prompt(&self) -> String {
        let date = display_date(self.action.date());
        let person = self.action.person();
        match self.action {
            Action::ToggleLeg { leg, .. } | Action::SetLeg { leg, .. } => {
                let outcome = if self.after.get(leg) { "realizada" } else { "não realizada" };
                format!(
                    "Deseja marcar a {} para {} em {} como {}?",
                    leg.label().to_uppercase(),
                    person,
                    date,
                    outcome
                )
            }
            Action::SetStatus { status, .. } => format!(
                "Deseja definir o dia {} de {} como {} (antes: {})?",
                date,
                person,
                status,
                self.before.status()
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmationGate {
    #[default]
    Idle,
    Pending(PendingChange),
}

impl ConfirmationGate {
    /// Stages `action`, replacing whatever was pending.
    pub fn request(&mut self, store: &AttendanceStore, action: Action) -> PendingChange {
        let change = PendingChange::stage(store, action);
        *self = ConfirmationGate::Pending(change);
        change
    }

    /// Applies the staged change to `store`; `None` when nothing was pending.
    pub fn confirm(&mut self, store: &AttendanceStore) -> Option<(Action, AttendanceStore)> {
        match std::mem::take(self) {
            ConfirmationGate::Pending(change) => Some((change.action, reduce(store, &change.action))),
            ConfirmationGate::Idle => None,
        }
    }

    pub fn cancel(&mut self) -> Option<PendingChange> {
        match std::mem::take(self) {
            ConfirmationGate::Pending(change) => Some(change),
            ConfirmationGate::Idle => None,
        }
    }

    pub fn pending(&self) -> Option<&PendingChange> {
        match self {
            ConfirmationGate::Pending(change) => Some(change),
            ConfirmationGate::Idle => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending().is_some()
    }
}
