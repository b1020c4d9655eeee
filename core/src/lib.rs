pub mod config;
pub mod eligibility;
pub mod model;
pub mod reducer;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use config::{AppConfig, Profile, ProfileKind, StatusModel, TRIP_COST_PER_WAY};
pub use eligibility::{can_register, is_holiday, EligibilityPolicy};
pub use model::stats::{MonthlyStats, PersonStats, WorkingDays};
pub use model::store::AttendanceStore;
pub use model::trip::{DayRecord, DayStatus, Leg, Person, TripState};
pub use reducer::{reduce, Action};
pub use repository::{FileStoreRepository, MemoryStoreRepository, StoreRepository};
pub use service::confirmation::{ConfirmationGate, PendingChange};
pub use service::tracker_service::TrackerService;
pub use time::{display_date, parse_human_date, YearMonth};
