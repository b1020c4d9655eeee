pub mod holiday;
pub mod stats;
pub mod store;
pub mod trip;
