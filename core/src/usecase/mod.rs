pub mod month_view;
pub mod report;
pub mod statistics;
