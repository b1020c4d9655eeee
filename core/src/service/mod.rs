pub mod confirmation;
pub mod tracker_service;

#[cfg(test)]
mod tracker_service_test;
