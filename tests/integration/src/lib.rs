//! Integration tests across the mvplan crates
//!
//! This test suite validates:
//! - Decomposition, splitting and allocation of row-blocks to vehicles
//! - Availability tracking fed from concurrent event producers
//! - Plan eligibility filtered by fleet availability

pub mod test_utils;

#[cfg(test)]
mod coverage_allocation_tests;

#[cfg(test)]
mod fleet_event_tests;
