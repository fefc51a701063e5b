//! MVPlan Planning
//!
//! Plan assignments for multi-vehicle allocation. A [`PlanTask`] carries an
//! opaque plan body, the [`Profile`] of vehicles allowed to execute it and a
//! freshness timestamp. Allocators combine [`PlanTask::contains_vehicle`]
//! with fleet availability to shortlist candidates.

#![warn(missing_docs)]

pub mod profile;
pub mod task;

pub use profile::Profile;
pub use task::PlanTask;
