//! Coverage allocation tests
//!
//! Decompose an area, shortlist vehicles through profiles and availability,
//! and hand each available vehicle its own row-block.

use crate::test_utils::*;
use mvplan_decomposition::{CellIndex, DecompositionError, GridArea, MapDecomposition};
use mvplan_fleet::VehicleState;
use mvplan_planning::{PlanTask, Profile};
use serde_json::json;
use std::collections::HashSet;

const FLEET: [&str; 4] = [
    "lauv-xplore-1",
    "lauv-xplore-2",
    "lauv-noptilus-1",
    "lauv-seacon-1",
];

fn coverage_task(grid: &GridArea) -> PlanTask {
    PlanTask::new(
        "coverage-leixoes",
        json!({ "rows": grid.number_of_rows(), "cols": grid.number_of_columns() }),
        Profile::new("sidescan", FLEET[..3].iter().copied()),
        1_455_532_800.0,
    )
}

#[test]
fn test_blocks_cover_grid_exactly_once() {
    init_logging();
    let grid = decomposed_grid(210.0, 150.0);
    let (registry, awareness) = test_awareness();

    registry.report(FLEET[1], true);
    awareness.on_vehicle_state_changed(&state_event(FLEET[0], VehicleState::Finished));
    awareness.on_vehicle_state_changed(&state_event(FLEET[1], VehicleState::Service));
    awareness.on_vehicle_state_changed(&state_event(FLEET[2], VehicleState::Maneuver));
    awareness.on_vehicle_state_changed(&state_event(FLEET[3], VehicleState::Finished));

    let task = coverage_task(&grid);
    let candidates = task.eligible_vehicles(|id| awareness.is_vehicle_available(id));
    assert_eq!(candidates, vec!["lauv-xplore-1", "lauv-xplore-2"]);
    assert!(!task.contains_vehicle(FLEET[3]));

    let blocks = grid.split(candidates.len()).expect("two vehicles can share ten rows");
    let mut covered = HashSet::new();
    for (vehicle, block) in candidates.iter().zip(&blocks) {
        assert!(task.contains_vehicle(vehicle));
        tracing::info!(vehicle, first_row = block.first_row(), rows = block.number_of_rows(), "Assigned block");
        for cell in block.area_cells() {
            assert!(covered.insert(cell.index()), "cell {} assigned twice", cell.index());
        }
    }

    let all: HashSet<CellIndex> = grid.area_cells().iter().map(|c| c.index()).collect();
    assert_eq!(covered, all);
    assert_eq!(all.len(), 100);
}

#[test]
fn test_single_candidate_cannot_split() {
    init_logging();
    let grid = decomposed_grid(210.0, 150.0);
    let (_, awareness) = test_awareness();

    awareness.on_vehicle_state_changed(&state_event(FLEET[0], VehicleState::Finished));
    let task = coverage_task(&grid);
    let candidates = task.eligible_vehicles(|id| awareness.is_vehicle_available(id));

    assert_eq!(
        grid.split(candidates.len()).unwrap_err(),
        DecompositionError::InvalidPartitionCount {
            requested: 1,
            rows: 10
        }
    );
    assert_eq!(grid.area_cells().len(), 100);
}

#[test]
fn test_blocks_can_be_split_again() {
    let grid = decomposed_grid(210.0, 150.0);
    let halves = MapDecomposition::split(&grid, 2).unwrap();
    let quarters = halves[1].split(2).unwrap();

    assert_eq!(
        quarters.iter().map(|q| q.first_row()).collect::<Vec<_>>(),
        vec![5, 7]
    );
    assert_eq!(
        quarters.iter().map(|q| q.number_of_rows()).collect::<Vec<_>>(),
        vec![2, 3]
    );

    let original = grid.cell(CellIndex::new(7, 4)).unwrap();
    let nested = quarters[1].cell(CellIndex::new(7, 4)).unwrap();
    assert!(std::sync::Arc::ptr_eq(original, nested));
}

#[test]
fn test_refreshed_task_carries_block_cells() {
    let grid = decomposed_grid(110.0, 90.0);
    let blocks = grid.split(2).unwrap();
    let mut task = coverage_task(&grid);

    let cells: Vec<_> = blocks[1].area_cells().iter().map(|c| c.index()).collect();
    task.set_plan(json!({ "cells": cells }));
    task.set_timestamp(1_455_532_900.0);

    assert_eq!(task.plan()["cells"].as_array().unwrap().len(), 15);
    assert_eq!(task.plan()["cells"][0], json!({ "row": 2, "col": 0 }));
    assert!(task.is_stale(1_455_533_000.0, 60.0));
}
