//! Coverage Split Example
//!
//! Decomposes an operational area off Leixões and splits it into one
//! row-block per vehicle.
//!
//! Run with: RUST_LOG=debug cargo run --example coverage_split -p mvplan-decomposition

use mvplan_core::{logging, GeoCoordinate, PlanningConfig};
use mvplan_decomposition::GridArea;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = PlanningConfig::default_config();
    let center = GeoCoordinate::new(41.1851, -8.7044)?;
    let vehicles = ["lauv-xplore-1", "lauv-xplore-2", "lauv-noptilus-3"];

    println!("=== Coverage Split Example ===\n");

    let mut grid = GridArea::new(300.0, 200.0, center, &config.decomposition)?;
    grid.decompose()?;
    println!(
        "Decomposed {:.2} x {:.2} m into {} x {} cells ({:.2} x {:.2} m)\n",
        grid.grid_width(),
        grid.grid_height(),
        grid.number_of_rows(),
        grid.number_of_columns(),
        grid.cell_width(),
        grid.cell_height(),
    );

    let blocks = grid.split(vehicles.len())?;
    for (vehicle, block) in vehicles.iter().zip(&blocks) {
        let cells = block.area_cells();
        println!(
            "{:<16} rows {:>2}..{:<2} {:>3} cells, first at {}",
            vehicle,
            block.first_row(),
            block.first_row() + block.number_of_rows(),
            cells.len(),
            cells[0].location(),
        );
    }

    let corners = grid.bounds();
    println!("\nArea bounds:");
    for (name, corner) in ["top-left", "top-right", "bottom-left", "bottom-right"]
        .iter()
        .zip(corners.iter())
    {
        println!("  {:<13} {}", name, corner);
    }

    Ok(())
}
