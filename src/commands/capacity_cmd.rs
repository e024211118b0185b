use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::services::capacity_store::CapacityStore;

pub fn set_capacity_command(cmd: Commands) -> ExitCode {
    let Commands::SetCapacity {
        store,
        id,
        capacity,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let mut capacities = match CapacityStore::load(&store) {
        Ok(capacities) => capacities,
        Err(e) => {
            eprintln!("Failed to load capacities: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = capacities.set(&id, capacity) {
        eprintln!("Failed to set capacity: {e}");
        return ExitCode::FAILURE;
    }
    if let Err(e) = capacities.save(&store) {
        eprintln!("Failed to save capacities: {e}");
        return ExitCode::FAILURE;
    }

    println!("Capacity {capacity} for {} written to {store}", id.trim());
    ExitCode::SUCCESS
}
