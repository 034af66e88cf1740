//! # Tube Length Sweep
//!
//! Drains the bench bin through each candidate tube length and prints one
//! summary line per run: the time to reach the target drop, the final
//! surface height, and the Reynolds number of the initial outflow.
//!
//! An optional argument names a TOML config file. Quantities are read in SI
//! base units, and any field left out keeps its bench value:
//!
//! ```toml
//! time_step = 0.05
//! tube_lengths = [0.25, 0.5, 1.0]
//! ```
//!
//! ## Running the Example
//!
//! ```sh
//! RUST_LOG=debug cargo run --example sweep -- drain.toml
//! ```

use std::{env, error::Error, fs};

use log::info;
use tubedrain_model::{DrainConfig, DrainParameters};
use tubedrain_solvers::{drain::Solution, sweep};
use uom::si::{
    acceleration::meter_per_second_squared, length::meter, ratio::ratio, time::second,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => {
            info!("reading config from {path}");
            toml::from_str(&fs::read_to_string(path)?)?
        }
        None => DrainConfig::default(),
    };

    let params = DrainParameters::new(config)?;
    let solutions = sweep(&params, &params.termination())?;

    print_setup(&params);

    println!(
        "{:>8} {:>8} {:>10} {:>10} {:>10} {:>10}",
        "L [m]", "steps", "t [s]", "h0 [m]", "h [m]", "Re0"
    );
    for solution in &solutions {
        print_row(&params, solution);
    }

    Ok(())
}

fn print_setup(params: &DrainParameters) {
    println!(
        "bin {:.2} × {:.2} m, tube Ø{:.5} m, slope {:.4}, g = {:.2} m/s², dt = {} s",
        params.bin_width().get::<meter>(),
        params.bin_length().get::<meter>(),
        params.tube_diameter().get::<meter>(),
        params.slope().get::<ratio>(),
        params.gravity().get::<meter_per_second_squared>(),
        params.time_step().get::<second>(),
    );
    println!();
}

fn print_row(params: &DrainParameters, solution: &Solution) {
    let final_height = solution
        .last()
        .map_or(solution.start_height, |record| record.height);
    let initial_re = solution
        .history
        .first()
        .map_or(0.0, |record| params.tube_reynolds_number(record.v2).get::<ratio>());

    let marker = if solution.converged() { "" } else { " (capped)" };

    println!(
        "{:>8.2} {:>8} {:>10.1} {:>10.4} {:>10.4} {:>10.0}{marker}",
        solution.tube_length.get::<meter>(),
        solution.steps(),
        solution.elapsed.get::<second>(),
        solution.start_height.get::<meter>(),
        final_height.get::<meter>(),
        initial_re,
    );
}
