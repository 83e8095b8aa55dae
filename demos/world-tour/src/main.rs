//! world-tour — smallest runnable demo of the rust_aco solver.
//!
//! Optimizes a closed tour over 12 European capitals with the reference
//! tuning (16 ants, 10 iterations).  Pass a CSV path as the first argument
//! to solve your own instance instead:
//!
//! ```csv
//! name,latitude,longitude
//! Vienna,48.2082,16.3738
//! ...
//! ```

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use aco_colony::{Colony, ColonyObserver, Tour};
use aco_core::ColonyConfig;
use aco_input::{load_cities_csv, load_cities_reader};
use aco_model::DistanceMatrix;

// ── Embedded instance ─────────────────────────────────────────────────────────

const CAPITALS_CSV: &str = "\
name,latitude,longitude
Vienna,48.2082,16.3738
Berlin,52.5200,13.4050
Paris,48.8566,2.3522
Rome,41.9028,12.4964
Madrid,40.4168,-3.7038
Lisbon,38.7223,-9.1393
Amsterdam,52.3676,4.9041
Copenhagen,55.6761,12.5683
Warsaw,52.2297,21.0122
Budapest,47.4979,19.0402
Athens,37.9838,23.7275
Stockholm,59.3293,18.0686
";

// ── Progress printing ─────────────────────────────────────────────────────────

struct ProgressPrinter {
    iteration_start: Instant,
}

impl ColonyObserver for ProgressPrinter {
    fn on_iteration_start(&mut self, _iteration: u32) {
        self.iteration_start = Instant::now();
    }

    fn on_new_best(&mut self, iteration: u32, best: &Tour) {
        println!("  iteration {iteration}: new best = {:.2} km", best.length_km);
    }

    fn on_iteration_end(&mut self, iteration: u32, _generation: &[Tour]) {
        println!(
            "  iteration {iteration} took {:.1} ms",
            self.iteration_start.elapsed().as_secs_f64() * 1e3
        );
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cities = match std::env::args().nth(1) {
        Some(path) => load_cities_csv(Path::new(&path))?,
        None => load_cities_reader(Cursor::new(CAPITALS_CSV))?,
    };
    println!("{} cities loaded", cities.len());
    for c in &cities {
        println!("  {c}");
    }

    let distances = DistanceMatrix::build(&cities)?;
    let mut colony = Colony::new(distances, ColonyConfig::default())?;

    let run_start = Instant::now();
    let best = colony.run(&mut ProgressPrinter { iteration_start: run_start });
    println!("run took {:.1} ms", run_start.elapsed().as_secs_f64() * 1e3);

    let names: Vec<&str> = best
        .city_ids()
        .map(|id| cities[id.index()].name.as_str())
        .collect();
    println!("best tour ({:.2} km): {}", best.length_km, names.join(" -> "));

    Ok(())
}
