//! Damped decay — runs a lightly damped swing and exports the retained
//! trajectory window as CSV.

use oscil::{DT, Params, Simulation, deg_to_rad, rad_to_deg};

fn main() {
    let params = Params::builder()
        .damping(0.15)
        .damping_enabled(true)
        .build();
    let mut sim = Simulation::new(&params, deg_to_rad(60.0));

    let total_steps = (15.0 / DT) as usize;
    for _ in 0..total_steps {
        sim.step(&params);
    }

    println!("After {:.1} s:", sim.time());
    println!("  angle:     {:+.2}°", rad_to_deg(sim.angle()));
    println!("  velocity:  {:+.4} rad/s", sim.angular_velocity());
    println!("  energy:    {:.6} J", sim.energy(&params));
    if let Some(period) = sim.average_period() {
        println!("  avg period: {period:.3} s over {} cycles", sim.cycle_count());
    }

    let path = std::env::temp_dir().join("damped_decay.csv");
    match sim.trace().to_csv_file(&path) {
        Ok(()) => println!("\nWrote {} samples to {}", sim.trace().len(), path.display()),
        Err(e) => eprintln!("CSV export failed: {e}"),
    }
}
