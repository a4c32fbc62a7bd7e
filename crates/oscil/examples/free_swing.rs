//! Free swing — validates the measured period against small-angle theory
//! and tracks energy drift over 20 simulated seconds.

use oscil::{DT, Params, Simulation, deg_to_rad, natural_frequency, natural_period, rad_to_deg};

fn main() {
    let params = Params::default();
    let mut sim = Simulation::new(&params, deg_to_rad(30.0));

    let expected_period = natural_period(&params);
    println!("Small-angle period: {expected_period:.4} s");
    println!("Small-angle frequency: {:.4} Hz", natural_frequency(&params));

    let e0 = sim.energy(&params);
    println!("Initial energy: {e0:.6} J");
    println!("Initial angle:  {:.1}°\n", rad_to_deg(sim.angle()));

    println!("time(s)    θ(°)       ω(rad/s)   E(J)       T_meas(s)  cycles");
    println!("────────────────────────────────────────────────────────────────");

    let total_steps = (20.0 / DT) as usize;
    for step in 0..total_steps {
        sim.step(&params);

        if step % 240 == 0 {
            let measured = sim
                .measured_period()
                .map_or_else(|| "      —".to_string(), |t| format!("{t:7.3}"));
            println!(
                "{:7.3}   {:+8.3}   {:+8.4}   {:8.6}   {}   {:5}",
                sim.time(),
                rad_to_deg(sim.angle()),
                sim.angular_velocity(),
                sim.energy(&params),
                measured,
                sim.cycle_count(),
            );
        }
    }

    let e_final = sim.energy(&params);
    println!("\nFinal energy:  {e_final:.6} J");
    println!("Energy drift:  {:.2e} (relative)", ((e_final - e0) / e0).abs());

    if let Some(average) = sim.average_period() {
        let error = ((average - expected_period) / expected_period).abs();
        println!("\nMeasured period (avg): {average:.4} s over {} cycles", sim.cycle_count());
        println!("Small-angle period:    {expected_period:.4} s");
        println!("Difference:            {:.2}% (amplitude effect)", error * 100.0);
    }
}
