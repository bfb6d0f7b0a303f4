//! End-of-run report printed to stdout.

use fab_core::Component;
use fab_sim::SimStats;

pub fn print_report(stats: &SimStats) {
    println!("Ticks run:  {}", stats.tick.0);
    println!("Source:     {}", stats.input_tally);
    println!("Sink:       {}", stats.output_tally);
    println!();

    let belt: Vec<String> = stats
        .belt_occupancy
        .iter()
        .map(|slot| slot.map_or_else(|| ".".to_string(), |c| c.to_string()))
        .collect();
    println!("Belt:       [{}]", belt.join(" "));
    println!();

    println!("{:<8} {:<6} {:<12}", "Worker", "Cell", "State");
    println!("{}", "-".repeat(28));
    for (i, (state, cell)) in stats.worker_states.iter().zip(&stats.worker_cells).enumerate() {
        println!("{:<8} {:<6} {:<12}", i, cell.0, state);
    }
    println!();

    println!(
        "Products delivered: {}  |  workers assembling: {}  |  unmatched inputs at sink: {}",
        stats.products(),
        stats.assembling_workers(),
        stats.output_tally.get(Some(Component::A)) + stats.output_tally.get(Some(Component::B)),
    );
    println!(
        "Units in: {}  |  units out: {}  |  conserved: {}",
        stats.units_in(),
        stats.units_out(),
        if stats.is_conserved() { "yes" } else { "NO" },
    );
}
