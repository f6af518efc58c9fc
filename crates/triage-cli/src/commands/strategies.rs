//! Strategy listing.

use triage_core::Strategy;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    for strategy in Strategy::all() {
        let w = strategy.weights();
        println!(
            "{:<16} urgency={:<4} importance={:<4} quick_bonus={:<4} {}",
            strategy.name(),
            w.urgency_weight,
            w.importance_weight,
            w.quick_bonus_factor,
            strategy.description()
        );
    }
    Ok(())
}
