use perceptron_lab::{train, Gate, TrainConfig, TrainStatus};

fn main() {
    env_logger::init();

    println!("{}", "=".repeat(70));
    println!("GATE COMPARISON: LINEAR SEPARABILITY ANALYSIS");
    println!("{}", "=".repeat(70));

    println!("\n{}", "-".repeat(70));
    println!("{:<10} {:<25} {:<25}", "Gate", "Linearly Separable?", "Perceptron Converged?");
    println!("{}", "-".repeat(70));

    for gate in [Gate::And, Gate::Or, Gate::Xor] {
        let dataset = gate.dataset().expect("gate truth tables are valid datasets");

        // The bias term lets the boundary leave the origin, which AND needs.
        let config = TrainConfig { with_bias: true, seed: Some(42), ..TrainConfig::default() };
        let report = train(&dataset, &config).expect("valid dataset and config");

        let separable = if gate.linearly_separable() { "YES" } else { "NO" };
        let converged = match report.status {
            TrainStatus::Converged => "YES",
            TrainStatus::IterationLimitReached => "NO (iteration limit)",
        };
        println!("{:<10} {:<25} {:<25}", gate.name(), separable, converged);

        if let Some((slope, intercept)) = report.model.boundary_line() {
            if report.status == TrainStatus::Converged {
                println!("           boundary: x2 = {slope:.3} * x1 + {intercept:.3}");
            }
        }
    }

    println!("{}", "-".repeat(70));
    println!("\nXOR has no separating line: (0,1) and (1,0) are class 1 while");
    println!("(0,0) and (1,1) are class 0 — a single-layer perceptron cannot learn it.");
}
