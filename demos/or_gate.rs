use perceptron_lab::{Gate, McCullochPitts};

fn main() {
    env_logger::init();

    println!("VERIFICATION: McCulloch-Pitts Neuron as OR Gate");
    println!("{}", "=".repeat(50));

    let unit = McCullochPitts::or_unit();
    let gate = Gate::Or;

    println!("\nChecking all inputs:");
    println!("Input | Correct OR | MP Neuron | Match?");
    println!("{}", "-".repeat(40));

    for ((x1, x2), expected) in gate.truth_table() {
        let actual = unit.activate(&[f64::from(x1), f64::from(x2)]);
        let mark = if actual == expected { "ok" } else { "MISMATCH" };
        println!("({x1},{x2})   |     {expected}     |     {actual}     |   {mark}");
    }

    println!("\n{}", "=".repeat(50));
    if gate.verify(&unit) {
        println!("SUCCESS: McCulloch-Pitts neuron correctly implements OR gate!");
    } else {
        println!("FAILED: Does not correctly implement OR gate");
    }
}
