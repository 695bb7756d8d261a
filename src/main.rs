// This binary crate is intentionally minimal.
// All the library logic lives in src/lib.rs and its modules.
// Run the demos with:
//   cargo run --example or_gate
//   cargo run --example perceptron
//   cargo run --example separability
fn main() {
    println!("perceptron-lab: early neural computation in Rust.");
    println!("Run `cargo run --example or_gate` for the McCulloch-Pitts OR check,");
    println!("`cargo run --example perceptron` for the perceptron trainer,");
    println!("or `cargo run --example separability` for the AND/OR/XOR analysis.");
}
