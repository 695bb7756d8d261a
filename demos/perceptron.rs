use perceptron_lab::{classification_report, train, Dataset, TrainConfig};

fn main() {
    env_logger::init();

    // The classic OR-like point set: three positives, one negative.
    let dataset = Dataset::new(
        vec![vec![1.0, 1.0], vec![1.0, 0.0], vec![0.0, 1.0]],
        vec![vec![0.0, 0.0]],
    ).expect("hand-picked dataset is valid");

    let config = TrainConfig { seed: Some(42), ..TrainConfig::default() };
    let report = train(&dataset, &config).expect("valid dataset and config");

    println!("Final W: {:?}", report.model.weights);
    println!("Iterations: {} ({} passes, {:?})", report.iterations, report.passes, report.status);

    println!("\nTesting:");
    let grid = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    for row in classification_report(&report.model, &grid) {
        println!(
            "({},{}) -> score={:.2}, pred={}",
            row.point[0], row.point[1], row.score, row.label
        );
    }
}
