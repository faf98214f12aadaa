use anyhow::Result;
use clap::Parser;
use limbic::metrics::{confusion_matrix, mae, map_at_k, precision_at_k, recall_at_k, rmse};
use limbic::SentimentPipeline;
use log::info;
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Analyze a single text instead of the built-in demo batch
    #[arg(short, long)]
    text: Option<String>,

    /// Skip the evaluation metrics showcase
    #[arg(long)]
    no_metrics: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    info!("=== Starting Sentiment Pipeline Demo ===");

    let start_time = Instant::now();
    info!("Training pipeline...");
    let pipeline = SentimentPipeline::new()?;
    let build_time = start_time.elapsed();

    let stats = pipeline.info();
    info!(
        "=== Pipeline Trained Successfully (took {:.2?}, vocabulary: {} terms) ===\n",
        build_time, stats.vocabulary_size
    );

    if let Some(text) = args.text {
        process_input(&pipeline, &text)?;
        return Ok(());
    }

    let test_inputs = vec![
        // Clear single-class cases
        "amazing hotel, excellent service",
        "terrible experience, never again",
        "it was okay, nothing special",
        "The staff were incredibly friendly and the room was spotless!",
        "Never coming back. Dirty, noisy, and overpriced.",
        // Mixed cases
        "Great location but the rooms were dirty",
        "Average hotel with exceptional breakfast",
        // Edge cases
        "ok",
        "Check out the deal at http://example.com/hotel !!!",
        "the of and",
    ];

    info!("=== Running Analyses ({} inputs) ===\n", test_inputs.len());
    let analyze_start = Instant::now();

    for (i, text) in test_inputs.iter().enumerate() {
        info!(
            "\nTest {}/{} (elapsed: {:.2?}):",
            i + 1,
            test_inputs.len(),
            analyze_start.elapsed()
        );
        process_input(&pipeline, text)?;
    }

    let analyze_time = analyze_start.elapsed();
    info!("\n=== Analyses Complete ===");
    info!("Build time: {:.2?}", build_time);
    info!("Analysis time: {:.2?}", analyze_time);
    info!(
        "Average time per analysis: {:.2?}",
        analyze_time / test_inputs.len() as u32
    );

    if !args.no_metrics {
        metrics_showcase()?;
    }

    Ok(())
}

fn process_input(pipeline: &SentimentPipeline, text: &str) -> Result<()> {
    let result = pipeline.analyze(text)?;
    println!("\nInput: {}", text);
    println!("  Sentiment:  {}", result.sentiment);
    println!("  Confidence: {:.1}%", result.confidence * 100.0);
    println!("  Score:      {}", result.score);
    Ok(())
}

fn metrics_showcase() -> Result<()> {
    info!("\n=== Evaluation Metrics Showcase ===");

    // Ranking metrics on a toy recommendation list
    let relevant = vec![1u32, 2, 3];
    let recommended = vec![1u32, 4, 2, 5, 3];
    println!("\nRanking (relevant {relevant:?}, recommended {recommended:?}):");
    println!(
        "  precision@3: {:.3}",
        precision_at_k(&relevant, &recommended, 3)
    );
    println!("  recall@3:    {:.3}", recall_at_k(&relevant, &recommended, 3));
    println!(
        "  map@5:       {:.3}",
        map_at_k(&[relevant.clone()], &[recommended.clone()], 5)
    );

    // Regression metrics on toy price predictions
    let y_true = vec![120.0f32, 95.0, 150.0, 80.0];
    let y_pred = vec![110.0f32, 100.0, 140.0, 90.0];
    println!("\nRegression (prices {y_true:?} vs {y_pred:?}):");
    println!("  rmse: {:.3}", rmse(&y_true, &y_pred));
    println!("  mae:  {:.3}", mae(&y_true, &y_pred));

    // Classification metrics on toy sentiment labels
    let labels_true = vec![0usize, 1, 2, 1, 0, 2];
    let labels_pred = vec![0usize, 1, 1, 1, 0, 2];
    let matrix = confusion_matrix(&labels_true, &labels_pred, 3)?;
    println!("\nConfusion matrix (3 classes):\n{matrix}");

    Ok(())
}
