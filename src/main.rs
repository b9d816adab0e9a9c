// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use animal_classifier_node::{
    api::{start_server, AppState},
    classifier::ImageClassifier,
    config::NodeConfig,
    version,
};
use anyhow::Result;
use std::{env, sync::Arc};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("🚀 Starting Animal Classifier Node...\n");
    println!("📦 BUILD VERSION: {}", version::VERSION);
    println!("📅 Build Date: {}", version::BUILD_DATE);
    println!();

    let config = NodeConfig::from_env();

    println!("🧠 Loading classifier model...");
    println!("   Model:  {}", config.model_path.display());
    println!("   Labels: {}", config.labels_path.display());

    let classifier = match ImageClassifier::new(&config.model_path, &config.labels_path).await {
        Ok(classifier) => {
            println!(
                "✅ Classifier ready ({}, {} classes)",
                classifier.model_name(),
                classifier.class_count()
            );
            classifier
        }
        Err(e) => {
            eprintln!("❌ Failed to load classifier: {}", e);
            eprintln!("   Ensure MODEL_PATH points at the ONNX model export and");
            eprintln!("   LABELS_PATH at its class-index JSON.");
            return Err(e);
        }
    };

    let state = AppState::new(Arc::new(classifier));

    let separator = "=".repeat(60);
    println!("\n{}", separator);
    println!("🎉 {} is running!", version::get_version_string());
    println!("{}", separator);
    println!("API Port:       {}", config.api_port);
    println!("Model:          {}", config.model_path.display());
    println!("\nAPI Endpoints:");
    println!("  Health:       http://localhost:{}/health", config.api_port);
    println!(
        "  Classify:     POST http://localhost:{}/classify",
        config.api_port
    );
    println!("\nTest with curl:");
    println!(
        "  curl -X POST http://localhost:{}/classify \\",
        config.api_port
    );
    println!("    -F 'file=@/path/to/image.jpg'");
    println!("\nPress Ctrl+C to shutdown...");
    println!("{}\n", separator);

    start_server(&config, state)
        .await
        .map_err(|e| anyhow::anyhow!("API server failed: {}", e))?;

    println!("\n👋 Goodbye!");
    Ok(())
}
