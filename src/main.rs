use anyhow::Context;

use legal_assist::config::read_input_file;
use legal_assist::samples::{CONTRACT_SNIPPET, SAMPLE_EMAIL};
use legal_assist::{AssistantConfig, LegalAssistant};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = AssistantConfig::from_env()?;

    eprintln!("⚖️  Legal Assist v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Backend: {}", config.backend.label());
    eprintln!("   Model: {}", config.model);

    let email = read_input("LEGAL_ASSIST_EMAIL_FILE", SAMPLE_EMAIL).await?;
    let contract = read_input("LEGAL_ASSIST_CONTRACT_FILE", CONTRACT_SNIPPET).await?;

    let assistant = LegalAssistant::new(&config)?;
    eprintln!("   Mode: {}\n", assistant.mode());

    println!("--- PART 1: EMAIL ANALYSIS ---");
    let analysis = assistant.analyze(&email).await?;
    println!("{}", analysis.to_pretty_json());

    println!("\n--- PART 2: DRAFT REPLY ---");
    let reply = assistant.draft(&email, &analysis, &contract).await?;
    println!("{}", reply);

    Ok(())
}

/// Read the file named by `env_key`, or fall back to the built-in sample.
async fn read_input(env_key: &str, sample: &str) -> anyhow::Result<String> {
    match std::env::var(env_key) {
        Ok(path) if !path.trim().is_empty() => read_input_file(path.trim())
            .await
            .with_context(|| format!("failed to read {env_key}={path}")),
        _ => Ok(sample.to_string()),
    }
}
