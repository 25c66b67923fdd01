//! Relaycheck CLI
//!
//! Command-line interface for checking relay proofs, relay responses and
//! challenge requests read from JSON files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use tracing::info;

use relaycheck_core::{
    ChallengeRequest, QueryAppsResponse, QueryNodeResponse, RelayProof, RelayResponse,
    ValidationError,
};
use relaycheck_crypto::{proof_digest_hex, Ed25519Verifier};
use relaycheck_logging::{filter_for, init_logging};
use relaycheck_settings::{default_settings_path, Settings};
use relaycheck_validator::{validate_relay_proof, ChallengeValidator, MajorityPolicy};

/// Relaycheck - relay proof and challenge validator
#[derive(Parser)]
#[command(name = "relaycheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the structure of a relay proof
    Proof {
        /// JSON file holding a relay proof
        file: PathBuf,
    },

    /// Verify a servicer-signed relay response
    Response {
        /// JSON file holding a relay response
        file: PathBuf,
    },

    /// Validate a challenge request
    Challenge {
        /// JSON file holding a challenge request
        file: PathBuf,

        /// Only the last majority relay decides the majority outcome
        #[arg(long)]
        last_wins: bool,
    },

    /// Print the hex digest a servicer signs for a relay proof
    Digest {
        /// JSON file holding a relay proof
        file: PathBuf,
    },

    /// Check a "query node" RPC result
    Node {
        /// JSON file holding a query node response
        file: PathBuf,
    },

    /// List applications from a "query applications" RPC result
    Apps {
        /// JSON file holding a query applications response
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings_path = cli.config.clone().unwrap_or_else(default_settings_path);
    let settings = Settings::load_from(&settings_path)
        .with_context(|| format!("Failed to load settings from {:?}", settings_path))?;

    let directive = if cli.verbose {
        filter_for(true).to_string()
    } else {
        settings.logging.filter.clone()
    };
    init_logging(&directive);

    let mut config = settings.validator.to_config();

    let outcome = match cli.command {
        Commands::Proof { file } => {
            let proof: RelayProof = read_json(&file)?;
            validate_relay_proof(&proof)
        }
        Commands::Response { file } => {
            let response: RelayResponse = read_json(&file)?;
            ChallengeValidator::with_config(config, Ed25519Verifier)
                .validate_relay_response(&response)
                .await
        }
        Commands::Challenge { file, last_wins } => {
            let request: ChallengeRequest = read_json(&file)?;
            if last_wins {
                config.majority_policy = MajorityPolicy::LastWins;
            }
            info!(
                "Validating challenge with {} majority relays",
                request.majority_response.len()
            );
            ChallengeValidator::with_config(config, Ed25519Verifier)
                .validate_challenge_request(&request)
                .await
        }
        Commands::Digest { file } => {
            let proof: RelayProof = read_json(&file)?;
            let digest = proof_digest_hex(&proof).context("Failed to digest proof")?;
            println!("{}", digest);
            return Ok(());
        }
        Commands::Node { file } => {
            let json = read_file(&file)?;
            let response = QueryNodeResponse::from_json(&json).context("Invalid node response")?;
            println!("{}", serde_json::to_string_pretty(&response.to_json())?);
            return Ok(());
        }
        Commands::Apps { file } => {
            let json = read_file(&file)?;
            let response =
                QueryAppsResponse::from_json(&json).context("Invalid applications response")?;
            for app in &response.applications {
                let state = if app.is_valid() { "valid" } else { "invalid" };
                println!(
                    "{} status={:?} chains={} ({})",
                    app.address,
                    app.status,
                    app.chains.join(","),
                    state
                );
            }
            return Ok(());
        }
    };

    report(outcome)
}

fn report(outcome: std::result::Result<(), ValidationError>) -> Result<()> {
    match outcome {
        Ok(()) => {
            println!("valid");
            Ok(())
        }
        Err(e) => {
            eprintln!("invalid: {}", e);
            std::process::exit(1);
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json = read_file(path)?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse {:?}", path))
}
