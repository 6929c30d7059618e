// ==========================================
// Scan-to-BIM CPQ - CLI Entry Point
// ==========================================
// Usage: cpq-engine <request.json> [--tables <rate_tables.json>]
// Reads one quote request, runs the pricing engine and prints the
// quote document as JSON on stdout.
// ==========================================

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use scan2bim_cpq::config;
use scan2bim_cpq::engine::{
    calculate_margin_percent, calculate_tier_a_pricing, get_margin_status, validate_margin_gate,
    PricingEngine,
};
use scan2bim_cpq::{
    logging, MarginStatusInfo, PricingResult, QuoteRequest, RateTables, TierAPricingResult,
};
use serde::Serialize;
use std::path::PathBuf;
use uuid::Uuid;

// ==========================================
// Output document
// ==========================================

/// One computed quote, exactly as stored/rendered downstream.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuoteDocument {
    quote_id: Uuid,
    generated_at: DateTime<Utc>,
    rate_table_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pricing: Option<PricingResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tier_a_pricing: Option<TierAPricingResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    margin_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    margin_status: Option<MarginStatusInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    margin_gate_error: Option<String>,
}

// ==========================================
// Argument parsing
// ==========================================

struct CliArgs {
    request_path: PathBuf,
    tables_path: Option<PathBuf>,
}

fn parse_args() -> Result<CliArgs> {
    let mut request_path: Option<PathBuf> = None;
    let mut tables_path: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--tables" => {
                let value = args
                    .next()
                    .context("--tables requires a file path argument")?;
                tables_path = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                eprintln!("Usage: cpq-engine <request.json> [--tables <rate_tables.json>]");
                std::process::exit(0);
            }
            other if request_path.is_none() => request_path = Some(PathBuf::from(other)),
            other => bail!("unexpected argument: {}", other),
        }
    }

    Ok(CliArgs {
        request_path: request_path.context("missing quote request file argument")?,
        tables_path,
    })
}

// ==========================================
// Main
// ==========================================

fn main() -> Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", scan2bim_cpq::APP_NAME);
    tracing::info!("version: {}", scan2bim_cpq::VERSION);
    tracing::info!("==================================================");

    let args = parse_args()?;

    // Rate tables: explicit file wins, then the operator override in
    // the user config directory, then the built-in rate card.
    if let Some(path) = &args.tables_path {
        let tables = RateTables::from_json_file(path)
            .with_context(|| format!("loading rate tables from {}", path.display()))?;
        tracing::info!(version = %tables.version, "installing rate tables from {}", path.display());
        config::install(tables)?;
    } else if let Some(path) = config::default_override_path() {
        if path.is_file() {
            let tables = RateTables::from_json_file(&path)
                .with_context(|| format!("loading rate tables from {}", path.display()))?;
            tracing::info!(version = %tables.version, "installing operator rate tables");
            config::install(tables)?;
        }
    }

    let raw = std::fs::read_to_string(&args.request_path)
        .with_context(|| format!("reading quote request {}", args.request_path.display()))?;
    let request: QuoteRequest =
        serde_json::from_str(&raw).context("quote request is not valid JSON")?;

    let tables = config::current();
    let document = if let Some(tier_a) = &request.tier_a {
        // Tier-A override replaces the bottom-up calculation entirely.
        let distance = request.travel.as_ref().map(|t| t.distance).unwrap_or(0.0);
        let result = calculate_tier_a_pricing(&tables, tier_a, distance);
        tracing::info!(
            client_price = result.client_price,
            total_with_travel = result.total_with_travel,
            "tier-A pricing calculated"
        );
        QuoteDocument {
            quote_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            rate_table_version: tables.version.clone(),
            pricing: None,
            tier_a_pricing: Some(result),
            margin_percent: None,
            margin_status: None,
            margin_gate_error: None,
        }
    } else {
        let engine = PricingEngine::with_tables(tables.clone());
        let pricing = engine.calculate_pricing(
            &request.areas,
            &request.services,
            request.travel.as_ref(),
            &request.risks,
            request.payment_terms,
        )?;

        let margin_percent = calculate_margin_percent(&pricing);
        let margin_status = get_margin_status(margin_percent);
        let margin_gate_error = validate_margin_gate(margin_percent);
        if let Some(error) = &margin_gate_error {
            tracing::warn!("margin gate: {}", error);
        } else {
            tracing::info!(margin_percent, status = %margin_status.status, "margin gate passed");
        }

        QuoteDocument {
            quote_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            rate_table_version: tables.version.clone(),
            pricing: Some(pricing),
            tier_a_pricing: None,
            margin_percent: Some(margin_percent),
            margin_status: Some(margin_status),
            margin_gate_error,
        }
    };

    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
