//! lingap - hospital admissions console entry point
//!
//! Loads the active patient roster and, given a patient id argument, the full
//! billing detail for that patient.

use lingap_client::{api::RestApi, config::ClientConfig, workspace::AdmissionsWorkspace};
use lingap_core::PatientId;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration first so the log level can come from it
    let config = ClientConfig::load(
        std::path::Path::new("lingap.yaml")
            .exists()
            .then_some("lingap.yaml"),
    )
    .unwrap_or_else(|e| {
        eprintln!("Failed to load config, using defaults: {}", e);
        ClientConfig::default()
    });

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log.level.clone())),
        )
        .init();

    tracing::info!("Connecting to {}", config.api.base_url);

    let api = match RestApi::new(&config) {
        Ok(api) => Arc::new(api),
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let mut workspace = AdmissionsWorkspace::new(api, config.cache_ttl());

    if let Err(e) = workspace.load_roster().await {
        tracing::error!("Failed to load patient roster: {}", e);
        std::process::exit(1);
    }

    println!(
        "{:>6}  {:<28} {:<10} {:>12} {:>6}",
        "ID", "NAME", "ROOM", "TOTAL", "TXNS"
    );
    for patient in workspace.roster.records() {
        println!(
            "{:>6}  {:<28} {:<10} {:>12.2} {:>6}",
            patient.id.0,
            patient.name,
            patient.room.as_deref().unwrap_or("-"),
            patient.total,
            patient.transaction_count
        );
    }

    let Some(arg) = std::env::args().nth(1) else {
        return;
    };

    let id = match arg.parse::<u64>() {
        Ok(n) => PatientId(n),
        Err(_) => {
            tracing::error!("Invalid patient id: {}", arg);
            std::process::exit(2);
        }
    };

    let Some(summary) = workspace
        .roster
        .records()
        .iter()
        .find(|p| p.id == id)
        .cloned()
    else {
        tracing::error!("Patient {} is not on the active roster", id);
        std::process::exit(2);
    };

    workspace.select(&summary).await;
    let state = workspace.selection.state();

    if let Some(message) = state.error {
        eprintln!("{}", message);
        std::process::exit(1);
    }

    if let Some(view) = state.view {
        let detail = view.detail();
        println!("\n{} (#{})", detail.patient_info.name, detail.id);
        if let Some(room) = &detail.patient_room {
            match &room.ward {
                Some(ward) => println!("  Room: {} ({})", room.room, ward),
                None => println!("  Room: {}", room.room),
            }
        }
        if let Some(physician) = &detail.patient_physician {
            println!("  Physician: {}", physician.name);
        }
        if let Some(admitted) = &detail.patient_info.admitted_at {
            println!("  Admitted: {}", admitted);
        }
        println!();
        for tx in &detail.transactions {
            println!("  {:<32} {:>10.2}", tx.description, tx.amount);
        }
        println!("  {:<32} {:>10.2}", "TOTAL", detail.total_charges());
    }
}
