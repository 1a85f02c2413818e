//! # Dispatch Subcommand
//!
//! Batch run of one delivery day:
//!
//! 1. Load the network file, the customer file and the request file.
//! 2. Submit every request to the scheduler. Rejections are logged and the
//!    run continues.
//! 3. Release deliveries in priority order, marking each customer
//!    `Delivered`.
//! 4. Write the end-of-day report, if `--report` is given.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use hubnet_core::{CustomerDirectory, DeliveryStatus};
use hubnet_dispatch::{DeliveryResult, DeliveryScheduler, SchedulerStats};
use hubnet_graph::DeliveryNetwork;

use crate::config::NetworkConfig;
use crate::ingest::{self, DeliveryRequest};
use crate::report;

/// Arguments for `hubnet dispatch`.
#[derive(Args, Debug)]
pub struct DispatchArgs {
    /// Path to the network YAML file.
    #[arg(long)]
    pub config: PathBuf,

    /// Customer CSV (`customer_id,name,address,priority,status`).
    #[arg(long)]
    pub customers: PathBuf,

    /// Request CSV (`customer_id,destination_hub`).
    #[arg(long)]
    pub requests: PathBuf,

    /// Where to write the end-of-day report CSV.
    #[arg(long)]
    pub report: Option<PathBuf>,
}

/// Deliveries released by one run, in release order.
#[derive(Debug, Clone, Default)]
pub struct DispatchRun {
    /// Released deliveries.
    pub delivered: Vec<DeliveryResult>,
    /// Scheduler counters at the end of the run.
    pub stats: SchedulerStats,
}

/// Submit every request, then drain the scheduler, marking each released
/// customer `Delivered`.
pub fn dispatch_all<D>(
    network: &DeliveryNetwork,
    directory: &mut D,
    scheduler: &mut DeliveryScheduler,
    requests: &[DeliveryRequest],
) -> DispatchRun
where
    D: CustomerDirectory + ?Sized,
{
    for request in requests {
        if let Err(e) = scheduler.insert_delivery_request(
            network,
            &*directory,
            request.customer,
            &request.destination,
        ) {
            tracing::warn!(
                customer = %request.customer,
                hub = %request.destination,
                "rejected request: {e}"
            );
        }
    }

    let mut delivered = Vec::with_capacity(scheduler.len());
    while let Some(result) = scheduler.process_next_delivery() {
        if let Err(e) = directory.update_status(result.customer, DeliveryStatus::Delivered) {
            tracing::warn!(customer = %result.customer, "failed to update status: {e}");
        }
        delivered.push(result);
    }

    DispatchRun {
        delivered,
        stats: scheduler.stats(),
    }
}

/// Execute the dispatch subcommand.
pub fn run_dispatch(args: &DispatchArgs) -> Result<u8> {
    let config = NetworkConfig::load(&args.config)?;
    let network = config
        .build_network()
        .with_context(|| format!("invalid network in {}", args.config.display()))?;
    let mut scheduler = DeliveryScheduler::new(config.scheduler.clone())
        .with_context(|| format!("invalid scheduler settings in {}", args.config.display()))?;

    let (mut directory, customers) = ingest::load_customers(&args.customers)?;
    let (requests, request_rows) = ingest::load_requests(&args.requests)?;
    tracing::info!(
        customers = customers.loaded,
        skipped_customers = customers.skipped,
        requests = request_rows.loaded,
        skipped_requests = request_rows.skipped,
        "input loaded"
    );

    println!("Delivery network:");
    println!("{network}");
    println!();
    println!("Loaded {} customers ({} skipped)", customers.loaded, customers.skipped);
    println!("Loaded {} requests ({} skipped)", request_rows.loaded, request_rows.skipped);

    let run = dispatch_all(&network, &mut directory, &mut scheduler, &requests);
    println!("Scheduled {} delivery requests", run.stats.queued);
    println!("Processed {} deliveries", run.delivered.len());
    println!("{}", run.stats);

    if let Some(path) = &args.report {
        let rows = report::build_report(&run.delivered, &directory);
        report::save_report(&rows, path)?;
        println!("Delivery report saved to {}", path.display());
    }

    Ok(0)
}
