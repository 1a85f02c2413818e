//! # End-of-Day Report
//!
//! One row per released delivery, joined with the customer record, sorted
//! ascending by travel time. The sort is stable: deliveries with equal
//! travel times keep the order they were released in. Spaces in names and
//! addresses are written as underscores, matching the input format.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use hubnet_core::CustomerDirectory;
use hubnet_dispatch::DeliveryResult;

/// Column names of the report.
pub const REPORT_HEADER: [&str; 6] = [
    "customer_id",
    "name",
    "address",
    "destination_hub",
    "travel_time",
    "delivery_status",
];

/// One report line.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// Customer id.
    pub customer_id: u64,
    /// Customer name.
    pub name: String,
    /// Customer address.
    pub address: String,
    /// Destination hub.
    pub destination_hub: String,
    /// Travel time from the origin.
    pub travel_time: f64,
    /// Customer status at report time.
    pub delivery_status: String,
}

/// Join results with customer records and sort by travel time.
///
/// Results whose customer has disappeared from the directory are logged and
/// left out.
pub fn build_report<D>(results: &[DeliveryResult], directory: &D) -> Vec<ReportRow>
where
    D: CustomerDirectory + ?Sized,
{
    let mut rows: Vec<ReportRow> = results
        .iter()
        .filter_map(|result| match directory.lookup(result.customer) {
            Ok(customer) => Some(ReportRow {
                customer_id: customer.id.get(),
                name: customer.name.clone(),
                address: customer.address.clone(),
                destination_hub: result.destination.to_string(),
                travel_time: result.travel_time,
                delivery_status: customer.status.to_string(),
            }),
            Err(e) => {
                tracing::warn!(customer = %result.customer, "omitting delivery from report: {e}");
                None
            }
        })
        .collect();
    rows.sort_by(|a, b| a.travel_time.total_cmp(&b.travel_time));
    rows
}

/// Write rows as CSV with a header line.
pub fn write_report<W: Write>(rows: &[ReportRow], output: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(output);
    wtr.write_record(REPORT_HEADER)?;
    for row in rows {
        wtr.write_record([
            row.customer_id.to_string(),
            row.name.replace(' ', "_"),
            row.address.replace(' ', "_"),
            row.destination_hub.clone(),
            row.travel_time.to_string(),
            row.delivery_status.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// [`write_report`] to a file, replacing it if present.
pub fn save_report(rows: &[ReportRow], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create report file: {}", path.display()))?;
    write_report(rows, file)
        .with_context(|| format!("failed to write report file: {}", path.display()))
}
