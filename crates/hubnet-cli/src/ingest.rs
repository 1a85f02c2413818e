//! # CSV Ingestion
//!
//! Customer file, one header row then:
//!
//! ```text
//! customer_id,name,address,priority,status
//! 53,Ada_Lovelace,12_Analytical_Way,2,In_Transit
//! ```
//!
//! Request file, one header row then:
//!
//! ```text
//! customer_id,destination_hub
//! 53,F
//! ```
//!
//! Underscores in names and addresses are read as spaces. Blank lines and
//! lines starting with `#` are ignored. A row with the wrong field count, an
//! unparseable field or bytes that are not UTF-8 is skipped with a warning;
//! the rest of the file is still loaded. Only I/O errors abort a load.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::StringRecord;
use hubnet_core::{Customer, CustomerId, DeliveryStatus, InMemoryDirectory, PriorityTier};

const CUSTOMER_FIELDS: usize = 5;
const REQUEST_FIELDS: usize = 2;

/// Rows loaded and skipped from one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// Rows turned into records.
    pub loaded: usize,
    /// Malformed rows.
    pub skipped: usize,
}

/// A delivery request row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRequest {
    /// Customer the parcel belongs to.
    pub customer: CustomerId,
    /// Destination hub label, as written in the file.
    pub destination: String,
}

fn reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(input)
}

/// Unwrap one row from `records()`. Undecodable rows are counted and
/// skipped (`Ok(None)`); I/O errors are returned.
fn next_record(
    result: csv::Result<StringRecord>,
    row: usize,
    kind: &str,
    summary: &mut IngestSummary,
) -> Result<Option<StringRecord>> {
    match result {
        Ok(record) => Ok(Some(record)),
        Err(e) if e.is_io_error() => Err(e).with_context(|| format!("failed to read {kind} row")),
        Err(e) => {
            summary.skipped += 1;
            tracing::warn!(row, "skipping unreadable {kind} row: {e}");
            Ok(None)
        }
    }
}

fn parse_customer(record: &StringRecord) -> Result<Customer> {
    if record.len() != CUSTOMER_FIELDS {
        anyhow::bail!("expected {CUSTOMER_FIELDS} fields, found {}", record.len());
    }
    let id: u64 = record[0].parse().context("invalid customer id")?;
    let tier: i64 = record[3].parse().context("invalid priority")?;
    Ok(Customer::new(
        CustomerId::new(id),
        record[1].replace('_', " "),
        record[2].replace('_', " "),
        PriorityTier::new(tier)?,
        DeliveryStatus::parse(&record[4]),
    ))
}

fn parse_request(record: &StringRecord) -> Result<DeliveryRequest> {
    if record.len() != REQUEST_FIELDS {
        anyhow::bail!("expected {REQUEST_FIELDS} fields, found {}", record.len());
    }
    let id: u64 = record[0].parse().context("invalid customer id")?;
    if record[1].is_empty() {
        anyhow::bail!("empty destination hub");
    }
    Ok(DeliveryRequest {
        customer: CustomerId::new(id),
        destination: record[1].to_string(),
    })
}

/// Load customers into a directory. Later rows replace earlier rows with
/// the same id.
pub fn read_customers<R: Read>(input: R) -> Result<(InMemoryDirectory, IngestSummary)> {
    let mut directory = InMemoryDirectory::new();
    let mut summary = IngestSummary::default();
    for (row, result) in reader(input).records().enumerate() {
        let Some(record) = next_record(result, row + 1, "customer", &mut summary)? else {
            continue;
        };
        match parse_customer(&record) {
            Ok(customer) => {
                directory.insert(customer);
                summary.loaded += 1;
            }
            Err(e) => {
                summary.skipped += 1;
                tracing::warn!(row = row + 1, record = ?record, "skipping invalid customer: {e:#}");
            }
        }
    }
    Ok((directory, summary))
}

/// Load delivery requests in file order.
pub fn read_requests<R: Read>(input: R) -> Result<(Vec<DeliveryRequest>, IngestSummary)> {
    let mut requests = Vec::new();
    let mut summary = IngestSummary::default();
    for (row, result) in reader(input).records().enumerate() {
        let Some(record) = next_record(result, row + 1, "request", &mut summary)? else {
            continue;
        };
        match parse_request(&record) {
            Ok(request) => {
                requests.push(request);
                summary.loaded += 1;
            }
            Err(e) => {
                summary.skipped += 1;
                tracing::warn!(row = row + 1, record = ?record, "skipping invalid request: {e:#}");
            }
        }
    }
    Ok((requests, summary))
}

/// [`read_customers`] from a file.
pub fn load_customers(path: &Path) -> Result<(InMemoryDirectory, IngestSummary)> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open customer file: {}", path.display()))?;
    read_customers(file)
}

/// [`read_requests`] from a file.
pub fn load_requests(path: &Path) -> Result<(Vec<DeliveryRequest>, IngestSummary)> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open request file: {}", path.display()))?;
    read_requests(file)
}
