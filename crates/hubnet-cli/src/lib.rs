//! # hubnet-cli: Command-Line Interface for hubnet
//!
//! ## Subcommands
//!
//! - `hubnet network show|reach|cycles|paths`: inspect a network file.
//! - `hubnet dispatch`: run a delivery day from CSV input and write the
//!   end-of-day report.
//!
//! ```bash
//! hubnet network paths --config net.yaml --from A
//! hubnet dispatch --config net.yaml --customers customers.csv \
//!     --requests requests.csv --report report.csv
//! ```
//!
//! Argument parsing lives here; graph and scheduling logic stay in the
//! domain crates.

pub mod config;
pub mod dispatch;
pub mod ingest;
pub mod network;
pub mod report;
