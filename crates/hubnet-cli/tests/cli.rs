//! Runs the `hubnet` binary against files in a temporary directory and
//! checks output and exit codes.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const NETWORK: &str = "\
hubs: [A, B, C, D]
routes:
  - { from: A, to: B, travel_time: 2 }
  - { from: B, to: C, travel_time: 3 }
  - { from: C, to: A, travel_time: 10 }
";

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn hubnet(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hubnet"))
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn network_show_prints_adjacency_list() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "net.yaml", NETWORK);
    let out = hubnet(&["network", "show", "--config", config.to_str().unwrap()]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "A: B(2) C(10)\nB: A(2) C(3)\nC: B(3) A(10)\nD:\n");
}

#[test]
fn network_paths_json() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "net.yaml", NETWORK);
    let out = hubnet(&[
        "network", "--config", config.to_str().unwrap(), "--json", "paths", "--from", "A",
    ]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json["source"], "A");
    assert_eq!(json["entries"][2]["hub"], "C");
    assert_eq!(json["entries"][2]["distance"], 5.0);
    assert_eq!(json["entries"][2]["path"], serde_json::json!(["A", "B", "C"]));
    assert!(json["entries"][3]["distance"].is_null());
}

#[test]
fn network_cycles_reports_triangle() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "net.yaml", NETWORK);
    let out = hubnet(&["network", "cycles", "--config", config.to_str().unwrap()]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "Cycle found: A -> C -> B -> A\n");
}

#[test]
fn unknown_source_hub_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "net.yaml", NETWORK);
    let out = hubnet(&["network", "reach", "--from", "Z", "--config", config.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("not found"));
}

#[test]
fn missing_config_exits_with_one() {
    let out = hubnet(&["network", "show"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn dispatch_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "net.yaml", NETWORK);
    let customers = write(
        dir.path(),
        "customers.csv",
        "customer_id,name,address,priority,status\n1,Ann,1_Road,3,Delayed\n2,Bob,2_Road,1,In_Transit\n",
    );
    let requests = write(dir.path(), "requests.csv", "customer_id,destination_hub\n1,B\n2,C\n");
    let report = dir.path().join("report.csv");

    let out = hubnet(&[
        "dispatch",
        "--config",
        config.to_str().unwrap(),
        "--customers",
        customers.to_str().unwrap(),
        "--requests",
        requests.to_str().unwrap(),
        "--report",
        report.to_str().unwrap(),
    ]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Processed 2 deliveries"));
    assert_eq!(
        fs::read_to_string(&report).unwrap(),
        "customer_id,name,address,destination_hub,travel_time,delivery_status\n\
         1,Ann,1_Road,B,2,Delivered\n\
         2,Bob,2_Road,C,5,Delivered\n"
    );
}
