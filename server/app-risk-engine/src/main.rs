//! Binary entrypoint: JSON in on stdin, JSON out on stdout.
//!
//! Modes:
//! - (default) one RawListing object -> one AnalysisResult
//! - `scan`    one ScanRequest object -> one ScanReport
//! - `batch`   RawListing JSON lines  -> AnalysisResult or ErrorOutput lines

use app_risk_engine::types::ErrorOutput;
use app_risk_engine::{
  analyze, logging, normalize, scan, Config, EngineError, RawListing, ScanRequest,
};
use std::io::{self, BufRead, Read, Write};

fn main() {
  let config = Config::from_env();
  logging::init(&config.log_level);

  let mode = std::env::args().nth(1).unwrap_or_default();
  let result = match mode.as_str() {
    "" | "analyze" => run_single(&config),
    "scan" => run_scan(&config),
    "batch" => run_batch(&config),
    other => Err(EngineError::parse(format!(
      "unknown mode '{}' (expected analyze|scan|batch)",
      other
    ))),
  };

  if let Err(e) = result {
    tracing::error!(error = %e, "app-risk-engine failed");
    let _ = writeln!(io::stderr(), "app-risk-engine error: {}", e);
    std::process::exit(1);
  }
}

fn read_stdin() -> Result<String, EngineError> {
  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;
  Ok(raw)
}

fn run_single(config: &Config) -> Result<(), EngineError> {
  let listing: RawListing = serde_json::from_str(&read_stdin()?)?;
  let record = normalize(&listing, config)?;
  let out = analyze(record);
  let json = serde_json::to_vec(&out)?;
  io::stdout().write_all(&json)?;
  Ok(())
}

fn run_scan(config: &Config) -> Result<(), EngineError> {
  let request: ScanRequest = serde_json::from_str(&read_stdin()?)?;
  let report = scan(&request, config)?;
  let json = serde_json::to_vec(&report)?;
  io::stdout().write_all(&json)?;
  Ok(())
}

fn run_batch(config: &Config) -> Result<(), EngineError> {
  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());

  for line in stdin.lock().lines() {
    let line = line?;

    // Skip blank lines.
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    let outcome = serde_json::from_str::<RawListing>(trimmed)
      .map_err(EngineError::from)
      .and_then(|listing| normalize(&listing, config));

    match outcome {
      Ok(record) => serde_json::to_writer(&mut out, &analyze(record))?,
      Err(e) => {
        let err = match e.field() {
          Some(field) => ErrorOutput::new(e.to_string()).with_field(field),
          None => ErrorOutput::new(e.to_string()),
        };
        serde_json::to_writer(&mut out, &err)?;
      }
    }
    writeln!(out)?;
  }

  out.flush()?;
  Ok(())
}
