//! Doctor command - validate configuration and platform capabilities

use anyhow::Result;
use keymint_domain::{Clock, EntropySource, OpaqueKey, usecases::format_created_at};
use serde::Serialize;
use std::path::PathBuf;

use super::{build_clock, build_entropy_source};
use crate::args::DoctorArgs;
use crate::config::AppConfig;

#[derive(Debug, Serialize)]
struct DoctorReport {
    config: CheckResult,
    entropy: CheckResult,
    clock: CheckResult,
    overall: String,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    status: String,
    message: String,
    details: Option<serde_json::Value>,
}

impl CheckResult {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: message.into(),
            details: None,
        }
    }

    fn warn(message: impl Into<String>) -> Self {
        Self {
            status: "warn".to_string(),
            message: message.into(),
            details: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            details: None,
        }
    }

    fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    fn is_error(&self) -> bool {
        self.status == "error"
    }
}

pub fn execute(args: DoctorArgs, config_path: Option<PathBuf>) -> Result<()> {
    let mut report = DoctorReport {
        config: CheckResult::error("Not checked"),
        entropy: CheckResult::error("Not checked"),
        clock: CheckResult::error("Not checked"),
        overall: "error".to_string(),
    };

    match AppConfig::load(config_path.as_deref()) {
        Ok(config) => {
            report.config = CheckResult::ok("Configuration loaded successfully");

            report.entropy = match build_entropy_source(&config) {
                Ok(source) => check_entropy(source.as_ref()),
                Err(e) => CheckResult::error(format!("{:#}", e)),
            };

            report.clock = match build_clock(&config) {
                Ok(clock) => check_clock(&config.clock.provider, clock.as_ref()),
                Err(e) => CheckResult::error(format!("{:#}", e)),
            };
        }
        Err(e) => {
            report.config = CheckResult::error(format!("Failed to load config: {:#}", e));
        }
    }

    let checks = [&report.config, &report.entropy, &report.clock];
    report.overall = overall_status(&checks).to_string();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.overall == "error" {
        std::process::exit(1);
    }

    Ok(())
}

fn overall_status(checks: &[&CheckResult]) -> &'static str {
    if checks.iter().any(|c| c.is_error()) {
        "error"
    } else if checks.iter().all(|c| c.is_ok()) {
        "ok"
    } else {
        "warn"
    }
}

/// Draw one key's worth of bytes to prove the source is live
fn check_entropy(source: &dyn EntropySource) -> CheckResult {
    let name = source.name();

    match source.secure_random_bytes(OpaqueKey::BYTE_LEN) {
        Ok(bytes) if bytes.len() == OpaqueKey::BYTE_LEN => {
            let details = serde_json::json!({ "provider": name, "bytes": bytes.len() });
            if name == "stub" {
                CheckResult::warn("Provider: stub (deterministic, keys are not secret)")
                    .with_details(details)
            } else {
                CheckResult::ok(format!("Provider: {}, drew {} bytes", name, bytes.len()))
                    .with_details(details)
            }
        }
        Ok(bytes) => CheckResult::error(format!(
            "Provider: {}, returned {} bytes, expected {}",
            name,
            bytes.len(),
            OpaqueKey::BYTE_LEN
        )),
        Err(e) => CheckResult::error(format!("Provider: {}, {}", name, e)),
    }
}

fn check_clock(provider: &str, clock: &dyn Clock) -> CheckResult {
    match format_created_at(clock.now()) {
        Ok(now) => {
            let details = serde_json::json!({ "provider": provider, "now": now });
            if provider == "system" {
                CheckResult::ok(format!("Provider: system, now: {}", now)).with_details(details)
            } else {
                CheckResult::warn(format!("Provider: {} (simulated), now: {}", provider, now))
                    .with_details(details)
            }
        }
        Err(e) => CheckResult::error(format!("Provider: {}, {}", provider, e)),
    }
}

fn print_report(report: &DoctorReport) {
    println!("keymint Doctor Report");
    println!("=====================");
    println!();

    print_check("Config", &report.config);
    print_check("Entropy", &report.entropy);
    print_check("Clock", &report.clock);

    println!();
    let symbol = match report.overall.as_str() {
        "ok" => "✓",
        "warn" => "⚠",
        _ => "✗",
    };
    println!("{} Overall: {}", symbol, report.overall.to_uppercase());

    if report.overall == "ok" {
        println!();
        println!("Ready to mint! Try: keymint mint --theme default");
    }
}

fn print_check(name: &str, result: &CheckResult) {
    let symbol = match result.status.as_str() {
        "ok" => "✓",
        "warn" => "⚠",
        _ => "✗",
    };
    println!("{} {}: {}", symbol, name, result.message);
}
