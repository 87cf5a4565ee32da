//! Subcommand implementations and shared capability wiring

pub mod config;
pub mod doctor;
pub mod key;
pub mod meta;
pub mod mint;

use anyhow::{Context, Result, bail};
use keymint_adapters::{
    clocks::{FixedClock, SteppingClock, SystemClock},
    entropy::{OsEntropySource, StubEntropySource},
};
use keymint_domain::{Clock, EntropySource};
use std::sync::Arc;
use time::{Duration, OffsetDateTime, format_description::well_known::Rfc3339};

use crate::config::AppConfig;

pub(crate) fn build_entropy_source(config: &AppConfig) -> Result<Arc<dyn EntropySource>> {
    match config.entropy.provider.as_str() {
        "os" => Ok(Arc::new(OsEntropySource::new())),
        "stub" => {
            tracing::warn!("Using deterministic stub entropy; keys are NOT secret");
            Ok(Arc::new(StubEntropySource::seeded(
                config.entropy.stub_seed.clone(),
            )))
        }
        other => bail!("Unknown entropy provider: {}", other),
    }
}

pub(crate) fn build_clock(config: &AppConfig) -> Result<Arc<dyn Clock>> {
    match config.clock.provider.as_str() {
        "system" => Ok(Arc::new(SystemClock)),
        "fixed" => {
            let raw = config
                .clock
                .fixed_time
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .context("clock.fixed_time is required for the fixed clock provider")?;

            let at = OffsetDateTime::parse(raw, &Rfc3339)
                .with_context(|| format!("Invalid clock.fixed_time (expected RFC 3339): {}", raw))?;

            if config.clock.step_millis == 0 {
                Ok(Arc::new(FixedClock::new(at)))
            } else {
                let step_millis = i64::try_from(config.clock.step_millis)
                    .context("clock.step_millis out of range")?;
                let step = Duration::milliseconds(step_millis);
                Ok(Arc::new(SteppingClock::new(at, step)))
            }
        }
        other => bail!("Unknown clock provider: {}", other),
    }
}

/// Theme from the command line, falling back to the configured default
pub(crate) fn resolve_theme(theme: Option<String>, config: &AppConfig) -> String {
    theme.unwrap_or_else(|| config.metadata.default_theme.clone())
}
