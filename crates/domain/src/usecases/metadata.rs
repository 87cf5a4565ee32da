//! Metadata record construction

use std::sync::Arc;

use thiserror::Error;
use time::{
    OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem,
    macros::format_description,
};

use crate::{model::MetadataRecord, ports::Clock};

/// `2024-01-01T12:00:00.000Z`
const CREATED_AT_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

/// Error type for metadata construction
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Clock reading cannot be rendered as a timestamp: {0}")]
    Clock(String),
}

/// Stamps hashed keys and themes with a creation time
pub struct MetadataFactory<C: Clock + ?Sized> {
    clock: Arc<C>,
}

impl<C: Clock + ?Sized> Clone for MetadataFactory<C> {
    fn clone(&self) -> Self {
        Self {
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C: Clock + ?Sized> MetadataFactory<C> {
    pub fn new(clock: Arc<C>) -> Self {
        Self { clock }
    }

    /// Build a record from the current time, copying both strings verbatim
    pub fn create_metadata(
        &self,
        hashed_key: &str,
        theme: &str,
    ) -> Result<MetadataRecord, MetadataError> {
        let created_at = format_created_at(self.clock.now())?;

        Ok(MetadataRecord::new(
            created_at,
            theme.to_string(),
            hashed_key.to_string(),
        ))
    }
}

/// Render an instant as ISO-8601 UTC with millisecond precision
pub fn format_created_at(at: OffsetDateTime) -> Result<String, MetadataError> {
    let utc = at.to_offset(UtcOffset::UTC);

    // Four-digit years only; anything else is not valid ISO-8601 without extensions
    if !(0..=9999).contains(&utc.year()) {
        return Err(MetadataError::Clock(format!("year {} out of range", utc.year())));
    }

    utc.format(CREATED_AT_FORMAT)
        .map_err(|e| MetadataError::Clock(e.to_string()))
}
