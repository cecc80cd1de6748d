//! "Last updated" stamp.
//!
//! Browsers report `document.lastModified` as `MM/DD/YYYY HH:MM:SS` in local
//! time. The stamp shows the date only.

#[cfg(test)]
#[path = "stamp_test.rs"]
mod stamp_test;

use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::StampError;

const LAST_MODIFIED: &[BorrowedFormatItem<'static>] =
    format_description!("[month]/[day]/[year] [hour]:[minute]:[second]");

const DISPLAY_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:long] [day padding:none], [year]");

pub fn parse_last_modified(raw: &str) -> Result<PrimitiveDateTime, StampError> {
    PrimitiveDateTime::parse(raw.trim(), LAST_MODIFIED).map_err(|source| StampError::Parse {
        raw: raw.to_owned(),
        source,
    })
}

/// Render the stamp text for a raw `lastModified` value.
pub fn format_last_modified(raw: &str) -> Result<String, StampError> {
    let modified = parse_last_modified(raw)?;
    Ok(format!("Last updated: {}", modified.format(DISPLAY_DATE)?))
}
