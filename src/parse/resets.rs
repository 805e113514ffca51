//! Reset pipeline: mobile resets out of the `#RESETS` section.
//!
//! This one is a line filter, not a cursor machine. Only `M` (mobile)
//! resets are extracted; object, equip and door resets are out of scope
//! and skipped silently. Source order is preserved.

use super::{extract_section, AreaError};
use crate::records::MobileReset;

pub const SECTION: &str = "RESETS";

/// Minimum whitespace fields for a recognizable `M` line:
/// `M 0 <mob-vnum> <limit> <room-vnum> [max-world]`.
const MIN_FIELDS: usize = 5;

/// Parses the mobile resets from the `#RESETS` section, in source order.
pub fn parse_resets(input: &str) -> Result<Vec<MobileReset>, AreaError> {
    let section = extract_section(input, SECTION)?;

    let mut resets = Vec::new();
    for raw in section.lines() {
        let line = raw.trim();
        if !line.starts_with("M ") {
            continue;
        }

        // Anything after the first `*` is a builder comment.
        let (data, comment) = match line.split_once('*') {
            Some((data, comment)) => (data, comment.trim()),
            None => (line, ""),
        };

        let fields: Vec<&str> = data.split_whitespace().collect();
        if fields.len() < MIN_FIELDS {
            tracing::warn!(
                "[resets] {}",
                AreaError::MalformedResetLine {
                    line: line.to_string()
                }
            );
            continue;
        }

        resets.push(MobileReset {
            mobile_id: fields[2].to_string(),
            local_limit: fields[3].to_string(),
            room_id: fields[4].to_string(),
            global_limit: fields.get(5).copied().unwrap_or("1").to_string(),
            comment: comment.to_string(),
        });
    }

    Ok(resets)
}
