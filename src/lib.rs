//! areaconv - DikuMUD area file converter
//!
//! Converts legacy line-oriented DikuMUD area files into structured YAML
//! world documents. Three pipelines (rooms, mobiles, mob resets) share
//! one shape: locate a `#SECTION`, split it into `#<vnum>` record
//! blocks, walk each block with a line cursor, render the typed records.
//!
//! Parsing never hard-fails on bad records: a broken block is dropped
//! with a warning and its siblings still convert.

/// Section extraction, block splitting, and the three record parsers
pub mod parse;
/// Typed records extracted from an area file
pub mod records;
/// YAML document rendering and merging
pub mod render;

pub use parse::mobiles::parse_mobiles;
pub use parse::resets::parse_resets;
pub use parse::rooms::parse_rooms;
pub use parse::AreaError;
