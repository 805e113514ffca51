//! Mobile pipeline: the `#MOBILES` section into [`MobileTemplate`]s.
//!
//! Mobile records have a rigid field order, so this is a fixed-position
//! walk rather than a branching state machine. Records shorter than the
//! full field set keep empty/zero defaults for the missing tail; the
//! legacy converter was permissive here and dropping borderline blocks
//! would lose real data.

use rayon::prelude::*;

use super::{extract_section, split_blocks, AreaError, LineCursor};
use crate::records::{MobileSet, MobileTemplate};

pub const SECTION: &str = "MOBILES";

/// Vnum of the end-of-section marker block; skipped, never stored.
const END_MARKER: &str = "0";

/// Parses every mobile block in the `#MOBILES` section.
pub fn parse_mobiles(input: &str) -> Result<MobileSet, AreaError> {
    let section = extract_section(input, SECTION)?;
    let parsed: Vec<(String, MobileTemplate)> = split_blocks(section)
        .par_iter()
        .filter(|(id, _)| id.as_str() != END_MARKER)
        .map(|(id, body)| (id.clone(), parse_mobile_content(id, body)))
        .collect();

    let mut mobiles = MobileSet::new();
    for (id, mobile) in parsed {
        mobiles.insert(id, mobile);
    }
    Ok(mobiles)
}

/// Parses one mobile block: keywords, short description, two
/// sentinel-terminated description paragraphs, race, a skipped flags
/// line, then the stats line whose first field is the level.
pub fn parse_mobile_content(mobile_id: &str, content: &str) -> MobileTemplate {
    let mut cur = LineCursor::new(content);

    let keywords: Vec<String> = cur
        .next_line()
        .unwrap_or_default()
        .trim_end_matches('~')
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let short_description = cur
        .next_line()
        .unwrap_or_default()
        .trim_end_matches('~')
        .to_string();

    let long_description = cur.take_paragraph_lenient();
    let full_description = cur.take_paragraph_lenient();

    let race = cur
        .next_line()
        .unwrap_or_default()
        .trim_end_matches('~')
        .to_string();

    // act/affect/alignment/type flags: not extracted, but the line must
    // be consumed to keep the stats line in position.
    let flags = cur.next_line();

    let stats = cur.next_line().unwrap_or_default();
    let level = stats
        .split_whitespace()
        .next()
        .and_then(|t| t.parse().ok())
        .unwrap_or(0);

    if flags.is_none() {
        tracing::debug!("[mobiles] mobile {mobile_id} truncated; trailing fields defaulted");
    }

    MobileTemplate {
        keywords,
        short_description,
        long_description,
        full_description,
        race,
        level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::AreaError;

    const BLOCK: &str = "guard cityguard~\nthe cityguard~\nA cityguard stands here.\n~\nA big burly guard watches the street,\nlooking bored.\n~\nhuman~\n8 0 0 0\n21 0 0 0d0+0 0d0+0\n";

    #[test]
    fn test_full_mobile_block() {
        let input = format!("#MOBILES\n#3060\n{BLOCK}#0\n");
        let mobiles = parse_mobiles(&input).unwrap();
        assert_eq!(mobiles.len(), 1);

        let mob = &mobiles["3060"];
        assert_eq!(mob.keywords, vec!["guard", "cityguard"]);
        assert_eq!(mob.short_description, "the cityguard");
        assert_eq!(mob.long_description, "A cityguard stands here.");
        assert_eq!(
            mob.full_description,
            "A big burly guard watches the street,\nlooking bored."
        );
        assert_eq!(mob.race, "human");
        assert_eq!(mob.level, 21);
    }

    #[test]
    fn test_end_marker_vnum_is_skipped() {
        let input = "#MOBILES\n#0\n";
        let mobiles = parse_mobiles(input).unwrap();
        assert!(mobiles.is_empty());
    }

    #[test]
    fn test_truncated_after_keywords() {
        let mob = parse_mobile_content("10", "rat~");
        assert_eq!(mob.keywords, vec!["rat"]);
        assert_eq!(mob.short_description, "");
        assert_eq!(mob.long_description, "");
        assert_eq!(mob.full_description, "");
        assert_eq!(mob.race, "");
        assert_eq!(mob.level, 0);
    }

    #[test]
    fn test_level_defaults_on_garbage_stats() {
        let content = "rat~\na rat~\nA rat.\n~\nIt is small.\n~\nrodent~\n0 0 0 0\nnot-a-number 1 2";
        let mob = parse_mobile_content("10", content);
        assert_eq!(mob.level, 0);
    }

    #[test]
    fn test_missing_stats_line() {
        let content = "rat~\na rat~\nA rat.\n~\nIt is small.\n~\nrodent~";
        let mob = parse_mobile_content("10", content);
        assert_eq!(mob.race, "rodent");
        assert_eq!(mob.level, 0);
    }

    #[test]
    fn test_missing_section() {
        let err = parse_mobiles("#ROOMS\n#1\n").unwrap_err();
        assert!(matches!(err, AreaError::SectionNotFound { .. }));
    }
}
