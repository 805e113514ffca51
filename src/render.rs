//! Document assembly: renders parsed records into the YAML world-document
//! format and merges independently produced documents.
//!
//! The output is assembled by hand rather than through serde_yaml: the
//! downstream tooling expects the exact legacy layout (pipe blocks for
//! multi-line text, inline keyword arrays, top-level sections that can be
//! spliced together), and byte-for-byte determinism makes the documents
//! diffable across runs.

use crate::records::{MobileReset, MobileSet, RoomSet};
use indexmap::IndexMap;

pub const DEFAULT_AREA_NAME: &str = "Midgaard";

/// Renders the rooms document body (no `---` header):
/// `name:` then `rooms:` with ids sorted numerically ascending.
pub fn render_rooms(area_name: &str, rooms: &RoomSet) -> String {
    let mut out = vec![format!("name: {area_name}"), "rooms:".to_string()];

    for (id, room) in sorted_numeric(rooms) {
        out.push(format!("  {id}:"));
        out.push(format!("    name: \"{}\"", room.name));
        out.push("    description: |".to_string());
        push_block(&mut out, "      ", &room.description);

        if !room.exits.is_empty() {
            out.push("    exits:".to_string());
            for (direction, exit) in &room.exits {
                out.push(format!("      {}:", direction.as_str()));
                out.push(format!("        id: {}", exit.destination));
                // Exit descriptions are single-line in the document.
                let desc = exit.description.replace('\n', " ");
                out.push(format!("        description: \"{}\"", desc.trim()));
            }
        }

        if !room.environment.is_empty() {
            out.push("    environment:".to_string());
            for env in &room.environment {
                let keywords = env
                    .keywords
                    .iter()
                    .map(|k| format!("\"{k}\""))
                    .collect::<Vec<_>>()
                    .join(", ");
                out.push(format!("      - keywords: [{keywords}]"));
                out.push("        description: |".to_string());
                push_block(&mut out, "          ", &env.description);
            }
        }
    }

    out.join("\n")
}

/// Renders the mobiles document body: a `mobiles:` map sorted numerically
/// ascending. The full description renders under the legacy key
/// `description`.
pub fn render_mobiles(mobiles: &MobileSet) -> String {
    let mut out = vec!["mobiles:".to_string()];

    for (id, mobile) in sorted_numeric(mobiles) {
        out.push(format!("  {id}:"));
        let keywords = mobile
            .keywords
            .iter()
            .map(|k| format!("\"{k}\""))
            .collect::<Vec<_>>()
            .join(", ");
        out.push(format!("    keywords: [{keywords}]"));
        out.push(format!(
            "    short_description: \"{}\"",
            mobile.short_description
        ));
        out.push("    long_description: |".to_string());
        push_block(&mut out, "      ", &mobile.long_description);
        out.push("    description: |".to_string());
        push_block(&mut out, "      ", &mobile.full_description);
        out.push(format!("    race: \"{}\"", mobile.race));
        out.push(format!("    level: {}", mobile.level));
    }

    out.join("\n")
}

/// Renders the mobile resets document body, in source order.
pub fn render_resets(resets: &[MobileReset]) -> String {
    let mut out = vec!["mob_resets:".to_string()];

    for reset in resets {
        out.push(format!("  - mob_vnum: {}", reset.mobile_id));
        out.push(format!("    room_vnum: {}", reset.room_id));
        out.push(format!("    limit: {}", reset.local_limit));
        out.push(format!("    max_world: {}", reset.global_limit));
        if !reset.comment.is_empty() {
            out.push(format!("    comment: \"{}\"", reset.comment));
        }
    }

    out.join("\n")
}

/// Merges an existing rooms document with a freshly rendered mobiles
/// body. The `name:` header of the rooms document is preserved; its
/// `rooms:` block is spliced in, then the `mobiles:` block appended. When
/// the rooms document has no `rooms:` block the mobiles body is emitted
/// under the preserved header alone.
pub fn merge_documents(rooms_doc: &str, mobiles_body: &str) -> String {
    let rooms_doc = rooms_doc.strip_prefix("---\n").unwrap_or(rooms_doc);

    let area_name = rooms_doc
        .lines()
        .find_map(|line| line.strip_prefix("name: "))
        .unwrap_or(DEFAULT_AREA_NAME);

    let mut combined = format!("---\nname: {area_name}\n");

    let Some(start) = rooms_doc.find("rooms:") else {
        combined.push_str(mobiles_body);
        return combined;
    };
    let block = &rooms_doc[start..];
    let end = block.find("\nmobiles:").unwrap_or(block.len());
    combined.push_str(&block[..end]);

    if let Some(start) = mobiles_body.find("mobiles:") {
        combined.push('\n');
        combined.push_str(&mobiles_body[start..]);
    }
    combined
}

/// Output path the way the legacy converters derived it: input stem plus
/// suffix (`.yml` or `-resets.yml`).
pub fn output_file_name(input: &str, suffix: &str) -> String {
    let stem = match input.rfind('.') {
        Some(i) => &input[..i],
        None => input,
    };
    format!("{stem}{suffix}")
}

fn sorted_numeric<'a, T>(map: &'a IndexMap<String, T>) -> Vec<(&'a str, &'a T)> {
    let mut entries: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), v)).collect();
    entries.sort_by_key(|(k, _)| k.parse::<u64>().unwrap_or(u64::MAX));
    entries
}

fn push_block(out: &mut Vec<String>, indent: &str, text: &str) {
    for line in text.split('\n') {
        out.push(format!("{indent}{line}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{mobiles::parse_mobiles, resets::parse_resets, rooms::parse_rooms};

    #[test]
    fn test_render_rooms_document() {
        let input = "#ROOMS\n#100\nTemple~\nA holy place.\nQuiet too.\n~\nD0\nnorth path~\n~\n0 0 101\nE altar~\nMarble.\n~\nS\n#0\n";
        let rooms = parse_rooms(input).unwrap();
        let doc = render_rooms("Midgaard", &rooms);

        let expected = "name: Midgaard\n\
rooms:\n\
\x20 100:\n\
\x20   name: \"Temple\"\n\
\x20   description: |\n\
\x20     A holy place.\n\
\x20     Quiet too.\n\
\x20   exits:\n\
\x20     north:\n\
\x20       id: 101\n\
\x20       description: \"north path\"\n\
\x20   environment:\n\
\x20     - keywords: [\"altar\"]\n\
\x20       description: |\n\
\x20         Marble.";
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_room_ids_sort_numerically() {
        let input = "#ROOMS\n#10\nTen~\n.\n~\nS\n#9\nNine~\n.\n~\nS\n#0\n";
        let doc = render_rooms("X", &parse_rooms(input).unwrap());
        let nine = doc.find("  9:").unwrap();
        let ten = doc.find("  10:").unwrap();
        assert!(nine < ten);
    }

    #[test]
    fn test_rendered_rooms_parse_as_yaml() {
        let input = "#ROOMS\n#100\nTemple~\nA holy place.\n~\nD0\nnorth path~\n~\n0 0 101\nS\n#0\n";
        let doc = render_rooms("Midgaard", &parse_rooms(input).unwrap());

        let value: serde_yaml::Value = serde_yaml::from_str(&doc).unwrap();
        assert_eq!(value["name"], serde_yaml::Value::from("Midgaard"));
        assert_eq!(value["rooms"][100]["name"], serde_yaml::Value::from("Temple"));
        assert_eq!(
            value["rooms"][100]["exits"]["north"]["id"],
            serde_yaml::Value::from(101)
        );
    }

    #[test]
    fn test_render_mobiles_document() {
        let input = "#MOBILES\n#200\nguard~\nthe guard~\nA guard is here.\n~\nBig and burly.\n~\nhuman~\n8 0 0 0\n21 0 0\n#0\n";
        let doc = render_mobiles(&parse_mobiles(input).unwrap());

        let value: serde_yaml::Value = serde_yaml::from_str(&doc).unwrap();
        assert_eq!(value["mobiles"][200]["race"], serde_yaml::Value::from("human"));
        assert_eq!(value["mobiles"][200]["level"], serde_yaml::Value::from(21));
        assert_eq!(
            value["mobiles"][200]["description"],
            serde_yaml::Value::from("Big and burly.\n")
        );
    }

    #[test]
    fn test_render_resets_document() {
        let resets = parse_resets("#RESETS\nM 0 100 1 200 3 * spawn\nM 0 101 1 201\n").unwrap();
        let doc = render_resets(&resets);

        let expected = "mob_resets:\n\
\x20 - mob_vnum: 100\n\
\x20   room_vnum: 200\n\
\x20   limit: 1\n\
\x20   max_world: 3\n\
\x20   comment: \"spawn\"\n\
\x20 - mob_vnum: 101\n\
\x20   room_vnum: 201\n\
\x20   limit: 1\n\
\x20   max_world: 1";
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_merge_documents() {
        let rooms_doc = "---\nname: Haven\nrooms:\n  100:\n    name: \"Temple\"\n";
        let mobiles_body = "mobiles:\n  200:\n    race: \"human\"";
        let merged = merge_documents(rooms_doc, mobiles_body);

        assert!(merged.starts_with("---\nname: Haven\n"));
        assert!(merged.contains("rooms:\n  100:"));
        assert!(merged.contains("\nmobiles:\n  200:"));
        // The merged document is still one YAML mapping.
        let value: serde_yaml::Value = serde_yaml::from_str(&merged).unwrap();
        assert_eq!(value["name"], serde_yaml::Value::from("Haven"));
        assert!(value["rooms"].get(100).is_some());
        assert!(value["mobiles"].get(200).is_some());
    }

    #[test]
    fn test_merge_without_rooms_block() {
        let merged = merge_documents("---\nname: Haven\n", "mobiles:\n  200:\n    level: 1");
        assert!(merged.starts_with("---\nname: Haven\n"));
        assert!(merged.contains("mobiles:\n  200:"));
    }

    #[test]
    fn test_merge_replaces_stale_mobiles_block() {
        let rooms_doc = "---\nname: Haven\nrooms:\n  100:\n    name: \"Temple\"\nmobiles:\n  999:\n    level: 9\n";
        let merged = merge_documents(rooms_doc, "mobiles:\n  200:\n    level: 1");
        assert!(!merged.contains("999"));
        assert!(merged.contains("mobiles:\n  200:"));
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name("midgaard.are", ".yml"), "midgaard.yml");
        assert_eq!(
            output_file_name("midgaard.are", "-resets.yml"),
            "midgaard-resets.yml"
        );
        assert_eq!(output_file_name("noext", ".yml"), "noext.yml");
    }
}
