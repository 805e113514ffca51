//! Area-file parsing: section extraction, record-block splitting, and the
//! line cursor the record parsers walk.
//!
//! The legacy format has no nested delimiters. Sections start at a
//! `#SECTION` marker and run to the next one; records start at `#<vnum>`
//! lines; free-text fields end at a `~` sentinel. Everything here is a
//! pure transform over one in-memory string.

pub mod mobiles;
pub mod resets;
pub mod rooms;

/// Errors and diagnostics raised while parsing an area file.
///
/// Only `SectionNotFound` ever reaches a caller; the record-level
/// variants are logged and the offending record (or sub-field) is
/// dropped, so one bad block never aborts its siblings.
#[derive(Debug, thiserror::Error)]
pub enum AreaError {
    #[error("section #{marker} not found in input")]
    SectionNotFound { marker: String },

    #[error("room {room_id}: no end of description")]
    UnterminatedDescription { room_id: String },

    #[error("room {room_id}: no end of exit field")]
    UnterminatedExitField { room_id: String },

    #[error("room {room_id}: no end of extra description")]
    UnterminatedExtraDescription { room_id: String },

    #[error("reset line too short: {line:?}")]
    MalformedResetLine { line: String },

    #[error("record {id}: {detail}")]
    MalformedRecord { id: String, detail: String },
}

/// Returns the text of section `#<marker>`, running from just past the
/// marker to the next top-level `#[A-Z]...` line or end of input. Numeric
/// record markers (`#100`) stay inside the section; a repeat of the same
/// marker does not end it.
pub fn extract_section<'a>(text: &'a str, marker: &str) -> Result<&'a str, AreaError> {
    let tag = format!("#{marker}");
    let start = text.find(&tag).ok_or_else(|| AreaError::SectionNotFound {
        marker: marker.to_string(),
    })?;
    let body = &text[start + tag.len()..];

    let mut end = body.len();
    let mut offset = 0;
    for line in body.split_inclusive('\n') {
        let content = line.trim_end();
        if is_section_marker(content) && content != tag {
            end = offset;
            break;
        }
        offset += line.len();
    }

    Ok(body[..end].trim())
}

fn is_section_marker(line: &str) -> bool {
    match line.strip_prefix('#') {
        Some(rest) => rest.starts_with(|c: char| c.is_ascii_uppercase()),
        None => false,
    }
}

/// Splits section text into `(vnum, body)` record blocks on `#<digits>`
/// marker lines. Text before the first marker is ignored; a section with
/// no markers yields no blocks.
pub fn split_blocks(section: &str) -> Vec<(String, String)> {
    let mut blocks: Vec<(String, String)> = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in section.lines() {
        if let Some(id) = numeric_marker(line) {
            if let Some((id, body)) = current.take() {
                blocks.push((id, body.join("\n").trim().to_string()));
            }
            current = Some((id.to_string(), Vec::new()));
        } else if let Some((_, body)) = current.as_mut() {
            body.push(line);
        }
    }
    if let Some((id, body)) = current {
        blocks.push((id, body.join("\n").trim().to_string()));
    }

    blocks
}

fn numeric_marker(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('#')?.trim_end();
    if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
        Some(rest)
    } else {
        None
    }
}

/// Position cursor over the lines of one record block.
///
/// The record parsers are state machines over this cursor: each state
/// consumes a known number of lines or reads forward to a sentinel.
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            lines: content.split('\n').collect(),
            pos: 0,
        }
    }

    /// The current line, without advancing.
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// The current line, advancing past it.
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.peek();
        if line.is_some() {
            self.pos += 1;
        }
        line
    }

    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Reads lines up to a line that is exactly the `~` sentinel,
    /// consuming the sentinel. `None` when the block ends first.
    pub fn take_paragraph(&mut self) -> Option<String> {
        let start = self.pos;
        while let Some(line) = self.peek() {
            if line == "~" {
                let text = self.lines[start..self.pos].join("\n");
                self.pos += 1;
                return Some(text);
            }
            self.pos += 1;
        }
        None
    }

    /// Like [`take_paragraph`](Self::take_paragraph) but tolerant of a
    /// missing sentinel: the rest of the block becomes the paragraph.
    /// The mobile parser relies on this legacy leniency.
    pub fn take_paragraph_lenient(&mut self) -> String {
        let start = self.pos;
        while let Some(line) = self.peek() {
            if line == "~" {
                let text = self.lines[start..self.pos].join("\n");
                self.pos += 1;
                return text;
            }
            self.pos += 1;
        }
        self.lines[start..self.pos].join("\n")
    }

    /// Reads a `~`-terminated field where the sentinel may sit at the end
    /// of a content line (`north path~`) or stand alone. The trailing
    /// sentinel is stripped. `None` when the block ends first.
    pub fn take_field(&mut self) -> Option<String> {
        let mut collected: Vec<&str> = Vec::new();
        while let Some(line) = self.next_line() {
            if line.trim_end().ends_with('~') {
                let last = line.trim_end().trim_end_matches('~');
                if !last.is_empty() {
                    collected.push(last);
                }
                return Some(collected.join("\n"));
            }
            collected.push(line);
        }
        None
    }
}
