//! Room pipeline: the `#ROOMS` section into typed [`Room`] records.
//!
//! Each room block is walked by a strict state sequence: name line,
//! sentinel-terminated description, an optional sector/flags line, then a
//! body loop keyed on the leading character (`D` exit, `E` extra
//! description, `S` end of room). Structural failures drop at most the
//! current record; sibling blocks always parse.

use rayon::prelude::*;

use super::{extract_section, split_blocks, AreaError, LineCursor};
use crate::records::{Direction, Exit, ExtraDescription, Room, RoomSet};

pub const SECTION: &str = "ROOMS";

/// Parses every room block in the `#ROOMS` section.
///
/// Blocks are independent, so they parse in parallel; the result keeps
/// source order regardless of completion order. Only a missing section is
/// an error — bad blocks are dropped with a warning.
pub fn parse_rooms(input: &str) -> Result<RoomSet, AreaError> {
    let section = extract_section(input, SECTION)?;
    let parsed: Vec<(String, Option<Room>)> = split_blocks(section)
        .par_iter()
        .map(|(id, body)| {
            let room = match parse_room_content(id, body) {
                Ok(room) => Some(room),
                Err(e) => {
                    tracing::warn!("[rooms] dropping room {id}: {e}");
                    None
                }
            };
            (id.clone(), room)
        })
        .collect();

    let mut rooms = RoomSet::new();
    for (id, room) in parsed {
        if let Some(room) = room {
            rooms.insert(id, room);
        }
    }
    Ok(rooms)
}

/// Parses one room block. An unterminated main description fails the
/// whole record; later sentinel failures end the body loop but keep the
/// fields already collected, as the legacy converter did.
pub fn parse_room_content(room_id: &str, content: &str) -> Result<Room, AreaError> {
    let mut cur = LineCursor::new(content);

    let name = cur
        .next_line()
        .unwrap_or_default()
        .trim_end_matches('~')
        .to_string();

    let description = cur
        .take_paragraph()
        .ok_or_else(|| AreaError::UnterminatedDescription {
            room_id: room_id.to_string(),
        })?;

    // The sector/flags line is sometimes absent in the wild, so look one
    // line ahead and only consume it when the next line is not already a
    // body marker.
    if let Some(line) = cur.peek() {
        if !(line.starts_with('D') || line.starts_with('E') || line.starts_with('S')) {
            cur.advance();
        }
    }

    let mut room = Room {
        name,
        description,
        exits: Default::default(),
        environment: Vec::new(),
    };

    while let Some(line) = cur.peek() {
        if line.starts_with('S') {
            // End of room; sector flags on the rest of the line are not
            // extracted.
            break;
        } else if line.starts_with('D') {
            cur.advance();
            let code = line.get(..2).unwrap_or(line);
            if !parse_exit(room_id, Direction::from_exit_code(code), &mut cur, &mut room) {
                break;
            }
        } else if line.starts_with('E') {
            cur.advance();
            if !parse_extra_description(room_id, line, &mut cur, &mut room) {
                break;
            }
        } else {
            // Unrecognized record type; skip the line.
            cur.advance();
        }
    }

    Ok(room)
}

/// Parses one `D<n>` exit. Returns `false` when the body loop should stop
/// (missing sentinel); a malformed door-info line only drops this exit.
fn parse_exit(room_id: &str, direction: Direction, cur: &mut LineCursor, room: &mut Room) -> bool {
    let Some(exit_desc) = cur.take_field() else {
        tracing::warn!(
            "[rooms] {}",
            AreaError::UnterminatedExitField {
                room_id: room_id.to_string()
            }
        );
        return false;
    };

    // Door keywords: only the terminating sentinel matters here.
    if cur.take_field().is_none() {
        tracing::warn!(
            "[rooms] {}",
            AreaError::UnterminatedExitField {
                room_id: room_id.to_string()
            }
        );
        return false;
    }

    if let Some(info) = cur.next_line() {
        let door_info: Vec<&str> = info.split_whitespace().collect();
        if door_info.len() >= 3 {
            let destination = door_info[2];
            // -1 marks a closed exit; it is omitted, not stored as null.
            if destination != "-1" {
                room.exits.insert(
                    direction,
                    Exit {
                        destination: destination.to_string(),
                        description: exit_desc,
                    },
                );
            }
        } else {
            tracing::warn!(
                "[rooms] {}",
                AreaError::MalformedRecord {
                    id: room_id.to_string(),
                    detail: format!("door info {info:?} has fewer than 3 fields"),
                }
            );
        }
    }
    true
}

/// Parses one `E` extra description. `line` is the full `E...` line, whose
/// remainder may already carry the keyword field.
fn parse_extra_description(
    room_id: &str,
    line: &str,
    cur: &mut LineCursor,
    room: &mut Room,
) -> bool {
    let mut keyword_line = line[1..].trim().to_string();
    if keyword_line.is_empty() || !keyword_line.contains('~') {
        match cur.next_line() {
            Some(next) => keyword_line = next.to_string(),
            None => {
                tracing::warn!(
                    "[rooms] {}",
                    AreaError::UnterminatedExtraDescription {
                        room_id: room_id.to_string()
                    }
                );
                return false;
            }
        }
    }

    let keywords: Vec<String> = keyword_line
        .split('~')
        .next()
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let Some(description) = cur.take_paragraph() else {
        tracing::warn!(
            "[rooms] {}",
            AreaError::UnterminatedExtraDescription {
                room_id: room_id.to_string()
            }
        );
        return false;
    };

    room.environment.push(ExtraDescription {
        keywords,
        description,
    });
    true
}
