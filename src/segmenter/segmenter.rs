use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, SourceMap,
};

const BODY_START: &str = "BEGIN";
const BODY_END: &str = "END.";

/// One top-level statement as found in the program body, before parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub text: String,
    /// Where the instruction's first line starts in the program text
    pub position: Position,
    /// Where each joined line of `text` starts in the program text
    pub source_map: SourceMap,
}

/// Returns the program body and its byte offset: the text strictly between
/// the first `BEGIN` and the first `END.` after it. A missing `END.` runs
/// the body to the end of the source.
pub fn extract_body(source: &str) -> Option<(usize, &str)> {
    let body_start = source.find(BODY_START)? + BODY_START.len();
    let rest = &source[body_start..];
    let body_end = rest.find(BODY_END).unwrap_or(rest.len());

    Some((body_start, &rest[..body_end]))
}

/// Splits the program body into instructions.
///
/// Lines are trimmed and blank lines dropped. Lines accumulate, joined by a
/// single space, until one ends with `;` or contains `END.`. Boundaries are
/// only recognised at line ends, so two statements sharing a line stay one
/// instruction.
pub fn segment_instructions(source: &str, file: Rc<String>) -> Result<Vec<Instruction>, Error> {
    let (body_offset, body) = extract_body(source)
        .ok_or_else(|| Error::new(ErrorImpl::MissingProgramBody, Position(0, Rc::clone(&file))))?;

    let mut instructions = vec![];
    let mut pending = String::new();
    let mut pending_offset = body_offset;
    let mut source_map = SourceMap::default();
    let mut line_offset = body_offset;

    for line in body.split('\n') {
        let trimmed = line.trim();
        let leading = line.len() - line.trim_start().len();
        let offset = line_offset + leading;
        line_offset += line.len() + 1;

        if trimmed.is_empty() {
            continue;
        }

        if pending.is_empty() {
            pending_offset = offset;
        }
        source_map.push_line(pending.len(), offset as u32);
        pending.push_str(trimmed);
        pending.push(' ');

        if trimmed.ends_with(';') || trimmed.contains(BODY_END) {
            instructions.push(Instruction {
                text: pending.trim().to_string(),
                position: Position(pending_offset as u32, Rc::clone(&file)),
                source_map: std::mem::take(&mut source_map),
            });
            pending.clear();
        }
    }

    if !pending.trim().is_empty() {
        instructions.push(Instruction {
            text: pending.trim().to_string(),
            position: Position(pending_offset as u32, Rc::clone(&file)),
            source_map,
        });
    }

    Ok(instructions)
}
