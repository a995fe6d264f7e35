#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::{ast::Node, types::ValueType},
    errors::errors::{Error, ErrorTip},
    parser::parser::parse_mapped_instruction,
    segmenter::segmenter::{segment_instructions, Instruction},
    type_checker::{symbol_table::{build_symbol_table, SymbolTable}, type_checker::type_check},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod segmenter;
pub mod type_checker;

extern crate regex;

/// Byte offset into a source file, with the file's name.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Maps byte offsets in a joined instruction back to the program text.
///
/// Each entry is `(index in the instruction, offset in the program)` for the
/// start of one source line. Entries are in increasing order on both sides.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceMap {
    lines: Vec<(usize, u32)>,
}

impl SourceMap {
    /// A map for text copied verbatim from `offset`.
    pub fn starting_at(offset: u32) -> Self {
        SourceMap {
            lines: vec![(0, offset)],
        }
    }

    /// Records that the instruction text at `index` came from `offset`.
    pub fn push_line(&mut self, index: usize, offset: u32) {
        self.lines.push((index, offset));
    }

    pub fn to_source(&self, index: usize) -> u32 {
        match self.lines.iter().rev().find(|(start, _)| *start <= index) {
            Some((start, offset)) => offset + (index - start) as u32,
            None => index as u32,
        }
    }

    pub fn to_local(&self, offset: u32) -> usize {
        match self.lines.iter().rev().find(|(_, source)| *source <= offset) {
            Some((start, source)) => start + (offset - source) as usize,
            None => 0,
        }
    }
}

/// A statement that passed type checking.
#[derive(Debug, Clone)]
pub struct CheckedStatement {
    pub instruction: Instruction,
    pub ast: Node,
    pub value_type: ValueType,
}

/// Everything a successful validation produced.
#[derive(Debug, Clone)]
pub struct Validation {
    pub symbol_table: SymbolTable,
    pub statements: Vec<CheckedStatement>,
}

/// Runs the whole pipeline over a program: symbol table, segmentation, then
/// parse and type check of each instruction in program order. Stops at the
/// first error.
pub fn validate_program(source: &str, file: Option<String>) -> Result<Validation, Error> {
    let file = Rc::new(file.unwrap_or_else(|| String::from("shell")));

    let symbol_table = build_symbol_table(source, Rc::clone(&file))?;
    let instructions = segment_instructions(source, Rc::clone(&file))?;

    let mut statements = vec![];

    for instruction in instructions {
        let text = instruction.text.strip_suffix(';').unwrap_or(&instruction.text).trim();
        if text.is_empty() {
            continue;
        }

        let ast = parse_mapped_instruction(text, &instruction.source_map, Rc::clone(&file))?;
        let value_type = type_check(&ast, &symbol_table)?;

        statements.push(CheckedStatement {
            instruction,
            ast,
            value_type,
        });
    }

    Ok(Validation {
        symbol_table,
        statements,
    })
}

/// Pass/fail verdict for a program.
pub fn analyze_program(source: &str) -> Result<(), Error> {
    validate_program(source, None).map(|_| ())
}

/// Returns the 1-based line number, the line's text and the column of
/// `position` in `content`, or `None` past the end.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    // Offset at the very end of the content
    content
        .split_inclusive('\n')
        .enumerate()
        .last()
        .map(|(index, line)| (index + 1, line.to_string(), line.len()))
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nline two\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 32).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_source_map_translates_both_ways() {
        let mut map = super::SourceMap::starting_at(10);
        map.push_line(9, 30);

        assert_eq!(map.to_source(0), 10);
        assert_eq!(map.to_source(8), 18);
        assert_eq!(map.to_source(9), 30);
        assert_eq!(map.to_source(12), 33);

        assert_eq!(map.to_local(33), 12);
        assert_eq!(map.to_local(18), 8);
        assert_eq!(map.to_local(10), 0);
    }

    #[test]
    fn test_get_line_past_the_end() {
        assert!(super::get_line_at_position("abc", 10).is_none());
        assert_eq!(
            super::get_line_at_position("abc", 3),
            Some((1, "abc".to_string(), 3))
        );
    }
}

/// Renders an error the way the CLI reports it:
///
/// ```text
/// Error: name (tip)
/// -> code.pas
///    |
/// 12 | x := 'a';
///    | -----^
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }

    let position = error.get_position();
    output.push_str(&format!("-> {}\n", position.1));

    if let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) {
        let line_string = line.to_string();
        let padding = line_string.len() + 2;

        output.push_str(&format!("{:>padding$}\n", "|"));

        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
        output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim()));

        let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
        output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    }

    output
}

pub fn display_error(error: &Error, source: &str) {
    print!("{}", format_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.len() - string.trim_start_matches(|c: char| c == ' ' || c == '\t').len();

    (String::from(&string[start..]), start)
}
