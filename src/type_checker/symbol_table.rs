use std::{collections::HashMap, rc::Rc};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    ast::types::DeclaredType,
    errors::errors::{Error, ErrorImpl},
    Position,
};

lazy_static! {
    /// Everything between `VAR` and the first `BEGIN` or `END.` after it
    static ref VAR_BLOCK: Regex = Regex::new(r"(?s)VAR(.*?)(BEGIN|END\.)").unwrap();
    /// `name1, name2 : TYPE;`
    static ref DECLARATION: Regex =
        Regex::new(r"([\w, ]+)\s*:\s*(INTEGER|REAL|BOOLEAN|CHAR);").unwrap();
}

/// The single, flat scope of a program: variable name to declared type.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    variables: HashMap<String, DeclaredType>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            variables: HashMap::new(),
        }
    }

    /// Binds `variable_name`. A second binding of the same name is an error,
    /// whatever its type.
    pub fn declare_variable(
        &mut self,
        variable_name: String,
        variable_type: DeclaredType,
        current_position: Position,
    ) -> Result<(), Error> {
        if self.variables.contains_key(&variable_name) {
            Err(Error::new(
                ErrorImpl::DuplicateDeclaration {
                    variable: variable_name,
                },
                current_position,
            ))
        } else {
            self.variables.insert(variable_name, variable_type);
            Ok(())
        }
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<DeclaredType> {
        self.variables.get(variable_name).copied()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Declarations sorted by name.
    pub fn sorted(&self) -> Vec<(&str, DeclaredType)> {
        let mut entries: Vec<(&str, DeclaredType)> = self
            .variables
            .iter()
            .map(|(name, ty)| (name.as_str(), *ty))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// Builds the symbol table from the `VAR` section of `source`.
///
/// Recognises `a, b, c : TYPE;` statements inside the section; text that
/// does not have that shape is ignored. Blank names left by stray commas
/// are skipped.
pub fn build_symbol_table(source: &str, file: Rc<String>) -> Result<SymbolTable, Error> {
    let block = VAR_BLOCK
        .captures(source)
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| Error::new(ErrorImpl::MissingVarSection, Position(0, Rc::clone(&file))))?;

    let mut symbol_table = SymbolTable::new();

    for declaration in DECLARATION.captures_iter(block.as_str()) {
        let (Some(names), Some(type_keyword)) = (declaration.get(1), declaration.get(2)) else {
            continue;
        };
        let Some(declared_type) = DeclaredType::from_keyword(type_keyword.as_str()) else {
            continue;
        };

        let mut name_offset = block.start() + names.start();
        for name in names.as_str().split(',') {
            let leading = name.len() - name.trim_start().len();
            let position = Position((name_offset + leading) as u32, Rc::clone(&file));
            name_offset += name.len() + 1;

            let name = name.trim();
            if name.is_empty() {
                continue;
            }

            symbol_table.declare_variable(name.to_string(), declared_type, position)?;
        }
    }

    Ok(symbol_table)
}
