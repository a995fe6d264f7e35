use crate::{
    ast::{
        ast::{Node, NodeKind, NodeValue},
        types::{DeclaredType, LiteralValue, ValueType},
    },
    errors::errors::{Error, ErrorImpl},
};

use super::symbol_table::SymbolTable;

/// Literal value, if the node is a literal, and the node's type.
pub type CheckResult = (Option<LiteralValue>, ValueType);

/// Bottom-up type checker over one program's symbol table.
#[derive(Debug)]
pub struct TypeChecker<'a> {
    pub symbol_table: &'a SymbolTable,
}

impl<'a> TypeChecker<'a> {
    pub fn new(symbol_table: &'a SymbolTable) -> Self {
        TypeChecker { symbol_table }
    }

    fn fetch_variable_type(&self, node: &Node, variable: &str) -> Result<DeclaredType, Error> {
        self.symbol_table.get_variable(variable).ok_or_else(|| {
            Error::new(
                ErrorImpl::UndeclaredVariable {
                    variable: variable.to_string(),
                },
                node.span.start.clone(),
            )
        })
    }

    /// Checks a node in statement position: a root, a THEN branch, a loop
    /// body or an ELSE body. Only statement kinds are accepted there.
    pub fn check_statement(&self, node: &Node) -> Result<CheckResult, Error> {
        match node.kind() {
            NodeKind::Assignment
            | NodeKind::If
            | NodeKind::Else
            | NodeKind::While
            | NodeKind::Write => self.check_node(node),
            kind => Err(Error::new(
                ErrorImpl::UnknownNodeKind {
                    kind: kind.to_string(),
                },
                node.span.start.clone(),
            )),
        }
    }

    /// Infers the type of any node, failing on the first rule violation.
    pub fn check_node(&self, node: &Node) -> Result<CheckResult, Error> {
        match &node.value {
            NodeValue::Integer(value) => Ok((Some(LiteralValue::Integer(*value)), ValueType::Integer)),
            NodeValue::String(value) => {
                Ok((Some(LiteralValue::String(value.clone())), ValueType::String))
            }
            NodeValue::Variable(name) => {
                Ok((None, self.fetch_variable_type(node, name)?.into()))
            }
            NodeValue::Arithmetic { left, right, .. } => {
                let (_, left_type) = self.check_node(left)?;
                let (_, right_type) = self.check_node(right)?;

                if left_type != ValueType::Integer || right_type != ValueType::Integer {
                    return Err(Error::new(
                        ErrorImpl::ArithmeticTypeError {
                            left: left_type.to_string(),
                            right: right_type.to_string(),
                        },
                        node.span.start.clone(),
                    ));
                }

                Ok((None, ValueType::Integer))
            }
            NodeValue::Comparison { left, right, .. } => {
                let (_, left_type) = self.check_node(left)?;
                let (_, right_type) = self.check_node(right)?;

                if left_type != right_type {
                    return Err(Error::new(
                        ErrorImpl::ComparisonTypeMismatch {
                            left: left_type.to_string(),
                            right: right_type.to_string(),
                        },
                        node.span.start.clone(),
                    ));
                }

                Ok((None, ValueType::Boolean))
            }
            NodeValue::Assignment { target, value } => {
                // The value is checked before the target is looked up
                let (_, value_type) = self.check_node(value)?;
                let target_type = ValueType::from(self.fetch_variable_type(node, target)?);

                let widening = target_type == ValueType::Real && value_type == ValueType::Integer;
                if target_type != value_type && !widening {
                    return Err(Error::new(
                        ErrorImpl::AssignmentTypeMismatch {
                            expected: target_type.to_string(),
                            received: value_type.to_string(),
                        },
                        node.span.start.clone(),
                    ));
                }

                Ok((None, target_type))
            }
            NodeValue::If {
                condition,
                then_branch,
            } => {
                self.check_condition(condition, "IF")?;
                self.check_statement(then_branch)?;
                Ok((None, ValueType::Void))
            }
            NodeValue::While { condition, body } => {
                self.check_condition(condition, "WHILE")?;
                self.check_statement(body)?;
                Ok((None, ValueType::Void))
            }
            NodeValue::Write { arguments } => {
                for argument in arguments {
                    self.check_node(argument)?;
                }
                Ok((None, ValueType::Void))
            }
            NodeValue::Else { body } => {
                self.check_statement(body)?;
                Ok((None, ValueType::Void))
            }
        }
    }

    fn check_condition(&self, condition: &Node, statement: &str) -> Result<(), Error> {
        let (_, condition_type) = self.check_node(condition)?;

        if condition_type != ValueType::Boolean {
            return Err(Error::new(
                ErrorImpl::ConditionTypeError {
                    statement: statement.to_string(),
                    received: condition_type.to_string(),
                },
                condition.span.start.clone(),
            ));
        }

        Ok(())
    }
}

/// Type checks one statement root against `symbol_table`.
///
/// # Returns
///
/// The statement's type: the target's declared type for an assignment,
/// `Void` for every other statement.
pub fn type_check(ast: &Node, symbol_table: &SymbolTable) -> Result<ValueType, Error> {
    let (_, value_type) = TypeChecker::new(symbol_table).check_statement(ast)?;
    Ok(value_type)
}
