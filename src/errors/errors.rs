use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// True when the error signals a parser/analyzer mismatch rather than a
    /// fault in the analysed program.
    pub fn is_internal(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::UnknownNodeKind { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::MissingVarSection => "MissingVarSection",
            ErrorImpl::MissingProgramBody => "MissingProgramBody",
            ErrorImpl::DuplicateDeclaration { .. } => "DuplicateDeclaration",
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::MissingOperand { .. } => "MissingOperand",
            ErrorImpl::UnknownInstruction { .. } => "UnknownInstruction",
            ErrorImpl::UndeclaredVariable { .. } => "UndeclaredVariable",
            ErrorImpl::AssignmentTypeMismatch { .. } => "AssignmentTypeMismatch",
            ErrorImpl::ArithmeticTypeError { .. } => "ArithmeticTypeError",
            ErrorImpl::ComparisonTypeMismatch { .. } => "ComparisonTypeMismatch",
            ErrorImpl::ConditionTypeError { .. } => "ConditionTypeError",
            ErrorImpl::UnknownNodeKind { .. } => "UnknownNodeKind",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::MissingVarSection => ErrorTip::Suggestion(String::from(
                "Declare variables in a `VAR` section before `BEGIN`",
            )),
            ErrorImpl::MissingProgramBody => {
                ErrorTip::Suggestion(String::from("No `BEGIN` found, the program has no body"))
            }
            ErrorImpl::DuplicateDeclaration { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", variable))
            }
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`", token))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::MissingOperand { expression } => {
                ErrorTip::Suggestion(format!("Operator without operand in `{}`", expression))
            }
            ErrorImpl::UnknownInstruction { instruction } => {
                ErrorTip::Suggestion(format!("Unknown instruction: `{}`", instruction))
            }
            ErrorImpl::UndeclaredVariable { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::AssignmentTypeMismatch { expected, received } => {
                ErrorTip::Suggestion(format!("Cannot assign `{}` to `{}`", received, expected))
            }
            ErrorImpl::ArithmeticTypeError { left, right } => ErrorTip::Suggestion(format!(
                "Arithmetic needs `INTEGER` operands, received `{}` and `{}`",
                left, right
            )),
            ErrorImpl::ComparisonTypeMismatch { left, right } => ErrorTip::Suggestion(format!(
                "Cannot compare `{}` with `{}`",
                left, right
            )),
            ErrorImpl::ConditionTypeError { statement, received } => {
                ErrorTip::Suggestion(format!(
                    "{} condition must be `BOOLEAN`, received `{}`",
                    statement, received
                ))
            }
            ErrorImpl::UnknownNodeKind { kind } => ErrorTip::Suggestion(format!(
                "Internal error: no type rule for `{}` nodes",
                kind
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("no VAR section found in the source code")]
    MissingVarSection,
    #[error("no BEGIN found in the source code")]
    MissingProgramBody,
    #[error("duplicate declaration of variable: {variable}")]
    DuplicateDeclaration { variable: String },
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("missing operand in expression: {expression:?}")]
    MissingOperand { expression: String },
    #[error("unknown instruction: {instruction}")]
    UnknownInstruction { instruction: String },
    #[error("undeclared variable: {variable}")]
    UndeclaredVariable { variable: String },
    #[error("type mismatch: cannot assign {received} to {expected}")]
    AssignmentTypeMismatch { expected: String, received: String },
    #[error("arithmetic operations only support INTEGER types, received {left} and {right}")]
    ArithmeticTypeError { left: String, right: String },
    #[error("type mismatch in comparison: {left} and {right}")]
    ComparisonTypeMismatch { left: String, right: String },
    #[error("{statement} condition must evaluate to BOOLEAN, received {received}")]
    ConditionTypeError { statement: String, received: String },
    #[error("unknown node type: {kind}")]
    UnknownNodeKind { kind: String },
}
