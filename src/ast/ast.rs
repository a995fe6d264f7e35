use std::fmt::Display;

use crate::Span;

use super::types::{ArithmeticOp, ComparisonOp};

/// Node Kinds
///
/// The discriminant of a `Node`, used for reporting and dispatch.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum NodeKind {
    Assignment,
    If,
    Else,
    While,
    Write,
    Comparison,
    Arithmetic,
    Integer,
    String,
    Variable,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Payload and children of a node, one shape per kind.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue {
    Assignment {
        target: String,
        value: Box<Node>,
    },
    If {
        condition: Box<Node>,
        then_branch: Box<Node>,
    },
    Else {
        body: Box<Node>,
    },
    While {
        condition: Box<Node>,
        body: Box<Node>,
    },
    Write {
        arguments: Vec<Node>,
    },
    Comparison {
        operator: ComparisonOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Arithmetic {
        operator: ArithmeticOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Integer(i64),
    String(String),
    Variable(String),
}

/// A parsed node. Nodes own their children and are never mutated after
/// the parser builds them.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub value: NodeValue,
    pub span: Span,
}

impl Node {
    pub fn new(value: NodeValue, span: Span) -> Self {
        Node { value, span }
    }

    pub fn kind(&self) -> NodeKind {
        match &self.value {
            NodeValue::Assignment { .. } => NodeKind::Assignment,
            NodeValue::If { .. } => NodeKind::If,
            NodeValue::Else { .. } => NodeKind::Else,
            NodeValue::While { .. } => NodeKind::While,
            NodeValue::Write { .. } => NodeKind::Write,
            NodeValue::Comparison { .. } => NodeKind::Comparison,
            NodeValue::Arithmetic { .. } => NodeKind::Arithmetic,
            NodeValue::Integer(_) => NodeKind::Integer,
            NodeValue::String(_) => NodeKind::String,
            NodeValue::Variable(_) => NodeKind::Variable,
        }
    }

    /// Children in evaluation order.
    pub fn children(&self) -> Vec<&Node> {
        match &self.value {
            NodeValue::Assignment { value, .. } => vec![value.as_ref()],
            NodeValue::If {
                condition,
                then_branch,
            } => vec![condition.as_ref(), then_branch.as_ref()],
            NodeValue::Else { body } => vec![body.as_ref()],
            NodeValue::While { condition, body } => vec![condition.as_ref(), body.as_ref()],
            NodeValue::Write { arguments } => arguments.iter().collect(),
            NodeValue::Comparison { left, right, .. }
            | NodeValue::Arithmetic { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            NodeValue::Integer(_) | NodeValue::String(_) | NodeValue::Variable(_) => vec![],
        }
    }
}

/// Renders the tree in an s-expression form, e.g.
/// `(Assignment x (Arithmetic + (Integer 1) (Integer 2)))`.
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}", self.kind())?;
        match &self.value {
            NodeValue::Assignment { target, .. } => write!(f, " {}", target)?,
            NodeValue::Comparison { operator, .. } => write!(f, " {}", operator)?,
            NodeValue::Arithmetic { operator, .. } => write!(f, " {}", operator)?,
            NodeValue::Integer(value) => write!(f, " {}", value)?,
            NodeValue::String(value) => write!(f, " '{}'", value)?,
            NodeValue::Variable(name) => write!(f, " {}", name)?,
            _ => {}
        }
        for child in self.children() {
            write!(f, " {}", child)?;
        }
        write!(f, ")")
    }
}
