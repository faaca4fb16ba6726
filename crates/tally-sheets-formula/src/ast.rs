//! Formula expression tree types

use tally_sheets_core::{CellAddress, CellRange};

/// Classification of one cell's raw content
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedCell {
    /// Not a formula: the raw string is displayed unchanged, with no
    /// numeric coercion
    Literal,
    /// A formula (raw content started with `=`)
    Formula(Formula),
}

/// A parsed formula body (the part after the leading `=`)
#[derive(Debug, Clone, PartialEq)]
pub enum Formula {
    /// A whole-body range aggregate call, e.g. `SUM(B1:B5)`
    Aggregate {
        kind: AggregateKind,
        range: CellRange,
    },
    /// A general arithmetic expression
    Expr(Expr),
}

/// Range aggregate functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateKind {
    Sum,
    Avg,
}

impl AggregateKind {
    /// Look up an aggregate by its (uppercase) name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "SUM" => Some(AggregateKind::Sum),
            "AVG" => Some(AggregateKind::Avg),
            _ => None,
        }
    }

    /// The aggregate's formula-language name
    pub fn name(&self) -> &'static str {
        match self {
            AggregateKind::Sum => "SUM",
            AggregateKind::Avg => "AVG",
        }
    }
}

/// Arithmetic expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal
    Number(f64),
    /// Single cell reference
    CellRef(CellAddress),
    /// Binary operation
    BinaryOp {
        op: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Unary operation
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Expr>,
    },
}

/// Binary operators, standard arithmetic precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
}
