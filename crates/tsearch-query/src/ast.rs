//! Boolean query abstract syntax tree.
//!
//! Leaves are generic so the same tree shape serves both the parsed form
//! (leaves are [`Term`]s) and the compiled form (leaves are term patterns).

use std::fmt;

/// A boolean operator keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `left OR right`.
    Or,
    /// `left AND right`.
    And,
    /// `left NOT right`: the left side holds and the right side does not.
    Not,
}

impl Operator {
    /// Operators in the order their rewrite passes run.
    pub const PASS_ORDER: [Self; 3] = [Self::Or, Self::And, Self::Not];

    /// Returns the keyword as written in a query.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Or => "OR",
            Self::And => "AND",
            Self::Not => "NOT",
        }
    }
}

/// A search term taken from a boolean query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term {
    /// Term text without surrounding quotes.
    pub text: String,
    /// Whether the term was double-quoted (whole-word match).
    pub quoted: bool,
}

impl Term {
    /// Creates an unquoted term.
    pub fn bare(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quoted: false,
        }
    }

    /// Creates a quoted term.
    pub fn quoted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quoted: true,
        }
    }

    /// Builds a term from raw query text, detecting surrounding double quotes.
    pub fn from_raw(raw: &str) -> Self {
        match raw
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
        {
            Some(inner) => Self::quoted(inner),
            None => Self::bare(raw),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quoted {
            write!(f, "\"{}\"", self.text)
        } else {
            write!(f, "{}", self.text)
        }
    }
}

/// A boolean expression produced by one of the rewrite passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoolExpr<T = Term> {
    /// A term tested against the line.
    Term(T),

    /// A truth value written literally in the query (`TRUE` or `FALSE`).
    Literal(bool),

    /// Either side holds.
    Or(Box<Self>, Box<Self>),

    /// Both sides hold.
    And(Box<Self>, Box<Self>),

    /// The left side holds and the right side does not.
    AndNot(Box<Self>, Box<Self>),
}

impl<T> BoolExpr<T> {
    /// Combines two operands with the given operator.
    pub fn combine(op: Operator, left: Self, right: Self) -> Self {
        let (left, right) = (Box::new(left), Box::new(right));
        match op {
            Operator::Or => Self::Or(left, right),
            Operator::And => Self::And(left, right),
            Operator::Not => Self::AndNot(left, right),
        }
    }

    /// Replaces every leaf using `f`, keeping the tree shape.
    pub fn map<U>(self, f: &mut impl FnMut(T) -> U) -> BoolExpr<U> {
        match self {
            Self::Term(t) => BoolExpr::Term(f(t)),
            Self::Literal(b) => BoolExpr::Literal(b),
            Self::Or(l, r) => BoolExpr::Or(Box::new((*l).map(f)), Box::new((*r).map(f))),
            Self::And(l, r) => BoolExpr::And(Box::new((*l).map(f)), Box::new((*r).map(f))),
            Self::AndNot(l, r) => {
                BoolExpr::AndNot(Box::new((*l).map(f)), Box::new((*r).map(f)))
            }
        }
    }

    /// Evaluates the expression, deciding leaves with `leaf`.
    pub fn evaluate(&self, leaf: &mut impl FnMut(&T) -> bool) -> bool {
        match self {
            Self::Term(t) => leaf(t),
            Self::Literal(b) => *b,
            Self::Or(l, r) => l.evaluate(leaf) || r.evaluate(leaf),
            Self::And(l, r) => l.evaluate(leaf) && r.evaluate(leaf),
            Self::AndNot(l, r) => l.evaluate(leaf) && !r.evaluate(leaf),
        }
    }
}

impl<T: fmt::Display> BoolExpr<T> {
    /// Formats the expression as a tree structure with the given indentation level.
    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let prefix = "  ".repeat(indent);
        let (label, left, right) = match self {
            Self::Term(t) => return writeln!(f, "{prefix}Term({t})"),
            Self::Literal(b) => return writeln!(f, "{prefix}Literal({b})"),
            Self::Or(l, r) => ("Or", l, r),
            Self::And(l, r) => ("And", l, r),
            Self::AndNot(l, r) => ("AndNot", l, r),
        };
        writeln!(f, "{prefix}{label}")?;
        left.fmt_tree(f, indent + 1)?;
        right.fmt_tree(f, indent + 1)
    }
}

impl<T: fmt::Display> fmt::Display for BoolExpr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}

/// A parsed boolean query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoolQuery<T = Term> {
    /// The query held no operator keyword; the whole query is a single term.
    Single(T),

    /// Values left after the rewrite passes. The line matches when any holds.
    Any(Vec<BoolExpr<T>>),
}

impl<T> BoolQuery<T> {
    /// Replaces every leaf using `f`.
    pub fn map<U>(self, f: &mut impl FnMut(T) -> U) -> BoolQuery<U> {
        match self {
            Self::Single(t) => BoolQuery::Single(f(t)),
            Self::Any(exprs) => BoolQuery::Any(exprs.into_iter().map(|e| e.map(f)).collect()),
        }
    }

    /// Evaluates the query, deciding leaves with `leaf`.
    pub fn evaluate(&self, leaf: &mut impl FnMut(&T) -> bool) -> bool {
        match self {
            Self::Single(t) => leaf(t),
            Self::Any(exprs) => exprs.iter().any(|e| e.evaluate(leaf)),
        }
    }
}

impl<T: fmt::Display> fmt::Display for BoolQuery<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(t) => writeln!(f, "Single({t})"),
            Self::Any(exprs) => {
                writeln!(f, "Any")?;
                for expr in exprs {
                    expr.fmt_tree(f, 1)?;
                }
                Ok(())
            }
        }
    }
}
