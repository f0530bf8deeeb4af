//! Boolean query parser.
//!
//! Builds a [`BoolQuery`] from a token stream by rewriting it in three passes, one per
//! operator, in [`Operator::PASS_ORDER`]:
//!
//! ```text
//! pass(op):  operand op operand  →  value      (left to right, no overlap)
//! operand →  WORD | QUOTED (non-empty) | KEYWORD (as a plain word) | value
//! ```
//!
//! A value produced in a pass is not rescanned by that same pass, so
//! `a OR b OR c` becomes `(a OR b) OR c` with the trailing `OR c` left unresolved.
//! Bare words that never take part in a rewrite do not affect the result; the values
//! that do, plus any literal `TRUE` word left behind, decide the match.
//!
//! When the query holds no operator keyword at all, the whole query is a single term.

use std::collections::VecDeque;

use crate::{
    ast::{BoolExpr, BoolQuery, Operator, Term},
    lexer::{Token, tokenize},
};

/// A position in the token stream being rewritten.
#[derive(Debug, Clone)]
enum Slot {
    /// An untouched token.
    Token(Token),
    /// A value produced by an earlier rewrite.
    Value(BoolExpr),
}

impl Slot {
    /// Checks if this slot is the keyword for `op`.
    fn is_operator(&self, op: Operator) -> bool {
        matches!(self, Self::Token(token) if token.operator() == Some(op))
    }

    /// Returns the slot as an operand of `op`, if it can be one.
    ///
    /// Words spelled `TRUE`/`FALSE` read as truth values once the OR pass has run,
    /// since by then they are indistinguishable from rewritten values.
    fn operand(&self, op: Operator) -> Option<BoolExpr> {
        let token = match self {
            Self::Value(expr) => return Some(expr.clone()),
            Self::Token(token) => token,
        };

        match token {
            Token::Word(word) if op != Operator::Or && word == "TRUE" => {
                Some(BoolExpr::Literal(true))
            }
            Token::Word(word) if op != Operator::Or && word == "FALSE" => {
                Some(BoolExpr::Literal(false))
            }
            Token::Word(word) => Some(BoolExpr::Term(Term::bare(word.as_str()))),
            Token::Quoted(text) if !text.is_empty() => {
                Some(BoolExpr::Term(Term::quoted(text.as_str())))
            }
            Token::And | Token::Or | Token::Not => token
                .operator()
                .map(|keyword| BoolExpr::Term(Term::bare(keyword.keyword()))),
            Token::Quoted(_) | Token::Symbol(_) => None,
        }
    }
}

/// Pass-ordered parser for boolean queries.
struct Parser {
    /// Token stream being rewritten.
    slots: Vec<Slot>,
}

impl Parser {
    /// Creates a new parser from a token stream.
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            slots: tokens.into_iter().map(Slot::Token).collect(),
        }
    }

    /// Runs every rewrite pass and collects the deciding values.
    fn parse(mut self) -> Vec<BoolExpr> {
        for op in Operator::PASS_ORDER {
            self.rewrite(op);
        }

        self.slots
            .into_iter()
            .filter_map(|slot| match slot {
                Slot::Value(expr) => Some(expr),
                Slot::Token(Token::Word(word)) if word == "TRUE" => Some(BoolExpr::Literal(true)),
                Slot::Token(_) => None,
            })
            .collect()
    }

    /// Replaces each `operand op operand` run with a single value, left to right.
    fn rewrite(&mut self, op: Operator) {
        let mut pending: VecDeque<Slot> = self.slots.drain(..).collect();
        let mut rewritten = Vec::with_capacity(pending.len());

        while let Some(slot) = pending.pop_front() {
            if let Some(expr) = Self::match_triple(&slot, &pending, op) {
                pending.pop_front(); // operator
                pending.pop_front(); // right operand
                rewritten.push(Slot::Value(expr));
            } else {
                rewritten.push(slot);
            }
        }

        self.slots = rewritten;
    }

    /// Returns the combined value if `left` starts an `operand op operand` run.
    fn match_triple(left: &Slot, rest: &VecDeque<Slot>, op: Operator) -> Option<BoolExpr> {
        let (keyword, right) = (rest.front()?, rest.get(1)?);
        if !keyword.is_operator(op) {
            return None;
        }
        let left = left.operand(op)?;
        let right = right.operand(op)?;
        Some(BoolExpr::combine(op, left, right))
    }
}

/// Parses a boolean query.
///
/// Returns `None` for empty or whitespace-only input.
pub fn parse(input: &str) -> Option<BoolQuery> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens = tokenize(trimmed);
    if !tokens.iter().any(|token| token.operator().is_some()) {
        return Some(BoolQuery::Single(Term::from_raw(trimmed)));
    }

    Some(BoolQuery::Any(Parser::new(tokens).parse()))
}
