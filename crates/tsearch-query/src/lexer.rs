//! Boolean query lexer (tokenizer).
//!
//! Converts a boolean query into word runs, quoted terms, operator keywords and
//! stray symbols. Lexing never fails: an unclosed quote becomes a symbol and the
//! text after it is lexed normally.

use std::{iter::Peekable, str::Chars};

use crate::ast::Operator;

/// A token in a boolean query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of word characters (letters, digits, underscore).
    Word(String),

    /// A double-quoted term (the quotes are stripped, content preserved, may be empty).
    Quoted(String),

    /// The `AND` keyword.
    And,

    /// The `OR` keyword.
    Or,

    /// The `NOT` keyword.
    Not,

    /// Any other non-whitespace character.
    Symbol(char),
}

impl Token {
    /// Returns the operator for keyword tokens.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Self::And => Some(Operator::And),
            Self::Or => Some(Operator::Or),
            Self::Not => Some(Operator::Not),
            _ => None,
        }
    }
}

/// Returns true for characters that make up a bare word.
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Tokenizes a boolean query.
struct Lexer<'a> {
    /// Character iterator with one-character lookahead.
    chars: Peekable<Chars<'a>>,
    /// Whether the most recently consumed character was whitespace.
    after_space: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            after_space: false,
        }
    }

    /// Tokenizes the entire input.
    fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(token) = self.next_token() {
            tokens.push(token);
        }

        tokens
    }

    /// Returns the next token, or None if at end of input.
    fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let &ch = self.chars.peek()?;
        let spaced_before = self.after_space;
        self.after_space = false;

        let token = match ch {
            '"' => self.read_quoted(),
            c if is_word_char(c) => self.read_word(spaced_before),
            c => {
                self.advance();
                Token::Symbol(c)
            }
        };

        Some(token)
    }

    /// Reads a quoted term, or a lone quote symbol when no closing quote follows.
    fn read_quoted(&mut self) -> Token {
        self.advance(); // consume opening quote

        let mut lookahead = self.chars.clone();
        let mut content = String::new();

        loop {
            match lookahead.next() {
                Some('"') => {
                    self.chars = lookahead;
                    return Token::Quoted(content);
                }
                Some(ch) => content.push(ch),
                None => return Token::Symbol('"'),
            }
        }
    }

    /// Reads a word, recognizing keywords that are surrounded by whitespace.
    fn read_word(&mut self, spaced_before: bool) -> Token {
        let mut word = String::new();

        while let Some(&ch) = self.chars.peek() {
            if !is_word_char(ch) {
                break;
            }
            word.push(ch);
            self.advance();
        }

        let spaced_after = self.chars.peek().is_some_and(|ch| ch.is_whitespace());
        if spaced_before && spaced_after {
            match word.as_str() {
                "AND" => return Token::And,
                "OR" => return Token::Or,
                "NOT" => return Token::Not,
                _ => {}
            }
        }

        Token::Word(word)
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if ch.is_whitespace() {
                self.after_space = true;
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Advances to the next character.
    fn advance(&mut self) {
        self.chars.next();
    }
}

/// Convenience function to tokenize a boolean query.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Token {
        Token::Word(s.into())
    }

    #[test]
    fn empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn whitespace_only() {
        assert_eq!(tokenize("  \t "), vec![]);
    }

    #[test]
    fn multiple_words() {
        assert_eq!(tokenize("cat dog"), vec![word("cat"), word("dog")]);
    }

    #[test]
    fn keywords() {
        assert_eq!(
            tokenize("cat AND dog OR bird NOT fish"),
            vec![
                word("cat"),
                Token::And,
                word("dog"),
                Token::Or,
                word("bird"),
                Token::Not,
                word("fish")
            ]
        );
    }

    #[test]
    fn lowercase_keywords_are_words() {
        assert_eq!(
            tokenize("cat and dog or bird"),
            vec![word("cat"), word("and"), word("dog"), word("or"), word("bird")]
        );
    }

    #[test]
    fn keyword_needs_surrounding_whitespace() {
        assert_eq!(tokenize("AND cat"), vec![word("AND"), word("cat")]);
        assert_eq!(tokenize("cat OR"), vec![word("cat"), word("OR")]);
        assert_eq!(
            tokenize("\"cat\"OR dog"),
            vec![Token::Quoted("cat".into()), word("OR"), word("dog")]
        );
    }

    #[test]
    fn quoted_term() {
        assert_eq!(
            tokenize("\"hello world\" OR x"),
            vec![Token::Quoted("hello world".into()), Token::Or, word("x")]
        );
    }

    #[test]
    fn empty_quotes() {
        assert_eq!(tokenize("\"\""), vec![Token::Quoted(String::new())]);
    }

    #[test]
    fn unclosed_quote_is_symbol() {
        assert_eq!(
            tokenize("\"foo OR bar"),
            vec![Token::Symbol('"'), word("foo"), Token::Or, word("bar")]
        );
    }

    #[test]
    fn punctuation_splits_words() {
        assert_eq!(
            tokenize("don't c++"),
            vec![
                word("don"),
                Token::Symbol('\''),
                word("t"),
                word("c"),
                Token::Symbol('+'),
                Token::Symbol('+')
            ]
        );
    }

    #[test]
    fn numbers_and_unicode() {
        assert_eq!(
            tokenize("42 café_au_lait"),
            vec![word("42"), word("café_au_lait")]
        );
    }

    #[test]
    fn operator_mapping() {
        assert_eq!(Token::Or.operator(), Some(Operator::Or));
        assert_eq!(Token::And.operator(), Some(Operator::And));
        assert_eq!(Token::Not.operator(), Some(Operator::Not));
        assert_eq!(word("OR").operator(), None);
    }
}
