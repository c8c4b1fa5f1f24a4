use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
  #[error("lexical error at {line}:{column}: unexpected character `{ch}`")]
  UnexpectedChar {
    ch: char,
    line: usize,
    column: usize,
  },

  #[error("lexical error at {line}:{column}: unterminated string literal")]
  UnterminatedString {
    line: usize,
    column: usize,
  },
}

impl LexError {
  pub fn position(&self) -> (usize, usize) {
    match *self {
      LexError::UnexpectedChar { line, column, .. } |
      LexError::UnterminatedString { line, column } => (line, column),
    }
  }
}

/// Errors raised while loading a grammar, or while building the parser
/// when the conflict policy is strict. `line` is the 1-indexed line of the
/// grammar text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
  #[error("grammar line {line}: missing `->`, `→` or `::=` in `{text}`")]
  MissingArrow {
    line: usize,
    text: String,
  },

  #[error("grammar line {line}: invalid left-hand side `{lhs}`")]
  InvalidLhs {
    line: usize,
    lhs: String,
  },

  #[error("grammar line {line}: `ε` must be the only symbol of an alternative")]
  MisplacedEpsilon {
    line: usize,
  },

  #[error("grammar line {line}: `{symbol}` is reserved for the end of input")]
  ReservedSymbol {
    line: usize,
    symbol: String,
  },

  #[error("grammar has no productions")]
  Empty,

  #[error("grammar is not LL(1): {conflicts} conflicting table cells")]
  NotLl1 {
    conflicts: usize,
  },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
  #[error("syntax error at {line}:{column}: found `{found}`, expected end of input")]
  TrailingInput {
    found: String,
    line: usize,
    column: usize,
  },

  #[error("syntax error at {line}:{column}: found `{found}`, expected `{expected}`")]
  Mismatch {
    found: String,
    expected: String,
    line: usize,
    column: usize,
  },

  #[error("syntax error at {line}:{column}: found `{found}`, expected one of {{{}}}",
    .expected.join(", "))]
  NoProduction {
    nonterm: String,
    found: String,
    /// Sorted and deduplicated.
    expected: Vec<String>,
    line: usize,
    column: usize,
  },

  /// Only reachable through a conflicting cell under the lenient policy.
  #[error("syntax error at {line}:{column}: `{nonterm}` expands to itself without consuming input")]
  LeftRecursion {
    nonterm: String,
    line: usize,
    column: usize,
  },
}

impl SyntaxError {
  pub fn position(&self) -> (usize, usize) {
    match *self {
      SyntaxError::TrailingInput { line, column, .. } |
      SyntaxError::Mismatch { line, column, .. } |
      SyntaxError::NoProduction { line, column, .. } |
      SyntaxError::LeftRecursion { line, column, .. } => (line, column),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error(transparent)]
  Lex(#[from] LexError),

  #[error(transparent)]
  Grammar(#[from] GrammarError),

  #[error(transparent)]
  Syntax(#[from] SyntaxError),
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn no_production_lists_expected() {
    let err = SyntaxError::NoProduction {
      nonterm: "F".to_owned(),
      found: "+".to_owned(),
      expected: vec!["(".to_owned(), "id".to_owned()],
      line: 2,
      column: 7,
    };

    assert_eq!(
      err.to_string(),
      "syntax error at 2:7: found `+`, expected one of {(, id}");
    assert_eq!(err.position(), (2, 7));
  }

  #[test]
  fn umbrella_is_transparent() {
    let err = Error::from(LexError::UnterminatedString { line: 3, column: 1 });

    assert_eq!(
      err.to_string(),
      "lexical error at 3:1: unterminated string literal");
  }
}
