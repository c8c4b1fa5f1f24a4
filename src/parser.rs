use crate::error::GrammarError;
use crate::grammar::Grammar;

mod driver;
mod sets;
mod table;
mod token_set;

pub use driver::{terminal_matches, Derivation};
pub use sets::{First, FirstSets, FollowSets, PredictSets};
pub use table::Table;
pub use token_set::TokenSet;

/// What to do when a table cell receives more than one production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictPolicy {
  /// Keep every candidate and parse with the earliest-declared one.
  FirstWins,
  /// Fail with [`GrammarError::NotLl1`].
  Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
  pub conflicts: ConflictPolicy,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      conflicts: ConflictPolicy::FirstWins,
    }
  }
}

/// A grammar together with its FIRST, FOLLOW and PREDICT sets and LL(1)
/// table. Read-only once built; parse as many token streams as needed.
#[derive(Debug, Clone)]
pub struct Parser {
  grammar: Grammar,
  first: FirstSets,
  follow: FollowSets,
  predict: PredictSets,
  table: Table,
}

impl Parser {
  pub fn new(grammar: Grammar, config: Config) -> Result<Self, GrammarError> {
    let first = FirstSets::new(&grammar);
    let follow = FollowSets::new(&grammar, &first);
    let predict = PredictSets::new(&grammar, &first, &follow);
    let table = Table::new(&grammar, &predict);

    let conflicts = table.conflicts();
    if conflicts > 0 && config.conflicts == ConflictPolicy::Reject {
      return Err(GrammarError::NotLl1 { conflicts });
    }

    Ok(Parser {
      grammar,
      first,
      follow,
      predict,
      table,
    })
  }

  pub fn grammar(&self) -> &Grammar {
    &self.grammar
  }

  pub fn first(&self) -> &FirstSets {
    &self.first
  }

  pub fn follow(&self) -> &FollowSets {
    &self.follow
  }

  pub fn predict(&self) -> &PredictSets {
    &self.predict
  }

  pub fn table(&self) -> &Table {
    &self.table
  }

  /// Whether every table cell holds a single production.
  pub fn is_ll1(&self) -> bool {
    self.table.conflicts() == 0
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::bnf;
  use crate::lexer::tokenize;
  use pretty_assertions::assert_eq;

  fn ambiguous() -> Grammar {
    bnf::parse(r#"
      S -> A | B
      A -> id + id
      B -> id * id
    "#).unwrap()
  }

  #[test]
  fn lenient_by_default() {
    let parser = Parser::new(ambiguous(), Config::default()).unwrap();

    assert!(!parser.is_ll1());
    assert_eq!(parser.table().conflicts(), 1);
    assert!(parser.parse(&tokenize("a + b").unwrap()).is_ok());
    assert!(parser.parse(&tokenize("a * b").unwrap()).is_err());
  }

  #[test]
  fn strict_rejects_conflicts() {
    let config = Config { conflicts: ConflictPolicy::Reject };

    assert_eq!(
      Parser::new(ambiguous(), config).unwrap_err(),
      GrammarError::NotLl1 { conflicts: 1 });
  }

  #[test]
  fn strict_accepts_ll1() {
    let grammar = bnf::parse("S -> id S | ε").unwrap();
    let config = Config { conflicts: ConflictPolicy::Reject };

    assert!(Parser::new(grammar, config).unwrap().is_ll1());
  }
}
