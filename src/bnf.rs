//! Textual grammar format:
//!
//! ```text
//! # comment
//! E  -> T E'
//! E' -> + T E' | ε
//! T  ::= id
//! ```
//!
//! The arrow may also be written `→`. The first left-hand side is the start
//! symbol, and repeated left-hand sides add productions. Names that never
//! appear on a left-hand side are terminals.

use std::str::FromStr;
use indexmap::IndexSet;
use crate::error::GrammarError;
use crate::grammar::*;

const ARROWS: [&str; 3] = ["->", "→", "::="];

struct Line<'a> {
  nonterm: NontermId,
  alts: Vec<Vec<&'a str>>,
}

pub fn parse(text: &str) -> Result<Grammar, GrammarError> {
  let mut nonterms = IndexSet::new();
  let mut lines = vec![];

  for (i, raw) in text.lines().enumerate() {
    let number = i + 1;
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
      continue;
    }

    let (lhs, rhs) = split_arrow(line)
      .ok_or_else(|| GrammarError::MissingArrow {
        line: number,
        text: line.to_owned(),
      })?;

    let lhs = lhs.trim();
    if lhs == END_MARKER {
      return Err(GrammarError::ReservedSymbol {
        line: number,
        symbol: lhs.to_owned(),
      });
    }
    if lhs.is_empty() || lhs == EPSILON || lhs.split_whitespace().count() != 1 {
      return Err(GrammarError::InvalidLhs {
        line: number,
        lhs: lhs.to_owned(),
      });
    }

    let alts = rhs.split('|')
      .map(|alt| alt.split_whitespace().collect::<Vec<_>>())
      .collect::<Vec<_>>();
    for alt in &alts {
      if alt.len() > 1 && alt.contains(&EPSILON) {
        return Err(GrammarError::MisplacedEpsilon { line: number });
      }
      if alt.contains(&END_MARKER) {
        return Err(GrammarError::ReservedSymbol {
          line: number,
          symbol: END_MARKER.to_owned(),
        });
      }
    }

    let (index, _) = nonterms.insert_full(lhs.to_owned());
    lines.push(Line {
      nonterm: NontermId(index as u32),
      alts,
    });
  }

  if lines.is_empty() {
    return Err(GrammarError::Empty);
  }

  let mut terms = IndexSet::new();
  terms.insert(END_MARKER.to_owned());
  let mut rules = vec![vec![]; nonterms.len()];
  let mut prods = vec![];

  for line in lines {
    for alt in line.alts {
      let symbols = if alt == [EPSILON] {
        vec![]
      } else {
        alt.into_iter()
          .map(|name| match nonterms.get_index_of(name) {
            Some(i) => Symbol::Nonterm(NontermId(i as u32)),
            None => {
              let (i, _) = terms.insert_full(name.to_owned());
              Symbol::Term(TermId(i as u32))
            }
          })
          .collect()
      };

      rules[line.nonterm.index()].push(ProdId(prods.len() as u32));
      prods.push(Production {
        nonterm: line.nonterm,
        symbols,
      });
    }
  }

  Ok(Grammar {
    start: NontermId(0),
    terms,
    nonterms,
    rules,
    prods,
  })
}

/// Splits at the first arrow, trying `->` before the other spellings.
fn split_arrow(line: &str) -> Option<(&str, &str)> {
  ARROWS.iter().find_map(|arrow| line.split_once(arrow))
}

impl FromStr for Grammar {
  type Err = GrammarError;

  fn from_str(s: &str) -> Result<Grammar, GrammarError> {
    parse(s)
  }
}
