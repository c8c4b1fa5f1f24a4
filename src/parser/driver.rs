use crate::error::SyntaxError;
use crate::grammar::*;
use crate::lexer::{is_operator, Token, TokenKind};
use super::Parser;

/// Productions applied by a successful parse, in order. This is the leftmost
/// derivation of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
  pub steps: Vec<ProdId>,
}

/// Current input token; the token stream is followed by one `End`.
#[derive(Debug, Clone, Copy)]
enum Lookahead<'a> {
  Token(&'a Token),
  End {
    line: usize,
    column: usize,
  },
}

impl<'a> Lookahead<'a> {
  fn text(&self) -> &'a str {
    match *self {
      Lookahead::Token(token) => &token.text,
      Lookahead::End { .. } => END_MARKER,
    }
  }

  fn position(&self) -> (usize, usize) {
    match *self {
      Lookahead::Token(token) => (token.line, token.column),
      Lookahead::End { line, column } => (line, column),
    }
  }
}

/// Whether a grammar terminal accepts a lexer token.
pub fn terminal_matches(term: &str, token: &Token) -> bool {
  if term == "id" && token.kind == TokenKind::Identifier {
    return true;
  }
  if term == "NUM" && token.kind == TokenKind::Integer {
    return true;
  }
  if is_operator(term) {
    return token.text == term;
  }
  term == token.category() || term == token.text
}

impl Parser {
  /// Runs the predictive parser over `tokens`, stopping at the first error.
  pub fn parse(&self, tokens: &[Token]) -> Result<Derivation, SyntaxError> {
    let end = match tokens.last() {
      Some(last) => Lookahead::End { line: last.line, column: last.column },
      None => Lookahead::End { line: 1, column: 1 },
    };
    let lookahead = |i: usize| tokens.get(i).map_or(end, Lookahead::Token);

    let grammar = &self.grammar;
    let mut stack = vec![Symbol::Term(TermId::END), Symbol::Nonterm(grammar.start())];
    let mut cursor = 0;
    let mut steps = vec![];
    // (nonterminal, stack depth) expanded since the last consumed token
    let mut pending = Vec::<(NontermId, usize)>::new();

    loop {
      let current = lookahead(cursor);
      let (line, column) = current.position();

      let top = match stack.pop() {
        Some(Symbol::Term(TermId::END)) | None => {
          return match current {
            Lookahead::End { .. } => Ok(Derivation { steps }),
            Lookahead::Token(token) => Err(SyntaxError::TrailingInput {
              found: token.text.clone(),
              line,
              column,
            }),
          };
        }
        Some(top) => top,
      };
      let depth = stack.len();
      pending.retain(|&(_, d)| d <= depth);

      match top {
        Symbol::Term(term) => {
          if !self.matches(term, current) {
            return Err(SyntaxError::Mismatch {
              found: current.text().to_owned(),
              expected: grammar.term_name(term).to_owned(),
              line,
              column,
            });
          }
          cursor += 1;
          pending.clear();
        }
        Symbol::Nonterm(nonterm) => {
          let prod = match self.choose(nonterm, current) {
            Some(prod) => prod,
            None => {
              let mut expected = self.table.row(nonterm)
                .map(|(term, _)| grammar.term_name(term).to_owned())
                .collect::<Vec<_>>();
              expected.sort();
              expected.dedup();
              return Err(SyntaxError::NoProduction {
                nonterm: grammar.nonterm_name(nonterm).to_owned(),
                found: current.text().to_owned(),
                expected,
                line,
                column,
              });
            }
          };

          // Same nonterminal on top of an untouched stack prefix at the same
          // input position: the expansion would repeat forever.
          if pending.iter().any(|&(nt, _)| nt == nonterm) {
            return Err(SyntaxError::LeftRecursion {
              nonterm: grammar.nonterm_name(nonterm).to_owned(),
              line,
              column,
            });
          }
          pending.push((nonterm, depth));

          steps.push(prod);
          stack.extend(grammar.prod(prod).symbols().iter().rev());
        }
      }
    }
  }

  fn matches(&self, term: TermId, lookahead: Lookahead) -> bool {
    match lookahead {
      Lookahead::End { .. } => term == TermId::END,
      Lookahead::Token(token) => {
        term != TermId::END && terminal_matches(self.grammar.term_name(term), token)
      }
    }
  }

  /// Prefers the cell whose terminal is spelled like the token, then the
  /// first cell of the row that accepts it.
  fn choose(&self, nonterm: NontermId, lookahead: Lookahead) -> Option<ProdId> {
    let exact = match lookahead {
      Lookahead::End { .. } => Some(TermId::END),
      Lookahead::Token(token) => self.grammar.term(&token.text),
    };
    if let Some(prod) = exact.and_then(|term| self.table.pick(nonterm, term)) {
      return Some(prod);
    }

    self.table.row(nonterm)
      .find(|&(term, _)| self.matches(term, lookahead))
      .and_then(|(_, prods)| prods.first().copied())
  }
}
