use std::collections::VecDeque;
use crate::grammar::*;
use super::token_set::TokenSet;

/// FIRST set of a symbol or symbol sequence. Epsilon is tracked by the
/// `nullable` flag, never as a terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct First {
  pub(crate) terms: TokenSet,
  pub(crate) nullable: bool,
}

impl First {
  fn new(num_terms: usize) -> Self {
    First {
      terms: TokenSet::new(num_terms),
      nullable: false,
    }
  }

  pub fn terms(&self) -> &TokenSet {
    &self.terms
  }

  /// Whether epsilon is in the set.
  pub fn is_nullable(&self) -> bool {
    self.nullable
  }

  /// Returns whether the set has changed.
  fn union_with(&mut self, other: &First) -> bool {
    let changed = self.terms.union_with(&other.terms);
    let nullable = other.nullable && !self.nullable;
    self.nullable |= other.nullable;
    changed || nullable
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstSets {
  num_terms: usize,
  nonterms: Vec<First>,
}

impl FirstSets {
  pub fn new(grammar: &Grammar) -> Self {
    let num_terms = grammar.num_terms();
    let mut nonterms = vec![First::new(num_terms); grammar.num_nonterms()];

    // nonterminal -> productions whose body mentions it
    let mut users = vec![vec![]; grammar.num_nonterms()];
    for (id, prod) in grammar.prods() {
      for sym in prod.symbols() {
        if let Symbol::Nonterm(nt) = *sym {
          users[nt.index()].push(id);
        }
      }
    }

    let mut queue = grammar.prods().map(|(id, _)| id).collect::<VecDeque<_>>();
    let mut queued = vec![true; queue.len()];

    while let Some(id) = queue.pop_front() {
      queued[id.index()] = false;
      let prod = grammar.prod(id);
      let first = first_of_symbols(num_terms, &nonterms, prod.symbols());

      if nonterms[prod.nonterm().index()].union_with(&first) {
        for &user in &users[prod.nonterm().index()] {
          if !queued[user.index()] {
            queued[user.index()] = true;
            queue.push_back(user);
          }
        }
      }
    }

    FirstSets {
      num_terms,
      nonterms,
    }
  }

  pub fn nonterm(&self, id: NontermId) -> &First {
    &self.nonterms[id.index()]
  }

  pub fn symbol(&self, sym: Symbol) -> First {
    match sym {
      Symbol::Term(id) => First {
        terms: TokenSet::from_token(self.num_terms, id),
        nullable: false,
      },
      Symbol::Nonterm(id) => self.nonterm(id).clone(),
    }
  }

  /// FIRST of a symbol sequence; nullable only if every symbol is.
  pub fn sequence(&self, symbols: &[Symbol]) -> First {
    first_of_symbols(self.num_terms, &self.nonterms, symbols)
  }
}

fn first_of_symbols(
  num_terms: usize,
  nonterms: &[First],
  symbols: &[Symbol],
) -> First {
  let mut result = First::new(num_terms);

  for sym in symbols {
    match *sym {
      Symbol::Term(id) => {
        result.terms.insert(id);
        return result;
      }
      Symbol::Nonterm(id) => {
        let first = &nonterms[id.index()];
        result.terms.union_with(&first.terms);
        if !first.nullable {
          return result;
        }
      }
    }
  }

  result.nullable = true;
  result
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowSets {
  nonterms: Vec<TokenSet>,
}

impl FollowSets {
  pub fn new(grammar: &Grammar, first: &FirstSets) -> Self {
    let num_terms = grammar.num_terms();
    let mut follow = vec![TokenSet::new(num_terms); grammar.num_nonterms()];
    follow[grammar.start().index()].insert(TermId::END);

    // A -> FOLLOW(A) must flow into these nonterminals
    let mut edges = vec![vec![]; grammar.num_nonterms()];
    for (_, prod) in grammar.prods() {
      let symbols = prod.symbols();
      for (i, sym) in symbols.iter().enumerate() {
        if let Symbol::Nonterm(b) = *sym {
          let rest = first.sequence(&symbols[i + 1..]);
          follow[b.index()].union_with(&rest.terms);
          if rest.nullable && b != prod.nonterm() {
            edges[prod.nonterm().index()].push(b);
          }
        }
      }
    }

    let mut queue = grammar.nonterms().collect::<VecDeque<_>>();
    let mut queued = vec![true; queue.len()];

    while let Some(a) = queue.pop_front() {
      queued[a.index()] = false;
      let from = follow[a.index()].clone();
      for &b in &edges[a.index()] {
        if follow[b.index()].union_with(&from) && !queued[b.index()] {
          queued[b.index()] = true;
          queue.push_back(b);
        }
      }
    }

    FollowSets {
      nonterms: follow,
    }
  }

  pub fn nonterm(&self, id: NontermId) -> &TokenSet {
    &self.nonterms[id.index()]
  }
}

/// PREDICT set of every production, indexed by `ProdId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictSets {
  prods: Vec<TokenSet>,
}

impl PredictSets {
  pub fn new(grammar: &Grammar, first: &FirstSets, follow: &FollowSets) -> Self {
    let prods = grammar.prods()
      .map(|(_, prod)| {
        let First { mut terms, nullable } = first.sequence(prod.symbols());
        if nullable {
          terms.union_with(follow.nonterm(prod.nonterm()));
        }
        terms
      })
      .collect();

    PredictSets {
      prods,
    }
  }

  pub fn prod(&self, id: ProdId) -> &TokenSet {
    &self.prods[id.index()]
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::bnf;
  use pretty_assertions::assert_eq;

  fn names<'g>(grammar: &'g Grammar, set: &TokenSet) -> Vec<&'g str> {
    let mut names = set.iter().map(|t| grammar.term_name(t)).collect::<Vec<_>>();
    names.sort();
    names
  }

  fn first_of<'g>(grammar: &'g Grammar, first: &FirstSets, nt: &str) -> (Vec<&'g str>, bool) {
    let f = first.nonterm(grammar.nonterm(nt).unwrap());
    (names(grammar, f.terms()), f.is_nullable())
  }

  fn simple() -> Grammar {
    bnf::parse(r#"
      Z -> d
      Z -> X Y Z
      Y ->
      Y -> c
      X -> Y
      X -> a
    "#).unwrap()
  }

  fn expr() -> Grammar {
    bnf::parse(r#"
      E  -> T E'
      E' -> + T E' | ε
      T  -> F T'
      T' -> * F T' | ε
      F  -> ( E ) | id
    "#).unwrap()
  }

  #[test]
  fn simple_first() {
    let grammar = simple();
    let first = FirstSets::new(&grammar);

    assert_eq!(first_of(&grammar, &first, "Z"), (vec!["a", "c", "d"], false));
    assert_eq!(first_of(&grammar, &first, "Y"), (vec!["c"], true));
    assert_eq!(first_of(&grammar, &first, "X"), (vec!["a", "c"], true));
  }

  #[test]
  fn simple_follow() {
    let grammar = simple();
    let first = FirstSets::new(&grammar);
    let follow = FollowSets::new(&grammar, &first);
    let follow_of = |nt| names(&grammar, follow.nonterm(grammar.nonterm(nt).unwrap()));

    assert_eq!(follow_of("Z"), vec!["$"]);
    assert_eq!(follow_of("Y"), vec!["a", "c", "d"]);
    assert_eq!(follow_of("X"), vec!["a", "c", "d"]);
  }

  #[test]
  fn expr_sets() {
    let grammar = expr();
    let first = FirstSets::new(&grammar);
    let follow = FollowSets::new(&grammar, &first);
    let follow_of = |nt| names(&grammar, follow.nonterm(grammar.nonterm(nt).unwrap()));

    assert_eq!(first_of(&grammar, &first, "E"), (vec!["(", "id"], false));
    assert_eq!(first_of(&grammar, &first, "E'"), (vec!["+"], true));
    assert_eq!(first_of(&grammar, &first, "T'"), (vec!["*"], true));

    assert_eq!(follow_of("E"), vec!["$", ")"]);
    assert_eq!(follow_of("E'"), vec!["$", ")"]);
    assert_eq!(follow_of("T"), vec!["$", ")", "+"]);
    assert_eq!(follow_of("T'"), vec!["$", ")", "+"]);
    assert_eq!(follow_of("F"), vec!["$", ")", "*", "+"]);
  }

  #[test]
  fn expr_predict() {
    let grammar = expr();
    let first = FirstSets::new(&grammar);
    let follow = FollowSets::new(&grammar, &first);
    let predict = PredictSets::new(&grammar, &first, &follow);

    let sets = grammar.prods()
      .map(|(id, _)| names(&grammar, predict.prod(id)))
      .collect::<Vec<_>>();

    assert_eq!(sets, vec![
      vec!["(", "id"],
      vec!["+"],
      vec!["$", ")"],
      vec!["(", "id"],
      vec!["*"],
      vec!["$", ")", "+"],
      vec!["("],
      vec!["id"],
    ]);
  }

  #[test]
  fn sequence_first() {
    let grammar = expr();
    let first = FirstSets::new(&grammar);
    let sym = |name| grammar.symbol(name).unwrap();

    let seq = first.sequence(&[sym("E'"), sym("T'")]);
    assert_eq!(names(&grammar, seq.terms()), vec!["*", "+"]);
    assert!(seq.is_nullable());

    let seq = first.sequence(&[sym("E'"), sym(")"), sym("T'")]);
    assert_eq!(names(&grammar, seq.terms()), vec![")", "+"]);
    assert!(!seq.is_nullable());

    assert!(first.sequence(&[]).is_nullable());
    assert_eq!(first.symbol(sym("id")).terms().len(), 1);
  }

  #[test]
  fn left_recursion_terminates() {
    let grammar = bnf::parse(r#"
      S -> S a | S | b | ε
    "#).unwrap();
    let first = FirstSets::new(&grammar);
    let follow = FollowSets::new(&grammar, &first);

    assert_eq!(first_of(&grammar, &first, "S"), (vec!["a", "b"], true));
    assert_eq!(names(&grammar, follow.nonterm(grammar.start())), vec!["$", "a"]);
  }

  #[test]
  fn recomputation_is_idempotent() {
    let grammar = expr();

    assert_eq!(FirstSets::new(&grammar), FirstSets::new(&grammar));
  }
}
