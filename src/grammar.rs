use indexmap::IndexSet;

/// Marks an empty production body in grammar text.
pub const EPSILON: &str = "ε";

/// Name of the end-of-input terminal.
pub const END_MARKER: &str = "$";

/// A context-free grammar with every name resolved to a [`Symbol`].
///
/// Built by [`crate::bnf::parse`] and never mutated afterwards. Ids are
/// dense indices: nonterminals in declaration order, terminals in order of
/// first appearance (after [`TermId::END`]), productions in declaration
/// order.
#[derive(Debug, Clone)]
pub struct Grammar {
  pub(crate) start: NontermId,
  pub(crate) terms: IndexSet<String>,
  pub(crate) nonterms: IndexSet<String>,
  /// nonterminal -> its productions, in declaration order
  pub(crate) rules: Vec<Vec<ProdId>>,
  pub(crate) prods: Vec<Production>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
  Term(TermId),
  Nonterm(NontermId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TermId(pub(crate) u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NontermId(pub(crate) u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProdId(pub(crate) u32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
  pub(crate) nonterm: NontermId,
  /// empty for an epsilon production
  pub(crate) symbols: Vec<Symbol>,
}

impl TermId {
  pub const END: TermId = TermId(0);

  pub fn index(self) -> usize {
    self.0 as usize
  }
}

impl NontermId {
  pub fn index(self) -> usize {
    self.0 as usize
  }
}

impl ProdId {
  pub fn index(self) -> usize {
    self.0 as usize
  }
}

impl Production {
  pub fn nonterm(&self) -> NontermId {
    self.nonterm
  }

  pub fn symbols(&self) -> &[Symbol] {
    &self.symbols
  }

  pub fn is_epsilon(&self) -> bool {
    self.symbols.is_empty()
  }
}

impl Grammar {
  pub fn start(&self) -> NontermId {
    self.start
  }

  /// Number of terminals, the end marker included.
  pub fn num_terms(&self) -> usize {
    self.terms.len()
  }

  pub fn num_nonterms(&self) -> usize {
    self.nonterms.len()
  }

  pub fn terms(&self) -> impl Iterator<Item = TermId> {
    (0..self.terms.len() as u32).map(TermId)
  }

  pub fn nonterms(&self) -> impl Iterator<Item = NontermId> {
    (0..self.nonterms.len() as u32).map(NontermId)
  }

  pub fn prods(&self) -> impl Iterator<Item = (ProdId, &Production)> {
    self.prods.iter()
      .enumerate()
      .map(|(i, prod)| (ProdId(i as u32), prod))
  }

  pub fn prod(&self, id: ProdId) -> &Production {
    &self.prods[id.index()]
  }

  /// Productions of `nonterm`, in declaration order.
  pub fn rule(&self, nonterm: NontermId) -> &[ProdId] {
    &self.rules[nonterm.index()]
  }

  pub fn term_name(&self, id: TermId) -> &str {
    &self.terms[id.index()]
  }

  pub fn nonterm_name(&self, id: NontermId) -> &str {
    &self.nonterms[id.index()]
  }

  pub fn symbol_name(&self, sym: Symbol) -> &str {
    match sym {
      Symbol::Term(id) => self.term_name(id),
      Symbol::Nonterm(id) => self.nonterm_name(id),
    }
  }

  pub fn term(&self, name: &str) -> Option<TermId> {
    self.terms.get_index_of(name).map(|i| TermId(i as u32))
  }

  pub fn nonterm(&self, name: &str) -> Option<NontermId> {
    self.nonterms.get_index_of(name).map(|i| NontermId(i as u32))
  }

  /// Resolves a name; left-hand sides win over terminals.
  pub fn symbol(&self, name: &str) -> Option<Symbol> {
    self.nonterm(name).map(Symbol::Nonterm)
      .or_else(|| self.term(name).map(Symbol::Term))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::bnf;
  use pretty_assertions::assert_eq;

  #[test]
  fn ids_follow_declaration_order() {
    let grammar = bnf::parse(r#"
      S -> A b | c
      A -> a | ε
    "#).unwrap();

    assert_eq!(grammar.start(), NontermId(0));
    assert_eq!(grammar.nonterm("A"), Some(NontermId(1)));
    assert_eq!(
      grammar.terms().map(|t| grammar.term_name(t)).collect::<Vec<_>>(),
      vec!["$", "b", "c", "a"]);
    assert_eq!(grammar.rule(NontermId(1)), &[ProdId(2), ProdId(3)]);
    assert!(grammar.prod(ProdId(3)).is_epsilon());
    assert_eq!(grammar.symbol("A"), Some(Symbol::Nonterm(NontermId(1))));
    assert_eq!(grammar.symbol("b"), Some(Symbol::Term(TermId(1))));
    assert_eq!(grammar.symbol("x"), None);
  }
}
