use indexmap::IndexMap;
use crate::grammar::*;
use super::sets::PredictSets;

/// LL(1) table. Cells keep every production registered for them, in
/// registration order; more than one is a conflict.
#[derive(Debug, Clone)]
pub struct Table {
  cells: IndexMap<(NontermId, TermId), Vec<ProdId>>,
}

impl Table {
  /// Registers productions in declaration order, so the first production of
  /// a conflicting cell is the one declared earliest.
  pub fn new(grammar: &Grammar, predict: &PredictSets) -> Self {
    let mut cells = IndexMap::<_, Vec<_>>::new();

    for (id, prod) in grammar.prods() {
      for term in predict.prod(id).iter() {
        cells.entry((prod.nonterm(), term)).or_default().push(id);
      }
    }

    Table {
      cells,
    }
  }

  pub fn get(&self, nonterm: NontermId, term: TermId) -> Option<&[ProdId]> {
    self.cells.get(&(nonterm, term)).map(|prods| &prods[..])
  }

  /// The production the parser applies for this cell.
  pub fn pick(&self, nonterm: NontermId, term: TermId) -> Option<ProdId> {
    self.get(nonterm, term).and_then(|prods| prods.first().copied())
  }

  /// Populated cells of `nonterm`, in registration order.
  pub fn row(&self, nonterm: NontermId) -> impl Iterator<Item = (TermId, &[ProdId])> {
    self.cells.iter()
      .filter(move |((nt, _), _)| *nt == nonterm)
      .map(|(&(_, term), prods)| (term, &prods[..]))
  }

  pub fn cells(&self) -> impl Iterator<Item = ((NontermId, TermId), &[ProdId])> {
    self.cells.iter().map(|(&key, prods)| (key, &prods[..]))
  }

  /// Number of cells holding more than one production.
  pub fn conflicts(&self) -> usize {
    self.cells.values().filter(|prods| prods.len() > 1).count()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::bnf;
  use crate::parser::sets::{FirstSets, FollowSets};
  use pretty_assertions::assert_eq;

  fn table(grammar: &Grammar) -> Table {
    let first = FirstSets::new(grammar);
    let follow = FollowSets::new(grammar, &first);
    Table::new(grammar, &PredictSets::new(grammar, &first, &follow))
  }

  #[test]
  fn ll1_grammar_has_single_entries() {
    let grammar = bnf::parse(r#"
      E  -> T E'
      E' -> + T E' | ε
      T  -> id
    "#).unwrap();
    let table = table(&grammar);
    let e1 = grammar.nonterm("E'").unwrap();

    assert_eq!(table.conflicts(), 0);
    assert_eq!(table.pick(e1, grammar.term("+").unwrap()), Some(ProdId(1)));
    assert_eq!(table.pick(e1, TermId::END), Some(ProdId(2)));
    assert_eq!(table.pick(e1, grammar.term("id").unwrap()), None);
    assert_eq!(
      table.row(e1).map(|(t, _)| grammar.term_name(t)).collect::<Vec<_>>(),
      vec!["+", "$"]);
  }

  #[test]
  fn conflicts_keep_declaration_order() {
    let grammar = bnf::parse(r#"
      S -> A | B
      A -> x y
      B -> x z
    "#).unwrap();
    let table = table(&grammar);
    let s = grammar.nonterm("S").unwrap();
    let x = grammar.term("x").unwrap();

    assert_eq!(table.conflicts(), 1);
    assert_eq!(table.get(s, x), Some(&[ProdId(0), ProdId(1)][..]));
    assert_eq!(table.pick(s, x), Some(ProdId(0)));
  }

  #[test]
  fn nullable_alternatives_conflict_on_follow() {
    let grammar = bnf::parse(r#"
      S -> A a
      A -> a | ε
    "#).unwrap();
    let table = table(&grammar);

    assert_eq!(table.conflicts(), 1);
    assert_eq!(
      table.get(grammar.nonterm("A").unwrap(), grammar.term("a").unwrap()),
      Some(&[ProdId(1), ProdId(2)][..]));
  }
}
