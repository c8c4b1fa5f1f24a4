use yuce::grammar::{Grammar, ProdId, EPSILON};
use yuce::parser::TokenSet;
use yuce::{Derivation, Parser, Token};

pub fn tokens(tokens: &[Token]) -> String {
  tokens.iter()
    .map(|token| format!("{}\n", token))
    .collect()
}

pub fn sets(parser: &Parser) -> String {
  let grammar = parser.grammar();
  let mut out = String::new();

  out.push_str("== FIRST ==\n");
  for nt in grammar.nonterms() {
    let first = parser.first().nonterm(nt);
    out.push_str(&format!("{} : {}\n",
      grammar.nonterm_name(nt), set(grammar, first.terms(), first.is_nullable())));
  }

  out.push_str("\n== FOLLOW ==\n");
  for nt in grammar.nonterms() {
    out.push_str(&format!("{} : {}\n",
      grammar.nonterm_name(nt), set(grammar, parser.follow().nonterm(nt), false)));
  }

  out.push_str("\n== PREDICT ==\n");
  for (id, _) in grammar.prods() {
    out.push_str(&format!("{} : {}\n",
      production(grammar, id), set(grammar, parser.predict().prod(id), false)));
  }

  out
}

pub fn table(parser: &Parser) -> String {
  let grammar = parser.grammar();
  let mut cells = parser.table().cells()
    .map(|((nt, term), prods)| (nt, grammar.term_name(term), prods))
    .collect::<Vec<_>>();
  cells.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

  let mut out = String::from("== LL(1) table ==\n");
  for (nt, term, prods) in cells {
    let bodies = prods.iter()
      .map(|&p| body(grammar, p))
      .collect::<Vec<_>>();
    out.push_str(&format!("[{}, {}] -> {}\n",
      grammar.nonterm_name(nt), term, bodies.join(" / ")));
  }

  match parser.table().conflicts() {
    0 => out.push_str("no LL(1) conflicts\n"),
    n => out.push_str(&format!("LL(1) conflicts: {}\n", n)),
  }
  out
}

pub fn derivation(grammar: &Grammar, derivation: &Derivation) -> String {
  let mut out = String::from("== derivation ==\n");
  for &step in &derivation.steps {
    out.push_str(&production(grammar, step));
    out.push('\n');
  }
  out
}

fn production(grammar: &Grammar, id: ProdId) -> String {
  let nonterm = grammar.prod(id).nonterm();
  format!("{} -> {}", grammar.nonterm_name(nonterm), body(grammar, id))
}

fn body(grammar: &Grammar, id: ProdId) -> String {
  let prod = grammar.prod(id);
  if prod.is_epsilon() {
    return EPSILON.to_owned();
  }
  prod.symbols().iter()
    .map(|&sym| grammar.symbol_name(sym))
    .collect::<Vec<_>>()
    .join(" ")
}

fn set(grammar: &Grammar, terms: &TokenSet, nullable: bool) -> String {
  let mut names = terms.iter()
    .map(|t| grammar.term_name(t))
    .collect::<Vec<_>>();
  names.sort();
  if nullable {
    names.push(EPSILON);
  }
  format!("{{{}}}", names.join(", "))
}
