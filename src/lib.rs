pub mod bnf;
pub mod error;
pub mod grammar;
pub mod lexer;
pub mod parser;

pub use error::{Error, GrammarError, LexError, SyntaxError};
pub use grammar::Grammar;
pub use lexer::{tokenize, Token};
pub use parser::{Config, ConflictPolicy, Derivation, Parser};

pub fn build(grammar: Grammar) -> Result<Parser, GrammarError> {
  Parser::new(grammar, Config::default())
}

/// Loads `grammar`, tokenizes `source` and parses it.
pub fn check(grammar: &str, source: &str) -> Result<Derivation, Error> {
  let parser = build(bnf::parse(grammar)?)?;
  let tokens = tokenize(source)?;
  Ok(parser.parse(&tokens)?)
}
