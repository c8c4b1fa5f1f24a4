//! Command-line driver: reads files, runs the pipeline and prints reports.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser as _;
use thiserror::Error;
use yuce::{bnf, Config, ConflictPolicy, Parser};

use crate::cli::{Cli, Command};

mod cli;
mod report;

#[derive(Debug, Error)]
enum Failure {
  #[error("{}: {source}", .path.display())]
  Io {
    path: PathBuf,
    source: io::Error,
  },

  #[error(transparent)]
  Check(#[from] yuce::Error),
}

impl Failure {
  /// 2 for a rejected input, 1 for anything that stops the run earlier.
  fn code(&self) -> u8 {
    match self {
      Failure::Check(yuce::Error::Syntax(_)) => 2,
      _ => 1,
    }
  }

  fn io(path: &Path, source: io::Error) -> Self {
    Failure::Io {
      path: path.to_owned(),
      source,
    }
  }
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let result = match cli.command {
    Command::Lex { input, out } => lex(&input, out.as_deref()),
    Command::Parse { grammar, input, sets, table, trace, strict } => {
      parse(&grammar, &input, sets, table, trace, strict)
    }
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("{}", err);
      ExitCode::from(err.code())
    }
  }
}

fn read(path: &Path) -> Result<String, Failure> {
  fs::read_to_string(path).map_err(|source| Failure::io(path, source))
}

fn write(path: &Path, contents: &str) -> Result<(), Failure> {
  if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
    fs::create_dir_all(dir).map_err(|source| Failure::io(dir, source))?;
  }
  fs::write(path, contents).map_err(|source| Failure::io(path, source))
}

fn lex(input: &Path, out: Option<&Path>) -> Result<(), Failure> {
  let tokens = yuce::tokenize(&read(input)?).map_err(yuce::Error::from)?;
  let listing = report::tokens(&tokens);
  if let Some(out) = out {
    write(out, &listing)?;
  }
  print!("{}", listing);
  Ok(())
}

fn parse(
  grammar: &Path,
  input: &Path,
  sets: bool,
  table: bool,
  trace: bool,
  strict: bool,
) -> Result<(), Failure> {
  let grammar = bnf::parse(&read(grammar)?).map_err(yuce::Error::from)?;
  let source = read(input)?;
  let tokens = yuce::tokenize(&source).map_err(yuce::Error::from)?;

  let config = Config {
    conflicts: if strict {
      ConflictPolicy::Reject
    } else {
      ConflictPolicy::FirstWins
    },
  };
  let parser = Parser::new(grammar, config).map_err(yuce::Error::from)?;

  if sets {
    println!("{}", report::sets(&parser));
  }
  if table {
    println!("{}", report::table(&parser));
  }

  let derivation = parser.parse(&tokens).map_err(yuce::Error::from)?;
  if trace {
    println!("{}", report::derivation(parser.grammar(), &derivation));
  }
  println!("input accepted");
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use yuce::{GrammarError, LexError, SyntaxError};

  fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("yuce-{}-{}", name, std::process::id()))
  }

  #[test]
  fn exit_codes() {
    let syntax = SyntaxError::Mismatch {
      found: "]".to_owned(),
      expected: ")".to_owned(),
      line: 1,
      column: 4,
    };
    let lex = LexError::UnexpectedChar { ch: '@', line: 1, column: 1 };
    let missing = Failure::io(Path::new("missing.txt"), io::ErrorKind::NotFound.into());

    assert_eq!(Failure::from(yuce::Error::from(syntax)).code(), 2);
    assert_eq!(Failure::from(yuce::Error::from(lex)).code(), 1);
    assert_eq!(Failure::from(yuce::Error::from(GrammarError::Empty)).code(), 1);
    assert_eq!(Failure::from(yuce::Error::from(GrammarError::NotLl1 { conflicts: 2 })).code(), 1);
    assert_eq!(missing.code(), 1);
  }

  #[test]
  fn io_failure_names_the_path() {
    let err = read(Path::new("no/such/input.txt")).unwrap_err();

    assert!(matches!(err, Failure::Io { .. }));
    assert!(err.to_string().starts_with("no/such/input.txt: "));
  }

  #[test]
  fn lex_writes_listing_under_new_directories() {
    let dir = scratch("lex");
    let input = dir.join("input.txt");
    let out = dir.join("nested").join("tokens.txt");
    write(&input, "x = 5 + 3\n").unwrap();

    lex(&input, Some(&out)).unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), concat!(
      "<identifier, x, 1, 1>\n",
      "<assignment, 1, 3>\n",
      "<integer, 5, 1, 5>\n",
      "<plus, 1, 7>\n",
      "<integer, 3, 1, 9>\n",
    ));
    fs::remove_dir_all(&dir).unwrap();
  }

  #[test]
  fn lex_error_skips_the_listing() {
    let dir = scratch("lex-error");
    let input = dir.join("input.txt");
    let out = dir.join("tokens.txt");
    write(&input, "x = 'abc\n").unwrap();

    let err = lex(&input, Some(&out)).unwrap_err();

    assert_eq!(err.code(), 1);
    assert!(!out.exists());
    fs::remove_dir_all(&dir).unwrap();
  }
}
