use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "yuce")]
#[command(about = "LL(1) grammar analysis and predictive parsing")]
#[command(version)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
  /// Tokenize a source file and print its tokens
  Lex {
    input: PathBuf,

    /// Also write the token listing to this file
    #[arg(short, long)]
    out: Option<PathBuf>,
  },

  /// Parse a source file with an LL(1) grammar
  Parse {
    /// Grammar file, one `LHS -> ALT | ALT` rule per line
    #[arg(short, long)]
    grammar: PathBuf,

    input: PathBuf,

    /// Print FIRST, FOLLOW and PREDICT sets
    #[arg(long)]
    sets: bool,

    /// Print the LL(1) table
    #[arg(long)]
    table: bool,

    /// Print the productions applied during the parse
    #[arg(long)]
    trace: bool,

    /// Refuse grammars with LL(1) conflicts
    #[arg(long)]
    strict: bool,
  },
}
