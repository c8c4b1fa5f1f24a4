use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
  Identifier,
  Integer,
  String,
  /// A reserved word; its category is the word itself.
  Keyword,
  /// An operator or punctuation mark, carrying its category name.
  Operator(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub kind: TokenKind,
  pub text: String,
  pub line: usize,
  pub column: usize,
}

impl Token {
  pub fn category(&self) -> &str {
    match self.kind {
      TokenKind::Identifier => "identifier",
      TokenKind::Integer => "integer",
      TokenKind::String => "string",
      TokenKind::Keyword => &self.text,
      TokenKind::Operator(name) => name,
    }
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self.kind {
      TokenKind::Identifier | TokenKind::Integer | TokenKind::String => {
        write!(f, "<{}, {}, {}, {}>",
          self.category(), self.text, self.line, self.column)
      }
      TokenKind::Keyword | TokenKind::Operator(_) => {
        write!(f, "<{}, {}, {}>", self.category(), self.line, self.column)
      }
    }
  }
}

pub const KEYWORDS: &[&str] = &[
  "if", "else", "while", "for", "def", "return", "print",
  "and", "or", "not", "True", "False", "None",
];

/// Lexeme and category name, two-character operators first.
pub const OPERATORS: &[(&str, &str)] = &[
  ("==", "equal"),
  ("!=", "not_equal"),
  ("<=", "less_equal"),
  (">=", "greater_equal"),

  ("+", "plus"),
  ("-", "minus"),
  ("*", "star"),
  ("/", "slash"),
  ("%", "percent"),
  ("<", "less"),
  (">", "greater"),
  ("=", "assignment"),

  ("(", "lparen"),
  (")", "rparen"),
  ("[", "lbracket"),
  ("]", "rbracket"),
  ("{", "lbrace"),
  ("}", "rbrace"),
  (",", "comma"),
  (".", "dot"),
  (":", "colon"),
  (";", "semicolon"),
];

pub fn is_keyword(word: &str) -> bool {
  KEYWORDS.contains(&word)
}

pub fn is_operator(lexeme: &str) -> bool {
  OPERATORS.iter().any(|&(op, _)| op == lexeme)
}
