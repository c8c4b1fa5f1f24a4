use crate::error::LexError;

pub mod rules;
mod token;

pub use token::{is_keyword, is_operator, Token, TokenKind, KEYWORDS, OPERATORS};

/// 1-indexed source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pos {
  pub line: usize,
  pub column: usize,
}

impl Pos {
  pub const START: Pos = Pos { line: 1, column: 1 };

  /// Position after consuming `ch`.
  pub fn step(self, ch: char) -> Pos {
    if ch == '\n' {
      Pos { line: self.line + 1, column: 1 }
    } else {
      Pos { line: self.line, column: self.column + 1 }
    }
  }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
  let chars = source.chars().collect::<Vec<_>>();
  let mut tokens = vec![];
  let mut i = 0;
  let mut pos = Pos::START;

  while i < chars.len() {
    match chars[i] {
      ' ' | '\t' | '\r' | '\n' => {
        pos = pos.step(chars[i]);
        i += 1;
      }
      '#' => {
        while i < chars.len() && chars[i] != '\n' {
          pos = pos.step(chars[i]);
          i += 1;
        }
      }
      _ => {
        let (end, kind) = scan(&chars, i, pos)?;
        let text = chars[i..end].iter().collect::<String>();
        tokens.push(Token {
          kind,
          text,
          line: pos.line,
          column: pos.column,
        });
        pos = chars[i..end].iter().fold(pos, |pos, &ch| pos.step(ch));
        i = end;
      }
    }
  }

  Ok(tokens)
}

/// Recognizes one lexeme at `i`, in fixed precedence order.
fn scan(chars: &[char], i: usize, pos: Pos) -> Result<(usize, TokenKind), LexError> {
  if let Some((end, name)) = rules::operator(chars, i) {
    return Ok((end, TokenKind::Operator(name)));
  }

  if let Some(end) = rules::identifier(chars, i) {
    let word = chars[i..end].iter().collect::<String>();
    let kind = if is_keyword(&word) {
      TokenKind::Keyword
    } else {
      TokenKind::Identifier
    };
    return Ok((end, kind));
  }

  if let Some(end) = rules::integer(chars, i) {
    return Ok((end, TokenKind::Integer));
  }

  if let Some(end) = rules::string(chars, i) {
    return Ok((end, TokenKind::String));
  }

  let ch = chars[i];
  if ch == '"' || ch == '\'' {
    Err(LexError::UnterminatedString {
      line: pos.line,
      column: pos.column,
    })
  } else {
    Err(LexError::UnexpectedChar {
      ch,
      line: pos.line,
      column: pos.column,
    })
  }
}
