//! Recognizers for the lexical categories. Each one looks at `src[i..]` and
//! returns the exclusive end of the lexeme, or `None` without consuming
//! anything.

use super::token::OPERATORS;

fn is_ident_start(ch: char) -> bool {
  ch.is_ascii_alphabetic() || ch == '_'
}

fn is_ident_continue(ch: char) -> bool {
  ch.is_ascii_alphanumeric() || ch == '_'
}

/// Longest operator starting at `i`, with its category name.
pub fn operator(src: &[char], i: usize) -> Option<(usize, &'static str)> {
  OPERATORS.iter()
    .find(|(op, _)| {
      let len = op.chars().count();
      i + len <= src.len() && op.chars().eq(src[i..i + len].iter().copied())
    })
    .map(|&(op, name)| (i + op.chars().count(), name))
}

pub fn identifier(src: &[char], i: usize) -> Option<usize> {
  match src.get(i) {
    Some(&ch) if is_ident_start(ch) => {
      let len = src[i + 1..].iter()
        .take_while(|&&ch| is_ident_continue(ch))
        .count();
      Some(i + 1 + len)
    }
    _ => None,
  }
}

/// `[+-]?[0-9]+`; the sign belongs to the literal only when a digit follows.
pub fn integer(src: &[char], i: usize) -> Option<usize> {
  let mut j = i;
  if let Some('+') | Some('-') = src.get(j) {
    j += 1;
  }

  let digits = src.get(j..)?.iter()
    .take_while(|ch| ch.is_ascii_digit())
    .count();
  if digits == 0 {
    None
  } else {
    Some(j + digits)
  }
}

/// A `"` or `'` quoted literal closed on the same line. No escapes.
pub fn string(src: &[char], i: usize) -> Option<usize> {
  let quote = match src.get(i) {
    Some(&ch) if ch == '"' || ch == '\'' => ch,
    _ => return None,
  };

  for (j, &ch) in src.iter().enumerate().skip(i + 1) {
    if ch == quote {
      return Some(j + 1);
    }
    if ch == '\n' {
      return None;
    }
  }
  None
}
