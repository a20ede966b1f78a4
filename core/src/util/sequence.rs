//! Display adapter for sequences with configurable borders and separator.

use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::str::Chars;

/// Opening border, separator, and closing border of a rendered sequence. Defaults to `[`, `, `, and `]`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Delimiters<'a> {
  open: Cow<'a, str>,
  separator: Cow<'a, str>,
  close: Cow<'a, str>,
}
impl Default for Delimiters<'_> {
  #[inline]
  fn default() -> Self {
    Self::new(Self::DEFAULT_OPEN, Self::DEFAULT_SEPARATOR, Self::DEFAULT_CLOSE)
  }
}
impl<'a> Delimiters<'a> {
  pub const DEFAULT_OPEN: &'static str = "[";
  pub const DEFAULT_SEPARATOR: &'static str = ", ";
  pub const DEFAULT_CLOSE: &'static str = "]";

  #[inline]
  pub fn new(open: impl Into<Cow<'a, str>>, separator: impl Into<Cow<'a, str>>, close: impl Into<Cow<'a, str>>) -> Self {
    Self { open: open.into(), separator: separator.into(), close: close.into() }
  }

  #[inline]
  pub fn with_open(mut self, open: impl Into<Cow<'a, str>>) -> Self {
    self.open = open.into();
    self
  }
  #[inline]
  pub fn with_separator(mut self, separator: impl Into<Cow<'a, str>>) -> Self {
    self.separator = separator.into();
    self
  }
  #[inline]
  pub fn with_close(mut self, close: impl Into<Cow<'a, str>>) -> Self {
    self.close = close.into();
    self
  }

  #[inline]
  pub fn open(&self) -> &str { &self.open }
  #[inline]
  pub fn separator(&self) -> &str { &self.separator }
  #[inline]
  pub fn close(&self) -> &str { &self.close }

  /// Parses a compact delimiter spec.
  ///
  /// Each part is enclosed by its indicator character: `<open<` sets the opening border, `vseparatorv` the
  /// separator, and `>close>` the closing border. A backslash escapes the next character. Parsing stops at `|` or
  /// `}`; parts that are not mentioned keep their default. Element formatting is not part of the spec: precision and
  /// width given to the [`Sequence`] formatter are forwarded to every element instead.
  ///
  /// ```
  /// # use tagsum_core::util::sequence::{Delimiters, Sequence};
  /// let delimiters = Delimiters::parse(r"<\< <v \| v> \>>");
  /// assert_eq!(Sequence::new(&[1, 2, 3]).with_delimiters(delimiters).to_string(), "< 1 | 2 | 3 >");
  /// ```
  pub fn parse(spec: &str) -> Delimiters<'static> {
    let mut delimiters = Delimiters::default();
    let mut chars = spec.chars();
    while let Some(c) = chars.next() {
      match c {
        '|' | '}' => break,
        '<' => delimiters.open = Cow::Owned(read_part(&mut chars, c)),
        'v' => delimiters.separator = Cow::Owned(read_part(&mut chars, c)),
        '>' => delimiters.close = Cow::Owned(read_part(&mut chars, c)),
        _ => {}
      }
    }
    delimiters
  }
}

fn read_part(chars: &mut Chars, indicator: char) -> String {
  let mut part = String::new();
  let mut escaped = false;
  for c in chars.by_ref() {
    if escaped {
      part.push(c);
      escaped = false;
    } else if c == '\\' {
      escaped = true;
    } else if c == indicator {
      break;
    } else {
      part.push(c);
    }
  }
  part
}


/// Renders every item of `items` with its own [`Display`] implementation, joined by [`Delimiters`].
///
/// `items` is iterated once per formatting call, so it must be cheaply cloneable (a slice, a reference to a
/// collection, an iterator over borrowed items, ...).
#[derive(Clone, Debug)]
pub struct Sequence<'d, I> {
  items: I,
  delimiters: Delimiters<'d>,
}
impl<I> Sequence<'static, I> {
  #[inline]
  pub fn new(items: I) -> Self {
    Self { items, delimiters: Delimiters::default() }
  }
}
impl<'d, I> Sequence<'d, I> {
  #[inline]
  pub fn with_delimiters<'e>(self, delimiters: Delimiters<'e>) -> Sequence<'e, I> {
    Sequence { items: self.items, delimiters }
  }

  #[inline]
  pub fn delimiters(&self) -> &Delimiters<'d> { &self.delimiters }
}
impl<I> Display for Sequence<'_, I> where
  I: IntoIterator + Clone,
  I::Item: Display,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(&self.delimiters.open)?;
    for (i, item) in self.items.clone().into_iter().enumerate() {
      if i != 0 {
        f.write_str(&self.delimiters.separator)?;
      }
      match (f.width(), f.precision()) {
        (Some(width), Some(precision)) => write!(f, "{:width$.precision$}", item)?,
        (Some(width), None) => write!(f, "{:width$}", item)?,
        (None, Some(precision)) => write!(f, "{:.precision$}", item)?,
        (None, None) => write!(f, "{}", item)?,
      }
    }
    f.write_str(&self.delimiters.close)
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_delimiters() {
    assert_eq!(Sequence::new(&vec![1, 2, 3, 4, 5, 6]).to_string(), "[1, 2, 3, 4, 5, 6]");
    assert_eq!(Sequence::new(['a', 'b', 'c'].iter()).to_string(), "[a, b, c]");
  }

  #[test]
  fn empty_sequence() {
    let empty: [u8; 0] = [];
    assert_eq!(Sequence::new(&empty).to_string(), "[]");
  }

  #[test]
  fn parsed_delimiters() {
    let delimiters = Delimiters::parse(r"<\< <v \| v> \>>");
    assert_eq!(delimiters.open(), "< ");
    assert_eq!(delimiters.separator(), " | ");
    assert_eq!(delimiters.close(), " >");
    let arr = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    assert_eq!(Sequence::new(&arr).with_delimiters(delimiters).to_string(), "< 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 | 10 >");
  }

  #[test]
  fn precision_is_forwarded() {
    let delimiters = Delimiters::parse("<[\n\t<v\n\tv>\n]>|.6f");
    let rendered = format!("{:.6}", Sequence::new(&[1.0, 2.0, 3.0]).with_delimiters(delimiters));
    assert_eq!(rendered, "[\n\t1.000000\n\t2.000000\n\t3.000000\n]");
  }

  #[test]
  fn unmentioned_parts_keep_defaults() {
    let delimiters = Delimiters::parse("v; v");
    assert_eq!(delimiters, Delimiters::default().with_separator("; "));
  }

  #[test]
  fn builder_borrows() {
    let separator = String::from(" - ");
    let delimiters = Delimiters::new("(", separator.as_str(), ")");
    assert_eq!(Sequence::new(&["a", "b"]).with_delimiters(delimiters).to_string(), "(a - b)");
  }
}
