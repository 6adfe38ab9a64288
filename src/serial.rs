use std::{
    borrow::Cow,
    fmt::{self, Display, Write},
    iter::{Enumerate, Peekable},
    str::{FromStr, SplitWhitespace},
};

use crate::{
    compare::Comparator,
    iter::Traversal,
    node::{Link, Node},
    ParseError,
};

/// The token written in place of an absent child.
pub const SENTINEL: &str = "#";

type Tokens<'a> = Peekable<Enumerate<SplitWhitespace<'a>>>;

pub(crate) fn serialize<T>(root: Option<&Node<T>>, order: Traversal) -> String
where
    T: Display,
{
    let mut buf = String::new();
    write_tokens(&mut buf, root, order).expect("writing to a String cannot fail");
    buf
}

/// Write the space separated tokens of the subtree at `root` to `w`.
///
/// Each value is written as a single token, escaped with [`write_escaped()`].
pub(crate) fn write_tokens<T, W>(w: &mut W, root: Option<&Node<T>>, order: Traversal) -> fmt::Result
where
    T: Display,
    W: Write,
{
    let mut first = true;
    recurse(root, order, &mut |value: Option<&T>| {
        if !first {
            w.write_char(' ')?;
        }
        first = false;

        match value {
            Some(v) => write_escaped(w, &v.to_string()),
            None => w.write_str(SENTINEL),
        }
    })
}

fn recurse<T, F>(node: Option<&Node<T>>, order: Traversal, emit: &mut F) -> fmt::Result
where
    F: FnMut(Option<&T>) -> fmt::Result,
{
    let Some(n) = node else {
        return emit(None);
    };

    match order {
        Traversal::PreOrder => {
            emit(Some(n.value()))?;
            recurse(n.left(), order, emit)?;
            recurse(n.right(), order, emit)
        }
        Traversal::InOrder => {
            recurse(n.left(), order, emit)?;
            emit(Some(n.value()))?;
            recurse(n.right(), order, emit)
        }
        Traversal::PostOrder => {
            recurse(n.left(), order, emit)?;
            recurse(n.right(), order, emit)?;
            emit(Some(n.value()))
        }
    }
}

/// Write `text` as a single token that is never mistaken for the
/// [`SENTINEL`]:
///
///   * a backslash is written as `\\`.
///   * whitespace is written as `\s` (space), `\t`, `\n`, `\r`, or
///     `\u{hex}` for any other whitespace character.
///   * text equal to the sentinel is written as `\#`.
///   * empty text is written as `\e`.
///
/// Text containing none of these is written unchanged.
fn write_escaped<W>(w: &mut W, text: &str) -> fmt::Result
where
    W: Write,
{
    if text.is_empty() {
        return w.write_str(r"\e");
    }
    if text == SENTINEL {
        return w.write_str(r"\#");
    }

    for c in text.chars() {
        match c {
            '\\' => w.write_str(r"\\")?,
            ' ' => w.write_str(r"\s")?,
            '\t' => w.write_str(r"\t")?,
            '\n' => w.write_str(r"\n")?,
            '\r' => w.write_str(r"\r")?,
            c if c.is_whitespace() => write!(w, "\\u{{{:x}}}", u32::from(c))?,
            c => w.write_char(c)?,
        }
    }

    Ok(())
}

/// Reverse [`write_escaped()`], returning a description of the first invalid
/// escape sequence on error.
fn unescape(token: &str) -> Result<Cow<'_, str>, String> {
    if !token.contains('\\') {
        return Ok(Cow::Borrowed(token));
    }

    let mut out = String::with_capacity(token.len());
    let mut chars = token.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('s') => out.push(' '),
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('#') => out.push('#'),
            Some('e') => {}
            Some('u') => out.push(unescape_code_point(&mut chars)?),
            Some(v) => return Err(format!("invalid escape sequence \"\\{v}\"")),
            None => return Err("unterminated escape sequence".to_string()),
        }
    }

    Ok(Cow::Owned(out))
}

/// Parse the `{hex}` part of a `\u{hex}` escape.
fn unescape_code_point(chars: &mut std::str::Chars<'_>) -> Result<char, String> {
    let invalid = || "invalid unicode escape sequence".to_string();

    if chars.next() != Some('{') {
        return Err(invalid());
    }

    let rest = chars.as_str();
    let end = rest.find('}').ok_or_else(invalid)?;
    let c = u32::from_str_radix(&rest[..end], 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(invalid)?;

    // Skip the hex digits and the closing brace.
    *chars = rest[end + 1..].chars();
    Ok(c)
}

/// Rebuild a tree from its pre-order token stream, returning the root and the
/// number of nodes.
///
/// Every value must fall strictly between the bounds implied by its ancestors
/// under `cmp`, so the result always satisfies the tree invariants.
pub(crate) fn deserialize<T, C>(
    text: &str,
    order: Traversal,
    cmp: &C,
) -> Result<(Link<T>, usize), ParseError>
where
    T: FromStr,
    T::Err: Display,
    C: Comparator<T>,
{
    if order != Traversal::PreOrder {
        return Err(ParseError::UnsupportedOrder(order));
    }

    let mut tokens = text.split_whitespace().enumerate().peekable();
    if tokens.peek().is_none() {
        return Ok((None, 0));
    }

    let mut len = 0;
    let root = build(
        &mut tokens,
        &Bounds {
            lower: None,
            upper: None,
        },
        cmp,
        &mut len,
    )?;

    if let Some((position, _)) = tokens.next() {
        return Err(ParseError::TrailingTokens { position });
    }

    Ok((root, len))
}

/// The open interval a value must fall within to be placed at a given slot.
struct Bounds<'a, T> {
    lower: Option<&'a T>,
    upper: Option<&'a T>,
}

impl<T> Bounds<'_, T> {
    fn admits<C>(&self, value: &T, cmp: &C) -> bool
    where
        C: Comparator<T>,
    {
        self.lower.is_none_or(|l| cmp.less(l, value))
            && self.upper.is_none_or(|u| cmp.less(value, u))
    }
}

fn build<T, C>(
    tokens: &mut Tokens<'_>,
    bounds: &Bounds<'_, T>,
    cmp: &C,
    len: &mut usize,
) -> Result<Link<T>, ParseError>
where
    T: FromStr,
    T::Err: Display,
    C: Comparator<T>,
{
    let (position, token) = tokens.next().ok_or(ParseError::UnexpectedEnd)?;
    if token == SENTINEL {
        return Ok(None);
    }

    let value = unescape(token)
        .and_then(|v| v.parse::<T>().map_err(|e| e.to_string()))
        .map_err(|reason| ParseError::InvalidToken {
            position,
            token: token.to_string(),
            reason,
        })?;

    if !bounds.admits(&value, cmp) {
        return Err(ParseError::OutOfOrder {
            position,
            token: token.to_string(),
        });
    }

    let left = build(
        tokens,
        &Bounds {
            lower: bounds.lower,
            upper: Some(&value),
        },
        cmp,
        len,
    )?;
    let right = build(
        tokens,
        &Bounds {
            lower: Some(&value),
            upper: bounds.upper,
        },
        cmp,
        len,
    )?;

    *len += 1;
    Ok(Some(Box::new(Node::with_children(value, left, right))))
}
