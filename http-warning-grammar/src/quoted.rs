use std::borrow::Cow;
use std::fmt;

use crate::lex::tail;
use crate::rules::{BACKSLASH, DQUOTE, is_qdtext, is_quoted_pair_char};

/// Length of the `quoted-string` found at `start`, both quotes included.
///
/// ```text
/// quoted-string = DQUOTE *( qdtext / quoted-pair ) DQUOTE
/// quoted-pair   = "\" ( HTAB / SP / VCHAR / obs-text )
/// ```
///
/// Returns `0` when there is no opening quote at `start`, when the string
/// is not terminated or when it contains an octet not allowed by the grammar.
///
/// ```
/// use http_warning_grammar::quoted_string_len;
///
/// assert_eq!(quoted_string_len(r#""a \"b\"" tail"#, 0), 9);
/// assert_eq!(quoted_string_len(r#""open"#, 0), 0);
/// assert_eq!(quoted_string_len(r#" "x""#, 0), 0);
/// ```
#[must_use]
pub fn quoted_string_len(input: &str, start: usize) -> usize {
    let bytes = tail(input, start);
    if bytes.first() != Some(&DQUOTE) {
        return 0;
    }

    let mut i = 1;
    loop {
        match bytes.get(i) {
            Some(&DQUOTE) => return i + 1,
            Some(&BACKSLASH) => match bytes.get(i + 1) {
                Some(b) if is_quoted_pair_char(*b) => i += 2,
                _ => return 0,
            },
            Some(b) if is_qdtext(*b) => i += 1,
            _ => return 0,
        }
    }
}

/// Content of a `quoted-string`, surrounding quotes removed
/// and every `quoted-pair` replaced by the octet it escapes.
///
/// Meant for input validated by [`quoted_string_len`],
/// unquoted input is returned as is. Borrows when nothing was escaped.
///
/// ```
/// use http_warning_grammar::unquote;
///
/// assert_eq!(unquote(r#""plain""#), "plain");
/// assert_eq!(unquote(r#""a \"b\" \\ c""#), r#"a "b" \ c"#);
/// ```
#[must_use]
pub fn unquote(quoted: &str) -> Cow<'_, str> {
    let content = quoted
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(quoted);

    if !content.contains('\\') {
        return Cow::Borrowed(content);
    }

    let mut unescaped = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                unescaped.push(escaped);
            }
        } else {
            unescaped.push(c);
        }
    }
    Cow::Owned(unescaped)
}

/// Display `text` as a `quoted-string`, see [`Quoted`].
///
/// ```
/// use http_warning_grammar::quoted;
///
/// assert_eq!(quoted(r#"say "hi""#).to_string(), r#""say \"hi\"""#);
/// ```
#[inline]
#[must_use]
pub fn quoted(text: &str) -> Quoted<'_> {
    Quoted(text)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// [`Display`] adapter that writes its text as a `quoted-string`,
/// escaping `"` and `\` as a `quoted-pair`.
///
/// The output is only a valid `quoted-string` if the text contains no
/// control characters other than `HTAB`.
///
/// [`Display`]: fmt::Display
pub struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write as _;

        f.write_char('"')?;
        let mut rest = self.0;
        while let Some(idx) = rest.find(['"', '\\']) {
            let (plain, escaped) = rest.split_at(idx);
            f.write_str(plain)?;
            f.write_char('\\')?;
            f.write_str(&escaped[..1])?;
            rest = &escaped[1..];
        }
        f.write_str(rest)?;
        f.write_char('"')
    }
}
