//! HTTP sub-grammar lexers
//!
//! `http-warning-grammar` contains the primitive HTTP lexical rules
//! (as defined in [RFC 9110]) that the `Warning` value parser of
//! `http-warning` is composed of: whitespace runs, numeric runs, `token`,
//! `host`, `quoted-string` and `HTTP-date`.
//!
//! All lexers share the same contract: given an input and a start offset
//! they return the amount of bytes matched at that offset, where `0` means
//! "no match". They never panic, not even for an out of range offset.
//!
//! ```
//! use http_warning_grammar::{quoted_string_len, unquote, whitespace_len};
//!
//! let input = r#"  "hello \"world\"" rest"#;
//! let ws = whitespace_len(input, 0);
//! assert_eq!(ws, 2);
//!
//! let len = quoted_string_len(input, ws);
//! assert_eq!(unquote(&input[ws..ws + len]), r#"hello "world""#);
//! ```
//!
//! The [`Grammar`] trait bundles these rules as a capability that can be
//! injected into a parser, with [`Rfc9110`] as the default implementation.
//!
//! [RFC 9110]: https://www.rfc-editor.org/rfc/rfc9110

#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

use std::borrow::Cow;

pub mod rules;

mod lex;
#[doc(inline)]
pub use lex::{host_or_token_len, number_len, token_len, whitespace_len};

mod quoted;
#[doc(inline)]
pub use quoted::{Quoted, quoted, quoted_string_len, unquote};

mod http_date;
#[doc(inline)]
pub use http_date::{HttpDate, InvalidHttpDate};

/// The set of sub-grammar rules a field value parser is built on top of.
///
/// Every method has a default implementation delegating to the
/// free functions of this crate, so an implementation only has to
/// override the rules it wishes to change (e.g. a stub in tests).
pub trait Grammar {
    /// Length of the whitespace run at `start`, see [`whitespace_len`].
    fn whitespace_len(&self, input: &str, start: usize) -> usize {
        whitespace_len(input, start)
    }

    /// Length of the digit run at `start`, see [`number_len`].
    fn number_len(&self, input: &str, start: usize) -> usize {
        number_len(input, start)
    }

    /// Length of the `host` or `token` at `start`, see [`host_or_token_len`].
    fn host_or_token_len(&self, input: &str, start: usize) -> usize {
        host_or_token_len(input, start)
    }

    /// Length of the `quoted-string` at `start`, quotes included,
    /// see [`quoted_string_len`].
    fn quoted_string_len(&self, input: &str, start: usize) -> usize {
        quoted_string_len(input, start)
    }

    /// Content of a `quoted-string` previously matched
    /// by [`Grammar::quoted_string_len`], see [`unquote`].
    fn unquote<'a>(&self, quoted: &'a str) -> Cow<'a, str> {
        unquote(quoted)
    }

    /// Parse an `HTTP-date`, `None` if `input` isn't one.
    fn parse_http_date(&self, input: &str) -> Option<HttpDate> {
        input.parse().ok()
    }
}

impl<G: Grammar + ?Sized> Grammar for &G {
    #[inline]
    fn whitespace_len(&self, input: &str, start: usize) -> usize {
        (**self).whitespace_len(input, start)
    }

    #[inline]
    fn number_len(&self, input: &str, start: usize) -> usize {
        (**self).number_len(input, start)
    }

    #[inline]
    fn host_or_token_len(&self, input: &str, start: usize) -> usize {
        (**self).host_or_token_len(input, start)
    }

    #[inline]
    fn quoted_string_len(&self, input: &str, start: usize) -> usize {
        (**self).quoted_string_len(input, start)
    }

    #[inline]
    fn unquote<'a>(&self, quoted: &'a str) -> Cow<'a, str> {
        (**self).unquote(quoted)
    }

    #[inline]
    fn parse_http_date(&self, input: &str) -> Option<HttpDate> {
        (**self).parse_http_date(input)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
/// The [`Grammar`] as defined by [RFC 9110](https://www.rfc-editor.org/rfc/rfc9110).
pub struct Rfc9110;

impl Grammar for Rfc9110 {}
