//! # Typed HTTP `Warning` values
//!
//! A `Warning` header field value carries a 3-digit code, the agent
//! (host or pseudonym) that added it, a human readable text and optionally
//! the date at which it was generated:
//!
//! ```text
//! 199 fred "Miscellaneous warning" "Wed, 21 Oct 2015 07:28:00 GMT"
//! ```
//!
//! This crate provides [`WarningValue`], which can be:
//!
//! - parsed strictly from a complete value ([`WarningValue::parse`], [`WarningValue::try_parse`]);
//! - scanned at an offset of a larger input ([`WarningValue::scan`]), reporting the amount
//!   of bytes consumed so that a list parser can continue after it;
//! - created programmatically, validated ([`WarningValue::try_new`]);
//! - formatted in its canonical form ([`Display`]);
//! - compared and hashed, with the agent being case-insensitive and the text case-sensitive.
//!
//! The sub-grammars it is built from (whitespace, `host`/`token`, `quoted-string`,
//! `HTTP-date`) live in [`http_warning_grammar`] and can be swapped
//! using the [`Grammar`] capability.
//!
//! # Example
//!
//! ```
//! use http_warning::{WarningCode, WarningValue};
//!
//! let warning: WarningValue = r#"110 cache.example.com "Response is Stale""#.parse().unwrap();
//! assert_eq!(warning.code(), WarningCode::RESPONSE_IS_STALE);
//! assert!(warning.code().is_transient());
//! assert_eq!(warning.agent(), "cache.example.com");
//! assert_eq!(warning.text(), "Response is Stale");
//! assert!(warning.date().is_none());
//!
//! assert_eq!(warning.to_string(), r#"110 cache.example.com "Response is Stale""#);
//! ```
//!
//! # Features
//!
//! - `http` (default): [`Header`] support based on the [`http`] crate;
//! - `serde`: (de)serialize values in their canonical string form.
//!
//! [`Display`]: std::fmt::Display
//! [`Grammar`]: http_warning_grammar::Grammar
//! [`Header`]: crate::header::Header
//! [`http`]: https://docs.rs/http

#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod error;
#[doc(inline)]
pub use error::{Error, ErrorKind};

mod code;
#[doc(inline)]
pub use code::{IntoWarningCode, WarningCode};

mod value;
#[doc(inline)]
pub use value::WarningValue;

mod scan;

#[cfg(feature = "http")]
pub mod header;

#[doc(inline)]
pub use http_warning_grammar::{Grammar, HttpDate, InvalidHttpDate, Rfc9110};

pub mod dep {
    //! dependencies http-warning

    pub use http_warning_grammar;

    #[cfg(feature = "http")]
    pub use http;
}
