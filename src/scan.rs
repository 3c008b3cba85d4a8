//! Scanner for a single `warning-value`.
//!
//! One forward pass over the input, one field at a time,
//! without backtracking: code, agent, text and the optional date.

use http_warning_grammar::{Grammar, HttpDate, Rfc9110};
use tracing::{debug, trace};

use crate::{Error, ErrorKind, WarningCode, WarningValue};

/// Maximum amount of digits of a warn-code.
const MAX_CODE_LEN: usize = 3;

impl WarningValue {
    /// Parse `input` as exactly one [`WarningValue`].
    ///
    /// Leading and trailing whitespace is ignored,
    /// any other input before or after the value is not.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] whose [`ErrorKind`] points to the first field
    /// that failed: a code with more than 3 digits is out of range, a missing
    /// agent is an invalid agent, a malformed `quoted-string` an invalid text.
    /// All other failures (separators, date, trailing input) are reported as
    /// [`ErrorKind::InvalidFormat`]. This includes a date before 1970,
    /// which [`HttpDate`] cannot represent.
    pub fn parse(input: &str) -> Result<Self, Error> {
        Self::parse_with(&Rfc9110, input)
    }

    /// Parse `input` as exactly one [`WarningValue`] using the given [`Grammar`].
    ///
    /// # Errors
    ///
    /// See [`WarningValue::parse`].
    pub fn parse_with<G: Grammar + ?Sized>(grammar: &G, input: &str) -> Result<Self, Error> {
        let start = grammar.whitespace_len(input, 0);
        let (value, len) = scan_value(grammar, input, start)
            .map_err(Error::from)
            .inspect_err(|err| debug!("failed to parse warning value: {err}"))?;

        if start + len != input.len() {
            debug!(
                "failed to parse warning value: {} trailing byte(s)",
                input.len() - start - len
            );
            return Err(Error::invalid_format());
        }

        Ok(value)
    }

    /// Parse `input` as exactly one [`WarningValue`], `None` if it isn't one.
    #[must_use]
    pub fn try_parse(input: &str) -> Option<Self> {
        let start = Rfc9110.whitespace_len(input, 0);
        match scan_value(&Rfc9110, input, start) {
            Ok((value, len)) if start + len == input.len() => Some(value),
            _ => None,
        }
    }

    /// Scan a [`WarningValue`] at byte offset `start` of `input`.
    ///
    /// On success the value is returned together with the amount of bytes
    /// consumed, which includes the whitespace following the value.
    /// Input after that is left for the caller, which is what allows
    /// this scanner to be used as part of a larger (list) parser.
    ///
    /// `None` is returned if no valid value starts at `start`.
    /// A warn-date that is present but cannot be parsed fails the whole value,
    /// and that includes any date before 1970, which [`HttpDate`] cannot represent.
    ///
    /// ```
    /// use http_warning::WarningValue;
    ///
    /// let input = r#"199 fred "x" next"#;
    /// let (value, len) = WarningValue::scan(input, 0).unwrap();
    /// assert_eq!(value.text(), "x");
    /// assert_eq!(&input[len..], "next");
    /// ```
    #[must_use]
    pub fn scan(input: &str, start: usize) -> Option<(Self, usize)> {
        Self::scan_with(&Rfc9110, input, start)
    }

    /// Scan a [`WarningValue`] using the given [`Grammar`],
    /// see [`WarningValue::scan`].
    #[must_use]
    pub fn scan_with<G: Grammar + ?Sized>(
        grammar: &G,
        input: &str,
        start: usize,
    ) -> Option<(Self, usize)> {
        scan_value(grammar, input, start).ok()
    }
}

/// The one scan routine both the lenient (`scan`) and
/// strict (`parse`) entry points are built on.
pub(crate) fn scan_value<G: Grammar + ?Sized>(
    grammar: &G,
    input: &str,
    start: usize,
) -> Result<(WarningValue, usize), ErrorKind> {
    if start >= input.len() {
        trace!("no warning value to scan at offset {start}");
        return Err(ErrorKind::InvalidFormat);
    }

    let mut current = start;
    let code = read_code(grammar, input, &mut current)?;
    let agent = read_agent(grammar, input, &mut current)?;
    let text = read_text(grammar, input, &mut current)?;
    let date = read_date(grammar, input, &mut current)?;

    Ok((
        WarningValue {
            code,
            agent: agent.to_owned(),
            text,
            date,
        },
        current - start,
    ))
}

/// At least one whitespace must follow and input must remain after it.
fn read_separator<G: Grammar + ?Sized>(
    grammar: &G,
    input: &str,
    current: &mut usize,
    field: &str,
) -> Result<(), ErrorKind> {
    let ws = grammar.whitespace_len(input, *current);
    *current += ws;
    if ws == 0 || *current >= input.len() {
        trace!("warning value: expected whitespace and more input after {field} at offset {current}");
        return Err(ErrorKind::InvalidFormat);
    }
    Ok(())
}

fn read_code<G: Grammar + ?Sized>(
    grammar: &G,
    input: &str,
    current: &mut usize,
) -> Result<WarningCode, ErrorKind> {
    let len = grammar.number_len(input, *current);
    if len == 0 {
        trace!("warning value: missing code at offset {current}");
        return Err(ErrorKind::InvalidFormat);
    }
    if len > MAX_CODE_LEN {
        trace!("warning value: code of {len} digits at offset {current}");
        return Err(ErrorKind::CodeOutOfRange);
    }

    let code = input
        .get(*current..*current + len)
        .and_then(|digits| digits.parse::<u16>().ok())
        .and_then(WarningCode::from_u16)
        .ok_or(ErrorKind::CodeOutOfRange)?;
    *current += len;

    read_separator(grammar, input, current, "code")?;
    Ok(code)
}

fn read_agent<'a, G: Grammar + ?Sized>(
    grammar: &G,
    input: &'a str,
    current: &mut usize,
) -> Result<&'a str, ErrorKind> {
    let len = grammar.host_or_token_len(input, *current);
    let agent = match input.get(*current..*current + len) {
        Some(agent) if len > 0 => agent,
        _ => {
            trace!("warning value: missing agent at offset {current}");
            return Err(ErrorKind::InvalidAgent);
        }
    };
    *current += len;

    read_separator(grammar, input, current, "agent")?;
    Ok(agent)
}

fn read_text<G: Grammar + ?Sized>(
    grammar: &G,
    input: &str,
    current: &mut usize,
) -> Result<String, ErrorKind> {
    let len = grammar.quoted_string_len(input, *current);
    let quoted = match input.get(*current..*current + len) {
        Some(quoted) if len > 0 => quoted,
        _ => {
            trace!("warning value: missing quoted text at offset {current}");
            return Err(ErrorKind::InvalidText);
        }
    };
    *current += len;

    Ok(grammar.unquote(quoted).into_owned())
}

/// An absent date is not an error, a malformed one fails the entire value.
fn read_date<G: Grammar + ?Sized>(
    grammar: &G,
    input: &str,
    current: &mut usize,
) -> Result<Option<HttpDate>, ErrorKind> {
    let ws = grammar.whitespace_len(input, *current);
    *current += ws;

    let Some(rest) = input.get(*current..).and_then(|s| s.strip_prefix('"')) else {
        return Ok(None);
    };
    if ws == 0 {
        trace!("warning value: date not separated from text at offset {current}");
        return Err(ErrorKind::InvalidFormat);
    }

    let date = match rest.find('"') {
        Some(0) | None => {
            trace!("warning value: empty or unterminated date at offset {current}");
            return Err(ErrorKind::InvalidFormat);
        }
        Some(end) => &rest[..end],
    };
    let Some(date_value) = grammar.parse_http_date(date) else {
        trace!("warning value: invalid date {date:?} at offset {current}");
        return Err(ErrorKind::InvalidFormat);
    };

    // opening quote, date and closing quote
    *current += date.len() + 2;
    *current += grammar.whitespace_len(input, *current);
    Ok(Some(date_value))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATE: &str = "Wed, 21 Oct 2015 07:28:00 GMT";

    fn scan_ok(input: &str) -> (WarningValue, usize) {
        WarningValue::scan(input, 0).unwrap_or_else(|| panic!("scan {input:?}"))
    }

    #[test]
    fn test_scan_without_date() {
        let input = r#"199 fred "Miscellaneous warning""#;
        let (value, len) = scan_ok(input);
        assert_eq!(value.code(), 199u16);
        assert_eq!(value.agent(), "fred");
        assert_eq!(value.text(), "Miscellaneous warning");
        assert_eq!(value.date(), None);
        assert_eq!(len, input.len());
    }

    #[test]
    fn test_scan_with_date() {
        let input = format!(r#"199 fred "Miscellaneous warning" "{DATE}""#);
        let (value, len) = scan_ok(&input);
        assert_eq!(value.code(), 199u16);
        assert_eq!(value.agent(), "fred");
        assert_eq!(value.text(), "Miscellaneous warning");
        assert_eq!(value.date(), Some(DATE.parse().unwrap()));
        assert_eq!(len, input.len());
    }

    #[test]
    fn test_scan_short_codes() {
        for (input, code) in [
            (r#"0 a "x""#, 0u16),
            (r#"01 a "x""#, 1),
            (r#"001 a "x""#, 1),
            (r#"999 a "x""#, 999),
        ] {
            assert_eq!(scan_ok(input).0.code(), code, "{input:?}");
        }
    }

    #[test]
    fn test_scan_consumes_whitespace() {
        let input = format!("199  \t fred \t\"x\"  \"{DATE}\"  ");
        let (value, len) = scan_ok(&input);
        assert_eq!(len, input.len());
        assert_eq!(value.agent(), "fred");
        assert!(value.date().is_some());

        // obsolete line folding counts as whitespace
        let input = "199\r\n fred \"x\"";
        assert_eq!(scan_ok(input).1, input.len());
    }

    #[test]
    fn test_scan_at_offset() {
        let input = r#"xx, 214 proxy:8080 "gzip", 110 cache "stale""#;
        let (first, len) = WarningValue::scan(input, 4).unwrap();
        assert_eq!(first.code(), WarningCode::TRANSFORMATION_APPLIED);
        assert_eq!(first.agent(), "proxy:8080");
        assert_eq!(&input[4 + len..], r#", 110 cache "stale""#);

        let (second, len) = WarningValue::scan(input, 27).unwrap();
        assert_eq!(second.code(), WarningCode::RESPONSE_IS_STALE);
        assert_eq!(27 + len, input.len());
    }

    #[test]
    fn test_scan_leaves_trailing_input() {
        let input = r#"199 fred "x" extra-trailing-data"#;
        let (value, len) = scan_ok(input);
        assert_eq!(value.text(), "x");
        assert!(len < input.len());
        assert_eq!(&input[len..], "extra-trailing-data");

        // no whitespace is consumed when the value is directly followed by data
        let input = r#"199 fred "x","#;
        let (_, len) = scan_ok(input);
        assert_eq!(&input[len..], ",");
    }

    #[test]
    fn test_scan_unescapes_text() {
        let (value, _) = scan_ok(r#"199 fred "say \"hi\" \\o/""#);
        assert_eq!(value.text(), r#"say "hi" \o/"#);
    }

    #[test]
    fn test_scan_no_match() {
        for (input, reason) in [
            ("", "empty"),
            ("   ", "only whitespace"),
            (r#"1000 fred "x""#, "code too long"),
            (r#"abc fred "x""#, "no code"),
            (r#"199fred "x""#, "no whitespace after code"),
            ("199 ", "nothing after code"),
            (r#"199 "x""#, "no agent"),
            (r#"199 fred"x""#, "no whitespace after agent"),
            ("199 fred ", "nothing after agent"),
            ("199 fred x", "text not quoted"),
            (r#"199 fred "x"#, "text unterminated"),
            (r#"199 fred "x" """#, "empty date"),
            (r#"199 fred "x" "Wed, 21 Oct"#, "date unterminated"),
            (r#"199 fred "x" "yesterday""#, "invalid date"),
            (r#"199 fred "x""Wed, 21 Oct 2015 07:28:00 GMT""#, "date not separated"),
            (r#"199 a/b "x""#, "invalid agent"),
        ] {
            assert!(WarningValue::scan(input, 0).is_none(), "{reason}: {input:?}");
        }
    }

    #[test]
    fn test_scan_failure_kinds() {
        for (input, kind) in [
            (r#"1000 fred "x""#, ErrorKind::CodeOutOfRange),
            (r#"x fred "x""#, ErrorKind::InvalidFormat),
            (r#"199 ,fred "x""#, ErrorKind::InvalidAgent),
            ("199 fred x", ErrorKind::InvalidText),
            (r#"199 fred "x" """#, ErrorKind::InvalidFormat),
            ("", ErrorKind::InvalidFormat),
        ] {
            assert_eq!(
                scan_value(&Rfc9110, input, 0).map(|(_, len)| len),
                Err(kind),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_scan_invalid_offsets() {
        let input = r#"199 fred "x""#;
        assert!(WarningValue::scan(input, input.len()).is_none());
        assert!(WarningValue::scan(input, input.len() + 10).is_none());
        assert!(WarningValue::scan("é199 fred \"x\"", 1).is_none());
    }

    #[test]
    fn test_parse() {
        let value = WarningValue::parse(r#"  199 fred "x"  "#).unwrap();
        assert_eq!(value.text(), "x");

        let err = WarningValue::parse(r#"199 fred "x" extra"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);

        let err = WarningValue::parse(r#"1000 fred "x""#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CodeOutOfRange);

        let err = WarningValue::parse("199 fred x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidText);

        let err = WarningValue::parse("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn test_date_before_epoch_fails_value() {
        let input = r#"199 fred "x" "Sun, 06 Nov 1960 08:49:37 GMT""#;
        assert!(WarningValue::scan(input, 0).is_none());
        assert!(WarningValue::try_parse(input).is_none());
        assert_eq!(
            WarningValue::parse(input).unwrap_err().kind(),
            ErrorKind::InvalidFormat
        );
    }

    #[test]
    fn test_try_parse() {
        assert!(WarningValue::try_parse(r#"199 fred "x""#).is_some());
        assert!(WarningValue::try_parse(r#" 199 fred "x" "#).is_some());
        assert!(WarningValue::try_parse(r#"199 fred "x" extra"#).is_none());
        assert!(WarningValue::try_parse(r#"199 fred "x", 199 bob "y""#).is_none());
        assert!(WarningValue::try_parse("199 fred x").is_none());
    }

    #[test]
    fn test_scan_with_stub_grammar() {
        // dates are opaque tokens for this grammar
        struct EpochDates;
        impl Grammar for EpochDates {
            fn parse_http_date(&self, input: &str) -> Option<HttpDate> {
                (input == "epoch").then(|| HttpDate::from_unix_secs(0)).flatten()
            }
        }

        let (value, _) = WarningValue::scan_with(&EpochDates, r#"199 fred "x" "epoch""#, 0).unwrap();
        assert_eq!(value.date(), HttpDate::from_unix_secs(0));

        let input = format!(r#"199 fred "x" "{DATE}""#);
        assert!(WarningValue::scan_with(&EpochDates, &input, 0).is_none());
        assert!(WarningValue::scan(&input, 0).is_some());
    }
}
