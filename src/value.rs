use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use http_warning_grammar::{Grammar, HttpDate, Rfc9110, quoted};
use tracing::debug;

use crate::{Error, IntoWarningCode, WarningCode};

/// A single `Warning` header field value.
///
/// ```text
/// warning-value = warn-code SP warn-agent SP warn-text [ SP warn-date ]
/// warn-code     = 3DIGIT
/// warn-agent    = ( uri-host [ ":" port ] ) / pseudonym
/// warn-text     = quoted-string
/// warn-date     = DQUOTE HTTP-date DQUOTE
/// ```
///
/// Defined in [RFC 7234 §5.5](https://datatracker.ietf.org/doc/html/rfc7234#section-5.5)
/// (obsoleted by RFC 9111, which no longer defines the field).
///
/// A value is immutable. It is created either by one of the validating
/// constructors or by parsing, and both paths guarantee that:
///
/// - the code is within `0..=999`;
/// - the agent is a non-empty `host` or `token`;
/// - the text is the (unquoted) content of a valid `quoted-string`.
///
/// Equality compares the agent case-insensitively and the text
/// case-sensitively, the date (if any) by instant.
///
/// # Example
///
/// ```
/// use http_warning::WarningValue;
///
/// let warning = WarningValue::try_new(199, "fred", "Miscellaneous warning").unwrap();
/// assert_eq!(warning.to_string(), r#"199 fred "Miscellaneous warning""#);
///
/// let parsed: WarningValue = r#"199 FRED "Miscellaneous warning""#.parse().unwrap();
/// assert_eq!(parsed, warning);
/// ```
#[derive(Debug, Clone)]
pub struct WarningValue {
    pub(crate) code: WarningCode,
    pub(crate) agent: String,
    pub(crate) text: String,
    pub(crate) date: Option<HttpDate>,
}

impl WarningValue {
    /// Create a new [`WarningValue`] without a date.
    ///
    /// The `text` is the content of the warn-text, it is quoted
    /// (and escaped) when formatted.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::CodeOutOfRange`] if `code` is not within `0..=999`;
    /// - [`ErrorKind::InvalidAgent`] if `agent` is empty or not a `host` or `token`;
    /// - [`ErrorKind::InvalidText`] if `text` cannot be a `quoted-string`'s content,
    ///   which is the case for control characters other than `HTAB`.
    ///
    /// [`ErrorKind::CodeOutOfRange`]: crate::ErrorKind::CodeOutOfRange
    /// [`ErrorKind::InvalidAgent`]: crate::ErrorKind::InvalidAgent
    /// [`ErrorKind::InvalidText`]: crate::ErrorKind::InvalidText
    pub fn try_new(
        code: impl IntoWarningCode,
        agent: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self, Error> {
        Self::try_new_inner(&Rfc9110, code, agent.into(), text.into(), None)
    }

    /// Create a new [`WarningValue`] with the date the warning was generated.
    ///
    /// # Errors
    ///
    /// Same as [`WarningValue::try_new`].
    pub fn try_new_with_date(
        code: impl IntoWarningCode,
        agent: impl Into<String>,
        text: impl Into<String>,
        date: HttpDate,
    ) -> Result<Self, Error> {
        Self::try_new_inner(&Rfc9110, code, agent.into(), text.into(), Some(date))
    }

    /// Create a new [`WarningValue`], validating the agent and text
    /// using the given [`Grammar`].
    ///
    /// # Errors
    ///
    /// Same as [`WarningValue::try_new`].
    pub fn try_new_with<G: Grammar + ?Sized>(
        grammar: &G,
        code: impl IntoWarningCode,
        agent: impl Into<String>,
        text: impl Into<String>,
        date: Option<HttpDate>,
    ) -> Result<Self, Error> {
        Self::try_new_inner(grammar, code, agent.into(), text.into(), date)
    }

    fn try_new_inner<G: Grammar + ?Sized>(
        grammar: &G,
        code: impl IntoWarningCode,
        agent: String,
        text: String,
        date: Option<HttpDate>,
    ) -> Result<Self, Error> {
        let code = code.into_warning_code().inspect_err(|err| {
            debug!("failed to create warning value: {err}");
        })?;
        check_agent(grammar, &agent).inspect_err(|err| {
            debug!("failed to create warning value with agent '{agent}': {err}");
        })?;
        check_text(grammar, &text).inspect_err(|err| {
            debug!("failed to create warning value with text {text:?}: {err}");
        })?;
        Ok(Self {
            code,
            agent,
            text,
            date,
        })
    }

    /// The warn-code.
    #[must_use]
    pub fn code(&self) -> WarningCode {
        self.code
    }

    /// The warn-agent: host (with optional port) or pseudonym,
    /// with its case preserved.
    #[must_use]
    pub fn agent(&self) -> &str {
        &self.agent
    }

    /// The content of the warn-text, without quotes and escapes.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The warn-date, if the warning has one.
    #[must_use]
    pub fn date(&self) -> Option<HttpDate> {
        self.date
    }

    /// Consume the value into its code, agent, text and date.
    #[must_use]
    pub fn into_parts(self) -> (WarningCode, String, String, Option<HttpDate>) {
        (self.code, self.agent, self.text, self.date)
    }

    /// A copy of this value with the given date.
    #[must_use]
    pub fn with_date(&self, date: HttpDate) -> Self {
        Self {
            date: Some(date),
            ..self.clone()
        }
    }

    /// A copy of this value without a date.
    #[must_use]
    pub fn without_date(&self) -> Self {
        Self {
            date: None,
            ..self.clone()
        }
    }
}

/// The agent must be non-empty and match `host` or `token` in its entirety.
pub(crate) fn check_agent<G: Grammar + ?Sized>(grammar: &G, agent: &str) -> Result<(), Error> {
    if agent.is_empty() || grammar.host_or_token_len(agent, 0) != agent.len() {
        return Err(Error::invalid_agent());
    }
    Ok(())
}

/// The text, once quoted, must match `quoted-string` in its entirety.
pub(crate) fn check_text<G: Grammar + ?Sized>(grammar: &G, text: &str) -> Result<(), Error> {
    let quoted = quoted(text).to_string();
    if grammar.quoted_string_len(&quoted, 0) != quoted.len() {
        return Err(Error::invalid_text());
    }
    Ok(())
}

impl PartialEq for WarningValue {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.agent.eq_ignore_ascii_case(&other.agent)
            && self.text == other.text
            && self.date == other.date
    }
}

impl Eq for WarningValue {}

impl Hash for WarningValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
        // agent compares case-insensitively, so it must hash that way as well
        state.write_usize(self.agent.len());
        for b in self.agent.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
        self.text.hash(state);
        if let Some(date) = &self.date {
            date.hash(state);
        }
    }
}

/// Formats the canonical form of the value:
/// zero-padded 3-digit code, agent, quoted text and the optional quoted date.
///
/// The text is written as a `quoted-string` (escaping `"` and `\`), so
/// the output can always be parsed back into an equal value.
/// This breaks compatibility with formatters that emit the text unquoted
/// (`{code:000} {agent} {text}`), which is not valid `warning-value` syntax.
impl fmt::Display for WarningValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.code, self.agent, quoted(&self.text))?;
        if let Some(date) = &self.date {
            write!(f, " \"{date}\"")?;
        }
        Ok(())
    }
}

impl FromStr for WarningValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for WarningValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for WarningValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
