//! Typed header support for [`WarningValue`], using the [`http`] crate.

use http::header::{self, HeaderName, HeaderValue};
use tracing::debug;

use crate::{Error, WarningValue};

/// A trait for any object that will represent a header field and value.
pub trait Header {
    /// The name of this header.
    fn name() -> &'static HeaderName;

    /// Decode this type from an iterator of [`HeaderValue`]s.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the values do not represent this header.
    fn decode<'i, I>(values: &mut I) -> Result<Self, Error>
    where
        Self: Sized,
        I: Iterator<Item = &'i HeaderValue>;

    /// Encode this type to a [`HeaderValue`], and add it to a container
    /// which has [`HeaderValue`] type as each element.
    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E);

    /// Encode this [`Header`] to a single [`HeaderValue`],
    /// `None` if nothing was encoded.
    fn encode_to_value(&self) -> Option<HeaderValue> {
        let mut container = ExtendOnce(None);
        self.encode(&mut container);
        container.0
    }
}

struct ExtendOnce(Option<HeaderValue>);

impl Extend<HeaderValue> for ExtendOnce {
    fn extend<T: IntoIterator<Item = HeaderValue>>(&mut self, iter: T) {
        self.0 = iter.into_iter().next();
    }
}

/// A single `Warning` header value.
///
/// Only the first value is decoded, and it has to hold exactly one
/// warning-value: a comma separated list of warnings is rejected.
impl Header for WarningValue {
    fn name() -> &'static HeaderName {
        &header::WARNING
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        let Some(value) = values.next() else {
            debug!("failed to decode warning header: no value");
            return Err(Error::invalid_format());
        };
        Self::try_from(value)
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        match HeaderValue::try_from(self) {
            Ok(value) => values.extend(std::iter::once(value)),
            Err(err) => {
                debug!("failed to encode warning value as header: {err}");
            }
        }
    }
}

impl TryFrom<&HeaderValue> for WarningValue {
    type Error = Error;

    fn try_from(value: &HeaderValue) -> Result<Self, Self::Error> {
        // obs-text is allowed within the text, so no `to_str`
        let s = std::str::from_utf8(value.as_bytes()).map_err(|err| {
            debug!("failed to decode warning header: {err}");
            Error::invalid_format()
        })?;
        Self::parse(s)
    }
}

impl TryFrom<&WarningValue> for HeaderValue {
    type Error = http::header::InvalidHeaderValue;

    fn try_from(value: &WarningValue) -> Result<Self, Self::Error> {
        Self::try_from(value.to_string())
    }
}
