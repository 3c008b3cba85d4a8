use std::fmt;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::rules::{HTAB, SP};

/// A timestamp with HTTP formatting and parsing.
///
/// Parsing accepts the three formats allowed by
/// [RFC 9110 §5.6.7](https://www.rfc-editor.org/rfc/rfc9110#section-5.6.7),
/// formatting always produces the preferred IMF-fixdate format.
///
/// ```text
/// Sun, 06 Nov 1994 08:49:37 GMT    ; IMF-fixdate (RFC 1123)
/// Sunday, 06-Nov-94 08:49:37 GMT   ; obsolete RFC 850 format
/// Sun Nov  6 08:49:37 1994         ; ANSI C's asctime() format
/// ```
///
/// An `HttpDate` has second precision and covers the years 1970 up to
/// and including 9999. Dates before the unix epoch fail to parse, even
/// when they are otherwise well formed.
//
// HTTP-date = IMF-fixdate / obs-date
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HttpDate(httpdate::HttpDate);

/// Seconds since the unix epoch of `10000-01-01T00:00:00Z`.
const MAX_UNIX_SECS: u64 = 253_402_300_800;

impl HttpDate {
    /// Create an [`HttpDate`] from the seconds since the unix epoch,
    /// `None` if it falls after the year 9999.
    #[must_use]
    pub fn from_unix_secs(secs: u64) -> Option<Self> {
        (secs < MAX_UNIX_SECS)
            .then(|| Self(httpdate::HttpDate::from(UNIX_EPOCH + Duration::from_secs(secs))))
    }

    /// Seconds since the unix epoch.
    #[must_use]
    pub fn unix_secs(&self) -> u64 {
        SystemTime::from(self.0)
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default()
    }
}

impl fmt::Debug for HttpDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Display for HttpDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for HttpDate {
    type Err = InvalidHttpDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim_matches([SP as char, HTAB as char])
            .parse::<httpdate::HttpDate>()
            .map(HttpDate)
            .map_err(|_err| InvalidHttpDate { _inner: () })
    }
}

impl TryFrom<SystemTime> for HttpDate {
    type Error = InvalidHttpDate;

    fn try_from(time: SystemTime) -> Result<Self, Self::Error> {
        let secs = time
            .duration_since(UNIX_EPOCH)
            .map_err(|_err| InvalidHttpDate { _inner: () })?
            .as_secs();
        Self::from_unix_secs(secs).ok_or(InvalidHttpDate { _inner: () })
    }
}

impl From<HttpDate> for SystemTime {
    fn from(date: HttpDate) -> Self {
        date.0.into()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HttpDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HttpDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error returned for a value that isn't a (representable) [`HttpDate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidHttpDate {
    _inner: (),
}

impl fmt::Display for InvalidHttpDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid HTTP date")
    }
}

impl std::error::Error for InvalidHttpDate {}
