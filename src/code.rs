use std::fmt;

use crate::Error;

/// The 3-digit `warn-code` of a [`WarningValue`], within `0..=999`.
///
/// The first digit indicates whether a warning must be removed
/// from a stored response after validation (`1xx`) or kept (`2xx`),
/// see [RFC 7234 §5.5](https://datatracker.ietf.org/doc/html/rfc7234#section-5.5).
///
/// ```
/// use http_warning::WarningCode;
///
/// let code = WarningCode::from_u16(214).unwrap();
/// assert_eq!(code, WarningCode::TRANSFORMATION_APPLIED);
/// assert!(code.is_persistent());
/// assert_eq!(code.canonical_text(), Some("Transformation Applied"));
///
/// assert_eq!(WarningCode::from_u16(7).unwrap().to_string(), "007");
/// assert!(WarningCode::from_u16(1000).is_none());
/// ```
///
/// [`WarningValue`]: crate::WarningValue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WarningCode(u16);

macro_rules! warning_codes {
    ($($(#[$m:meta])* ($num:literal, $name:ident, $text:literal);)+) => {
        impl WarningCode {
            $(
                $(#[$m])*
                pub const $name: Self = Self($num);
            )+

            /// The registered warn-text for this code, if any.
            #[must_use]
            pub const fn canonical_text(self) -> Option<&'static str> {
                match self.0 {
                    $($num => Some($text),)+
                    _ => None,
                }
            }
        }
    };
}

warning_codes! {
    /// `110 Response is Stale`
    (110, RESPONSE_IS_STALE, "Response is Stale");
    /// `111 Revalidation Failed`
    (111, REVALIDATION_FAILED, "Revalidation Failed");
    /// `112 Disconnected Operation`
    (112, DISCONNECTED_OPERATION, "Disconnected Operation");
    /// `113 Heuristic Expiration`
    (113, HEURISTIC_EXPIRATION, "Heuristic Expiration");
    /// `199 Miscellaneous Warning`
    (199, MISCELLANEOUS_WARNING, "Miscellaneous Warning");
    /// `214 Transformation Applied`
    (214, TRANSFORMATION_APPLIED, "Transformation Applied");
    /// `299 Miscellaneous Persistent Warning`
    (299, MISCELLANEOUS_PERSISTENT_WARNING, "Miscellaneous Persistent Warning");
}

impl WarningCode {
    /// The largest valid code.
    pub const MAX: u16 = 999;

    /// Create a [`WarningCode`], `None` if `code` is larger than [`Self::MAX`].
    #[must_use]
    pub const fn from_u16(code: u16) -> Option<Self> {
        if code <= Self::MAX {
            Some(Self(code))
        } else {
            None
        }
    }

    /// The code as a number.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// `1xx` codes describe the freshness or validation status of a
    /// response and must be removed once the stored response is validated.
    #[must_use]
    pub const fn is_transient(self) -> bool {
        self.0 / 100 == 1
    }

    /// `2xx` codes describe a transformation of the representation
    /// and must be kept after validation.
    #[must_use]
    pub const fn is_persistent(self) -> bool {
        self.0 / 100 == 2
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

impl PartialEq<u16> for WarningCode {
    fn eq(&self, other: &u16) -> bool {
        self.0 == *other
    }
}

impl PartialEq<WarningCode> for u16 {
    fn eq(&self, other: &WarningCode) -> bool {
        *self == other.0
    }
}

impl From<WarningCode> for u16 {
    fn from(code: WarningCode) -> Self {
        code.0
    }
}

impl From<WarningCode> for i32 {
    fn from(code: WarningCode) -> Self {
        code.0.into()
    }
}

/// Conversion into a [`WarningCode`], used by the [`WarningValue`] constructors
/// so they accept both a [`WarningCode`] and plain integers.
///
/// [`WarningValue`]: crate::WarningValue
pub trait IntoWarningCode {
    /// Convert `self` into a [`WarningCode`],
    /// failing with [`ErrorKind::CodeOutOfRange`] outside of `0..=999`.
    ///
    /// [`ErrorKind::CodeOutOfRange`]: crate::ErrorKind::CodeOutOfRange
    fn into_warning_code(self) -> Result<WarningCode, Error>;
}

impl IntoWarningCode for WarningCode {
    #[inline]
    fn into_warning_code(self) -> Result<WarningCode, Error> {
        Ok(self)
    }
}

macro_rules! impl_into_warning_code {
    ($($t:ty),+ $(,)?) => {
        $(
            impl IntoWarningCode for $t {
                fn into_warning_code(self) -> Result<WarningCode, Error> {
                    u16::try_from(self)
                        .ok()
                        .and_then(WarningCode::from_u16)
                        .ok_or_else(Error::code_out_of_range)
                }
            }

            impl TryFrom<$t> for WarningCode {
                type Error = Error;

                fn try_from(code: $t) -> Result<Self, Self::Error> {
                    code.into_warning_code()
                }
            }
        )+
    };
}

impl_into_warning_code!(u16, u32, u64, usize, i32, i64);

#[cfg(feature = "serde")]
impl serde::Serialize for WarningCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for WarningCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = u16::deserialize(deserializer)?;
        code.try_into().map_err(serde::de::Error::custom)
    }
}
