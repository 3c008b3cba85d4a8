//! Byte classes of the HTTP core rules,
//! see [RFC 9110 §5.6](https://www.rfc-editor.org/rfc/rfc9110#section-5.6).

/// `SP`
pub const SP: u8 = b' ';

/// `HTAB`
pub const HTAB: u8 = b'\t';

/// `DQUOTE`
pub const DQUOTE: u8 = b'"';

/// `\`, the quoted-pair prefix.
pub const BACKSLASH: u8 = b'\\';

/// `SP / HTAB`
#[inline]
#[must_use]
pub const fn is_ws(b: u8) -> bool {
    b == SP || b == HTAB
}

/// `DIGIT`
#[inline]
#[must_use]
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// `VCHAR`: visible (printing) US-ASCII characters.
#[inline]
#[must_use]
pub const fn is_vchar(b: u8) -> bool {
    matches!(b, 0x21..=0x7e)
}

/// `obs-text`
#[inline]
#[must_use]
pub const fn is_obs_text(b: u8) -> bool {
    b >= 0x80
}

/// `tchar`
///
/// ```text
/// tchar = "!" / "#" / "$" / "%" / "&" / "'" / "*"
///       / "+" / "-" / "." / "^" / "_" / "`" / "|" / "~"
///       / DIGIT / ALPHA
/// ```
#[inline]
#[must_use]
pub const fn is_tchar(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'-'
                | b'.'
                | b'^'
                | b'_'
                | b'`'
                | b'|'
                | b'~'
        )
}

/// `qdtext = HTAB / SP / %x21 / %x23-5B / %x5D-7E / obs-text`
#[inline]
#[must_use]
pub const fn is_qdtext(b: u8) -> bool {
    matches!(b, HTAB | SP | 0x21 | 0x23..=0x5b | 0x5d..=0x7e) || is_obs_text(b)
}

/// The octet following the `\` of a `quoted-pair`:
/// `HTAB / SP / VCHAR / obs-text`.
#[inline]
#[must_use]
pub const fn is_quoted_pair_char(b: u8) -> bool {
    is_ws(b) || is_vchar(b) || is_obs_text(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tchar() {
        for b in b"abcXYZ019!#$%&'*+-.^_`|~" {
            assert!(is_tchar(*b), "{}", *b as char);
        }
        for b in b" \t\"(),/:;<=>?@[\\]{}" {
            assert!(!is_tchar(*b), "{}", *b as char);
        }
        assert!(!is_tchar(0x7f));
        assert!(!is_tchar(0x80));
    }

    #[test]
    fn test_qdtext() {
        assert!(is_qdtext(b' '));
        assert!(is_qdtext(b'\t'));
        assert!(is_qdtext(b'!'));
        assert!(is_qdtext(b'~'));
        assert!(is_qdtext(0xc3));
        assert!(!is_qdtext(b'"'));
        assert!(!is_qdtext(b'\\'));
        assert!(!is_qdtext(b'\r'));
        assert!(!is_qdtext(b'\n'));
        assert!(!is_qdtext(0x00));
        assert!(!is_qdtext(0x7f));
    }

    #[test]
    fn test_quoted_pair_char() {
        assert!(is_quoted_pair_char(b'"'));
        assert!(is_quoted_pair_char(b'\\'));
        assert!(is_quoted_pair_char(b' '));
        assert!(!is_quoted_pair_char(b'\n'));
        assert!(!is_quoted_pair_char(0x7f));
    }
}
