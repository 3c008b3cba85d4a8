use std::net::Ipv6Addr;

use crate::rules::{HTAB, SP, is_digit, is_tchar, is_ws};

/// The bytes of `input` starting at `start`,
/// empty if `start` is out of range or not on a char boundary.
#[inline]
pub(crate) fn tail(input: &str, start: usize) -> &[u8] {
    input.get(start..).map(str::as_bytes).unwrap_or_default()
}

/// Length of the whitespace run (`SP` / `HTAB`) found at `start`.
///
/// Obsolete line folding (`CRLF` followed by at least one `SP` or `HTAB`)
/// is consumed as part of the run, a lone `CRLF` is not.
///
/// ```
/// use http_warning_grammar::whitespace_len;
///
/// assert_eq!(whitespace_len("a  \tb", 1), 3);
/// assert_eq!(whitespace_len("a\r\n b", 1), 3);
/// assert_eq!(whitespace_len("a\r\nb", 1), 0);
/// ```
#[must_use]
pub fn whitespace_len(input: &str, start: usize) -> usize {
    let bytes = tail(input, start);
    let mut i = 0;
    loop {
        match bytes.get(i..) {
            Some([b, ..]) if is_ws(*b) => i += 1,
            Some([b'\r', b'\n', SP | HTAB, ..]) => i += 3,
            _ => return i,
        }
    }
}

/// Length of the run of ASCII digits found at `start`.
#[must_use]
pub fn number_len(input: &str, start: usize) -> usize {
    tail(input, start)
        .iter()
        .take_while(|b| is_digit(**b))
        .count()
}

/// Length of the `token` (`1*tchar`) found at `start`.
#[must_use]
pub fn token_len(input: &str, start: usize) -> usize {
    tail(input, start)
        .iter()
        .take_while(|b| is_tchar(**b))
        .count()
}

/// Length of the `host` or `token` found at `start`.
///
/// The candidate runs up to the first `SP`, `HTAB`, `CR` or `,`.
/// It is accepted when it is a `token`, or otherwise a valid `host`:
/// a registered name or a bracketed IPv6 literal, both with an optional port.
/// A candidate containing a `/` never matches.
///
/// ```
/// use http_warning_grammar::host_or_token_len;
///
/// assert_eq!(host_or_token_len("fred \"x\"", 0), 4);
/// assert_eq!(host_or_token_len("proxy.example.com:8080 ", 0), 22);
/// assert_eq!(host_or_token_len("[::1]:80,", 0), 8);
/// assert_eq!(host_or_token_len("a/b ", 0), 0);
/// ```
#[must_use]
pub fn host_or_token_len(input: &str, start: usize) -> usize {
    let bytes = tail(input, start);

    let mut len = 0;
    let mut is_token = true;
    for b in bytes {
        match *b {
            b'/' => return 0,
            SP | HTAB | b'\r' | b',' => break,
            b => is_token = is_token && is_tchar(b),
        }
        len += 1;
    }

    if len == 0 {
        return 0;
    }

    if is_token || is_valid_host(&bytes[..len]) {
        len
    } else {
        0
    }
}

/// The maximum length of a domain label.
const MAX_LABEL_LEN: usize = 63;

/// The maximum length of a domain name.
const MAX_NAME_LEN: usize = 253;

fn is_valid_host(host: &[u8]) -> bool {
    if let Some(rest) = host.strip_prefix(b"[") {
        let Some(end) = rest.iter().position(|b| *b == b']') else {
            return false;
        };
        let (addr, port) = rest.split_at(end);
        return is_valid_ipv6(addr) && is_valid_opt_port(&port[1..]);
    }

    let (name, port) = match host.iter().position(|b| *b == b':') {
        Some(idx) => host.split_at(idx),
        None => (host, &[][..]),
    };
    is_valid_name(name) && is_valid_opt_port(port)
}

fn is_valid_ipv6(addr: &[u8]) -> bool {
    std::str::from_utf8(addr)
        .ok()
        .and_then(|s| s.parse::<Ipv6Addr>().ok())
        .is_some()
}

fn is_valid_opt_port(port: &[u8]) -> bool {
    match port {
        [] => true,
        [b':', digits @ ..] => {
            !digits.is_empty()
                && digits.len() <= 5
                && digits.iter().all(|b| is_digit(*b))
                && std::str::from_utf8(digits)
                    .ok()
                    .and_then(|s| s.parse::<u16>().ok())
                    .is_some()
        }
        _ => false,
    }
}

fn is_valid_label(label: &[u8]) -> bool {
    match label {
        [] | [b'-', ..] | [.., b'-'] => false,
        _ => {
            label.len() <= MAX_LABEL_LEN
                && label
                    .iter()
                    .all(|c| c.is_ascii_alphanumeric() || *c == b'_' || *c == b'-')
        }
    }
}

fn is_valid_name(name: &[u8]) -> bool {
    let name = name.strip_suffix(b".").unwrap_or(name);
    !name.is_empty() && name.len() <= MAX_NAME_LEN && name.split(|b| *b == b'.').all(is_valid_label)
}
