#![no_main]

use http_warning::WarningValue;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: String| {
    let Some((value, len)) = WarningValue::scan(&input, 0) else {
        return;
    };
    assert!(len > 0 && len <= input.len());

    let canonical = value.to_string();
    let parsed = WarningValue::parse(&canonical).ok();
    assert_eq!(parsed.as_ref(), Some(&value));
    assert_eq!(parsed.map(|v| v.to_string()), Some(canonical));
});
