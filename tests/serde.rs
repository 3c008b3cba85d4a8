use http_warning::{HttpDate, WarningCode, WarningValue};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct CachedResponse {
    code: WarningCode,
    warnings: Vec<WarningValue>,
    date: Option<HttpDate>,
}

#[test]
fn warning_value_is_a_string() {
    let value = WarningValue::try_new(199, "fred", r#"say "hi""#).unwrap();
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#""199 fred \"say \\\"hi\\\"\"""#);
    assert_eq!(serde_json::from_str::<WarningValue>(&json).unwrap(), value);
}

#[test]
fn invalid_values_fail_to_deserialize() {
    for json in [r#""""#, r#""1000 fred \"x\"""#, r#""199 fred x""#, "199"] {
        assert!(serde_json::from_str::<WarningValue>(json).is_err(), "{json}");
    }
    for json in ["1000", "-1", r#""110""#] {
        assert!(serde_json::from_str::<WarningCode>(json).is_err(), "{json}");
    }
}

#[test]
fn nested_document() {
    let json = r#"{
        "code": 110,
        "warnings": [
            "110 cache \"Response is Stale\"",
            "299 Proxy:8080 \"x\" \"Sun, 06 Nov 1994 08:49:37 GMT\""
        ],
        "date": "Sun, 06 Nov 1994 08:49:37 GMT"
    }"#;
    let doc: CachedResponse = serde_json::from_str(json).unwrap();
    assert_eq!(doc.code, WarningCode::RESPONSE_IS_STALE);
    assert_eq!(doc.warnings.len(), 2);
    assert_eq!(doc.warnings[1].agent(), "Proxy:8080");
    assert_eq!(doc.warnings[1].date(), doc.date);

    let json = serde_json::to_string(&doc).unwrap();
    assert_eq!(serde_json::from_str::<CachedResponse>(&json).unwrap(), doc);
}
