use super::*;

#[test]
fn parse_uuid_body_extracts_identifier() {
    assert_eq!(parse_uuid_body(r#"{"uuid":"abc123"}"#), Ok("abc123".to_owned()));
}

#[test]
fn parse_uuid_body_defaults_missing_or_empty_to_unknown() {
    assert_eq!(parse_uuid_body("{}"), Ok("unknown".to_owned()));
    assert_eq!(parse_uuid_body(r#"{"uuid":""}"#), Ok("unknown".to_owned()));
    assert_eq!(parse_uuid_body(r#"{"uuid":null}"#), Ok("unknown".to_owned()));
}

#[test]
fn parse_uuid_body_rejects_non_json() {
    assert!(matches!(parse_uuid_body("<html>"), Err(ApiError::Decode(_))));
}

#[test]
fn identifier_or_unknown_passes_success_through() {
    assert_eq!(identifier_or_unknown(Ok("abc123".to_owned())), "abc123");
}

#[test]
fn identifier_or_unknown_falls_back_on_any_error() {
    let failures = [
        ApiError::Network("connection refused".to_owned()),
        ApiError::Status {
            endpoint: UUID_ENDPOINT,
            status: 500,
        },
        ApiError::Decode("expected value".to_owned()),
        ApiError::Unavailable,
    ];
    for err in failures {
        assert_eq!(identifier_or_unknown(Err(err)), UNKNOWN_IDENTIFIER);
    }
}

#[test]
fn status_error_names_endpoint() {
    let err = ApiError::Status {
        endpoint: UUID_ENDPOINT,
        status: 404,
    };
    assert_eq!(err.to_string(), "/api/uuid returned status 404");
}

#[test]
fn parse_version_body_reads_both_fields() {
    let info = parse_version_body(r#"{"version":"v1.4.0","commit":"0123456"}"#).unwrap();
    assert_eq!(info.version, "v1.4.0");
    assert_eq!(info.commit, "0123456");
}

#[test]
fn version_label_shortens_commit_and_drops_empty_parts() {
    let full = VersionInfo {
        version: "v1.4.0".to_owned(),
        commit: "0123456789abcdef".to_owned(),
    };
    assert_eq!(full.label(), "v1.4.0 (0123456)");

    let dev = VersionInfo {
        version: "dev".to_owned(),
        commit: String::new(),
    };
    assert_eq!(dev.label(), "dev");

    assert_eq!(VersionInfo::default().label(), "");
}

#[cfg(not(feature = "csr"))]
#[test]
fn fetch_helpers_are_unavailable_natively() {
    assert_eq!(futures::executor::block_on(fetch_uuid()), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(fetch_version()), Err(ApiError::Unavailable));
}
