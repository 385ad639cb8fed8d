use ltikit_core::errors::{ExError, ExErrorKind, LtiKitError};

#[test]
fn test_malformed_descriptor_verifiable_by_kind() {
    let ex_err: ExError = LtiKitError::MalformedDescriptor.into();

    assert_eq!(ex_err.kind(), ExErrorKind::MalformedDescriptor);
    assert_eq!(ex_err.code(), "ERR_MALFORMED_DESCRIPTOR");
    assert!(ex_err.message().contains("cartridge_basiclti_link"));
}

#[test]
fn test_missing_title_distinct_from_malformed() {
    let ex_err: ExError = LtiKitError::MissingTitle.into();

    assert_eq!(ex_err.kind(), ExErrorKind::MissingTitle);
    assert_eq!(ex_err.code(), "ERR_MISSING_TITLE");
    assert_ne!(ex_err.kind(), ExErrorKind::MalformedDescriptor);
}

#[test]
fn test_fetch_kinds_carry_location_as_entity() {
    let cases = vec![
        (
            LtiKitError::Fetch {
                location: "https://a.example/x.xml".to_string(),
                reason: "connection refused".to_string(),
            },
            ExErrorKind::Fetch,
        ),
        (
            LtiKitError::Timeout {
                location: "https://a.example/x.xml".to_string(),
            },
            ExErrorKind::Timeout,
        ),
        (
            LtiKitError::RedirectRejected {
                location: "https://a.example/x.xml".to_string(),
                status: 302,
            },
            ExErrorKind::RedirectRejected,
        ),
    ];

    for (err, kind) in cases {
        let ex_err: ExError = err.into();
        assert_eq!(ex_err.kind(), kind);
        assert!(ex_err.kind().is_fetch_failure());
        assert_eq!(ex_err.entity_id(), Some("https://a.example/x.xml"));
    }
}

#[test]
fn test_parse_failures_are_not_fetch_failures() {
    for kind in [
        ExErrorKind::MalformedDescriptor,
        ExErrorKind::MissingTitle,
        ExErrorKind::InvalidXml,
    ] {
        assert!(!kind.is_fetch_failure());
    }
}

#[test]
fn test_redirect_message_includes_status() {
    let err = LtiKitError::RedirectRejected {
        location: "https://a.example".to_string(),
        status: 301,
    };
    assert!(err.to_string().contains("301"));
}

#[test]
fn test_error_kind_code_mapping() {
    // Each kind has a stable, unique code
    let kinds = vec![
        (ExErrorKind::MalformedDescriptor, "ERR_MALFORMED_DESCRIPTOR"),
        (ExErrorKind::MissingTitle, "ERR_MISSING_TITLE"),
        (ExErrorKind::InvalidXml, "ERR_INVALID_XML"),
        (ExErrorKind::InvalidRecord, "ERR_INVALID_RECORD"),
        (ExErrorKind::Fetch, "ERR_FETCH"),
        (ExErrorKind::Timeout, "ERR_TIMEOUT"),
        (ExErrorKind::RedirectRejected, "ERR_REDIRECT"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
    ];

    let mut seen = std::collections::BTreeSet::new();
    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
        assert!(seen.insert(expected_code), "duplicate code {}", expected_code);
    }
}

#[test]
fn test_invalid_record_conversion() {
    let err = LtiKitError::InvalidRecord {
        reason: "`id` is required".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidRecord);
    assert!(ex_err.message().contains("`id` is required"));
}

#[test]
fn test_serde_error_becomes_serialization() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: LtiKitError = json_err.into();
    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::Serialization);
}

#[test]
fn test_ex_error_builder_pattern() {
    let ex_err = ExError::new(ExErrorKind::Fetch)
        .with_op("import_descriptor")
        .with_entity_id("https://tool.example/config.xml")
        .with_message("server returned 500");

    assert_eq!(ex_err.kind(), ExErrorKind::Fetch);
    assert_eq!(ex_err.op(), Some("import_descriptor"));
    assert_eq!(ex_err.entity_id(), Some("https://tool.example/config.xml"));
    assert!(ex_err.message().contains("500"));
}

#[test]
fn test_ex_error_source_chain() {
    let cause: ExError = LtiKitError::MissingTitle.into();
    let ex_err = ExError::new(ExErrorKind::Fetch)
        .with_op("import_descriptor")
        .with_source(cause);

    assert_eq!(
        ex_err.source_error().map(ExError::kind),
        Some(ExErrorKind::MissingTitle)
    );
    assert!(std::error::Error::source(&ex_err).is_some());
}

#[test]
fn test_ex_error_display() {
    let ex_err = ExError::new(ExErrorKind::Timeout)
        .with_op("fetch")
        .with_entity_id("https://slow.example")
        .with_message("timed out after 10s");

    let display = ex_err.to_string();
    assert!(display.contains("ERR_TIMEOUT"));
    assert!(display.contains("fetch"));
    assert!(display.contains("https://slow.example"));
}
