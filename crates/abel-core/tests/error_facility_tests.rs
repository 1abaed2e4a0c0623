use abel_core::errors::{AbelError, ExError, ExErrorKind};
use abel_core::model::{EntityKind, EntityOperationType};
use abel_core_types::RequestId;

#[test]
fn test_variant_conflict_verifiable_by_kind() {
    let err = AbelError::VariantConflict {
        bc_guid: "g1".to_string(),
        current_kind: EntityKind::Reporting,
        updated_kind: EntityKind::Virtual,
    };
    assert!(err.to_string().contains("g1"));

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::VariantConflict);
    assert_eq!(ex_err.code(), "ERR_VARIANT_CONFLICT");
    assert_eq!(ex_err.entity_id(), Some("g1"));
    assert_eq!(ex_err.op(), Some("determine_entity_operations"));
    assert!(ex_err.message().contains("reporting"));
}

#[test]
fn test_duplicate_guid_distinct_from_not_found() {
    let duplicate: ExError = AbelError::DuplicateGuid {
        bc_guid: "dup".to_string(),
    }
    .into();
    let missing: ExError = AbelError::EntityNotFound {
        bc_guid: "dup".to_string(),
    }
    .into();

    assert_eq!(duplicate.kind(), ExErrorKind::DuplicateGuid);
    assert_eq!(missing.kind(), ExErrorKind::NotFound);
    assert_ne!(duplicate.code(), missing.code());
}

#[test]
fn test_mask_errors_map_to_invalid_operation() {
    let empty: ExError = AbelError::EmptyUpdateMask {
        bc_guid: "g1".to_string(),
    }
    .into();
    let unexpected: ExError = AbelError::UnexpectedUpdateMask {
        bc_guid: "g1".to_string(),
        operation: EntityOperationType::Delete,
    }
    .into();

    assert_eq!(empty.kind(), ExErrorKind::InvalidOperation);
    assert_eq!(unexpected.kind(), ExErrorKind::InvalidOperation);
    assert!(unexpected.message().contains("DELETE"));
}

#[test]
fn test_invalid_config_structured_fields() {
    let ex_err: ExError = AbelError::InvalidConfig {
        reason: "threshold out of range".to_string(),
    }
    .into();

    assert_eq!(ex_err.code(), "ERR_INVALID_CONFIG");
    assert_eq!(ex_err.op(), Some("validate_config"));
    assert!(ex_err.message().contains("threshold out of range"));
}

#[test]
fn test_request_id_is_rendered() {
    let request_id = RequestId::from_string("run-42".to_string());
    let ex_err = ExError::new(ExErrorKind::Io)
        .with_op("snapshot_parse")
        .with_request_id(request_id);

    assert_eq!(ex_err.request_id().map(|r| r.as_str()), Some("run-42"));
    assert!(ex_err.to_string().contains("(request_id: run-42)"));
}

#[test]
fn test_error_kind_code_mapping() {
    // Each kind has a stable, unique code
    let kinds = vec![
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::DuplicateGuid, "ERR_DUPLICATE_GUID"),
        (ExErrorKind::InvalidOperation, "ERR_INVALID_OPERATION"),
        (ExErrorKind::InvalidConfig, "ERR_INVALID_CONFIG"),
        (ExErrorKind::VariantConflict, "ERR_VARIANT_CONFLICT"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        (ExErrorKind::Internal, "ERR_INTERNAL"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}
