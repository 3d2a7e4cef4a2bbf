use ledger_dns_domain::{normalize_name, NewRecord, RecordKind};

mod helpers;
use helpers::RecordBuilder;

#[test]
fn test_record_creation() {
    let record = RecordBuilder::new()
        .id(7)
        .name("foo.test")
        .kind("TXT")
        .value("hello")
        .build();

    assert_eq!(record.id, 7);
    assert_eq!(record.name.as_ref(), "foo.test");
    assert_eq!(record.kind.as_ref(), "TXT");
    assert_eq!(record.value.as_ref(), "hello");
}

#[test]
fn test_normalize_name_strips_single_trailing_dot() {
    assert_eq!(normalize_name("example.com."), "example.com");
    assert_eq!(normalize_name("example.com"), "example.com");
    assert_eq!(normalize_name("example.com.."), "example.com.");
    assert_eq!(normalize_name("."), "");
}

#[test]
fn test_normalize_name_is_idempotent_for_terminated_and_bare_names() {
    let bare = "foo.test";
    let terminated = "foo.test.";
    assert_eq!(normalize_name(bare), normalize_name(terminated));
}

#[test]
fn test_record_kind_tags() {
    assert_eq!(RecordKind::from_tag("A"), Some(RecordKind::A));
    assert_eq!(RecordKind::from_tag("TXT"), Some(RecordKind::TXT));
    assert_eq!(RecordKind::from_tag("AAAA"), None);
    assert_eq!(RecordKind::from_tag("TXT-nonexistent-kind"), None);
    assert_eq!(RecordKind::from_tag("a"), None);
}

#[test]
fn test_record_kind_type_codes() {
    assert_eq!(RecordKind::A.to_u16(), 1);
    assert_eq!(RecordKind::TXT.to_u16(), 16);
    assert_eq!(RecordKind::from_u16(16), Some(RecordKind::TXT));
    assert_eq!(RecordKind::from_u16(28), None);

    for kind in RecordKind::ALL {
        assert_eq!(RecordKind::from_u16(kind.to_u16()), Some(kind));
        assert_eq!(kind.as_str().parse::<RecordKind>(), Ok(kind));
    }
}

#[test]
fn test_new_record_normalized() {
    let record = NewRecord::new("  Foo.Test. ", "txt", " spaced value ").normalized();

    assert_eq!(record.name.as_ref(), "Foo.Test");
    assert_eq!(record.kind.as_ref(), "TXT");
    assert_eq!(record.value.as_ref(), " spaced value ");
}

#[test]
fn test_new_record_validation() {
    assert!(NewRecord::validate_name("foo.test").is_ok());
    assert!(NewRecord::validate_name("   ").is_err());
    assert!(NewRecord::validate_name(&"a".repeat(254)).is_err());

    assert!(NewRecord::validate_kind("A").is_ok());
    assert!(NewRecord::validate_kind("TXT-nonexistent-kind").is_ok());
    assert!(NewRecord::validate_kind("").is_err());
    assert!(NewRecord::validate_kind("A B").is_err());
}

#[test]
fn test_new_record_into_record_keeps_fields() {
    let record = RecordBuilder::new().name("bar.test").build_new().into_record(42);

    assert_eq!(record.id, 42);
    assert_eq!(record.name.as_ref(), "bar.test");
    assert_eq!(record.kind.as_ref(), "A");
}
