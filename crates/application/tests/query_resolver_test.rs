mod helpers;

use helpers::MockRecordRepository;
use ledger_dns_application::services::QueryResolver;
use ledger_dns_domain::DomainError;
use std::sync::Arc;

fn resolver_with(repo: &MockRecordRepository) -> QueryResolver {
    QueryResolver::new(Arc::new(repo.clone()))
}

#[tokio::test]
async fn test_resolve_strips_trailing_dot_before_lookup() {
    let repo = MockRecordRepository::with_records(&[("example.com", "A", "192.0.2.1")]);
    let resolver = resolver_with(&repo);

    let records = resolver.resolve("example.com.", "A").await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(repo.lookups(), vec![("example.com".to_string(), "A".to_string())]);
}

#[tokio::test]
async fn test_resolve_terminated_and_bare_names_match_same_records() {
    let repo = MockRecordRepository::with_records(&[
        ("example.com", "TXT", "one"),
        ("example.com", "TXT", "two"),
        ("other.com", "TXT", "three"),
    ]);
    let resolver = resolver_with(&repo);

    let terminated = resolver.resolve("example.com.", "TXT").await.unwrap();
    let bare = resolver.resolve("example.com", "TXT").await.unwrap();

    assert_eq!(terminated, bare);
    assert_eq!(bare.len(), 2);
}

#[tokio::test]
async fn test_resolve_strips_at_most_one_dot() {
    let repo = MockRecordRepository::with_records(&[("example.com", "A", "192.0.2.1")]);
    let resolver = resolver_with(&repo);

    let records = resolver.resolve("example.com..", "A").await.unwrap();

    assert!(records.is_empty());
    assert_eq!(repo.lookups()[0].0, "example.com.");
}

#[tokio::test]
async fn test_resolve_unknown_kind_yields_no_matches() {
    let repo = MockRecordRepository::with_records(&[("example.com", "A", "192.0.2.1")]);
    let resolver = resolver_with(&repo);

    let records = resolver
        .resolve("example.com", "TXT-nonexistent-kind")
        .await
        .unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_resolve_preserves_store_order() {
    let repo = MockRecordRepository::with_records(&[
        ("multi.test", "A", "10.0.0.2"),
        ("multi.test", "A", "10.0.0.1"),
    ]);
    let resolver = resolver_with(&repo);

    let records = resolver.resolve("multi.test", "A").await.unwrap();

    let values: Vec<&str> = records.iter().map(|r| r.value.as_ref()).collect();
    assert_eq!(values, vec!["10.0.0.2", "10.0.0.1"]);
}

#[tokio::test]
async fn test_resolve_store_failure_is_store_unavailable() {
    let repo = MockRecordRepository::new();
    repo.set_should_fail(true);
    let resolver = resolver_with(&repo);

    let result = resolver.resolve("example.com", "A").await;

    assert!(matches!(result, Err(DomainError::StoreUnavailable(_))));
}
