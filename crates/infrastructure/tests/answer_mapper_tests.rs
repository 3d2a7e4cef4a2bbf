use hickory_proto::op::Query;
use hickory_proto::rr::{DNSClass, Name, RData, RecordType};
use ledger_dns_domain::{AnswerData, AnswerEntry, DnsClass, DomainError};
use ledger_dns_infrastructure::dns::AnswerMapper;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::Arc;

fn entry(name: &str, type_code: u16, data: AnswerData) -> AnswerEntry {
    AnswerEntry {
        name: Arc::from(name),
        type_code,
        class: DnsClass::IN,
        ttl: 3600,
        data,
    }
}

#[test]
fn test_questions_keep_original_spelling_and_order() {
    let queries = vec![
        Query::query(Name::from_str("foo.test.").unwrap(), RecordType::TXT),
        Query::query(Name::from_str("bar.test.").unwrap(), RecordType::A),
    ];

    let query = AnswerMapper::to_query(&queries);

    assert_eq!(query.questions.len(), 2);
    assert_eq!(query.questions[0].name.as_ref(), "foo.test.");
    assert_eq!(query.questions[0].kind.as_ref(), "TXT");
    assert_eq!(query.questions[1].name.as_ref(), "bar.test.");
    assert_eq!(query.questions[1].kind.as_ref(), "A");
}

#[test]
fn test_address_entry_to_wire_record() {
    let record = AnswerMapper::to_hickory(&entry(
        "foo.test.",
        1,
        AnswerData::Address(Ipv4Addr::new(10, 0, 0, 5)),
    ))
    .unwrap();

    assert_eq!(record.name(), &Name::from_str("foo.test.").unwrap());
    assert_eq!(record.record_type(), RecordType::A);
    assert_eq!(record.dns_class(), DNSClass::IN);
    assert_eq!(record.ttl(), 3600);
    assert_eq!(
        record.data(),
        &RData::A(hickory_proto::rr::rdata::A(Ipv4Addr::new(10, 0, 0, 5)))
    );
}

#[test]
fn test_text_entry_to_wire_record() {
    let record = AnswerMapper::to_hickory(&entry(
        "foo.test.",
        16,
        AnswerData::Text(vec![Arc::from("hello")]),
    ))
    .unwrap();

    assert_eq!(record.record_type(), RecordType::TXT);
    match record.data() {
        RData::TXT(txt) => assert_eq!(&*txt.txt_data()[0], b"hello"),
        other => panic!("expected TXT, got {:?}", other),
    }
}

#[test]
fn test_unencodable_name_is_rejected() {
    let label = "a".repeat(70);
    let result = AnswerMapper::to_hickory(&entry(
        &format!("{}.test.", label),
        1,
        AnswerData::Address(Ipv4Addr::LOCALHOST),
    ));

    assert!(matches!(result, Err(DomainError::InvalidDomainName(_))));
}
