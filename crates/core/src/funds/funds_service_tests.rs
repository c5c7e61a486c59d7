use crate::errors::Error;
use crate::funds::{Fund, FundService, FundServiceTrait, NewFund};
use crate::investors::{InvestorService, InvestorServiceTrait};
use crate::ledger::{InMemoryLedger, LedgerTransactionExecutor};

fn setup() -> (InMemoryLedger, FundService<InMemoryLedger>) {
    let ledger = InMemoryLedger::new();
    let service = FundService::new(ledger.clone());
    (ledger, service)
}

#[tokio::test]
async fn test_create_fund_writes_zeroed_fund() {
    let (_ledger, service) = setup();

    let created = service
        .create_fund(NewFund::new("fund-1", "Alpha", "2024-01-01"))
        .await
        .unwrap();
    assert_eq!(created, Fund::new("fund-1", "Alpha", "2024-01-01"));
    assert_eq!(created.next_investor_number, 0);
    assert!(!created.period_updated);

    let stored = service.get_fund("fund-1").unwrap().unwrap();
    assert_eq!(stored, created);
}

#[tokio::test]
async fn test_create_fund_twice_fails_and_keeps_original() {
    let (_ledger, service) = setup();
    service
        .create_fund(NewFund::new("fund-1", "A", "2024-01-01"))
        .await
        .unwrap();

    let err = service
        .create_fund(NewFund::new("fund-1", "B", "2024-01-01"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::AlreadyExists(ref id) if id == "fund-1"));

    let stored = service.get_fund("fund-1").unwrap().unwrap();
    assert_eq!(stored.name, "A");
    assert_eq!(stored.inception_date, "2024-01-01");
}

#[tokio::test]
async fn test_create_fund_blocked_by_any_existing_value() {
    let (ledger, service) = setup();
    ledger.insert_raw("occupied", b"opaque bytes").unwrap();

    let err = service
        .create_fund(NewFund::new("occupied", "Alpha", "2024-01-01"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::AlreadyExists(_)));
    assert_eq!(ledger.raw("occupied").unwrap(), Some(b"opaque bytes".to_vec()));
}

#[tokio::test]
async fn test_create_fund_blocked_by_other_entity_kind() {
    let (ledger, service) = setup();
    let investor = InvestorService::new(ledger.clone())
        .create_investor("Alice")
        .await
        .unwrap();

    let err = service
        .create_fund(NewFund::new(investor.id.clone(), "Alpha", "2024-01-01"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::AlreadyExists(_)));
    // The key does not identify a fund.
    assert!(service.get_fund(&investor.id).unwrap().is_none());
}

#[tokio::test]
async fn test_create_fund_rejects_blank_id() {
    let (ledger, service) = setup();
    let err = service
        .create_fund(NewFund::new("", "Alpha", "2024-01-01"))
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(ledger.is_empty().unwrap());
}

#[tokio::test]
async fn test_get_fund_by_name() {
    let (_ledger, service) = setup();
    service
        .create_fund(NewFund::new("fund-1", "Alpha", "2024-01-01"))
        .await
        .unwrap();
    service
        .create_fund(NewFund::new("fund-2", "Beta", "2024-02-01"))
        .await
        .unwrap();

    let beta = service.get_fund_by_name("Beta").unwrap().unwrap();
    assert_eq!(beta.id, "fund-2");
    assert!(service.get_fund_by_name("Gamma").unwrap().is_none());
}

#[tokio::test]
async fn test_lookups_are_idempotent_and_side_effect_free() {
    let (ledger, service) = setup();
    service
        .create_fund(NewFund::new("fund-1", "Alpha", "2024-01-01"))
        .await
        .unwrap();
    let before = ledger.raw("fund-1").unwrap();

    let first = service.get_fund("fund-1").unwrap();
    let second = service.get_fund("fund-1").unwrap();
    assert_eq!(first, second);
    assert!(service.get_fund("missing").unwrap().is_none());
    assert_eq!(ledger.raw("fund-1").unwrap(), before);
    assert_eq!(ledger.len().unwrap(), 1);
}

#[tokio::test]
async fn test_undecodable_fund_document_is_storage_failure() {
    let (ledger, service) = setup();
    ledger
        .insert_raw("fund-x", br#"{"docType":"fund","id":"fund-x"}"#)
        .unwrap();

    let err = service.get_fund("fund-x").unwrap_err();
    assert!(err.is_storage_failure());

    // The raw read path still sees the value.
    let raw = ledger.read(|state| state.get_state("fund-x")).unwrap();
    assert!(raw.is_some());
}
