use futures::executor::block_on;
use proptest::prelude::*;
use rust_decimal_macros::dec;

use crate::capital_accounts::*;
use crate::errors::{Error, StorageFailure};
use crate::funds::{FundService, FundServiceTrait, NewFund};
use crate::investors::{Investor, InvestorService, InvestorServiceTrait};
use crate::ledger::{DocType, InMemoryLedger};

struct Fixture {
    ledger: InMemoryLedger,
    funds: FundService<InMemoryLedger>,
    investors: InvestorService<InMemoryLedger>,
    accounts: CapitalAccountService<InMemoryLedger>,
}

fn fixture() -> Fixture {
    let ledger = InMemoryLedger::new();
    Fixture {
        funds: FundService::new(ledger.clone()),
        investors: InvestorService::new(ledger.clone()),
        accounts: CapitalAccountService::new(ledger.clone()),
        ledger,
    }
}

async fn seed_fund_and_investor(fx: &Fixture) -> Investor {
    fx.funds
        .create_fund(NewFund::new("fund-1", "Alpha", "2024-01-01"))
        .await
        .unwrap();
    fx.investors.create_investor("Alice").await.unwrap()
}

#[tokio::test]
async fn test_create_capital_account_takes_fund_number() {
    let fx = fixture();
    let alice = seed_fund_and_investor(&fx).await;

    let account = fx
        .accounts
        .create_capital_account("fund-1", &alice.id)
        .await
        .unwrap();
    assert_eq!(account.number, 0);
    assert_eq!(account.fund, "fund-1");
    assert_eq!(account.investor, alice.id);
    assert_eq!(account.deposits, dec!(0.0));
    assert_eq!(account.high_water_mark, HighWaterMark::default());

    let fund = fx.funds.get_fund("fund-1").unwrap().unwrap();
    assert_eq!(fund.next_investor_number, 1);

    let stored = fx.accounts.get_capital_account(&account.id).unwrap();
    assert_eq!(stored, Some(account));
}

#[tokio::test]
async fn test_accounts_are_numbered_in_creation_order() {
    let fx = fixture();
    let alice = seed_fund_and_investor(&fx).await;
    let bob = fx.investors.create_investor("Bob").await.unwrap();

    let first = fx
        .accounts
        .create_capital_account("fund-1", &alice.id)
        .await
        .unwrap();
    let second = fx
        .accounts
        .create_capital_account("fund-1", &bob.id)
        .await
        .unwrap();
    // An investor may hold more than one account in the same fund.
    let third = fx
        .accounts
        .create_capital_account("fund-1", &alice.id)
        .await
        .unwrap();

    assert_eq!(
        (first.number, second.number, third.number),
        (0, 1, 2)
    );

    let alice_accounts = fx
        .accounts
        .get_capital_accounts_by_investor("fund-1", &alice.id)
        .unwrap();
    assert_eq!(alice_accounts.len(), 2);
    assert_eq!(fx.accounts.get_capital_accounts_by_fund("fund-1").unwrap().len(), 3);
}

#[tokio::test]
async fn test_missing_fund_is_not_found_and_writes_nothing() {
    let fx = fixture();
    let alice = fx.investors.create_investor("Alice").await.unwrap();
    let keys_before = fx.ledger.len().unwrap();

    let err = fx
        .accounts
        .create_capital_account("no-such-fund", &alice.id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::NotFound { kind: DocType::Fund, ref id } if id == "no-such-fund"
    ));
    assert_eq!(fx.ledger.len().unwrap(), keys_before);
}

#[tokio::test]
async fn test_missing_investor_is_not_found_and_fund_unchanged() {
    let fx = fixture();
    seed_fund_and_investor(&fx).await;

    let err = fx
        .accounts
        .create_capital_account("fund-1", "ghost")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { kind: DocType::Investor, .. }));

    let fund = fx.funds.get_fund("fund-1").unwrap().unwrap();
    assert_eq!(fund.next_investor_number, 0);
    assert!(fx.accounts.get_capital_accounts_by_fund("fund-1").unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_fund_write_discards_account() {
    let fx = fixture();
    let alice = seed_fund_and_investor(&fx).await;
    fx.ledger.fail_writes_to("fund-1").unwrap();

    let err = fx
        .accounts
        .create_capital_account("fund-1", &alice.id)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Storage(StorageFailure::WriteFailed(_))));

    assert!(fx.accounts.get_capital_accounts_by_fund("fund-1").unwrap().is_empty());
    let fund = fx.funds.get_fund("fund-1").unwrap().unwrap();
    assert_eq!(fund.next_investor_number, 0);
}

#[tokio::test]
async fn test_create_action_without_references() {
    let fx = fixture();
    let action = fx
        .accounts
        .create_capital_account_action(NewCapitalAccountAction::new(
            "deposit",
            "1000.00",
            false,
            "2024-01-15",
            0,
        ))
        .await
        .unwrap();

    assert_eq!(action.action_type, CapitalActionType::Deposit);
    assert_eq!(action.status, TX_STATUS_SUBMITTED);
    assert_eq!(action.fund, None);
    assert_eq!(
        fx.accounts.get_capital_account_action(&action.id).unwrap(),
        Some(action)
    );
}

#[tokio::test]
async fn test_create_action_invalid_type_writes_nothing() {
    let fx = fixture();
    let err = fx
        .accounts
        .create_capital_account_action(NewCapitalAccountAction::new(
            "transfer",
            "10",
            false,
            "2024-01-15",
            0,
        ))
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(fx.ledger.is_empty().unwrap());
}

#[tokio::test]
async fn test_action_for_account_inherits_fund_and_leaves_balances() {
    let fx = fixture();
    let alice = seed_fund_and_investor(&fx).await;
    let account = fx
        .accounts
        .create_capital_account("fund-1", &alice.id)
        .await
        .unwrap();

    let action = fx
        .accounts
        .create_capital_account_action(
            NewCapitalAccountAction::new("withdrawal", "50", true, "2024-06-30", 2)
                .for_capital_account(account.id.clone()),
        )
        .await
        .unwrap();
    assert_eq!(action.fund.as_deref(), Some("fund-1"));

    let unchanged = fx.accounts.get_capital_account(&account.id).unwrap();
    assert_eq!(unchanged, Some(account.clone()));

    let by_fund = fx.accounts.get_capital_account_actions_by_fund("fund-1").unwrap();
    assert_eq!(by_fund, vec![action.clone()]);

    let in_period = fx
        .accounts
        .get_capital_account_actions_by_account_period("fund-1", &account.id, 2)
        .unwrap();
    assert_eq!(in_period, vec![action]);
    assert!(fx
        .accounts
        .get_capital_account_actions_by_account_period("fund-1", &account.id, 3)
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_action_references_must_exist() {
    let fx = fixture();

    let err = fx
        .accounts
        .create_capital_account_action(
            NewCapitalAccountAction::new("deposit", "5", false, "2024-01-01", 0)
                .for_capital_account("ghost-account"),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { kind: DocType::CapitalAccount, .. }));

    let err = fx
        .accounts
        .create_capital_account_action(
            NewCapitalAccountAction::new("deposit", "5", false, "2024-01-01", 0)
                .for_fund("ghost-fund"),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { kind: DocType::Fund, .. }));
    assert!(fx.ledger.is_empty().unwrap());
}

#[tokio::test]
async fn test_action_fund_must_match_account_fund() {
    let fx = fixture();
    let alice = seed_fund_and_investor(&fx).await;
    fx.funds
        .create_fund(NewFund::new("fund-2", "Beta", "2024-01-01"))
        .await
        .unwrap();
    let account = fx
        .accounts
        .create_capital_account("fund-1", &alice.id)
        .await
        .unwrap();

    let err = fx
        .accounts
        .create_capital_account_action(
            NewCapitalAccountAction::new("deposit", "5", false, "2024-01-01", 0)
                .for_fund("fund-2")
                .for_capital_account(account.id.clone()),
        )
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(fx
        .accounts
        .get_capital_account_actions_by_fund("fund-2")
        .unwrap()
        .is_empty());

    let action = fx
        .accounts
        .create_capital_account_action(
            NewCapitalAccountAction::new("deposit", "5", false, "2024-01-01", 0)
                .for_fund("fund-1")
                .for_capital_account(account.id.clone()),
        )
        .await
        .unwrap();
    assert_eq!(action.fund.as_deref(), Some("fund-1"));
}

#[tokio::test]
async fn test_account_lookups_do_not_return_actions() {
    let fx = fixture();
    let alice = seed_fund_and_investor(&fx).await;
    fx.accounts
        .create_capital_account("fund-1", &alice.id)
        .await
        .unwrap();
    fx.accounts
        .create_capital_account_action(
            NewCapitalAccountAction::new("deposit", "5", false, "2024-01-01", 0)
                .for_fund("fund-1"),
        )
        .await
        .unwrap();

    assert_eq!(fx.accounts.get_capital_accounts_by_fund("fund-1").unwrap().len(), 1);
    assert_eq!(
        fx.accounts
            .get_capital_account_actions_by_fund("fund-1")
            .unwrap()
            .len(),
        1
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_account_numbers_are_dense_and_ordered(n in 1usize..12) {
        let fx = fixture();
        let numbers = block_on(async {
            let alice = seed_fund_and_investor(&fx).await;
            let mut numbers = Vec::with_capacity(n);
            for _ in 0..n {
                let account = fx
                    .accounts
                    .create_capital_account("fund-1", &alice.id)
                    .await
                    .unwrap();
                numbers.push(account.number);
            }
            numbers
        });

        let expected: Vec<u32> = (0..n as u32).collect();
        prop_assert_eq!(numbers, expected);
        let fund = fx.funds.get_fund("fund-1").unwrap().unwrap();
        prop_assert_eq!(fund.next_investor_number as usize, n);
    }
}
