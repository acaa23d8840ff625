//! Integration tests for consolebank-core sessions
//!
//! These tests drive the full menu state machine through the `Console` port
//! with a scripted console, so no terminal is involved.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use rust_decimal::Decimal;

use consolebank_core::adapters::scripted::ScriptedConsole;
use consolebank_core::config::Config;
use consolebank_core::services::{Dispatcher, EntryPoint, SessionState};
use consolebank_core::{AccountId, BankContext, Output, TransactionKind};

// ============================================================================
// Test Helpers
// ============================================================================

fn create_test_context() -> BankContext {
    BankContext::new(Config::default(), EntryPoint::Scripted)
}

/// Run a whole session over the given input lines
fn run_script(ctx: &mut BankContext, lines: &[&str]) -> ScriptedConsole {
    let mut console = ScriptedConsole::new(lines.iter().copied());
    ctx.run_session(&mut console).expect("session failed");
    console
}

/// Lines that register alice/secret and log in
const LOGIN_ALICE: [&str; 6] = ["1", "alice", "secret", "2", "alice", "secret"];

fn with_login(rest: &[&'static str]) -> Vec<&'static str> {
    let mut lines = LOGIN_ALICE.to_vec();
    lines.extend_from_slice(rest);
    lines
}

fn balances(console: &ScriptedConsole) -> Vec<Decimal> {
    console
        .outputs()
        .iter()
        .filter_map(|o| match o {
            Output::Balance { balance, .. } => Some(*balance),
            _ => None,
        })
        .collect()
}

// ============================================================================
// End-to-end scenario
// ============================================================================

#[test]
fn test_full_banking_scenario() {
    let mut ctx = create_test_context();
    let console = run_script(
        &mut ctx,
        &[
            "1", "alice", "secret", // register
            "2", "alice", "wrong", // bad login
            "2", "alice", "secret", // login
            "1", "Alice", "Savings", "1000", // open account
            "2", "100000", "500", // deposit
            "3", "100000", "2000", // withdraw too much
            "4", "100000", // balance
            "6", "100000", // interest
            "4", "100000", // balance
            "5", "100000", // statement
            "7", // logout
            "3", // exit
        ],
    );

    assert_eq!(console.remaining(), 0);
    assert!(console.successes().contains(&"User registered successfully."));
    assert!(console
        .successes()
        .contains(&"Account opened successfully. Account Number: 100000"));
    assert!(console.successes().contains(&"Deposit successful."));
    assert!(console.successes().contains(&"Monthly interest of 15.00 added."));

    let errors = console.errors();
    assert!(errors.contains(&"Invalid credentials"));
    assert!(errors.contains(&"Insufficient funds: available 1500, requested 2000"));

    assert_eq!(
        balances(&console),
        vec![Decimal::new(1500, 0), Decimal::new(151500, 2)]
    );

    let statement = console
        .outputs()
        .iter()
        .find_map(|o| match o {
            Output::Statement(s) => Some(s.clone()),
            _ => None,
        })
        .expect("statement was printed");
    let kinds: Vec<_> = statement.transactions.iter().map(|t| t.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            TransactionKind::InitialDeposit,
            TransactionKind::Deposit,
            TransactionKind::Interest
        ]
    );
    assert_eq!(statement.balance, Decimal::new(151500, 2));
    assert_eq!(statement.signed_total(), statement.balance);
}

#[test]
fn test_wrong_password_is_authentication_failure() {
    let mut ctx = create_test_context();
    let console = run_script(&mut ctx, &["1", "alice", "secret", "2", "alice", "nope", "3"]);

    assert_eq!(console.errors(), vec!["Invalid credentials"]);
    let errors = ctx.logger.get_errors(10);
    assert_eq!(errors[0].error_kind.as_deref(), Some("authentication_failed"));
}

// ============================================================================
// Menu handling
// ============================================================================

#[test]
fn test_invalid_main_menu_choice_redisplays_menu() {
    let mut ctx = create_test_context();
    let console = run_script(&mut ctx, &["9", "3"]);

    assert_eq!(console.errors(), vec!["Invalid option: \"9\""]);
    let menus = console
        .outputs()
        .iter()
        .filter(|o| matches!(o, Output::Menu(_)))
        .count();
    assert_eq!(menus, 2);
}

#[test]
fn test_invalid_user_menu_choice_stays_logged_in() {
    let mut ctx = create_test_context();
    let mut console = ScriptedConsole::new(with_login(&["8"]));
    let mut dispatcher = Dispatcher::new(&mut ctx, &mut console);

    dispatcher.step().unwrap(); // register
    let state = dispatcher.step().unwrap(); // login
    assert!(matches!(state, SessionState::UserMenu(_)));
    let state = dispatcher.step().unwrap(); // "8"
    assert!(matches!(state, SessionState::UserMenu(_)));
    let state = dispatcher.step().unwrap(); // end of input
    assert_eq!(state, SessionState::Exited);
}

#[test]
fn test_logout_returns_to_main_menu() {
    let mut ctx = create_test_context();
    let mut console = ScriptedConsole::new(with_login(&["7"]));
    let mut dispatcher = Dispatcher::new(&mut ctx, &mut console);

    dispatcher.step().unwrap();
    dispatcher.step().unwrap();
    assert_eq!(dispatcher.step().unwrap(), SessionState::MainMenu);
}

#[test]
fn test_end_of_input_ends_session_cleanly() {
    let mut ctx = create_test_context();
    // Input stops in the middle of opening an account
    let console = run_script(&mut ctx, &with_login(&["1", "Alice"]));

    assert_eq!(console.remaining(), 0);
    assert!(ctx.directory.accounts(ctx.directory.login("alice", "secret").unwrap()).is_empty());
    let last = ctx.logger.entries().last().unwrap();
    assert_eq!(last.event, "session_ended");
}

// ============================================================================
// Input validation
// ============================================================================

#[test]
fn test_malformed_numbers_are_reprompted() {
    let mut ctx = create_test_context();
    let console = run_script(
        &mut ctx,
        &with_login(&[
            "1", "Alice", "Savings", "a lot", "100", // bad initial deposit
            "2", "acct", "100000", "ten", "50", // bad account number and amount
            "4", "100000", "7", "3",
        ]),
    );

    assert_eq!(
        console.errors(),
        vec![
            "Not a valid number: \"a lot\"",
            "Not a valid number: \"acct\"",
            "Not a valid number: \"ten\""
        ]
    );
    assert_eq!(balances(&console), vec![Decimal::new(150, 0)]);
    let reprompts = console
        .prompts()
        .iter()
        .filter(|p| p.as_str() == "Enter Initial Deposit")
        .count();
    assert_eq!(reprompts, 2);
}

#[test]
fn test_invalid_account_type_is_reprompted() {
    let mut ctx = create_test_context();
    let console = run_script(
        &mut ctx,
        &with_login(&["1", "Alice", "Business", "checking", "0", "7", "3"]),
    );

    assert_eq!(
        console.errors(),
        vec!["Invalid account type: \"Business\" (expected Savings or Checking)"]
    );
    assert!(console
        .successes()
        .contains(&"Account opened successfully. Account Number: 100000"));
}

#[test]
fn test_non_positive_deposit_is_rejected() {
    let mut ctx = create_test_context();
    let console = run_script(
        &mut ctx,
        &with_login(&["1", "Alice", "Checking", "100", "2", "100000", "0", "4", "100000"]),
    );

    assert_eq!(console.errors(), vec!["Invalid amount: must be greater than zero"]);
    assert_eq!(balances(&console), vec![Decimal::new(100, 0)]);
}

#[test]
fn test_unknown_account_aborts_action() {
    let mut ctx = create_test_context();
    let console = run_script(&mut ctx, &with_login(&["2", "999999", "7", "3"]));

    assert_eq!(console.errors(), vec!["Account not found: 999999"]);
    assert!(!console
        .prompts()
        .iter()
        .any(|p| p == "Enter amount to deposit"));
}

#[test]
fn test_accounts_of_other_users_are_not_visible() {
    let mut ctx = create_test_context();
    run_script(
        &mut ctx,
        &with_login(&["1", "Alice", "Savings", "100", "7", "3"]),
    );

    let console = run_script(
        &mut ctx,
        &["1", "bob", "pw", "2", "bob", "pw", "3", "100000", "7", "3"],
    );
    assert_eq!(console.errors(), vec!["Account not found: 100000"]);
}

#[test]
fn test_duplicate_registration_is_rejected() {
    let mut ctx = create_test_context();
    let console = run_script(&mut ctx, &["1", "alice", "a", "1", "alice", "b", "3"]);

    assert_eq!(console.errors(), vec!["Username already taken: alice"]);
    assert_eq!(ctx.directory.user_count(), 1);
}

// ============================================================================
// Interest and ids
// ============================================================================

#[test]
fn test_interest_on_checking_is_skipped() {
    let mut ctx = create_test_context();
    let console = run_script(
        &mut ctx,
        &with_login(&["1", "Alice", "Checking", "1000", "6", "100000", "4", "100000"]),
    );

    assert!(console.outputs().iter().any(|o| matches!(
        o,
        Output::Warning(msg) if msg == "Monthly interest applies to Savings accounts only."
    )));
    assert_eq!(balances(&console), vec![Decimal::new(1000, 0)]);
}

#[test]
fn test_account_ids_increase_across_sessions() {
    let mut ctx = create_test_context();
    run_script(
        &mut ctx,
        &with_login(&["1", "A", "Savings", "1", "1", "A", "Checking", "1", "7", "3"]),
    );
    let console = run_script(
        &mut ctx,
        &["2", "alice", "secret", "1", "A", "Savings", "1", "7", "3"],
    );

    assert!(console
        .successes()
        .contains(&"Account opened successfully. Account Number: 100002"));
    let alice = ctx.directory.login("alice", "secret").unwrap();
    let ids: Vec<AccountId> = ctx.directory.accounts(alice).iter().map(|a| a.id).collect();
    assert_eq!(
        ids,
        vec![
            AccountId::new(100_000),
            AccountId::new(100_001),
            AccountId::new(100_002)
        ]
    );
}

#[test]
fn test_deposit_past_max_balance_keeps_session_running() {
    let mut ctx = create_test_context();
    let console = run_script(
        &mut ctx,
        &with_login(&[
            "1",
            "Alice",
            "Savings",
            "79228162514264337593543950335",
            "2",
            "100000",
            "1",
            "6",
            "100000",
            "4",
            "100000",
            "7",
            "3",
        ]),
    );

    assert_eq!(console.remaining(), 0);
    assert_eq!(
        console.errors(),
        vec![
            "Amount out of range: the balance cannot hold it",
            "Amount out of range: the balance cannot hold it"
        ]
    );
    assert_eq!(balances(&console), vec![Decimal::MAX]);

    let kinds: Vec<_> = ctx
        .logger
        .get_errors(10)
        .into_iter()
        .filter_map(|e| e.command)
        .collect();
    assert_eq!(kinds, vec!["add_interest", "deposit"]);
}

// ============================================================================
// Session log
// ============================================================================

#[test]
fn test_session_log_never_contains_passwords() {
    let mut ctx = create_test_context();
    run_script(&mut ctx, &["1", "alice", "hunter2", "2", "alice", "bad", "3"]);

    let json = serde_json::to_string(ctx.logger.entries()).unwrap();
    assert!(!json.contains("hunter2"));
    assert!(json.contains("user_registered"));
}

#[test]
fn test_session_log_never_contains_balances_or_usernames() {
    let mut ctx = create_test_context();
    let console = run_script(
        &mut ctx,
        &[
            "1", "carol", "pw", // register
            "1", "carol", "pw2", // duplicate
            "2", "carol", "pw", // login
            "1", "Carol", "Savings", "98765.43", // open
            "3", "100000", "999999", // overdraw
            "7", "3",
        ],
    );

    // The console still shows the full detail
    assert!(console
        .errors()
        .contains(&"Insufficient funds: available 98765.43, requested 999999"));

    let json = serde_json::to_string(ctx.logger.entries()).unwrap();
    assert!(!json.contains("98765.43"));
    assert!(!json.contains("carol"));
    assert!(json.contains("insufficient_funds"));
    assert!(json.contains("duplicate_username"));
}

#[test]
fn test_malformed_input_is_logged_under_its_action() {
    let mut ctx = create_test_context();
    run_script(
        &mut ctx,
        &with_login(&[
            "1", "Alice", "Savings", "lots", "100", // open
            "2", "100000", "ten", "5", // deposit
            "3", "100000", "five", "5", // withdraw
            "7", "3",
        ]),
    );

    let failed: Vec<_> = ctx
        .logger
        .entries()
        .iter()
        .filter(|e| e.error_kind.as_deref() == Some("malformed_numeric_input"))
        .map(|e| e.event.as_str())
        .collect();
    assert_eq!(
        failed,
        vec!["open_account_failed", "deposit_failed", "withdraw_failed"]
    );
}
