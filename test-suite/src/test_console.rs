use crate::TestEnvironment;

use registration::{Console, Message};

#[test]
fn test_user_choice() {
    let env = TestEnvironment::new();
    let mut console = Console::new(&env.store, "1\n".as_bytes(), Vec::new());
    assert_eq!(console.user_choice().unwrap(), "1");
    let out = String::from_utf8(console.into_output()).unwrap();
    assert_eq!(out, Message::MenuPrompt.to_string());
}

#[test]
fn test_main_register() {
    let env = TestEnvironment::new();
    let out = env.run_once("2\nmainuser\nmain@example.com\nmainpass\n");
    assert!(env.store.authenticate_user("mainuser", "mainpass").unwrap());
    assert!(out.contains("Логин: mainuser, Электронная почта: main@example.com"));
}

#[test]
fn test_main_register_duplicate_prints_listing_only() {
    let env = TestEnvironment::new();
    env.store.add_user("taken", "first@example.com", "one").unwrap();
    let out = env.run_once("2\ntaken\nsecond@example.com\ntwo\n");
    assert!(out.contains("Электронная почта: first@example.com"));
    assert!(!out.contains("second@example.com"));
    assert!(!out.contains(&Message::AuthFailure.to_string()));
    assert!(!out.contains(&Message::InvalidInput.to_string()));
    assert!(env.store.authenticate_user("taken", "one").unwrap());
}

#[test]
fn test_main_auth_success() {
    let env = TestEnvironment::new();
    env.store.add_user("mainauth", "auth@example.com", "pass123").unwrap();
    let out = env.run_once("1\nmainauth\npass123\n");
    assert!(out.to_lowercase().contains("авторизация успешна"));
}

#[test]
fn test_main_auth_failure() {
    let env = TestEnvironment::new();
    env.store.add_user("mainauth", "auth@example.com", "pass123").unwrap();
    let out = env.run_once("1\nmainauth\nnot-it\n");
    assert!(out.contains(&Message::AuthFailure.to_string()));
    let out = env.run_once("1\nnobody\npass123\n");
    assert!(out.contains(&Message::AuthFailure.to_string()));
}

#[test]
fn test_main_invalid_input() {
    let env = TestEnvironment::new();
    let out = env.run_once("xyz\n");
    assert!(out.to_lowercase().contains("неверный ввод"));
    assert!(env.store.users().unwrap().is_empty());
}

#[test]
fn test_repeated_menu() {
    let env = TestEnvironment::new();
    let out = env.run("2\nfirst\nfirst@example.com\nfirst-pass\n2\nsecond\nsecond@example.com\nsecond-pass\n1\nsecond\nsecond-pass\n");
    assert_eq!(out.matches("Логин: first,").count(), 2);
    assert_eq!(out.matches("Логин: second,").count(), 1);
    assert!(out.contains(&Message::AuthSuccess.to_string()));
    assert_eq!(env.store.users().unwrap().len(), 2);
}

#[test]
fn test_repeated_menu_on_empty_input() {
    let env = TestEnvironment::new();
    let out = env.run("");
    assert_eq!(out, format!("{}\n", Message::MenuPrompt));
}
