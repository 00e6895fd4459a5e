use crate::TestEnvironment;

use registration::UserStore;
use rusqlite::{Connection, OptionalExtension};

fn stored_row(env: &TestEnvironment, username: &str) -> Option<(String, String)> {
    let conn = Connection::open(env.db_path()).unwrap();
    conn.query_row(
        "SELECT email, password FROM users WHERE username = ?1",
        [username],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )
    .optional()
    .unwrap()
}

#[test]
fn test_create_db() {
    let env = TestEnvironment::new();
    let conn = Connection::open(env.db_path()).unwrap();
    let table: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type='table' AND name='users'",
            [],
            |row| row.get(0),
        )
        .optional()
        .unwrap();
    assert_eq!(table.as_deref(), Some("users"));
}

#[test]
fn test_create_db_keeps_existing_users() {
    let env = TestEnvironment::new();
    env.store.add_user("keeper", "keep@example.com", "pass").unwrap();
    let reopened = UserStore::new(env.db_path());
    reopened.create_db().unwrap();
    assert!(reopened.authenticate_user("keeper", "pass").unwrap());
}

#[test]
fn test_add_new_user() {
    let env = TestEnvironment::new();
    assert!(env
        .store
        .add_user("testuser", "testuser@example.com", "password123")
        .unwrap());
    assert_eq!(
        stored_row(&env, "testuser"),
        Some(("testuser@example.com".to_owned(), "password123".to_owned()))
    );
}

#[test]
fn test_add_existing_user() {
    let env = TestEnvironment::new();
    assert!(env.store.add_user("duplicate", "dup@example.com", "pass").unwrap());
    let result = env
        .store
        .add_user("duplicate", "another@example.com", "pass123")
        .unwrap();
    assert!(!result);
    assert_eq!(
        stored_row(&env, "duplicate"),
        Some(("dup@example.com".to_owned(), "pass".to_owned()))
    );
}

#[test]
fn test_authenticate_success() {
    let env = TestEnvironment::new();
    env.store.add_user("authuser", "auth@example.com", "secret").unwrap();
    assert!(env.store.authenticate_user("authuser", "secret").unwrap());
}

#[test]
fn test_authenticate_wrong_password() {
    let env = TestEnvironment::new();
    env.store
        .add_user("wrongpass", "wrong@example.com", "correctpass")
        .unwrap();
    assert!(!env.store.authenticate_user("wrongpass", "wrongpass").unwrap());
}

#[test]
fn test_authenticate_nonexistent_user() {
    let env = TestEnvironment::new();
    assert!(!env.store.authenticate_user("ghost", "nope").unwrap());
}

#[test]
fn test_alice_walkthrough() {
    let env = TestEnvironment::new();
    assert!(env.store.add_user("alice", "a@x.com", "pw").unwrap());
    assert!(!env.store.add_user("alice", "b@x.com", "pw2").unwrap());
    assert!(env.store.authenticate_user("alice", "pw").unwrap());
    assert!(!env.store.authenticate_user("alice", "pw2").unwrap());
}

#[test]
fn test_display_users_output() {
    let env = TestEnvironment::new();
    env.store.add_user("viewuser", "view@example.com", "123").unwrap();
    env.store.add_user("other", "other@example.com", "456").unwrap();
    let out = env.display_users();
    assert!(out.contains("Логин: viewuser"));
    assert!(out.contains("Электронная почта: view@example.com"));
    assert_eq!(out.lines().count(), 2);
    assert!(!out.contains("123"));
}

#[test]
fn test_display_users_empty() {
    let env = TestEnvironment::new();
    assert_eq!(env.display_users(), "");
}
