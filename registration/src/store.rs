use std::io::Write;
use std::path::{Path, PathBuf};

use crate::message::Message;
use crate::user::User;

use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        username TEXT PRIMARY KEY,
        email TEXT NOT NULL,
        password TEXT NOT NULL
    )
"#;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not open database {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    #[error("database statement failed: {0}")]
    Statement(#[from] rusqlite::Error),
    #[error("could not write user listing: {0}")]
    Output(#[from] std::io::Error),
}

/// Registered users kept in a single SQLite file.
///
/// Every operation opens its own connection, runs one statement and closes
/// the connection again, so nothing is held between calls.
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    pub fn new(path: impl Into<PathBuf>) -> UserStore {
        UserStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        Connection::open(&self.path).map_err(|source| StoreError::Open {
            path: self.path.clone(),
            source,
        })
    }

    pub fn create_db(&self) -> Result<(), StoreError> {
        let conn = self.connect()?;
        conn.execute(CREATE_USERS_TABLE, [])?;
        log::debug!("Ensured users table exists in {}", self.path.display());
        Ok(())
    }

    /// Returns `false` when the username is already taken. The stored record
    /// is left as it was.
    pub fn add_user(&self, username: &str, email: &str, password: &str) -> Result<bool, StoreError> {
        let conn = self.connect()?;
        let inserted = conn.execute(
            "INSERT INTO users (username, email, password) VALUES (?1, ?2, ?3)",
            params![username, email, password],
        );
        match inserted {
            Ok(_) => {
                log::info!("Registered user {}", username);
                Ok(true)
            }
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                log::warn!("Refused to register {}: username already taken", username);
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn authenticate_user(&self, username: &str, password: &str) -> Result<bool, StoreError> {
        let conn = self.connect()?;
        let found: Option<i64> = conn
            .query_row(
                "SELECT 1 FROM users WHERE username = ?1 AND password = ?2",
                params![username, password],
                |row| row.get(0),
            )
            .optional()?;
        if found.is_some() {
            log::info!("User {} authenticated", username);
        } else {
            log::warn!("Failed authentication attempt for {}", username);
        }
        Ok(found.is_some())
    }

    /// All users in registration order.
    pub fn users(&self) -> Result<Vec<User>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT username, email, password FROM users ORDER BY rowid")?;
        let users = stmt
            .query_map([], |row| {
                Ok(User {
                    username: row.get(0)?,
                    email: row.get(1)?,
                    password: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(users)
    }

    pub fn display_users<W: Write>(&self, out: &mut W) -> Result<(), StoreError> {
        for user in self.users()? {
            writeln!(out, "{}", Message::UserEntry(user.username, user.email))?;
        }
        Ok(())
    }
}
