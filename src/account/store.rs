/**
 * User Store Gateway
 *
 * This module contains the SQL operations behind registration,
 * authentication, and token persistence. The schema is external and
 * pre-existing:
 *
 * ```text
 * Users(ID, Username, Password)
 * Tokens(UserID, Token, CreatedTime, ExpiresTime, IsCanceled)
 * ```
 *
 * Every operation checks a connection out of the pool for exactly that
 * call and binds its parameters; no value is ever concatenated into query
 * text. Errors propagate as `sqlx::Error` and are logged and converted by
 * the caller.
 *
 * The duplicate-username check and the insert are two separate statements
 * with no wrapping transaction, so two concurrent registrations for the
 * same username can both pass the check. Uniqueness is only guaranteed if
 * the store schema itself enforces it.
 */

use chrono::{DateTime, Utc};
use sqlx::MySqlPool;

/// Gateway for the `Users` and `Tokens` tables
#[derive(Debug, Clone)]
pub struct UserStore {
    pool: MySqlPool,
}

impl UserStore {
    /// Create a gateway over the given connection pool
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Count rows matching the exact username
    ///
    /// Returns `Ok(None)` if the count query itself produced no row, which
    /// the service reports as an unexpected store condition.
    pub async fn count_by_username(&self, username: &str) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM `Users` WHERE `Username` = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
    }

    /// Insert a user row and return the store-assigned identifier
    pub async fn insert_user(
        &self,
        username: &str,
        password_hash: &[u8],
    ) -> Result<i32, sqlx::Error> {
        let result = sqlx::query("INSERT INTO `Users` (`Username`, `Password`) VALUES (?, ?)")
            .bind(username)
            .bind(password_hash)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_id() as i32)
    }

    /// Look up a user id by username and password hash
    ///
    /// Returns `Ok(None)` when no row matches the pair, which is the normal
    /// failed-login outcome.
    pub async fn find_id_by_credentials(
        &self,
        username: &str,
        password_hash: &[u8],
    ) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, i32>(
            "SELECT `ID` FROM `Users` WHERE `Username` = ? AND `Password` = ?",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await
    }

    /// Persist an issued token
    ///
    /// The cancellation flag is always written as false; nothing in this
    /// service flips it later.
    pub async fn insert_token(
        &self,
        user_id: i32,
        token: &str,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO `Tokens` (`UserID`, `Token`, `CreatedTime`, `ExpiresTime`, `IsCanceled`) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(token)
        .bind(created_at)
        .bind(expires_at)
        .bind(false)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
