//! # Account Repository
//!
//! Database access layer for account records.
//!
//! Failures come back as [`AppError`]: a violated uniqueness constraint is
//! [`AppError::DuplicateField`] naming the field, a missing row on update is
//! [`AppError::AccountNotFound`], anything else is [`AppError::Store`].
//!
//! ## Example
//!
//! ```rust,no_run
//! # use lib_core::model::store::{create_pool, run_migrations, AccountRepository, AccountForCreate};
//! # async fn example() -> anyhow::Result<()> {
//! # let pool = create_pool("sqlite::memory:").await?;
//! # run_migrations(&pool).await?;
//! let account = AccountRepository::create(&pool, AccountForCreate {
//!     first_name: "Ada".to_string(),
//!     last_name: "Lovelace".to_string(),
//!     email: "ada@example.com".to_string(),
//!     password_hash: "$argon2id$...".to_string(),
//!     phone_number: "0812345678".to_string(),
//!     gender: "female".to_string(),
//! }).await?;
//!
//! let found = AccountRepository::find_by_email(&pool, "ada@example.com").await?;
//! assert_eq!(found.map(|a| a.id), Some(account.id));
//! # Ok(())
//! # }
//! ```

use super::models::{Account, AccountForCreate, AccountForUpdate};
use super::DbPool;
use crate::error::{AppError, Result};
use sqlx::query_as;

/// Account repository for database operations.
pub struct AccountRepository;

impl AccountRepository {
    /// Find an account by its identifier.
    pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<Account>> {
        let account = query_as::<_, Account>("SELECT * FROM accounts WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(account)
    }

    /// Find an account by its email address.
    pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<Account>> {
        let account = query_as::<_, Account>("SELECT * FROM accounts WHERE email = ?")
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(account)
    }

    /// Insert a new account and return the stored record.
    ///
    /// # Errors
    ///
    /// - [`AppError::DuplicateField`] if the email or phone number is taken
    /// - [`AppError::Store`] for any other database failure
    pub async fn create(pool: &DbPool, account: AccountForCreate) -> Result<Account> {
        let result = sqlx::query(
            "INSERT INTO accounts (first_name, last_name, email, password_hash, phone_number, gender) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(&account.phone_number)
        .bind(&account.gender)
        .execute(pool)
        .await?;

        let id = result.last_insert_rowid();

        let account = query_as::<_, Account>("SELECT * FROM accounts WHERE id = ?")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(account)
    }

    /// Apply the set fields of `update` to account `id`.
    ///
    /// `updated_at` is always bumped, so an update with no set fields still
    /// reports whether the account exists.
    ///
    /// # Errors
    ///
    /// - [`AppError::AccountNotFound`] if no row has this id
    /// - [`AppError::DuplicateField`] if the new phone number is taken
    pub async fn update(pool: &DbPool, id: i64, update: AccountForUpdate) -> Result<()> {
        let assignments = update.assignments();

        let mut columns: Vec<String> = assignments
            .iter()
            .map(|(column, _)| format!("{} = ?", column))
            .collect();
        columns.push("updated_at = CURRENT_TIMESTAMP".to_string());

        let query_str = format!("UPDATE accounts SET {} WHERE id = ?", columns.join(", "));

        let mut query = sqlx::query(&query_str);
        for (_, value) in &assignments {
            query = query.bind(*value);
        }

        let result = query.bind(id).execute(pool).await?;

        if result.rows_affected() == 0 {
            return Err(AppError::AccountNotFound);
        }
        Ok(())
    }

    /// Delete account `id`, returning the number of rows removed (0 or 1).
    pub async fn delete(pool: &DbPool, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
