//! # Account Service
//!
//! Register, login, update, delete and fetch for accounts.
//!
//! The service owns no mutable state. It carries the pool plus the injected
//! Argon2 cost and token secret, and is cloned into every request.
//! Identity for update/delete/fetch always comes from the authorization gate,
//! never from a request body.

use lib_auth::{encode_jwt, hash_password, verify_password, HashCost};
use lib_core::dto::{AccountPatch, RegisterRequest};
use lib_core::model::store::{
    Account, AccountForCreate, AccountForUpdate, AccountRepository, FieldUpdate,
};
use lib_core::{AppError, Config, DbPool, Result};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument, warn};

#[derive(Clone)]
pub struct AccountService {
    db: DbPool,
    token_secret: Arc<str>,
    hash_cost: HashCost,
    /// Hash checked against when the email is unknown, so both login
    /// failures cost one verification. Built on first use.
    decoy_hash: Arc<OnceCell<String>>,
}

impl AccountService {
    pub fn new(db: DbPool, config: &Config) -> Self {
        Self {
            db,
            token_secret: Arc::from(config.jwt_secret.as_str()),
            hash_cost: HashCost {
                memory_kib: config.pwd_memory_kib,
                iterations: config.pwd_iterations,
                parallelism: config.pwd_parallelism,
            },
            decoy_hash: Arc::new(OnceCell::new()),
        }
    }

    /// Hash the password and persist a new account.
    ///
    /// # Errors
    ///
    /// - [`AppError::DuplicateField`] if the email or phone number is taken
    /// - [`AppError::Hashing`] if the hash computation fails
    #[instrument(skip_all, fields(email = %draft.email))]
    pub async fn register(&self, draft: RegisterRequest) -> Result<Account> {
        debug!("[REGISTER] Hashing password...");
        let password_hash = self.hash(draft.password).await?;

        let account = AccountRepository::create(
            &self.db,
            AccountForCreate {
                first_name: draft.first_name,
                last_name: draft.last_name,
                email: draft.email,
                password_hash,
                phone_number: draft.phone_number,
                gender: draft.gender,
            },
        )
        .await
        .inspect_err(|e| warn!("[REGISTER] Failed to create account: {}", e))?;

        info!("[REGISTER] Account created (id: {})", account.id);
        Ok(account)
    }

    /// Verify credentials and issue a bearer token.
    ///
    /// Returns [`AppError::AccountNotFound`] or [`AppError::WrongPassword`]; the
    /// login handler decides how much of that a caller gets to see.
    #[instrument(skip_all, fields(email = %email))]
    pub async fn login(&self, email: &str, password: String) -> Result<String> {
        let Some(account) = AccountRepository::find_by_email(&self.db, email).await? else {
            warn!("[LOGIN] No account for email");
            let decoy = self.load_decoy_hash().await?;
            let _ = self.verify(password, decoy).await;
            return Err(AppError::AccountNotFound);
        };

        debug!("[LOGIN] Verifying password...");
        let is_valid = self.verify(password, account.password_hash.clone()).await?;

        if !is_valid {
            warn!("[LOGIN] Wrong password for account {}", account.id);
            return Err(AppError::WrongPassword);
        }

        let token = encode_jwt(account.id, &self.token_secret).map_err(map_auth_err)?;

        info!("[LOGIN] Account {} authenticated", account.id);
        Ok(token)
    }

    /// Apply a partial update to the caller's own account.
    ///
    /// An unchanged password keeps the stored hash; a new one is re-hashed.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, account_id: i64, patch: AccountPatch) -> Result<()> {
        let password_hash = match patch.password {
            FieldUpdate::SetTo(password) => {
                debug!("[UPDATE] Re-hashing new password...");
                FieldUpdate::SetTo(self.hash(password).await?)
            }
            FieldUpdate::Unchanged => FieldUpdate::Unchanged,
        };

        let update = AccountForUpdate {
            first_name: patch.first_name,
            last_name: patch.last_name,
            password_hash,
            phone_number: patch.phone_number,
            gender: patch.gender,
        };

        AccountRepository::update(&self.db, account_id, update)
            .await
            .inspect_err(|e| warn!("[UPDATE] Account {} not updated: {}", account_id, e))?;

        info!("[UPDATE] Account {} updated", account_id);
        Ok(())
    }

    /// Delete the caller's account. Deleting an absent account succeeds.
    #[instrument(skip(self))]
    pub async fn delete(&self, account_id: i64) -> Result<()> {
        let removed = AccountRepository::delete(&self.db, account_id).await?;

        if removed == 0 {
            info!("[DELETE] Account {} was already absent", account_id);
        } else {
            info!("[DELETE] Account {} deleted", account_id);
        }
        Ok(())
    }

    /// Fetch the caller's account.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, account_id: i64) -> Result<Account> {
        AccountRepository::find_by_id(&self.db, account_id)
            .await?
            .ok_or(AppError::AccountNotFound)
    }

    async fn verify(&self, password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::Internal(format!("password verification task failed: {}", e)))?
            .map_err(map_auth_err)
    }

    async fn load_decoy_hash(&self) -> Result<String> {
        self.decoy_hash
            .get_or_try_init(|| self.hash("decoy-password-for-unknown-email".to_string()))
            .await
            .cloned()
    }

    async fn hash(&self, password: String) -> Result<String> {
        let cost = self.hash_cost;
        tokio::task::spawn_blocking(move || hash_password(&password, &cost))
            .await
            .map_err(|e| AppError::Internal(format!("password hashing task failed: {}", e)))?
            .map_err(map_auth_err)
    }
}

/// Map auth library failures onto the application taxonomy.
pub fn map_auth_err(err: lib_auth::Error) -> AppError {
    match err {
        lib_auth::Error::Hashing(msg) => AppError::Hashing(msg),
        lib_auth::Error::InvalidHash(msg) => AppError::Hashing(format!("stored hash unusable: {}", msg)),
        lib_auth::Error::Signing(msg) => AppError::Signing(msg),
        lib_auth::Error::InvalidToken => AppError::InvalidToken,
    }
}
