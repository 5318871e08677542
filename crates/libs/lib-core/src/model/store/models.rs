use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::fmt;

/// Account entity representing a complete record from the database.
///
/// `password_hash` is an Argon2 PHC string; the plaintext is never stored.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: String,
    pub gender: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new account. Password must already be hashed.
#[derive(Debug, Clone)]
pub struct AccountForCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: String,
    pub gender: String,
}

/// Per-field update instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    Unchanged,
    SetTo(T),
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::Unchanged
    }
}

impl<T> FieldUpdate<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            FieldUpdate::Unchanged => None,
            FieldUpdate::SetTo(value) => Some(value),
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, FieldUpdate::Unchanged)
    }
}

/// Wire-level fields arrive as optional strings where an empty string has
/// always meant "not supplied". Both map to `Unchanged`.
impl From<Option<String>> for FieldUpdate<String> {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(value) if !value.is_empty() => FieldUpdate::SetTo(value),
            _ => FieldUpdate::Unchanged,
        }
    }
}

/// Data for updating an existing account.
///
/// Email is intentionally absent: it cannot be changed after registration.
#[derive(Debug, Clone, Default)]
pub struct AccountForUpdate {
    pub first_name: FieldUpdate<String>,
    pub last_name: FieldUpdate<String>,
    pub password_hash: FieldUpdate<String>,
    pub phone_number: FieldUpdate<String>,
    pub gender: FieldUpdate<String>,
}

impl AccountForUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, first_name: String) -> Self {
        self.first_name = FieldUpdate::SetTo(first_name);
        self
    }

    pub fn last_name(mut self, last_name: String) -> Self {
        self.last_name = FieldUpdate::SetTo(last_name);
        self
    }

    pub fn password_hash(mut self, password_hash: String) -> Self {
        self.password_hash = FieldUpdate::SetTo(password_hash);
        self
    }

    pub fn phone_number(mut self, phone_number: String) -> Self {
        self.phone_number = FieldUpdate::SetTo(phone_number);
        self
    }

    pub fn gender(mut self, gender: String) -> Self {
        self.gender = FieldUpdate::SetTo(gender);
        self
    }

    /// Column/value pairs for every field that is being set.
    pub(crate) fn assignments(&self) -> Vec<(&'static str, &str)> {
        [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("password_hash", &self.password_hash),
            ("phone_number", &self.phone_number),
            ("gender", &self.gender),
        ]
        .into_iter()
        .filter_map(|(column, update)| update.value().map(|v| (column, v.as_str())))
        .collect()
    }
}

/// Account fields guarded by a uniqueness constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountField {
    Email,
    PhoneNumber,
}

impl AccountField {
    /// Identify the field from a constraint name (`uni_accounts_phone_number`)
    /// or a driver message (`UNIQUE constraint failed: accounts.email`).
    pub fn from_constraint(source: &str) -> Option<Self> {
        if source.contains("phone_number") {
            Some(AccountField::PhoneNumber)
        } else if source.contains("email") {
            Some(AccountField::Email)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountField::Email => "email",
            AccountField::PhoneNumber => "phone number",
        }
    }
}

impl fmt::Display for AccountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
