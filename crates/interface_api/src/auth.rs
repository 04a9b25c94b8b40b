//! JWT authentication
//!
//! Token issuance and validation plus the in-process user directory. The
//! directory ships with a single demo account; passwords are stored as
//! Argon2 hashes and verified on login.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::UserId;

/// Authentication errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Missing authorization header")]
    MissingToken,

    #[error("User account is inactive")]
    InactiveUser,

    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// User email
    pub email: String,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued-at timestamp
    pub iat: i64,
}

/// Creates a JWT for the given user
pub fn create_token(
    user_id: UserId,
    email: &str,
    secret: &str,
    expiration_secs: u64,
) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        exp: now + expiration_secs as i64,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::InvalidToken)
}

/// Validates a JWT and returns its claims
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AuthError::InvalidToken)
}

/// A known user account
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub active: bool,
}

/// In-process directory of user accounts
///
/// The login flow is real (hash verification, JWT issuance) but the account
/// list is fixed at construction; there is no user management surface.
#[derive(Debug)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Demo account email
    pub const DEMO_EMAIL: &'static str = "demo@demo.com";
    /// Demo account password
    pub const DEMO_PASSWORD: &'static str = "Demo123!";

    /// Creates a directory seeded with the demo account
    pub fn with_demo_user() -> Self {
        let hash = hash_password(Self::DEMO_PASSWORD)
            .unwrap_or_else(|err| panic!("failed to hash demo password: {err}"));

        Self {
            users: vec![User {
                id: UserId::new(),
                email: Self::DEMO_EMAIL.to_string(),
                password_hash: hash,
                active: true,
            }],
        }
    }

    /// Looks up a user by email (case-insensitive)
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|user| user.email.eq_ignore_ascii_case(email))
    }

    /// Verifies credentials and returns the matching user
    pub fn authenticate(&self, email: &str, password: &str) -> Result<&User, AuthError> {
        let user = self
            .find_by_email(email)
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.active {
            return Err(AuthError::InactiveUser);
        }

        verify_password(password, &user.password_hash)?;
        Ok(user)
    }
}

fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AuthError::Hashing(err.to_string()))
}

fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|err| AuthError::Hashing(err.to_string()))?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}
