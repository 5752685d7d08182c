//! Auth store: the single persisted password scalar

use carseek_domain::repository::PasswordRepository;
use carseek_types::Result;

/// Password store backed by a [`PasswordRepository`]
///
/// The password is read once at open and written back on every update. No
/// expiry, no hashing; equality is the whole check.
pub struct AuthStore<R: PasswordRepository> {
    password: String,
    repo: R,
}

impl<R: PasswordRepository> AuthStore<R> {
    /// Open the store, loading the persisted password if one exists
    pub fn open(repo: R) -> Result<Self> {
        let password = repo.load()?.unwrap_or_default();
        Ok(Self { password, repo })
    }

    /// Replace the password and persist the new value
    pub fn set_password(&mut self, new_password: &str) -> Result<()> {
        self.password = new_password.to_string();
        self.repo.store(new_password)?;
        Ok(())
    }

    /// Check a candidate against the stored password
    pub fn check_password(&self, input: &str) -> bool {
        self.password == input
    }

    /// Whether a non-empty password has been set
    pub fn has_password(&self) -> bool {
        !self.password.is_empty()
    }
}
