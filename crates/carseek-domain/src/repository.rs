//! Repository trait definitions for data persistence

use carseek_types::Error;

/// Repository for the single persisted password scalar
///
/// The auth store reads the password once at initialization and writes it
/// back on every update.
pub trait PasswordRepository {
    /// Load the stored password, if one has ever been set
    fn load(&self) -> Result<Option<String>, Error>;

    /// Persist a new password value
    fn store(&self, password: &str) -> Result<(), Error>;
}
