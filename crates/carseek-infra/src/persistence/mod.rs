//! Persistence implementations

mod file_password_repo;

pub use file_password_repo::FilePasswordRepository;
