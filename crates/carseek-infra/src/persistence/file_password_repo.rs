//! File-based password repository
//!
//! Stores the single password scalar in a JSON file under the store
//! directory. Read at open, written on every update.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use carseek_domain::repository::PasswordRepository;
use carseek_types::{AuthError, Error, Result};

#[derive(Debug, Serialize, Deserialize)]
struct StoredPassword {
    password: String,
}

/// File-backed implementation of [`PasswordRepository`]
pub struct FilePasswordRepository {
    store_path: PathBuf,
}

impl FilePasswordRepository {
    /// Create the repository, ensuring the store directory exists
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        Ok(Self {
            store_path: store_dir.join("auth.json"),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.store_path
    }
}

impl PasswordRepository for FilePasswordRepository {
    fn load(&self) -> std::result::Result<Option<String>, Error> {
        if !self.store_path.exists() {
            return Ok(None);
        }
        let file = File::open(&self.store_path)?;
        let reader = BufReader::new(file);
        let stored: StoredPassword = serde_json::from_reader(reader).map_err(|e| {
            AuthError::Corrupted(format!("{}: {}", self.store_path.display(), e))
        })?;
        Ok(Some(stored.password))
    }

    fn store(&self, password: &str) -> std::result::Result<(), Error> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        let stored = StoredPassword {
            password: password.to_string(),
        };
        serde_json::to_writer_pretty(writer, &stored)?;
        Ok(())
    }
}
