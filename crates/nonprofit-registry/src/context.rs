//! Registry context: the directory, its store, and settings
//!
//! Pages that list or register organizations share one context, built at
//! startup and dropped at teardown.

use tracing::{debug, warn};

use crate::config::RegistryConfig;
use crate::directory::OrganizationDirectory;
use crate::error::{RegistryError, Result};
use crate::organization::{NonprofitCard, RegistrationForm};
use crate::store::{load_directory, save_directory, FileStore, RecordStore};

/// Owns the in-memory directory and keeps its store in step.
///
/// Mutations made through the context are written back to the store
/// immediately. The context has no internal locking; share it behind a
/// `Mutex` if several threads need it.
#[derive(Debug)]
pub struct RegistryContext<S> {
    config: RegistryConfig,
    store: S,
    directory: OrganizationDirectory,
}

impl<S: RecordStore> RegistryContext<S> {
    /// Build a context and load whatever the store holds.
    ///
    /// A stored payload that cannot be parsed is logged and treated as
    /// empty; store access failures and invalid config are returned.
    pub fn open(config: RegistryConfig, store: S) -> Result<Self> {
        config.validate()?;
        let directory = match load_directory(&store, &config.storage_key) {
            Ok(directory) => directory,
            Err(RegistryError::Serialization(e)) => {
                warn!(key = %config.storage_key, error = %e, "discarding unreadable organizations");
                OrganizationDirectory::new()
            }
            Err(e) => return Err(e),
        };
        debug!(count = directory.len(), "registry context opened");
        Ok(Self {
            config,
            store,
            directory,
        })
    }

    /// Replace the in-memory directory with what the store holds.
    ///
    /// On error the current directory is kept.
    pub fn reload(&mut self) -> Result<()> {
        self.directory = load_directory(&self.store, &self.config.storage_key)?;
        Ok(())
    }

    /// Write the directory to the store.
    pub fn persist(&self) -> Result<()> {
        save_directory(&self.store, &self.config.storage_key, &self.directory)
    }

    /// Record a new organization after its account was created, and persist.
    ///
    /// Returns the card the organization will show on the browse page. If
    /// the store rejects the write, the directory is left as it was.
    pub fn register(&mut self, form: RegistrationForm) -> Result<NonprofitCard> {
        let mut candidate = self.directory.clone();
        let position = candidate.len();
        let category = &self.config.default_category;
        let card = candidate.register(form, category).to_card(position, category);
        self.commit(candidate)?;
        Ok(card)
    }

    /// Remove the first organization with `email`, persisting on success.
    ///
    /// If the store rejects the write, the organization stays listed.
    pub fn unregister(&mut self, email: &str) -> Result<bool> {
        if self.directory.find_by_email(email).is_none() {
            return Ok(false);
        }
        let mut candidate = self.directory.clone();
        candidate.delete_by_email(email);
        self.commit(candidate)?;
        Ok(true)
    }

    /// Store `candidate`, and adopt it only once the write succeeded.
    fn commit(&mut self, candidate: OrganizationDirectory) -> Result<()> {
        save_directory(&self.store, &self.config.storage_key, &candidate)?;
        self.directory = candidate;
        Ok(())
    }

    /// Cards for the browse page.
    pub fn browse(&self) -> Vec<NonprofitCard> {
        self.directory.to_cards(&self.config.default_category)
    }

    /// The in-memory directory.
    pub fn directory(&self) -> &OrganizationDirectory {
        &self.directory
    }

    /// The active settings.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Tear the context down, handing back its parts.
    pub fn into_parts(self) -> (RegistryConfig, S, OrganizationDirectory) {
        (self.config, self.store, self.directory)
    }
}

impl RegistryContext<FileStore> {
    /// Open a file-backed context rooted at `config.storage_dir`.
    pub fn open_file_backed(config: RegistryConfig) -> Result<Self> {
        let dir = config
            .storage_dir
            .clone()
            .ok_or_else(|| RegistryError::Config("storage_dir is not set".to_string()))?;
        let store = FileStore::open(dir)?;
        Self::open(config, store)
    }
}
