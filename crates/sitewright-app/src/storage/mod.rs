//! Tenant directory persisted as a JSON array on disk.
//!
//! ## Summary
//! The whole file is loaded on open. Every insert takes an exclusive lock on
//! a sibling `.lock` file, re-reads the tenants from disk, checks the new
//! tenant against that fresh view and only then writes. Several processes
//! sharing one file therefore never lose each other's tenants or hand out
//! the same slug twice.
//!
//! New contents are staged in a sibling `.tmp` file and renamed into place;
//! a crash mid-write leaves the previous file intact.

use std::fmt::Display;
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fs4::fs_std::FileExt;
use uuid::Uuid;

use sitewright_service::error::{ServiceError, ServiceResult};
use sitewright_service::tenant::{InMemoryTenantDirectory, Tenant, TenantDirectory};

use crate::error::AppResult;

#[derive(Debug)]
pub struct JsonTenantDirectory {
    path: PathBuf,
    lock_path: PathBuf,
    inner: InMemoryTenantDirectory,
}

impl JsonTenantDirectory {
    /// ## Summary
    /// Opens the tenant file at `path`. A missing file is an empty directory.
    ///
    /// ## Errors
    /// Returns an error if the file cannot be read, is not a JSON array of
    /// tenants, or holds two tenants with the same slug or domain.
    #[tracing::instrument]
    pub fn open(path: &Path) -> AppResult<Self> {
        let tenants = read_tenants(path)?;
        tracing::debug!(count = tenants.len(), "tenants loaded");

        Ok(Self {
            path: path.to_path_buf(),
            lock_path: sibling(path, ".lock"),
            inner: InMemoryTenantDirectory::with_tenants(tenants)?,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Blocks until this process holds the write lock. Released when the
    /// returned file is dropped.
    fn lock(&self) -> ServiceResult<File> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&self.lock_path)
            .map_err(|e| self.storage_error(&e))?;
        file.lock_exclusive().map_err(|e| self.storage_error(&e))?;
        Ok(file)
    }

    /// Replaces the in-process view with what is on disk now.
    fn reload(&self) -> ServiceResult<()> {
        let tenants = read_tenants(&self.path).map_err(|e| self.storage_error(&e))?;
        tracing::trace!(count = tenants.len(), "tenants reloaded");
        self.inner.replace_all(tenants)
    }

    fn save(&self) -> ServiceResult<()> {
        let tenants = self.inner.list()?;
        let json = serde_json::to_string_pretty(&tenants)
            .map_err(|e| ServiceError::StorageError(e.to_string()))?;

        let staging = sibling(&self.path, ".tmp");
        fs::write(&staging, json)
            .and_then(|()| fs::rename(&staging, &self.path))
            .map_err(|e| self.storage_error(&e))
    }

    fn storage_error(&self, error: &dyn Display) -> ServiceError {
        tracing::error!(path = %self.path.display(), error = %error, "tenant storage failed");
        ServiceError::StorageError(format!("{}: {error}", self.path.display()))
    }
}

impl TenantDirectory for JsonTenantDirectory {
    /// Answers from the view loaded at open or at the last insert. A slug
    /// taken by another process since then is caught by [`Self::insert`].
    fn slug_exists(&self, slug: &str, exclude_id: Option<Uuid>) -> ServiceResult<bool> {
        self.inner.slug_exists(slug, exclude_id)
    }

    #[tracing::instrument(skip(self, tenant), fields(slug = %tenant.slug))]
    fn insert(&self, tenant: Tenant) -> ServiceResult<Tenant> {
        let _lock = self.lock()?;
        self.reload()?;
        let tenant = self.inner.insert(tenant)?;
        if let Err(e) = self.save() {
            if let Err(reload) = self.reload() {
                tracing::warn!(error = %reload, "could not drop unsaved tenant from view");
            }
            return Err(e);
        }
        Ok(tenant)
    }

    fn by_slug(&self, slug: &str) -> ServiceResult<Option<Tenant>> {
        self.inner.by_slug(slug)
    }

    fn list(&self) -> ServiceResult<Vec<Tenant>> {
        self.inner.list()
    }
}

fn read_tenants(path: &Path) -> AppResult<Vec<Tenant>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(serde_json::from_str(&contents)?),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("tenant file not found, starting empty");
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
