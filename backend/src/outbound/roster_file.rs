//! JSON file adapter for the roster repository port.
//!
//! The roster lives in one pretty-printed JSON array. Writes go to a staging
//! file in the same directory which is then renamed over the target, so a
//! crash mid-write never leaves a truncated roster behind. File access goes
//! through a `cap_std` directory handle and runs on the blocking pool.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tokio::task;
use tracing::debug;
use uuid::Uuid;

use crate::domain::User;
use crate::domain::ports::{RosterPersistenceError, RosterRepository};

const INDENT: &[u8] = b"    ";

/// Roster repository persisting users to a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileRosterRepository {
    directory: PathBuf,
    file_name: OsString,
}

impl JsonFileRosterRepository {
    /// Build a repository for the file at `path`.
    ///
    /// The file does not need to exist yet; it is created on the first save.
    ///
    /// # Errors
    ///
    /// Returns [`RosterPersistenceError::Io`] when `path` has no file name.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, RosterPersistenceError> {
        let path = path.as_ref();
        let file_name = path.file_name().ok_or_else(|| {
            RosterPersistenceError::io(format!("{} does not name a file", path.display()))
        })?;
        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Ok(Self {
            directory,
            file_name: file_name.to_os_string(),
        })
    }

    /// Full path of the roster file.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    fn read_blocking(&self) -> Result<Option<Vec<User>>, RosterPersistenceError> {
        let directory = match Dir::open_ambient_dir(&self.directory, ambient_authority()) {
            Ok(directory) => directory,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(self.io_error(error)),
        };
        let bytes = match directory.read(&self.file_name) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(self.io_error(error)),
        };
        let users = serde_json::from_slice(&bytes).map_err(|error| {
            RosterPersistenceError::decode(format!("{}: {error}", self.path().display()))
        })?;
        Ok(Some(users))
    }

    fn write_blocking(&self, contents: &[u8]) -> Result<(), RosterPersistenceError> {
        Dir::create_ambient_dir_all(&self.directory, ambient_authority())
            .map_err(|error| self.io_error(error))?;
        let directory = Dir::open_ambient_dir(&self.directory, ambient_authority())
            .map_err(|error| self.io_error(error))?;

        let mut staging = self.file_name.clone();
        staging.push(format!(".tmp-{}", Uuid::new_v4().simple()));
        let result = directory
            .write(&staging, contents)
            .and_then(|()| directory.rename(&staging, &directory, &self.file_name));
        if let Err(error) = result {
            let _cleanup_result = directory.remove_file(&staging);
            return Err(self.io_error(error));
        }
        Ok(())
    }

    fn io_error(&self, error: io::Error) -> RosterPersistenceError {
        RosterPersistenceError::io(format!("{}: {error}", self.path().display()))
    }
}

fn encode(users: &[User]) -> Result<Vec<u8>, RosterPersistenceError> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    users
        .serialize(&mut serializer)
        .map_err(|error| RosterPersistenceError::encode(error.to_string()))?;
    Ok(buffer)
}

fn join_error(error: task::JoinError) -> RosterPersistenceError {
    RosterPersistenceError::io(format!("roster file task failed: {error}"))
}

#[async_trait]
impl RosterRepository for JsonFileRosterRepository {
    async fn load(&self) -> Result<Option<Vec<User>>, RosterPersistenceError> {
        let repository = self.clone();
        task::spawn_blocking(move || repository.read_blocking())
            .await
            .map_err(join_error)?
    }

    async fn save_all(&self, users: &[User]) -> Result<(), RosterPersistenceError> {
        let contents = encode(users)?;
        let repository = self.clone();
        task::spawn_blocking(move || repository.write_blocking(&contents))
            .await
            .map_err(join_error)??;
        debug!(path = %self.path().display(), count = users.len(), "saved roster");
        Ok(())
    }
}
