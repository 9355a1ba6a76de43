//! Downloaded document sink

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{CoreError, CoreResult};
use crate::utils::file_name::{numbered_variant, sanitize_file_name};

/// Upper bound on ` (n)` suffixes tried before giving up.
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// File sink Trait
///
/// Turns the bytes of a finished download into a user-visible file.
#[async_trait]
pub trait FileSink: Send + Sync {
    /// Write `bytes` under (a sanitized form of) `file_name`.
    ///
    /// # Returns
    /// The path actually written, which may differ from the requested name.
    async fn materialize(&self, file_name: &str, bytes: &[u8]) -> CoreResult<PathBuf>;
}

/// Writes documents into one directory, never overwriting existing files.
#[derive(Debug, Clone)]
pub struct DirectoryFileSink {
    directory: PathBuf,
}

impl DirectoryFileSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

#[async_trait]
impl FileSink for DirectoryFileSink {
    async fn materialize(&self, file_name: &str, bytes: &[u8]) -> CoreResult<PathBuf> {
        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| CoreError::FileWriteError(format!("{}: {e}", self.directory.display())))?;

        let base = sanitize_file_name(file_name);
        for attempt in 0..MAX_NAME_ATTEMPTS {
            let candidate = self.directory.join(numbered_variant(&base, attempt));
            let open = tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&candidate)
                .await;

            let mut file = match open {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => {
                    return Err(CoreError::FileWriteError(format!(
                        "{}: {e}",
                        candidate.display()
                    )))
                }
            };

            let written = async {
                file.write_all(bytes).await?;
                file.flush().await
            }
            .await;

            if let Err(e) = written {
                // no partial file left behind
                let _ = tokio::fs::remove_file(&candidate).await;
                return Err(CoreError::FileWriteError(format!(
                    "{}: {e}",
                    candidate.display()
                )));
            }

            log::info!("Saved {} bytes to {}", bytes.len(), candidate.display());
            return Ok(candidate);
        }

        Err(CoreError::FileWriteError(format!(
            "no free file name for {base} in {}",
            self.directory.display()
        )))
    }
}
