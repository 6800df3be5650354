use std::io;
use std::path::{Path, PathBuf};

use food_registry::{PersistentStore, StoreError};

/// Stores each key as one file under a root directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", file_name_for(key)))
    }
}

/// Maps a key onto a portable file name, e.g. `@foods_database` -> `foods_database`.
fn file_name_for(key: &str) -> String {
    let name: String = key
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' => c,
            _ => '_',
        })
        .collect();

    let name = name.trim_start_matches(['_', '.']);
    if name.is_empty() {
        String::from("_")
    } else {
        name.to_string()
    }
}

impl PersistentStore for FileStore {
    #[tracing::instrument(skip(self), fields(root = %self.root.display()))]
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                tracing::error!(error = ?e, "Failed to read store file");
                Err(StoreError::read(key, e))
            }
        }
    }

    #[tracing::instrument(skip(self, value), fields(root = %self.root.display(), len = value.len()))]
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");

        let result = async {
            tokio::fs::create_dir_all(&self.root).await?;
            tokio::fs::write(&tmp_path, value.as_bytes()).await?;
            tokio::fs::rename(&tmp_path, &path).await
        }
        .await;

        if let Err(e) = result {
            tracing::error!(error = ?e, "Failed to write store file");
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(StoreError::write(key, e));
        }

        Ok(())
    }
}
