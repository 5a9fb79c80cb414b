use async_trait::async_trait;
use std::ffi::OsString;
use std::io;
use std::path::Path;
use tokio::task;

use crate::models::EntryKind;

use super::FileSystem;

/// Production implementation. Listing goes through the blocking pool;
/// names are sorted so listing order is stable across runs.
pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn list_dir(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || {
            let mut names = Vec::new();
            for entry in std::fs::read_dir(&dir)? {
                names.push(entry?.file_name());
            }
            names.sort();
            Ok(names)
        })
        .await?
    }

    async fn classify(&self, path: &Path) -> io::Result<EntryKind> {
        // symlink_metadata: a link classifies as Symlink, never as its target.
        let file_type = tokio::fs::symlink_metadata(path).await?.file_type();
        let kind = if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };
        Ok(kind)
    }
}
