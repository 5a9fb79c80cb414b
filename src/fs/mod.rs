mod real;


pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use async_trait::async_trait;
use std::ffi::OsString;
use std::io;
use std::path::Path;

use crate::models::EntryKind;

/// Filesystem access used by the walk, split into the two operations it
/// needs: listing a directory's raw child names and classifying one
/// resolved path.
///
/// `list_dir` must return names in a stable order so repeated walks of
/// an unchanged tree produce identical output. `classify` must not
/// follow symlinks; a link is reported as `Symlink` whatever it points
/// at.
#[async_trait]
pub trait FileSystem: Send + Sync {
    async fn list_dir(&self, dir: &Path) -> io::Result<Vec<OsString>>;

    async fn classify(&self, path: &Path) -> io::Result<EntryKind>;
}
