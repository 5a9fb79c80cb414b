#[cfg(test)]
mod mock;

#[cfg(test)]
pub use mock::MockProcessor;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

/// Per-file step of the walk. Every entry that is not a directory is
/// handed here exactly once; the returned value becomes that file's
/// leaf in the result tree.
///
/// Implementations report failure through the `Result`; any failure
/// fails the whole walk.
#[async_trait]
pub trait FileProcessor: Send + Sync {
    async fn process(&self, path: &Path) -> Result<String>;
}

/// Default processor: echoes the path back, so the walk's output is the
/// list of file paths it visited.
pub struct IdentityProcessor;

#[async_trait]
impl FileProcessor for IdentityProcessor {
    async fn process(&self, path: &Path) -> Result<String> {
        Ok(path.display().to_string())
    }
}
