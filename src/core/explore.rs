use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::{self, BoxFuture};
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::{Result, WalkError};
use crate::fs::FileSystem;
use crate::models::{EntryKind, ResultTree};
use crate::process::FileProcessor;

/// Default cap on concurrently in-flight filesystem and processor calls.
pub const DEFAULT_MAX_IN_FLIGHT: usize = 64;

/// Largest usable cap, bounded by the semaphore's permit limit.
pub const MAX_IN_FLIGHT_LIMIT: usize = Semaphore::MAX_PERMITS;

/// Configuration options for a walk.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Maximum number of filesystem/processor calls in flight at once.
    /// Dispatch is unbounded; only the calls themselves are gated.
    /// Clamped into `1..=MAX_IN_FLIGHT_LIMIT`.
    pub max_in_flight: usize,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
        }
    }
}

/// Concurrent recursive traversal.
///
/// Walking a directory lists it, dispatches one task per entry before
/// awaiting any of them, then waits for all: directories recurse,
/// everything else goes through the processor and becomes a leaf.
/// Child results keep listing order regardless of completion timing.
/// The first failure to settle anywhere fails the whole walk; siblings
/// already dispatched are not cancelled, their outcomes are dropped.
#[derive(Clone)]
pub struct Walker {
    fs: Arc<dyn FileSystem>,
    processor: Arc<dyn FileProcessor>,
    io_slots: Arc<Semaphore>,
}

impl Walker {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        processor: Arc<dyn FileProcessor>,
        options: &WalkOptions,
    ) -> Self {
        // A cap of zero would starve the walk before it listed anything,
        // and Semaphore::new panics above MAX_PERMITS.
        let slots = options.max_in_flight.clamp(1, MAX_IN_FLIGHT_LIMIT);
        Self {
            fs,
            processor,
            io_slots: Arc::new(Semaphore::new(slots)),
        }
    }

    /// Walk the tree rooted at `dir`.
    pub async fn explore(&self, dir: &Path) -> Result<ResultTree<String>> {
        debug!(path = %dir.display(), "starting walk");
        self.explore_dir(dir.to_path_buf()).await
    }

    async fn explore_dir(&self, dir: PathBuf) -> Result<ResultTree<String>> {
        match self.explore_children(&dir).await {
            Ok(children) => Ok(ResultTree::Node(children)),
            Err(err) => {
                // Every level a failure bubbles through logs it, so the
                // trail names the whole ancestor chain.
                warn!(path = %dir.display(), error = %err, "walk failed below this directory");
                Err(err)
            }
        }
    }

    async fn explore_children(&self, dir: &Path) -> Result<Vec<ResultTree<String>>> {
        let names = self.list_entries(dir).await?;
        debug!(path = %dir.display(), entries = names.len(), "listed directory");

        // Dispatch every sibling before awaiting any of them. Recursion
        // happens inside the spawned tasks, so depth costs a chain of
        // tasks on the heap, not native stack.
        let mut units: Vec<(PathBuf, JoinHandle<Result<ResultTree<String>>>)> =
            Vec::with_capacity(names.len());
        for name in names {
            let path = dir.join(name);
            let handle = tokio::spawn(self.clone().explore_entry_task(path.clone()));
            units.push((path, handle));
        }

        // try_join_all keeps input order and resolves to the first
        // failure that settles, even when an earlier sibling is still
        // pending. Remaining handles are dropped, not aborted.
        future::try_join_all(units.into_iter().map(|(path, handle)| async move {
            handle.await.unwrap_or_else(|err| {
                Err(WalkError::Aborted {
                    path,
                    reason: err.to_string(),
                })
            })
        }))
        .await
    }

    /// One spawned unit of the walk. Boxed: the recursion back into
    /// `explore_dir` would otherwise make the spawned future's type,
    /// and with it the `Send` bound on `tokio::spawn`, self-referential.
    fn explore_entry_task(self, path: PathBuf) -> BoxFuture<'static, Result<ResultTree<String>>> {
        Box::pin(async move { self.explore_entry(path).await })
    }

    async fn explore_entry(&self, path: PathBuf) -> Result<ResultTree<String>> {
        match self.classify_entry(&path).await? {
            EntryKind::Directory => self.explore_dir(path).await,
            _ => {
                let value = self.process_file(&path).await?;
                Ok(ResultTree::Leaf(value))
            }
        }
    }

    async fn list_entries(&self, dir: &Path) -> Result<Vec<OsString>> {
        // One permit per call, released before any recursion, so a cap
        // of 1 still cannot deadlock at depth.
        let _permit = self.io_slots.acquire().await.expect("semaphore never closed");
        self.fs
            .list_dir(dir)
            .await
            .map_err(|source| WalkError::Listing {
                path: dir.to_path_buf(),
                source,
            })
    }

    async fn classify_entry(&self, path: &Path) -> Result<EntryKind> {
        let _permit = self.io_slots.acquire().await.expect("semaphore never closed");
        self.fs
            .classify(path)
            .await
            .map_err(|source| WalkError::Classify {
                path: path.to_path_buf(),
                source,
            })
    }

    async fn process_file(&self, path: &Path) -> Result<String> {
        let _permit = self.io_slots.acquire().await.expect("semaphore never closed");
        self.processor
            .process(path)
            .await
            .map_err(|err| WalkError::Process {
                path: path.to_path_buf(),
                reason: format!("{err:#}"),
            })
    }
}
