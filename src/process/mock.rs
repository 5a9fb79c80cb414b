use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::FileProcessor;

/// Scripted processor. Unconfigured paths succeed with the identity
/// result; failures, panics and delays are opt-in per path.
#[derive(Clone, Default)]
pub struct MockProcessor {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    failures: HashMap<PathBuf, String>,
    panics: HashSet<PathBuf>,
    delays: HashMap<PathBuf, Duration>,
    calls: Vec<PathBuf>,
}

impl MockProcessor {
    pub fn set_failure(&self, path: impl Into<PathBuf>, reason: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock processor lock");
        inner.failures.insert(path.into(), reason.into());
    }

    /// Makes processing the path panic instead of returning.
    pub fn set_panic(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.lock().expect("mock processor lock");
        inner.panics.insert(path.into());
    }

    pub fn set_delay(&self, path: impl Into<PathBuf>, delay: Duration) {
        let mut inner = self.inner.lock().expect("mock processor lock");
        inner.delays.insert(path.into(), delay);
    }

    /// Paths processed so far, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock processor lock");
        inner.calls.clone()
    }
}

#[async_trait]
impl FileProcessor for MockProcessor {
    async fn process(&self, path: &Path) -> Result<String> {
        let (delay, must_panic, response) = {
            let mut inner = self.inner.lock().expect("mock processor lock");
            inner.calls.push(path.to_path_buf());
            let response = match inner.failures.get(path) {
                Some(reason) => Err(anyhow!("{reason}")),
                None => Ok(path.display().to_string()),
            };
            (
                inner.delays.get(path).copied(),
                inner.panics.contains(path),
                response,
            )
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        // Panicking outside the lock keeps the mutex usable for the
        // sibling calls still running.
        if must_panic {
            panic!("scripted panic while processing {}", path.display());
        }
        response
    }
}
