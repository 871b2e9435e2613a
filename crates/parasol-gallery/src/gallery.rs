//! The shared output slot load results are published into.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tracing::debug;

use crate::loader::CollectionLoader;
use crate::reader::{TokenIndexReader, TokenUriReader};
use crate::record::{Account, LicenseRecord};

/// One rendered collection plus the loader that refreshes it.
///
/// Refreshes race: the wallet can reconnect or the balance change while a
/// load is still in flight. The newest refresh always wins the slot; a
/// superseded refresh discards its result instead of merging it.
pub struct LicenseGallery<R> {
    loader: CollectionLoader<R>,
    epoch: AtomicU64,
    records: RwLock<Vec<LicenseRecord>>,
}

impl<R> LicenseGallery<R>
where
    R: TokenIndexReader + TokenUriReader + Clone + Send + Sync + 'static,
{
    pub fn new(loader: CollectionLoader<R>) -> Self {
        Self {
            loader,
            epoch: AtomicU64::new(0),
            records: RwLock::new(Vec::new()),
        }
    }

    /// Reload the collection and install the result, unless a newer refresh
    /// started meanwhile. Returns whether this refresh won the slot.
    pub async fn refresh(&self, owner: &Account, balance_count: u64) -> bool {
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let records = self.loader.load(owner, balance_count).await;

        let mut slot = self.records.write().await;
        // Re-checked under the write lock: a newer refresh may have started
        // (or already finished) while this load was in flight.
        if self.epoch.load(Ordering::SeqCst) != epoch {
            debug!(owner = %owner, epoch, "refresh superseded, discarding result");
            return false;
        }
        *slot = records;
        true
    }

    /// Empty the slot (wallet disconnected). Counts as a superseding
    /// invocation, so a stale in-flight refresh cannot resurrect the old
    /// collection.
    pub async fn clear(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        self.records.write().await.clear();
    }

    /// The currently installed records.
    pub async fn snapshot(&self) -> Vec<LicenseRecord> {
        self.records.read().await.clone()
    }
}
