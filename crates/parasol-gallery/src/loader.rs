//! Fan-out/fan-in loading of an owner's license collection.

use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::decode::decode_license_manifest;
use crate::reader::{TokenIndexReader, TokenUriReader};
use crate::record::{Account, LicenseRecord, TokenId};

/// Default cap on concurrently outstanding reads per phase.
const DEFAULT_MAX_IN_FLIGHT: usize = 8;

/// Materializes the display-ready records for one owner.
///
/// Two bounded fan-out phases: first every enumeration index is resolved to
/// a token id, then every resolved id is fetched and decoded. Completions
/// may land in any order; the output is reassembled in ascending index
/// order. Every per-index failure is logged and that index skipped —
/// [`CollectionLoader::load`] itself never fails.
///
/// Pure read/transform with no persisted state: safe to call repeatedly and
/// concurrently for different owners.
pub struct CollectionLoader<R> {
    reader: R,
    max_in_flight: usize,
}

impl<R> CollectionLoader<R>
where
    R: TokenIndexReader + TokenUriReader + Clone + Send + Sync + 'static,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
        }
    }

    /// Cap the number of reads in flight at once. A window of 1 degrades to
    /// the plain sequential loop.
    pub fn with_max_in_flight(mut self, window: usize) -> Self {
        self.max_in_flight = window.max(1);
        self
    }

    /// Load `owner`'s collection given its reported balance.
    ///
    /// Returns at most `balance_count` records, in ascending enumeration
    /// index order. An empty owner address short-circuits to an empty
    /// result without touching the readers, as does a zero balance.
    pub async fn load(&self, owner: &Account, balance_count: u64) -> Vec<LicenseRecord> {
        if owner.is_empty() {
            debug!("no owner address, skipping collection load");
            return Vec::new();
        }
        if balance_count == 0 {
            return Vec::new();
        }

        let ids = self.resolve_token_ids(owner, balance_count).await;
        self.fetch_records(ids).await
    }

    /// Phase 1: one enumeration read per index, reassembled in index order.
    /// Failed indices come back as `None`.
    async fn resolve_token_ids(
        &self,
        owner: &Account,
        balance_count: u64,
    ) -> Vec<Option<TokenId>> {
        let mut ids: Vec<Option<TokenId>> = vec![None; balance_count as usize];
        let mut handles = JoinSet::new();
        let mut next_index = 0u64;
        loop {
            while handles.len() < self.max_in_flight && next_index < balance_count {
                let index = next_index;
                next_index += 1;
                let reader = self.reader.clone();
                let owner = owner.clone();
                handles
                    .spawn(async move { (index, reader.token_of_owner_by_index(&owner, index).await) });
            }
            let Some(result) = handles.join_next().await else {
                break;
            };
            match result {
                Ok((index, Ok(token_id))) => ids[index as usize] = Some(token_id),
                Ok((index, Err(e))) => {
                    warn!(index, error = %e, "token index read failed, skipping index");
                }
                Err(e) => warn!(error = %e, "token index read task panicked"),
            }
        }
        ids
    }

    /// Phase 2: URI read plus manifest decode for every id that resolved,
    /// compacted into the final ordered sequence.
    async fn fetch_records(&self, ids: Vec<Option<TokenId>>) -> Vec<LicenseRecord> {
        let mut slots: Vec<Option<LicenseRecord>> = vec![None; ids.len()];
        let mut handles = JoinSet::new();
        let mut pending = ids
            .into_iter()
            .enumerate()
            .filter_map(|(index, id)| id.map(|id| (index, id)));
        loop {
            while handles.len() < self.max_in_flight {
                let Some((index, token_id)) = pending.next() else {
                    break;
                };
                let reader = self.reader.clone();
                handles.spawn(async move { (index, fetch_record(&reader, token_id).await) });
            }
            let Some(result) = handles.join_next().await else {
                break;
            };
            match result {
                Ok((index, record)) => slots[index] = record,
                Err(e) => warn!(error = %e, "record fetch task panicked"),
            }
        }
        slots.into_iter().flatten().collect()
    }
}

/// The per-token tail of the pipeline: URI read, then manifest decode.
async fn fetch_record<R: TokenUriReader>(reader: &R, token_id: TokenId) -> Option<LicenseRecord> {
    let uri = match reader.token_uri(token_id).await {
        Ok(uri) => uri,
        Err(e) => {
            warn!(token_id = %token_id, error = %e, "token URI read failed, skipping token");
            return None;
        }
    };
    match decode_license_manifest(&uri) {
        Ok(fields) => Some(LicenseRecord {
            id: token_id,
            uri,
            fields,
        }),
        Err(e) => {
            warn!(token_id = %token_id, error = %e, "token URI decode failed, skipping token");
            None
        }
    }
}
