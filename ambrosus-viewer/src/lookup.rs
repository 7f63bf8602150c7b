//! Data-access seams.
//!
//! The controller never talks to the network directly. Hosts inject an
//! [`AssetLookup`] and an [`EventLookup`]; tests and the CLI use the
//! in-memory versions in [`mock`].

use crate::error::ViewerResult;
use ambrosus_types::{Asset, AssetEvent};
use async_trait::async_trait;

/// Fetches assets by identifier.
#[async_trait]
pub trait AssetLookup: Send + Sync {
    /// Returns the asset, or `None` when nothing matches.
    async fn asset_by_id(&self, id: &str) -> ViewerResult<Option<Asset>>;
}

/// Searches events by query string.
#[async_trait]
pub trait EventLookup: Send + Sync {
    /// Returns matching events, most relevant first. Empty when nothing
    /// matches.
    async fn events_by_query(&self, query: &str) -> ViewerResult<Vec<AssetEvent>>;
}

/// In-memory lookups for testing and offline use.
pub mod mock {
    use super::*;
    use crate::error::ViewerError;
    use serde::{Deserialize, Serialize};
    use std::collections::{BTreeMap, HashMap};
    use std::path::Path;
    use std::sync::Mutex;

    /// A set of records answering lookups, as stored in a records file.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct Records {
        #[serde(default)]
        pub assets: Vec<Asset>,
        /// Events keyed by the exact query that finds them.
        #[serde(default)]
        pub events: BTreeMap<String, Vec<AssetEvent>>,
    }

    impl Records {
        /// Parses records from JSON.
        pub fn from_json(json: &str) -> ViewerResult<Self> {
            Ok(serde_json::from_str(json)?)
        }

        /// Reads records from a JSON file.
        pub fn load(path: &Path) -> ViewerResult<Self> {
            let json = std::fs::read_to_string(path)?;
            Self::from_json(&json)
        }
    }

    /// Lookup answering from in-memory records and logging every call.
    #[derive(Debug, Default)]
    pub struct InMemoryLookup {
        assets: HashMap<String, Asset>,
        events: HashMap<String, Vec<AssetEvent>>,
        failing: bool,
        calls: Mutex<Vec<String>>,
    }

    impl InMemoryLookup {
        /// Creates an empty lookup.
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a lookup from records.
        pub fn from_records(records: Records) -> Self {
            let mut lookup = Self::new();
            for asset in records.assets {
                lookup = lookup.with_asset(asset);
            }
            for (query, events) in records.events {
                lookup = lookup.with_events(query, events);
            }
            lookup
        }

        /// Adds an asset.
        pub fn with_asset(mut self, asset: Asset) -> Self {
            self.assets.insert(asset.id.clone(), asset);
            self
        }

        /// Adds events answering `query`.
        pub fn with_events(mut self, query: impl Into<String>, events: Vec<AssetEvent>) -> Self {
            self.events.insert(query.into(), events);
            self
        }

        /// Makes every lookup fail with a network-style error.
        pub fn failing(mut self) -> Self {
            self.failing = true;
            self
        }

        /// The calls made so far, as `asset:<id>` / `events:<query>`.
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) -> ViewerResult<()> {
            self.calls.lock().unwrap().push(call);
            if self.failing {
                return Err(ViewerError::Lookup("network unreachable".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl AssetLookup for InMemoryLookup {
        async fn asset_by_id(&self, id: &str) -> ViewerResult<Option<Asset>> {
            self.record(format!("asset:{id}"))?;
            Ok(self.assets.get(id).cloned())
        }
    }

    #[async_trait]
    impl EventLookup for InMemoryLookup {
        async fn events_by_query(&self, query: &str) -> ViewerResult<Vec<AssetEvent>> {
            self.record(format!("events:{query}"))?;
            Ok(self.events.get(query).cloned().unwrap_or_default())
        }
    }
}
