//! Scan controller — scan → resolve → display, one sequence at a time.
//!
//! Scanning pauses as soon as a code is captured. It resumes only when the
//! user acknowledges a failure notice or dismisses the detail screen; scans
//! arriving in between are ignored.

use crate::lookup::{AssetLookup, EventLookup};
use crate::notice::Notice;
use ambrosus_scan::{translate, TranslatedScan};
use ambrosus_types::{Asset, DecodedScan, QueryKind};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What the scanner is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScannerState {
    /// Waiting for a code.
    Scanning,
    /// A captured code is being resolved.
    Resolving,
    /// A failure notice is on screen.
    ShowingFailure,
    /// An asset detail screen is on screen.
    ShowingDetails,
}

impl ScannerState {
    /// Whether new scans are accepted.
    #[must_use]
    pub fn is_scanning(self) -> bool {
        self == Self::Scanning
    }
}

/// Result of handling one scan.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// The asset was found; show its detail screen.
    Display(Asset),
    /// Nothing could be shown; present the notice.
    Failed(Notice),
    /// Scanning was paused; the scan was dropped.
    Ignored,
}

/// Drives a decoded scan through translation and lookup.
pub struct ScanController {
    assets: Arc<dyn AssetLookup>,
    events: Arc<dyn EventLookup>,
    state: ScannerState,
}

impl ScanController {
    /// Creates a controller in the scanning state.
    pub fn new(assets: Arc<dyn AssetLookup>, events: Arc<dyn EventLookup>) -> Self {
        Self {
            assets,
            events,
            state: ScannerState::Scanning,
        }
    }

    /// Creates a controller whose lookups share one backend.
    pub fn with_backend<L>(backend: Arc<L>) -> Self
    where
        L: AssetLookup + EventLookup + 'static,
    {
        Self::new(backend.clone(), backend)
    }

    /// Current scanner state.
    pub fn state(&self) -> ScannerState {
        self.state
    }

    /// Handles one decoded scan.
    pub async fn handle_scan(&mut self, scan: DecodedScan) -> ScanOutcome {
        if !self.state.is_scanning() {
            debug!(state = ?self.state, "scanner paused, ignoring scan");
            return ScanOutcome::Ignored;
        }
        self.state = ScannerState::Resolving;

        let translated = translate(&scan);
        if scan.is_empty() {
            warn!(symbology = %translated.vendor_tag, "empty scan payload");
            return self.fail(&translated);
        }

        info!(
            symbology = %translated.symbology,
            query = %translated.query,
            kind = %translated.kind,
            "resolving scan"
        );
        match self.resolve(&translated).await {
            Some(asset) => {
                info!(asset = %asset.id, "asset resolved");
                self.state = ScannerState::ShowingDetails;
                ScanOutcome::Display(asset)
            }
            None => self.fail(&translated),
        }
    }

    /// Closes the failure notice and resumes scanning.
    ///
    /// Returns `false` if no notice was showing.
    pub fn acknowledge_failure(&mut self) -> bool {
        self.resume_from(ScannerState::ShowingFailure)
    }

    /// Closes the detail screen and resumes scanning.
    ///
    /// Returns `false` if no detail screen was showing.
    pub fn dismiss_details(&mut self) -> bool {
        self.resume_from(ScannerState::ShowingDetails)
    }

    /// Resumes scanning unconditionally, e.g. after a resolve was abandoned.
    pub fn resume(&mut self) {
        info!(from = ?self.state, "scanning resumed");
        self.state = ScannerState::Scanning;
    }

    fn resume_from(&mut self, expected: ScannerState) -> bool {
        if self.state != expected {
            return false;
        }
        self.resume();
        true
    }

    fn fail(&mut self, translated: &TranslatedScan) -> ScanOutcome {
        self.state = ScannerState::ShowingFailure;
        ScanOutcome::Failed(Notice::scan_failure(
            &translated.vendor_tag,
            translated.query.as_str(),
        ))
    }

    async fn resolve(&self, translated: &TranslatedScan) -> Option<Asset> {
        let query = translated.query.as_str();
        let asset_id = match translated.kind {
            QueryKind::AssetId => query.to_string(),
            QueryKind::EventSearch => {
                let events = match self.events.events_by_query(query).await {
                    Ok(events) => events,
                    Err(e) => {
                        warn!(query, error = %e, "event lookup failed");
                        return None;
                    }
                };
                let Some(first) = events.into_iter().next() else {
                    debug!(query, "no events match");
                    return None;
                };
                first.asset_id
            }
        };

        match self.assets.asset_by_id(&asset_id).await {
            Ok(Some(asset)) => Some(asset),
            Ok(None) => {
                debug!(asset = %asset_id, "asset not found");
                None
            }
            Err(e) => {
                warn!(asset = %asset_id, error = %e, "asset lookup failed");
                None
            }
        }
    }
}
