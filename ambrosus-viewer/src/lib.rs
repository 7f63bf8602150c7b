//! Scan, resolve and display controller for the Ambrosus viewer.
//!
//! Ties the query translator and the section layout engine to the remote
//! data layer:
//!
//! 1. **Scan**: a decoded code arrives from the capture pipeline
//! 2. **Translate**: it becomes a lookup query and a query kind
//! 3. **Resolve**: the query goes to an injected [`AssetLookup`] directly, or
//!    through an [`EventLookup`] search first
//! 4. **Display**: the asset is handed to the UI, or a failure [`Notice`]
//!
//! Only one scan is in flight at a time. Scanning pauses on capture and
//! resumes when the user acknowledges a failure or leaves the detail screen.
//!
//! # Example
//!
//! ```
//! use ambrosus_types::{Asset, DecodedScan};
//! use ambrosus_viewer::mock::InMemoryLookup;
//! use ambrosus_viewer::{ScanController, ScanOutcome};
//! use std::sync::Arc;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let backend = Arc::new(InMemoryLookup::new().with_asset(Asset::new("0xabc")));
//! let mut controller = ScanController::with_backend(backend);
//!
//! let outcome = controller
//!     .handle_scan(DecodedScan::new("https://amb.to/0xabc", "org.iso.QRCode"))
//!     .await;
//! assert!(matches!(outcome, ScanOutcome::Display(_)));
//! # });
//! ```

mod config;
mod controller;
mod details;
mod error;
pub mod lookup;
mod notice;
mod orchestrator;

pub use config::{ViewerConfig, DEFAULT_SAMPLES_URL};
pub use controller::{ScanController, ScanOutcome, ScannerState};
pub use details::{AssetDetails, EventDetails};
pub use error::{ViewerError, ViewerResult};
pub use lookup::{mock, AssetLookup, EventLookup};
pub use notice::{Notice, Onboarding};
pub use orchestrator::{spawn_scan_loop, ScanCommand, ScanLoopHandle, StoppedLoop, ViewerEvent};
