//! Scan loop — runs the controller off the UI thread.
//!
//! Scan results and lookups complete on background tasks. The loop turns
//! them into [`ViewerEvent`]s on a channel; the UI-owning thread drains that
//! channel and is the only place on-screen state changes.

use crate::controller::{ScanController, ScanOutcome};
use crate::error::{ViewerError, ViewerResult};
use crate::notice::Notice;
use ambrosus_types::{Asset, DecodedScan};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Input to the scan loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanCommand {
    /// The capture pipeline decoded a code.
    Scanned(DecodedScan),
    /// The user closed the failure notice.
    AcknowledgeFailure,
    /// The user left the detail screen.
    DismissDetails,
}

/// Output of the scan loop, consumed on the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerEvent {
    /// Stop the camera preview; a code is being resolved.
    ScanningPaused,
    /// Restart the camera preview.
    ScanningResumed,
    /// Push the asset detail screen.
    ShowAsset(Asset),
    /// Present a failure notice.
    ShowFailure(Notice),
}

/// How a scan loop ended.
pub struct StoppedLoop {
    /// The controller, in whatever state the loop left it.
    pub controller: ScanController,
    /// `Ok` when the command sender was dropped;
    /// `Err(ViewerError::ChannelClosed)` when the UI side went away.
    pub reason: ViewerResult<()>,
}

/// Handle to a running scan loop.
pub struct ScanLoopHandle {
    /// Send scans and user actions here.
    pub commands: mpsc::Sender<ScanCommand>,
    /// Drain on the UI thread.
    pub events: mpsc::Receiver<ViewerEvent>,
    /// Completes once `commands` is dropped or the event receiver goes
    /// away.
    pub task: JoinHandle<StoppedLoop>,
}

/// Spawns the scan loop on the current tokio runtime.
///
/// A `capacity` of 0 is treated as 1.
pub fn spawn_scan_loop(controller: ScanController, capacity: usize) -> ScanLoopHandle {
    let capacity = capacity.max(1);
    let (cmd_tx, cmd_rx) = mpsc::channel(capacity);
    let (event_tx, event_rx) = mpsc::channel(capacity);
    let task = tokio::spawn(run_scan_loop(controller, cmd_rx, event_tx));

    ScanLoopHandle {
        commands: cmd_tx,
        events: event_rx,
        task,
    }
}

async fn run_scan_loop(
    mut controller: ScanController,
    mut commands: mpsc::Receiver<ScanCommand>,
    events: mpsc::Sender<ViewerEvent>,
) -> StoppedLoop {
    info!("scan loop started");
    let reason = drive(&mut controller, &mut commands, &events).await;
    match &reason {
        Ok(()) => info!("scan loop stopped"),
        Err(e) => warn!(error = %e, "scan loop stopped"),
    }
    StoppedLoop { controller, reason }
}

async fn emit(events: &mpsc::Sender<ViewerEvent>, event: ViewerEvent) -> ViewerResult<()> {
    events
        .send(event)
        .await
        .map_err(|_| ViewerError::ChannelClosed)
}

async fn drive(
    controller: &mut ScanController,
    commands: &mut mpsc::Receiver<ScanCommand>,
    events: &mpsc::Sender<ViewerEvent>,
) -> ViewerResult<()> {
    while let Some(command) = commands.recv().await {
        let emitted = match command {
            ScanCommand::Scanned(scan) => {
                if !controller.state().is_scanning() {
                    debug!(state = ?controller.state(), "dropping scan while paused");
                    continue;
                }
                emit(events, ViewerEvent::ScanningPaused).await?;
                match controller.handle_scan(scan).await {
                    ScanOutcome::Display(asset) => Some(ViewerEvent::ShowAsset(asset)),
                    ScanOutcome::Failed(notice) => Some(ViewerEvent::ShowFailure(notice)),
                    ScanOutcome::Ignored => None,
                }
            }
            ScanCommand::AcknowledgeFailure => controller
                .acknowledge_failure()
                .then_some(ViewerEvent::ScanningResumed),
            ScanCommand::DismissDetails => controller
                .dismiss_details()
                .then_some(ViewerEvent::ScanningResumed),
        };

        if let Some(event) = emitted {
            emit(events, event).await?;
        }
    }

    Ok(())
}
