//! User-facing notices: scan failures and onboarding instructions.

use serde::{Deserialize, Serialize};

/// A dismissible message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// The notice shown when a scan can't be turned into an asset. Empty
    /// payloads and unresolvable queries differ only in the query text.
    pub fn scan_failure(symbology_tag: &str, query: &str) -> Self {
        Self::new(
            format!("Scanned {symbology_tag} code"),
            format!("Failed to find Ambrosus Asset from request with query: {query}"),
        )
    }

    /// Onboarding instructions pointing at the sample codes.
    pub fn instructions(samples_url: &str) -> Self {
        Self::new(
            "Instructions",
            format!(
                "Ambrosus Viewer is capable of scanning Bar Codes, QR Codes, and Datamatrix codes. \
                 Codes with Ambrosus identifiers will display details about an asset on the AMB-Net.\n\n\
                 For a set of sample of codes you can scan visit:\n\n\
                 {samples_url}\n\n\
                 We recommend opening this link on a separate computer so you can scan codes with this device.\n\n\
                 To see samples already included with the app select the browse tab."
            ),
        )
    }

    /// Confirmation after the samples URL was copied.
    pub fn url_copied(samples_url: &str) -> Self {
        Self::new(
            "Copied",
            format!("URL to website with sample codes to scan:\n{samples_url}\nwas copied successfully!"),
        )
    }
}

/// Tracks whether the instructions were already shown.
///
/// Persisting the flag is up to the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Onboarding {
    did_show: bool,
}

impl Onboarding {
    /// Restores the flag from host storage.
    pub fn new(did_show: bool) -> Self {
        Self { did_show }
    }

    pub fn did_show(&self) -> bool {
        self.did_show
    }

    /// Whether to show the instructions when the scanner first appears.
    pub fn should_show_on_launch(&self, enabled: bool) -> bool {
        enabled && !self.did_show
    }

    /// Returns the instructions and marks them as shown. Also used when the
    /// user asks for help explicitly.
    pub fn show(&mut self, samples_url: &str) -> Notice {
        self.did_show = true;
        Notice::instructions(samples_url)
    }
}
