use dioxus::document;
use tracing::warn;

/// Capability for kicking off a file download. Injected into the view so the
/// panels stay testable without a webview.
pub trait DownloadInitiator {
    /// Fire-and-forget: one request per call, no retry, no user feedback.
    fn trigger(&self, url: &str);
}

/// Production initiator: clicks a synthetic anchor inside the webview. The
/// `download` attribute stays empty so the server's response headers pick the
/// filename.
pub struct WebviewDownloader;

impl DownloadInitiator for WebviewDownloader {
    fn trigger(&self, url: &str) {
        let Ok(href) = serde_json::to_string(url) else {
            warn!(url, "export URL could not be encoded for the webview");
            return;
        };
        let script = format!(
            "const link = document.createElement('a');\n\
             link.download = '';\n\
             link.href = {href};\n\
             link.click();"
        );
        let _ = document::eval(&script);
    }
}
