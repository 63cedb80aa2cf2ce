pub mod api;
pub mod download;

pub use api::{PosApiError, PosClient};
pub use download::{DownloadInitiator, WebviewDownloader};
