//! Application State

use std::path::PathBuf;
use std::sync::Arc;

use homecare_core::SiteConfig;

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Configuration the bundle is expected to be built with
    pub config: Arc<SiteConfig>,

    /// Directory holding the built WASM bundle (`trunk build` output)
    pub static_dir: PathBuf,
}
