use std::sync::Arc;

use crate::models::cache::Cache;
use crate::utils::upstream::Upstream;

pub struct AppState {
    pub upstream: Arc<dyn Upstream>,
    pub cache: Arc<dyn Cache>,
}
