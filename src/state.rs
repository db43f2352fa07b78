use std::sync::Arc;

use tokio::sync::RwLock;

use crate::catalog::{self, CatalogSource};
use crate::services::PlannerSession;

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<PlannerSession>>,
    pub catalog_source: Arc<dyn CatalogSource>,
}

impl AppState {
    /// Loads the catalog once and starts an empty session around it.
    pub async fn load(catalog_source: Arc<dyn CatalogSource>) -> Self {
        let load = catalog::load_catalog(catalog_source.as_ref()).await;
        Self {
            session: Arc::new(RwLock::new(PlannerSession::new(load))),
            catalog_source,
        }
    }
}
