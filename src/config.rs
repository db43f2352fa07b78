use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::{CatalogSource, FileCatalogSource, HttpCatalogSource};
use crate::error::AppError;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_CATALOG_PATH: &str = "data/courses.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogLocation {
    Url(String),
    Path(PathBuf),
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub catalog: CatalogLocation,
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        let addr = env::var("SCHEDULER_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let addr = addr
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("SCHEDULER_ADDR {:?} is invalid: {}", addr, e)))?;

        let catalog = match env::var("CATALOG_URL") {
            Ok(url) if !url.trim().is_empty() => CatalogLocation::Url(url),
            _ => CatalogLocation::Path(
                env::var("CATALOG_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(DEFAULT_CATALOG_PATH)),
            ),
        };

        Ok(Self { addr, catalog })
    }

    pub fn catalog_source(&self) -> Result<Arc<dyn CatalogSource>, AppError> {
        let source: Arc<dyn CatalogSource> = match &self.catalog {
            CatalogLocation::Url(url) => Arc::new(HttpCatalogSource::new(url.clone())?),
            CatalogLocation::Path(path) => Arc::new(FileCatalogSource::new(path.clone())),
        };
        Ok(source)
    }
}
