pub mod dto;

use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, info, warn};

use crate::error::AppError;
use crate::models::{Course, CourseId, FilterCriteria};

/// Read-only view of the term's offered courses, in source order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn categories(&self) -> Vec<String> {
        self.courses
            .iter()
            .map(|c| c.category.clone())
            .filter(|c| !c.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn professors(&self) -> Vec<String> {
        self.courses
            .iter()
            .map(|c| c.professor.clone())
            .filter(|p| !p.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn filter<'a>(&'a self, criteria: &'a FilterCriteria) -> impl Iterator<Item = &'a Course> {
        self.courses.iter().filter(move |c| criteria.matches(c))
    }
}

/// Parses a `courses.json` body. Records that fail to deserialize or
/// normalize are skipped; a body that is not an array fails as a whole.
pub fn parse_catalog(body: &str) -> Result<Vec<Course>, AppError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(body)
        .map_err(|e| AppError::Catalog(format!("catalog is not a JSON array: {}", e)))?;

    let mut seen = HashSet::new();
    let mut courses = Vec::with_capacity(values.len());

    for (index, value) in values.into_iter().enumerate() {
        let raw: dto::RawCourse = match serde_json::from_value(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Skipping catalog record #{}: {}", index, e);
                continue;
            }
        };

        match raw.into_course() {
            Ok(course) => {
                if seen.insert(course.id) {
                    courses.push(course);
                } else {
                    warn!("Skipping duplicate course id {}", course.id);
                }
            }
            Err(e) => warn!("Skipping catalog record #{}: {}", index, e),
        }
    }

    Ok(courses)
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_courses(&self) -> Result<Vec<Course>, AppError>;
}

pub struct HttpCatalogSource {
    client: Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_courses(&self) -> Result<Vec<Course>, AppError> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Catalog(format!(
                "GET {} returned {}: {}",
                self.url, status, body
            )));
        }

        let body = response.text().await?;
        parse_catalog(&body)
    }
}

pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch_courses(&self) -> Result<Vec<Course>, AppError> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        parse_catalog(&body)
    }
}

/// In-memory catalog, mostly for tests.
pub struct StaticCatalogSource {
    courses: Vec<Course>,
}

impl StaticCatalogSource {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch_courses(&self) -> Result<Vec<Course>, AppError> {
        Ok(self.courses.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    pub error: Option<String>,
}

/// Fetches the catalog once. Failure is not fatal: the result is an empty
/// catalog carrying the error message.
pub async fn load_catalog(source: &dyn CatalogSource) -> CatalogLoad {
    match source.fetch_courses().await {
        Ok(courses) => {
            info!("Loaded {} courses", courses.len());
            CatalogLoad {
                catalog: Catalog::new(courses),
                error: None,
            }
        }
        Err(e) => {
            error!("Failed to fetch courses: {}", e);
            CatalogLoad {
                catalog: Catalog::default(),
                error: Some(e.to_string()),
            }
        }
    }
}
