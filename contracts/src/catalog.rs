use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PORTFOLIO_JSON: &str = include_str!("../content/portfolio.json");

static PORTFOLIO: Lazy<Catalog> = Lazy::new(|| match Catalog::from_json(PORTFOLIO_JSON) {
    Ok(catalog) => {
        log::info!("Loaded portfolio catalog with {} case studies", catalog.len());
        catalog
    }
    Err(e) => {
        log::error!("Failed to load portfolio catalog: {}", e);
        Catalog::empty()
    }
});

/// The site's case studies, parsed from the embedded content document on
/// first access and shared read-only for the rest of the process.
pub fn portfolio() -> &'static Catalog {
    &PORTFOLIO
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate slug `{0}`")]
    DuplicateSlug(String),
    #[error("slug `{0}` is not url-safe")]
    InvalidSlug(String),
    #[error("malformed content document: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultHighlight {
    pub icon_key: String,
    pub metric: String,
    pub label: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub challenge: String,
    pub solution: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub position: String,
    pub avatar_image_path: String,
}

/// A single portfolio entry.
///
/// `id` is ignored when authoring: [`Catalog::new`] numbers records in
/// authoring order, starting at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    #[serde(default)]
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub client: String,
    pub category: String,
    pub date: String,
    pub excerpt: String,
    pub hero_image_path: String,
    pub narrative: Narrative,
    pub results: Vec<ResultHighlight>,
    pub testimonial: Testimonial,
    pub technologies: Vec<String>,
}

/// Card-sized projection used by list pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudySummary {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub hero_image_path: String,
    pub slug: String,
    pub excerpt: String,
}

impl From<&CaseStudy> for CaseStudySummary {
    fn from(record: &CaseStudy) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            category: record.category.clone(),
            hero_image_path: record.hero_image_path.clone(),
            slug: record.slug.clone(),
            excerpt: record.excerpt.clone(),
        }
    }
}

/// Immutable, slug-addressed collection of case studies.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<CaseStudy>,
    by_slug: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(mut records: Vec<CaseStudy>) -> Result<Self, CatalogError> {
        let mut by_slug = HashMap::with_capacity(records.len());
        for (index, record) in records.iter_mut().enumerate() {
            if !is_url_safe_slug(&record.slug) {
                return Err(CatalogError::InvalidSlug(record.slug.clone()));
            }
            if by_slug.insert(record.slug.clone(), index).is_some() {
                return Err(CatalogError::DuplicateSlug(record.slug.clone()));
            }
            record.id = index as u32 + 1;
        }
        Ok(Self { records, by_slug })
    }

    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        let records: Vec<CaseStudy> = serde_json::from_str(document)
            .map_err(|e| CatalogError::Malformed(e.to_string()))?;
        Self::new(records)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Every record, in authoring order.
    pub fn get_all(&self) -> &[CaseStudy] {
        &self.records
    }

    /// Exact, case-sensitive lookup. A miss is an ordinary outcome (stale or
    /// guessed link), not an error.
    pub fn get_by_slug(&self, slug: &str) -> Option<&CaseStudy> {
        self.by_slug.get(slug).map(|&index| &self.records[index])
    }

    /// Every addressable detail page, once each, in catalog order.
    pub fn list_slugs(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.slug.as_str()).collect()
    }

    pub fn to_summary_view(&self) -> Vec<CaseStudySummary> {
        self.records.iter().map(CaseStudySummary::from).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Lowercase ASCII alphanumerics separated by single hyphens.
pub fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .split('-')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(slug: &str, category: &str) -> CaseStudy {
        CaseStudy {
            id: 0,
            slug: slug.to_string(),
            title: format!("Title {}", slug),
            client: "Client".to_string(),
            category: category.to_string(),
            date: "Q1 2024".to_string(),
            excerpt: "Excerpt".to_string(),
            hero_image_path: "/images/hero.png".to_string(),
            narrative: Narrative {
                challenge: "Challenge".to_string(),
                solution: "Solution".to_string(),
            },
            results: vec![ResultHighlight {
                icon_key: "Star".to_string(),
                metric: "1".to_string(),
                label: "Label".to_string(),
                detail: "Detail".to_string(),
            }],
            testimonial: Testimonial {
                quote: "Quote".to_string(),
                author: "Author".to_string(),
                position: "Position".to_string(),
                avatar_image_path: "/images/avatar.png".to_string(),
            },
            technologies: vec!["Rust".to_string()],
        }
    }

    #[test]
    fn test_list_slugs_preserves_authoring_order() {
        let catalog = Catalog::new(vec![
            record("a", "Paid Ads"),
            record("b", "Web Development"),
            record("c", "Paid Ads"),
        ])
        .unwrap();
        assert_eq!(catalog.list_slugs(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_ids_are_assigned_in_order() {
        let catalog = Catalog::new(vec![record("a", "x"), record("b", "x")]).unwrap();
        let ids: Vec<u32> = catalog.get_all().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_every_listed_slug_resolves_to_itself() {
        let catalog = portfolio();
        assert!(!catalog.is_empty());
        for slug in catalog.list_slugs() {
            let found = catalog.get_by_slug(slug).expect("listed slug must resolve");
            assert_eq!(found.slug, slug);
        }
    }

    #[test]
    fn test_lookup_miss_is_none() {
        assert!(portfolio().get_by_slug("nonexistent-slug").is_none());
        // case-sensitive
        assert!(portfolio().get_by_slug("Ecommerce-Transformation").is_none());
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let err = Catalog::new(vec![record("a", "x"), record("a", "y")]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateSlug("a".to_string()));
    }

    #[test]
    fn test_unsafe_slugs_rejected() {
        for slug in ["", "Has-Caps", "two--hyphens", "-leading", "trailing-", "with space", "ümlaut"] {
            assert!(!is_url_safe_slug(slug), "{:?} should be rejected", slug);
        }
        assert!(is_url_safe_slug("google-ads-optimization"));
        assert!(is_url_safe_slug("q3-2024"));
    }

    #[test]
    fn test_malformed_document() {
        assert!(matches!(Catalog::from_json("{not json"), Err(CatalogError::Malformed(_))));
    }

    #[test]
    fn test_summary_view_matches_catalog_order() {
        let catalog = portfolio();
        let summaries = catalog.to_summary_view();
        assert_eq!(summaries.len(), catalog.len());
        for (summary, record) in summaries.iter().zip(catalog.get_all()) {
            assert_eq!(summary.id, record.id);
            assert_eq!(summary.slug, record.slug);
            assert_eq!(summary.hero_image_path, record.hero_image_path);
        }
    }

    #[test]
    fn test_authored_records_are_well_formed() {
        for record in portfolio().get_all() {
            assert!(!record.results.is_empty(), "{} has no results", record.slug);
            assert!(!record.technologies.is_empty(), "{} has no technologies", record.slug);
        }
    }

    #[test]
    fn test_authored_images_are_bundled() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../frontend/public");
        for record in portfolio().get_all() {
            for path in [&record.hero_image_path, &record.testimonial.avatar_image_path] {
                let file = public.join(path.trim_start_matches('/'));
                assert!(file.is_file(), "{} references missing {}", record.slug, path);
            }
        }
    }
}
