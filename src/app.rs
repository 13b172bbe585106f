use std::collections::BTreeMap;

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::{
    BodyAnalysis, BodyFallback, FaceAnalysis, FaceFallback, FallbackProvider, SkinAnalysis,
    SkinFallback,
};
use crate::data::filter::{by_gender, filter};
use crate::data::model::Product;
use crate::recommend::{self, PersonalityStyle, RecommendationRequest, RecommendationResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
    pub features: HealthFeatures,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthFeatures {
    pub fallback_analysis: bool,
    pub models_available: bool,
    pub model_files: BTreeMap<String, bool>,
    pub catalog_products: usize,
}

/// Inputs to a product recommendation; only `gender` affects the result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductQuery {
    pub gender: Option<String>,
    pub body_type: Option<String>,
    pub skin_tone: Option<String>,
    pub mbti: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FiltersApplied {
    pub gender: String,
    pub body_type: String,
    pub skin_tone: String,
    pub personality: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductRecommendationResponse {
    /// At most one page.
    pub products: Vec<Product>,
    /// Size of the whole pool before paging.
    pub count: usize,
    pub filters_applied: FiltersApplied,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductListing {
    pub products: Vec<Product>,
    pub count: usize,
    pub total_products: usize,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Request handlers behind the command-line boundary.
pub struct AuraSyncApp {
    pub state: AppState,
}

impl AuraSyncApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn health(&self) -> HealthReport {
        let model_files = self.state.model_files();
        let models_available = model_files.values().all(|found| *found);
        HealthReport {
            status: "healthy",
            timestamp: chrono::Local::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION"),
            features: HealthFeatures {
                fallback_analysis: true,
                models_available,
                model_files,
                catalog_products: self.state.catalog.len(),
            },
        }
    }

    /// The image is accepted for parity with the upload contract but never
    /// inspected: every estimate comes from the fallback path.
    pub fn analyze_face(&self, image: &[u8]) -> Result<FaceAnalysis> {
        debug!("face analysis on {} image bytes", image.len());
        let estimate = FaceFallback
            .estimate(&mut self.state.rng())
            .context("Face analysis failed")?;
        info!("Fallback face analysis complete: {}", estimate.primary_label);
        Ok(estimate.into())
    }

    pub fn analyze_body(&self, image: &[u8], gender: Option<&str>) -> Result<BodyAnalysis> {
        debug!("body analysis on {} image bytes", image.len());
        let estimate = BodyFallback::for_gender(gender)
            .estimate(&mut self.state.rng())
            .context("Body analysis failed")?;
        info!("Fallback body analysis complete: {}", estimate.primary_label);
        Ok(estimate.into())
    }

    pub fn analyze_skin(&self, image: &[u8]) -> Result<SkinAnalysis> {
        debug!("skin analysis on {} image bytes", image.len());
        let estimate = SkinFallback
            .estimate(&mut self.state.rng())
            .context("Skin analysis failed")?;
        info!("Fallback skin analysis complete: {}", estimate.tone);
        Ok(estimate.into())
    }

    pub fn personality(&self, code: &str) -> Result<PersonalityStyle> {
        Ok(recommend::personality(code)?)
    }

    pub fn recommend(&self, request: &RecommendationRequest) -> RecommendationResult {
        recommend::recommend(request)
    }

    pub fn product_recommendations(&self, query: &ProductQuery) -> ProductRecommendationResponse {
        let gender = query.gender.as_deref().unwrap_or("").to_lowercase();
        let pool = filter(&self.state.catalog.products, Some(gender.as_str()), &mut self.state.rng());
        let count = pool.len();
        let products = pool.into_iter().take(self.state.settings.page_size).collect();

        let echo = |v: &Option<String>| v.clone().unwrap_or_default();
        ProductRecommendationResponse {
            products,
            count,
            filters_applied: FiltersApplied {
                gender,
                body_type: echo(&query.body_type),
                skin_tone: echo(&query.skin_tone),
                personality: echo(&query.mbti),
            },
        }
    }

    /// Plain listing: exact gender match, catalog order, no floor.
    pub fn list_products(&self, gender: Option<&str>, limit: usize) -> ProductListing {
        let matches = by_gender(&self.state.catalog.products, gender);
        let count = matches.len();
        ProductListing {
            products: matches.into_iter().take(limit).collect(),
            count,
            total_products: self.state.catalog.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::data::model::Catalog;
    use crate::tables::GENERIC_RECOMMENDATION;

    fn app_with(genders: &[&str]) -> AuraSyncApp {
        let products: Vec<Product> = genders
            .iter()
            .enumerate()
            .map(|(i, g)| {
                let p: Product = [("id", i.to_string()), ("gender", g.to_string())]
                    .into_iter()
                    .collect();
                p
            })
            .collect();
        let settings = Settings {
            seed: Some(2024),
            model_dir: std::env::temp_dir().join("aurasync-no-models"),
            ..Default::default()
        };
        AuraSyncApp::new(AppState::with_catalog(settings, Catalog::from_products(products)))
    }

    #[test]
    fn test_product_page_is_truncated_but_count_is_not() {
        let app = app_with(&["male"; 9]);
        let response = app.product_recommendations(&ProductQuery {
            gender: Some("MALE".into()),
            mbti: Some("INTJ".into()),
            ..Default::default()
        });
        assert_eq!(response.products.len(), 6);
        assert_eq!(response.count, 9);
        assert_eq!(response.filters_applied.gender, "male");
        assert_eq!(response.filters_applied.personality, "INTJ");
        assert_eq!(response.filters_applied.body_type, "");
    }

    #[test]
    fn test_product_recommendations_fall_back_to_catalog() {
        let app = app_with(&["male", "female", "female", "female"]);
        let response = app.product_recommendations(&ProductQuery {
            gender: Some("male".into()),
            ..Default::default()
        });
        assert_eq!(response.count, 4);
    }

    #[test]
    fn test_listing_has_no_floor() {
        let app = app_with(&["male", "female", "female", "female"]);
        let listing = app.list_products(Some("Male"), 10);
        assert_eq!(listing.count, 1);
        assert_eq!(listing.total_products, 4);

        let limited = app.list_products(None, 2);
        assert_eq!(limited.products.len(), 2);
        assert_eq!(limited.count, 4);
    }

    #[test]
    fn test_seeded_app_replays_analysis() {
        let app = app_with(&[]);
        let a = app.analyze_skin(&[]).unwrap();
        let b = app.analyze_skin(&[]).unwrap();
        assert_eq!(a, b);
        assert!(app.analyze_face(b"jpeg").unwrap().using_fallback);
        assert!(app.analyze_body(&[], Some("male")).unwrap().using_fallback);
    }

    #[test]
    fn test_unknown_personality_is_an_error() {
        let app = app_with(&[]);
        let err = app.personality("zzzz").unwrap_err();
        assert_eq!(err.to_string(), "Invalid MBTI type: ZZZZ");
        assert_eq!(app.personality("infp").unwrap().personality_type, "INFP");
    }

    #[test]
    fn test_empty_recommendation_request() {
        let app = app_with(&[]);
        let result = app.recommend(&RecommendationRequest::default());
        assert_eq!(result.recommendation, GENERIC_RECOMMENDATION);
        assert_eq!(result.input_parameters.gender, "female");
    }

    #[test]
    fn test_health_reports_missing_models() {
        let app = app_with(&["male"]);
        let report = app.health();
        assert_eq!(report.status, "healthy");
        assert!(!report.features.models_available);
        assert_eq!(report.features.model_files.len(), 2);
        assert_eq!(report.features.catalog_products, 1);
    }
}
