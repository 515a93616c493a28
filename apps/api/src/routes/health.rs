use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "coach-api"
    }))
}

#[derive(Debug, Serialize)]
pub struct Feature {
    pub name: &'static str,
    pub route: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FeatureList {
    pub features: Vec<Feature>,
    /// Model answering every panel.
    pub model: String,
}

pub const FEATURES: [Feature; 5] = [
    Feature {
        name: "Resume Generator",
        route: "/api/v1/resume",
    },
    Feature {
        name: "Cover Letter Generator",
        route: "/api/v1/cover-letter",
    },
    Feature {
        name: "CV Analyzer",
        route: "/api/v1/cv/analyze",
    },
    Feature {
        name: "LinkedIn Summary Generator",
        route: "/api/v1/linkedin-summary",
    },
    Feature {
        name: "Mock Interview Chatbot",
        route: "/api/v1/interview/sessions",
    },
];

/// GET /api/v1/features
/// Lists the feature panels and the model behind them.
pub async fn features_handler(State(state): State<AppState>) -> Json<FeatureList> {
    Json(FeatureList {
        features: FEATURES.into_iter().collect(),
        model: state.chain.model_name().to_string(),
    })
}
