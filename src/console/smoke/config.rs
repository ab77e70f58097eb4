//! Fixed payload and endpoints for the smoke test.
use std::time::Duration;

use serde_json::{json, Value};
use url::Url;

pub const HTTP_TIMEOUT: Duration = Duration::from_secs(5);

/// The seven soil parameters sent verbatim to both POST tiers.
#[must_use]
pub fn test_payload() -> Value {
    json!({
        "N": 50,
        "P": 35,
        "K": 180,
        "temperature": 25,
        "humidity": 65,
        "ph": 6.5,
        "rainfall": 150
    })
}

/// A POST target for one tier.
pub struct ApiTier {
    /// Short name used in result lines ("ML API Working!").
    pub label: String,
    /// Section heading ("ML API (Port 5001)").
    pub heading: String,
    pub url: Url,
}

impl ApiTier {
    pub fn new(label: impl Into<String>, heading: impl Into<String>, url: Url) -> Self {
        Self {
            label: label.into(),
            heading: heading.into(),
            url,
        }
    }
}

/// The three tier targets. A value rather than literals in the control
/// flow so tests can substitute mock servers on ephemeral ports.
pub struct Endpoints {
    pub api_tiers: Vec<ApiTier>,
    pub frontend: Url,
    /// Heading for the frontend reachability check.
    pub frontend_heading: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_tiers: vec![
                ApiTier::new(
                    "ML API",
                    "ML API (Port 5001)",
                    Url::parse("http://localhost:5001/predict").expect("hardcoded URL should be valid"),
                ),
                ApiTier::new(
                    "Backend",
                    "Backend API (Port 5000)",
                    Url::parse("http://localhost:5000/api/crop-recommendation").expect("hardcoded URL should be valid"),
                ),
            ],
            frontend: Url::parse("http://localhost:5000/").expect("hardcoded URL should be valid"),
            frontend_heading: "Frontend (Port 5000)".to_string(),
        }
    }
}

/// Static usage instructions printed after the checks.
pub const INSTRUCTIONS: &str = "\n📝 Instructions:
1. Open browser: http://localhost:5000
2. Go to 'Crop Recommendation' page
3. Enter soil parameters
4. Click 'Get Recommendation'
5. See crop suggestion from ML model!";
