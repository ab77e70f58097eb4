use reqwest::StatusCode;
use serde_json::Value;

use super::checks::{api, web};
use super::config::{self, Endpoints, HTTP_TIMEOUT};
use crate::console::printer::Printer;
use crate::console::report::{self, CheckReport};

/// Runs the three tier checks in order, never aborting early.
pub struct Service<P: Printer> {
    pub printer: P,
    pub endpoints: Endpoints,
}

/// Outcome of one tier check, kept structured so tests assert on values
/// rather than on printed text.
#[derive(Debug, Clone)]
pub enum TierResult {
    Api {
        label: String,
        result: Result<Value, api::Error>,
    },
    Web {
        result: Result<StatusCode, web::Error>,
    },
}

impl TierResult {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        match self {
            TierResult::Api { result, .. } => result.is_ok(),
            TierResult::Web { result } => result.is_ok(),
        }
    }
}

impl<P: Printer> Service<P> {
    pub fn new(printer: P) -> Self {
        Self {
            printer,
            endpoints: Endpoints::default(),
        }
    }

    /// Every network call is individually guarded; a failed tier is
    /// reported and the run moves on to the next one.
    pub async fn run_checks(&self) -> Vec<TierResult> {
        let payload = config::test_payload();
        let mut results = Vec::new();

        report::header(&self.printer, "🌱 SMART SOIL MONITORING SYSTEM - INTEGRATION TEST");

        self.print_payload(&payload);

        for (index, tier) in self.endpoints.api_tiers.iter().enumerate() {
            report::header(&self.printer, &format!("TEST {}: {}", index + 1, tier.heading));

            let result = api::post_json(&tier.url, &payload, HTTP_TIMEOUT).await;

            match &result {
                Ok(response) => {
                    report::render(&self.printer, &CheckReport::pass(format!("{} Working!", tier.label)));
                    self.printer.println(&format!("Response: {}", pretty(response)));
                }
                Err(err) => {
                    report::render(&self.printer, &CheckReport::fail(format!("{} Error: {err}", tier.label)));
                }
            }

            results.push(TierResult::Api {
                label: tier.label.clone(),
                result,
            });
        }

        results.push(self.check_frontend().await);

        report::header(&self.printer, "✅ SYSTEM TEST COMPLETE!");
        self.printer.println(config::INSTRUCTIONS);

        results
    }

    fn print_payload(&self, payload: &Value) {
        self.printer.println("\n📊 Test Input (Soil Parameters):");
        self.printer.println(&pretty(payload));
    }

    async fn check_frontend(&self) -> TierResult {
        let test_number = self.endpoints.api_tiers.len() + 1;

        report::header(
            &self.printer,
            &format!("TEST {test_number}: {}", self.endpoints.frontend_heading),
        );

        let result = web::get_root(&self.endpoints.frontend, HTTP_TIMEOUT).await;

        match &result {
            Ok(_) => {
                report::render(&self.printer, &CheckReport::pass("Frontend Available!"));
                self.printer.println(&format!("📱 Access at: {}", self.endpoints.frontend));
            }
            Err(err) => {
                report::render(&self.printer, &CheckReport::fail(format!("Frontend Error: {err}")));
            }
        }

        TierResult::Web { result }
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).expect("check responses should serialize back to JSON")
}
