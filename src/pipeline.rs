//! Pipeline orchestration - coordinates fetch, render, and write.
//!
//! Endpoints are processed strictly in table order, each one to completion
//! before the next begins. A failing endpoint is logged with its name and
//! recorded in the run summary; the remaining endpoints still run.

use crate::client::ApiClient;
use crate::config::Config;
use crate::endpoint::{ENDPOINTS, Endpoint, PayloadKind};
use crate::error::{Error, Result};
use crate::output::write_include;
use crate::render::{IncludeRenderer, normalize_assets, normalize_menu};
use crate::report::markdown_table;

use tracing::{error, info, warn};

/// Outcome of one endpoint's fetch → render → write sequence
#[derive(Debug)]
pub struct EndpointOutcome {
    pub endpoint: &'static str,
    pub error: Option<Error>,
}

/// Per-endpoint outcomes for a full run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<EndpointOutcome>,
}

impl RunSummary {
    /// Number of endpoints that failed
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.error.is_some()).count()
    }

    /// Total number of endpoints processed
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// True when every endpoint produced its include file
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Sequences the API client, renderer, and writer over the endpoint table
pub struct Pipeline {
    config: Config,
    client: ApiClient,
    renderer: IncludeRenderer,
}

impl Pipeline {
    pub fn new(config: Config) -> Result<Self> {
        let client = ApiClient::new(config.credentials.clone());
        let renderer = IncludeRenderer::new()?;
        Ok(Self {
            config,
            client,
            renderer,
        })
    }

    /// Execute the full workflow and collect per-endpoint outcomes.
    pub async fn run(&self) -> RunSummary {
        // 1. Prime the WordPress script/style cache. A failure here only
        //    risks stale asset descriptors, so the run continues.
        if let Err(e) = self.client.prime_asset_cache(&self.config.base_url).await {
            warn!(error = %e, "failed to prime script/style cache");
        }

        // 2. Process each endpoint independently, in fixed order.
        let mut summary = RunSummary::default();
        for endpoint in &ENDPOINTS {
            let error = match self.process(endpoint).await {
                Ok(()) => None,
                Err(e) => {
                    error!(endpoint = endpoint.name, error = %e, "endpoint failed");
                    Some(e)
                }
            };
            summary.outcomes.push(EndpointOutcome {
                endpoint: endpoint.name,
                error,
            });
        }
        summary
    }

    /// Fetch, render, and write a single endpoint.
    async fn process(&self, endpoint: &Endpoint) -> Result<()> {
        let url = endpoint.url(&self.config.base_url);
        info!(endpoint = endpoint.name, url = %url, "fetching");

        let payload = self.client.fetch_json(&url).await?;
        let rendered = self
            .renderer
            .render(endpoint, &self.config.base_url, &payload)?;

        if self.config.debug {
            let rows = debug_rows(endpoint, &payload)?;
            println!("### {}\n\n{}\n", endpoint.name, markdown_table(&rows));
            return Ok(());
        }

        let path = write_include(&self.config.output_dir, endpoint.output_file, &rendered).await?;
        info!(endpoint = endpoint.name, path = %path.display(), "wrote include");
        Ok(())
    }
}

/// Build the debug listing rows for an endpoint's payload.
///
/// URLs are shown as returned by the API; normalizing with an empty base
/// URL validates the payload without stripping anything.
fn debug_rows(endpoint: &Endpoint, payload: &serde_json::Value) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    match endpoint.payload {
        PayloadKind::Menu => {
            rows.push(vec!["ID".to_string(), "Title".to_string(), "URL".to_string()]);
            for item in normalize_menu(endpoint, "", payload)? {
                rows.push(vec![item.id.to_string(), item.title, item.url]);
            }
        }
        PayloadKind::AssetMap => {
            rows.push(vec!["Handle".to_string(), "URL".to_string()]);
            for (handle, url) in normalize_assets(endpoint, "", payload)? {
                rows.push(vec![handle, url]);
            }
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_run_summary_counts() {
        let summary = RunSummary {
            outcomes: vec![
                EndpointOutcome {
                    endpoint: "nav-header",
                    error: None,
                },
                EndpointOutcome {
                    endpoint: "scripts",
                    error: Some(Error::network("HTTP 502")),
                },
            ],
        };

        assert_eq!(summary.total(), 2);
        assert_eq!(summary.failed(), 1);
        assert!(!summary.is_success());
    }

    #[test]
    fn test_debug_rows_menu() {
        let payload = json!([
            {"ID": 7, "title": "About", "url": "https://creativecommons.org/about/"},
        ]);

        let rows = debug_rows(&ENDPOINTS[0], &payload).unwrap();
        assert_eq!(rows[0], ["ID", "Title", "URL"]);
        assert_eq!(rows[1], ["7", "About", "https://creativecommons.org/about/"]);
    }

    #[test]
    fn test_debug_rows_assets() {
        let payload = json!({"cc-global": "https://creativecommons.org/style.css"});

        let rows = debug_rows(&ENDPOINTS[3], &payload).unwrap();
        assert_eq!(rows[0], ["Handle", "URL"]);
        assert_eq!(rows[1], ["cc-global", "https://creativecommons.org/style.css"]);
    }
}
