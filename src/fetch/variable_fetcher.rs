//! Retrieves one variable's forecast series from the LDAPS point service.
//!
//! [`VariableFetcher`] issues one GET per call. [`fetch_isolated`] wraps any
//! [`ForecastSource`] so a failing variable is logged and contributes an empty
//! series instead of aborting the whole cycle.

use crate::fetch::error::FetchError;
use crate::fetch::response::parse_forecast_items;
use crate::types::forecast_item::ForecastItem;
use crate::types::run_identifier::RunIdentifier;
use crate::types::variable_kind::VariableKind;
use log::{debug, info, warn};
use reqwest::Client;
use std::future::Future;

/// Default endpoint of the LDAPS unified-area point service.
pub const DEFAULT_BASE_URL: &str =
    "https://apihub.kma.go.kr/api/typ02/openApi/NwpModelInfoService/getLdapsUnisArea";

/// Default `numOfRows`; one page covers the model's full horizon for one variable.
pub const DEFAULT_NUM_OF_ROWS: u32 = 60;

/// Anything that can produce the raw forecast series of one variable for one run.
pub trait ForecastSource {
    fn fetch_series(
        &self,
        run: &RunIdentifier,
        cell_code: &str,
        kind: VariableKind,
    ) -> impl Future<Output = Result<Vec<ForecastItem>, FetchError>> + Send;
}

/// HTTP client for the LDAPS point service.
#[derive(Debug, Clone)]
pub struct VariableFetcher {
    client: Client,
    base_url: String,
    api_key: String,
    num_of_rows: u32,
}

impl VariableFetcher {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        num_of_rows: u32,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            num_of_rows,
        }
    }

    fn query(
        &self,
        run: &RunIdentifier,
        cell_code: &str,
        kind: VariableKind,
    ) -> Vec<(&'static str, String)> {
        vec![
            ("authKey", self.api_key.clone()),
            ("dongCode", cell_code.to_string()),
            ("baseTime", run.base_time()),
            ("dataType", "XML".to_string()),
            ("numOfRows", self.num_of_rows.to_string()),
            ("pageNo", "1".to_string()),
            ("dataTypeCd", kind.service_code().to_string()),
        ]
    }
}

impl ForecastSource for VariableFetcher {
    async fn fetch_series(
        &self,
        run: &RunIdentifier,
        cell_code: &str,
        kind: VariableKind,
    ) -> Result<Vec<ForecastItem>, FetchError> {
        // The query carries the credential, so only the bare endpoint is logged.
        let url = self.base_url.clone();
        debug!("Requesting {} for run {} from {}", kind, run, url);

        let response = self
            .client
            .get(&self.base_url)
            .query(&self.query(run, cell_code, kind))
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.clone(), e.without_url()))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                let e = e.without_url();
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    FetchError::NetworkRequest(url, e)
                });
            }
        };

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Body(url, e.without_url()))?;
        parse_forecast_items(&body)
    }
}

/// Outcome of fetching one variable with failures isolated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableSeries {
    pub kind: VariableKind,
    pub items: Vec<ForecastItem>,
    pub failed: bool,
}

/// Fetches one variable, turning any [`FetchError`] into an empty series.
///
/// The failure is logged with the variable's display name; no retry is made.
pub async fn fetch_isolated<S: ForecastSource>(
    source: &S,
    run: &RunIdentifier,
    cell_code: &str,
    kind: VariableKind,
) -> VariableSeries {
    match source.fetch_series(run, cell_code, kind).await {
        Ok(items) => {
            info!("Fetched {} items for {}", items.len(), kind);
            VariableSeries {
                kind,
                items,
                failed: false,
            }
        }
        Err(e) => {
            warn!("Fetching {} for run {} failed: {}", kind, run, e);
            VariableSeries {
                kind,
                items: Vec::new(),
                failed: true,
            }
        }
    }
}
