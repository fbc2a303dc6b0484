use crate::errors::FetchError;
use crate::models::{format_search_date, FareObservation, FareSeries, SearchParams};
use crate::series::{group_by_airline, ColorScheme};
use reqwest::{redirect, Client};
use std::time::Duration;
use tracing::{debug, error, warn};

/// Fetches fare observations for a search and turns them into chart series.
///
/// Every call issues exactly one GET against the fare endpoint. Redirects are
/// not followed, so a 3xx answer is an `http_status` failure. There is no
/// retry and no caching; two overlapping calls are two independent requests.
#[derive(Debug, Clone)]
pub struct FareSeriesBuilder {
    client: Client,
    endpoint: String,
    colors: ColorScheme,
}

impl FareSeriesBuilder {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: http_client(None),
            endpoint: endpoint.into(),
            colors: ColorScheme::default(),
        }
    }

    pub fn with_colors(mut self, colors: ColorScheme) -> Self {
        self.colors = colors;
        self
    }

    /// Applies a transport-level timeout; the builder itself never times out.
    /// A zero duration means no timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = http_client((!timeout.is_zero()).then_some(timeout));
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn build_series(&self, params: &SearchParams) -> Result<Vec<FareSeries>, FetchError> {
        match self.fetch_observations(params).await {
            Ok(observations) => {
                debug!(ond = %params.ond(), count = observations.len(), "received fare observations");
                let colors = self.colors;
                Ok(group_by_airline(observations, |airline| colors.color_for(airline)))
            }
            Err(err) => {
                error!(ond = %params.ond(), kind = err.kind(), "failed to fetch fares: {err}");
                Err(err)
            }
        }
    }

    async fn fetch_observations(&self, params: &SearchParams) -> Result<Vec<FareObservation>, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("OnD", params.ond()),
                ("trip_type", params.trip_type.code().to_string()),
                ("search_date_min", format_search_date(params.date_min)),
                ("search_date_max", format_search_date(params.date_max)),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

fn http_client(timeout: Option<Duration>) -> Client {
    let mut builder = Client::builder().redirect(redirect::Policy::none());
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().unwrap_or_else(|err| {
        warn!("failed to configure fare client ({err}), using defaults without timeout");
        Client::new()
    })
}
