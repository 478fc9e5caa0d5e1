use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::{
    endpoint::Endpoint,
    error::PulseError,
    model::{Location, Unit},
    results::{JsonObject, PulseResults},
    transport::{HttpTransport, Transport, TransportResponse},
};

/// Header carrying the API subscription key.
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// The only location addressing mode used by this SDK.
const LOCATION_TYPE: &str = "latitudelongitude";

/// Optional parameters for [`PulseClient::almanac_data`].
#[derive(Debug, Clone)]
pub struct AlmanacOptions {
    /// Number of days of almanac data. The API accepts 1-10; values
    /// outside that range are passed through and rejected remotely.
    pub days: i32,
    pub verbose: bool,
    pub culture_info: String,
}

impl Default for AlmanacOptions {
    fn default() -> Self {
        Self {
            days: 1,
            verbose: true,
            culture_info: "en-us".to_string(),
        }
    }
}

/// Optional parameters for [`PulseClient::current_weather`].
#[derive(Debug, Clone)]
pub struct CurrentWeatherOptions {
    pub verbose: bool,
    pub units: Unit,
    pub culture_info: String,
    pub rule_details: bool,
    pub meta_data: bool,
    pub include_qc_flags: bool,
}

impl Default for CurrentWeatherOptions {
    fn default() -> Self {
        Self {
            verbose: true,
            units: Unit::Metric,
            culture_info: "en-us".to_string(),
            rule_details: false,
            meta_data: false,
            include_qc_flags: false,
        }
    }
}

/// Client for the EarthNetworks Pulse weather API.
///
/// Holds the subscription key and a transport, and exposes one async
/// method per API operation. Construction performs no network I/O; a
/// subscription key from
/// [EarthNetworks](https://login.enterprise.earthnetworks.com/) is
/// required before any operation succeeds.
///
/// Operations resolve exactly one [`PulseResults`] each. Calls issued
/// concurrently from the same client are independent and may complete in
/// any order. The credential is not guarded by a lock; do not mutate it
/// while requests are in flight.
#[derive(Debug, Clone)]
pub struct PulseClient {
    subscription_key: Option<String>,
    transport: Arc<dyn Transport>,
}

impl Default for PulseClient {
    fn default() -> Self {
        Self {
            subscription_key: None,
            transport: Arc::new(HttpTransport::new()),
        }
    }
}

impl PulseClient {
    /// Client over the default `reqwest` transport.
    pub fn new(subscription_key: impl Into<String>) -> Self {
        Self {
            subscription_key: Some(subscription_key.into()),
            ..Self::default()
        }
    }

    /// Client without a credential, over a caller-supplied transport.
    ///
    /// Useful for tests and for bringing another HTTP stack; set the key
    /// with [`PulseClient::set_subscription_key`] before calling
    /// operations.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            subscription_key: None,
            transport,
        }
    }

    pub fn set_subscription_key(&mut self, subscription_key: impl Into<String>) {
        self.subscription_key = Some(subscription_key.into());
    }

    pub fn subscription_key(&self) -> Option<&str> {
        self.subscription_key.as_deref()
    }

    /// Sunrise and sunset almanac data for a coordinate.
    pub async fn almanac_data(
        &self,
        location: Location,
        options: AlmanacOptions,
    ) -> PulseResults<JsonObject> {
        let query = vec![
            ("locationtype", LOCATION_TYPE.to_string()),
            ("location", location.to_string()),
            ("days", options.days.to_string()),
            ("verbose", options.verbose.to_string()),
            ("cultureInfo", options.culture_info),
        ];

        self.dispatch(Endpoint::AlmanacData, query).await
    }

    /// Currently observed conditions for a coordinate.
    pub async fn current_weather(
        &self,
        location: Location,
        options: CurrentWeatherOptions,
    ) -> PulseResults<JsonObject> {
        let query = vec![
            ("locationtype", LOCATION_TYPE.to_string()),
            ("location", location.to_string()),
            ("verbose", options.verbose.to_string()),
            ("units", options.units.as_str().to_string()),
            ("cultureInfo", options.culture_info),
            ("ruleDetails", options.rule_details.to_string()),
            ("metaData", options.meta_data.to_string()),
            ("includeQCFlags", options.include_qc_flags.to_string()),
        ];

        self.dispatch(Endpoint::CurrentWeather, query).await
    }

    /// Catalog of sky-condition icon resources.
    pub async fn sky_condition_icons(&self) -> PulseResults<JsonObject> {
        self.dispatch(Endpoint::SkyConditionIcons, Vec::new()).await
    }

    /// Daily forecast feed covering the next ten days and nights.
    pub async fn ten_day_forecast(&self) -> PulseResults<JsonObject> {
        self.dispatch(Endpoint::TenDayForecast, Vec::new()).await
    }

    /// Shared request path: credential check, URL build, one transport
    /// GET, response interpretation. No retries.
    async fn dispatch(
        &self,
        endpoint: Endpoint,
        query: Vec<(&'static str, String)>,
    ) -> PulseResults<JsonObject> {
        let Some(key) = self.subscription_key.as_ref() else {
            return PulseResults::failure(PulseError::MissingCredential);
        };

        let url = match endpoint.url(&[]) {
            Ok(url) => url,
            Err(err) => return PulseResults::failure(err),
        };

        let query: Vec<(String, String)> = query
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();
        let headers = vec![(SUBSCRIPTION_KEY_HEADER.to_string(), key.clone())];

        debug!(%url, ?endpoint, "dispatching request");

        match self.transport.get(url, &query, &headers).await {
            Ok(response) => interpret(response),
            Err(err) => {
                debug!(error = %err, ?endpoint, "transport failed");
                PulseResults::failure(PulseError::InvalidResponse)
            }
        }
    }
}

/// Map a raw reply onto the envelope: a 2xx status with a JSON object
/// body succeeds, everything else is `InvalidResponse`.
fn interpret(response: TransportResponse) -> PulseResults<JsonObject> {
    if !(200..=299).contains(&response.status) {
        return PulseResults::failure(PulseError::InvalidResponse);
    }

    match serde_json::from_slice::<Value>(&response.body) {
        Ok(Value::Object(object)) => PulseResults::success(object),
        Ok(_) | Err(_) => PulseResults::failure(PulseError::InvalidResponse),
    }
}
