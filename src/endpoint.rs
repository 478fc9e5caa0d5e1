use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::error::PulseError;

/// Base URL of the EarthNetworks Pulse API gateway.
pub const API_BASE_URL: &str = "https://earthnetworks.azure-api.net/";

/// Substitute `{0}`, `{1}`, ... in `template` with the percent-encoded
/// params and prefix the API base URL.
///
/// Alphanumeric characters pass through unescaped, every other byte is
/// escaped. A placeholder with no matching param is left in place; if
/// that happens the rendered string still has to survive URL parsing in
/// [`Endpoint::url`].
pub fn render(template: &str, params: &[&str]) -> String {
    let mut rendered = template.to_string();
    for (idx, value) in params.iter().enumerate() {
        let encoded = utf8_percent_encode(value, NON_ALPHANUMERIC).to_string();
        rendered = rendered.replace(&format!("{{{idx}}}"), &encoded);
    }

    format!("{API_BASE_URL}{rendered}")
}

/// The API operations this SDK knows how to call.
///
/// Each operation is bound to a fixed path template; templates may carry
/// positional `{n}` placeholders filled by [`Endpoint::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    AlmanacData,
    SkyConditionIcons,
    TenDayForecast,
    CurrentWeather,
}

impl Endpoint {
    pub const fn path_template(&self) -> &'static str {
        match self {
            Endpoint::AlmanacData => "getAlmanacData/data/almanac/v1",
            Endpoint::SkyConditionIcons => "getSkyConditionIcons/resources/v3/icons",
            Endpoint::TenDayForecast => "data/forecasts/v1/daily",
            Endpoint::CurrentWeather => "data/observations/v4/current",
        }
    }

    /// Full URL string for this operation with `params` substituted.
    pub fn render(&self, params: &[&str]) -> String {
        render(self.path_template(), params)
    }

    /// Render and parse as an absolute URL.
    ///
    /// None of the current templates can fail here, but the check stays:
    /// future endpoints may take params that break the parse.
    pub fn url(&self, params: &[&str]) -> Result<Url, PulseError> {
        Url::parse(&self.render(params)).map_err(|_| PulseError::InvalidEndpoint)
    }
}
