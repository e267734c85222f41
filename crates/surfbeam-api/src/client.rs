// Modem HTTP client
//
// Wraps `reqwest::Client` with the modem's endpoint layout. One GET per
// call, no retries, no session state: the only thing kept between calls is
// the base URL and the HTTP client, neither of which changes after
// construction.

use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::status::{self, ModemStatus};
use crate::transport::TransportConfig;

/// Address the modem answers on from the LAN side.
pub const DEFAULT_MODEM_URI: &str = "http://192.168.100.1";

const MODEM_STATUS_PATH: &str = "/index.cgi?page=modemStatusData";
const TRIA_STATUS_PATH: &str = "/index.cgi?page=triaStatusData";

/// Client for a single modem's embedded web interface.
///
/// Cheap to clone and safe to share between tasks; concurrent calls are
/// independent requests.
#[derive(Debug, Clone)]
pub struct ModemClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ModemClient {
    /// Create a client for `base_url`, building the HTTP client from `transport`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Client for [`DEFAULT_MODEM_URI`] with default transport settings.
    pub fn default_modem() -> Result<Self, Error> {
        let base_url = Url::parse(DEFAULT_MODEM_URI)?;
        Self::new(base_url, &TransportConfig::default())
    }

    /// The modem base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}{path}")).map_err(Error::from)
    }

    /// URL of the modem status page.
    pub fn modem_status_url(&self) -> Result<Url, Error> {
        self.endpoint(MODEM_STATUS_PATH)
    }

    /// URL of the TRIA (transmitter) status page. Its format is not decoded.
    pub fn tria_status_url(&self) -> Result<Url, Error> {
        self.endpoint(TRIA_STATUS_PATH)
    }

    // ── Requests ─────────────────────────────────────────────────────

    /// Fetch and decode the current modem status.
    pub async fn modem_status(&self) -> Result<ModemStatus, Error> {
        let body = self.raw_modem_status().await?;
        Ok(status::decode(&body)?)
    }

    /// Fetch the undecoded modem status page.
    pub async fn raw_modem_status(&self) -> Result<String, Error> {
        self.fetch_raw(self.modem_status_url()?).await
    }

    /// Fetch the undecoded TRIA status page.
    pub async fn raw_tria_status(&self) -> Result<String, Error> {
        self.fetch_raw(self.tria_status_url()?).await
    }

    /// GET `url` and return the fully buffered body as text.
    pub async fn fetch_raw(&self, url: Url) -> Result<String, Error> {
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            debug!(%status, "modem rejected request");
            return Err(Error::HttpStatus {
                status: status.as_u16(),
            });
        }

        resp.text().await.map_err(Error::Body)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> ModemClient {
        ModemClient::with_client(reqwest::Client::new(), Url::parse(base).unwrap())
    }

    #[test]
    fn endpoints_append_to_default_address() {
        let c = client(DEFAULT_MODEM_URI);
        assert_eq!(
            c.modem_status_url().unwrap().as_str(),
            "http://192.168.100.1/index.cgi?page=modemStatusData"
        );
        assert_eq!(
            c.tria_status_url().unwrap().as_str(),
            "http://192.168.100.1/index.cgi?page=triaStatusData"
        );
    }

    #[test]
    fn endpoints_keep_base_path() {
        let c = client("https://proxy.lan/modem/");
        assert_eq!(
            c.modem_status_url().unwrap().as_str(),
            "https://proxy.lan/modem/index.cgi?page=modemStatusData"
        );
    }

    #[test]
    fn default_modem_uses_well_known_address() {
        let c = ModemClient::default_modem().unwrap();
        assert_eq!(c.base_url().host_str(), Some("192.168.100.1"));
    }

    #[test]
    fn client_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ModemClient>();
    }
}
