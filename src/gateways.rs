use crate::config::{self, GeocodingGateway, ENV_NAME_API_KEY};
use anyhow::{anyhow, Result};
use pof_gateways::google::GoogleGeocoder;

pub fn geocoding_gateway(cfg: &config::Geocoding) -> Result<GoogleGeocoder> {
    match &cfg.gateway {
        GeocodingGateway::Google { api_key, base_url } => {
            let api_key = api_key.clone().ok_or_else(|| {
                anyhow!("No Google Maps API key found: set {ENV_NAME_API_KEY} or configure gateway.google.api-key")
            })?;
            let gw = GoogleGeocoder::try_new(api_key, base_url.clone(), cfg.request_timeout)?;
            log::info!("Use Google geocoding gateway ({})", gw.base_url());
            Ok(gw)
        }
    }
}
