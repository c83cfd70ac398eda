use anyhow::{anyhow, Result};
use pof_gateways::google;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "paraondefoi.toml";

pub const ENV_NAME_API_KEY: &str = "GOOGLE_MAPS_API_KEY";

/// The provider does not accept more than one request per second.
const MIN_INTERVAL_LOWER_BOUND: Duration = Duration::from_secs(1);

pub struct Config {
    pub geocoding: Geocoding,
    pub input: Input,
    pub output: Output,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(api_key) = env::var(ENV_NAME_API_KEY) {
            cfg.geocoding.set_api_key(api_key);
        }
        Ok(cfg)
    }
}

pub struct Geocoding {
    pub gateway: GeocodingGateway,
    pub min_interval: Duration,
    pub request_timeout: Duration,
}

impl Geocoding {
    fn set_api_key(&mut self, key: String) {
        match &mut self.gateway {
            GeocodingGateway::Google { api_key, .. } => *api_key = Some(key),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodingGateway {
    Google {
        api_key: Option<String>,
        base_url: String,
    },
}

pub struct Input {
    pub delimiter: u8,
}

pub struct Output {
    pub map_file: PathBuf,
    pub log_file: PathBuf,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            geocoding,
            gateway,
            input,
            output,
        } = from;

        let raw::Geocoding {
            gateway: gw_name,
            min_interval,
            request_timeout,
        } = geocoding.unwrap_or_default();

        let min_interval = min_interval.unwrap_or(MIN_INTERVAL_LOWER_BOUND);
        if min_interval < MIN_INTERVAL_LOWER_BOUND {
            return Err(anyhow!(
                "The minimum interval between geocoding requests must be at least {:?} (got {:?})",
                MIN_INTERVAL_LOWER_BOUND,
                min_interval
            ));
        }
        let request_timeout = request_timeout.unwrap_or(google::DEFAULT_REQUEST_TIMEOUT);

        let gateway = match gw_name.unwrap_or(raw::GeocodingGateway::Google) {
            raw::GeocodingGateway::Google => {
                let raw::Google { api_key, base_url } = gateway
                    .and_then(|gw| gw.google)
                    .or_else(|| raw::Gateway::default().google)
                    .ok_or_else(|| anyhow!("Missing 'google' gateway configuration"))?;
                let base_url = base_url
                    .unwrap_or_else(|| google::DEFAULT_BASE_URL.to_string());
                GeocodingGateway::Google { api_key, base_url }
            }
        };

        let geocoding = Geocoding {
            gateway,
            min_interval,
            request_timeout,
        };

        let raw::Input { delimiter } = input.unwrap_or_default();
        if !delimiter.is_ascii() {
            return Err(anyhow!("The CSV delimiter must be an ASCII character"));
        }
        let input = Input {
            delimiter: delimiter as u8,
        };

        let raw::Output { map_file, log_file } = output.unwrap_or_default();
        let output = Output { map_file, log_file };

        Ok(Self {
            geocoding,
            input,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(s: &str) -> Result<Config> {
        let raw: raw::Config = toml::from_str(s)?;
        Config::try_from(raw)
    }

    #[test]
    fn load_default_config() {
        let cfg = Config::try_from(raw::Config::default()).unwrap();
        assert_eq!(Duration::from_secs(1), cfg.geocoding.min_interval);
        assert_eq!(b',', cfg.input.delimiter);
        assert_eq!(Path::new("mapa.html"), cfg.output.map_file);
        assert_eq!(
            GeocodingGateway::Google {
                api_key: None,
                base_url: "https://maps.googleapis.com/maps/api/geocode/json".into()
            },
            cfg.geocoding.gateway
        );
    }

    #[test]
    fn load_missing_file_falls_back_to_defaults() {
        let cfg = Config::try_load_from_file_or_default(Some("does-not-exist.toml")).unwrap();
        assert_eq!(Path::new("paraondefoi.log"), cfg.output.log_file);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let cfg = from_toml(
            r#"
            [gateway.google]
            api-key = "secret"
            "#,
        )
        .unwrap();
        assert_eq!(Duration::from_secs(10), cfg.geocoding.request_timeout);
        assert_eq!(
            GeocodingGateway::Google {
                api_key: Some("secret".into()),
                base_url: google::DEFAULT_BASE_URL.into()
            },
            cfg.geocoding.gateway
        );
    }

    #[test]
    fn reject_too_short_min_interval() {
        let res = from_toml(
            r#"
            [geocoding]
            min-interval = "500ms"
            "#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn reject_non_ascii_delimiter() {
        let res = from_toml(
            r#"
            [input]
            delimiter = "§"
            "#,
        );
        assert!(res.is_err());
    }
}
