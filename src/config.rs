use crate::{Error, Result};
use std::path::PathBuf;

pub const MARKET_VAR: &str = "BING_WALLPAPER_MARKET";
pub const DIR_VAR: &str = "BING_WALLPAPER_DIR";

/// Runtime settings for one run. Nothing here is read from or written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BingConfig {
    pub origin: String,
    pub market: String,
    pub uhd_width: u32,
    pub uhd_height: u32,
    pub download_dir: PathBuf,
}

impl Default for BingConfig {
    fn default() -> Self {
        Self {
            origin: "https://www.bing.com".to_string(),
            market: "en-US".to_string(),
            uhd_width: 3840,
            uhd_height: 2160,
            download_dir: std::env::temp_dir(),
        }
    }
}

impl BingConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`, ignoring empty values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(market) = non_empty(MARKET_VAR) {
            let market = market.trim();
            if !market
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
            {
                return Err(Error::Config(format!(
                    "{} must look like a market code such as en-US, got {:?}",
                    MARKET_VAR, market
                )));
            }
            config.market = market.to_string();
        }

        if let Some(dir) = non_empty(DIR_VAR) {
            config.download_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    pub fn archive_url(&self, days_back: u8) -> String {
        format!(
            "{}/HPImageArchive.aspx?format=js&idx={}&n=1&mkt={}&uhd=1&uhdwidth={}&uhdheight={}",
            self.origin, days_back, self.market, self.uhd_width, self.uhd_height
        )
    }

    pub fn image_url(&self, relative_url: &str) -> String {
        format!("{}{}", self.origin, relative_url)
    }
}
