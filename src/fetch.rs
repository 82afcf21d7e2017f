use crate::Result;
use reqwest::Client;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// HTTP access used by the pipeline.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn get_text(&self, url: &str) -> Result<String>;
    /// Streams the body of `url` into `dest`, replacing any existing file.
    async fn download_to(&self, url: &str, dest: &Path) -> Result<()>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    async fn get_text(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    async fn download_to(&self, url: &str, dest: &Path) -> Result<()> {
        tracing::debug!("GET {} -> {}", url, dest.display());
        let mut response = self.client.get(url).send().await?.error_for_status()?;

        let mut file = File::create(dest).await?;
        let mut written = 0usize;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
            written += chunk.len();
        }
        file.flush().await?;

        tracing::debug!("wrote {} bytes to {}", written, dest.display());
        Ok(())
    }
}

impl<T: Fetch> Fetch for &T {
    async fn get_text(&self, url: &str) -> Result<String> {
        (**self).get_text(url).await
    }

    async fn download_to(&self, url: &str, dest: &Path) -> Result<()> {
        (**self).download_to(url, dest).await
    }
}
