use super::WallpaperSetter;
use crate::utils::command_exists;
use crate::{Error, Result};
use reqwest::Url;
use std::path::Path;
use std::process::Command;

const SCHEMA: &str = "org.gnome.desktop.background";

pub struct GnomeSetter;

impl GnomeSetter {
    pub fn new() -> Result<Self> {
        if !command_exists("gsettings") {
            return Err(Error::DesktopEnv(
                "gsettings command not found. Please install glib2.".to_string(),
            ));
        }
        Ok(Self)
    }

    pub fn is_available() -> bool {
        std::env::var("GNOME_DESKTOP_SESSION_ID").is_ok() || command_exists("gnome-shell")
    }

    fn set_key(&self, key: &str, uri: &str) -> Result<()> {
        let output = Command::new("gsettings")
            .args(["set", SCHEMA, key, uri])
            .output()?;

        if !output.status.success() {
            return Err(Error::DesktopEnv(format!(
                "gsettings set {} failed: {}",
                key,
                String::from_utf8_lossy(&output.stderr)
            )));
        }
        Ok(())
    }
}

/// Percent-encoded `file://` URI, as gsettings expects.
fn picture_uri(path: &Path) -> Result<String> {
    Url::from_file_path(path)
        .map(String::from)
        .map_err(|_| Error::DesktopEnv(format!("{} is not an absolute path", path.display())))
}

impl WallpaperSetter for GnomeSetter {
    fn name(&self) -> &'static str {
        "gnome"
    }

    fn apply(&self, path: &Path) -> Result<()> {
        let uri = picture_uri(path)?;
        self.set_key("picture-uri", &uri)?;

        // Older GNOME has no dark variant key.
        if let Err(e) = self.set_key("picture-uri-dark", &uri) {
            tracing::debug!("{}", e);
        }

        Ok(())
    }
}
