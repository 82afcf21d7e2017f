use super::WallpaperSetter;
use crate::utils::command_exists;
use crate::{Error, Result};
use std::path::Path;
use std::process::Command;

/// Plain X11 sessions. `feh` records the choice in `~/.fehbg`.
pub struct FehSetter;

impl FehSetter {
    pub fn is_available() -> bool {
        std::env::var("DISPLAY").is_ok() && command_exists("feh")
    }
}

impl WallpaperSetter for FehSetter {
    fn name(&self) -> &'static str {
        "feh"
    }

    fn apply(&self, path: &Path) -> Result<()> {
        let output = Command::new("feh").arg("--bg-fill").arg(path).output()?;

        if !output.status.success() {
            return Err(Error::DesktopEnv(format!(
                "feh failed: {}",
                String::from_utf8_lossy(&output.stderr)
            )));
        }
        Ok(())
    }
}
