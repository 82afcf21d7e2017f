use super::WallpaperSetter;
use crate::utils::quote_script_string;
use crate::{Error, Result};
use std::path::Path;
use std::process::Command;

pub struct FinderSetter;

fn desktop_picture_script(path: &Path) -> String {
    format!(
        "tell application \"Finder\" to set desktop picture to POSIX file \"{}\"",
        quote_script_string(&path.to_string_lossy())
    )
}

impl WallpaperSetter for FinderSetter {
    fn name(&self) -> &'static str {
        "finder"
    }

    fn apply(&self, path: &Path) -> Result<()> {
        let script = desktop_picture_script(path);
        let output = Command::new("osascript").arg("-e").arg(&script).output()?;

        if !output.status.success() {
            return Err(Error::DesktopEnv(format!(
                "Failed to set wallpaper: {}",
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        Ok(())
    }
}
