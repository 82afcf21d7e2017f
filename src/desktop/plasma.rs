use super::WallpaperSetter;
use crate::utils::{command_exists, quote_script_string};
use crate::{Error, Result};
use std::path::Path;
use std::process::Command;

pub struct PlasmaSetter {
    qdbus: &'static str,
}

impl PlasmaSetter {
    pub fn new() -> Result<Self> {
        // Plasma 6 ships the Qt6 binary under its own name.
        ["qdbus", "qdbus6", "qdbus-qt5"]
            .into_iter()
            .find(|cmd| command_exists(cmd))
            .map(|qdbus| Self { qdbus })
            .ok_or_else(|| {
                Error::DesktopEnv("QDBus command not found. Please install qdbus.".to_string())
            })
    }

    pub fn is_available() -> bool {
        std::env::var("KDE_SESSION_VERSION").is_ok()
    }
}

/// Script for `evaluateScript`; `writeConfig` both stores and applies the image.
fn wallpaper_script(path: &Path) -> String {
    let escaped = quote_script_string(&path.to_string_lossy());
    format!(
        r#"
        var allDesktops = desktops();
        for (i = 0; i < allDesktops.length; i++) {{
            d = allDesktops[i];
            d.wallpaperPlugin = "org.kde.image";
            d.currentConfigGroup = Array("Wallpaper", "org.kde.image", "General");
            d.writeConfig("Image", "file://{}");
        }}
        "#,
        escaped
    )
}

impl WallpaperSetter for PlasmaSetter {
    fn name(&self) -> &'static str {
        "plasma"
    }

    fn apply(&self, path: &Path) -> Result<()> {
        let script = wallpaper_script(path);
        let output = Command::new(self.qdbus)
            .args([
                "org.kde.plasmashell",
                "/PlasmaShell",
                "org.kde.PlasmaShell.evaluateScript",
                script.as_str(),
            ])
            .output()?;

        if !output.status.success() {
            return Err(Error::DesktopEnv(format!(
                "Failed to set wallpaper: {}",
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        Ok(())
    }
}
