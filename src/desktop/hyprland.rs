use super::WallpaperSetter;
use crate::utils::command_exists;
use crate::{Error, Result};
use std::path::Path;
use std::process::{Command, Stdio};

struct WallpaperTools {
    has_hyprpaper: bool,
    has_swww: bool,
    has_swaybg: bool,
}

impl WallpaperTools {
    fn detect() -> Self {
        Self {
            has_hyprpaper: command_exists("hyprpaper"),
            has_swww: command_exists("swww"),
            has_swaybg: command_exists("swaybg"),
        }
    }

    fn has_any(&self) -> bool {
        self.has_hyprpaper || self.has_swww || self.has_swaybg
    }
}

pub struct HyprlandSetter {
    tools: WallpaperTools,
}

impl HyprlandSetter {
    pub fn new() -> Result<Self> {
        let tools = WallpaperTools::detect();
        if !tools.has_any() {
            return Err(Error::DesktopEnv(
                "No supported wallpaper tool found. Please install one of hyprpaper, swww, or swaybg."
                    .to_string(),
            ));
        }
        Ok(Self { tools })
    }

    pub fn is_available() -> bool {
        std::env::var("HYPRLAND_INSTANCE_SIGNATURE").is_ok()
    }
}

fn run(program: &str, args: &[&str]) -> Result<bool> {
    let output = Command::new(program).args(args).output()?;
    if !output.status.success() {
        tracing::warn!(
            "{} {} failed: {}",
            program,
            args.first().copied().unwrap_or_default(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(output.status.success())
}

impl WallpaperSetter for HyprlandSetter {
    fn name(&self) -> &'static str {
        "hyprland"
    }

    fn apply(&self, path: &Path) -> Result<()> {
        let path_str = path.to_string_lossy().into_owned();

        if self.tools.has_hyprpaper {
            let target = format!(",{}", path_str);
            if run("hyprctl", &["hyprpaper", "preload", path_str.as_str()])?
                && run("hyprctl", &["hyprpaper", "wallpaper", target.as_str()])?
            {
                return Ok(());
            }
        }

        if self.tools.has_swww && run("swww", &["img", path_str.as_str(), "-t", "grow"])? {
            return Ok(());
        }

        if self.tools.has_swaybg {
            // swaybg keeps running to hold the image.
            let spawned = Command::new("swaybg")
                .args(["-i", path_str.as_str(), "-m", "fill"])
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();

            match spawned {
                Ok(_) => return Ok(()),
                Err(e) => tracing::warn!("swaybg failed to start: {}", e),
            }
        }

        Err(Error::DesktopEnv(
            "Failed to set wallpaper. No supported wallpaper tool (hyprpaper, swww, or swaybg) succeeded"
                .to_string(),
        ))
    }
}
