use crate::Result;
use std::path::Path;

#[cfg(all(unix, not(target_os = "macos")))]
pub mod gnome;
#[cfg(all(unix, not(target_os = "macos")))]
pub mod hyprland;
#[cfg(target_os = "macos")]
pub mod macos;
#[cfg(all(unix, not(target_os = "macos")))]
pub mod plasma;
#[cfg(windows)]
pub mod windows;
#[cfg(all(unix, not(target_os = "macos")))]
pub mod x11;

pub trait WallpaperSetter {
    fn name(&self) -> &'static str;
    /// Sets `path` as the desktop background, persisted for the user and
    /// applied to the running session.
    fn apply(&self, path: &Path) -> Result<()>;
}

#[cfg(windows)]
pub fn get_wallpaper_setter() -> Result<Box<dyn WallpaperSetter>> {
    Ok(Box::new(windows::WindowsSetter))
}

#[cfg(target_os = "macos")]
pub fn get_wallpaper_setter() -> Result<Box<dyn WallpaperSetter>> {
    Ok(Box::new(macos::FinderSetter))
}

#[cfg(all(unix, not(target_os = "macos")))]
pub fn get_wallpaper_setter() -> Result<Box<dyn WallpaperSetter>> {
    let desktop = std::env::var("XDG_CURRENT_DESKTOP").unwrap_or_default();

    // XDG_CURRENT_DESKTOP may hold a colon separated list, e.g. "ubuntu:GNOME".
    for name in desktop.split(':').map(str::to_lowercase) {
        match name.as_str() {
            "hyprland" => return Ok(Box::new(hyprland::HyprlandSetter::new()?)),
            "kde" | "plasma" => return Ok(Box::new(plasma::PlasmaSetter::new()?)),
            "gnome" | "unity" | "budgie" => return Ok(Box::new(gnome::GnomeSetter::new()?)),
            _ => {}
        }
    }

    if hyprland::HyprlandSetter::is_available() {
        Ok(Box::new(hyprland::HyprlandSetter::new()?))
    } else if plasma::PlasmaSetter::is_available() {
        Ok(Box::new(plasma::PlasmaSetter::new()?))
    } else if gnome::GnomeSetter::is_available() {
        Ok(Box::new(gnome::GnomeSetter::new()?))
    } else if x11::FehSetter::is_available() {
        Ok(Box::new(x11::FehSetter))
    } else {
        Err(crate::Error::DesktopEnv(
            "No supported desktop environment found".to_string(),
        ))
    }
}

#[cfg(not(any(unix, windows)))]
pub fn get_wallpaper_setter() -> Result<Box<dyn WallpaperSetter>> {
    Err(crate::Error::DesktopEnv(
        "Setting the wallpaper is not supported on this platform".to_string(),
    ))
}
