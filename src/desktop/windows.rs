use super::WallpaperSetter;
use crate::Result;
use std::ffi::c_void;
use std::iter::once;
use std::os::windows::ffi::OsStrExt;
use std::path::Path;
use windows_sys::Win32::UI::WindowsAndMessaging::{
    SPI_SETDESKWALLPAPER, SPIF_SENDCHANGE, SPIF_UPDATEINIFILE, SystemParametersInfoW,
};

pub struct WindowsSetter;

impl WallpaperSetter for WindowsSetter {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn apply(&self, path: &Path) -> Result<()> {
        let mut wide: Vec<u16> = path.as_os_str().encode_wide().chain(once(0)).collect();

        // SAFETY: `wide` is a NUL terminated UTF-16 buffer that outlives the call.
        let ok = unsafe {
            SystemParametersInfoW(
                SPI_SETDESKWALLPAPER,
                0,
                wide.as_mut_ptr() as *mut c_void,
                SPIF_UPDATEINIFILE | SPIF_SENDCHANGE,
            )
        };

        // The call reports failure without any detail we could act on.
        if ok == 0 {
            tracing::warn!(
                "SystemParametersInfoW did not accept {}: {}",
                path.display(),
                std::io::Error::last_os_error()
            );
        }

        Ok(())
    }
}
