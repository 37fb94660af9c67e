use crate::utils::error::{AppError, AppResult};
use std::path::Path;
use tracing::debug;

/// Open a rendered file with the platform's default handler
pub fn open_browser(path: &Path) -> AppResult<()> {
    debug!(path = %path.display(), "opening in browser");

    #[cfg(target_os = "windows")]
    let mut command = {
        let mut command = std::process::Command::new("cmd");
        command.args(["/C", "start", ""]).arg(path);
        command
    };

    #[cfg(target_os = "macos")]
    let mut command = {
        let mut command = std::process::Command::new("open");
        command.arg(path);
        command
    };

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let mut command = {
        let mut command = std::process::Command::new("xdg-open");
        command.arg(path);
        command
    };

    command
        .spawn()
        .map_err(|e| AppError::System(format!("Failed to open browser: {}", e)))?;

    Ok(())
}
