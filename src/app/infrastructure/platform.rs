use crate::app::domain::settings::ThemeMode;

/// Resolve a configured theme mode to "is dark?".
pub fn resolve_dark_mode(mode: ThemeMode) -> bool {
    match mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::SystemDefault => detect_system_dark_mode(),
    }
}

/// Ask the desktop environment whether it prefers a dark appearance.
///
/// Falls back to light mode when the platform gives no answer.
pub fn detect_system_dark_mode() -> bool {
    let dark = platform_prefers_dark().unwrap_or(false);
    tracing::debug!(dark, "system theme detection");
    dark
}

#[cfg(target_os = "windows")]
fn platform_prefers_dark() -> Option<bool> {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    let personalize = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .ok()?;
    // AppsUseLightTheme: 0 = dark, 1 = light
    let light: u32 = personalize.get_value("AppsUseLightTheme").ok()?;
    Some(light == 0)
}

#[cfg(target_os = "linux")]
fn platform_prefers_dark() -> Option<bool> {
    let gtk_theme = command_stdout("gsettings", &["get", "org.gnome.desktop.interface", "gtk-theme"]);
    if gtk_theme.as_deref().is_some_and(|t| t.to_lowercase().contains("dark")) {
        return Some(true);
    }

    let scheme = command_stdout("gsettings", &["get", "org.gnome.desktop.interface", "color-scheme"])?;
    Some(scheme.contains("prefer-dark"))
}

#[cfg(target_os = "macos")]
fn platform_prefers_dark() -> Option<bool> {
    // The key is absent in light mode, so a failed read means light.
    let style = command_stdout("defaults", &["read", "-g", "AppleInterfaceStyle"])?;
    Some(style.to_lowercase().contains("dark"))
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn platform_prefers_dark() -> Option<bool> {
    None
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = std::process::Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}
