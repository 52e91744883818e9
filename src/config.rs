//! Application configuration and constants

use std::path::PathBuf;

// === File Extensions ===
pub const SIDECAR_EXT: &str = "xmp";

// === Environment ===
pub const TEMPLATES_ENV: &str = "XMPSWEEP_TEMPLATES";

/// Extra template list (flag first, then XMPSWEEP_TEMPLATES env var)
pub fn templates_file(flag: Option<PathBuf>) -> Option<PathBuf> {
	if let Some(path) = flag {
		crate::ui::debug(&format!("Using template list: {}", path.display()));
		return Some(path);
	}

	match std::env::var(TEMPLATES_ENV) {
		Ok(env_path) if !env_path.trim().is_empty() => {
			crate::ui::debug(&format!("Using {}: {}", TEMPLATES_ENV, env_path));
			Some(PathBuf::from(env_path))
		}
		_ => None,
	}
}
