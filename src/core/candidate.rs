//! Sidecar file detection

use std::ffi::OsStr;

use crate::config::SIDECAR_EXT;

/// True when the file name ends in `.xmp`, any case
pub fn is_candidate(file_name: &OsStr) -> bool {
	let name = file_name.to_string_lossy();
	let suffix_len = SIDECAR_EXT.len() + 1;

	let Some(start) = name.len().checked_sub(suffix_len) else {
		return false;
	};
	let suffix = &name.as_bytes()[start..];

	suffix[0] == b'.' && suffix[1..].eq_ignore_ascii_case(SIDECAR_EXT.as_bytes())
}
