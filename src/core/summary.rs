//! Per-run counters

use serde::Serialize;

/// What happened to one candidate file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
	/// Empty sidecar, removed from disk
	Deleted,
	/// Empty sidecar, left in place because force was not given
	WouldDelete,
	/// Not an empty sidecar
	Retained,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
	pub deleted: usize,
	pub pretend_deleted: usize,
	pub retained: usize,
	/// Candidates skipped after an I/O error (keep-going mode only)
	pub failed: usize,
}

impl Summary {
	pub fn record(&mut self, disposition: Disposition) {
		match disposition {
			Disposition::Deleted => self.deleted += 1,
			Disposition::WouldDelete => self.pretend_deleted += 1,
			Disposition::Retained => self.retained += 1,
		}
	}

	/// Candidates that were classified
	pub fn candidates(&self) -> usize {
		self.deleted + self.pretend_deleted + self.retained
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn record_increments_one_counter() {
		let mut summary = Summary::default();
		summary.record(Disposition::Deleted);
		summary.record(Disposition::Retained);
		summary.record(Disposition::Retained);

		assert_eq!(summary.deleted, 1);
		assert_eq!(summary.pretend_deleted, 0);
		assert_eq!(summary.retained, 2);
		assert_eq!(summary.candidates(), 3);
	}

	#[test]
	fn serializes_all_counters() {
		let mut summary = Summary::default();
		summary.record(Disposition::WouldDelete);
		let json = serde_json::to_value(summary).unwrap();

		assert_eq!(json["pretend_deleted"], 1);
		assert_eq!(json["deleted"], 0);
		assert_eq!(json["failed"], 0);
	}
}
