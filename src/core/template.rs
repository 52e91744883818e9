//! Known "empty" sidecar bodies
//!
//! A sidecar is empty when its whole content equals one of these bodies byte
//! for byte. Whitespace, line endings and the trailing newline all count.

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Written by Aperture when an image carries no metadata at all.
const APERTURE_EMPTY: &str = concat!(
	"<?xpacket begin='' id=''?>\n",
	"<x:xmpmeta xmlns:x='adobe:ns:meta/' x:xmptk='XMP toolkit 2.9-9, framework 1.6'>\n",
	"<rdf:RDF xmlns:rdf='http://www.w3.org/1999/02/22-rdf-syntax-ns#' xmlns:iX='http://ns.adobe.com/iX/1.0/'>\n",
	"<rdf:Description rdf:about='' xmlns:Iptc4xmpCore='http://iptc.org/std/Iptc4xmpCore/1.0/xmlns/'>\n",
	"</rdf:Description>\n",
	"<rdf:Description rdf:about='' xmlns:photoshop='http://ns.adobe.com/photoshop/1.0/'>\n",
	"</rdf:Description>\n",
	"<rdf:Description rdf:about='' xmlns:dc='http://purl.org/dc/elements/1.1/'>\n",
	"</rdf:Description>\n",
	"<rdf:Description rdf:about='' xmlns:photomechanic='http://ns.camerabits.com/photomechanic/1.0/'>\n",
	"</rdf:Description>\n",
	"<rdf:Description rdf:about='' xmlns:xap='http://ns.adobe.com/xap/1.0/'>\n",
	"\t<xap:Rating>0</xap:Rating>\n",
	"</rdf:Description>\n",
	"</rdf:RDF>\n",
	"</x:xmpmeta>\n",
	"<?xpacket end='w'?>\n",
);

/// Same as above, plus the default creator and an empty rights entry.
const APERTURE_EMPTY_WITH_CREATOR: &str = concat!(
	"<?xpacket begin='' id=''?>\n",
	"<x:xmpmeta xmlns:x='adobe:ns:meta/' x:xmptk='XMP toolkit 2.9-9, framework 1.6'>\n",
	"<rdf:RDF xmlns:rdf='http://www.w3.org/1999/02/22-rdf-syntax-ns#' xmlns:iX='http://ns.adobe.com/iX/1.0/'>\n",
	"<rdf:Description rdf:about='' xmlns:Iptc4xmpCore='http://iptc.org/std/Iptc4xmpCore/1.0/xmlns/'>\n",
	"</rdf:Description>\n",
	"<rdf:Description rdf:about='' xmlns:photoshop='http://ns.adobe.com/photoshop/1.0/'>\n",
	"</rdf:Description>\n",
	"<rdf:Description rdf:about='' xmlns:dc='http://purl.org/dc/elements/1.1/'>\n",
	"\t<dc:creator><rdf:Seq><rdf:li>Ronald L. Rivest</rdf:li></rdf:Seq></dc:creator>\n",
	"\t<dc:rights><rdf:Alt><rdf:li xml:lang='x-default'></rdf:li></rdf:Alt></dc:rights>\n",
	"</rdf:Description>\n",
	"<rdf:Description rdf:about='' xmlns:photomechanic='http://ns.camerabits.com/photomechanic/1.0/'>\n",
	"</rdf:Description>\n",
	"<rdf:Description rdf:about='' xmlns:xap='http://ns.adobe.com/xap/1.0/'>\n",
	"\t<xap:Rating>0</xap:Rating>\n",
	"</rdf:Description>\n",
	"</rdf:RDF>\n",
	"</x:xmpmeta>\n",
	"<?xpacket end='w'?>\n",
);

/// Bodies compiled into the binary. New variants go at the end.
pub const BUILTIN_TEMPLATES: &[&str] = &[APERTURE_EMPTY, APERTURE_EMPTY_WITH_CREATOR];

/// Ordered set of exact-match bodies
#[derive(Debug, Clone)]
pub struct TemplateSet {
	bodies: Vec<Cow<'static, str>>,
}

impl TemplateSet {
	pub fn builtin() -> Self {
		Self {
			bodies: BUILTIN_TEMPLATES.iter().map(|b| Cow::Borrowed(*b)).collect(),
		}
	}

	pub fn push(&mut self, body: impl Into<String>) {
		self.bodies.push(Cow::Owned(body.into()));
	}

	/// Append every body from a JSON array of strings.
	/// Returns how many templates were added.
	pub fn load_extra(&mut self, path: &Path) -> Result<usize> {
		let text = fs::read_to_string(path)
			.with_context(|| format!("Failed to read template list {}", path.display()))?;
		let bodies: Vec<String> = serde_json::from_str(&text)
			.with_context(|| format!("Template list {} must be a JSON array of strings", path.display()))?;

		let added = bodies.len();
		self.bodies.extend(bodies.into_iter().map(Cow::Owned));
		Ok(added)
	}

	pub fn len(&self) -> usize {
		self.bodies.len()
	}

	pub fn is_empty_sidecar(&self, content: &str) -> bool {
		self.bodies.iter().any(|body| body.as_ref() == content)
	}
}

/// Check content against the built-in bodies only
pub fn is_empty_sidecar(content: &str) -> bool {
	BUILTIN_TEMPLATES.iter().any(|body| *body == content)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builtin_bodies_match() {
		for body in BUILTIN_TEMPLATES {
			assert!(is_empty_sidecar(body));
			assert!(TemplateSet::builtin().is_empty_sidecar(body));
		}
	}

	#[test]
	fn first_template_length() {
		assert_eq!(APERTURE_EMPTY.len(), 803);
	}

	#[test]
	fn single_character_changes_reject() {
		let extra = format!("{} ", APERTURE_EMPTY);
		assert!(!is_empty_sidecar(&extra));

		let missing_newline = &APERTURE_EMPTY[..APERTURE_EMPTY.len() - 1];
		assert!(!is_empty_sidecar(missing_newline));

		let missing_first = &APERTURE_EMPTY[1..];
		assert!(!is_empty_sidecar(missing_first));
	}

	#[test]
	fn no_normalization() {
		let crlf = APERTURE_EMPTY.replace('\n', "\r\n");
		assert!(!is_empty_sidecar(&crlf));

		let spaces = APERTURE_EMPTY.replace('\t', "    ");
		assert!(!is_empty_sidecar(&spaces));

		assert!(!is_empty_sidecar(&APERTURE_EMPTY.to_uppercase()));
		assert!(!is_empty_sidecar(APERTURE_EMPTY.trim_end()));
	}

	#[test]
	fn empty_and_unrelated_content_rejected() {
		assert!(!is_empty_sidecar(""));
		assert!(!is_empty_sidecar("<x:xmpmeta/>"));
	}

	#[test]
	fn push_extends_set() {
		let mut set = TemplateSet::builtin();
		assert_eq!(set.len(), 2);
		assert!(!set.is_empty_sidecar("<empty/>\n"));

		set.push("<empty/>\n");
		assert_eq!(set.len(), 3);
		assert!(set.is_empty_sidecar("<empty/>\n"));
		assert!(set.is_empty_sidecar(APERTURE_EMPTY));
	}

	#[test]
	fn load_extra_appends_json_bodies() {
		let temp = tempfile::tempdir().unwrap();
		let list = temp.path().join("templates.json");
		fs::write(&list, r#"["<x/>\n", "<y/>"]"#).unwrap();

		let mut set = TemplateSet::builtin();
		assert_eq!(set.load_extra(&list).unwrap(), 2);
		assert_eq!(set.len(), 4);
		assert!(set.is_empty_sidecar("<x/>\n"));
		assert!(set.is_empty_sidecar("<y/>"));
		assert!(!set.is_empty_sidecar("<x/>"));
	}

	#[test]
	fn load_extra_rejects_malformed_list() {
		let temp = tempfile::tempdir().unwrap();
		let list = temp.path().join("templates.json");
		fs::write(&list, r#"{"not": "a list"}"#).unwrap();

		let mut set = TemplateSet::builtin();
		assert!(set.load_extra(&list).is_err());
		assert_eq!(set.len(), 2);
		assert!(set.load_extra(&temp.path().join("missing.json")).is_err());
	}
}
