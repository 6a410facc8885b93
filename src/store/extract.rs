//! Version extraction from store listing markup
//!
//! The Play Store listing page has no public schema; the class names and
//! label texts this module matches on are an undocumented external contract
//! that can change without notice. The extraction sits behind a trait so a
//! page change only ever means swapping markers or the strategy itself.

use regex::Regex;
use tracing::debug;

use crate::config::PlayMarkers;
use crate::store::error::LookupError;

/// Strategy for pulling a version string out of fetched listing markup
pub trait VersionExtractor: Send + Sync {
    /// Extracts the published version from the page body
    ///
    /// # Returns
    /// * `Ok(String)` - The version text of the first matching metadata row
    /// * `Err(LookupError::VersionLabelNotFound)` - No row carries an
    ///   accepted "Current Version" label
    fn extract(&self, html: &str) -> Result<String, LookupError>;
}

/// Default extractor: scans metadata rows by their class markers.
///
/// A row is a container element (class `hAyfc`) holding a label element
/// (class `BgcNfc`) and a value element (class `htlgb`). The row whose
/// label text is in the accepted set ("Current Version", "현재 버전", ...)
/// carries the version in its value element.
pub struct ClassMarkerExtractor {
    accepted_labels: Vec<String>,
    container_re: Regex,
    label_re: Regex,
    value_re: Regex,
}

impl ClassMarkerExtractor {
    pub fn new(markers: &PlayMarkers) -> Self {
        let class_attr = |class: &str| format!(r#"class="[^"]*\b{}\b[^"]*""#, regex::escape(class));
        // Patterns are fixed templates over escaped class names, so
        // compilation cannot fail for any marker configuration.
        let container_re = Regex::new(&class_attr(&markers.container_class))
            .expect("Failed to compile container pattern");
        let label_re = Regex::new(&format!(
            r"{}[^>]*>\s*([^<]+?)\s*<",
            class_attr(&markers.label_class)
        ))
        .expect("Failed to compile label pattern");
        let value_re = Regex::new(&format!(
            r"{}[^>]*>\s*(?:<[^>]*>\s*)*([^<]+?)\s*<",
            class_attr(&markers.value_class)
        ))
        .expect("Failed to compile value pattern");

        Self {
            accepted_labels: markers.accepted_labels.clone(),
            container_re,
            label_re,
            value_re,
        }
    }
}

impl VersionExtractor for ClassMarkerExtractor {
    fn extract(&self, html: &str) -> Result<String, LookupError> {
        // Slice the document into one chunk per metadata row container,
        // each running up to the start of the next container.
        let starts: Vec<usize> = self.container_re.find_iter(html).map(|m| m.start()).collect();
        for (i, &start) in starts.iter().enumerate() {
            let end = starts.get(i + 1).copied().unwrap_or(html.len());
            let row = &html[start..end];

            let Some(label) = self.label_re.captures(row).map(|c| c[1].to_string()) else {
                continue;
            };
            if !self.accepted_labels.iter().any(|l| l == &label) {
                debug!("skipping metadata row with label {label:?}");
                continue;
            }
            if let Some(value) = self.value_re.captures(row).map(|c| c[1].to_string()) {
                return Ok(value);
            }
        }
        Err(LookupError::VersionLabelNotFound)
    }
}
