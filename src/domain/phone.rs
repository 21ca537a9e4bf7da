//! Phone line-type filtering.

use super::errors::ValidationError;
use std::fmt;

/// Line types that qualify a number for SMS when nothing else is configured.
pub const DEFAULT_ACCEPTED_LINE_TYPES: [&str; 2] = ["wireless", "voip"];

/// Decides which phone type tags make a number usable for SMS.
///
/// Tags are compared after trimming and lowercasing, so `"Wireless"`,
/// `" VOIP "` and `"voip"` are all the same tag. A missing, blank or
/// non-text tag is "untyped"; whether untyped numbers qualify is an
/// explicit switch that defaults to `false`.
///
/// # Example
///
/// ```
/// use leads_sms_converter::domain::LineTypeFilter;
///
/// let filter = LineTypeFilter::default();
/// assert!(filter.accepts(Some(" VOIP ")));
/// assert!(!filter.accepts(Some("Landline")));
/// assert!(!filter.accepts(None));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTypeFilter {
    accepted: Vec<String>,
    include_untyped: bool,
}

impl LineTypeFilter {
    /// Create a filter from a list of accepted type tags.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyLineTypes` if the list is empty and
    /// `ValidationError::BlankLineType` if any entry is blank.
    pub fn new<I, S>(accepted: I, include_untyped: bool) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags: Vec<String> = Vec::new();
        for tag in accepted {
            let tag = normalize_tag(tag.as_ref());
            if tag.is_empty() {
                return Err(ValidationError::BlankLineType);
            }
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        if tags.is_empty() {
            return Err(ValidationError::EmptyLineTypes);
        }

        Ok(Self {
            accepted: tags,
            include_untyped,
        })
    }

    /// Return a copy of this filter with the untyped switch set.
    pub fn with_untyped(mut self, include_untyped: bool) -> Self {
        self.include_untyped = include_untyped;
        self
    }

    /// Whether a phone carrying this type tag qualifies.
    pub fn accepts(&self, tag: Option<&str>) -> bool {
        match tag.map(normalize_tag) {
            Some(tag) if !tag.is_empty() => self.accepted.contains(&tag),
            _ => self.include_untyped,
        }
    }

    /// The normalized accepted tags, in configuration order.
    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }

    /// Whether untyped phones qualify.
    pub fn includes_untyped(&self) -> bool {
        self.include_untyped
    }
}

impl Default for LineTypeFilter {
    fn default() -> Self {
        Self {
            accepted: DEFAULT_ACCEPTED_LINE_TYPES
                .iter()
                .map(|t| t.to_string())
                .collect(),
            include_untyped: false,
        }
    }
}

impl fmt::Display for LineTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.accepted.join(","))?;
        if self.include_untyped {
            write!(f, " (+untyped)")?;
        }
        Ok(())
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_accepts_wireless_and_voip() {
        let filter = LineTypeFilter::default();
        assert!(filter.accepts(Some("Wireless")));
        assert!(filter.accepts(Some(" VOIP ")));
        assert!(filter.accepts(Some("voip")));
    }

    #[test]
    fn test_default_rejects_other_tags() {
        let filter = LineTypeFilter::default();
        assert!(!filter.accepts(Some("Landline")));
        assert!(!filter.accepts(Some("")));
        assert!(!filter.accepts(Some("   ")));
        assert!(!filter.accepts(None));
        assert!(!filter.accepts(Some("wireless landline")));
    }

    #[test]
    fn test_untyped_switch() {
        let filter = LineTypeFilter::default().with_untyped(true);
        assert!(filter.accepts(None));
        assert!(filter.accepts(Some("  ")));
        // An explicit but unaccepted tag still fails.
        assert!(!filter.accepts(Some("landline")));
    }

    #[test]
    fn test_custom_tags_are_normalized() {
        let filter = LineTypeFilter::new([" Wireless", "MOBILE", "mobile"], false).unwrap();
        assert_eq!(filter.accepted(), ["wireless", "mobile"]);
        assert!(filter.accepts(Some("Mobile")));
        assert!(!filter.accepts(Some("voip")));
    }

    #[test]
    fn test_invalid_tag_lists() {
        let empty: [&str; 0] = [];
        assert_eq!(
            LineTypeFilter::new(empty, false),
            Err(ValidationError::EmptyLineTypes)
        );
        assert_eq!(
            LineTypeFilter::new(["wireless", " "], false),
            Err(ValidationError::BlankLineType)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(LineTypeFilter::default().to_string(), "wireless,voip");
        assert_eq!(
            LineTypeFilter::default().with_untyped(true).to_string(),
            "wireless,voip (+untyped)"
        );
    }
}
