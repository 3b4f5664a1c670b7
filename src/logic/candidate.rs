//! Candidate Logic
//!
//! Turns raw directory entries into the options the picker displays.

use crate::api::DirectoryEntry;

const COMMON_NAME_PREFIX: &str = "CN=";

/// Short label of a distinguished name: the first comma-separated
/// component with a literal `CN=` removed.
///
/// # Examples
/// ```
/// use dirpick::logic::candidate::short_label;
///
/// assert_eq!(short_label("CN=Engineers,OU=Groups,DC=corp"), "Engineers");
/// assert_eq!(short_label("Engineers"), "Engineers");
/// ```
pub fn short_label(dn: &str) -> String {
    let first = dn.split(',').next().unwrap_or(dn);
    first.replacen(COMMON_NAME_PREFIX, "", 1)
}

/// Display label: `<short label> (<full dn>)`
pub fn display_label(dn: &str) -> String {
    format!("{} ({})", short_label(dn), dn)
}

/// An option in the picker: what is shown and what is written to the field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    /// Option whose label and value are both `value`
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// One remote search result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub dn: String,
    pub short_label: String,
    pub display_label: String,
}

impl Candidate {
    pub fn from_entry(entry: &DirectoryEntry) -> Self {
        Self {
            dn: entry.id.clone(),
            short_label: short_label(&entry.id),
            display_label: display_label(&entry.id),
        }
    }

    /// The value is the short label, never the full dn
    pub fn to_option(&self) -> SelectOption {
        SelectOption {
            value: self.short_label.clone(),
            label: self.display_label.clone(),
        }
    }
}

/// Transform entries in endpoint order. No sorting, no de-duplication.
pub fn transform_results(entries: &[DirectoryEntry]) -> Vec<Candidate> {
    entries.iter().map(Candidate::from_entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_label_common_name() {
        assert_eq!(short_label("CN=Engineers,OU=Groups,DC=corp"), "Engineers");
        assert_eq!(short_label("CN=Domain Admins,CN=Users,DC=example,DC=com"), "Domain Admins");
    }

    #[test]
    fn test_short_label_without_comma() {
        assert_eq!(short_label("Engineers"), "Engineers");
        assert_eq!(short_label("CN=Engineers"), "Engineers");
    }

    #[test]
    fn test_short_label_without_prefix() {
        assert_eq!(short_label("OU=Groups,DC=corp"), "OU=Groups");
    }

    #[test]
    fn test_short_label_only_first_prefix_removed() {
        assert_eq!(short_label("CN=CN=Odd,DC=corp"), "CN=Odd");
    }

    #[test]
    fn test_short_label_empty() {
        assert_eq!(short_label(""), "");
    }

    #[test]
    fn test_display_label() {
        assert_eq!(
            display_label("CN=Engineers,OU=Groups,DC=corp"),
            "Engineers (CN=Engineers,OU=Groups,DC=corp)"
        );
    }

    #[test]
    fn test_candidate_value_is_short_label() {
        let candidate = Candidate::from_entry(&DirectoryEntry::new("CN=Engineers,OU=Groups,DC=corp"));
        let option = candidate.to_option();

        assert_eq!(option.value, "Engineers");
        assert_eq!(option.label, "Engineers (CN=Engineers,OU=Groups,DC=corp)");
    }

    #[test]
    fn test_transform_keeps_order_and_duplicates() {
        let entries = vec![
            DirectoryEntry::new("CN=Zeta,DC=corp"),
            DirectoryEntry::new("CN=Alpha,DC=corp"),
            DirectoryEntry::new("CN=Alpha,DC=corp"),
        ];

        let labels: Vec<_> = transform_results(&entries)
            .into_iter()
            .map(|c| c.short_label)
            .collect();
        assert_eq!(labels, vec!["Zeta", "Alpha", "Alpha"]);
    }
}
