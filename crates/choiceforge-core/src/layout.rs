//! Option layout: the universe of selectable options and their sections.
//!
//! The layout is the only place that knows which section a key belongs to.
//! It is built once per configuration and read by every other component.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::warn;

/// Position of an option in the layout, by section then row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionPosition {
    /// Index of the section.
    pub section: usize,
    /// Index of the option within its section.
    pub row: usize,
}

impl OptionPosition {
    /// Creates a new position.
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

/// Which row template a rendering layer should use for an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellIdentifier {
    /// Title only.
    Basic,
    /// Title plus a detail line.
    Detail,
}

impl CellIdentifier {
    /// Returns the identifier string registered by rendering layers.
    pub fn as_str(&self) -> &'static str {
        match self {
            CellIdentifier::Basic => "basic",
            CellIdentifier::Detail => "detail",
        }
    }
}

impl fmt::Display for CellIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered sections of options with display titles and details.
///
/// Keys that appear more than once in the section lists keep their first
/// position; later occurrences are unreachable for selection. Keys listed in
/// `titles` or `details` but in no section are simply never offered.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use choiceforge_core::{CellIdentifier, OptionLayout, OptionPosition};
///
/// let titles = HashMap::from([("OA", "Option A".to_string()), ("OB", "Option B".to_string())]);
/// let details = HashMap::from([("OB", "Extras".to_string())]);
/// let layout = OptionLayout::new(titles, details, vec!["Options".to_string()], vec![vec!["OA", "OB"]]);
///
/// assert_eq!(layout.section_of(&"OB"), Some(0));
/// assert_eq!(layout.position_of(&"OB"), Some(OptionPosition::new(0, 1)));
/// assert_eq!(layout.identifier_for(&"OA"), CellIdentifier::Basic);
/// assert_eq!(layout.identifier_for(&"OB"), CellIdentifier::Detail);
/// ```
#[derive(Debug, Clone)]
pub struct OptionLayout<K> {
    titles: HashMap<K, String>,
    details: HashMap<K, String>,
    section_titles: Vec<String>,
    sections: Vec<Vec<K>>,
    positions: HashMap<K, OptionPosition>,
}

impl<K> Default for OptionLayout<K> {
    fn default() -> Self {
        Self {
            titles: HashMap::new(),
            details: HashMap::new(),
            section_titles: Vec::new(),
            sections: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash + fmt::Debug> OptionLayout<K> {
    /// Creates a layout from display titles, optional details, section
    /// titles and the ordered keys of every section.
    pub fn new(
        titles: HashMap<K, String>,
        details: HashMap<K, String>,
        section_titles: Vec<String>,
        sections: Vec<Vec<K>>,
    ) -> Self {
        let mut positions = HashMap::new();
        for (section, keys) in sections.iter().enumerate() {
            for (row, key) in keys.iter().enumerate() {
                if positions.contains_key(key) {
                    warn!(
                        event = "duplicate_key",
                        key = ?key,
                        section,
                        row,
                        "Key already placed, later occurrence ignored"
                    );
                    continue;
                }
                positions.insert(key.clone(), OptionPosition::new(section, row));
            }
        }

        Self {
            titles,
            details,
            section_titles,
            sections,
            positions,
        }
    }

    /// Returns true if the key is placed in some section.
    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Returns the section the key belongs to.
    pub fn section_of(&self, key: &K) -> Option<usize> {
        self.positions.get(key).map(|p| p.section)
    }

    /// Returns where the key sits in the layout.
    pub fn position_of(&self, key: &K) -> Option<OptionPosition> {
        self.positions.get(key).copied()
    }

    /// Returns the key at the given position.
    pub fn key_at(&self, position: OptionPosition) -> Option<&K> {
        self.sections
            .get(position.section)
            .and_then(|keys| keys.get(position.row))
    }

    /// Returns the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Returns the number of options in a section, zero if out of range.
    pub fn option_count(&self, section: usize) -> usize {
        self.sections.get(section).map_or(0, Vec::len)
    }

    /// Returns the ordered keys of a section.
    pub fn keys_in(&self, section: usize) -> &[K] {
        self.sections.get(section).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the ordered keys of every section.
    pub fn sections(&self) -> &[Vec<K>] {
        &self.sections
    }

    /// Returns the display title of an option.
    pub fn title_for(&self, key: &K) -> Option<&str> {
        self.titles.get(key).map(String::as_str)
    }

    /// Returns the detail line of an option.
    pub fn detail_for(&self, key: &K) -> Option<&str> {
        self.details.get(key).map(String::as_str)
    }

    /// Returns `Detail` when the option has a non-empty detail line.
    pub fn identifier_for(&self, key: &K) -> CellIdentifier {
        match self.details.get(key) {
            Some(detail) if !detail.is_empty() => CellIdentifier::Detail,
            _ => CellIdentifier::Basic,
        }
    }

    /// Returns the configured title of a section, if any. Empty titles count
    /// as absent.
    pub fn section_title(&self, section: usize) -> Option<&str> {
        self.section_titles
            .get(section)
            .map(String::as_str)
            .filter(|title| !title.is_empty())
    }

    /// Returns the section title, falling back to `"Section {n}"`.
    pub fn section_label(&self, section: usize) -> String {
        self.section_title(section)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Section {section}"))
    }
}
