//! The demo catalogue: two titled sections of three options each.

use std::collections::HashMap;

use choiceforge_core::{OptionLayout, RuleSpec};

/// Every rule the demo walks through, in display order.
pub const DEMO_RULES: [RuleSpec; 7] = [
    RuleSpec::SINGLE,
    RuleSpec::SINGLE_SECTIONED,
    RuleSpec::MULTIPLE,
    RuleSpec::MULTIPLE_SECTIONED,
    RuleSpec::all(1, Some(3)),
    RuleSpec::sectioned(1, Some(2), 0, None),
    RuleSpec::sectioned(1, None, 2, Some(4)),
];

/// Raw pieces of the demo catalogue, as handed to `configure`.
#[derive(Debug, Clone)]
pub struct DemoCatalogue {
    pub options: HashMap<&'static str, String>,
    pub details: HashMap<&'static str, String>,
    pub section_titles: Vec<String>,
    pub order: Vec<Vec<&'static str>>,
}

impl DemoCatalogue {
    /// Creates the catalogue.
    pub fn new() -> Self {
        let options = [
            ("OA", "Option A"),
            ("OB", "Option B"),
            ("OC", "Option C"),
            ("CA", "Choice A"),
            ("CB", "Choice B"),
            ("CC", "Choice C"),
        ]
        .into_iter()
        .map(|(key, title)| (key, title.to_string()))
        .collect();

        let details = [("OB", "Extras"), ("CA", "Extras")]
            .into_iter()
            .map(|(key, detail)| (key, detail.to_string()))
            .collect();

        Self {
            options,
            details,
            section_titles: vec!["Options".to_string(), "Choices".to_string()],
            order: vec![vec!["OA", "OB", "OC"], vec!["CA", "CB", "CC"]],
        }
    }

    /// Builds the layout.
    pub fn layout(&self) -> OptionLayout<&'static str> {
        OptionLayout::new(
            self.options.clone(),
            self.details.clone(),
            self.section_titles.clone(),
            self.order.clone(),
        )
    }
}

impl Default for DemoCatalogue {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for `DemoCatalogue::new().layout()`.
pub fn demo_layout() -> OptionLayout<&'static str> {
    DemoCatalogue::new().layout()
}
