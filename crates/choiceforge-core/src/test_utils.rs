//! Test utilities for choiceforge-core
//!
//! Provides common layouts used across the crate's test modules.

use std::collections::HashMap;

use crate::layout::OptionLayout;

/// The demo catalogue: Options (OA, OB, OC) and Choices (CA, CB, CC),
/// with details on OB and CA.
pub fn demo_layout() -> OptionLayout<&'static str> {
    let titles = HashMap::from([
        ("OA", "Option A".to_string()),
        ("OB", "Option B".to_string()),
        ("OC", "Option C".to_string()),
        ("CA", "Choice A".to_string()),
        ("CB", "Choice B".to_string()),
        ("CC", "Choice C".to_string()),
    ]);
    let details = HashMap::from([("OB", "Extras".to_string()), ("CA", "Extras".to_string())]);

    OptionLayout::new(
        titles,
        details,
        vec!["Options".to_string(), "Choices".to_string()],
        vec![vec!["OA", "OB", "OC"], vec!["CA", "CB", "CC"]],
    )
}

/// Two sections: A = {k1, k2}, B = {k3, k4}.
pub fn two_section_layout() -> OptionLayout<&'static str> {
    keys_only(vec![vec!["k1", "k2"], vec!["k3", "k4"]])
}

/// Two sections of different sizes: A = {k1, k2, k5}, B = {k3, k4}.
pub fn uneven_layout() -> OptionLayout<&'static str> {
    keys_only(vec![vec!["k1", "k2", "k5"], vec!["k3", "k4"]])
}

/// A single section holding the given keys.
pub fn single_section_layout(keys: Vec<&'static str>) -> OptionLayout<&'static str> {
    keys_only(vec![keys])
}

fn keys_only(sections: Vec<Vec<&'static str>>) -> OptionLayout<&'static str> {
    let titles = sections
        .iter()
        .flatten()
        .map(|key| (*key, key.to_uppercase()))
        .collect();
    OptionLayout::new(titles, HashMap::new(), Vec::new(), sections)
}
