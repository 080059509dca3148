//! Small keyed layouts.

use std::collections::HashMap;

use choiceforge_core::OptionLayout;

/// Layout keyed by static strings.
pub type KeyedLayout = OptionLayout<&'static str>;

/// Two sections: A = {k1, k2}, B = {k3, k4}.
pub fn two_sections() -> KeyedLayout {
    keyed(vec![vec!["k1", "k2"], vec!["k3", "k4"]])
}

/// One section holding `keys` in order.
pub fn single_section(keys: &[&'static str]) -> KeyedLayout {
    keyed(vec![keys.to_vec()])
}

/// Builds a layout whose option titles are the upper-cased keys.
pub fn keyed(sections: Vec<Vec<&'static str>>) -> KeyedLayout {
    let titles: HashMap<&'static str, String> = sections
        .iter()
        .flatten()
        .map(|key| (*key, key.to_uppercase()))
        .collect();
    OptionLayout::new(titles, HashMap::new(), Vec::new(), sections)
}
