use crate::Dataset;

/// Distinct level and usage values of the consumption table, in the order
/// they first appear. The first entry of each list is the default
/// selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FilterOptions {
    pub levels: Vec<String>,
    pub usages: Vec<String>,
}

impl FilterOptions {
    pub fn default_level(&self) -> Option<&str> {
        self.levels.first().map(String::as_str)
    }

    pub fn default_usage(&self) -> Option<&str> {
        self.usages.first().map(String::as_str)
    }
}

pub fn filter_options(dataset: &Dataset) -> FilterOptions {
    let mut options = FilterOptions::default();
    for r in dataset.consumption() {
        let level = r.level.as_str();
        if !options.levels.iter().any(|l| l == level) {
            options.levels.push(level.to_string());
        }
        if !options.usages.contains(&r.usage_category) {
            options.usages.push(r.usage_category.clone());
        }
    }
    options
}
