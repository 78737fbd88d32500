use serde::{Deserialize, Serialize};

use crate::catalog::domain::Casino;

/// Closed set of structured filters. `None` and empty lists are not applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasinoFacets {
    #[serde(default)]
    pub min_safety_index: Option<f64>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub payment_methods: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub game_providers: Vec<String>,
    #[serde(default)]
    pub established_year: Option<i32>,
}

impl CasinoFacets {
    pub fn is_empty(&self) -> bool {
        self.min_safety_index.is_none()
            && self.license.is_none()
            && self.payment_methods.is_empty()
            && self.features.is_empty()
            && self.game_providers.is_empty()
            && self.established_year.is_none()
    }

    /// Every applied facet must hold; list facets hold when any value is offered.
    pub fn matches(&self, casino: &Casino) -> bool {
        if let Some(threshold) = self.min_safety_index {
            if casino.safety_index < threshold {
                return false;
            }
        }

        if let Some(license) = &self.license {
            if casino.license.as_deref() != Some(license.as_str()) {
                return false;
            }
        }

        if !any_of(&self.payment_methods, &casino.payment_methods)
            || !any_of(&self.features, &casino.features)
            || !any_of(&self.game_providers, &casino.game_providers)
        {
            return false;
        }

        if let Some(threshold) = self.established_year {
            if casino.established_year.unwrap_or(0) < threshold {
                return false;
            }
        }

        true
    }
}

fn any_of(wanted: &[String], offered: &[String]) -> bool {
    wanted.is_empty() || wanted.iter().any(|value| offered.contains(value))
}

/// Case-insensitive substring match over the searchable text fields.
pub fn matches_search(casino: &Casino, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    contains(&casino.name)
        || contains(&casino.description)
        || casino.features.iter().any(|value| contains(value))
        || casino.payment_methods.iter().any(|value| contains(value))
        || casino.game_providers.iter().any(|value| contains(value))
}

/// Keep casinos matching both the free-text query and every applied facet, in input order.
pub fn filter(casinos: &[Casino], query: &str, facets: &CasinoFacets) -> Vec<Casino> {
    casinos
        .iter()
        .filter(|casino| matches_search(casino, query) && facets.matches(casino))
        .cloned()
        .collect()
}
