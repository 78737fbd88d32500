use serde::Deserialize;

use super::filter::CasinoFacets;
use super::sort::{SortDirection, SortField};
use super::CasinoQuery;

/// Raw listing query string as sent by the catalog pages.
///
/// List facets arrive comma-joined (`paymentMethods=Bitcoin,Ethereum`). Empty
/// values are treated as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasinoQueryParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub min_safety_index: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub payment_methods: Option<String>,
    #[serde(default)]
    pub features: Option<String>,
    #[serde(default)]
    pub game_providers: Option<String>,
    #[serde(default)]
    pub established_year: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryParamError {
    #[error("query parameter '{name}' has invalid value '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

impl CasinoQueryParams {
    pub fn into_query(self) -> Result<CasinoQuery, QueryParamError> {
        let facets = CasinoFacets {
            min_safety_index: parse_finite("minSafetyIndex", self.min_safety_index)?,
            license: non_empty(self.license),
            payment_methods: split_list(self.payment_methods),
            features: split_list(self.features),
            game_providers: split_list(self.game_providers),
            established_year: parse_number("establishedYear", self.established_year)?,
        };

        // An unrecognised sort key means "keep store order", not "use the default".
        let sort = match non_empty(self.sort) {
            Some(raw) => SortField::parse(&raw),
            None => CasinoQuery::default().sort,
        };

        let direction = match non_empty(self.direction) {
            Some(raw) => SortDirection::parse(&raw).ok_or(QueryParamError::InvalidValue {
                name: "direction",
                value: raw,
            })?,
            None => SortDirection::default(),
        };

        let page = parse_number::<i64>("page", self.page)?.unwrap_or(1);

        Ok(CasinoQuery {
            search: non_empty(self.search).unwrap_or_default(),
            facets,
            sort,
            direction,
            page: clamp_page(page),
        })
    }
}

fn clamp_page(page: i64) -> usize {
    usize::try_from(page.max(1)).unwrap_or(usize::MAX)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

fn split_list(value: Option<String>) -> Vec<String> {
    non_empty(value)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn parse_number<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
) -> Result<Option<T>, QueryParamError> {
    non_empty(value)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|_| QueryParamError::InvalidValue { name, value: raw })
        })
        .transpose()
}

/// `NaN` and infinities parse as `f64` but would silently disable a threshold.
fn parse_finite(name: &'static str, value: Option<String>) -> Result<Option<f64>, QueryParamError> {
    match parse_number::<f64>(name, value.clone())? {
        Some(number) if !number.is_finite() => Err(QueryParamError::InvalidValue {
            name,
            value: value.unwrap_or_default().trim().to_string(),
        }),
        parsed => Ok(parsed),
    }
}
