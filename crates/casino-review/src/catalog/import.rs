use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use super::domain::{Bonus, Casino, CasinoId, ExpertReview, Game, Review};
use crate::admin::{CasinoForm, FormErrors};

/// Full catalog contents as exchanged with the data store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogSnapshot {
    pub casinos: Vec<Casino>,
    pub expert_reviews: Vec<ExpertReview>,
    pub reviews: Vec<Review>,
    pub bonuses: Vec<Bonus>,
    pub games: Vec<Game>,
}

impl CatalogSnapshot {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(file)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogImportError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Add imported casinos, replacing stored ones with the same id.
    ///
    /// Returns how many stored casinos were replaced.
    pub fn merge_casinos(&mut self, casinos: Vec<Casino>) -> usize {
        let mut replaced = 0;
        for casino in casinos {
            match self.casinos.iter_mut().find(|existing| existing.id == casino.id) {
                Some(existing) => {
                    *existing = casino;
                    replaced += 1;
                }
                None => self.casinos.push(casino),
            }
        }
        replaced
    }
}

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    InvalidRow { line: u64, errors: FormErrors },
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read catalog: {}", err),
            CatalogImportError::Json(err) => write!(f, "invalid catalog JSON: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid casino CSV data: {}", err),
            CatalogImportError::InvalidRow { line, errors } => {
                write!(f, "casino CSV line {}: {}", line, errors)
            }
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Json(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::InvalidRow { errors, .. } => Some(errors),
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CatalogImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Bulk casino import from a spreadsheet export.
///
/// List columns hold `;`-separated values. Each row goes through the same
/// validation as the admin casino editor.
pub struct CasinoCsvImporter;

impl CasinoCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Casino>, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Casino>, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut casinos = Vec::new();

        for record in csv_reader.deserialize::<CasinoRow>() {
            let row = record?;
            let line = casinos.len() as u64 + 2;
            let id = row.id.clone();
            let draft = row
                .into_form()
                .validate()
                .map_err(|errors| CatalogImportError::InvalidRow { line, errors })?;
            let id = if id.is_empty() {
                draft.slug.clone()
            } else {
                id
            };
            casinos.push(draft.into_casino(CasinoId(id), None));
        }

        Ok(casinos)
    }
}

#[derive(Debug, Deserialize)]
struct CasinoRow {
    #[serde(default)]
    id: String,
    name: String,
    #[serde(default)]
    slug: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    website_url: String,
    #[serde(default)]
    logo_url: String,
    safety_index: String,
    #[serde(default)]
    license: String,
    #[serde(default)]
    established_year: String,
    #[serde(default, deserialize_with = "semicolon_list")]
    payment_methods: Vec<String>,
    #[serde(default, deserialize_with = "semicolon_list")]
    supported_currencies: Vec<String>,
    #[serde(default, deserialize_with = "semicolon_list")]
    game_providers: Vec<String>,
    #[serde(default, deserialize_with = "semicolon_list")]
    features: Vec<String>,
    #[serde(default, deserialize_with = "semicolon_list")]
    restricted_countries: Vec<String>,
    #[serde(default, deserialize_with = "optional_flag")]
    is_active: Option<bool>,
    #[serde(default, deserialize_with = "optional_flag")]
    is_featured: Option<bool>,
}

impl CasinoRow {
    fn into_form(self) -> CasinoForm {
        CasinoForm {
            name: self.name,
            slug: self.slug,
            description: self.description,
            website_url: self.website_url,
            logo_url: self.logo_url,
            safety_index: self.safety_index,
            license: self.license,
            established_year: self.established_year,
            payment_methods: self.payment_methods,
            supported_currencies: self.supported_currencies,
            game_providers: self.game_providers,
            features: self.features,
            restricted_countries: self.restricted_countries,
            is_active: self.is_active.unwrap_or(true),
            is_featured: self.is_featured.unwrap_or(false),
        }
    }
}

fn semicolon_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect())
}

fn optional_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "true" | "yes" | "1" => Ok(Some(true)),
        "false" | "no" | "0" => Ok(Some(false)),
        other => Err(serde::de::Error::custom(format!(
            "expected a yes/no flag, found '{other}'"
        ))),
    }
}
