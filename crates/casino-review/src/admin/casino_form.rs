use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::errors::{parse_rating, FormErrors};
use crate::catalog::domain::{Casino, CasinoId};

/// Earliest founding year accepted by the admin panel.
pub const EARLIEST_ESTABLISHED_YEAR: i32 = 1900;

/// Raw, unvalidated state of the casino editor.
///
/// The record is never mutated in place: every edit goes through
/// [`CasinoForm::apply`], which consumes the old state and returns the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CasinoForm {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub website_url: String,
    pub logo_url: String,
    pub safety_index: String,
    pub license: String,
    pub established_year: String,
    pub payment_methods: Vec<String>,
    pub supported_currencies: Vec<String>,
    pub game_providers: Vec<String>,
    pub features: Vec<String>,
    pub restricted_countries: Vec<String>,
    pub is_active: bool,
    pub is_featured: bool,
}

impl Default for CasinoForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            slug: String::new(),
            description: String::new(),
            website_url: String::new(),
            logo_url: String::new(),
            safety_index: String::new(),
            license: String::new(),
            established_year: String::new(),
            payment_methods: Vec::new(),
            supported_currencies: Vec::new(),
            game_providers: Vec::new(),
            features: Vec::new(),
            restricted_countries: Vec::new(),
            is_active: true,
            is_featured: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextField {
    Name,
    Slug,
    Description,
    WebsiteUrl,
    LogoUrl,
    SafetyIndex,
    License,
    EstablishedYear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListField {
    PaymentMethods,
    SupportedCurrencies,
    GameProviders,
    Features,
    RestrictedCountries,
}

/// Every edit the casino editor can make.
#[derive(Debug, Clone, PartialEq)]
pub enum CasinoFormAction {
    SetText(TextField, String),
    AddEntry(ListField, String),
    RemoveEntry(ListField, String),
    ToggleActive,
    ToggleFeatured,
    Load(Box<Casino>),
    Reset,
}

/// Validated casino fields ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct CasinoDraft {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub website_url: String,
    pub logo_url: Option<String>,
    pub safety_index: f64,
    pub license: Option<String>,
    pub established_year: Option<i32>,
    pub payment_methods: Vec<String>,
    pub supported_currencies: Vec<String>,
    pub game_providers: Vec<String>,
    pub features: Vec<String>,
    pub restricted_countries: Vec<String>,
    pub is_active: bool,
    pub is_featured: bool,
}

impl CasinoDraft {
    pub fn into_casino(self, id: CasinoId, created_at: Option<DateTime<Utc>>) -> Casino {
        Casino {
            id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            website_url: self.website_url,
            logo_url: self.logo_url,
            safety_index: self.safety_index,
            user_rating: None,
            license: self.license,
            established_year: self.established_year,
            payment_methods: self.payment_methods,
            supported_currencies: self.supported_currencies,
            game_providers: self.game_providers,
            features: self.features,
            restricted_countries: self.restricted_countries,
            is_active: self.is_active,
            is_featured: self.is_featured,
            created_at,
        }
    }
}

impl CasinoForm {
    pub fn from_casino(casino: &Casino) -> Self {
        Self {
            name: casino.name.clone(),
            slug: casino.slug.clone(),
            description: casino.description.clone(),
            website_url: casino.website_url.clone(),
            logo_url: casino.logo_url.clone().unwrap_or_default(),
            safety_index: casino.safety_index.to_string(),
            license: casino.license.clone().unwrap_or_default(),
            established_year: casino
                .established_year
                .map(|year| year.to_string())
                .unwrap_or_default(),
            payment_methods: casino.payment_methods.clone(),
            supported_currencies: casino.supported_currencies.clone(),
            game_providers: casino.game_providers.clone(),
            features: casino.features.clone(),
            restricted_countries: casino.restricted_countries.clone(),
            is_active: casino.is_active,
            is_featured: casino.is_featured,
        }
    }

    /// Produce the next form state for an edit.
    pub fn apply(self, action: CasinoFormAction) -> Self {
        match action {
            CasinoFormAction::SetText(field, value) => self.with_text(field, value),
            CasinoFormAction::AddEntry(field, value) => {
                let value = value.trim().to_string();
                let mut entries = self.list(field).to_vec();
                if !value.is_empty() && !entries.contains(&value) {
                    entries.push(value);
                }
                self.with_list(field, entries)
            }
            CasinoFormAction::RemoveEntry(field, value) => {
                let entries = self
                    .list(field)
                    .iter()
                    .filter(|entry| entry.as_str() != value.trim())
                    .cloned()
                    .collect();
                self.with_list(field, entries)
            }
            CasinoFormAction::ToggleActive => Self {
                is_active: !self.is_active,
                ..self
            },
            CasinoFormAction::ToggleFeatured => Self {
                is_featured: !self.is_featured,
                ..self
            },
            CasinoFormAction::Load(casino) => Self::from_casino(&casino),
            CasinoFormAction::Reset => Self::default(),
        }
    }

    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::PaymentMethods => &self.payment_methods,
            ListField::SupportedCurrencies => &self.supported_currencies,
            ListField::GameProviders => &self.game_providers,
            ListField::Features => &self.features,
            ListField::RestrictedCountries => &self.restricted_countries,
        }
    }

    fn with_text(self, field: TextField, value: String) -> Self {
        match field {
            TextField::Name => Self { name: value, ..self },
            TextField::Slug => Self { slug: value, ..self },
            TextField::Description => Self {
                description: value,
                ..self
            },
            TextField::WebsiteUrl => Self {
                website_url: value,
                ..self
            },
            TextField::LogoUrl => Self {
                logo_url: value,
                ..self
            },
            TextField::SafetyIndex => Self {
                safety_index: value,
                ..self
            },
            TextField::License => Self {
                license: value,
                ..self
            },
            TextField::EstablishedYear => Self {
                established_year: value,
                ..self
            },
        }
    }

    fn with_list(self, field: ListField, entries: Vec<String>) -> Self {
        match field {
            ListField::PaymentMethods => Self {
                payment_methods: entries,
                ..self
            },
            ListField::SupportedCurrencies => Self {
                supported_currencies: entries,
                ..self
            },
            ListField::GameProviders => Self {
                game_providers: entries,
                ..self
            },
            ListField::Features => Self {
                features: entries,
                ..self
            },
            ListField::RestrictedCountries => Self {
                restricted_countries: entries,
                ..self
            },
        }
    }

    pub fn validate(&self) -> Result<CasinoDraft, FormErrors> {
        self.validate_as_of(Utc::now().year())
    }

    /// Validate against an explicit current year.
    pub fn validate_as_of(&self, current_year: i32) -> Result<CasinoDraft, FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim().to_string();
        if name.is_empty() {
            errors.push("name", "is required");
        }

        let website_url = self.website_url.trim().to_string();
        if website_url.is_empty() {
            errors.push("websiteUrl", "is required");
        }

        let safety_index = if self.safety_index.trim().is_empty() {
            errors.push("safetyIndex", "is required");
            None
        } else {
            parse_rating(&mut errors, "safetyIndex", &self.safety_index, 0.0..=10.0)
        };

        let established_year = match self.established_year.trim() {
            "" => None,
            raw => match raw.parse::<i32>() {
                Ok(year) if (EARLIEST_ESTABLISHED_YEAR..=current_year).contains(&year) => {
                    Some(year)
                }
                Ok(_) => {
                    errors.push(
                        "establishedYear",
                        format!("must be between {EARLIEST_ESTABLISHED_YEAR} and {current_year}"),
                    );
                    None
                }
                Err(_) => {
                    errors.push("establishedYear", "must be a whole year");
                    None
                }
            },
        };

        let slug = match self.slug.trim() {
            "" => slugify(&name),
            raw => slugify(raw),
        };
        if slug.is_empty() && !(name.is_empty() && self.slug.trim().is_empty()) {
            errors.push("slug", "is required and must contain ASCII letters or digits");
        }

        errors.into_result(|| CasinoDraft {
            name,
            slug,
            description: self.description.trim().to_string(),
            website_url,
            logo_url: optional_text(&self.logo_url),
            safety_index: safety_index.unwrap_or_default(),
            license: optional_text(&self.license),
            established_year,
            payment_methods: self.payment_methods.clone(),
            supported_currencies: self.supported_currencies.clone(),
            game_providers: self.game_providers.clone(),
            features: self.features.clone(),
            restricted_countries: self.restricted_countries.clone(),
            is_active: self.is_active,
            is_featured: self.is_featured,
        })
    }
}

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Lowercase, ASCII alphanumerics separated by single dashes.
pub fn slugify(value: &str) -> String {
    value
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("  Lucky Star -- Casino! "), "lucky-star-casino");
        assert_eq!(slugify("777"), "777");
    }

    #[test]
    fn duplicate_and_blank_entries_are_ignored() {
        let form = CasinoForm::default()
            .apply(CasinoFormAction::AddEntry(
                ListField::PaymentMethods,
                "Bitcoin".to_string(),
            ))
            .apply(CasinoFormAction::AddEntry(
                ListField::PaymentMethods,
                " Bitcoin ".to_string(),
            ))
            .apply(CasinoFormAction::AddEntry(
                ListField::PaymentMethods,
                "  ".to_string(),
            ));

        assert_eq!(form.payment_methods, vec!["Bitcoin".to_string()]);
    }
}
