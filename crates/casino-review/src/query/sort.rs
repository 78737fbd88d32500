use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::domain::Casino;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    SafetyIndex,
    UserRating,
    Name,
    Established,
    CreatedAt,
}

impl SortField {
    /// Parse a query-string sort key. Unknown keys yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "safetyIndex" | "safety_index" => Some(Self::SafetyIndex),
            "userRating" | "user_rating" => Some(Self::UserRating),
            "name" => Some(Self::Name),
            "established" | "establishedYear" | "established_year" => Some(Self::Established),
            "createdAt" | "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SortField::SafetyIndex => "safetyIndex",
            SortField::UserRating => "userRating",
            SortField::Name => "name",
            SortField::Established => "established",
            SortField::CreatedAt => "createdAt",
        }
    }

    fn compare(&self, left: &Casino, right: &Casino) -> Ordering {
        match self {
            SortField::SafetyIndex => left.safety_index.total_cmp(&right.safety_index),
            SortField::UserRating => left
                .user_rating
                .unwrap_or(0.0)
                .total_cmp(&right.user_rating.unwrap_or(0.0)),
            SortField::Name => left.name.cmp(&right.name),
            SortField::Established => left
                .established_year
                .unwrap_or(0)
                .cmp(&right.established_year.unwrap_or(0)),
            SortField::CreatedAt => created_or_epoch(left).cmp(&created_or_epoch(right)),
        }
    }
}

fn created_or_epoch(casino: &Casino) -> DateTime<Utc> {
    casino.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Asc),
            "desc" | "descending" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Stable sort. Equal keys keep their input order in both directions;
/// `None` leaves the input untouched.
pub fn sort(casinos: &[Casino], field: Option<SortField>, direction: SortDirection) -> Vec<Casino> {
    let mut sorted = casinos.to_vec();
    let Some(field) = field else {
        return sorted;
    };

    sorted.sort_by(|left, right| {
        let ordering = field.compare(left, right);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}
