use casino_review::catalog::{
    Bonus, BonusId, BonusType, Casino, CasinoCsvImporter, CasinoId, CatalogService, CatalogSnapshot,
    CategoryAssessment, CategoryRatings, ExpertReview, ExpertReviewId, Game, GameId,
    InMemoryCatalog, Review, ReviewId, ReviewTarget,
};
use casino_review::config::CatalogConfig;
use casino_review::error::AppError;
use chrono::{DateTime, TimeZone, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type SharedCatalogService = Arc<CatalogService<InMemoryCatalog>>;

/// Build the catalog service from a snapshot file, falling back to the bundled demo data.
/// A configured casino CSV is merged on top.
pub(crate) fn catalog_service(
    config: &CatalogConfig,
    snapshot_override: Option<&Path>,
) -> Result<SharedCatalogService, AppError> {
    let path = snapshot_override.or(config.snapshot_path.as_deref());
    let mut snapshot = match path {
        Some(path) => {
            let snapshot = CatalogSnapshot::from_path(path)?;
            info!(
                path = %path.display(),
                casinos = snapshot.casinos.len(),
                reviews = snapshot.reviews.len(),
                "catalog snapshot loaded"
            );
            snapshot
        }
        None => demo_snapshot(),
    };
    if let Some(csv) = config.casinos_csv.as_deref() {
        let casinos = CasinoCsvImporter::from_path(csv)?;
        let imported = casinos.len();
        let replaced = snapshot.merge_casinos(casinos);
        info!(path = %csv.display(), imported, replaced, "casino csv merged");
    }

    let repository = Arc::new(InMemoryCatalog::from_snapshot(snapshot));
    let service = CatalogService::new(repository, config.service_config())?;
    Ok(Arc::new(service))
}

fn added_on(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).single()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

struct CasinoSeed<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    safety_index: f64,
    license: &'a str,
    established_year: i32,
    payment_methods: &'a [&'a str],
    game_providers: &'a [&'a str],
    features: &'a [&'a str],
    added: Option<DateTime<Utc>>,
}

impl CasinoSeed<'_> {
    fn build(self) -> Casino {
        Casino {
            id: CasinoId(self.id.to_string()),
            name: self.name.to_string(),
            slug: self.id.to_string(),
            description: self.description.to_string(),
            website_url: format!("https://{}.example", self.id),
            logo_url: None,
            safety_index: self.safety_index,
            user_rating: None,
            license: Some(self.license.to_string()),
            established_year: Some(self.established_year),
            payment_methods: strings(self.payment_methods),
            supported_currencies: strings(&["EUR", "USD"]),
            game_providers: strings(self.game_providers),
            features: strings(self.features),
            restricted_countries: strings(&["US"]),
            is_active: true,
            is_featured: false,
            created_at: self.added,
        }
    }
}

fn expert_review(casino_id: &str, ratings: [f64; 6], summary: &str) -> ExpertReview {
    let overall_rating = ratings.iter().sum::<f64>() / ratings.len() as f64;
    let [bonuses, design, payouts, customer_support, game_selection, mobile_experience] =
        ratings.map(|rating| CategoryAssessment {
            rating,
            explanation: String::new(),
        });

    ExpertReview {
        id: ExpertReviewId(format!("expert-{casino_id}")),
        casino_id: CasinoId(casino_id.to_string()),
        bonuses,
        design,
        payouts,
        customer_support,
        game_selection,
        mobile_experience,
        overall_rating,
        summary: summary.to_string(),
        author: "Editorial Desk".to_string(),
        created_at: added_on(2024, 5, 2),
    }
}

fn visitor_review(id: &str, target: ReviewTarget, overall_rating: u8, content: &str) -> Review {
    Review {
        id: ReviewId(id.to_string()),
        target,
        author: "visitor".to_string(),
        title: String::new(),
        content: content.to_string(),
        overall_rating,
        categories: CategoryRatings::default(),
        pros: Vec::new(),
        cons: Vec::new(),
        helpful_votes: 0,
        is_published: true,
        created_at: added_on(2024, 6, 14),
    }
}

/// Small catalog used by the CLI demo and when no snapshot is configured.
pub(crate) fn demo_snapshot() -> CatalogSnapshot {
    let casinos = vec![
        CasinoSeed {
            id: "northern-lights",
            name: "Northern Lights Casino",
            description: "Nordic-styled casino with same-day withdrawals",
            safety_index: 8.1,
            license: "Malta Gaming Authority",
            established_year: 2016,
            payment_methods: &["Visa", "Trustly", "Skrill"],
            game_providers: &["NetEnt", "Evolution"],
            features: &["Live Chat", "Live Casino"],
            added: added_on(2023, 11, 3),
        }
        .build(),
        CasinoSeed {
            id: "satoshi-spins",
            name: "Satoshi Spins",
            description: "Crypto-first casino with provably fair games",
            safety_index: 6.8,
            license: "Curacao",
            established_year: 2021,
            payment_methods: &["Bitcoin", "Ethereum", "Litecoin"],
            game_providers: &["Pragmatic Play", "BGaming"],
            features: &["Crypto Friendly", "Live Chat"],
            added: added_on(2024, 2, 19),
        }
        .build(),
        CasinoSeed {
            id: "royal-harbour",
            name: "Royal Harbour",
            description: "Long-running casino with a deep slot library",
            safety_index: 7.4,
            license: "UK Gambling Commission",
            established_year: 2004,
            payment_methods: &["Visa", "PayPal"],
            game_providers: &["NetEnt", "Play'n GO", "Microgaming"],
            features: &["VIP Program"],
            added: added_on(2022, 8, 30),
        }
        .build(),
    ];

    let expert_reviews = vec![
        expert_review(
            "northern-lights",
            [8.5, 8.0, 9.5, 8.0, 7.5, 8.5],
            "Fast payouts and a polished lobby.",
        ),
        expert_review(
            "satoshi-spins",
            [9.0, 6.5, 8.0, 3.5, 7.0, 6.0],
            "Generous crypto promotions held back by slow support.",
        ),
    ];

    let reviews = vec![
        visitor_review(
            "seed-001",
            ReviewTarget::Casino(CasinoId("northern-lights".to_string())),
            9,
            "Withdrawal arrived within the hour.",
        ),
        visitor_review(
            "seed-002",
            ReviewTarget::Casino(CasinoId("satoshi-spins".to_string())),
            6,
            "Nice bonuses, support took two days to answer.",
        ),
        visitor_review(
            "seed-003",
            ReviewTarget::Game(GameId("starburst".to_string())),
            8,
            "Classic low-volatility slot.",
        ),
    ];

    let bonuses = vec![
        Bonus {
            id: BonusId("northern-lights-welcome".to_string()),
            casino_id: CasinoId("northern-lights".to_string()),
            title: "100% up to 300 EUR".to_string(),
            bonus_type: BonusType::Welcome,
            amount: "300 EUR".to_string(),
            wagering_requirement: Some(35.0),
            rating: 7.6,
            is_active: true,
        },
        Bonus {
            id: BonusId("satoshi-free-spins".to_string()),
            casino_id: CasinoId("satoshi-spins".to_string()),
            title: "50 free spins on sign-up".to_string(),
            bonus_type: BonusType::FreeSpins,
            amount: "50 spins".to_string(),
            wagering_requirement: Some(40.0),
            rating: 6.9,
            is_active: true,
        },
    ];

    let games = vec![Game {
        id: GameId("starburst".to_string()),
        name: "Starburst".to_string(),
        provider: "NetEnt".to_string(),
        category: "slots".to_string(),
        rtp: Some(96.09),
        rating: 7.9,
        is_active: true,
    }];

    CatalogSnapshot {
        casinos,
        expert_reviews,
        reviews,
        bonuses,
        games,
    }
}
