use crate::infra::{catalog_service, SharedCatalogService};
use casino_review::admin::ReviewSubmission;
use casino_review::catalog::{CasinoDetail, CasinoId, CategoryRatings, ReviewTarget};
use casino_review::config::AppConfig;
use casino_review::error::AppError;
use casino_review::query::{CasinoQuery, CasinoQueryParams};
use casino_review::rating::display;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct CasinoListArgs {
    /// Free-text search over names, descriptions, features and payment methods
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Only show casinos with at least this safety index
    #[arg(long)]
    pub(crate) min_safety_index: Option<String>,
    /// Exact license name
    #[arg(long)]
    pub(crate) license: Option<String>,
    /// Comma-separated payment methods; any match qualifies
    #[arg(long)]
    pub(crate) payment_methods: Option<String>,
    /// Comma-separated features; any match qualifies
    #[arg(long)]
    pub(crate) features: Option<String>,
    /// Comma-separated game providers; any match qualifies
    #[arg(long)]
    pub(crate) game_providers: Option<String>,
    /// Only show casinos founded in or after this year
    #[arg(long)]
    pub(crate) established_year: Option<String>,
    /// safetyIndex, userRating, name, established or createdAt
    #[arg(long)]
    pub(crate) sort: Option<String>,
    /// asc or desc
    #[arg(long)]
    pub(crate) direction: Option<String>,
    #[arg(long)]
    pub(crate) page: Option<String>,
    /// JSON catalog snapshot (defaults to CATALOG_PATH, then the demo data)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Casino CSV export merged over the catalog (overrides CATALOG_CASINOS_CSV)
    #[arg(long)]
    pub(crate) casinos_csv: Option<PathBuf>,
}

/// Where the CLI reads its catalog from when not using the configured sources.
#[derive(Debug, Default)]
struct CatalogSources {
    snapshot: Option<PathBuf>,
    casinos_csv: Option<PathBuf>,
}

impl CasinoListArgs {
    fn into_params(self) -> (CasinoQueryParams, CatalogSources) {
        let params = CasinoQueryParams {
            search: self.search,
            min_safety_index: self.min_safety_index,
            license: self.license,
            payment_methods: self.payment_methods,
            features: self.features,
            game_providers: self.game_providers,
            established_year: self.established_year,
            sort: self.sort,
            direction: self.direction,
            page: self.page,
        };
        let sources = CatalogSources {
            snapshot: self.catalog,
            casinos_csv: self.casinos_csv,
        };
        (params, sources)
    }
}

#[derive(Args, Debug)]
pub(crate) struct CasinoShowArgs {
    /// Casino identifier
    pub(crate) casino_id: String,
    /// JSON catalog snapshot (defaults to CATALOG_PATH, then the demo data)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Casino CSV export merged over the catalog (overrides CATALOG_CASINOS_CSV)
    #[arg(long)]
    pub(crate) casinos_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Rating given by the simulated visitor review (1-10)
    #[arg(long, default_value_t = 10)]
    pub(crate) visitor_rating: i64,
}

fn load_service(sources: CatalogSources) -> Result<SharedCatalogService, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(csv) = sources.casinos_csv {
        config.catalog.casinos_csv = Some(csv);
    }
    catalog_service(&config.catalog, sources.snapshot.as_deref())
}

pub(crate) fn run_casino_list(args: CasinoListArgs) -> Result<(), AppError> {
    let (params, sources) = args.into_params();
    let service = load_service(sources)?;
    let query = params
        .into_query()
        .map_err(casino_review::catalog::CatalogServiceError::from)?;
    print_listing(&service, &query)
}

pub(crate) fn run_casino_show(args: CasinoShowArgs) -> Result<(), AppError> {
    let service = load_service(CatalogSources {
        snapshot: args.catalog,
        casinos_csv: args.casinos_csv,
    })?;
    let detail = service.casino_detail(&CasinoId(args.casino_id))?;
    print_detail(&detail);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = load_service(CatalogSources::default())?;

    println!("Casino review demo");
    println!("\nTop casinos by safety index");
    print_listing(&service, &CasinoQuery::default())?;

    let crypto = CasinoQuery {
        search: "bitcoin".to_string(),
        ..CasinoQuery::default()
    }
    .with_criteria_changed();
    println!("\nSearch: \"{}\"", crypto.search);
    print_listing(&service, &crypto)?;

    let Some(top) = service.list_casinos(&CasinoQuery::default())?.items.into_iter().next() else {
        println!("\nCatalog is empty; nothing more to show.");
        return Ok(());
    };
    let casino_id = top.casino.id.clone();

    println!();
    print_detail(&service.casino_detail(&casino_id)?);

    println!("\nVisitor review moderation");
    let submission = ReviewSubmission {
        target: ReviewTarget::Casino(casino_id.clone()),
        author: "demo visitor".to_string(),
        title: "Smooth first withdrawal".to_string(),
        content: "Cashed out without any extra verification requests.".to_string(),
        overall_rating: args.visitor_rating,
        categories: CategoryRatings::default(),
        pros: Vec::new(),
        cons: Vec::new(),
    };
    let review = match service.submit_review(submission) {
        Ok(review) => review,
        Err(err) => {
            println!("  Submission rejected: {}", err);
            return Ok(());
        }
    };
    println!(
        "- Received review {} ({}/10), awaiting moderation",
        review.id.0, review.overall_rating
    );
    let pending = service.casino_detail(&casino_id)?;
    println!(
        "  Safety index while pending: {}",
        pending.rating.display_safety_index
    );

    service.publish_review(&review.id)?;
    let published = service.casino_detail(&casino_id)?;
    println!(
        "- Published; safety index now {} from {}",
        published.rating.display_safety_index, published.rating.source_label
    );

    Ok(())
}

fn print_listing(service: &SharedCatalogService, query: &CasinoQuery) -> Result<(), AppError> {
    let listing = service.list_casinos(query)?;

    if listing.items.is_empty() {
        println!("  No casinos match.");
    }
    for card in &listing.items {
        println!(
            "  - {:<28} {:>4} | {}",
            card.casino.name, card.rating.display_safety_index, card.rating.source_label
        );
    }
    println!(
        "  Page {} of {} ({} casinos)",
        listing.page, listing.total_pages, listing.total_count
    );
    Ok(())
}

fn print_detail(detail: &CasinoDetail) {
    let casino = &detail.casino;
    println!("{} ({})", casino.name, casino.id.0);
    println!(
        "- Safety index {} [{}%] from {}",
        detail.rating.display_safety_index,
        detail.rating.progress_percent,
        detail.rating.source_label
    );
    if let Some(expert) = detail.rating.expert_rating {
        println!(
            "  Expert {} across {} review(s)",
            display::one_decimal(expert),
            detail.rating.expert_review_count
        );
    }
    if let Some(user) = detail.rating.user_rating {
        println!(
            "  Visitors {} across {} review(s)",
            display::one_decimal(user),
            detail.rating.user_review_count
        );
    }
    if let Some(license) = &casino.license {
        println!("- License: {}", license);
    }
    if !casino.payment_methods.is_empty() {
        println!("- Payments: {}", casino.payment_methods.join(", "));
    }
    for pro in &detail.pros_and_cons.pros {
        println!("  + {}", pro);
    }
    for con in &detail.pros_and_cons.cons {
        println!("  - {}", con);
    }
    if !detail.bonuses.is_empty() {
        println!("- Bonuses:");
        for card in &detail.bonuses {
            println!(
                "    {} ({}) rated {}",
                card.bonus.title, card.bonus_type_label, card.rating.display_safety_index
            );
        }
    }
}
