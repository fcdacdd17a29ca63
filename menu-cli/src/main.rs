//! Menu CLI - browse an outlet's menu from the terminal
//!
//! Commands:
//! - `menu website` - Find the website of a project
//! - `menu menu` - Show the grouped menu of an outlet
//! - `menu outlets` - List the outlets of a website
//! - `menu offers` - List the offers of a website
//! - `menu greet` - Greet the remembered customer
//! - `menu register` - Remember and register a customer
//! - `menu feedback` - Rate a visit

mod config;
mod logger;
mod render;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use config::Config;
use chrono::{DateTime, Utc};
use menu_client::{
    CustomerRegistry, FeedbackForm, FileStore, GreetingDecision, MenuApi, read_attachments,
};
use menu_engine::{ActiveTab, FilterState, MenuLoader};
use shared::models::{CustomerProfile, DEFAULT_OUTLET_ICON, Offer, Rating, active_offers};
use std::path::PathBuf;
use tokio::task::JoinHandle;

/// Menu CLI - browse restaurant menus
#[derive(Parser)]
#[command(name = "menu")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the website of a project
    Website(ProjectArgs),

    /// Show the menu of an outlet
    Menu(MenuArgs),

    /// List the outlets of a website
    Outlets(WebsiteArgs),

    /// List the offers of a website, or show one
    Offers(OffersArgs),

    /// Greet the remembered customer
    Greet(GreetArgs),

    /// Remember and register a customer
    Register(RegisterArgs),

    /// Rate a visit
    Feedback(FeedbackArgs),
}

#[derive(Args)]
struct WebsiteArgs {
    /// Website ID
    #[arg(long)]
    website: Option<String>,
}

#[derive(Args)]
struct ProjectArgs {
    /// Project UID
    #[arg(long)]
    project: String,
}

#[derive(Args)]
struct OffersArgs {
    /// Website ID
    #[arg(long)]
    website: Option<String>,

    /// Only offers still running
    #[arg(long)]
    active: bool,

    /// Show the detail of one offer
    #[arg(long)]
    id: Option<String>,
}

#[derive(Args)]
struct MenuArgs {
    /// Website ID
    #[arg(long)]
    website: Option<String>,

    /// Outlet ID
    #[arg(long)]
    outlet: Option<String>,

    /// Vegetarian items only
    #[arg(long)]
    veg: bool,

    /// Non-vegetarian items only
    #[arg(long)]
    non_veg: bool,

    /// Egg items only
    #[arg(long)]
    egg: bool,

    /// Case-insensitive name search
    #[arg(long)]
    search: Option<String>,

    /// Category ID
    #[arg(long)]
    category: Option<String>,

    /// Feature tab ("all" or a feature title)
    #[arg(long)]
    tab: Option<String>,

    /// Show the detail of one item instead
    #[arg(long)]
    item: Option<String>,

    /// Print the groups as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct GreetArgs {
    /// Website ID
    #[arg(long)]
    website: Option<String>,

    /// Outlet whose icon is shown
    #[arg(long)]
    outlet: Option<String>,

    /// Accept the greeting and register with this website
    #[arg(long)]
    confirm: bool,
}

#[derive(Args)]
struct RegisterArgs {
    /// Website ID
    #[arg(long)]
    website: Option<String>,

    #[arg(long)]
    name: String,

    #[arg(long)]
    phone: String,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    dob: String,
}

#[derive(Args)]
struct FeedbackArgs {
    /// Website ID
    #[arg(long)]
    website: Option<String>,

    /// Outlet ID
    #[arg(long)]
    outlet: Option<String>,

    #[arg(long, value_parser = parse_rating)]
    overall: Rating,

    #[arg(long, value_parser = parse_rating)]
    food: Option<Rating>,

    #[arg(long, value_parser = parse_rating)]
    staff: Option<Rating>,

    #[arg(long, value_parser = parse_rating)]
    cleanliness: Option<Rating>,

    #[arg(long, default_value = "")]
    remarks: String,

    /// Files to attach, at most 5 MB each
    #[arg(long = "attach")]
    attachments: Vec<PathBuf>,
}

fn parse_rating(value: &str) -> Result<Rating, String> {
    Rating::parse(value).ok_or_else(|| "expected one of: Bad, Average, Good, Best".to_string())
}

/// Offer `offer_id` for the detail view; expired offers cannot be opened
fn open_offer<'a>(offers: &'a [Offer], offer_id: &str, now: DateTime<Utc>) -> Result<&'a Offer> {
    let offer = offers
        .iter()
        .find(|offer| offer.id == offer_id)
        .with_context(|| format!("No offer {}", offer_id))?;
    if offer.is_expired(now) {
        bail!("This offer has expired");
    }
    Ok(offer)
}

/// Wait for a background task, logging a panic instead of propagating it
async fn finish_background(handle: JoinHandle<()>) {
    if let Err(e) = handle.await {
        tracing::warn!(error = %e, "Background task failed");
    }
}

fn website_id(arg: Option<String>) -> Result<String> {
    match arg.map(|w| w.trim().to_string()) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => bail!("Invalid website ID: missing websiteId"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    logger::init_logger(&config.log_level, config.log_dir.as_deref())?;
    tracing::debug!(
        api = %config.client.api_base_url,
        data_dir = %config.data_dir.display(),
        "Menu CLI starting"
    );

    let cli = Cli::parse();
    let api = MenuApi::from_config(&config.client)?;

    match cli.command {
        Commands::Website(args) => {
            let website = api
                .website_by_project(&args.project)
                .await
                .context("Error fetching website data")?;
            print!("{}", render::website(&website, &config.client.image_base_url));
            Ok(())
        }
        Commands::Menu(args) => show_menu(&config, api, args).await,
        Commands::Outlets(args) => {
            let website = website_id(args.website)?;
            let outlets = api.outlets(&website).await.context("Failed to load outlets")?;
            print!("{}", render::outlets(&outlets));
            Ok(())
        }
        Commands::Offers(args) => {
            let website = website_id(args.website)?;
            let offers = api.offers(&website).await.context("Failed to load offers")?;
            let now = Utc::now();
            if let Some(offer_id) = args.id {
                let offer = open_offer(&offers, &offer_id, now)?;
                print!("{}", render::offer_detail(offer, &config.client.image_base_url));
            } else if args.active {
                print!("{}", render::offers(active_offers(&offers, now), now));
            } else {
                print!("{}", render::offers(&offers, now));
            }
            Ok(())
        }
        Commands::Greet(args) => greet(&config, &api, args).await,
        Commands::Register(args) => {
            let website = website_id(args.website)?;
            let registry = CustomerRegistry::new(FileStore::open(&config.data_dir));
            let profile = CustomerProfile::new(args.name, args.phone, args.dob);
            let handle = registry.register(&api, &website, &profile)?;
            println!("Thanks, {}! You're registered.", profile.name);
            // Let the background registration finish before the process exits
            finish_background(handle).await;
            Ok(())
        }
        Commands::Feedback(args) => feedback(&config, &api, args).await,
    }
}

async fn show_menu(config: &Config, api: MenuApi, args: MenuArgs) -> Result<()> {
    let website = args.website.unwrap_or_default();
    let outlet = args.outlet.unwrap_or_default();

    println!("Loading menu...");
    let view = MenuLoader::new(api).load(&website, &outlet).await?;

    if let Some(item_id) = args.item {
        let item = view
            .find_item(&item_id)
            .with_context(|| format!("No item {} at this outlet", item_id))?;
        print!(
            "{}",
            render::product(&view.product_detail(item, &config.client.image_base_url))
        );
        return Ok(());
    }

    let mut state = FilterState::new();
    if args.veg {
        state.toggle_veg();
    }
    if args.non_veg {
        state.toggle_non_veg();
    }
    if args.egg {
        state.toggle_egg();
    }
    if let Some(term) = args.search {
        state.set_search_term(term);
    }
    state.select_category(args.category);
    if let Some(tab) = args.tab {
        state.set_active_tab(ActiveTab::from_value(&tab));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view.grouped(&state))?);
    } else {
        print!("{}", render::menu(&view, &state));
    }
    Ok(())
}

async fn greet(config: &Config, api: &MenuApi, args: GreetArgs) -> Result<()> {
    let website = website_id(args.website)?;
    let registry = CustomerRegistry::new(FileStore::open(&config.data_dir));

    match registry.greeting(&website) {
        GreetingDecision::AlreadyShown => {}
        GreetingDecision::ShowForm => {
            println!("Welcome! Register with `menu register --name <NAME> --phone <PHONE> --dob <YYYY-MM-DD>`.");
        }
        GreetingDecision::Greet(customer) => {
            let icon = outlet_icon(api, args.outlet.as_deref()).await;
            print!(
                "{}",
                render::greeting(&customer.profile.name, &config.client.image_url(&icon))
            );
            if args.confirm {
                let handle = registry.confirm_greeting(api, &website, &customer)?;
                finish_background(handle).await;
            } else {
                registry.mark_greeting_shown(&website);
            }
        }
    }
    Ok(())
}

/// Icon of `outlet_id`, falling back to the default icon on any failure
async fn outlet_icon(api: &MenuApi, outlet_id: Option<&str>) -> String {
    let Some(outlet_id) = outlet_id.filter(|id| !id.trim().is_empty()) else {
        return DEFAULT_OUTLET_ICON.to_string();
    };
    match api.outlet(outlet_id).await {
        Ok(Some(outlet)) => outlet.icon_or_default().to_string(),
        Ok(None) => DEFAULT_OUTLET_ICON.to_string(),
        Err(e) => {
            tracing::warn!(outlet_id, error = %e, "Outlet icon unavailable, using default");
            DEFAULT_OUTLET_ICON.to_string()
        }
    }
}

async fn feedback(config: &Config, api: &MenuApi, args: FeedbackArgs) -> Result<()> {
    let website = website_id(args.website)?;
    let registry = CustomerRegistry::new(FileStore::open(&config.data_dir));
    let Some(customer) = registry.resolve(&website) else {
        bail!("Please register before leaving feedback");
    };

    registry
        .ensure_registered(api, &website, &customer)
        .await
        .context("Failed to register with current website")?;

    let attachments = read_attachments(&args.attachments).await;
    let uploaded_file_names = api.upload_files(attachments).await;

    let form = FeedbackForm {
        overall_experience: Some(args.overall),
        food_quality: args.food,
        staff_service: args.staff,
        cleanliness: args.cleanliness,
        remarks: args.remarks,
        uploaded_file_names,
    };
    let request = form.into_request(&website, args.outlet.as_deref(), &customer.profile)?;
    api.submit_feedback(&request)
        .await
        .context("Failed to submit feedback")?;
    println!("Thank you for your feedback!");
    Ok(())
}
