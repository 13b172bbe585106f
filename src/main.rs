mod analysis;
mod app;
mod color;
mod config;
mod data;
mod error;
mod recommend;
mod sampling;
mod state;
mod tables;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use app::{AuraSyncApp, ProductQuery};
use config::{Settings, DEFAULT_LIST_LIMIT};
use recommend::RecommendationRequest;
use state::AppState;

#[derive(Parser)]
#[command(name = "aurasync", version, about = "Style analysis and outfit recommendations")]
struct Cli {
    #[command(flatten)]
    settings: Settings,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report version, model availability and catalog size.
    Health,
    /// Estimate a face, body or skin attribute.
    Analyze {
        #[command(subcommand)]
        target: AnalyzeTarget,
    },
    /// Style description for a four-letter MBTI code.
    Personality { code: String },
    /// Compose a text recommendation.
    Recommend {
        #[command(flatten)]
        profile: ProfileArgs,
        /// Read the request from a JSON file instead of flags.
        #[arg(long, conflicts_with_all = ["gender", "body_type", "face_shape", "mbti", "skin_tone"])]
        request: Option<PathBuf>,
    },
    /// Product recommendations and listings.
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
}

#[derive(Subcommand)]
enum AnalyzeTarget {
    Face {
        #[arg(long)]
        image: Option<PathBuf>,
    },
    Body {
        #[arg(long)]
        image: Option<PathBuf>,
        #[arg(long, default_value = recommend::DEFAULT_GENDER)]
        gender: String,
    },
    Skin {
        #[arg(long)]
        image: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// Shuffled page of products for a profile.
    Recommend {
        #[command(flatten)]
        profile: ProfileArgs,
    },
    /// Catalog listing, optionally narrowed to one gender.
    List {
        #[arg(long)]
        gender: Option<String>,
        #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: usize,
    },
}

#[derive(Args)]
struct ProfileArgs {
    #[arg(long)]
    gender: Option<String>,
    #[arg(long)]
    body_type: Option<String>,
    #[arg(long)]
    face_shape: Option<String>,
    #[arg(long)]
    mbti: Option<String>,
    #[arg(long)]
    skin_tone: Option<String>,
}

impl From<ProfileArgs> for RecommendationRequest {
    fn from(p: ProfileArgs) -> Self {
        RecommendationRequest {
            gender: p.gender,
            body_type: p.body_type,
            face_shape: p.face_shape,
            mbti: p.mbti,
            skin_tone: p.skin_tone,
        }
    }
}

impl From<ProfileArgs> for ProductQuery {
    fn from(p: ProfileArgs) -> Self {
        ProductQuery {
            gender: p.gender,
            body_type: p.body_type,
            skin_tone: p.skin_tone,
            mbti: p.mbti,
        }
    }
}

fn read_image(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(p) => std::fs::read(p).with_context(|| format!("reading image {}", p.display())),
        None => Ok(Vec::new()),
    }
}

fn read_request(path: &Path) -> Result<RecommendationRequest> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading request {}", path.display()))?;
    serde_json::from_str(&text).context("parsing recommendation request")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let app = AuraSyncApp::new(AppState::load(cli.settings));

    match cli.cmd {
        Commands::Health => print_json(&app.health()),
        Commands::Analyze { target } => match target {
            AnalyzeTarget::Face { image } => {
                let bytes = read_image(image.as_deref())?;
                print_json(&app.analyze_face(&bytes)?)
            }
            AnalyzeTarget::Body { image, gender } => {
                let bytes = read_image(image.as_deref())?;
                print_json(&app.analyze_body(&bytes, Some(gender.as_str()))?)
            }
            AnalyzeTarget::Skin { image } => {
                let bytes = read_image(image.as_deref())?;
                print_json(&app.analyze_skin(&bytes)?)
            }
        },
        Commands::Personality { code } => print_json(&app.personality(&code)?),
        Commands::Recommend { profile, request } => {
            let request = match request {
                Some(path) => read_request(&path)?,
                None => profile.into(),
            };
            print_json(&app.recommend(&request))
        }
        Commands::Products { action } => match action {
            ProductsAction::Recommend { profile } => {
                print_json(&app.product_recommendations(&profile.into()))
            }
            ProductsAction::List { gender, limit } => {
                print_json(&app.list_products(gender.as_deref(), limit))
            }
        },
    }
}
