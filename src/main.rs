#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use ecoquest_core::{logging, DEFAULT_FEED_LIMIT};

use crate::context::Backend;

/// Backend chosen from the command line
static BACKEND: OnceLock<Backend> = OnceLock::new();

/// Get the backend (set from command line, demo data otherwise)
pub fn backend() -> Backend {
    BACKEND
        .get()
        .cloned()
        .unwrap_or_else(|| Backend::demo(DEFAULT_FEED_LIMIT))
}

/// EcoQuest Community - species discoveries from the field
#[derive(Parser, Debug)]
#[command(name = "ecoquest-desktop")]
#[command(about = "EcoQuest Community - browse, like and discuss shared discoveries")]
struct Args {
    /// Project URL (overrides SUPABASE_URL)
    #[arg(long)]
    supabase_url: Option<String>,

    /// Public anon key (overrides SUPABASE_ANON_KEY)
    #[arg(long)]
    anon_key: Option<String>,

    /// Access token of a signed-in user (overrides ECOQUEST_ACCESS_TOKEN)
    #[arg(long)]
    access_token: Option<String>,

    /// Number of posts to show
    #[arg(short, long)]
    limit: Option<usize>,

    /// Browse built-in sample posts instead of a hosted project
    #[arg(long)]
    demo: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn backend(&self) -> ecoquest_core::CommunityResult<Backend> {
        if self.demo {
            return Ok(Backend::demo(self.limit.unwrap_or(DEFAULT_FEED_LIMIT)));
        }
        let config = ecoquest_core::Config::from_env_with_overrides(&[
            ("SUPABASE_URL", self.supabase_url.clone()),
            ("SUPABASE_ANON_KEY", self.anon_key.clone()),
            ("ECOQUEST_ACCESS_TOKEN", self.access_token.clone()),
            ("ECOQUEST_FEED_LIMIT", self.limit.map(|l| l.to_string())),
        ])?;
        Backend::remote(&config)
    }
}

fn main() {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    logging::init(args.verbose);

    let backend = match args.backend() {
        Ok(backend) => backend,
        Err(e) => {
            eprintln!("ecoquest-desktop: {e}");
            eprintln!("Pass --demo to browse sample posts without a project.");
            std::process::exit(2);
        }
    };

    tracing::info!(
        demo = backend.is_demo(),
        limit = backend.feed_limit,
        "Starting EcoQuest Community"
    );
    let _ = BACKEND.set(backend);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("EcoQuest Community")
            .with_inner_size(dioxus::desktop::LogicalSize::new(720.0, 960.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
