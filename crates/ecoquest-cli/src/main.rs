//! EcoQuest Community CLI
//!
//! Thin wrapper around ecoquest-core for reading and reacting to the
//! community feed from a terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Newest posts
//! ecoquest feed
//!
//! # Comment thread of a post
//! ecoquest comments <post_id>
//!
//! # Like a post, or take the like back
//! ecoquest like <post_id>
//!
//! # Comment on a post
//! ecoquest comment <post_id> "Lovely find!"
//!
//! # Level and experience of the signed-in viewer
//! ecoquest stats
//!
//! # Link to open in a browser to sign in
//! ecoquest sign-in-url
//!
//! # Try everything against seeded sample data
//! ecoquest --demo feed
//! ```

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use ecoquest_core::age::time_ago;
use ecoquest_core::auth::DEFAULT_PROVIDER;
use ecoquest_core::post::{Post, ProgressPost, QuestPost, SpeciesPost};
use ecoquest_core::{
    logging, AuthClient, CommentOutcome, CommunityStore, Config, FeedService,
    InteractionController, LikeOutcome, MemoryStore, PostId, RestStore, UserId, DEMO_VIEWER,
};

/// EcoQuest Community - species sightings, quests and milestones
#[derive(Parser)]
#[command(name = "ecoquest")]
#[command(version = "0.1.0")]
#[command(about = "EcoQuest Community - browse the feed, like and comment")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use seeded in-memory sample data instead of the hosted project
    #[arg(long, global = true)]
    demo: bool,

    /// Project URL (overrides SUPABASE_URL)
    #[arg(long, global = true)]
    supabase_url: Option<String>,

    /// Project anon key (overrides SUPABASE_ANON_KEY)
    #[arg(long, global = true)]
    anon_key: Option<String>,

    /// Access token of a signed-in viewer (overrides ECOQUEST_ACCESS_TOKEN)
    #[arg(long, global = true)]
    access_token: Option<String>,

    /// Number of posts to fetch (overrides ECOQUEST_FEED_LIMIT)
    #[arg(short, long, global = true)]
    limit: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the newest posts
    Feed,

    /// Show the comment thread of a post
    Comments {
        /// Post ID
        post: String,
    },

    /// Like a post, or remove your like
    Like {
        /// Post ID
        post: String,
    },

    /// Add a comment to a post
    Comment {
        /// Post ID
        post: String,
        /// Comment text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Show level and experience (defaults to the signed-in viewer)
    Stats {
        /// User ID
        user: Option<String>,
    },

    /// Print the link that starts Google sign-in
    SignInUrl {
        /// Where to send the browser afterwards (overrides ECOQUEST_REDIRECT_URL)
        #[arg(long)]
        redirect_to: Option<String>,
    },
}

/// Store and viewer resolved from flags and environment
struct Connection {
    store: Arc<dyn CommunityStore>,
    viewer: Option<UserId>,
    feed_limit: usize,
}

impl Connection {
    fn demo(limit: Option<usize>) -> Self {
        Self {
            store: Arc::new(MemoryStore::demo()),
            viewer: Some(UserId::new(DEMO_VIEWER)),
            feed_limit: limit.unwrap_or(ecoquest_core::DEFAULT_FEED_LIMIT),
        }
    }

    async fn open(cli: &Cli) -> Result<Self> {
        if cli.demo {
            tracing::info!("Using demo data");
            return Ok(Self::demo(cli.limit));
        }

        let config = Config::from_env_with_overrides(&[
            ("SUPABASE_URL", cli.supabase_url.clone()),
            ("SUPABASE_ANON_KEY", cli.anon_key.clone()),
            ("ECOQUEST_ACCESS_TOKEN", cli.access_token.clone()),
            ("ECOQUEST_FEED_LIMIT", cli.limit.map(|l| l.to_string())),
        ])?;

        let auth = AuthClient::new(&config.backend)?;
        let rest = RestStore::new(&config.backend)?;

        let (store, viewer) = match &config.access_token {
            Some(token) => {
                let session = auth
                    .session_from_token(token)
                    .await
                    .context("Access token was rejected")?;
                tracing::info!(user_id = %session.user_id, "Signed in");
                (rest.with_access_token(token), Some(session.user_id))
            }
            None => (rest, None),
        };

        Ok(Self {
            store: Arc::new(store),
            viewer,
            feed_limit: config.feed_limit,
        })
    }

    fn feed(&self) -> FeedService {
        FeedService::new(self.store.clone()).with_limit(self.feed_limit)
    }

    fn interactions(&self) -> InteractionController {
        InteractionController::new(self.store.clone(), self.viewer.clone())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    logging::init(cli.verbose);

    // Needs no store; answer before connecting
    if let Commands::SignInUrl { redirect_to } = &cli.command {
        if cli.demo {
            bail!("Sign-in is not available in demo mode");
        }
        let config = Config::from_env_with_overrides(&[
            ("SUPABASE_URL", cli.supabase_url.clone()),
            ("SUPABASE_ANON_KEY", cli.anon_key.clone()),
        ])?;
        let auth = AuthClient::new(&config.backend)?;
        let redirect = redirect_to.as_deref().or(config.redirect_url.as_deref());
        println!("{}", auth.sign_in_url(DEFAULT_PROVIDER, redirect)?);
        return Ok(());
    }

    let conn = Connection::open(&cli).await?;

    match &cli.command {
        Commands::Feed => {
            let feed = conn.feed().recent().await;
            if feed.is_empty() {
                println!("No posts yet. Start sharing from the app!");
                return Ok(());
            }

            let now = Utc::now();
            let interactions = conn.interactions();
            println!("Community feed ({} posts):", feed.len());
            for post in &feed.posts {
                let state = interactions.load(post.id()).await;
                println!();
                print_post(post, now);
                println!(
                    "  {} likes, {} comments{}",
                    state.likes_count,
                    state.comment_count(),
                    if state.is_liked() { " (liked)" } else { "" }
                );
            }
        }

        Commands::Comments { post } => {
            let state = conn.interactions().load(&PostId::new(post)).await;
            if state.comments.is_empty() {
                println!("No comments yet.");
                return Ok(());
            }

            let now = Utc::now();
            println!("Comments ({}):", state.comment_count());
            for comment in &state.comments {
                let author = if conn.viewer.as_ref() == Some(&comment.user_id) {
                    "You"
                } else {
                    "User"
                };
                println!("  {} ({}): {}", author, time_ago(comment.created_at, now), comment.content);
            }
        }

        Commands::Like { post } => {
            let interactions = conn.interactions();
            let mut state = interactions.load(&PostId::new(post)).await;
            match interactions.toggle_like(&mut state).await {
                LikeOutcome::Liked => println!("Liked post {}", post),
                LikeOutcome::Unliked => println!("Removed like from post {}", post),
                LikeOutcome::SignInRequired => {
                    bail!("You need to sign in to like posts (set ECOQUEST_ACCESS_TOKEN)")
                }
                LikeOutcome::Failed => bail!("Could not read your current like; nothing changed"),
            }
            println!("  Likes: {}", state.likes_count);
        }

        Commands::Comment { post, text } => {
            let interactions = conn.interactions();
            let mut state = interactions.load(&PostId::new(post)).await;
            match interactions.submit_comment(&mut state, &text.join(" ")).await {
                CommentOutcome::Posted(comment) => {
                    println!("Comment posted!");
                    println!("  ID: {}", comment.id);
                    println!("  Comments: {}", state.comment_count());
                }
                CommentOutcome::Empty => bail!("Comment is empty"),
                CommentOutcome::SignInRequired => {
                    bail!("You need to sign in to comment (set ECOQUEST_ACCESS_TOKEN)")
                }
                CommentOutcome::Failed => bail!("Failed to post comment"),
            }
        }

        Commands::Stats { user } => {
            let user_id = match (user, &conn.viewer) {
                (Some(user), _) => UserId::new(user),
                (None, Some(viewer)) => viewer.clone(),
                (None, None) => bail!("Pass a user ID or sign in (set ECOQUEST_ACCESS_TOKEN)"),
            };
            let Some(stats) = conn.feed().viewer_stats(&user_id).await else {
                bail!("No stats found for user {}", user_id);
            };

            println!("Stats for {}:", user_id);
            println!("  Level: {}", stats.level);
            println!("  Experience: {} / {} XP", stats.exp, stats.exp_cap);
            println!(
                "  Progress to Level {}: {:.0}%",
                stats.next_level(),
                stats.progress_percent()
            );
        }

        Commands::SignInUrl { .. } => {}
    }

    Ok(())
}

fn print_post(post: &Post, now: DateTime<Utc>) {
    let header = post.header();
    println!(
        "[{}] {} - {}",
        post.kind().as_str(),
        header.author.display_name,
        time_ago(header.created_at, now)
    );
    println!("  ID: {}", header.id);

    match post {
        Post::Species(p) => print_species(p),
        Post::Quest(p) => print_quest(p),
        Post::Progress(p) => print_progress(p),
    }

    if !header.caption.is_empty() {
        println!("  \"{}\"", header.caption);
    }
}

fn print_species(post: &SpeciesPost) {
    println!("  Species: {}", post.species_name);
    if !post.scientific_name.is_empty() {
        println!("  Scientific name: {}", post.scientific_name);
    }
    if !post.location.is_empty() {
        println!("  Location: {}", post.location);
    }
}

fn print_quest(post: &QuestPost) {
    let stats = &post.stats;
    let done = post.objectives.iter().filter(|o| o.is_completed).count();

    println!("  Quest: {}", post.quest_name);
    if !post.objectives.is_empty() {
        println!("  Objectives: {}/{}", done, post.objectives.len());
    }
    if stats.flora_target > 0 {
        println!("  Flora: {}/{}", stats.flora_count, stats.flora_target);
    }
    if stats.fauna_target > 0 {
        println!("  Fauna: {}/{}", stats.fauna_count, stats.fauna_target);
    }
    println!("  Species captured: {}", stats.species_captured.len());
}

fn print_progress(post: &ProgressPost) {
    let stats = &post.stats;
    println!("  Level: {}", post.user_level);
    println!(
        "  Experience: {} / {} XP ({} total)",
        stats.exp_into_level, stats.exp_cap, post.user_exp
    );
    println!(
        "  Quests: {}  Species: {}  Captures: {}",
        stats.quests_completed, stats.species_discovered, stats.total_captures
    );
}
