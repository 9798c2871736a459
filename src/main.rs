//! CLI entry point for blogs-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blogs-rs")]
#[command(version)]
#[command(about = "A personal blog front-end rendered to static HTML", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new blog
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Slug (defaults to the slugified title)
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Start a local server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Serve without watching for changes
        #[arg(long)]
        r#static: bool,
    },

    /// Remove the generated output
    Clean,

    /// List posts in display order
    List {
        /// Print the post records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blogs_rs=debug,info"
    } else {
        "blogs_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing blog in {:?}", target_dir);
            blogs_rs::commands::init::init_site(&target_dir)?;
            println!("Initialized blog in {:?}", target_dir);
        }

        Commands::New { title, slug } => {
            let blog = blogs_rs::Blog::new(&base_dir)?;
            let path = blog.new_post(&title, slug.as_deref())?;
            println!("Created: {:?}", path);
        }

        Commands::Generate { watch } => {
            let blog = blogs_rs::Blog::new(&base_dir)?;
            tracing::info!("Generating static files...");

            blog.generate()?;
            println!("Generated successfully!");

            if watch {
                tokio::task::spawn_blocking(move || blogs_rs::commands::generate::watch(&blog))
                    .await??;
            }
        }

        Commands::Server { port, ip, r#static } => {
            let blog = blogs_rs::Blog::new(&base_dir)?;

            // Generate first
            tracing::info!("Generating static files...");
            blog.generate()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            blogs_rs::server::start(&blog, &ip, port, !r#static).await?;
        }

        Commands::Clean => {
            let blog = blogs_rs::Blog::new(&base_dir)?;
            tracing::info!("Cleaning output folder...");
            blog.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { json } => {
            let blog = blogs_rs::Blog::new(&base_dir)?;
            blogs_rs::commands::list::run(&blog, json)?;
        }

        Commands::Version => {
            println!("blogs-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
