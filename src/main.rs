use clap::{Parser, Subcommand};
use shopper_docs::layout::Viewport;
use shopper_docs::{config, content, generate, output};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "shopper-docs")]
#[command(about = "Documentation and component preview site generator")]
#[command(long_about = "\
Documentation and component preview site generator

Markdown files with YAML front matter become pages. Numbered files inside a
directory form a lesson sequence; video pages link to the next published
lesson, or to /screencasts/coming-soon when there is none.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── index.md                     # → /
  ├── 010-getting-started/
  │   ├── 010-installation.md      # → /getting-started/installation
  │   └── 020-configuration.md
  └── 020-screencasts/
      ├── 010-introduction.md      # layout: video, vimeoId: '...'
      └── 020-products.md

Fenced ```preview blocks hold TOML props and render a component inline.

Run 'shopper-docs gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate the content directory without building
    Check {
        /// Print the scan manifest as JSON instead of the inventory
        #[arg(long)]
        json: bool,
    },
    /// Render a single route to stdout
    Render {
        /// Route to render, e.g. /screencasts/introduction
        href: String,
        /// Viewport width in pixels; below the sidebar breakpoint the sidebar is omitted
        #[arg(long)]
        width: Option<u32>,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = content::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            init_thread_pool(&manifest.config.processing);
            let summary = generate::generate(&manifest, &cli.output)?;
            output::print_generate_output(&summary);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check { json } => {
            let manifest = content::scan(&cli.source)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&manifest)?);
            } else {
                println!("==> Checking {}", cli.source.display());
                output::print_scan_output(&manifest, &cli.source);
                println!("==> Content is valid");
            }
        }
        Command::Render { href, width } => {
            let manifest = content::scan(&cli.source)?;
            let viewport = width
                .map(|w| Viewport::from_width(w, manifest.config.layout.sidebar_breakpoint))
                .unwrap_or_default();
            print!("{}", generate::render_route(&manifest, &href, viewport)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
