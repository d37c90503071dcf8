mod config;
mod error;
mod output;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use hydrazine_core::{
    BuildPayload, Chart, ChartOptions, LoadoutBuild, MissionRequest, NameResolver, OfflineLibrary,
    Priority, RecommendationService, ShipCatalog, decode_build,
};
use hydrazine_openrouter::{GenerationParams, OpenRouterClient};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::{Config, load_config};
use crate::error::HydError;
use crate::output::{OutputFormat, render_chart, render_locations, render_ships};

#[derive(Parser)]
#[command(name = "hyd")]
#[command(about = "Ship loadout and shopping route planner for the Stanton system", long_about = None)]
struct Cli {
    /// Output format: text, json or yaml
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Topology JSON replacing the built-in Stanton map
    #[arg(long, global = true)]
    topology: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List ships, optionally filtered by name, manufacturer or focus
    Ships {
        query: Option<String>,
    },

    /// Search locations by name or id
    Locations {
        query: String,

        /// Maximum number of results
        #[arg(long, default_value = "8")]
        limit: usize,
    },

    /// Show which node each text resolves to
    Resolve {
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Lay out a saved build (JSON) on the map
    Chart {
        build: PathBuf,

        /// Curve samples per spline segment
        #[arg(long, default_value = "12")]
        samples: usize,
    },

    /// Request a build and lay it out on the map
    Recommend {
        /// What the ship should be good at
        #[arg(short, long)]
        intent: String,

        /// Ship to configure (any ship when omitted)
        #[arg(short, long)]
        ship: Option<String>,

        /// Where the route starts
        #[arg(long)]
        start: Option<String>,

        /// Route optimisation: shortest or cheapest
        #[arg(long, default_value = "shortest")]
        priority: Priority,

        /// Use the pre-generated build library instead of the online service
        #[arg(long)]
        offline: bool,

        /// Offline build library (JSON array of builds)
        #[arg(long)]
        library: Option<PathBuf>,

        /// Model to use
        #[arg(short, long)]
        model: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config();
    let topology = config.topology(cli.topology)?;

    let out = match cli.command {
        Command::Ships { query } => {
            let catalog = ShipCatalog::builtin();
            let ships = catalog.search(query.as_deref().unwrap_or(""));
            render_ships(&ships, cli.format)?
        }
        Command::Locations { query, limit } => {
            render_locations(&topology.search(&query, limit), cli.format)?
        }
        Command::Resolve { texts } => {
            let resolver = NameResolver::new(&topology);
            let mut out = String::new();
            for text in &texts {
                match resolver.resolve(text) {
                    Some(node) => out.push_str(&format!("{:?} -> {} ({})\n", text, node.id, node.name)),
                    None => out.push_str(&format!("{:?} -> not found\n", text)),
                }
            }
            out
        }
        Command::Chart { build, samples } => {
            let build = read_build(&build)?;
            let options = ChartOptions {
                samples_per_segment: samples,
                ..ChartOptions::default()
            };
            let chart = Chart::for_build(&topology, &build, options);
            render_chart(&chart, Some(&build), cli.format)?
        }
        Command::Recommend {
            intent,
            ship,
            start,
            priority,
            offline,
            library,
            model,
        } => {
            let request = MissionRequest {
                ship_name: ship,
                intent,
                start_location: config.start_location(start),
                priority,
            };

            let build = if offline || config.offline {
                let path = config.offline_library(library)?;
                let library = OfflineLibrary::load(&path)?;
                request_build(&library, &request).await?
            } else {
                let client = online_client(&config, model)?;
                request_build(&client, &request).await?
            };

            let chart = Chart::for_build(&topology, &build, ChartOptions::default());
            render_chart(&chart, Some(&build), cli.format)?
        }
    };

    print!("{}", out);
    Ok(())
}

fn online_client(config: &Config, model: Option<String>) -> Result<OpenRouterClient, HydError> {
    let client = match &config.base_url {
        // Local servers usually run without a key.
        Some(base_url) => OpenRouterClient::with_base_url(config.api_key().unwrap_or_default(), base_url),
        None => OpenRouterClient::new(config.api_key()?),
    };
    let client = client.params(GenerationParams::from(&config.generation));
    Ok(match model.or_else(|| config.model.clone()) {
        Some(model) => client.model(model),
        None => client,
    })
}

async fn request_build<S>(service: &S, request: &MissionRequest) -> Result<LoadoutBuild, HydError>
where
    S: RecommendationService,
    HydError: From<S::Error>,
{
    info!(intent = %request.intent, start = %request.start_location, priority = %request.priority, "requesting build");
    let build = service.recommend(request).await?;
    debug!(components = build.components.len(), stops = build.route.len(), "received build");
    Ok(build)
}

fn read_build(path: &Path) -> Result<LoadoutBuild, HydError> {
    let text = std::fs::read_to_string(path).map_err(|source| HydError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    match decode_build(&text) {
        BuildPayload::Decoded(build) => Ok(build),
        BuildPayload::Malformed { diagnostic } => Err(HydError::MalformedBuild {
            path: path.to_path_buf(),
            diagnostic,
        }),
    }
}
