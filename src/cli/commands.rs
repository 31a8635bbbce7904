use crate::app::{load_app, AppHandle};
use crate::config::{DiagramConfig, DEFAULT_WEB_ROUTE};
use crate::diagram::print_routes;
use crate::extract::extract_routes;
use crate::filter::{filter_routes, FilterPattern};
use crate::server::{DiagramService, HttpServer};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

/// Command-line interface for routescope.
#[derive(Parser)]
#[command(name = "routescope")]
#[command(about = "Extract and visualize an application's routes", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the routes of an application snapshot
    Print {
        /// Path to the routing snapshot (JSON) exported by the application
        #[arg(short, long)]
        app: PathBuf,

        /// Save the text diagram to this file instead of printing to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep ANSI color codes in the saved diagram file
        #[arg(long, default_value_t = false)]
        color_file: bool,

        /// Flat `[METHODS] /path` listing instead of the hierarchical tree
        #[arg(long, default_value_t = false)]
        flat: bool,

        /// Exclusion patterns: plain substrings, or `/regex/` forms
        #[arg(short = 'x', long = "exclude")]
        exclude: Vec<String>,
    },
    /// Serve the interactive route diagram over HTTP
    Serve {
        /// Path to the routing snapshot (JSON) exported by the application
        #[arg(short, long)]
        app: PathBuf,

        /// Address and port to bind the server to
        #[arg(long, default_value = "0.0.0.0:3000")]
        addr: String,

        /// Web path for the visualization (leading slash optional)
        #[arg(long, default_value = DEFAULT_WEB_ROUTE)]
        route: String,

        /// Exclusion patterns: plain substrings, or `/regex/` forms
        #[arg(short = 'x', long = "exclude")]
        exclude: Vec<String>,
    },
}

/// Execute the CLI command provided by the user.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded, an exclusion pattern is
/// invalid, or the server fails to start. Extraction itself never fails; an
/// unrecognizable snapshot prints an empty diagram.
pub fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Print {
            app,
            output,
            color_file,
            flat,
            exclude,
        } => {
            let app = load_app(app)?;
            let config = DiagramConfig {
                log_to_console: output.is_none(),
                output_file: output.clone(),
                exclude_patterns: parse_patterns(exclude)?,
                hierarchical: !*flat,
                color_output: *color_file,
                ..DiagramConfig::default()
            };

            let routes = extract_routes(&AppHandle::Ready(app));
            let routes = filter_routes(&routes, &config.exclude_patterns);
            print_routes(&routes, &config);
            if let Some(path) = output {
                println!("Routes diagram saved to: {}", path.display());
            }
            Ok(())
        }
        Commands::Serve {
            app,
            addr,
            route,
            exclude,
        } => {
            let app = load_app(app)?;
            let config = DiagramConfig {
                exclude_patterns: parse_patterns(exclude)?,
                web_route: route.clone(),
                ..DiagramConfig::default()
            };

            let mut service = DiagramService::new(AppHandle::Ready(app), config);
            service.announce();
            let handle = HttpServer(service).start(addr)?;
            handle.join().map_err(|e| {
                Box::<dyn std::error::Error>::from(io::Error::other(format!("{e:?}")))
            })?;
            Ok(())
        }
    }
}

fn parse_patterns(raw: &[String]) -> anyhow::Result<Vec<FilterPattern>> {
    raw.iter().map(|s| FilterPattern::parse(s)).collect()
}
