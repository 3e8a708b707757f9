use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use compute_modeller::app::App;
use compute_modeller::config::Config;
use compute_modeller::wizard::WizardStep;
use compute_modeller::{breadcrumb, logging, routes, web};

#[derive(Parser)]
#[command(name = "compute-modeller")]
#[command(about = "Guided AI compute sizing: wizard, breadcrumbs and proposal builder")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the terminal wizard (default)
    Tui,

    /// Start the web server
    Serve {
        /// Port to listen on (overrides server.port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the wizard step sequence
    Steps,

    /// Print the breadcrumb trail for a route
    Trail {
        /// Route path, e.g. /summary
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let config = Config::load(cli.config.as_deref())?;

    let is_tui_mode = matches!(cli.command, None | Some(Commands::Tui));

    // Initialize logging (file-based for TUI, stderr otherwise)
    let logging_handle = logging::init_logging(&config, is_tui_mode, cli.debug)?;

    match cli.command {
        Some(Commands::Serve { port }) => {
            cmd_serve(config, port).await?;
        }
        Some(Commands::Steps) => {
            cmd_steps();
        }
        Some(Commands::Trail { path }) => {
            cmd_trail(&path)?;
        }
        Some(Commands::Tui) | None => {
            run_tui(config, logging_handle.log_file_path)?;
        }
    }

    Ok(())
}

fn run_tui(config: Config, log_file_path: Option<PathBuf>) -> Result<()> {
    let mut app = App::new(config);
    let result = app.run();

    // Print log file path on exit if logs were written
    if let Some(log_path) = log_file_path {
        if let Ok(metadata) = log_path.metadata() {
            if metadata.len() > 0 {
                eprintln!("Session log: {}", log_path.display());
            }
        }
    }

    result
}

async fn cmd_serve(config: Config, port: Option<u16>) -> Result<()> {
    let host = config.server.host.clone();
    let port = port.unwrap_or(config.server.port);

    println!("Starting Compute Modeller...");
    println!("  Site:    http://{host}:{port}/");
    println!("  API:     http://{host}:{port}/api/v1");
    println!("  OpenAPI: http://{host}:{port}/api-docs/openapi.json");
    println!();

    let state = web::AppState::new(config)?;
    web::serve(state, &host, port).await
}

fn cmd_steps() {
    println!("Wizard steps");
    println!("{}", "─".repeat(60));
    for step in WizardStep::ALL {
        println!(
            "{}. {:<20} {:<22} {}",
            step.ordinal(),
            step.label(),
            step.route(),
            step.description()
        );
    }
}

fn cmd_trail(path: &str) -> Result<()> {
    let trail = routes::breadcrumbs_for(path)?;
    println!("{}", breadcrumb::render_text(&trail));
    Ok(())
}
