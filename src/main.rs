use clap::{Parser, Subcommand};
use payments_map::{config, data, render, server};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the payment systems map
    Generate {
        #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
        config: PathBuf,
    },
    /// Serve the generated map and the country lookup API
    Serve {
        #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate { config } => {
            let app_config = config::AppConfig::load_or_default(config)?;

            println!("Processing DPI payment systems data...");
            if app_config.input.filter_active_implemented {
                println!("Filtering: Active real-time payment systems that are implemented\n");
            }

            let groups = data::load_payment_data(&app_config)?;
            render::generate_map(&app_config, &groups)?;

            println!("\nGenerated interactive map with 8 toggleable layers");
        }
        Commands::Serve { config } => {
            let app_config = config::AppConfig::load_or_default(config)?;

            println!("Loading data for API...");
            let groups = data::load_payment_data(&app_config)?;

            server::start_server(app_config, groups).await?;
        }
    }

    Ok(())
}
