//! lojas-view CLI
//!
//! Drives the view-sync controller against a lojas backend and prints the
//! regions it rendered:
//! - Load the start page (stores + history)
//! - Register stores, associate products, record sales
//! - Show a store's dashboard
//! - Check backend status

use clap::{Parser, Subcommand, ValueEnum};
use lojas_view::{
    AssociationForm, Config, LoggingConfig, LojasClient, MemorySurface, Region, SaleForm,
    StoreForm, ViewResult, ViewSyncController,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "lojas-view")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render store, dashboard and sales views from the lojas backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Markup of each rendered region
    Html,
    /// Full page state as JSON
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the start page: store list and sales history
    Load,

    /// Render the store list
    Stores,

    /// Render the sales history
    History {
        /// Only sales of this store
        #[arg(long)]
        loja_id: Option<String>,
    },

    /// Render a store's dashboard
    Dashboard {
        /// Store ID
        loja_id: String,
    },

    /// Register a store
    Register {
        #[arg(long)]
        nome: String,
        #[arg(long, default_value = "")]
        descricao: String,
        #[arg(long, default_value = "")]
        endereco: String,
        #[arg(long, default_value = "")]
        contato: String,
    },

    /// Associate a product with a store
    Associate {
        #[arg(long)]
        loja_id: String,
        #[arg(long)]
        produto_id: String,
        /// Stock quantity (default: 0)
        #[arg(long, default_value = "")]
        quantidade: String,
        /// Store price (default: 0)
        #[arg(long, default_value = "")]
        preco: String,
    },

    /// Record a sale
    Sale {
        #[arg(long)]
        loja_id: String,
        #[arg(long)]
        produto_id: String,
        /// Quantity (default: 1)
        #[arg(long, default_value = "")]
        quantidade: String,
        #[arg(long)]
        valor_total: String,
    },

    /// Render the product catalog
    Products,

    /// Show backend status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let content = lojas_view::config::generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)?;
                println!("Config written to {}", path.display());
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url.clone() {
        config.backend.base_url = url;
    }
    init_logging(&config.logging);

    tracing::info!("Using backend {}", config.backend.base_url);

    let backend = Arc::new(LojasClient::new(config.backend.clone())?);
    let page = Arc::new(MemorySurface::new());
    let controller = ViewSyncController::new(backend, page.clone(), config.banner.clone());

    let (outcome, regions): (ViewResult<()>, Vec<Region>) = match cli.command {
        Commands::Load => (
            controller.initial_load().await,
            vec![Region::StoreList, Region::History],
        ),
        Commands::Stores => (
            controller.list_stores().await.map(|_| ()),
            vec![Region::StoreList],
        ),
        Commands::History { loja_id } => (
            controller
                .refresh_history(loja_id.as_deref())
                .await
                .map(|_| ()),
            vec![Region::History],
        ),
        Commands::Dashboard { loja_id } => {
            let outcome = controller.load_dashboard(&loja_id).await;
            if let Ok(false) = outcome {
                tracing::info!("Store {} not found", loja_id);
            }
            (outcome.map(|_| ()), vec![Region::Dashboard])
        }
        Commands::Register {
            nome,
            descricao,
            endereco,
            contato,
        } => (
            controller
                .register_store(StoreForm::new(nome, descricao, endereco, contato))
                .await
                .map(|_| ()),
            vec![Region::StoreList],
        ),
        Commands::Associate {
            loja_id,
            produto_id,
            quantidade,
            preco,
        } => (
            controller
                .associate_product(
                    AssociationForm::new(loja_id, produto_id)
                        .stock(quantidade)
                        .price(preco),
                )
                .await
                .map(|_| ()),
            vec![Region::AssociationMessage],
        ),
        Commands::Sale {
            loja_id,
            produto_id,
            quantidade,
            valor_total,
        } => (
            controller
                .record_sale(SaleForm::new(loja_id, produto_id, quantidade, valor_total))
                .await
                .map(|_| ()),
            vec![Region::SaleMessage, Region::History],
        ),
        Commands::Products => (
            controller.list_products().await.map(|_| ()),
            vec![Region::ProductList],
        ),
        Commands::Status => {
            let status = controller.check_status().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&status)?),
                OutputFormat::Html => {
                    println!("Status:   {}", status.status);
                    println!("Database: {}", status.database);
                    if let Some(timestamp) = &status.timestamp {
                        println!("Time:     {}", timestamp);
                    }
                }
            }
            return Ok(());
        }
        Commands::Config { .. } => return Ok(()),
    };

    match cli.format {
        OutputFormat::Html => {
            for region in regions {
                println!("<!-- #{} -->", region.dom_id());
                println!("{}", page.html(region));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&page.snapshot())?),
    }

    if let Err(e) = outcome {
        eprintln!("Failed: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lojas_view={}", logging.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
