use ag_core::{clean_text, Error, PageLoader, Result};
use ag_inference::{ArticleGenerator, GroqModel};
use ag_loader::WebLoader;
use ag_web::{create_app, AppState};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "ag", about = "Generate articles from web pages with an LLM")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value_t = 5000)]
        port: u16,
    },
    /// Generate an article from a single URL and print it
    Generate {
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();

    // Fail fast: no point starting without provider credentials.
    let model = Arc::new(GroqModel::from_env()?);
    let loader = Arc::new(WebLoader::new());
    let generator = ArticleGenerator::new(model);

    match cli.command {
        Commands::Serve { host, port } => {
            let app = create_app(AppState::new(loader, generator)).await;
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            info!("Listening on {}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Generate { url } => {
            info!("Loading website content from {}", url);
            let pages = loader.load(&[url.clone()]).await?;
            let page = pages
                .into_iter()
                .next()
                .ok_or_else(|| Error::Loader("no content loaded from the webpage".to_string()))?;

            let cleaned = clean_text(&page.content);

            info!("Extracting website information");
            let article_info = generator
                .extract_website_info(&cleaned)
                .await
                .ok_or_else(|| {
                    Error::Inference("failed to extract website information".to_string())
                })?;

            info!("Generating article");
            let article = generator
                .generate_article(&article_info)
                .await
                .ok_or_else(|| Error::Inference("failed to generate article".to_string()))?;

            println!("{}", article);
        }
    }

    Ok(())
}
