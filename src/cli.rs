use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tokio::sync::RwLock;

use crate::{
    config::Config,
    error::ClientError,
    page::{Page, RenderOutcome, TerminalRefresher, UiEvent},
    services::{HttpRecommendationApi, RecommendationClient},
};

/// Command-line arguments for bandrec
#[derive(Parser, Debug)]
#[command(name = "bandrec")]
#[command(about = "Band similarity and user recommendation client")]
#[command(version)]
pub struct Cli {
    /// Base URL of the recommendation API (overrides API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load the band catalog and show both pickers
    Bands,
    /// Show bands similar to BAND
    Similar { band: String },
    /// Show recommendations for the user id typed as INPUT
    User {
        input: String,
        /// Number of recommendations to request from the service
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Register a new user who likes every BAND given
    Register {
        #[arg(required = true)]
        bands: Vec<String>,
    },
    /// Show how many users the service knows
    Users,
}

/// Runs one command against the configured service and prints the page
pub async fn run(cli: Cli, config: Config) -> Result<()> {
    let config = match cli.api_url {
        Some(api_url) => config.with_api_url(api_url),
        None => config,
    };
    tracing::info!(api_url = %config.api_url, "Using recommendation API");

    let api = HttpRecommendationApi::new(&config).context("Failed to create API client")?;
    let page = Arc::new(RwLock::new(Page::new()));
    let client = RecommendationClient::new(
        Arc::new(api),
        Arc::new(TerminalRefresher::new()),
        Arc::clone(&page),
    );

    let outcome = match cli.command {
        Command::Bands => client.dispatch(UiEvent::PageReady).await,
        Command::Similar { band } => {
            load_page(&client).await?;
            if !page.write().await.band_select.select(&band) {
                bail!("{} is not in the band catalog", band);
            }
            client.dispatch(UiEvent::FindSimilarClicked).await
        }
        Command::User { input, limit } => {
            client
                .dispatch(UiEvent::RecommendFormSubmitted {
                    raw_input: input,
                    limit,
                })
                .await
        }
        Command::Register { bands } => {
            load_page(&client).await?;
            {
                let mut page = page.write().await;
                for band in &bands {
                    if !page.likes_select.select(band) {
                        bail!("{} is not in the band catalog", band);
                    }
                }
            }
            client.dispatch(UiEvent::RegisterClicked).await
        }
        Command::Users => {
            let count = client.user_count().await?;
            println!("Users: {}", count);
            return Ok(());
        }
    };

    print!("{}", page.read().await);
    finish(outcome.result)
}

async fn load_page(client: &RecommendationClient) -> Result<()> {
    client
        .dispatch(UiEvent::PageReady)
        .await
        .result
        .context("Failed to load the band catalog")?;
    Ok(())
}

/// Service-reported errors were already logged and leave the page as it was
fn finish(result: Result<RenderOutcome, ClientError>) -> Result<()> {
    match result {
        Ok(_) | Err(ClientError::Api(_)) => Ok(()),
        Err(e) => Err(e.into()),
    }
}
