use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use recipe_board::{
    config::{Config, OutputFormat},
    controller::{Action, Controller, Outcome, ACTIONS},
    services::{HttpRecipeApi, RecipeApi},
    view::{HtmlRenderer, JsonRenderer, Renderer, TextRenderer},
};

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("recipe_board=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn renderer_for(format: OutputFormat) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Html => Box::new(HtmlRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

fn print_help() {
    println!("Commands:");
    for (name, description) in ACTIONS {
        println!("  {:<12} {}", name, description);
    }
    println!("  {:<12} exit", "quit");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env()?;
    tracing::info!(
        api_base_url = %config.api_base_url,
        page_size = config.search_page_size,
        diet_type = %config.diet_type,
        "Configuration loaded"
    );

    let api = HttpRecipeApi::from_config(&config).context("Failed to build HTTP client")?;

    match api.health().await {
        Ok(health) => tracing::info!(
            status = %health.status,
            total_recipes = health.total_recipes,
            chinese_recipes = health.chinese_recipes,
            mediterranean_recipes = health.mediterranean_recipes,
            "Recipe API reachable"
        ),
        Err(e) => tracing::warn!(error = %e, "Recipe API health probe failed"),
    }

    let renderer = renderer_for(config.output_format);
    let mut controller = Controller::from_config(Arc::new(api), &config);

    controller
        .start(chrono::Local::now().date_naive())
        .await;
    println!("{}", renderer.render(controller.surface())?);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                print_help();
                continue;
            }
            _ => {}
        }

        let action = match line.parse::<Action>() {
            Ok(action) => action,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match controller.dispatch(action).await {
            Outcome::Rendered => println!("{}", renderer.render(controller.surface())?),
            Outcome::Prompt(message) => println!("⚠️ {}", message),
            Outcome::Ignored => tracing::debug!("Action ignored"),
        }
    }

    Ok(())
}
