// Terminal front end: menu file as argument, key from OPENAI_API_KEY,
// one question per line on stdin.

use anyhow::{Context, Result};
use menu_assistant::{AssistantConfig, InteractionShell, Notice, OpenAiService, QueryService};
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let menu_path = std::env::args()
        .nth(1)
        .context("usage: menu_assistant <menu.json>")?;

    let config = AssistantConfig::from_env()?;
    let completion_service = Arc::new(OpenAiService::new(&config));
    let mut shell = InteractionShell::new(QueryService::new(completion_service));

    println!("Restaurant AI Assistant");
    println!("Ask questions about dietary needs, substitutions, and more!\n");

    let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
    if let Some(notice) = shell.submit_credential(&api_key) {
        println!("{}", notice.to_markdown());
        return Ok(());
    }

    let notice = shell.load_menu_file(Path::new(&menu_path));
    println!("{}", notice.to_markdown());
    if !matches!(notice, Notice::Success(_)) {
        return Ok(());
    }

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        stdout.write_all(b"\nAsk a question about your menu: ").await?;
        stdout.flush().await?;

        let Some(question) = lines.next_line().await? else {
            break;
        };

        if question.trim().is_empty() {
            continue;
        }

        eprintln!("Thinking...");
        if let Some(notice) = shell.ask(&question).await {
            println!("{}", notice.to_markdown());
        }
    }

    Ok(())
}
