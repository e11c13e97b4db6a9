use buildbook::{command::CommandHandler, config::Config, model::app::AppState, startup};
use dioxus_logger::tracing;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    task::JoinSet,
};

/// Splits an input line of the form `<author>: <message>`.
fn split_line(line: &str) -> Option<(&str, &str)> {
    let (author, message) = line.split_once(':')?;
    let author = author.trim();
    if author.is_empty() {
        return None;
    }

    Some((author, message.trim()))
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let catalog = match startup::load_catalog(&config) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to load item catalog: {}", e);
            std::process::exit(1);
        }
    };
    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    let handler = CommandHandler::new(AppState::new(db, catalog, config.storage_timeout));

    tracing::info!("Reading commands from stdin");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut tasks = JoinSet::new();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let Some((author, message)) = split_line(&line) else {
                    tracing::debug!("Skipping line without author: {:?}", line);
                    continue;
                };
                let author = author.to_string();
                let message = message.to_string();
                let handler = handler.clone();

                tasks.spawn(async move {
                    if let Some(reply) = handler.handle(&author, &message).await {
                        println!("{}", reply);
                    }
                });
            }
            Ok(None) => break,
            Err(e) => {
                tracing::error!("Failed to read from stdin: {}", e);
                break;
            }
        }

        while let Some(result) = tasks.try_join_next() {
            if let Err(e) = result {
                tracing::error!("Command task failed: {}", e);
            }
        }
    }

    while let Some(result) = tasks.join_next().await {
        if let Err(e) = result {
            tracing::error!("Command task failed: {}", e);
        }
    }
}
