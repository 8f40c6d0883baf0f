use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;

use zegju_bot::core::{init_logger, install_panic_hook, Config};
use zegju_bot::registration::RegistrationController;
use zegju_bot::storage::InMemorySessionStore;
use zegju_bot::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps, TeloxideMessenger};

/// Main entry point for the Telegram bot
///
/// # Errors
/// Returns an error if initialization fails (logging, configuration, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present
    let _ = dotenv();

    install_panic_hook();
    init_logger(&Config::log_file_path_from_env())?;

    let config = Config::from_env()?;
    run_bot(config).await
}

async fn run_bot(config: Config) -> Result<()> {
    log::info!("Starting registration bot...");

    let bot = create_bot(&config)?;

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }

    if config.admin_ids.is_empty() {
        log::warn!("ADMIN_IDS is empty, submissions will not be forwarded to anyone");
    } else {
        log::info!("Forwarding submissions to {} admin(s)", config.admin_ids.len());
    }

    let controller = RegistrationController::new(
        config.admin_ids.clone(),
        Arc::new(TeloxideMessenger::new(bot.clone())),
        Arc::new(InMemorySessionStore::new()),
    );
    let deps = HandlerDeps::new(Arc::new(controller));

    // Drop updates that piled up while the bot was offline
    let listener = Polling::builder(bot.clone()).drop_pending_updates().build();

    Dispatcher::builder(bot, schema(deps))
        .enable_ctrlc_handler()
        .error_handler(LoggingErrorHandler::with_custom_text("An error has occurred in the dispatcher"))
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}
