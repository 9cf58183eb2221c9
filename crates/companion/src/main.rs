//! Weather companion entry point.
//!
//! Wires the scheduler and the chat session together behind a small
//! stdin REPL: scheduled weather alerts print to the terminal, and
//! everything typed is either a slash command or a chat message.

mod commands;

use std::process::ExitCode;

use async_trait::async_trait;
use chat_session::ConversationSession;
use daily_notifier::{alert_now, DailyScheduler, Notification, NotificationSink, NotifierConfig};
use remote_chat::RemoteChatBackend;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::error;
use tracing_subscriber::EnvFilter;
use weather_client::OpenWeatherClient;

use crate::commands::{Command, USAGE};

/// Prints notifications to the terminal.
struct TerminalSink;

#[async_trait]
impl NotificationSink for TerminalSink {
    async fn notify(&self, notification: Notification) {
        println!("\n{}\n\n{}\n", notification.title, notification.body);
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match NotifierConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("configuration error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let provider = match OpenWeatherClient::from_env() {
        Ok(provider) => provider,
        Err(err) => {
            error!("configuration error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let backend = match RemoteChatBackend::from_env() {
        Ok(backend) => backend,
        Err(err) => {
            error!("configuration error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut scheduler = DailyScheduler::new(provider.clone(), TerminalSink, config.clone());
    scheduler.start();

    let mut session = ConversationSession::new(backend);

    println!(
        "Hi {}! I'll keep you posted on the weather in {}. Type /help for commands.",
        config.user_name, config.location
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                error!("failed to read input: {}", err);
                break;
            }
        };

        let Some(command) = Command::parse(&line) else {
            continue;
        };

        match command {
            Command::Chat(text) => {
                let reply = session.send(&text).await;
                println!("[{}] {}", reply.mood, reply.message);
            }
            Command::Weather => {
                match alert_now(&provider, &config.location, &config.user_name).await {
                    Ok(notification) => println!("\n{}\n\n{}\n", notification.title, notification.body),
                    Err(err) => println!("couldn't fetch the weather: {}", err),
                }
            }
            Command::History => {
                if session.history().is_empty() {
                    println!("(no conversation yet)");
                }
                for msg in session.history() {
                    println!("{:?}: {}", msg.role, msg.content);
                }
            }
            Command::Clear => {
                session.clear_history();
                println!("history cleared");
            }
            Command::Help => println!("{}", USAGE),
            Command::Quit => break,
        }
    }

    scheduler.stop();
    ExitCode::SUCCESS
}
