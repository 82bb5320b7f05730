use anyhow::Context;
use botperms::config::Config;
use botperms::{ChatPermissions, TelegramObject};
use clap::ValueEnum;
use std::path::Path;
use teloxide::Bot;
use teloxide::requests::{Request, Requester};
use teloxide::types::{ChatId, ChatPermissions as TgPermissions};
use tokio::time::{Duration, timeout};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Every flag true
    All,
    /// Every flag false
    #[value(name = "none")]
    Restricted,
    /// Every flag absent
    #[value(name = "default")]
    Unset,
}

pub fn preset_permissions(preset: Preset) -> ChatPermissions {
    match preset {
        Preset::All => ChatPermissions::all_permissions(),
        Preset::Restricted => ChatPermissions::no_permissions(),
        Preset::Unset => ChatPermissions::default(),
    }
}

fn render(permissions: &ChatPermissions) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&permissions.to_dict()?)?)
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display())),
        _ => Ok(std::io::read_to_string(std::io::stdin())?),
    }
}

pub fn parse_permissions(input: &str) -> anyhow::Result<ChatPermissions> {
    let value: serde_json::Value = serde_json::from_str(input).context("Input is not JSON")?;
    let permissions = ChatPermissions::de_json(&value)?
        .context("Expected a ChatPermissions object, got null")?;

    if !permissions.api_kwargs().is_empty() {
        tracing::warn!(
            "Passing through unknown keys: {:?}",
            permissions.api_kwargs().keys().collect::<Vec<_>>()
        );
    }
    Ok(permissions)
}

/// `all` and `none` are presets; anything else is a JSON file path.
pub fn resolve_source(source: &str) -> anyhow::Result<ChatPermissions> {
    match source {
        "all" => Ok(ChatPermissions::all_permissions()),
        "none" => Ok(ChatPermissions::no_permissions()),
        path => parse_permissions(&read_input(Some(Path::new(path)))?),
    }
}

pub fn show(preset: Preset) -> anyhow::Result<()> {
    println!("{}", render(&preset_permissions(preset))?);
    Ok(())
}

pub fn parse(file: Option<&Path>) -> anyhow::Result<()> {
    let permissions = parse_permissions(&read_input(file)?)?;
    println!("{}", render(&permissions)?);
    Ok(())
}

pub async fn apply(config: &Config, chat_id: Option<i64>, source: &str) -> anyhow::Result<()> {
    let chat_id = chat_id
        .or(config.default_chat_id)
        .context("No --chat-id given and no default_chat_id configured")?;
    let permissions = resolve_source(source)?;
    let flags = TgPermissions::from(&permissions);

    if config.dry_run {
        tracing::info!("Dry run: would set permissions of chat {chat_id} to {flags:?}");
        println!("{}", render(&permissions)?);
        return Ok(());
    }

    let bot = Bot::new(&config.telegram_bot_token);
    timeout(
        Duration::from_secs(config.timeout_seconds),
        bot.set_chat_permissions(ChatId(chat_id), flags).send(),
    )
    .await
    .map_err(|_| anyhow::anyhow!("Request timed out after {}s", config.timeout_seconds))?
    .context("setChatPermissions failed")?;

    tracing::info!("Updated default permissions of chat {chat_id}");
    Ok(())
}
