use clap::Parser;
use directories::ProjectDirs;
use flexi_logger::Logger;
use memoz::api::{CategoryFilter, ConfigAction, MemoApi};
use memoz::config::MemozConfig;
use memoz::error::{MemozError, Result};
use memoz::model::Category;
use memoz::store::fs::FileSlot;
use std::path::PathBuf;
use std::str::FromStr;

mod args;
mod print;

use args::{Cli, Commands};
use print::{print_board, print_messages};

fn main() {
    // Library warnings (unreadable slot, failed writes) go to stderr;
    // RUST_LOG overrides the level.
    let _logger = Logger::try_with_env_or_str("warn")
        .ok()
        .and_then(|logger| logger.start().ok());

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: MemoApi<FileSlot>,
    default_category: Category,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add { text, category }) => handle_add(&mut ctx, text, category),
        Some(Commands::List { search, category }) => handle_list(&ctx, search, category),
        Some(Commands::Edit { position, text }) => handle_edit(&mut ctx, position, text),
        Some(Commands::Delete { position }) => handle_delete(&mut ctx, position),
        Some(Commands::Move { from, to }) => handle_move(&mut ctx, from, to),
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None, None),
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = match std::env::var_os("MEMOZ_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "memoz", "memoz")
            .ok_or_else(|| MemozError::Store("Could not determine a data directory".to_string()))?
            .data_dir()
            .to_path_buf(),
    };

    let config = MemozConfig::load(&data_dir).unwrap_or_default();
    let slot = FileSlot::new(data_dir.clone());
    let mut api = MemoApi::new(slot, data_dir);
    api.hydrate();

    Ok(AppContext {
        api,
        default_category: config.default_category,
    })
}

fn handle_add(ctx: &mut AppContext, text: String, category: Option<String>) -> Result<()> {
    if text.trim().is_empty() {
        return Err(MemozError::Api("Memo text cannot be empty".into()));
    }

    let category = match category {
        Some(s) => Category::from_str(&s)?,
        None => ctx.default_category,
    };

    let result = ctx.api.add_memo(text, Some(category))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<String>, category: Option<String>) -> Result<()> {
    let filter = match category.as_deref() {
        Some(s) => CategoryFilter::from_str(s)?,
        None => CategoryFilter::All,
    };
    let filtered = search.is_some() || filter != CategoryFilter::All;

    let result = ctx.api.list_memos(search.as_deref(), filter)?;
    print_board(&result.listed_memos, filtered);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, position: usize, text: String) -> Result<()> {
    if text.trim().is_empty() {
        return Err(MemozError::Api("Memo text cannot be empty".into()));
    }

    let result = ctx.api.update_memo(position, text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, position: usize) -> Result<()> {
    let result = ctx.api.delete_memo(position)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_move(ctx: &mut AppContext, from: usize, to: usize) -> Result<()> {
    let result = ctx.api.move_memo(from, to)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.categories()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("default-category = {}", config.default_category);
    }
    print_messages(&result.messages);
    Ok(())
}
