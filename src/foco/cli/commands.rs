use super::render::{print_config, print_document_list, print_documents, print_messages};
use super::setup::{Cli, Commands, CoverCommands};
use clap::Parser;
use directories::ProjectDirs;
use foco::api::{ConfigAction, FocoApi, ListQuery};
use foco::config::FocoConfig;
use foco::error::{FocoError, Result};
use foco::store::fs::FileStore;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

const HOME_ENV: &str = "FOCO_HOME";

struct AppContext {
    api: FocoApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Create { name }) => handle_create(&mut ctx, &name.join(" ")),
        Some(Commands::List {
            sort,
            filter,
            favorites,
        }) => handle_list(
            &mut ctx,
            ListQuery {
                sort,
                filter,
                favorites_only: favorites,
                selected: Vec::new(),
            },
        ),
        Some(Commands::View { ids }) => handle_view(&mut ctx, &ids),
        Some(Commands::Save { id, file, minutes }) => {
            handle_save(&mut ctx, &id, file.as_deref(), minutes)
        }
        Some(Commands::Rename { id, name }) => handle_rename(&mut ctx, &id, &name.join(" ")),
        Some(Commands::Favorite { ids }) => handle_favorite(&mut ctx, &ids),
        Some(Commands::Cover { action }) => handle_cover(&mut ctx, action),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, &ids),
        Some(Commands::Import { paths }) => handle_import(&mut ctx, &paths),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_list(&mut ctx, ListQuery::default()),
    }
}

fn init_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .with_line_number(false);

    // a subscriber may already be set when embedded; keep the existing one
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn store_root(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.store {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("io.github", "nfdz", "foco")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| FocoError::Store("Could not determine a data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let root = store_root(cli)?;
    debug!(root = %root.display(), "using store");

    let config = FocoConfig::load(&root)?;
    let store = FileStore::new(root.clone());
    Ok(AppContext {
        api: FocoApi::new(store, root, config),
    })
}

fn handle_create(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.create_document(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, query: ListQuery) -> Result<()> {
    let result = ctx.api.list_documents(query)?;
    print_document_list(&result.listed_docs);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, ids: &[String]) -> Result<()> {
    let result = ctx.api.view_documents(ids)?;
    print_documents(&result.viewed_docs);
    print_messages(&result.messages);
    Ok(())
}

fn handle_save(ctx: &mut AppContext, id: &str, file: Option<&Path>, minutes: u64) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let worked = Duration::from_secs(minutes.saturating_mul(60));

    let result = ctx.api.save_document(id, text, worked)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_rename(ctx: &mut AppContext, id: &str, name: &str) -> Result<()> {
    let result = ctx.api.rename_document(id, name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_favorite(ctx: &mut AppContext, ids: &[String]) -> Result<()> {
    let result = ctx.api.toggle_favorite(ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_cover(ctx: &mut AppContext, action: CoverCommands) -> Result<()> {
    let result = match action {
        CoverCommands::Color { id, color } => ctx.api.set_cover_color(&id, &color)?,
        CoverCommands::Image { id, path } => ctx.api.set_cover_image(&id, &path)?,
        CoverCommands::Clear { id } => ctx.api.clear_cover(&id)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: &[String]) -> Result<()> {
    let result = ctx.api.delete_documents(ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, paths: &[PathBuf]) -> Result<()> {
    let result = ctx.api.import_documents(paths)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = action == ConfigAction::ShowAll;

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}
