mod print;

use crate::args::{Cli, Commands};
use chrono::{Local, NaiveDateTime};
use directories::ProjectDirs;
use photoz::api::{parse_datetime, ConfigAction, NewPhoto, PhotozApi, PhotozPaths};
use photoz::config::PhotozConfig;
use photoz::error::{PhotozError, Result};
use photoz::store::fs::FsBackend;
use print::{print_full_photos, print_messages, print_photos};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: PhotozApi<FsBackend>,
    now: NaiveDateTime,
}

/// Route `tracing` output to stderr. `--verbose` forces debug level for this
/// crate, otherwise `RUST_LOG` decides and the default is warnings only.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("photoz=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            album,
            photo,
            title,
            url,
            date,
        }) => handle_add(&mut ctx, album, photo, title, url, date),
        Some(Commands::Remove { album, photo }) => handle_remove(&mut ctx, album, photo),
        Some(Commands::Update {
            album,
            photo,
            url,
            clear,
        }) => handle_update(&mut ctx, album, photo, if clear { None } else { url }),
        Some(Commands::Get { album, photo }) => handle_get(&ctx, album, photo),
        Some(Commands::Album { album }) => handle_album(&ctx, album),
        Some(Commands::Between { from, to }) => handle_between(&ctx, &from, &to),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::List) | None => handle_list(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    debug!(data_dir = %data_dir.display(), "using data directory");

    let config = PhotozConfig::load(&data_dir)?;
    let backend = FsBackend::new(data_dir.clone());
    let api = PhotozApi::new(backend, PhotozPaths { data_dir }, config);

    Ok(AppContext {
        api,
        now: Local::now().naive_local(),
    })
}

fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "photoz", "photoz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PhotozError::Api("Could not determine data directory".into()))
}

fn handle_add(
    ctx: &mut AppContext,
    album: i32,
    photo: i32,
    title: Option<String>,
    url: Option<String>,
    date: Option<String>,
) -> Result<()> {
    let date = match date {
        Some(raw) => parse_datetime(&raw)?,
        None => ctx.now,
    };
    let mut new_photo = NewPhoto::new(album, photo, date);
    new_photo.title = title;
    new_photo.url = url;

    let result = ctx.api.add_photo(new_photo)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, album: i32, photo: i32) -> Result<()> {
    let result = ctx.api.remove_photo(album, photo)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    ctx: &mut AppContext,
    album: i32,
    photo: i32,
    url: Option<String>,
) -> Result<()> {
    let result = ctx.api.update_photo(album, photo, url)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_get(ctx: &AppContext, album: i32, photo: i32) -> Result<()> {
    let result = ctx.api.get_photo(album, photo)?;
    print_full_photos(&result.listed_photos, ctx.now);
    print_messages(&result.messages);
    Ok(())
}

fn handle_album(ctx: &AppContext, album: i32) -> Result<()> {
    let result = ctx.api.album_photos(album)?;
    print_photos(&result.listed_photos, ctx.now);
    print_messages(&result.messages);
    Ok(())
}

fn handle_between(ctx: &AppContext, from: &str, to: &str) -> Result<()> {
    let result = ctx.api.photos_between(from, to)?;
    print_photos(&result.listed_photos, ctx.now);
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_photos()?;
    print_photos(&result.listed_photos, ctx.now);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        for key in PhotozConfig::KEYS {
            if let Some(value) = config.get(key) {
                println!("{} = {}", key, value);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
