//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result, bail};
use shelf_client::{CatalogClient, EnvToken};
use shelf_query::ViewSnapshot;
use shelf_runtime::SearchHandle;
use tokio::io::{AsyncBufReadExt, BufReader};

use shelf_cli::input::{Command, HELP, InputError, parse_line};
use shelf_cli::render::{endpoints_table, render_snapshot, same_view};
use shelf_cli::settings::Settings;

use crate::cli::{BrowseArgs, ConfigAction};

/// Apply command-line overrides on top of the loaded settings.
pub fn apply_browse_args(mut settings: Settings, args: &BrowseArgs) -> Settings {
    if let Some(base_url) = &args.base_url {
        settings.catalog.base_url.clone_from(base_url);
    }
    if let Some(page_size) = args.page_size {
        settings.controller.page_size = page_size;
    }
    if let Some(debounce_ms) = args.debounce_ms {
        settings.controller.debounce_ms = debounce_ms;
    }
    if let Some(var) = &args.token_env {
        settings.catalog.token_env = Some(var.clone());
    }
    settings
}

pub async fn run_browse(settings: &Settings) -> Result<()> {
    let mut client =
        CatalogClient::new(&settings.catalog).context("failed to create catalog client")?;
    if let Some(var) = &settings.catalog.token_env {
        client = client.with_credentials(EnvToken::new(var));
    }
    tracing::info!(url = client.search_url(), "browsing catalog");

    let handle = SearchHandle::spawn(client, &settings.controller);
    let mut view = handle.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut shown: Option<ViewSnapshot> = None;

    println!("{HELP}");

    loop {
        tokio::select! {
            changed = view.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = view.borrow_and_update().clone();
                if !snapshot.loading && !same_view(shown.as_ref(), &snapshot) {
                    println!("{}", render_snapshot(&snapshot));
                    shown = Some(snapshot);
                }
            }
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    // Piped input ends right after its last command. Show
                    // where that command leads before shutting down.
                    let snapshot = handle.settled().await?;
                    if !same_view(shown.as_ref(), &snapshot) {
                        println!("{}", render_snapshot(&snapshot));
                    }
                    break;
                };
                match parse_line(&line) {
                    Ok(Command::Search(text)) => handle.search_input(text)?,
                    Ok(Command::Sort(field)) => handle.sort_click(field)?,
                    Ok(Command::Page(page)) => handle.page_click(page)?,
                    Ok(Command::Show) => println!("{}", render_snapshot(&handle.snapshot())),
                    Ok(Command::Help) => println!("{HELP}"),
                    Ok(Command::Quit) => break,
                    Err(InputError::Empty) => {}
                    Err(err) => eprintln!("{err}"),
                }
            }
        }
    }

    handle.shutdown().await?;
    Ok(())
}

pub fn run_endpoints() {
    println!("{}", endpoints_table());
}

pub fn run_config(action: &ConfigAction, path: &Path) -> Result<()> {
    match action {
        ConfigAction::Path => println!("{}", path.display()),
        ConfigAction::Show => print!("{}", Settings::load_from(path)?.to_toml()?),
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            Settings::default().save_to(path)?;
            println!("wrote {}", path.display());
        }
    }
    Ok(())
}
