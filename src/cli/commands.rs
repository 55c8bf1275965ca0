//! Command handlers. Each one drives the state layer held by an [`App`] and
//! writes plain-text output to `out`.

use std::io::Write;

use color_eyre::Result;

use super::args::CliCommand;
use crate::app::App;
use crate::models::{dex_number, display_name, Entry, ListEntry};
use crate::state::FetchOutcome;
use crate::theme::{DetailsStyles, HeaderStyles, StyleCache};

/// Run a state-backed command. `Version` and `Help` are answered by the
/// caller and are no-ops here.
pub async fn run_command<W: Write>(app: &App, command: CliCommand, out: &mut W) -> Result<()> {
    match command {
        CliCommand::List { pages } => list(app, pages, out).await,
        CliCommand::Show { query } => show(app, &query, out).await,
        CliCommand::FavAdd { query } => fav_add(app, &query, out).await,
        CliCommand::FavRemove { id } => fav_remove(app, id, out),
        CliCommand::FavList => fav_list(app, out),
        CliCommand::Theme { toggle } => theme(app, toggle, out),
        CliCommand::Version | CliCommand::Help => Ok(()),
    }
}

async fn list<W: Write>(app: &App, pages: u32, out: &mut W) -> Result<()> {
    let cache = app.list_cache();
    for _ in 0..pages {
        if cache.fetch_next().await? == FetchOutcome::Exhausted {
            break;
        }
    }
    let state = cache.state();
    for item in &state.items {
        let favorite = item.id().is_some_and(|id| app.favorites.is_favorite(id));
        writeln!(out, "{}", list_line(item, favorite))?;
    }
    if state.is_exhausted() {
        writeln!(out, "-- end of catalogue --")?;
    }
    Ok(())
}

fn list_line(item: &ListEntry, favorite: bool) -> String {
    let number = item.id().map(dex_number).unwrap_or_else(|| "#???".to_string());
    let star = if favorite { " *" } else { "" };
    format!("{:>5}  {}{}", number, display_name(&item.name), star)
}

async fn show<W: Write>(app: &App, query: &str, out: &mut W) -> Result<()> {
    let entry = app.details().fetch_details(query).await?;
    let mut styles: StyleCache<DetailsStyles> = StyleCache::new();
    let styles = styles.current(&app.theme);
    let favorite = app.favorites.is_favorite(entry.id);

    writeln!(out, "{}", heading(&entry, favorite))?;
    writeln!(out, "types:     {}", entry.types.join(", "))?;
    writeln!(out, "abilities: {}", entry.ability_names.join(", "))?;
    if let Some(uri) = &entry.image_uri {
        writeln!(out, "artwork:   {}", uri)?;
    }
    writeln!(
        out,
        "color:     {}",
        styles.screen_for_type(entry.primary_type()).background
    )?;
    Ok(())
}

fn heading(entry: &Entry, favorite: bool) -> String {
    let star = if favorite { " *" } else { "" };
    format!("{} {}{}", dex_number(entry.id), display_name(&entry.name), star)
}

async fn fav_add<W: Write>(app: &App, query: &str, out: &mut W) -> Result<()> {
    let entry = app.details().fetch_details(query).await?;
    let existed = app.favorites.is_favorite(entry.id);
    let label = heading(&entry, false);
    app.favorites.add(entry);
    if existed {
        writeln!(out, "updated {}", label)?;
    } else {
        writeln!(out, "added {}", label)?;
    }
    Ok(())
}

fn fav_remove<W: Write>(app: &App, id: u32, out: &mut W) -> Result<()> {
    if !app.favorites.is_favorite(id) {
        writeln!(out, "{} is not a favorite", dex_number(id))?;
        return Ok(());
    }
    app.favorites.remove(id);
    writeln!(out, "removed {}", dex_number(id))?;
    Ok(())
}

fn fav_list<W: Write>(app: &App, out: &mut W) -> Result<()> {
    let entries = app.favorites.entries();
    if entries.is_empty() {
        writeln!(out, "No favorites yet.")?;
        return Ok(());
    }
    for entry in &entries {
        writeln!(
            out,
            "{:>5}  {}  [{}]",
            dex_number(entry.id),
            display_name(&entry.name),
            entry.types.join(", ")
        )?;
    }
    Ok(())
}

/// Theme choice lives for the process only; nothing is persisted.
fn theme<W: Write>(app: &App, toggle: bool, out: &mut W) -> Result<()> {
    if toggle {
        app.theme.toggle();
    }
    let tokens = app.theme.tokens();
    let mut header: StyleCache<HeaderStyles> = StyleCache::new();
    let header = header.current(&app.theme);
    writeln!(out, "theme:      {}", app.theme.mode())?;
    writeln!(out, "background: {}", tokens.background)?;
    writeln!(out, "text:       {}", tokens.text)?;
    writeln!(out, "primary:    {}", tokens.primary)?;
    writeln!(out, "header:     {}", header.bar.background)?;
    Ok(())
}
