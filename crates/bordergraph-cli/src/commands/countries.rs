//! List and search command handlers.

use std::io;

use anyhow::Result;

use bordergraph_cli::output::{render_countries, render_json, OutputFormat};
use bordergraph_lib::{Country, Query, QueryOutcome, Session};

use super::Presentation;

/// Handle the list subcommand.
pub fn handle_list(session: &Session, presentation: Presentation) -> Result<()> {
    render(session, &Query::List, presentation)
}

/// Handle the search subcommand.
pub fn handle_search(session: &Session, needle: &str, presentation: Presentation) -> Result<()> {
    render(session, &Query::search(needle), presentation)
}

fn render(session: &Session, query: &Query, presentation: Presentation) -> Result<()> {
    let countries: Vec<Country> = match session.execute(query)? {
        QueryOutcome::Countries(countries) => countries,
        other => anyhow::bail!("unexpected outcome for {query:?}: {other:?}"),
    };

    let mut stdout = io::stdout().lock();
    match presentation.format {
        OutputFormat::Json => render_json(&mut stdout, &countries)?,
        OutputFormat::Text => render_countries(&mut stdout, &countries, &presentation.palette)?,
    }
    Ok(())
}
