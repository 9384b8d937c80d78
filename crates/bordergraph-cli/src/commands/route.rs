//! Route command handler for computing shortest paths between countries.

use std::io;

use anyhow::Result;

use bordergraph_cli::output::{render_json, render_route, OutputFormat};
use bordergraph_lib::{Query, QueryOutcome, Session};

use super::Presentation;

/// Handle the route subcommand.
///
/// Unknown names and disconnected pairs surface as library errors so the
/// process exits non-zero with the reason on stderr.
pub fn handle_route(
    session: &Session,
    from: &str,
    to: &str,
    presentation: Presentation,
) -> Result<()> {
    let query = Query::shortest_path(from, to);
    let QueryOutcome::Route(summary) = session.execute(&query)? else {
        anyhow::bail!("unexpected outcome for {query:?}");
    };

    let mut stdout = io::stdout().lock();
    match presentation.format {
        OutputFormat::Json => render_json(&mut stdout, &summary)?,
        OutputFormat::Text => render_route(&mut stdout, &summary, &presentation.palette)?,
    }
    Ok(())
}
