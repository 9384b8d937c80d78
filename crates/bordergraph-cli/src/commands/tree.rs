//! Spanning tree command handler.

use std::io;

use anyhow::Result;

use bordergraph_cli::output::{render_json, render_spanning_tree, OutputFormat};
use bordergraph_lib::{Query, QueryOutcome, Session};

use super::Presentation;

/// Handle the mst subcommand.
pub fn handle_tree(session: &Session, from: &str, presentation: Presentation) -> Result<()> {
    let query = Query::spanning_tree(from);
    let QueryOutcome::SpanningTree(summary) = session.execute(&query)? else {
        anyhow::bail!("unexpected outcome for {query:?}");
    };

    let mut stdout = io::stdout().lock();
    let palette = &presentation.palette;
    match presentation.format {
        OutputFormat::Json => render_json(&mut stdout, &summary)?,
        OutputFormat::Text => render_spanning_tree(&mut stdout, &summary, palette)?,
    }
    Ok(())
}
