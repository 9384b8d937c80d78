//! Traversal command handlers (BFS and DFS).

use std::io;

use anyhow::Result;

use bordergraph_cli::output::{render_json, render_traversal, OutputFormat};
use bordergraph_lib::{Query, QueryOutcome, Session, TraversalKind};

use super::Presentation;

/// Handle the bfs and dfs subcommands.
pub fn handle_traverse(
    session: &Session,
    from: &str,
    kind: TraversalKind,
    presentation: Presentation,
) -> Result<()> {
    let query = Query::traverse(from, kind);
    let QueryOutcome::Traversal(summary) = session.execute(&query)? else {
        anyhow::bail!("unexpected outcome for {query:?}");
    };

    let mut stdout = io::stdout().lock();
    match presentation.format {
        OutputFormat::Json => render_json(&mut stdout, &summary)?,
        OutputFormat::Text => render_traversal(&mut stdout, &summary, &presentation.palette)?,
    }
    Ok(())
}
