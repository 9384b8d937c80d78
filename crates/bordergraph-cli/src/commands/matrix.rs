//! Adjacency matrix preview command handler.

use std::io;

use anyhow::Result;
use serde::Serialize;

use bordergraph_cli::output::{render_json, render_matrix, OutputFormat};
use bordergraph_lib::{Session, Weight, NO_EDGE};

use super::Presentation;

/// Default number of rows printed by the matrix command.
pub const DEFAULT_ROWS: usize = 10;

#[derive(Debug, Serialize)]
struct MatrixRow<'a> {
    name: &'a str,
    /// `None` where there is no edge.
    weights: Vec<Option<Weight>>,
}

/// Handle the matrix subcommand.
pub fn handle_matrix(session: &Session, rows: usize, presentation: Presentation) -> Result<()> {
    let graph = session.graph();
    let atlas = session.atlas();

    let mut stdout = io::stdout().lock();
    match presentation.format {
        OutputFormat::Text => render_matrix(&mut stdout, atlas, graph, rows)?,
        OutputFormat::Json => {
            let matrix: Vec<MatrixRow<'_>> = (0..rows.min(graph.node_count()))
                .filter_map(|id| {
                    let row = graph.row(id)?;
                    Some(MatrixRow {
                        name: atlas.country_name(id).unwrap_or("<unknown>"),
                        weights: row
                            .iter()
                            .map(|&weight| (weight != NO_EDGE).then_some(weight))
                            .collect(),
                    })
                })
                .collect();
            render_json(&mut stdout, &matrix)?;
        }
    }
    Ok(())
}
