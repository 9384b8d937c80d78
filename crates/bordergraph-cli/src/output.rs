//! Output formatting for query results.
//!
//! Text renderers write to any [`Write`] so they can be exercised in tests;
//! the command handlers pass a locked stdout.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use bordergraph_lib::{
    Atlas, Country, DrainOrder, Graph, RankKey, RouteSummary, SpanningTreeSummary,
    TraversalSummary, NO_EDGE,
};

use crate::terminal::{format_with_separators, ColorPalette};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// A drained ranking, ready for display or serialization.
#[derive(Debug, Clone, Serialize)]
pub struct RankingOutput {
    pub key: RankKey,
    pub order: DrainOrder,
    pub countries: Vec<Country>,
}

/// Render any serializable value as pretty JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}

/// One line per country with code, population and area.
pub fn render_countries<W: Write>(
    out: &mut W,
    countries: &[Country],
    palette: &ColorPalette,
) -> io::Result<()> {
    if countries.is_empty() {
        return writeln!(out, "No countries found.");
    }
    for country in countries {
        render_country_line(out, country, palette)?;
    }
    Ok(())
}

fn render_country_line<W: Write>(
    out: &mut W,
    country: &Country,
    palette: &ColorPalette,
) -> io::Result<()> {
    writeln!(
        out,
        "{gray}{id:>4}{reset}  {code:<3} {bold}{name}{reset}  population {population}  area {area} km2",
        id = country.id,
        code = country.code,
        name = country.name,
        population = format_with_separators(country.population),
        area = format_with_separators(country.area),
        gray = palette.gray,
        bold = palette.white_bold,
        reset = palette.reset,
    )
}

/// Numbered visitation order.
pub fn render_traversal<W: Write>(
    out: &mut W,
    summary: &TraversalSummary,
    palette: &ColorPalette,
) -> io::Result<()> {
    writeln!(
        out,
        "{cyan}{kind} from {name}{reset} ({count} countries):",
        kind = summary.kind.to_string().to_uppercase(),
        name = summary.start.name,
        count = summary.countries.len(),
        cyan = palette.cyan,
        reset = palette.reset,
    )?;
    for (index, country) in summary.countries.iter().enumerate() {
        writeln!(out, "{:>4}. {}", index + 1, country.name)?;
    }
    Ok(())
}

/// Route with per-leg distances and the total.
pub fn render_route<W: Write>(
    out: &mut W,
    summary: &RouteSummary,
    palette: &ColorPalette,
) -> io::Result<()> {
    writeln!(
        out,
        "{cyan}Route from {} to {}{reset} ({} hops):",
        summary.start.name,
        summary.goal.name,
        summary.hops,
        cyan = palette.cyan,
        reset = palette.reset,
    )?;
    for step in &summary.steps {
        match step.leg_km {
            Some(leg) => writeln!(
                out,
                " - {bold}{}{reset} {green}(+{} km){reset}",
                step.name,
                format_with_separators(u64::from(leg)),
                bold = palette.white_bold,
                green = palette.green,
                reset = palette.reset,
            )?,
            None => writeln!(
                out,
                " - {bold}{}{reset}",
                step.name,
                bold = palette.white_bold,
                reset = palette.reset,
            )?,
        }
    }
    writeln!(
        out,
        "\nTotal distance: {} km",
        format_with_separators(summary.distance_km)
    )
}

/// Spanning tree walk, its edges and total weight.
pub fn render_spanning_tree<W: Write>(
    out: &mut W,
    summary: &SpanningTreeSummary,
    palette: &ColorPalette,
) -> io::Result<()> {
    writeln!(
        out,
        "{cyan}Spanning tree from {}{reset} ({} countries, {} edges):",
        summary.root.name,
        summary.countries.len(),
        summary.edges.len(),
        cyan = palette.cyan,
        reset = palette.reset,
    )?;
    for (index, country) in summary.countries.iter().enumerate() {
        writeln!(out, "{:>4}. {}", index + 1, country.name)?;
    }
    if !summary.edges.is_empty() {
        writeln!(out, "\nEdges:")?;
        for edge in &summary.edges {
            writeln!(
                out,
                "  {} -> {} {green}({} km){reset}",
                edge.parent.name,
                edge.child.name,
                format_with_separators(u64::from(edge.distance_km)),
                green = palette.green,
                reset = palette.reset,
            )?;
        }
    }
    writeln!(
        out,
        "\nTotal distance: {} km",
        format_with_separators(summary.total_km)
    )
}

/// A drained ranking with its heading.
pub fn render_ranking<W: Write>(
    out: &mut W,
    ranking: &RankingOutput,
    palette: &ColorPalette,
) -> io::Result<()> {
    let order = match ranking.order {
        DrainOrder::Ascending => "ascending",
        DrainOrder::Descending => "descending",
    };
    writeln!(
        out,
        "{cyan}Ranked by {} ({order}){reset}:",
        ranking.key,
        cyan = palette.cyan,
        reset = palette.reset,
    )?;
    render_countries(out, &ranking.countries, palette)
}

/// Leading rows of the adjacency matrix, `INF` marking missing edges.
pub fn render_matrix<W: Write>(
    out: &mut W,
    atlas: &Atlas,
    graph: &Graph,
    rows: usize,
) -> io::Result<()> {
    for id in 0..rows.min(graph.node_count()) {
        let Some(row) = graph.row(id) else {
            break;
        };
        let cells: Vec<String> = row
            .iter()
            .map(|&weight| match weight {
                NO_EDGE => "INF".to_string(),
                weight => weight.to_string(),
            })
            .collect();
        writeln!(
            out,
            "{:<16} {}",
            atlas.country_name(id).unwrap_or("<unknown>"),
            cells.join(" ")
        )?;
    }
    Ok(())
}
