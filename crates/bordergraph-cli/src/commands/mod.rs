// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. The main.rs dispatches to
// these handlers, keeping the entry point focused on parsing and coordination.

pub mod countries;
pub mod filter;
pub mod matrix;
pub mod route;
pub mod traverse;
pub mod tree;

use bordergraph_cli::output::OutputFormat;
use bordergraph_cli::terminal::ColorPalette;

/// Presentation settings shared by every handler.
#[derive(Debug, Clone, Copy)]
pub struct Presentation {
    pub format: OutputFormat,
    pub palette: ColorPalette,
}
