//! Filter command handler: bound countries by population/area and rank them.

use std::io::{self, Write};

use anyhow::Result;
use tracing::debug;

use bordergraph_cli::output::{render_json, render_ranking, OutputFormat, RankingOutput};
use bordergraph_lib::{Bounds, CountryFilter, DrainOrder, Query, QueryOutcome, RankKey, Session};

use super::Presentation;

/// Arguments for the filter command.
#[derive(Debug, Clone, Default)]
pub struct FilterCommandArgs {
    pub min_population: Option<u64>,
    pub max_population: Option<u64>,
    pub min_area: Option<u64>,
    pub max_area: Option<u64>,
    /// Only print this ranking; both are printed when absent.
    pub rank: Option<RankKey>,
    pub descending: bool,
}

impl FilterCommandArgs {
    /// Convert CLI args to a library filter.
    pub fn to_filter(&self) -> CountryFilter {
        CountryFilter {
            population: Bounds::new(self.min_population, self.max_population),
            area: Bounds::new(self.min_area, self.max_area),
        }
    }

    fn order(&self) -> DrainOrder {
        if self.descending {
            DrainOrder::Descending
        } else {
            DrainOrder::Ascending
        }
    }
}

/// Handle the filter subcommand.
pub fn handle_filter(
    session: &Session,
    args: &FilterCommandArgs,
    presentation: Presentation,
) -> Result<()> {
    let query = Query::Filter(args.to_filter());
    let QueryOutcome::Ranking(mut outcome) = session.execute(&query)? else {
        anyhow::bail!("unexpected outcome for {query:?}");
    };
    debug!(matched = outcome.by_population.len(), "filter applied");

    let keys = match args.rank {
        Some(key) => vec![key],
        None => vec![RankKey::Population, RankKey::Area],
    };
    let order = args.order();
    let rankings: Vec<RankingOutput> = keys
        .into_iter()
        .map(|key| RankingOutput {
            key,
            order,
            countries: outcome.ranking_mut(key).drain(order),
        })
        .collect();

    let mut stdout = io::stdout().lock();
    match presentation.format {
        OutputFormat::Json => render_json(&mut stdout, &rankings)?,
        OutputFormat::Text => {
            for (index, ranking) in rankings.iter().enumerate() {
                if index > 0 {
                    writeln!(stdout)?;
                }
                render_ranking(&mut stdout, ranking, &presentation.palette)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_bounds_are_disabled() {
        let filter = FilterCommandArgs::default().to_filter();
        assert_eq!(filter, CountryFilter::default());
    }

    #[test]
    fn bounds_map_to_filter() {
        let args = FilterCommandArgs {
            min_population: Some(10),
            max_area: Some(99),
            ..Default::default()
        };
        let filter = args.to_filter();
        assert_eq!(filter.population, Bounds::new(Some(10), None));
        assert_eq!(filter.area, Bounds::new(None, Some(99)));
        assert_eq!(args.order(), DrainOrder::Ascending);
    }
}
