use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::borders::parse_border_list;
use crate::error::{Error, Result};

/// Node identifier: the 0-based position of the country in ingestion order.
pub type CountryId = usize;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const FUZZY_THRESHOLD: f64 = 0.8;

/// A single country record as read from the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Country {
    pub id: CountryId,
    pub code: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub population: u64,
    pub area: u64,
    /// Neighbour names as written in the dataset, before resolution to ids.
    pub borders: Vec<String>,
}

impl Country {
    /// Build a record, parsing the raw border field into neighbour names.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: CountryId,
        code: impl Into<String>,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        population: u64,
        area: u64,
        borders_raw: &str,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            latitude,
            longitude,
            population,
            area,
            borders: parse_border_list(borders_raw),
        }
    }
}

/// In-memory node table with a name lookup built once at load time.
#[derive(Debug, Clone, Default)]
pub struct Atlas {
    countries: Vec<Country>,
    name_to_id: HashMap<String, CountryId>,
}

impl Atlas {
    /// Build an atlas from records in node order.
    ///
    /// Each record's `id` is reset to its position so graph rows line up with
    /// the table. When two records share a name the first one keeps the lookup
    /// entry.
    pub fn from_countries(mut countries: Vec<Country>) -> Self {
        let mut name_to_id = HashMap::with_capacity(countries.len());
        for (index, country) in countries.iter_mut().enumerate() {
            if country.id != index {
                debug!(name = %country.name, from = country.id, to = index, "reassigned id");
                country.id = index;
            }
            if name_to_id.contains_key(&country.name) {
                debug!(name = %country.name, id = country.id, "duplicate name ignored");
                continue;
            }
            name_to_id.insert(country.name.clone(), country.id);
        }
        Self {
            countries,
            name_to_id,
        }
    }

    /// Parse a CSV dataset from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with(reader, &LoadOptions::default())
    }

    /// Parse a CSV dataset from any reader, honouring the supplied options.
    pub fn from_reader_with<R: Read>(reader: R, options: &LoadOptions) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let columns = ColumnMap::from_headers(csv_reader.headers()?)?;

        let mut countries = Vec::new();
        for (index, result) in csv_reader.records().enumerate() {
            if options.max_rows.is_some_and(|max| countries.len() >= max) {
                debug!(max_rows = countries.len(), "row limit reached");
                break;
            }
            let record = result?;
            // Header is line 1.
            let row = index + 2;
            countries.push(columns.country(countries.len(), &record, row));
        }

        Ok(Self::from_countries(countries))
    }

    /// All countries in id order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Lookup a country by identifier.
    pub fn country(&self, id: CountryId) -> Option<&Country> {
        self.countries.get(id)
    }

    /// Lookup a country identifier by its exact, case-sensitive name.
    pub fn country_id_by_name(&self, name: &str) -> Option<CountryId> {
        self.name_to_id.get(name).copied()
    }

    /// Lookup a country name by identifier.
    pub fn country_name(&self, id: CountryId) -> Option<&str> {
        self.countries.get(id).map(|country| country.name.as_str())
    }

    /// Countries whose name contains `needle`, ignoring case, in id order.
    pub fn search(&self, needle: &str) -> Vec<&Country> {
        let needle = needle.to_lowercase();
        self.countries
            .iter()
            .filter(|country| country.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Names similar to `name`, best match first, at most `limit` entries.
    pub fn fuzzy_country_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let wanted = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .name_to_id
            .keys()
            .map(|candidate| {
                let score = strsim::jaro_winkler(&wanted, &candidate.to_lowercase());
                (score, candidate.as_str())
            })
            .filter(|(score, _)| *score >= FUZZY_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }
}

/// Tuning knobs for dataset ingestion.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Stop after this many records. `None` reads the whole file.
    pub max_rows: Option<usize>,
}

/// Load a CSV dataset from disk.
pub fn load_atlas(path: &Path) -> Result<Atlas> {
    load_atlas_with(path, &LoadOptions::default())
}

/// Load a CSV dataset from disk with explicit options.
pub fn load_atlas_with(path: &Path, options: &LoadOptions) -> Result<Atlas> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = fs::File::open(path)?;
    let atlas = Atlas::from_reader_with(file, options)?;
    info!(
        path = %path.display(),
        countries = atlas.len(),
        "loaded country dataset"
    );
    Ok(atlas)
}

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    code: Option<usize>,
    name: usize,
    latitude: Option<usize>,
    longitude: Option<usize>,
    population: Option<usize>,
    area: Option<usize>,
    borders: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
        let find = |synonyms: &[&str]| {
            synonyms
                .iter()
                .find_map(|alt| normalized.iter().position(|header| header == alt))
        };

        let name = find(&["name", "country", "countryname", "country_name"]).ok_or_else(|| {
            Error::DatasetValidation {
                message: format!(
                    "missing required name column. Available: {}",
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            }
        })?;

        Ok(Self {
            code: find(&["code", "iso", "country_code", "countrycode"]),
            name,
            latitude: find(&["latitude", "lat"]),
            longitude: find(&["longitude", "lon", "lng", "long"]),
            population: find(&["population", "pop"]),
            area: find(&["area", "area_km2", "areakm2"]),
            borders: find(&[
                "borders",
                "neighbours",
                "neighbors",
                "adjacent_countries",
                "adjacentcountries",
            ]),
        })
    }

    fn country(&self, id: CountryId, record: &StringRecord, row: usize) -> Country {
        let field = |index: Option<usize>| index.and_then(|i| record.get(i)).unwrap_or("");

        let name = field(Some(self.name));
        Country::new(
            id,
            field(self.code),
            name,
            parse_or_default(field(self.latitude), "latitude", name, row),
            parse_or_default(field(self.longitude), "longitude", name, row),
            parse_or_default(field(self.population), "population", name, row),
            parse_or_default(field(self.area), "area", name, row),
            field(self.borders),
        )
    }
}

fn normalize_header(header: &str) -> String {
    header
        .to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Parse a numeric field, falling back to the type default when it is blank
/// or malformed. Malformed values are logged; blanks are silently defaulted.
fn parse_or_default<T>(value: &str, column: &str, country: &str, row: usize) -> T
where
    T: std::str::FromStr + Default,
{
    if value.is_empty() {
        return T::default();
    }
    match value.parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!(row, column, country, value, "malformed value, defaulting");
            T::default()
        }
    }
}
