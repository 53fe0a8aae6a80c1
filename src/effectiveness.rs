use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use csv::{StringRecord, Trim};
use schema::PokemonType;
use strum::EnumCount;

use crate::errors::{ConfigError, ConfigResult};

/// Compiled-in copy of the standard chart.
const STANDARD_CHART: &str = include_str!("../data/type_effectiveness.csv");

static STANDARD_TABLE: LazyLock<ConfigResult<EffectivenessTable>> =
    LazyLock::new(|| EffectivenessTable::parse(STANDARD_CHART));

/// Attacking-type x defending-type damage multipliers.
///
/// Rows are indexed by the attacker's [`PokemonType::index`], columns by the
/// defender's. The matrix is square with one row per known type and is never
/// modified after loading.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectivenessTable {
    rows: Vec<Vec<f64>>,
}

impl EffectivenessTable {
    /// Parse a comma-separated matrix. A leading header record of type names is
    /// skipped; blank lines are ignored.
    pub fn parse(text: &str) -> ConfigResult<Self> {
        let size = PokemonType::COUNT;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        let mut rows = Vec::with_capacity(size);
        for (line, record) in reader.records().enumerate() {
            let record = record.map_err(|e| ConfigError::MalformedTable(e.to_string()))?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            if line == 0 && record.iter().any(|cell| cell.parse::<f64>().is_err()) {
                continue;
            }
            rows.push(Self::parse_row(&record, rows.len())?);
        }

        if rows.len() != size {
            return Err(ConfigError::MalformedTable(format!(
                "found {} rows, expected {}",
                rows.len(),
                size
            )));
        }

        Ok(Self { rows })
    }

    fn parse_row(record: &StringRecord, row_index: usize) -> ConfigResult<Vec<f64>> {
        let size = PokemonType::COUNT;
        if record.len() != size {
            return Err(ConfigError::MalformedTable(format!(
                "row {} has {} columns, expected {}",
                row_index,
                record.len(),
                size
            )));
        }
        record
            .iter()
            .map(|cell| {
                cell.parse::<f64>().map_err(|_| {
                    ConfigError::MalformedTable(format!(
                        "row {}: '{}' is not a number",
                        row_index, cell
                    ))
                })
            })
            .collect()
    }

    /// Load a table from a file on disk.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::parse(&text)
    }

    /// The standard chart shipped with the crate, parsed once per process.
    pub fn standard() -> ConfigResult<&'static EffectivenessTable> {
        STANDARD_TABLE.as_ref().map_err(Clone::clone)
    }

    /// Multiplier applied when `attacking` hits `defending`.
    pub fn multiplier(&self, attacking: PokemonType, defending: PokemonType) -> f64 {
        self.rows[attacking.index()][defending.index()]
    }

    /// Number of types covered by the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// A table where every matchup is neutral. Handy for isolating damage math.
    pub fn neutral() -> Self {
        let size = PokemonType::COUNT;
        Self {
            rows: vec![vec![1.0; size]; size],
        }
    }
}
