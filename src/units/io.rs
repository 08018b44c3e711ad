use std::path::Path;

use ahash::AHashMap;
use anyhow::{bail, Context, Result};
use tracing::{debug, warn};

use crate::{
    io::csv::{parse_f64, read_csv, str_column},
    types::UnitId,
    units::{Demographics, Unit, UnitTable},
};

/// Name of the race-table row that carries per-category standard deviations.
const STDEV_ROW: &str = "STDEV";

/// Units loaded from the attribute tables, plus the optional race deviations row.
#[derive(Clone, Debug)]
pub struct UnitData {
    pub table: UnitTable,
    pub race_stdev: Option<Demographics>,
}

/// Race columns by position: hispanic, white, black, american indian, asian.
/// Column 3 (non-hispanic) is ignored.
const RACE_COLUMNS: [usize; 5] = [2, 4, 5, 6, 7];

fn parse_race(columns: &[Vec<Option<&str>>; 5], row: usize) -> Result<Demographics> {
    let mut values = [0.0; 5];
    for (value, (column, name)) in values.iter_mut().zip(columns.iter().zip(Demographics::CATEGORIES)) {
        *value = parse_f64(column[row], row + 1, name)?;
    }
    Ok(Demographics::from_array(values))
}

impl UnitTable {
    /// Load units from the race, SNAP and wage tables.
    ///
    /// The race table defines the set of units; SNAP and wage rows naming an
    /// unknown unit are logged and skipped.
    pub fn read_from_csv(race_path: &Path, food_path: &Path, wage_path: &Path) -> Result<UnitData> {
        let (mut units, race_stdev) = read_race_table(race_path)
            .with_context(|| format!("[units::io] Failed to load race table {}", race_path.display()))?;

        apply_column(&mut units, food_path, "snap_fraction", Unit::set_food_fraction)
            .with_context(|| format!("[units::io] Failed to load SNAP table {}", food_path.display()))?;
        apply_column(&mut units, wage_path, "wage_score", Unit::set_wage_score)
            .with_context(|| format!("[units::io] Failed to load wage table {}", wage_path.display()))?;

        let table = UnitTable::new(units.into_values().collect())?;
        debug!("[units::io] loaded {} units, total population {:.0}", table.len(), table.total_population());

        Ok(UnitData { table, race_stdev })
    }
}

fn read_race_table(path: &Path) -> Result<(AHashMap<UnitId, Unit>, Option<Demographics>)> {
    let df = read_csv(path)?;
    let names = str_column(&df, 0)?;
    let populations = str_column(&df, 1)?;
    let race = [
        str_column(&df, RACE_COLUMNS[0])?,
        str_column(&df, RACE_COLUMNS[1])?,
        str_column(&df, RACE_COLUMNS[2])?,
        str_column(&df, RACE_COLUMNS[3])?,
        str_column(&df, RACE_COLUMNS[4])?,
    ];

    let mut units = AHashMap::with_capacity(names.len());
    let mut stdev = None;

    for (row, name) in names.into_iter().enumerate() {
        let Some(name) = name.map(str::trim) else {
            warn!("[units::io] {}: row {} has no unit name, skipping", path.display(), row + 1);
            continue
        };

        if name == STDEV_ROW {
            stdev = Some(parse_race(&race, row)?);
            continue
        }

        let id = UnitId::new(name);
        if id.as_str().is_empty() {
            warn!("[units::io] {}: row {} name '{name}' normalizes to nothing, skipping", path.display(), row + 1);
            continue
        }

        let population = parse_f64(populations[row], row + 1, "population")?;
        let unit = Unit::new(id.clone(), population, parse_race(&race, row)?);
        if units.insert(id.clone(), unit).is_some() {
            bail!("[units::io] {}: duplicate unit '{id}' at row {}", path.display(), row + 1);
        }
    }

    Ok((units, stdev))
}

/// Read a `name, _, value` table and apply `value` to each known unit.
fn apply_column(
    units: &mut AHashMap<UnitId, Unit>,
    path: &Path,
    field: &str,
    apply: fn(&mut Unit, f64),
) -> Result<()> {
    let df = read_csv(path)?;
    let names = str_column(&df, 0)?;
    let values = str_column(&df, 2)?;

    for (row, (name, value)) in names.into_iter().zip(values).enumerate() {
        let Some(name) = name else { continue };
        let id = UnitId::new(name);
        let Some(unit) = units.get_mut(id.as_str()) else {
            warn!("[units::io] {}: unit '{id}' not found in race table, skipping", path.display());
            continue
        };
        apply(unit, parse_f64(value, row + 1, field)?);
    }

    Ok(())
}
