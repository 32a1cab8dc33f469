//! Dataset loader for spreadsheet workbooks
//!
//! Reads the first worksheet of an xlsx/xlsm/xlsb/xls/ods workbook. The
//! first row is the header; the required columns may appear in any order and
//! extra columns are ignored.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::{LoadError, LoadResult};
use crate::record::{columns, VolcanoRecord};
use crate::table::VolcanoTable;

/// Load a workbook into a sorted [`VolcanoTable`]
pub fn load_table(path: impl AsRef<Path>) -> LoadResult<VolcanoTable> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let mut workbook = open_workbook_auto(path).map_err(|e| LoadError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoadError::NoWorksheet(path.to_path_buf()))?
        .map_err(|e| LoadError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut rows = range.rows();
    let header = rows.next().ok_or(LoadError::MissingHeader)?;
    let table = parse_rows(header, rows)?;

    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        "Loaded volcano dataset"
    );
    Ok(table)
}

/// Positions of the required columns within a header row
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    country: usize,
    name: usize,
    volcano_type: usize,
    region: usize,
    latitude: usize,
    longitude: usize,
    elevation: usize,
    last_eruption: usize,
}

impl ColumnMap {
    fn from_header(header: &[Data]) -> LoadResult<Self> {
        let names: Vec<String> = header.iter().map(|c| c.to_string().trim().to_string()).collect();
        let position = |column: &str| names.iter().position(|n| n == column);

        let missing: Vec<String> = columns::REQUIRED
            .iter()
            .filter(|c| position(**c).is_none())
            .map(|c| c.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(LoadError::MissingColumns(missing));
        }

        // All present, checked above
        let at = |column: &str| position(column).unwrap_or_default();
        Ok(Self {
            country: at(columns::COUNTRY),
            name: at(columns::VOLCANO_NAME),
            volcano_type: at(columns::VOLCANO_TYPE),
            region: at(columns::REGION),
            latitude: at(columns::LATITUDE),
            longitude: at(columns::LONGITUDE),
            elevation: at(columns::ELEVATION),
            last_eruption: at(columns::LAST_ERUPTION),
        })
    }
}

/// Build a table from a header row and data rows
///
/// Rows whose cells are all empty are skipped. `rows` are numbered from 2
/// in error messages, matching spreadsheet row numbers under the header.
pub fn parse_rows<'a>(
    header: &[Data],
    rows: impl IntoIterator<Item = &'a [Data]>,
) -> LoadResult<VolcanoTable> {
    let map = ColumnMap::from_header(header)?;
    let mut records = Vec::new();

    for (i, row) in rows.into_iter().enumerate() {
        if row.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }
        let row_number = i + 2;
        let cell = |idx: usize| row.get(idx).unwrap_or(&Data::Empty);

        records.push(VolcanoRecord {
            country: text(cell(map.country)),
            name: text(cell(map.name)),
            volcano_type: text(cell(map.volcano_type)),
            region: text(cell(map.region)),
            latitude: number(cell(map.latitude), row_number, columns::LATITUDE)?,
            longitude: number(cell(map.longitude), row_number, columns::LONGITUDE)?,
            elevation: number(cell(map.elevation), row_number, columns::ELEVATION)?,
            last_eruption: text(cell(map.last_eruption)),
        });
    }

    Ok(VolcanoTable::from_records(records))
}

fn text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        // Years stored as floats read back as whole numbers
        Data::Float(f) if f.fract() == 0.0 && f.is_finite() => format!("{}", *f as i64),
        other => other.to_string(),
    }
}

fn number(cell: &Data, row: usize, column: &'static str) -> LoadResult<f64> {
    match cell {
        Data::Float(f) => Ok(*f),
        Data::Int(i) => Ok(*i as f64),
        Data::Empty | Data::Error(_) => Ok(f64::NAN),
        Data::String(s) if s.trim().is_empty() => Ok(f64::NAN),
        Data::String(s) => s.trim().parse::<f64>().map_err(|_| LoadError::NotNumeric {
            row,
            column,
            value: s.clone(),
        }),
        other => Err(LoadError::NotNumeric {
            row,
            column,
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Data {
        Data::String(v.to_string())
    }

    fn header() -> Vec<Data> {
        columns::REQUIRED.iter().map(|c| s(c)).collect()
    }

    fn row(country: &str, name: &str, elevation: Data) -> Vec<Data> {
        vec![
            s(country),
            s(name),
            s("Stratovolcano"),
            s("Region"),
            Data::Float(10.5),
            Data::Float(-20.25),
            elevation,
            Data::Float(1707.0),
        ]
    }

    #[test]
    fn test_parse_sorts_rows() {
        let rows = vec![
            row("Japan", "Fuji", Data::Int(3776)),
            row("Chile", "Lascar", Data::Float(5592.0)),
            row("Japan", "Asama", Data::Int(2568)),
        ];
        let table = parse_rows(&header(), rows.iter().map(Vec::as_slice)).unwrap();

        assert_eq!(table.len(), 3);
        assert!(table.is_sorted());
        let first = &table.records()[0];
        assert_eq!(first.name, "Lascar");
        assert_eq!(first.elevation, 5592.0);
        assert_eq!(first.latitude, 10.5);
        assert_eq!(first.longitude, -20.25);
        assert_eq!(first.last_eruption, "1707");
    }

    #[test]
    fn test_columns_in_any_order_with_extras() {
        let mut header = header();
        header.reverse();
        header.push(s("Notes"));
        let mut data = row("Italy", "Etna", Data::Int(3357));
        data.reverse();
        data.push(s("very active"));

        let table = parse_rows(&header, std::iter::once(data.as_slice())).unwrap();
        let etna = &table.records()[0];
        assert_eq!(etna.country, "Italy");
        assert_eq!(etna.elevation, 3357.0);
    }

    #[test]
    fn test_missing_columns_reported() {
        let header: Vec<Data> = header()
            .into_iter()
            .filter(|c| *c != s("Region") && *c != s("Elevation"))
            .collect();
        let err = parse_rows(&header, std::iter::empty()).unwrap_err();
        match err {
            LoadError::MissingColumns(missing) => {
                assert_eq!(missing, vec!["Region".to_string(), "Elevation".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_cells_and_rows() {
        let blank = vec![Data::Empty; 8];
        let rows = vec![row("Peru", "Misti", Data::Empty), blank];
        let table = parse_rows(&header(), rows.iter().map(Vec::as_slice)).unwrap();

        assert_eq!(table.len(), 1);
        assert!(table.records()[0].elevation.is_nan());
    }

    #[test]
    fn test_non_numeric_value_rejected() {
        let rows = vec![row("Peru", "Misti", s("tall"))];
        let err = parse_rows(&header(), rows.iter().map(Vec::as_slice)).unwrap_err();
        assert!(matches!(
            err,
            LoadError::NotNumeric { row: 2, column: "Elevation", .. }
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_table("/definitely/not/here.xlsx").unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }
}
