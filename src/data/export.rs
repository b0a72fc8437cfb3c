//! Long-format CSV import and export of the course data.
//!
//! One row per observation: `column,index,value`, with 1-based indices.

use std::collections::BTreeMap;
use std::io;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{keys, ColumnKind, ColumnRef, CourseData, SugarCategory, LAYOUT};
use crate::{Error, Result, Sample};

#[derive(Debug, Serialize, Deserialize)]
struct Record {
    column: String,
    index: usize,
    value: String,
}

impl CourseData {
    /// Writes every observation as a `column,index,value` row.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut wtr = ::csv::Writer::from_writer(writer);
        for (key, column) in self.iter() {
            let values: Vec<String> = match column {
                ColumnRef::Numeric(v) => v.iter().map(f64::to_string).collect(),
                ColumnRef::Categorical(v) => v.iter().map(ToString::to_string).collect(),
            };
            for (i, value) in values.into_iter().enumerate() {
                wtr.serialize(Record { column: key.to_string(), index: i + 1, value })?;
            }
        }
        wtr.flush()?;
        Ok(())
    }

    /// Reads a table written by [`CourseData::write_csv`].
    ///
    /// Every column must be present with its full length and no unknown
    /// columns may appear. Row order does not matter.
    pub fn read_csv<R: io::Read>(reader: R) -> Result<Self> {
        let mut rdr = ::csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

        let mut columns: BTreeMap<&'static str, Vec<(usize, String)>> = BTreeMap::new();
        for result in rdr.deserialize() {
            let record: Record = result?;
            let key = LAYOUT
                .iter()
                .map(|(key, _, _)| *key)
                .find(|key| *key == record.column)
                .ok_or_else(|| Error::UnknownColumn(record.column.clone()))?;
            columns.entry(key).or_default().push((record.index, record.value));
        }
        debug!(columns = columns.len(), "read course data table");

        let mut table = Table { columns };
        Ok(CourseData {
            sample1_carbohydrate: table.numeric(keys::SAMPLE1_CARBOHYDRATE)?,
            sample2_carbohydrate: table.numeric(keys::SAMPLE2_CARBOHYDRATE)?,
            sample1_sugar: table.categorical(keys::SAMPLE1_SUGAR)?,
            sample2_sugar: table.categorical(keys::SAMPLE2_SUGAR)?,
            protein: table.numeric(keys::PROTEIN)?,
            fat: table.numeric(keys::FAT)?,
            vitamin_b12: table.numeric(keys::VITAMIN_B12)?,
            magnesium: table.numeric(keys::MAGNESIUM)?,
            sample_means: table.numeric(keys::SAMPLE_MEANS)?,
            sample_proportions: table.numeric(keys::SAMPLE_PROPORTIONS)?,
        })
    }
}

struct Table {
    columns: BTreeMap<&'static str, Vec<(usize, String)>>,
}

impl Table {
    /// Raw values of `key` ordered by index, checked against the layout.
    fn take(&mut self, key: &'static str, kind: ColumnKind) -> Result<Vec<String>> {
        let expected = LAYOUT
            .iter()
            .find(|(k, c, _)| *k == key && *c == kind)
            .map_or(0, |(_, _, len)| *len);

        let mut rows = self.columns.remove(key).unwrap_or_default();
        rows.sort_by_key(|(index, _)| *index);

        let contiguous = rows.iter().enumerate().all(|(i, (index, _))| *index == i + 1);
        if rows.len() != expected || !contiguous {
            return Err(Error::ColumnLength { column: key, expected, found: rows.len() });
        }
        Ok(rows.into_iter().map(|(_, value)| value).collect())
    }

    fn numeric(&mut self, key: &'static str) -> Result<Sample<f64>> {
        self.take(key, ColumnKind::Numeric)?
            .iter()
            .map(|value| {
                value.trim().parse::<f64>().map_err(|_| {
                    Error::InvalidParameter(format!("column `{key}`: `{value}` is not a number"))
                })
            })
            .collect()
    }

    fn categorical(&mut self, key: &'static str) -> Result<Sample<SugarCategory>> {
        self.take(key, ColumnKind::Categorical)?
            .iter()
            .map(|value| value.parse())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::define_data;

    fn exported() -> String {
        let mut buf = Vec::new();
        define_data().write_csv(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn export_has_one_row_per_observation() {
        let text = exported();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("column,index,value"));
        assert_eq!(lines.next(), Some("Sample1_Data.Carbohydrate,1,0"));
        assert_eq!(lines.next(), Some("Sample1_Data.Carbohydrate,2,0.5828941"));
        assert_eq!(text.lines().count(), 1 + 8 * 20 + 2 * 30);
    }

    #[test]
    fn import_restores_the_fixture() {
        let text = exported();
        // Reversed row order must not matter.
        let mut lines: Vec<&str> = text.lines().collect();
        let header = lines.remove(0);
        lines.reverse();
        let shuffled = format!("{header}\n{}\n", lines.join("\n"));

        let data = CourseData::read_csv(shuffled.as_bytes()).unwrap();
        assert_eq!(data, define_data());
    }

    #[test]
    fn import_rejects_missing_rows() {
        let text = exported();
        let truncated: String = text
            .lines()
            .filter(|line| !line.starts_with("Data.Protein,7,"))
            .map(|line| format!("{line}\n"))
            .collect();
        let err = CourseData::read_csv(truncated.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::ColumnLength { column: "Data.Protein", expected: 20, found: 19 }
        ));
    }

    #[test]
    fn import_rejects_unknown_columns_and_labels() {
        let extra = format!("{}Data.Sodium,1,3.0\n", exported());
        let err = CourseData::read_csv(extra.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::UnknownColumn(c) if c == "Data.Sodium"));

        let bad_label = exported()
            .replace("Sample1_Data.Sugar.Total,20,S5", "Sample1_Data.Sugar.Total,20,S9");
        let err = CourseData::read_csv(bad_label.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::UnknownCategory(_)));
    }
}
