//! The contact table: an ordered column list plus an ordered list of records.
//!
//! A `Dataset` is an immutable snapshot. Every edit borrows the current
//! snapshot and returns a new one, so a caller holding an older snapshot never
//! observes a half-applied change and a failed edit leaves nothing to undo.
//!
//! Invariants upheld by every constructor and edit:
//! - column names are non-empty and pairwise distinct (case-sensitive);
//! - every record has exactly one value per column;
//! - a dataset without columns has no rows.

use std::collections::HashMap;

use log::debug;
use serde::Serialize;

use crate::error::{Error, Result};

/// One contact: a value per column plus the reserved `sent` flag, which is
/// never part of the column list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    values: HashMap<String, String>,
    pub sent: bool,
}

impl Record {
    fn blank(columns: &[String]) -> Self {
        Self {
            values: columns.iter().map(|c| (c.clone(), String::new())).collect(),
            sent: false,
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// The values in the given column order; absent keys read as `""`.
    pub fn values_in<'a>(&'a self, columns: &'a [String]) -> impl Iterator<Item = &'a str> + 'a {
        columns.iter().map(|c| self.get(c).unwrap_or(""))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// A dataset with the given header and no rows.
    pub fn with_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dataset = Dataset::new();
        for name in columns {
            let name = name.into();
            dataset.check_new_name(&name)?;
            dataset.columns.push(name);
        }
        Ok(dataset)
    }

    /// The "create new table" starting point: the given columns and one empty row.
    pub fn starter<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_columns(columns)?.add_row()
    }

    /// Builds a dataset from a header and rows of cells in header order.
    /// Short rows are padded with empty strings; cells past the header are dropped.
    pub(crate) fn from_rows(columns: Vec<String>, rows: Vec<(Vec<String>, bool)>) -> Result<Self> {
        let mut dataset = Self::with_columns(columns)?;
        if dataset.columns.is_empty() && !rows.is_empty() {
            return Err(Error::NoColumns);
        }
        dataset.rows = rows
            .into_iter()
            .map(|(cells, sent)| {
                let mut cells = cells.into_iter();
                let values = dataset
                    .columns
                    .iter()
                    .map(|c| (c.clone(), cells.next().unwrap_or_default()))
                    .collect();
                Record { values, sent }
            })
            .collect();
        Ok(dataset)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Result<&Record> {
        self.rows.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.rows.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no columns (and therefore no rows).
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| Error::NotFound {
                name: name.to_string(),
            })
    }

    fn check_new_name(&self, name: &str) -> Result<()> {
        if name.is_empty() || self.has_column(name) {
            return Err(Error::DuplicateColumn {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        self.row(index).map(|_| ())
    }

    pub fn add_column(&self, name: &str) -> Result<Self> {
        self.check_new_name(name)?;
        let mut next = self.clone();
        next.columns.push(name.to_string());
        for row in &mut next.rows {
            row.values.insert(name.to_string(), String::new());
        }
        debug!("added column {:?}", name);
        Ok(next)
    }

    pub fn rename_column(&self, old_name: &str, new_name: &str) -> Result<Self> {
        let index = self.position(old_name)?;
        if old_name == new_name {
            return Ok(self.clone());
        }
        self.check_new_name(new_name)?;

        let mut next = self.clone();
        next.columns[index] = new_name.to_string();
        for row in &mut next.rows {
            let value = row.values.remove(old_name).unwrap_or_default();
            row.values.insert(new_name.to_string(), value);
        }
        debug!("renamed column {:?} to {:?}", old_name, new_name);
        Ok(next)
    }

    pub fn delete_column(&self, name: &str) -> Result<Self> {
        let index = self.position(name)?;
        if self.columns.len() == 1 {
            return Err(Error::LastColumn {
                name: name.to_string(),
            });
        }

        let mut next = self.clone();
        next.columns.remove(index);
        for row in &mut next.rows {
            row.values.remove(name);
        }
        debug!("deleted column {:?}", name);
        Ok(next)
    }

    pub fn add_row(&self) -> Result<Self> {
        if self.columns.is_empty() {
            return Err(Error::NoColumns);
        }
        let mut next = self.clone();
        next.rows.push(Record::blank(&self.columns));
        Ok(next)
    }

    pub fn delete_row(&self, index: usize) -> Result<Self> {
        self.check_index(index)?;
        let mut next = self.clone();
        next.rows.remove(index);
        debug!("deleted row {}", index);
        Ok(next)
    }

    pub fn update_cell(&self, index: usize, column: &str, value: &str) -> Result<Self> {
        self.check_index(index)?;
        self.position(column)?;
        let mut next = self.clone();
        next.rows[index]
            .values
            .insert(column.to_string(), value.to_string());
        Ok(next)
    }

    pub fn set_sent(&self, index: usize, sent: bool) -> Result<Self> {
        self.check_index(index)?;
        let mut next = self.clone();
        next.rows[index].sent = sent;
        Ok(next)
    }

    pub fn clear(&self) -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contacts() -> Dataset {
        Dataset::with_columns(["name", "phone"])
            .and_then(|d| d.add_row())
            .and_then(|d| d.update_cell(0, "name", "Sara"))
            .and_then(|d| d.update_cell(0, "phone", "0551"))
            .and_then(|d| d.add_row())
            .and_then(|d| d.update_cell(1, "name", "Omar"))
            .unwrap()
    }

    #[test]
    fn add_column_backfills_every_row() {
        let before = contacts();
        let after = before.add_column("city").unwrap();

        assert_eq!(after.columns(), ["name", "phone", "city"]);
        assert!(after.rows().iter().all(|r| r.get("city") == Some("")));
        // the input snapshot is untouched
        assert_eq!(before.columns(), ["name", "phone"]);
        assert_eq!(before.rows()[0].get("city"), None);
    }

    #[test]
    fn duplicate_or_empty_names_are_rejected_without_changes() {
        let dataset = contacts();
        assert_eq!(
            dataset.add_column("name"),
            Err(Error::DuplicateColumn {
                name: "name".to_string()
            })
        );
        assert!(matches!(
            dataset.add_column(""),
            Err(Error::DuplicateColumn { .. })
        ));
        assert!(matches!(
            dataset.rename_column("name", "phone"),
            Err(Error::DuplicateColumn { .. })
        ));
        assert_eq!(dataset, contacts());
    }

    #[test]
    fn column_names_are_case_sensitive() {
        let dataset = contacts().add_column("Name").unwrap();
        assert_eq!(dataset.columns(), ["name", "phone", "Name"]);
    }

    #[test]
    fn rename_keeps_position_and_values() {
        let renamed = contacts().rename_column("name", "full name").unwrap();
        assert_eq!(renamed.columns(), ["full name", "phone"]);
        assert_eq!(renamed.rows()[0].get("full name"), Some("Sara"));
        assert_eq!(renamed.rows()[0].get("name"), None);
        assert_eq!(renamed.rows()[1].get("full name"), Some("Omar"));
    }

    #[test]
    fn rename_to_same_name_is_a_no_op() {
        assert_eq!(contacts().rename_column("name", "name").unwrap(), contacts());
    }

    #[test]
    fn rename_missing_column_fails() {
        assert!(matches!(
            contacts().rename_column("city", "town"),
            Err(Error::NotFound { .. })
        ));
    }

    #[test]
    fn delete_column_keeps_row_count() {
        let dataset = contacts().delete_column("phone").unwrap();
        assert_eq!(dataset.columns(), ["name"]);
        assert_eq!(dataset.len(), 2);
        assert!(dataset.rows().iter().all(|r| r.get("phone").is_none()));
    }

    #[test]
    fn last_column_cannot_be_deleted() {
        let dataset = contacts().delete_column("phone").unwrap();
        assert_eq!(
            dataset.delete_column("name"),
            Err(Error::LastColumn {
                name: "name".to_string()
            })
        );
    }

    #[test]
    fn rows_need_a_column() {
        assert_eq!(Dataset::new().add_row(), Err(Error::NoColumns));
    }

    #[test]
    fn new_rows_are_blank_and_unsent() {
        let dataset = contacts().add_row().unwrap();
        let row = dataset.row(2).unwrap();
        assert_eq!(row.get("name"), Some(""));
        assert_eq!(row.get("phone"), Some(""));
        assert!(!row.sent);
    }

    #[test]
    fn row_index_is_checked() {
        let dataset = contacts();
        assert_eq!(
            dataset.delete_row(2),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        );
        assert!(matches!(
            dataset.update_cell(5, "name", "x"),
            Err(Error::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            dataset.update_cell(0, "city", "x"),
            Err(Error::NotFound { .. })
        ));
    }

    #[test]
    fn delete_row_shifts_following_rows() {
        let dataset = contacts().delete_row(0).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.rows()[0].get("name"), Some("Omar"));
    }

    #[test]
    fn any_string_is_a_valid_cell() {
        let dataset = contacts()
            .update_cell(0, "phone", "")
            .and_then(|d| d.update_cell(1, "phone", "  +213 (0) 55 "))
            .unwrap();
        assert_eq!(dataset.rows()[0].get("phone"), Some(""));
        assert_eq!(dataset.rows()[1].get("phone"), Some("  +213 (0) 55 "));
    }

    #[test]
    fn clear_returns_the_empty_dataset() {
        let cleared = contacts().clear();
        assert!(cleared.is_empty());
        assert_eq!(cleared.len(), 0);
    }

    #[test]
    fn starter_has_one_blank_row() {
        let dataset = Dataset::starter(["الاسم", "الرقم"]).unwrap();
        assert_eq!(dataset.columns(), ["الاسم", "الرقم"]);
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn with_columns_rejects_duplicates() {
        assert!(matches!(
            Dataset::with_columns(["a", "b", "a"]),
            Err(Error::DuplicateColumn { .. })
        ));
    }
}
