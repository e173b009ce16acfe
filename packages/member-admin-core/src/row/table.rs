//! Member table: rows in display order, keyed by resource URL.

use crate::error::{AdminError, Result};
use crate::model::{MemberRecord, RowField, RowValues};

use super::state::{EditingRow, LockedRow, RowControls};

/// A table row in one of its two states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Locked(LockedRow),
    Editing(EditingRow),
}

impl TableRow {
    pub fn url(&self) -> &str {
        match self {
            TableRow::Locked(row) => row.url(),
            TableRow::Editing(row) => row.url(),
        }
    }

    /// Values currently shown in the row's fields.
    pub fn values(&self) -> &RowValues {
        match self {
            TableRow::Locked(row) => row.values(),
            TableRow::Editing(row) => row.draft(),
        }
    }

    pub fn controls(&self) -> RowControls {
        match self {
            TableRow::Locked(row) => row.controls(),
            TableRow::Editing(row) => row.controls(),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, TableRow::Editing(_))
    }
}

/// Rendered member table.
#[derive(Debug, Clone, Default)]
pub struct MemberTable {
    rows: Vec<TableRow>,
}

impl MemberTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a locked row, or replaces the row bound to the same URL.
    pub fn insert(&mut self, url: impl Into<String>, values: RowValues) {
        let row = TableRow::Locked(LockedRow::new(url, values));
        match self.position(row.url()) {
            Some(idx) => self.rows[idx] = row,
            None => self.rows.push(row),
        }
    }

    /// Replaces the whole table, discarding any edit in progress.
    pub fn replace_all<I, S>(&mut self, rows: I)
    where
        I: IntoIterator<Item = (S, RowValues)>,
        S: Into<String>,
    {
        self.rows.clear();
        for (url, values) in rows {
            self.insert(url, values);
        }
    }

    pub fn get(&self, url: &str) -> Option<&TableRow> {
        self.rows.iter().find(|row| row.url() == url)
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Starts editing a locked row.
    ///
    /// Fails with `AlreadyEditing` rather than overwriting the snapshot.
    pub fn begin_edit(&mut self, url: &str) -> Result<()> {
        let idx = self.require(url)?;
        if self.rows[idx].is_editing() {
            return Err(AdminError::AlreadyEditing {
                url: url.to_string(),
            });
        }
        self.transition(idx, |row| match row {
            TableRow::Locked(locked) => TableRow::Editing(locked.begin_edit()),
            editing => editing,
        });
        Ok(())
    }

    /// Writes a field of the operator draft.
    pub fn set_field(
        &mut self,
        url: &str,
        field: RowField,
        value: impl Into<String>,
    ) -> Result<()> {
        match self.row_mut(url)? {
            TableRow::Editing(row) => {
                row.set_field(field, value);
                Ok(())
            }
            TableRow::Locked(_) => Err(AdminError::NotEditing {
                url: url.to_string(),
            }),
        }
    }

    /// Current draft of an editing row.
    pub fn draft(&self, url: &str) -> Result<&RowValues> {
        match self.get(url) {
            Some(TableRow::Editing(row)) => Ok(row.draft()),
            Some(TableRow::Locked(_)) => Err(AdminError::NotEditing {
                url: url.to_string(),
            }),
            None => Err(AdminError::RowNotFound {
                url: url.to_string(),
            }),
        }
    }

    /// Restores the snapshot and locks the row.
    pub fn cancel_edit(&mut self, url: &str) -> Result<()> {
        let idx = self.require(url)?;
        if !self.rows[idx].is_editing() {
            return Err(AdminError::NotEditing {
                url: url.to_string(),
            });
        }
        self.transition(idx, |row| match row {
            TableRow::Editing(editing) => TableRow::Locked(editing.cancel()),
            locked => locked,
        });
        Ok(())
    }

    /// Locks the row with the persisted record.
    pub fn commit_edit(&mut self, url: &str, saved: &MemberRecord) -> Result<()> {
        let idx = self.require(url)?;
        if !self.rows[idx].is_editing() {
            return Err(AdminError::NotEditing {
                url: url.to_string(),
            });
        }
        self.transition(idx, |row| match row {
            TableRow::Editing(editing) => TableRow::Locked(editing.commit(saved)),
            locked => locked,
        });
        Ok(())
    }

    /// Removes the row bound to `url`. Returns false if there was none.
    pub fn remove(&mut self, url: &str) -> bool {
        match self.position(url) {
            Some(idx) => {
                self.rows.remove(idx);
                true
            }
            None => false,
        }
    }

    fn position(&self, url: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.url() == url)
    }

    fn require(&self, url: &str) -> Result<usize> {
        self.position(url).ok_or_else(|| AdminError::RowNotFound {
            url: url.to_string(),
        })
    }

    fn row_mut(&mut self, url: &str) -> Result<&mut TableRow> {
        let idx = self.require(url)?;
        Ok(&mut self.rows[idx])
    }

    fn transition(&mut self, idx: usize, f: impl FnOnce(TableRow) -> TableRow) {
        let placeholder = TableRow::Locked(LockedRow::new(String::new(), RowValues::default()));
        let row = std::mem::replace(&mut self.rows[idx], placeholder);
        self.rows[idx] = f(row);
    }
}
