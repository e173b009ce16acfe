//! Locked/editing row states.
//!
//! A row is either fully locked or fully editable. Transitions consume the
//! row value, so starting a second edit on an editing row cannot be written.

use crate::model::{MemberRecord, RowField, RowValues};

/// Action control shown on a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Edit,
    Delete,
    Save,
    Cancel,
}

/// Visible controls and field enablement for a row state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowControls {
    pub fields_enabled: bool,
    pub visible: &'static [Control],
}

impl RowControls {
    pub const LOCKED: RowControls = RowControls {
        fields_enabled: false,
        visible: &[Control::Edit, Control::Delete],
    };

    pub const EDITING: RowControls = RowControls {
        fields_enabled: true,
        visible: &[Control::Save, Control::Cancel],
    };

    pub fn shows(&self, control: Control) -> bool {
        self.visible.contains(&control)
    }
}

/// Row with disabled fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockedRow {
    url: String,
    values: RowValues,
}

impl LockedRow {
    pub fn new(url: impl Into<String>, values: RowValues) -> Self {
        Self {
            url: url.into(),
            values,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn values(&self) -> &RowValues {
        &self.values
    }

    pub fn controls(&self) -> RowControls {
        RowControls::LOCKED
    }

    /// Unlocks the fields and snapshots the current values.
    pub fn begin_edit(self) -> EditingRow {
        tracing::debug!("Begin edit on row {}", self.url);
        EditingRow {
            url: self.url,
            draft: self.values.clone(),
            snapshot: self.values,
        }
    }
}

/// Row with enabled fields, an operator draft, and the pre-edit snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditingRow {
    url: String,
    draft: RowValues,
    snapshot: RowValues,
}

impl EditingRow {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn draft(&self) -> &RowValues {
        &self.draft
    }

    pub fn snapshot(&self) -> &RowValues {
        &self.snapshot
    }

    pub fn controls(&self) -> RowControls {
        RowControls::EDITING
    }

    pub fn set_field(&mut self, field: RowField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Discards the draft and restores the snapshot.
    pub fn cancel(self) -> LockedRow {
        tracing::debug!("Cancel edit on row {}", self.url);
        LockedRow {
            url: self.url,
            values: self.snapshot,
        }
    }

    /// Locks the row with the values that were persisted.
    pub fn commit(self, saved: &MemberRecord) -> LockedRow {
        tracing::debug!("Commit edit on row {}", self.url);
        LockedRow {
            url: self.url,
            values: RowValues::from(saved),
        }
    }
}
