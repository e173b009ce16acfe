//! Row edit state and the member table.

mod state;
mod table;


pub use state::{Control, EditingRow, LockedRow, RowControls};
pub use table::{MemberTable, TableRow};
