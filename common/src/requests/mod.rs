//! Request payloads exchanged between the page and the host service.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Adds a column at the end of the table.
pub struct AddColumnRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameColumnRequest {
    pub old_name: String,
    pub new_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCellRequest {
    pub index: usize,
    pub column: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Inserts `{column}` at a textarea cursor given in UTF-16 code units.
pub struct InsertPlaceholderRequest {
    pub column: String,
    pub cursor: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
/// Role selection from the page. `None`, an empty string or a name that is
/// not a current column all unset the role.
pub struct RolesRequest {
    #[serde(default)]
    pub name_column: Option<String>,
    #[serde(default)]
    pub phone_column: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportQuery {
    #[serde(default)]
    pub status: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportQuery {
    /// Restore the send status from a trailing `sent` column.
    #[serde(default)]
    pub restore_status: bool,
}
