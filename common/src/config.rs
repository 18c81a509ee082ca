//! Messaging configuration shared by the core and the host.
//!
//! Every field has a default matching the tool's home region
//! (Algeria) and its Arabic interface, so an empty configuration file is valid.

use serde::{Deserialize, Serialize};

/// Labels written into the status column of a status-inclusive export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusLabels {
    pub yes: String,
    pub no: String,
}

impl Default for StatusLabels {
    fn default() -> Self {
        Self {
            yes: "نعم".to_string(),
            no: "لا".to_string(),
        }
    }
}

impl StatusLabels {
    pub fn label(&self, sent: bool) -> &str {
        if sent { &self.yes } else { &self.no }
    }

    /// Reads a status cell back. Accepts the `yes` label and a literal `true`.
    pub fn is_yes(&self, cell: &str) -> bool {
        let cell = cell.trim();
        cell == self.yes || cell.eq_ignore_ascii_case("true")
    }
}

/// Download file names for the two export variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportNames {
    pub plain: String,
    pub with_status: String,
}

impl Default for ExportNames {
    fn default() -> Self {
        Self {
            plain: "contacts.csv".to_string(),
            with_status: "contacts_status.csv".to_string(),
        }
    }
}

/// What happens to a bound role when its column is renamed or deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleBinding {
    /// The role keeps the old name and fails with `NotFound` at send time.
    #[default]
    Keep,
    /// Rename re-points the role; delete clears it.
    Follow,
    /// Rename or delete clears the role.
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagingConfig {
    /// Calling code that replaces a single leading local `0`.
    pub country_code: String,
    pub min_phone_digits: usize,
    pub status_labels: StatusLabels,
    pub export_names: ExportNames,
    pub default_template: String,
    /// Columns of the table created by the "new table" action.
    pub starter_columns: Vec<String>,
    pub role_binding: RoleBinding,
    /// Number of dataset snapshots kept for undo.
    pub history_limit: usize,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            country_code: "213".to_string(),
            min_phone_digits: 8,
            status_labels: StatusLabels::default(),
            export_names: ExportNames::default(),
            default_template: "السلام عليكم {name} 🌹".to_string(),
            starter_columns: vec!["الاسم".to_string(), "الرقم".to_string()],
            role_binding: RoleBinding::Keep,
            history_limit: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: MessagingConfig =
            serde_json::from_str(r#"{ "country_code": "33", "role_binding": "follow" }"#).unwrap();
        assert_eq!(config.country_code, "33");
        assert_eq!(config.role_binding, RoleBinding::Follow);
        assert_eq!(config.min_phone_digits, 8);
        assert_eq!(config.export_names.plain, "contacts.csv");
    }

    #[test]
    fn status_labels_read_back() {
        let labels = StatusLabels::default();
        assert!(labels.is_yes("نعم"));
        assert!(labels.is_yes(" TRUE "));
        assert!(!labels.is_yes("لا"));
        assert!(!labels.is_yes(""));
        assert_eq!(labels.label(true), "نعم");
    }
}
