//! Binding of the "name" and "phone" roles to columns of the contact table.
//!
//! Roles are detected from column names the first time they can be, and from
//! then on change only through an explicit selection (or the configured
//! [`RoleBinding`] policy when the bound column is renamed or deleted).

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::RoleBinding;

/// Fragments that mark a column as holding the contact's name.
const NAME_TOKENS: &[&str] = &["name", "اسم", "الاسم", "إسم", "nom"];

/// Fragments that mark a column as holding the phone number.
const PHONE_TOKENS: &[&str] = &[
    "number", "phone", "رقم", "الرقم", "هاتف", "جوال", "موبايل", "tel",
];

/// First column whose lowercased name contains one of `tokens`.
fn detect(columns: &[String], tokens: &[&str]) -> Option<String> {
    columns
        .iter()
        .find(|col| {
            let lower = col.to_lowercase();
            tokens.iter().any(|t| lower.contains(t))
        })
        .cloned()
}

/// A selection coming from the page: only a current column binds the role,
/// anything else (including an empty string) unsets it.
fn selection(choice: Option<&str>, columns: &[String]) -> Option<String> {
    choice
        .filter(|c| columns.iter().any(|col| col == c))
        .map(str::to_string)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub name_column: Option<String>,
    pub phone_column: Option<String>,
}

impl RoleAssignment {
    /// Fills any unset role from the column names. Roles already bound stay as they are.
    pub fn resolve(&mut self, columns: &[String]) {
        if columns.is_empty() {
            return;
        }
        if self.name_column.is_none() {
            self.name_column = detect(columns, NAME_TOKENS);
            if let Some(col) = &self.name_column {
                info!("detected name column {:?}", col);
            }
        }
        if self.phone_column.is_none() {
            self.phone_column = detect(columns, PHONE_TOKENS);
            if let Some(col) = &self.phone_column {
                info!("detected phone column {:?}", col);
            }
        }
    }

    pub fn select_name(&mut self, choice: Option<&str>, columns: &[String]) {
        self.name_column = selection(choice, columns);
    }

    pub fn select_phone(&mut self, choice: Option<&str>, columns: &[String]) {
        self.phone_column = selection(choice, columns);
    }

    /// Applies `policy` after `old_name` was renamed to `new_name`.
    pub fn column_renamed(&mut self, policy: RoleBinding, old_name: &str, new_name: &str) {
        for role in [&mut self.name_column, &mut self.phone_column] {
            if role.as_deref() != Some(old_name) {
                continue;
            }
            match policy {
                RoleBinding::Keep => {}
                RoleBinding::Follow => *role = Some(new_name.to_string()),
                RoleBinding::Clear => *role = None,
            }
        }
    }

    /// Applies `policy` after `name` was deleted.
    pub fn column_deleted(&mut self, policy: RoleBinding, name: &str) {
        if policy == RoleBinding::Keep {
            return;
        }
        for role in [&mut self.name_column, &mut self.phone_column] {
            if role.as_deref() == Some(name) {
                *role = None;
            }
        }
    }
}
