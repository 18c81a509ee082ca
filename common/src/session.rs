//! One user's working session: the contact table, its undo history, the role
//! bindings and the message template.
//!
//! Every successful table edit pushes a new snapshot onto the history and drops
//! any redo tail. A snapshot carries the role bindings that went with its
//! table, so undo and redo move both together. A failed edit returns the error
//! and changes nothing.

use log::debug;
use serde::Serialize;

use crate::codec;
use crate::config::MessagingConfig;
use crate::dispatch::{self, DispatchController, DispatchSink};
use crate::error::Result;
use crate::model::{ContactSummary, Dataset, DispatchRequest, SendStatus};
use crate::phone::PhoneNormalizer;
use crate::roles::RoleAssignment;
use crate::template;

/// Everything the page needs to render, in one serializable value.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub dataset: Dataset,
    pub roles: RoleAssignment,
    pub template: String,
    pub unknown_placeholders: Vec<String>,
    pub status: SendStatus,
    pub can_undo: bool,
    pub can_redo: bool,
}

#[derive(Debug, Clone, Default)]
struct Snapshot {
    dataset: Dataset,
    roles: RoleAssignment,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: MessagingConfig,
    controller: DispatchController,
    /// `history[history_index]` is the current snapshot.
    history: Vec<Snapshot>,
    history_index: usize,
    template: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(MessagingConfig::default())
    }
}

impl Session {
    pub fn new(config: MessagingConfig) -> Self {
        Self {
            controller: DispatchController::new(PhoneNormalizer::from_config(&config)),
            history: vec![Snapshot::default()],
            history_index: 0,
            template: config.default_template.clone(),
            config,
        }
    }

    fn current(&self) -> &Snapshot {
        &self.history[self.history_index]
    }

    pub fn dataset(&self) -> &Dataset {
        &self.current().dataset
    }

    pub fn roles(&self) -> &RoleAssignment {
        &self.current().roles
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            dataset: self.dataset().clone(),
            roles: self.roles().clone(),
            template: self.template.clone(),
            unknown_placeholders: template::unknown_placeholders(
                &self.template,
                self.dataset().columns(),
            ),
            status: self.status(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }

    fn commit(&mut self, dataset: Dataset, roles: RoleAssignment) {
        self.history.truncate(self.history_index + 1);
        self.history.push(Snapshot { dataset, roles });
        let limit = self.config.history_limit.max(1);
        if self.history.len() > limit {
            let excess = self.history.len() - limit;
            self.history.drain(..excess);
        }
        self.history_index = self.history.len() - 1;
    }

    /// Commits a table whose columns changed, detecting roles that are still unset.
    fn commit_columns(&mut self, dataset: Dataset, mut roles: RoleAssignment) {
        roles.resolve(dataset.columns());
        self.commit(dataset, roles);
    }

    /// Replaces the whole table, treating columns that disappeared like deletions.
    fn replace(&mut self, next: Dataset) {
        let mut roles = self.roles().clone();
        for name in self.dataset().columns().iter().filter(|c| !next.has_column(c)) {
            roles.column_deleted(self.config.role_binding, name);
        }
        self.commit_columns(next, roles);
    }

    pub fn add_column(&mut self, name: &str) -> Result<()> {
        let next = self.dataset().add_column(name)?;
        self.commit_columns(next, self.roles().clone());
        Ok(())
    }

    pub fn rename_column(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        let next = self.dataset().rename_column(old_name, new_name)?;
        let mut roles = self.roles().clone();
        roles.column_renamed(self.config.role_binding, old_name, new_name);
        self.commit_columns(next, roles);
        Ok(())
    }

    pub fn delete_column(&mut self, name: &str) -> Result<()> {
        let next = self.dataset().delete_column(name)?;
        let mut roles = self.roles().clone();
        roles.column_deleted(self.config.role_binding, name);
        self.commit_columns(next, roles);
        Ok(())
    }

    pub fn add_row(&mut self) -> Result<usize> {
        let next = self.dataset().add_row()?;
        let index = next.len() - 1;
        self.commit(next, self.roles().clone());
        Ok(index)
    }

    pub fn delete_row(&mut self, index: usize) -> Result<()> {
        let next = self.dataset().delete_row(index)?;
        self.commit(next, self.roles().clone());
        Ok(())
    }

    pub fn update_cell(&mut self, index: usize, column: &str, value: &str) -> Result<()> {
        let next = self.dataset().update_cell(index, column, value)?;
        self.commit(next, self.roles().clone());
        Ok(())
    }

    /// The "create new table" action.
    pub fn new_table(&mut self) -> Result<()> {
        let next = Dataset::starter(self.config.starter_columns.iter().cloned())?;
        self.replace(next);
        Ok(())
    }

    /// Empties the table and forgets the role bindings.
    pub fn clear(&mut self) {
        let next = self.dataset().clear();
        self.commit(next, RoleAssignment::default());
        debug!("session cleared");
    }

    pub fn import_csv(&mut self, text: &str) -> Result<()> {
        let next = codec::parse(text)?;
        self.replace(next);
        Ok(())
    }

    /// Imports an uploaded file, optionally restoring its status column.
    pub fn import_bytes(&mut self, bytes: &[u8], restore_status: bool) -> Result<()> {
        let text = codec::decode(bytes)?;
        if restore_status {
            self.restore_csv(text)
        } else {
            self.import_csv(text)
        }
    }

    /// Imports a status-inclusive export, restoring who was already messaged.
    pub fn restore_csv(&mut self, text: &str) -> Result<()> {
        let next = codec::parse_with_status(text, &self.config.status_labels)?;
        self.replace(next);
        Ok(())
    }

    pub fn export_csv(&self, include_status: bool) -> Result<String> {
        codec::serialize(self.dataset(), include_status, &self.config.status_labels)
    }

    pub fn export_file_name(&self, include_status: bool) -> &str {
        codec::export_file_name(include_status, &self.config.export_names)
    }

    pub fn can_undo(&self) -> bool {
        self.history_index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.history_index + 1 < self.history.len()
    }

    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.history_index -= 1;
        true
    }

    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.history_index += 1;
        true
    }

    pub fn set_template(&mut self, text: impl Into<String>) {
        self.template = text.into();
    }

    /// Inserts `{column}` into the template at a UTF-16 cursor and returns the
    /// cursor position after the inserted token.
    pub fn insert_placeholder(&mut self, column: &str, cursor_utf16: u32) -> u32 {
        let (text, cursor) = template::insert_placeholder(&self.template, column, cursor_utf16);
        self.template = text;
        cursor
    }

    /// Manual selections apply to the current snapshot and are not undo steps.
    pub fn select_name_column(&mut self, choice: Option<&str>) {
        let Snapshot { dataset, roles } = &mut self.history[self.history_index];
        roles.select_name(choice, dataset.columns());
    }

    pub fn select_phone_column(&mut self, choice: Option<&str>) {
        let Snapshot { dataset, roles } = &mut self.history[self.history_index];
        roles.select_phone(choice, dataset.columns());
    }

    /// Sends row `index` its message through `sink` and records it as sent.
    pub fn send(&mut self, index: usize, sink: &dyn DispatchSink) -> Result<DispatchRequest> {
        let outcome = self.controller.send(
            self.dataset(),
            index,
            &self.template,
            self.roles().phone_column.as_deref(),
            sink,
        )?;
        if outcome.first_send {
            self.commit(outcome.dataset, self.roles().clone());
        }
        Ok(outcome.request)
    }

    pub fn status(&self) -> SendStatus {
        dispatch::aggregate_status(self.dataset())
    }

    pub fn contacts(&self) -> Vec<ContactSummary> {
        dispatch::contact_summaries(self.dataset(), self.roles())
    }
}
