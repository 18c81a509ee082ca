//! Sending one contact its message and tracking who has been messaged.
//!
//! A send expands the template for the row, normalizes the row's phone number,
//! hands a [`DispatchRequest`] to a [`DispatchSink`] and marks the row as sent.
//! The hand-off is fire-and-forget: nothing comes back from the sink, and a
//! resend of an already-sent row dispatches again without changing its status.

use log::info;

use crate::error::{Error, Result};
use crate::model::{ContactSummary, Dataset, DispatchRequest, Record, SendStatus};
use crate::phone::PhoneNormalizer;
use crate::roles::RoleAssignment;
use crate::template;

/// Receives dispatch requests, typically to open the messaging application.
pub trait DispatchSink {
    fn dispatch(&self, request: &DispatchRequest);
}

impl<F> DispatchSink for F
where
    F: Fn(&DispatchRequest),
{
    fn dispatch(&self, request: &DispatchRequest) {
        self(request)
    }
}

/// Result of a successful send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
    /// Snapshot with the row marked as sent.
    pub dataset: Dataset,
    pub request: DispatchRequest,
    /// False when the row had already been sent and this was a resend.
    pub first_send: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DispatchController {
    normalizer: PhoneNormalizer,
}

impl DispatchController {
    pub fn new(normalizer: PhoneNormalizer) -> Self {
        Self { normalizer }
    }

    pub fn send(
        &self,
        dataset: &Dataset,
        index: usize,
        template_text: &str,
        phone_column: Option<&str>,
        sink: &dyn DispatchSink,
    ) -> Result<SendOutcome> {
        let phone_column = phone_column.ok_or(Error::NoPhoneColumnSelected)?;
        let row = dataset.row(index)?;
        if !dataset.has_column(phone_column) {
            return Err(Error::NotFound {
                name: phone_column.to_string(),
            });
        }

        let message = template::expand(template_text, row, dataset.columns());
        let raw_phone = row.get(phone_column).unwrap_or("");
        if raw_phone.is_empty() {
            return Err(Error::MissingPhone {
                index,
                column: phone_column.to_string(),
            });
        }
        let phone = self.normalizer.normalize(raw_phone)?;

        let request = DispatchRequest { phone, message };
        sink.dispatch(&request);

        let first_send = !row.sent;
        let dataset = if first_send {
            dataset.set_sent(index, true)?
        } else {
            dataset.clone()
        };
        info!(
            "dispatched row {} to {} ({})",
            index,
            request.phone,
            if first_send { "first send" } else { "resend" }
        );

        Ok(SendOutcome {
            dataset,
            request,
            first_send,
        })
    }
}

pub fn aggregate_status(dataset: &Dataset) -> SendStatus {
    SendStatus {
        sent: dataset.rows().iter().filter(|r| r.sent).count(),
        total: dataset.len(),
    }
}

/// One entry per row for the contact list.
pub fn contact_summaries(dataset: &Dataset, roles: &RoleAssignment) -> Vec<ContactSummary> {
    let cell = |row: &Record, column: &Option<String>| {
        column
            .as_deref()
            .and_then(|c| row.get(c))
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    dataset
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| ContactSummary {
            index,
            display_name: cell(row, &roles.name_column),
            display_phone: cell(row, &roles.phone_column),
            sent: row.sent,
        })
        .collect()
}
