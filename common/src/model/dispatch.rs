use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

/// Characters left unescaped in a query value, matching the browser's
/// `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The payload handed to the messaging application for one contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchRequest {
    /// Normalized, digits-only phone number.
    pub phone: String,
    /// The template expanded against the contact's row.
    pub message: String,
}

impl DispatchRequest {
    /// Deep link understood by the installed WhatsApp application.
    pub fn deep_link(&self) -> String {
        format!(
            "whatsapp://send?phone={}&text={}",
            self.phone,
            utf8_percent_encode(&self.message, COMPONENT)
        )
    }
}

/// Sent contacts over total contacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SendStatus {
    pub sent: usize,
    pub total: usize,
}

/// What the contact list shows for one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSummary {
    pub index: usize,
    /// Value of the name column, when bound and non-empty.
    pub display_name: Option<String>,
    /// Raw value of the phone column, when bound and non-empty.
    pub display_phone: Option<String>,
    pub sent: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_link_escapes_like_encode_uri_component() {
        let request = DispatchRequest {
            phone: "213551234567".to_string(),
            message: "Hi Sara & co (50% off)!".to_string(),
        };
        assert_eq!(
            request.deep_link(),
            "whatsapp://send?phone=213551234567&text=Hi%20Sara%20%26%20co%20(50%25%20off)!"
        );
    }

    #[test]
    fn deep_link_escapes_non_ascii_as_utf8() {
        let request = DispatchRequest {
            phone: "213551234567".to_string(),
            message: "سلام\n".to_string(),
        };
        assert_eq!(
            request.deep_link(),
            "whatsapp://send?phone=213551234567&text=%D8%B3%D9%84%D8%A7%D9%85%0A"
        );
    }
}
