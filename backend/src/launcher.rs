//! Hands dispatch requests to the operating system.
//!
//! Opening a `whatsapp://` link starts the desktop application with the chat
//! and message prefilled; the user still presses send there. Nothing is
//! reported back, so a launch failure is only logged.

use std::thread;

use common::{DispatchRequest, DispatchSink};
use log::{info, warn};

/// Opens each request's deep link with the default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserLauncher;

impl DispatchSink for BrowserLauncher {
    fn dispatch(&self, request: &DispatchRequest) {
        let link = request.deep_link();
        let phone = request.phone.clone();
        // webbrowser blocks until the handler is spawned; keep it off the worker.
        thread::spawn(move || match webbrowser::open(&link) {
            Ok(()) => info!("opened messaging link for {}", phone),
            Err(e) => warn!("could not open messaging link for {}: {}", phone, e),
        });
    }
}
