//! Status notification over SMTP.
//!
//! One plain-text report per run, sent fire-and-forget to the configured
//! recipients: no delivery confirmation, no retry.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::info;

use crate::config::Settings;
use crate::error_handling::NotifyError;

const SUBJECT: &str = "Pipeline status report";
const PREAMBLE: &str = "This is an auto-generated email.";

/// Composes and sends the end-of-run status email.
pub struct EmailNotifier {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
    cc: Vec<Mailbox>,
}

impl EmailNotifier {
    /// Builds a notifier from startup settings.
    ///
    /// All addresses and the relay host come from configuration; parsing
    /// happens here so a bad address fails at startup, not after the run.
    pub fn from_settings(settings: &Settings) -> Result<Self, NotifyError> {
        let from = settings.from_address.parse::<Mailbox>()?;
        let to = settings.to_address.parse::<Mailbox>()?;
        let cc = settings
            .cc_addresses
            .iter()
            .map(|address| address.parse::<Mailbox>())
            .collect::<Result<Vec<_>, _>>()?;
        // Plaintext relay, matching the in-house SMTP hop this job reports
        // through.
        let mailer =
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(settings.smtp_relay.as_str())
                .build();
        Ok(EmailNotifier {
            mailer,
            from,
            to,
            cc,
        })
    }

    /// Builds the report message without sending it.
    pub fn compose(&self, message: &str) -> Result<Message, NotifyError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(SUBJECT);
        for cc in &self.cc {
            builder = builder.cc(cc.clone());
        }
        let body = format!("{PREAMBLE}\n\n{message}\n");
        Ok(builder.header(ContentType::TEXT_PLAIN).body(body)?)
    }

    /// Sends the report to the primary recipient and CC list.
    pub async fn send_report(&self, message: &str) -> Result<(), NotifyError> {
        let email = self.compose(message)?;
        self.mailer.send(email).await?;
        info!("status report sent to {}", self.to);
        Ok(())
    }
}
