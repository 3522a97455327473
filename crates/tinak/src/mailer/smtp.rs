use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use super::{AbstractMailer, Mail};
use crate::{config::SMTPSettings, Error, Result, Success};

/// Mailer backed by an SMTP relay
#[derive(Clone)]
pub struct SmtpMailer {
    transport: SmtpTransport,
    from: Mailbox,
    reply_to: Option<Mailbox>,
}

impl SmtpMailer {
    pub fn new(smtp: &SMTPSettings) -> Result<SmtpMailer> {
        let builder = if smtp.use_tls.unwrap_or(true) {
            SmtpTransport::starttls_relay(&smtp.host).map_err(|err| {
                error!("Invalid SMTP relay {}: {}", smtp.host, err);
                Error::InternalError
            })?
        } else {
            SmtpTransport::builder_dangerous(&smtp.host)
        };

        let builder = if let Some(port) = smtp.port {
            builder.port(port)
        } else {
            builder
        };

        let transport = builder
            .credentials(Credentials::new(
                smtp.username.clone(),
                smtp.password.clone(),
            ))
            .build();

        let from = smtp.from.parse().map_err(|_| {
            error!("Invalid SMTP sender address {}", smtp.from);
            Error::InternalError
        })?;

        let reply_to = match &smtp.reply_to {
            Some(reply_to) => Some(reply_to.parse().map_err(|_| {
                error!("Invalid SMTP reply-to address {}", reply_to);
                Error::InternalError
            })?),
            None => None,
        };

        Ok(SmtpMailer {
            transport,
            from,
            reply_to,
        })
    }
}

#[async_trait]
impl AbstractMailer for SmtpMailer {
    async fn send(&self, mail: Mail) -> Success {
        let to: Mailbox = mail.to.parse().map_err(|_| Error::EmailFailed)?;

        let builder = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(mail.subject);

        let builder = if let Some(reply_to) = &self.reply_to {
            builder.reply_to(reply_to.clone())
        } else {
            builder
        };

        let message = if let Some(html) = mail.html {
            builder.multipart(MultiPart::alternative_plain_html(mail.text, html))
        } else {
            builder.body(mail.text)
        }
        .map_err(|err| {
            error!("Failed to build email to {}: {}", mail.to, err);
            Error::EmailFailed
        })?;

        // lettre's SMTP transport blocks
        let transport = self.transport.clone();
        async_std::task::spawn_blocking(move || transport.send(&message))
            .await
            .map(|_| ())
            .map_err(|err| {
                error!("Failed to send email to {}! lettre error: {}", mail.to, err);
                Error::EmailFailed
            })
    }
}
