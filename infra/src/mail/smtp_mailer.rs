//! SMTP mailer backed by an async lettre transport

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use ve_core::services::otp::MailerTrait;
use ve_shared::utils::email::mask_address;

use crate::config::MailConfig;

/// Production mailer dispatching verification codes over SMTP
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    platform_name: String,
}

impl SmtpMailer {
    /// Create an SMTP mailer from configuration
    ///
    /// Fails when the relay host or the from address does not parse;
    /// connectivity and credentials are only checked on first send.
    pub fn new(config: &MailConfig) -> Result<Self, String> {
        let creds = Credentials::new(config.smtp_user.clone(), config.smtp_pass.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| format!("invalid SMTP relay {}: {}", config.smtp_host, e))?
            .credentials(creds)
            .build();

        let from = config
            .from_address
            .parse::<Mailbox>()
            .map_err(|e| format!("invalid from address: {}", e))?;

        Ok(Self {
            transport,
            from,
            platform_name: config.platform_name.clone(),
        })
    }

    fn subject(&self) -> String {
        format!("{} verification code", self.platform_name)
    }

    fn body(&self, code: &str, expiry_minutes: i64) -> String {
        format!(
            "Your {} verification code is {}.\n\n\
             It expires in {} minutes. If you did not request this code, you can ignore this message.\n",
            self.platform_name, code, expiry_minutes
        )
    }
}

#[async_trait]
impl MailerTrait for SmtpMailer {
    async fn send_code(
        &self,
        address: &str,
        code: &str,
        expiry_minutes: i64,
    ) -> Result<String, String> {
        let to = address
            .parse::<Mailbox>()
            .map_err(|e| format!("invalid recipient address: {}", e))?;

        let email = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(self.subject())
            .header(ContentType::TEXT_PLAIN)
            .body(self.body(code, expiry_minutes))
            .map_err(|e| format!("failed to build message: {}", e))?;

        let response = self
            .transport
            .send(email)
            .await
            .map_err(|e| format!("SMTP dispatch failed: {}", e))?;

        tracing::info!(
            address = %mask_address(address),
            smtp_code = %response.code(),
            "Verification mail accepted by SMTP relay"
        );

        Ok(response.code().to_string())
    }
}
