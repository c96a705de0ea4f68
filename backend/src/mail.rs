use contracts::ContactRequest;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::info;

use crate::config::MailSettings;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("invalid mailbox: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("could not build message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("smtp error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// How accepted contact submissions reach the agency.
pub enum ContactDelivery {
    /// No inbox configured; the submission only shows up in the logs.
    LogOnly,
    Smtp {
        transport: AsyncSmtpTransport<Tokio1Executor>,
        from: Mailbox,
        inbox: Mailbox,
    },
}

impl ContactDelivery {
    pub fn from_settings(settings: Option<&MailSettings>) -> Result<Self, DeliveryError> {
        let Some(settings) = settings else {
            return Ok(Self::LogOnly);
        };

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.smtp.host)?;
        if let Some((username, password)) = &settings.smtp.credentials {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self::Smtp {
            transport: builder.build(),
            from: settings.from.parse()?,
            inbox: settings.inbox.parse()?,
        })
    }

    pub async fn deliver(
        &self,
        id: &str,
        received_at: &str,
        request: &ContactRequest,
    ) -> Result<(), DeliveryError> {
        match self {
            Self::LogOnly => {
                info!(submission_id = %id, "No contact inbox configured, submission kept in logs only");
                Ok(())
            }
            Self::Smtp { transport, from, inbox } => {
                let mut builder = Message::builder()
                    .from(from.clone())
                    .to(inbox.clone())
                    .subject(subject(request))
                    .header(ContentType::TEXT_PLAIN);
                // Replies go straight to the visitor when their address is usable.
                if let Ok(visitor) = format!("{} <{}>", request.name, request.email).parse::<Mailbox>() {
                    builder = builder.reply_to(visitor);
                }
                let message = builder.body(compose_body(id, received_at, request))?;
                transport.send(message).await?;
                info!(submission_id = %id, "Contact submission forwarded by email");
                Ok(())
            }
        }
    }
}

fn subject(request: &ContactRequest) -> String {
    format!("New enquiry: {} ({})", request.service.label(), request.name)
}

pub fn compose_body(id: &str, received_at: &str, request: &ContactRequest) -> String {
    format!(
        "Submission: {id}\nReceived: {received_at}\n\nName: {name}\nEmail: {email}\nPhone: {phone}\nService: {service}\nBudget: {budget}\n\n{message}\n",
        name = request.name,
        email = request.email,
        phone = request.phone.as_deref().unwrap_or("-"),
        service = request.service.label(),
        budget = request.budget.label(),
        message = request.message,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::{Budget, Service};

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            service: Service::SocialAds,
            budget: Budget::OverTwentyFiveK,
            message: "We need a launch campaign.".to_string(),
        }
    }

    #[test]
    fn test_body_lists_every_field() {
        let body = compose_body("abc", "2024-05-01T10:00:00+00:00", &request());
        assert!(body.starts_with("Submission: abc\nReceived: 2024-05-01T10:00:00+00:00\n"));
        assert!(body.contains("Phone: -\n"));
        assert!(body.contains("Service: Social Media Ads\n"));
        assert!(body.contains("Budget: $25,000+\n"));
        assert!(body.ends_with("We need a launch campaign.\n"));
    }

    #[test]
    fn test_subject_names_service_and_sender() {
        assert_eq!(subject(&request()), "New enquiry: Social Media Ads (Ada Lovelace)");
    }

    #[test]
    fn test_no_settings_means_log_only() {
        assert!(matches!(
            ContactDelivery::from_settings(None),
            Ok(ContactDelivery::LogOnly)
        ));
    }
}
