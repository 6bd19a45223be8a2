// Public contact form
use reqwest::Method;

use super::envelope::acknowledgement;
use super::{ApiClient, ApiError};
use crate::models::{ApiMessage, EnquiryForm};

impl ApiClient {
    /// Submit an enquiry. A `success: false` reply is returned as
    /// [`ApiError::Rejected`] with the backend's message.
    pub async fn submit_enquiry(&self, form: &EnquiryForm) -> Result<ApiMessage, ApiError> {
        form.validate()?;
        let payload = self.send(Method::POST, "/auth/contact", form).await?;
        let ack = acknowledgement(payload)?;
        log::info!("Enquiry submitted for {}", form.email.trim());
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::client::test_support::client_for;
    use crate::api::ApiError;
    use crate::models::EnquiryForm;
    use mockito::Server;

    fn form() -> EnquiryForm {
        EnquiryForm {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone_number: "5551234".to_string(),
            subject: "Quote".to_string(),
            message: "Need 4 cameras".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_enquiry_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/contact")
            .with_status(201)
            .with_body(r#"{"success":true,"message":"Thank you for contacting us"}"#)
            .create_async()
            .await;

        let test = client_for(server.url(), None);
        let ack = test.client.submit_enquiry(&form()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(ack.message.as_deref(), Some("Thank you for contacting us"));
    }

    #[tokio::test]
    async fn test_submit_enquiry_rejected() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/auth/contact")
            .with_status(200)
            .with_body(r#"{"success":false,"message":"Please try again later"}"#)
            .create_async()
            .await;

        let test = client_for(server.url(), None);
        let err = test.client.submit_enquiry(&form()).await.unwrap_err();
        assert_eq!(err, ApiError::Rejected("Please try again later".to_string()));
    }

    #[tokio::test]
    async fn test_invalid_email_is_not_sent() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/contact")
            .expect(0)
            .create_async()
            .await;

        let test = client_for(server.url(), None);
        let mut bad = form();
        bad.email = "not-an-address".to_string();

        let err = test.client.submit_enquiry(&bad).await.unwrap_err();
        assert_eq!(err.message(), "Please enter a valid email address");
        mock.assert_async().await;
    }
}
