// Service endpoints (public list plus admin management)
use reqwest::Method;

use super::envelope::acknowledgement;
use super::{ApiClient, ApiError};
use crate::models::{ApiMessage, Service, ServiceForm};

impl ApiClient {
    pub async fn list_services(&self) -> Result<Vec<Service>, ApiError> {
        self.get_collection("/auth/services").await
    }

    /// Admin listing; requires an admin token
    pub async fn list_admin_services(&self) -> Result<Vec<Service>, ApiError> {
        self.get_collection("/auth/services/admin").await
    }

    pub async fn add_service(&self, form: &ServiceForm) -> Result<ApiMessage, ApiError> {
        form.validate()?;
        let payload = self.send(Method::POST, "/auth/services/add", form).await?;
        acknowledgement(payload)
    }

    pub async fn update_service(&self, id: &str, form: &ServiceForm) -> Result<ApiMessage, ApiError> {
        form.validate()?;
        let payload = self
            .send(Method::PUT, &format!("/auth/services/update/{}", id), form)
            .await?;
        acknowledgement(payload)
    }

    pub async fn delete_service(&self, id: &str) -> Result<ApiMessage, ApiError> {
        let payload = self
            .request(Method::DELETE, &format!("/auth/services/delete/{}", id), None)
            .await?;
        acknowledgement(payload)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::client::test_support::client_for;
    use crate::api::ApiError;
    use crate::models::ServiceForm;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[tokio::test]
    async fn test_admin_services_use_admin_route() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/auth/services/admin")
            .match_header("authorization", "Bearer admin-tok")
            .with_status(200)
            .with_body(r#"[{"_id":"s1","serviceName":"AMC","price":4999}]"#)
            .create_async()
            .await;

        let test = client_for(server.url(), Some("admin-tok"));
        let services = test.client.list_admin_services().await.unwrap();

        mock.assert_async().await;
        assert_eq!(services[0].price.as_deref(), Some("4999"));
    }

    #[tokio::test]
    async fn test_update_service_sends_form() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", "/auth/services/update/s1")
            .match_body(Matcher::Json(json!({
                "serviceName": "Installation",
                "description": "On-site setup",
                "price": "On request"
            })))
            .with_status(200)
            .with_body(r#"{"success":true,"message":"Service updated"}"#)
            .create_async()
            .await;

        let test = client_for(server.url(), Some("tok"));
        let form = ServiceForm {
            service_name: "Installation".to_string(),
            description: "On-site setup".to_string(),
            price: "On request".to_string(),
        };
        let ack = test.client.update_service("s1", &form).await.unwrap();

        mock.assert_async().await;
        assert_eq!(ack.message.as_deref(), Some("Service updated"));
    }

    #[tokio::test]
    async fn test_add_service_requires_name_and_description() {
        let server = Server::new_async().await;
        let test = client_for(server.url(), Some("tok"));

        let form = ServiceForm {
            service_name: "AMC".to_string(),
            ..Default::default()
        };
        let err = test.client.add_service(&form).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Validation("Please fill in all required fields".to_string())
        );
    }

    #[tokio::test]
    async fn test_delete_service_401_ends_session() {
        let mut server = Server::new_async().await;
        server
            .mock("DELETE", "/auth/services/delete/s1")
            .with_status(401)
            .create_async()
            .await;

        let test = client_for(server.url(), Some("stale"));
        let err = test.client.delete_service("s1").await.unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(err.message(), "Request failed with status code 401");
        assert_eq!(test.expired_count(), 1);
    }
}
