//! Commands for company services

use crate::catalog::{filter, FilterCriteria};
use crate::models::{ApiMessage, Service, ServiceForm};
use crate::state::AppState;

/// List services; `admin` uses the admin listing
pub async fn service_list(
    state: &AppState,
    admin: bool,
    search: Option<String>,
) -> Result<Vec<Service>, String> {
    let services = if admin {
        state.api().list_admin_services().await
    } else {
        state.api().list_services().await
    }
    .map_err(|e| e.to_string())?;

    let criteria = match search {
        Some(term) => FilterCriteria::new().with_term(term),
        None => FilterCriteria::new(),
    };
    Ok(filter(Some(services.as_slice()), &criteria))
}

pub async fn service_add(
    state: &AppState,
    name: String,
    description: String,
    price: Option<String>,
) -> Result<ApiMessage, String> {
    let form = ServiceForm {
        service_name: name,
        description,
        price: price.unwrap_or_default(),
    };

    state.api().add_service(&form).await.map_err(|e| e.to_string())
}

/// Update a service; fields not given keep their current values
pub async fn service_update(
    state: &AppState,
    id: String,
    name: Option<String>,
    description: Option<String>,
    price: Option<String>,
) -> Result<ApiMessage, String> {
    let services = state
        .api()
        .list_admin_services()
        .await
        .map_err(|e| e.to_string())?;
    let current = services
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| format!("Service not found: {}", id))?;

    let mut form = ServiceForm::from_service(current);
    if let Some(name) = name {
        form.service_name = name;
    }
    if let Some(description) = description {
        form.description = description;
    }
    if let Some(price) = price {
        form.price = price;
    }

    state
        .api()
        .update_service(&id, &form)
        .await
        .map_err(|e| e.to_string())
}

pub async fn service_delete(state: &AppState, id: String) -> Result<ApiMessage, String> {
    state
        .api()
        .delete_service(&id)
        .await
        .map_err(|e| e.to_string())
}
