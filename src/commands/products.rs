//! Commands for the product catalog

use crate::catalog::{FilterCriteria, FilterField, ListView};
use crate::models::{ApiMessage, Product, ProductForm};
use crate::state::AppState;

/// Filtered product list plus the filter options offered alongside it
#[derive(Debug, Clone)]
pub struct ProductListing {
    pub products: Vec<Product>,
    pub total: usize,
    pub categories: Vec<String>,
    pub brands: Vec<String>,
}

/// Fields of the product form given on the command line
#[derive(Debug, Clone, Default)]
pub struct ProductInput {
    pub name: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl ProductInput {
    /// Overlay the given fields on `form`
    pub fn apply_to(self, mut form: ProductForm) -> ProductForm {
        if let Some(name) = self.name {
            form.product_name = name;
        }
        if let Some(category) = self.category {
            form.category = category;
        }
        if let Some(brand) = self.brand {
            form.brand = brand;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(image) = self.image {
            form.image = image;
        }
        form
    }
}

/// Load the catalog and apply the filter criteria
pub async fn product_list(
    state: &AppState,
    criteria: FilterCriteria,
) -> Result<ProductListing, String> {
    let mut page: ListView<Product> = ListView::with_criteria(criteria);
    let ticket = page.begin_load();

    match state.api().list_products().await {
        Ok(products) => {
            page.apply_load(ticket, Some(products));
        }
        Err(e) => {
            page.apply_load(ticket, None);
            return Err(e.to_string());
        }
    }

    Ok(ProductListing {
        products: page.view().to_vec(),
        total: page.source().len(),
        categories: page.options(FilterField::Category),
        brands: page.options(FilterField::Brand),
    })
}

pub async fn product_get(state: &AppState, id: String) -> Result<Product, String> {
    state.api().get_product(&id).await.map_err(|e| e.to_string())
}

pub async fn product_create(state: &AppState, input: ProductInput) -> Result<ApiMessage, String> {
    let form = input.apply_to(ProductForm::default());
    state
        .api()
        .create_product(&form)
        .await
        .map_err(|e| e.to_string())
}

/// Update a product; fields not given keep their current values
pub async fn product_update(
    state: &AppState,
    id: String,
    input: ProductInput,
) -> Result<ApiMessage, String> {
    let current = state.api().get_product(&id).await.map_err(|e| e.to_string())?;
    let form = input.apply_to(ProductForm::from_product(&current));

    state
        .api()
        .update_product(&id, &form)
        .await
        .map_err(|e| e.to_string())
}

pub async fn product_delete(state: &AppState, id: String) -> Result<ApiMessage, String> {
    state
        .api()
        .delete_product(&id)
        .await
        .map_err(|e| e.to_string())
}
