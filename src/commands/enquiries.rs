//! Commands for contact enquiries: public submission and admin review

use std::path::PathBuf;

use crate::catalog::{FilterCriteria, ListView};
use crate::export::{write_enquiries_csv, CsvStyle};
use crate::models::{ApiMessage, Enquiry, EnquiryForm};
use crate::state::AppState;

/// Enquiries matching `search` (name, email or phone)
pub async fn enquiry_list(state: &AppState, search: Option<String>) -> Result<Vec<Enquiry>, String> {
    let criteria = match search {
        Some(term) => FilterCriteria::new().with_term(term),
        None => FilterCriteria::new(),
    };

    let mut page: ListView<Enquiry> = ListView::with_criteria(criteria);
    let ticket = page.begin_load();
    let loaded = state.api().list_enquiries().await;

    match loaded {
        Ok(enquiries) => {
            page.apply_load(ticket, Some(enquiries));
            Ok(page.view().to_vec())
        }
        Err(e) => {
            page.apply_load(ticket, None);
            Err(e.to_string())
        }
    }
}

/// Export the (filtered) enquiries to `enquiries.csv` in `output_dir`
pub async fn enquiry_export(
    state: &AppState,
    output_dir: PathBuf,
    search: Option<String>,
    style: CsvStyle,
) -> Result<(PathBuf, usize), String> {
    let enquiries = enquiry_list(state, search).await?;

    let path = write_enquiries_csv(&output_dir, &enquiries, style)
        .map_err(|e| format!("{:#}", e))?;

    Ok((path, enquiries.len()))
}

/// Submit the public contact form
pub async fn enquiry_submit(state: &AppState, form: EnquiryForm) -> Result<ApiMessage, String> {
    state
        .api()
        .submit_enquiry(&form)
        .await
        .map_err(|e| e.to_string())
}
