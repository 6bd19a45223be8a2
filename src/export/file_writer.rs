// Export - File output
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::csv_table::{enquiry_columns, to_csv_with_style, CsvStyle};
use crate::models::Enquiry;

/// File name of the enquiry export
pub const ENQUIRY_EXPORT_FILENAME: &str = "enquiries.csv";

/// Write the enquiry export into `output_dir` and return the written path
pub fn write_enquiries_csv(
    output_dir: &Path,
    enquiries: &[Enquiry],
    style: CsvStyle,
) -> Result<PathBuf> {
    if !output_dir.exists() {
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create export directory {:?}", output_dir))?;
    }

    let csv = to_csv_with_style(enquiries, &enquiry_columns(), style)?;
    let file_path = output_dir.join(ENQUIRY_EXPORT_FILENAME);
    std::fs::write(&file_path, csv)
        .with_context(|| format!("Failed to write {:?}", file_path))?;

    log::info!("Exported {} enquiries to {:?}", enquiries.len(), file_path);
    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_writes_enquiries_csv() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("exports");

        let mut enquiry = Enquiry::new("e1", "Lena");
        enquiry.message = Some("Call me, please".to_string());

        let path = write_enquiries_csv(&target, &[enquiry], CsvStyle::Legacy).unwrap();
        assert_eq!(path.file_name().unwrap(), "enquiries.csv");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Name,Email,Phone,Subject,Message,Date\nLena,,,,Call me; please,"
        );
    }
}
