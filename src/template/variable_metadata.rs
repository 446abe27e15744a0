//! Variable-level metadata template
//!
//! Two sheets: "variable_metadata" with one row per surviving column and
//! dropdowns on `var_category` / `var_type`, and a static "category" sheet
//! listing every allowed value with its reference description.

use std::path::Path;

use rust_xlsxwriter::{DataValidation, Workbook};
use tracing::info;

use super::{header_format, TemplateError};
use crate::models::{
    category_reference_rows, VariableMetadataRecord, CATEGORY_SHEET_HEADERS, VAR_CATEGORY_OPTIONS,
    VARIABLE_METADATA_HEADERS, VAR_TYPE_OPTIONS,
};

/// Output file name, relative to the generator's output directory.
pub const VARIABLE_METADATA_FILE: &str = "variable_metadata.xlsx";

// Positions of the dropdown-constrained fields in VARIABLE_METADATA_HEADERS.
const VAR_CATEGORY_COL: u16 = 1;
const VAR_TYPE_COL: u16 = 3;

/// Write `variable_metadata.xlsx` into `dir`, one data row per record.
pub fn write_variable_metadata(
    dir: &Path,
    records: &[VariableMetadataRecord],
) -> Result<(), TemplateError> {
    let mut workbook = Workbook::new();
    let header = header_format();

    let worksheet = workbook.add_worksheet().set_name("variable_metadata")?;
    for (col, name) in VARIABLE_METADATA_HEADERS.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *name, &header)?;
    }
    for (idx, record) in records.iter().enumerate() {
        let row = idx as u32 + 1;
        for (col, value) in record.fields().iter().enumerate() {
            worksheet.write(row, col as u16, *value)?;
        }
    }

    if !records.is_empty() {
        let last_row = records.len() as u32;
        let category = DataValidation::new().allow_list_strings(&VAR_CATEGORY_OPTIONS)?;
        worksheet.add_data_validation(1, VAR_CATEGORY_COL, last_row, VAR_CATEGORY_COL, &category)?;
        let var_type = DataValidation::new().allow_list_strings(&VAR_TYPE_OPTIONS)?;
        worksheet.add_data_validation(1, VAR_TYPE_COL, last_row, VAR_TYPE_COL, &var_type)?;
    }
    worksheet.autofit();

    let reference = workbook.add_worksheet().set_name("category")?;
    for (col, name) in CATEGORY_SHEET_HEADERS.iter().enumerate() {
        reference.write_with_format(0, col as u16, *name, &header)?;
    }
    for (idx, row) in category_reference_rows().iter().enumerate() {
        let r = idx as u32 + 1;
        reference.write(r, 0, row.header)?;
        reference.write(r, 1, row.value)?;
        reference.write(r, 2, row.description)?;
    }
    reference.autofit();

    let path = dir.join(VARIABLE_METADATA_FILE);
    workbook.save(&path).map_err(|source| TemplateError::FileWrite {
        path: path.display().to_string(),
        source,
    })?;
    info!("Created {}", VARIABLE_METADATA_FILE);
    Ok(())
}
