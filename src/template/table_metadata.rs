//! Table-level metadata template
//!
//! One "metadata" sheet: the 10 fixed headers, a single mostly-blank data row
//! and dropdowns on the four constrained fields. `species_var` and
//! `population_var` both offer the same list, the filtered source columns.

use std::path::Path;

use rust_xlsxwriter::{DataValidation, Workbook};
use tracing::info;

use super::{header_format, TemplateError};
use crate::models::{
    TableMetadataRecord, DATA_TYPE_OPTIONS, FOCUS_GROUP_OPTIONS, TABLE_METADATA_HEADERS,
};

/// Output file name, relative to the generator's output directory.
pub const TABLE_METADATA_FILE: &str = "table_metadata.xlsx";

// Positions of the dropdown-constrained fields in TABLE_METADATA_HEADERS.
const FOCUS_GROUP_COL: u16 = 3;
const DATA_TYPE_COL: u16 = 4;
const SPECIES_VAR_COL: u16 = 6;
const POPULATION_VAR_COL: u16 = 7;

/// Write `table_metadata.xlsx` into `dir`.
///
/// `column_names` is the filtered source column list; it becomes the dropdown
/// source for both `species_var` and `population_var`.
pub fn write_table_metadata(
    dir: &Path,
    record: &TableMetadataRecord,
    column_names: &[String],
) -> Result<(), TemplateError> {
    let mut workbook = Workbook::new();
    let header = header_format();

    let worksheet = workbook.add_worksheet().set_name("metadata")?;
    for (col, name) in TABLE_METADATA_HEADERS.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *name, &header)?;
    }
    for (col, value) in record.fields().iter().enumerate() {
        worksheet.write(1, col as u16, *value)?;
    }

    let focus_group = DataValidation::new().allow_list_strings(&FOCUS_GROUP_OPTIONS)?;
    worksheet.add_data_validation(1, FOCUS_GROUP_COL, 1, FOCUS_GROUP_COL, &focus_group)?;

    let data_type = DataValidation::new().allow_list_strings(&DATA_TYPE_OPTIONS)?;
    worksheet.add_data_validation(1, DATA_TYPE_COL, 1, DATA_TYPE_COL, &data_type)?;

    if !column_names.is_empty() {
        let variables = DataValidation::new().allow_list_strings(column_names)?;
        worksheet.add_data_validation(1, SPECIES_VAR_COL, 1, SPECIES_VAR_COL, &variables)?;
        worksheet.add_data_validation(1, POPULATION_VAR_COL, 1, POPULATION_VAR_COL, &variables)?;
    }

    worksheet.autofit();

    let path = dir.join(TABLE_METADATA_FILE);
    workbook.save(&path).map_err(|source| TemplateError::FileWrite {
        path: path.display().to_string(),
        source,
    })?;
    info!("Created {}", TABLE_METADATA_FILE);
    Ok(())
}
