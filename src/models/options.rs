//! Fixed dropdown option lists and the category reference sheet rows
//!
//! Descriptions are an explicit value-to-description mapping rather than a
//! positional convention, so reordering an option list cannot reassign a
//! description to the wrong value.

/// Allowed `focus_group` values on the "metadata" sheet.
pub const FOCUS_GROUP_OPTIONS: [&str; 10] = [
    "birds",
    "mammals",
    "reptiles",
    "amphibians",
    "fish",
    "insects",
    "other invertebrates",
    "plants",
    "multiple groups",
    "other",
];

/// Allowed `data_type` values on the "metadata" sheet.
pub const DATA_TYPE_OPTIONS: [&str; 3] = ["raw", "aggregated", "derived"];

/// Allowed `var_category` values on the "variable_metadata" sheet.
pub const VAR_CATEGORY_OPTIONS: [&str; 10] = [
    "sex ratio",
    "life history",
    "morphology",
    "behaviour",
    "genetics",
    "environment",
    "location",
    "taxonomy",
    "metadata",
    "method",
];

/// Allowed `var_type` values on the "variable_metadata" sheet.
pub const VAR_TYPE_OPTIONS: [&str; 5] = ["integer", "float", "text", "date", "boolean"];

/// Header row of the "category" reference sheet.
pub const CATEGORY_SHEET_HEADERS: [&str; 3] = ["header", "categories", "description"];

const CATEGORY_DESCRIPTIONS: [(&str, &str); 3] = [
    (
        "taxonomy",
        "Taxonomic identifiers such as species, genus or family names.",
    ),
    (
        "metadata",
        "Bookkeeping information about the record itself, e.g. observer, source or external identifiers.",
    ),
    (
        "method",
        "Details of the sampling or measurement protocol behind the recorded values.",
    ),
];

/// Reference description for a `var_category` value; empty when none exists.
pub fn category_description(value: &str) -> &'static str {
    CATEGORY_DESCRIPTIONS
        .iter()
        .find(|(candidate, _)| *candidate == value)
        .map(|(_, description)| *description)
        .unwrap_or("")
}

/// One row of the "category" reference sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReferenceRow {
    /// Which template column the value belongs to ("var_category" or "var_type").
    pub header: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

/// Rows of the "category" sheet: every `var_category` option followed by
/// every `var_type` option, 15 rows in total.
pub fn category_reference_rows() -> Vec<CategoryReferenceRow> {
    let mut rows = Vec::with_capacity(VAR_CATEGORY_OPTIONS.len() + VAR_TYPE_OPTIONS.len());
    for value in VAR_CATEGORY_OPTIONS {
        rows.push(CategoryReferenceRow {
            header: "var_category",
            value,
            description: category_description(value),
        });
    }
    for value in VAR_TYPE_OPTIONS {
        rows.push(CategoryReferenceRow {
            header: "var_type",
            value,
            description: "",
        });
    }
    rows
}
