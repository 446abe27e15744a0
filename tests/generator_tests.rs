//! End-to-end tests for template generation against a mock data source

use std::cell::RefCell;
use std::io::Read;
use std::path::Path;

use obm_metadata_templates::{
    DataSource, GenerateError, MetadataTemplateGenerator, ObmError, RemoteTable,
    TABLE_METADATA_FILE, VARIABLE_METADATA_FILE,
};

/// Data source returning a fixed column list, recording every query.
struct FixedSource {
    columns: Vec<&'static str>,
    queries: RefCell<Vec<String>>,
}

impl FixedSource {
    fn new(columns: &[&'static str]) -> Self {
        Self {
            columns: columns.to_vec(),
            queries: RefCell::new(Vec::new()),
        }
    }
}

impl DataSource for FixedSource {
    fn get_data(&self, _projection: &str, table: &str) -> Result<RemoteTable, ObmError> {
        self.queries.borrow_mut().push(table.to_string());
        Ok(RemoteTable::new(
            self.columns.iter().map(|c| c.to_string()).collect(),
            Vec::new(),
        ))
    }
}

/// Data source rejecting every query, as for an unknown table.
struct FailingSource;

impl DataSource for FailingSource {
    fn get_data(&self, _projection: &str, table: &str) -> Result<RemoteTable, ObmError> {
        Err(ObmError::Query(format!("No such table: {}", table)))
    }
}

/// Extract one entry of a written xlsx archive as a string.
fn read_zip_entry(path: &Path, name: &str) -> String {
    let file = std::fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut content = String::new();
    entry.read_to_string(&mut content).unwrap();
    content
}

#[test]
fn test_behaviour_scenario_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let source = FixedSource::new(&["obm_id", "species", "year", "obm_geometry", "habitat"]);
    let generator = MetadataTemplateGenerator::new()
        .with_schema("vebc")
        .with_output_dir(dir.path());

    let templates = generator.generate(&source, "Behaviour").unwrap();

    assert_eq!(*source.queries.borrow(), vec!["vebc.Behaviour"]);
    assert_eq!(templates.table.table_name, "Behaviour");
    assert!(templates.table.table_owner.is_empty());

    let names: Vec<&str> = templates
        .variables
        .iter()
        .map(|v| v.variable_name.as_str())
        .collect();
    assert_eq!(names, vec!["species", "year", "habitat"]);

    assert!(dir.path().join(TABLE_METADATA_FILE).exists());
    assert!(dir.path().join(VARIABLE_METADATA_FILE).exists());
}

#[test]
fn test_table_metadata_sheet_structure() {
    let dir = tempfile::tempdir().unwrap();
    let source = FixedSource::new(&["obm_id", "species", "year", "obm_geometry", "habitat"]);
    let generator = MetadataTemplateGenerator::new()
        .with_schema("vebc")
        .with_output_dir(dir.path());
    generator.generate(&source, "Behaviour").unwrap();

    let path = dir.path().join(TABLE_METADATA_FILE);
    let workbook = read_zip_entry(&path, "xl/workbook.xml");
    assert!(workbook.contains(r#"name="metadata""#));

    let sheet = read_zip_entry(&path, "xl/worksheets/sheet1.xml");
    // Header row + one data row.
    assert_eq!(sheet.matches("<row ").count(), 2);
    // species_var and population_var share the same filtered-column list.
    assert_eq!(sheet.matches("species,year,habitat").count(), 2);
    // The two static dropdowns are present too.
    assert_eq!(sheet.matches("<dataValidation ").count(), 4);
}

#[test]
fn test_variable_metadata_sheet_structure() {
    let dir = tempfile::tempdir().unwrap();
    let source = FixedSource::new(&["obm_id", "species", "year", "obm_geometry", "habitat"]);
    let generator = MetadataTemplateGenerator::new()
        .with_schema("vebc")
        .with_output_dir(dir.path());
    generator.generate(&source, "Behaviour").unwrap();

    let path = dir.path().join(VARIABLE_METADATA_FILE);
    let workbook = read_zip_entry(&path, "xl/workbook.xml");
    assert!(workbook.contains(r#"name="variable_metadata""#));
    assert!(workbook.contains(r#"name="category""#));

    // Header row + one row per filtered column.
    let variables = read_zip_entry(&path, "xl/worksheets/sheet1.xml");
    assert_eq!(variables.matches("<row ").count(), 4);
    assert_eq!(variables.matches("<dataValidation ").count(), 2);

    // Header row + 10 var_category rows + 5 var_type rows.
    let category = read_zip_entry(&path, "xl/worksheets/sheet2.xml");
    assert_eq!(category.matches("<row ").count(), 16);

    let strings = read_zip_entry(&path, "xl/sharedStrings.xml");
    assert!(strings.contains("species"));
    assert!(strings.contains("var_category"));
    assert!(strings.contains("Taxonomic identifiers"));
}

#[test]
fn test_failed_query_writes_no_files() {
    let dir = tempfile::tempdir().unwrap();
    let generator = MetadataTemplateGenerator::new().with_output_dir(dir.path());

    let result = generator.generate(&FailingSource, "Missing");
    match result {
        Err(GenerateError::Source(ObmError::Query(message))) => {
            assert!(message.contains("sex_ratio_evolution.Missing"));
        }
        other => panic!("Expected a query error, got {:?}", other),
    }

    assert!(!dir.path().join(TABLE_METADATA_FILE).exists());
    assert!(!dir.path().join(VARIABLE_METADATA_FILE).exists());
}

#[test]
fn test_rerun_overwrites_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    let source = FixedSource::new(&["obm_id", "species", "year"]);
    let generator = MetadataTemplateGenerator::new()
        .with_schema("vebc")
        .with_output_dir(dir.path());

    generator.generate(&source, "Behaviour").unwrap();
    let first = generator.generate(&source, "Behaviour").unwrap();

    assert_eq!(first.variables.len(), 2);
    assert_eq!(source.queries.borrow().len(), 2);
    assert!(dir.path().join(TABLE_METADATA_FILE).exists());
    assert!(dir.path().join(VARIABLE_METADATA_FILE).exists());
}

#[test]
fn test_table_with_only_system_columns() {
    let dir = tempfile::tempdir().unwrap();
    let source = FixedSource::new(&["obm_id", "obm_geometry"]);
    let generator = MetadataTemplateGenerator::new()
        .with_schema("vebc")
        .with_output_dir(dir.path());

    let templates = generator.generate(&source, "Empty").unwrap();
    assert!(templates.variables.is_empty());

    // Both files are still written; the variable sheet is header-only.
    let path = dir.path().join(VARIABLE_METADATA_FILE);
    let variables = read_zip_entry(&path, "xl/worksheets/sheet1.xml");
    assert_eq!(variables.matches("<row ").count(), 1);
    assert_eq!(variables.matches("<dataValidation ").count(), 0);
}
