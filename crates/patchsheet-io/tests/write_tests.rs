use patchsheet_core::{compose, PatchBatch, PatchSession, SheetSchema};
use patchsheet_io::{output_path, write_sheet, IoError, SheetStyle};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;

fn session() -> PatchSession {
    let mut session = PatchSession::new();
    session
        .submit_batch(
            &PatchBatch::new("Martin", "MAC Viper Profile", 34, 1, 1, 4)
                .with_fixture_numbers(101)
                .with_position("LX1"),
        )
        .unwrap();
    session
        .submit_batch(&PatchBatch::new("ETC", "ColorSource PAR", 5, 2, 1, 6).with_notes("Direct mode"))
        .unwrap();
    session
}

#[test]
fn test_write_default_schema() {
    let dir = TempDir::new().unwrap();
    let path = output_path(dir.path(), "Main Rig");
    let sheet = compose(session().fixtures(), &SheetSchema::default());

    write_sheet(&sheet, "Main Rig", &path, &SheetStyle::default()).unwrap();

    let bytes = fs::read(&path).unwrap();
    // xlsx is a zip container
    assert!(bytes.starts_with(b"PK"));
}

fn read_part(path: &Path, name: &str) -> String {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut xml = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    xml
}

fn attr<'a>(element: &'a str, name: &str) -> &'a str {
    let start = element.find(&format!("{}=\"", name)).unwrap() + name.len() + 2;
    let len = element[start..].find('"').unwrap();
    &element[start..start + len]
}

/// Width written for a zero-based column, looked up across `<col>` ranges
fn written_width(xml: &str, col: usize) -> f64 {
    let n = col + 1;
    xml.split("<col ")
        .skip(1)
        .map(|rest| &rest[..rest.find("/>").unwrap()])
        .find(|element| {
            let min: usize = attr(element, "min").parse().unwrap();
            let max: usize = attr(element, "max").parse().unwrap();
            (min..=max).contains(&n)
        })
        .map(|element| attr(element, "width").parse().unwrap())
        .unwrap()
}

#[test]
fn test_worksheet_layout() {
    let dir = TempDir::new().unwrap();
    let path = output_path(dir.path(), "Main Rig");
    let sheet = compose(session().fixtures(), &SheetSchema::default());

    write_sheet(&sheet, "Main Rig", &path, &SheetStyle::default()).unwrap();

    let workbook = read_part(&path, "xl/workbook.xml");
    assert!(workbook.contains(r#"name="Main Rig""#));

    let xml = read_part(&path, "xl/worksheets/sheet1.xml");

    // Header row frozen
    assert!(xml.contains(r#"ySplit="1""#));
    assert!(xml.contains(r#"state="frozen""#));

    // Universe 1: label rows 2 and 7 around four fixtures,
    // universe 2: label rows 8 and 15 around six
    assert!(xml.contains(r#"<mergeCells count="4">"#));
    for range in ["A2:J2", "A7:J7", "A8:J8", "A15:J15"] {
        assert!(
            xml.contains(&format!(r#"<mergeCell ref="{}"/>"#, range)),
            "missing merge {}",
            range
        );
    }

    // "Universe 1" is the longest entry in the first column
    let widths = sheet.column_widths();
    assert_eq!(widths[0], 15);
    // The writer stores widths with a small pixel rounding on top
    for (col, width) in widths.iter().enumerate() {
        let written = written_width(&xml, col);
        assert!(
            written >= *width as f64 && written < *width as f64 + 1.0,
            "column {} written as {}, expected {}",
            col,
            written,
            width
        );
    }
}

#[test]
fn test_write_custom_schema() {
    let dir = TempDir::new().unwrap();
    let path = output_path(dir.path(), "Custom");
    let schema = SheetSchema::with_custom_columns(["Gel", "Template", "Circuit"]);
    let sheet = compose(session().fixtures(), &schema);

    write_sheet(&sheet, "Custom", &path, &SheetStyle::default()).unwrap();
    assert!(path.is_file());
}

#[test]
fn test_write_empty_session() {
    let dir = TempDir::new().unwrap();
    let path = output_path(dir.path(), "Empty");
    let sheet = compose(&[], &SheetSchema::default());

    write_sheet(&sheet, "Empty", &path, &SheetStyle::default()).unwrap();
    assert!(path.is_file());
}

#[test]
fn test_invalid_name_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.xlsx");
    let sheet = compose(session().fixtures(), &SheetSchema::default());

    let result = write_sheet(&sheet, "Act 1: Storm", &path, &SheetStyle::default());
    assert!(matches!(result, Err(IoError::InvalidSheetName { .. })));
    assert!(!path.exists());
}

#[test]
fn test_invalid_color_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.xlsx");
    let sheet = compose(session().fixtures(), &SheetSchema::default());
    let style = SheetStyle {
        label_color: "grey".to_string(),
        ..SheetStyle::default()
    };

    let result = write_sheet(&sheet, "Rig", &path, &style);
    assert!(matches!(result, Err(IoError::InvalidColor(_))));
    assert!(!path.exists());
}
