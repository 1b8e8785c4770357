//! Integration tests for reading, totalling and exporting amount tables
//!
//! These tests drive the library and the CLI command layer end to end with
//! CSV files shaped like the expense and purchase tables of the admin site.

use cell_amounts::cli::Args;
use cell_amounts::commands::{self, render_summary};
use cell_amounts::input::{TableOptions, read_table};
use cell_amounts::numeric::{format_numeric_value, parse_numeric_string};
use cell_amounts::table::{sort_cells, summarize_column};
use cell_amounts::{AppConfig, CellSource, FormatConfig, NumericStringParser};
use clap::Parser;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

/// Purchase table with mixed notations, markup cells and a pending row
fn create_purchases_csv() -> NamedTempFile {
    let content = r#"fecha,concepto,cantidad,monto
2025-01-03,Papelería,2,"$1,234.56"
2025-01-07,Gasolina,1,"MXN 720 749.86"
2025-01-09,Proveedor europeo,3,"€1.234,56"
2025-01-12,Renta,1,"<span class=""badge"">$32,234.00</span>"
2025-01-15,Pendiente,0,Sin monto"#;

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_total_of_mixed_format_column() {
    let file = create_purchases_csv();
    let table = read_table(
        std::fs::File::open(file.path()).unwrap(),
        TableOptions {
            has_headers: true,
            ..TableOptions::default()
        },
    )
    .unwrap();

    let amounts = table.column(3).unwrap();
    let summary = summarize_column(&amounts, &NumericStringParser::default());

    let expected = 1234.56 + 720749.86 + 1234.56 + 32234.0;
    assert!((summary.total - expected).abs() < 1e-6);
    assert_eq!(summary.parsed, 4);
    assert_eq!(summary.unparsable, 1);

    colored::control::set_override(false);
    let rendered = render_summary(&summary, &AppConfig::default());
    assert!(rendered.starts_with("Total: $755,452.98"), "{}", rendered);
}

#[test]
fn test_sorting_column_by_amount() {
    let parser = NumericStringParser::default();
    let mut cells = vec![
        CellSource::text("$32,234.00"),
        CellSource::markup_with_order("<b>ver detalle</b>", "15.5"),
        CellSource::text("Sin monto"),
        CellSource::text("1.234,56"),
    ];
    sort_cells(&mut cells, &parser);

    let keys: Vec<f64> = cells
        .iter()
        .map(|c| cell_amounts::numeric_value_from_cell(c, &parser).unwrap_or(0.0))
        .collect();
    assert_eq!(keys, vec![0.0, 15.5, 1234.56, 32234.0]);
}

#[test]
fn test_export_command_writes_normalized_csv() {
    let file = create_purchases_csv();
    let output_dir = TempDir::new().unwrap();

    let args = Args::try_parse_from([
        "cell-amounts",
        "export",
        file.path().to_str().unwrap(),
        "--numeric-columns",
        "2,3",
        "--has-headers",
        "--name",
        "compras",
        "--output-dir",
        output_dir.path().to_str().unwrap(),
    ])
    .unwrap();

    let export_args = match args.command {
        Some(cell_amounts::cli::Commands::Export(export_args)) => export_args,
        other => panic!("unexpected command: {:?}", other),
    };

    let path = commands::run_export(&export_args, &AppConfig::default()).unwrap();
    let file_name = path.file_name().unwrap().to_str().unwrap().to_string();
    assert!(file_name.starts_with("compras-"));
    assert!(file_name.ends_with(".csv"));

    let written = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], r#""fecha","concepto","cantidad","monto""#);
    assert_eq!(lines[1], r#""2025-01-03","Papelería",2.00,1234.56"#);
    assert_eq!(lines[2], r#""2025-01-07","Gasolina",1.00,720749.86"#);
    assert_eq!(lines[3], r#""2025-01-09","Proveedor europeo",3.00,1234.56"#);
    assert_eq!(lines[4], r#""2025-01-12","Renta",1.00,32234.00"#);
    // Unparsable amount keeps its text
    assert_eq!(lines[5], r#""2025-01-15","Pendiente",0.00,"Sin monto""#);
}

#[test]
fn test_run_with_config_file() {
    let mut config_file = NamedTempFile::new().unwrap();
    writeln!(
        config_file,
        r#"{{"export": {{"separator": ";", "base_filename": "balances"}}}}"#
    )
    .unwrap();

    let config = commands::load_config(Some(config_file.path())).unwrap();
    assert_eq!(config.export.separator, ';');
    assert_eq!(config.export.base_filename, "balances");
    assert_eq!(config.format, FormatConfig::us());
}

#[test]
fn test_european_display_round_trip_over_table() {
    let eu = FormatConfig::european();
    for amount in [0.5, 12.5, 1234.56, 720749.86, -32234.0] {
        let text = format_numeric_value(Some(amount), &eu);
        let cell = CellSource::markup(format!("<td>{} €</td>", text));
        let parsed =
            cell_amounts::numeric_value_from_cell(&cell, &NumericStringParser::default()).unwrap();
        assert!((parsed - amount).abs() < 1e-9, "{} -> {}", text, parsed);
        assert_eq!(parse_numeric_string(&text), Some(parsed));
    }
}

#[test]
fn test_parse_command_runs() {
    let args = Args::try_parse_from(["cell-amounts", "parse", "$1.00", "-5", "abc"]).unwrap();
    assert!(commands::run(args).is_ok());
}

#[test]
fn test_total_command_rejects_missing_column() {
    let file = create_purchases_csv();
    let args = Args::try_parse_from([
        "cell-amounts",
        "total",
        file.path().to_str().unwrap(),
        "--column",
        "9",
        "--has-headers",
    ])
    .unwrap();

    let err = commands::run(args).unwrap_err();
    assert!(format!("{:#}", err).contains("Cannot total column 9"));
}
