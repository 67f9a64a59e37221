use anyhow::Result;
use plisio_api::types::{Currency, Envelope, FiatCurrency};
use serde::Serialize;
use serde_json::Value;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize, Debug, PartialEq)]
struct FieldRow {
    #[tabled(rename = "Field")]
    #[serde(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

#[derive(Tabled, Serialize)]
pub struct CurrencyRow {
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Kind")]
    #[serde(rename = "Kind")]
    kind: String,
}

// -- Row builders --

/// Flattens the envelope's `data` into one row per scalar leaf. Nested keys
/// are joined with `.`, array elements are addressed as `[i]`.
fn build_field_rows(response: &Value) -> Vec<FieldRow> {
    let data = match Envelope::<Value>::from_value(response.clone()) {
        Ok(envelope) => envelope.data,
        Err(_) => response.clone(),
    };
    let mut rows = Vec::new();
    flatten("", &data, &mut rows);
    rows
}

fn flatten(prefix: &str, value: &Value, rows: &mut Vec<FieldRow>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                let field = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&field, child, rows);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (i, child) in items.iter().enumerate() {
                flatten(&format!("{}[{}]", prefix, i), child, rows);
            }
        }
        scalar => rows.push(FieldRow {
            field: prefix.to_string(),
            value: format_scalar(scalar),
        }),
    }
}

fn format_scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn build_currency_rows(include_fiat: bool) -> Vec<CurrencyRow> {
    let crypto = Currency::ALL.iter().map(|c| CurrencyRow {
        code: c.code().to_string(),
        name: c.description().to_string(),
        kind: "crypto".to_string(),
    });
    let fiat = FiatCurrency::ALL
        .iter()
        .filter(|_| include_fiat)
        .map(|c| CurrencyRow {
            code: c.code().to_string(),
            name: c.description().to_string(),
            kind: "fiat".to_string(),
        });
    crypto.chain(fiat).collect()
}

// -- Printing --

/// Prints an API response in the chosen format. JSON keeps the whole
/// response; the tabular formats show its `data` only.
pub fn print_response(response: &Value, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(response);
            Ok(())
        }
        _ => print_rows(&build_field_rows(response), format),
    }
}

pub fn print_rows<T: Tabled + Serialize>(rows: &[T], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(&rows),
    }
    Ok(())
}

pub fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
