use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;

pub mod table;

use table::{TableOptions, render_table};

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_value(&serde_json::to_value(value)?, TableOptions::from_env())),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Keep at most `limit` entries of every array, at any depth.
pub fn limit_lists(value: &mut Value, limit: usize) {
    match value {
        Value::Array(items) => {
            items.truncate(limit);
            items.iter_mut().for_each(|item| limit_lists(item, limit));
        }
        Value::Object(map) => map.values_mut().for_each(|item| limit_lists(item, limit)),
        _ => {}
    }
}

fn render_value(value: &Value, options: TableOptions) -> String {
    match value {
        Value::Array(items) => render_rows(items, options),
        Value::Object(map) => render_sections(map, options),
        scalar => cell(scalar),
    }
}

/// Scalars as one key/value table, then one titled table per nested list or
/// object, in field order.
fn render_sections(map: &Map<String, Value>, options: TableOptions) -> String {
    let scalars: Vec<Vec<String>> = map
        .iter()
        .filter(|(_, value)| !is_section(value))
        .map(|(key, value)| vec![key.clone(), cell(value)])
        .collect();

    let mut parts = Vec::new();
    if !scalars.is_empty() {
        parts.push(render_table(&["key", "value"], &scalars, options));
    }
    for (key, value) in map.iter().filter(|(_, value)| is_section(value)) {
        parts.push(format!("{key}\n{}", render_value(value, options)));
    }
    if parts.is_empty() {
        return String::from("(empty)");
    }
    parts.join("\n\n")
}

fn is_section(value: &Value) -> bool {
    match value {
        Value::Object(_) => true,
        Value::Array(items) => items.iter().any(Value::is_object),
        _ => false,
    }
}

fn render_rows(items: &[Value], options: TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !items.iter().all(Value::is_object) {
        let rows: Vec<Vec<String>> = items.iter().map(|item| vec![cell(item)]).collect();
        return render_table(&["value"], &rows, options);
    }

    let mut headers: Vec<&str> = Vec::new();
    for key in items.iter().filter_map(Value::as_object).flat_map(Map::keys) {
        if !headers.contains(&key.as_str()) {
            headers.push(key);
        }
    }
    let rows: Vec<Vec<String>> = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(*header).map_or_else(|| String::from("-"), cell))
                .collect()
        })
        .collect();
    render_table(&headers, &rows, options)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
