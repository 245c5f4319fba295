use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

pub fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        scalar => Ok(value_to_cell(&scalar)),
    }
}

fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .enumerate()
            .map(|(index, item)| vec![(index + 1).to_string(), value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&["#", "value"], &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.is_empty() => String::from("-"),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("; "),
        Value::Array(items) => format!("[{} items]", items.len()),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use gramma_core::entities::{GrammarResult, Stats};
    use pretty_assertions::assert_eq;

    use super::render;
    use crate::cli::OutputFormat;

    fn sample() -> GrammarResult {
        GrammarResult {
            sentence: "She go to school.".to_string(),
            ll1_valid: true,
            dependency_valid: false,
            language_tool_issues: vec!["agreement".to_string(), "tense".to_string()],
            is_grammatically_correct: false,
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&Stats::default(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["grammarScore"], 100);
        assert_eq!(parsed["totalChecks"], 0);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&sample(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        assert!(out.contains("\"dependency_valid\":false"));
    }

    #[test]
    fn table_render_for_object_lists_fields() {
        let out = render(&sample(), OutputFormat::Table).expect("table render should work");
        let first = out.lines().next().expect("header line");
        assert!(first.contains("key"));
        assert!(out.contains("sentence"));
        assert!(out.contains("agreement; tense"));
    }

    #[test]
    fn table_render_for_string_list_numbers_rows() {
        let items = vec!["Use goes".to_string(), "Add a comma".to_string()];
        let out = render(&items, OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].contains("Use goes"));
        assert!(lines[3].trim_start().starts_with('2'));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let items: Vec<GrammarResult> = Vec::new();
        assert_eq!(render(&items, OutputFormat::Table).unwrap(), "(no rows)");
    }
}
