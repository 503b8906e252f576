//! WASM bindings for roster-diagram.
//!
//! Exposes `render` and `renderWithOptions` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::{AppConfig, OutputFormat};

fn split_list(list: &str) -> Vec<&str> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Render the selected days and lines of a CSV table as Unicode text.
///
/// `days` and `lines` are comma-separated labels.
#[wasm_bindgen]
pub fn render(csv: &str, days: &str, lines: &str) -> Result<String, JsError> {
    crate::render_csv(csv, &split_list(days), &split_list(lines), &AppConfig::default())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Render with full control over options.
///
/// - `unicode`: true for Unicode box-drawing chars, false for plain ASCII
/// - `format`: "ascii", "svg" or "json"
#[wasm_bindgen(js_name = "renderWithOptions")]
pub fn render_with_options(
    csv: &str,
    days: &str,
    lines: &str,
    unicode: bool,
    format: &str,
) -> Result<String, JsError> {
    let mut config = AppConfig::default();
    config.render.unicode = unicode;
    config.render.format = match format {
        "" | "ascii" => OutputFormat::Ascii,
        "svg" => OutputFormat::Svg,
        "json" => OutputFormat::Json,
        other => {
            return Err(JsError::new(&format!(
                "Unknown format '{other}'; use ascii, svg or json"
            )));
        }
    };
    crate::render_csv(csv, &split_list(days), &split_list(lines), &config)
        .map_err(|e| JsError::new(&e.to_string()))
}
