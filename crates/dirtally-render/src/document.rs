//! Standalone report page around a rendered tree fragment.

use indexmap::IndexMap;
use strum::IntoEnumIterator;

use dirtally_core::{DisplayUnit, SizeUnits};

use crate::markup::escape_html;

const STYLE: &str = r#"
      body { font-family: Calibri, sans-serif; }
      ul, #dirTree { list-style-type: none; }
      #dirTree { margin: 0; padding: 0; }
      .folder { cursor: pointer; user-select: none; }
      .folder::before { content: "\1F4C1"; display: inline-block; margin-right: 5px; }
      .folder-open::before { content: "\1F4C2"; }
      .folder.empty { cursor: default; }
      .file-icon::before { content: "\1F4C4"; display: inline-block; margin-right: 5px; }
      .nested { display: none; }
      .active { display: block; }
      .details td.label { text-align: right; font-weight: bold; }
"#;

const SCRIPT: &str = r#"
      function toggleFolder(id) {
        var element = document.getElementById(id);
        element.classList.toggle("active");
        element.previousElementSibling.classList.toggle("folder-open");
      }
      function toggleSizeFormat(unit) {
        ["bytes", "kb", "mb", "gb"].forEach(function (u) {
          document.querySelectorAll(".size-" + u).forEach(function (el) {
            el.style.display = u === unit ? "" : "none";
          });
        });
      }
"#;

/// A complete HTML page for one directory tree report.
#[derive(Debug, Clone)]
pub struct ReportDocument<'a> {
    title: &'a str,
    fragment: &'a str,
    details: Option<&'a IndexMap<String, String>>,
    totals: Option<(u64, SizeUnits)>,
    default_unit: DisplayUnit,
}

impl<'a> ReportDocument<'a> {
    /// Create a document around an already rendered tree fragment.
    pub fn new(title: &'a str, fragment: &'a str) -> Self {
        Self {
            title,
            fragment,
            details: None,
            totals: None,
            default_unit: DisplayUnit::default(),
        }
    }

    /// Header fields shown above the tree.
    pub fn with_details(mut self, details: &'a IndexMap<String, String>) -> Self {
        self.details = Some(details);
        self
    }

    /// File count and grand total shown above the tree.
    pub fn with_totals(mut self, file_count: u64, total: SizeUnits) -> Self {
        self.totals = Some((file_count, total));
        self
    }

    /// Unit preselected in the unit picker; should match the renderer's.
    pub fn with_default_unit(mut self, unit: DisplayUnit) -> Self {
        self.default_unit = unit;
        self
    }

    /// Assemble the page.
    pub fn to_html(&self) -> String {
        let title = escape_html(self.title);
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html>\n  <head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(&format!("    <title>{title}</title>\n"));
        html.push_str(&format!("    <style>{STYLE}    </style>\n"));
        html.push_str(&format!("    <script>{SCRIPT}    </script>\n"));
        html.push_str("  </head>\n  <body>\n");

        if let Some(details) = self.details.filter(|d| !d.is_empty()) {
            html.push_str("    <table class=\"details\">\n");
            for (label, value) in details {
                html.push_str(&format!(
                    "      <tr><td class=\"label\">{}:</td><td>{}</td></tr>\n",
                    escape_html(label),
                    escape_html(value)
                ));
            }
            html.push_str("    </table>\n");
        }

        if let Some((file_count, total)) = self.totals {
            html.push_str(&format!(
                "    <table class=\"totals\">\n      <tr><th>Total Files</th><th>Size (GB)</th></tr>\n      <tr><td>{file_count}</td><td>{:.4}</td></tr>\n    </table>\n",
                total.gb
            ));
        }

        html.push_str(&format!("    <h2>{title}</h2>\n"));
        html.push_str("    <h3>Size Type\n");
        html.push_str(
            "      <select id=\"sizeFormatDropdown\" onchange=\"toggleSizeFormat(this.value)\">\n",
        );
        for unit in DisplayUnit::iter() {
            let selected = if unit == self.default_unit {
                " selected"
            } else {
                ""
            };
            html.push_str(&format!(
                "        <option value=\"{unit}\"{selected}>{}</option>\n",
                unit.label()
            ));
        }
        html.push_str("      </select>\n    </h3>\n");

        html.push_str("    <ul id=\"dirTree\">\n");
        html.push_str(self.fragment);
        html.push_str("    </ul>\n  </body>\n</html>\n");
        html
    }
}
