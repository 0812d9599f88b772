//! Print-ready document rendering
//!
//! The export half of the dual renderer. Produces a self-contained HTML
//! page: document title, a two-column header table, the disclaimer line,
//! then one section per module instance in list order. The page carries its
//! own print stylesheet so the file prints as a paper source document with
//! no external assets.
//!
//! This function only renders; the export gate lives in `core::validator`
//! and is applied by the `export` module before anything reaches disk.

use crate::core::store::DocumentStore;
use crate::core::types::Prompt;
use crate::core::variant::VariantConfig;

use super::{document_sections, header_rows, Block};

/// Renders the full export document for a document store.
pub fn render_document(variant: &VariantConfig, store: &DocumentStore) -> String {
    let mut html = String::from(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
"#,
    );
    html.push_str(&format!("<title>{}</title>\n", escape(&variant.title)));
    html.push_str("<style>\n");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str(&format!("<h1>{}</h1>\n", escape(&variant.title)));

    html.push_str("<table class=\"header-table\">\n");
    for (label, value) in header_rows(variant, store) {
        html.push_str(&format!(
            "<tr><th>{}</th><td>{}</td></tr>\n",
            escape(&label),
            escape(&value)
        ));
    }
    html.push_str("</table>\n");

    html.push_str(&format!(
        "<p class=\"disclaimer\">{}</p>\n",
        escape(&variant.disclaimer)
    ));

    for section in document_sections(store) {
        html.push_str("<section>\n");
        html.push_str(&format!("<h2>{}</h2>\n", escape(&section.heading)));
        push_block(&mut html, &section.blocks);
        html.push_str("</section>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn push_block(html: &mut String, blocks: &[Block]) {
    for block in blocks {
        if let Some(label) = &block.label {
            html.push_str(&format!("<h3>{}</h3>\n", escape(label)));
        }
        for prompt in block.prompts {
            html.push_str(&prompt_html(prompt));
            html.push('\n');
        }
    }
}

/// The export serialization of one prompt.
///
/// Kept deliberately parallel to `preview::prompt_line`; both must present
/// the identical literal prompt text.
fn prompt_html(prompt: &Prompt) -> String {
    match prompt {
        Prompt::Field(text) => format!(
            "<p class=\"field\">{}: <span class=\"fill\"></span></p>",
            escape(text)
        ),
        Prompt::Checkbox(text) => format!("<p class=\"checkbox\">&#9744; {}</p>", escape(text)),
        Prompt::Note(text) => format!("<p class=\"note\">{}</p>", escape(text)),
        Prompt::Signature(text) => format!(
            "<p class=\"signature\">{} (signature / date): <span class=\"fill\"></span></p>",
            escape(text)
        ),
    }
}

/// Minimal HTML escaping for text content and attribute-free elements.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Inline stylesheet for screen and print.
const STYLE: &str = r#"body {
  font-family: "Helvetica Neue", Arial, sans-serif;
  color: #111;
  margin: 40px;
  line-height: 1.5;
}
h1 { font-size: 20px; border-bottom: 2px solid #111; padding-bottom: 6px; }
h2 { font-size: 16px; margin-top: 28px; border-bottom: 1px solid #444; }
h3 { font-size: 13px; margin-bottom: 4px; }
.header-table { border-collapse: collapse; width: 100%; margin-top: 12px; }
.header-table th {
  text-align: left;
  width: 200px;
  padding: 4px 8px;
  border: 1px solid #888;
  background: #f2f2f2;
  font-weight: 600;
}
.header-table td { padding: 4px 8px; border: 1px solid #888; }
.disclaimer { font-style: italic; font-size: 12px; margin-top: 12px; }
.field, .checkbox, .note, .signature { font-size: 13px; margin: 6px 0; }
.note { font-style: italic; }
.fill {
  display: inline-block;
  min-width: 240px;
  border-bottom: 1px solid #333;
}
section { page-break-inside: avoid; }
@media print {
  body { margin: 15mm; }
}
"#;
