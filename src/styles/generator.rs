//! Stylesheet source generation.
//!
//! Output is a fixed sequence of sections separated by blank lines:
//! header, variables, general styling, background rules, foreground rules
//! and subway symbols. Rendering is a pure function of its inputs.

use crate::model::TransitLine;
use crate::styles::dialect::Dialect;
use crate::transform::category::Category;
use serde::{Deserialize, Serialize};

const SECTION_SEPARATOR: &str = "\n\n";

const GENERAL_STYLES: &str = "/* General styling */
.mta {
  font-family: \"HelveticaNeue-Light\", \"Helvetica Neue Light\", \"Helvetica Neue\", Helvetica, Arial, \"Lucida Grande\", sans-serif;
  font-weight: bold;
}";

const SYMBOL_BASE: &str = ".mta.mta-symbol {
  display: inline-block;
  border-radius: 50%;
  width: 1em;
  height: 1em;
  color: #FFFFFF;
  position: relative;
  vertical-align: middle;
  font-style: normal;

  &:after {
    position: relative;
    display: block;
    text-align: center;
    width: 100%;
    top: 50%;
    -webkit-transform: translateY(-50%);
    -moz-transform: translateY(-50%);
    -ms-transform: translateY(-50%);
    transform: translateY(-50%);
    font-size: 0.65em;
  }
  &.mta-small {
    font-size: 1.2em;
  }
  &.mta-med {
    font-size: 1.85em;
  }
  &.mta-large {
    font-size: 2.85em;
  }
  &.mta-bottom {
    vertical-align: bottom;
  }
";

/// Caller-supplied knobs for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    /// Version string printed in the header
    pub version: String,
    /// Append `!important` to per-line color rules
    pub important: bool,
    /// Subway codes whose glyph text is black instead of white
    pub dark_glyph_lines: Vec<String>,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            important: true,
            dark_glyph_lines: ["n", "q", "r", "w"].iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Render `lines` as stylesheet source in `dialect`.
pub fn render(lines: &[TransitLine], options: &StyleOptions, dialect: Dialect) -> String {
    let prefix = dialect.variable_prefix();
    let important = if options.important { " !important" } else { "" };

    let sections = [
        header(&options.version),
        variables(lines, &prefix),
        GENERAL_STYLES.to_string(),
        color_rules(
            lines,
            "/* Background colors: mta mta-mode-line */",
            |id| format!("  &.{} {{ background-color: {}{}{}; }}", id, prefix, id, important),
        ),
        color_rules(
            lines,
            "/* Foreground colors: mta mta-mode-line-fg */",
            |id| format!("  &.{}-fg {{ color: {}{}{}; }}", id, prefix, id, important),
        ),
        symbols(lines, &options.dark_glyph_lines),
    ];

    sections.join(SECTION_SEPARATOR)
}

fn header(version: &str) -> String {
    format!(
        "/**
 * MTA Styles
 * The colors of the MTA in a easy to include library.
 * https://github.com/datanews/mta-styles
 * 
 * Version: {}
 */
",
        version
    )
}

fn variables(lines: &[TransitLine], prefix: &str) -> String {
    let mut out = vec!["/* Variables: mta-mode-line */".to_string()];
    for line in lines {
        for id in line.composite_ids() {
            out.push(format!("{}{}: {};", prefix, id, line.hex()));
        }
    }
    out.join("\n")
}

fn color_rules<F>(lines: &[TransitLine], comment: &str, rule: F) -> String
where
    F: Fn(&str) -> String,
{
    let mut out = vec![comment.to_string(), ".mta {".to_string()];
    out.extend(
        lines
            .iter()
            .flat_map(|line| line.composite_ids())
            .map(|id| rule(id.as_str())),
    );
    out.push("}".to_string());
    out.join("\n")
}

fn symbols(lines: &[TransitLine], dark_glyph_lines: &[String]) -> String {
    let mut out = vec![
        "/* Symbols: mta mta-symbol mta-mode-line-fg */".to_string(),
        SYMBOL_BASE.to_string(),
    ];

    for line in lines.iter().filter(|l| l.category() == Category::Subway) {
        for (id, code) in line.sub_lines() {
            out.push(format!(
                "  &.{}:after {{ content: \"{}\"; }}",
                id,
                code.to_uppercase()
            ));
            if dark_glyph_lines.iter().any(|dark| dark == code) {
                out.push(format!("  &.{} {{ color: #000000; }}", id));
            }
        }
    }

    out.push("}".to_string());
    out.join("\n")
}
