//! Plain-text rendering for terminals.

use super::{DrugSection, NewsGroup};
use std::fmt::Write;

const PANEL_INDENT: &str = "    ";
const BODY_INDENT: &str = "        ";
const ITEM_INDENT: &str = "          ";

/// Options for [`render_text`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TextOptions {
    /// Show every section's content, regardless of its own `expanded` flag.
    pub expand_all: bool,
}

/// Render sections as indented text.
///
/// Collapsed sections print only their header line. Free text keeps its
/// line breaks; each line is indented under its heading.
pub fn render_text(sections: &[DrugSection], options: TextOptions) -> String {
    let mut out = String::new();

    for (index, section) in sections.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }

        let expanded = options.expand_all || section.expanded;
        let marker = if expanded { '▾' } else { '▸' };
        let _ = writeln!(out, "{} {}", marker, section.label);
        if !expanded {
            continue;
        }

        for panel in &section.panels {
            let _ = writeln!(out, "{}{}", PANEL_INDENT, panel.title);
            push_block(&mut out, &panel.body, BODY_INDENT);
        }

        let _ = writeln!(out, "{}{}", PANEL_INDENT, section.news_title);
        for group in &section.news {
            push_group(&mut out, group);
        }
    }

    out
}

fn push_group(out: &mut String, group: &NewsGroup) {
    let _ = writeln!(out, "{}{} ({})", BODY_INDENT, group.title, group.entries.len());
    for entry in &group.entries {
        push_block(out, &entry.summary, ITEM_INDENT);
        if let Some(link) = &entry.link {
            let _ = writeln!(out, "{}{}: {}", ITEM_INDENT, link.label, link.href);
        }
    }
}

fn push_block(out: &mut String, body: &str, prefix: &str) {
    let indented = textwrap::indent(body, prefix);
    out.push_str(&indented);
    if !indented.ends_with('\n') {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DrugResult, NewsItem};
    use crate::render::sections;

    fn sample() -> DrugResult {
        DrugResult {
            molecule: "Adalimumab".into(),
            moa: "TNF-alpha inhibitor.\nBlocks TNF receptors.".into(),
            latest_summary: "- Biosimilar uptake\n- New indication".into(),
            regulatory_news: vec![NewsItem {
                summary: "EMA extends label".into(),
                url: Some("https://example.com/ema".into()),
            }],
            clinical_news: vec![NewsItem {
                summary: "Phase 3 results".into(),
                url: None,
            }],
            commercial_news: vec![],
        }
    }

    #[test]
    fn test_collapsed_shows_header_only() {
        let text = render_text(&sections(&[sample()]), TextOptions::default());
        assert_eq!(text, "▸ Adalimumab\n");
    }

    #[test]
    fn test_expanded_layout() {
        let text = render_text(&sections(&[sample()]), TextOptions { expand_all: true });

        assert!(text.starts_with("▾ Adalimumab\n"));
        assert!(text.contains("    Mechanism of Action\n        TNF-alpha inhibitor.\n        Blocks TNF receptors.\n"));
        assert!(text.contains("        - Biosimilar uptake\n        - New indication\n"));
        assert!(text.contains("        Regulatory Updates (1)\n          EMA extends label\n          Source Article: https://example.com/ema\n"));
        assert!(text.contains("        Clinical Developments (1)\n          Phase 3 results\n        Commercial Activity (0)\n"));
    }

    #[test]
    fn test_link_only_where_present() {
        let text = render_text(&sections(&[sample()]), TextOptions { expand_all: true });
        assert_eq!(text.matches("Source Article").count(), 1);
    }

    #[test]
    fn test_sections_separated() {
        let mut second = sample();
        second.molecule = "Pembrolizumab".into();
        let text = render_text(&sections(&[sample(), second]), TextOptions::default());
        assert_eq!(text, "▸ Adalimumab\n\n▸ Pembrolizumab\n");
    }
}
