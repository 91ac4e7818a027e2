//! Displayable cell content.
//!
//! An [`Element`] is what a cell *shows*. It is never consulted when rows are
//! compared; the sort key lives in [`CellValue`](super::CellValue).

use ansi_term::{Colour, Style};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Element {
    #[default]
    Empty,
    Text(String),
    /// Emoji with its accessible description.
    Icon { glyph: String, label: String },
    /// Navigation target. A disabled link renders as plain content.
    Link {
        to: String,
        disabled: bool,
        children: Vec<Element>,
    },
    Group(Vec<Element>),
}

impl Element {
    pub fn text(s: impl Into<String>) -> Self {
        Element::Text(s.into())
    }

    pub fn icon(glyph: impl Into<String>, label: impl Into<String>) -> Self {
        Element::Icon {
            glyph: glyph.into(),
            label: label.into(),
        }
    }

    /// Unstyled text, used for width computation and plain output.
    pub fn plain(&self) -> String {
        let mut out = String::new();
        self.write_plain(&mut out);
        out
    }

    fn write_plain(&self, out: &mut String) {
        match self {
            Element::Empty => {}
            Element::Text(s) => out.push_str(s),
            Element::Icon { glyph, .. } => out.push_str(glyph),
            Element::Link { children, .. } | Element::Group(children) => {
                for c in children {
                    c.write_plain(out);
                }
            }
        }
    }

    /// Same text as [`plain`](Self::plain), wrapped in ANSI styling.
    pub fn styled(&self) -> String {
        match self {
            Element::Empty => String::new(),
            Element::Text(s) => s.clone(),
            Element::Icon { glyph, .. } => glyph.clone(),
            Element::Group(children) => children.iter().map(Element::styled).collect(),
            Element::Link {
                disabled, children, ..
            } => {
                let inner: String = children.iter().map(Element::styled).collect();
                if *disabled {
                    Style::new().bold().paint(inner).to_string()
                } else {
                    Colour::Blue.underline().paint(inner).to_string()
                }
            }
        }
    }

    /// First link found in the tree, depth first.
    pub fn link(&self) -> Option<(&str, bool)> {
        match self {
            Element::Link { to, disabled, .. } => Some((to.as_str(), *disabled)),
            Element::Group(children) => children.iter().find_map(Element::link),
            _ => None,
        }
    }

    pub fn has_icon(&self, label: &str) -> bool {
        match self {
            Element::Icon { label: l, .. } => l == label,
            Element::Link { children, .. } | Element::Group(children) => {
                children.iter().any(|c| c.has_icon(label))
            }
            _ => false,
        }
    }
}

impl From<&str> for Element {
    fn from(s: &str) -> Self {
        Element::text(s)
    }
}

impl From<String> for Element {
    fn from(s: String) -> Self {
        Element::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::Link {
            to: "/employees/1".into(),
            disabled: false,
            children: vec![
                Element::text("John Doe"),
                Element::text(" "),
                Element::icon("⚠️", "Conflict"),
            ],
        }
    }

    #[test]
    fn plain_flattens_the_tree() {
        assert_eq!(sample().plain(), "John Doe ⚠️");
        assert_eq!(Element::Empty.plain(), "");
    }

    #[test]
    fn styled_keeps_the_text() {
        let styled = sample().styled();
        assert!(styled.contains("John Doe"));
        assert!(styled.starts_with('\x1b'));
    }

    #[test]
    fn finds_link_and_icons() {
        let e = Element::Group(vec![Element::text("x"), sample()]);
        assert_eq!(e.link(), Some(("/employees/1", false)));
        assert!(e.has_icon("Conflict"));
        assert!(!e.has_icon("beach"));
    }
}
