//! Text grid rendering for CLI outputs.
//!
//! Widths are measured on the plain text of each cell so ANSI escapes and
//! wide glyphs (emoji) do not break alignment.

use crate::utils::formatting::{display_width, pad_right};

/// Cell as printed: `plain` drives layout, `styled` is what gets written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextCell {
    pub plain: String,
    pub styled: String,
}

impl TextCell {
    pub fn new(plain: impl Into<String>, styled: impl Into<String>) -> Self {
        Self {
            plain: plain.into(),
            styled: styled.into(),
        }
    }

    pub fn plain(s: impl Into<String>) -> Self {
        let s = s.into();
        Self {
            styled: s.clone(),
            plain: s,
        }
    }
}

pub struct Table {
    pub headers: Vec<TextCell>,
    pub rows: Vec<Vec<TextCell>>,
    pub separator: char,
}

impl Table {
    pub fn new(headers: Vec<TextCell>, separator: char) -> Self {
        Self {
            headers,
            rows: Vec::new(),
            separator,
        }
    }

    pub fn add_row(&mut self, row: Vec<TextCell>) {
        self.rows.push(row);
    }

    pub fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| display_width(&c.plain))
                    .chain(std::iter::once(display_width(&h.plain)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        push_line(&mut out, &self.headers, &widths);

        // Separator
        let total = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
        out.push_str(&self.separator.to_string().repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            push_line(&mut out, row, &widths);
        }

        out
    }
}

fn push_line(out: &mut String, cells: &[TextCell], widths: &[usize]) {
    let empty = TextCell::default();
    let line: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let c = cells.get(i).unwrap_or(&empty);
            pad_right(&c.plain, &c.styled, *w)
        })
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligns_on_plain_width() {
        let mut t = Table::new(vec![TextCell::plain("Name"), TextCell::plain("X")], '-');
        t.add_row(vec![
            TextCell::new("Alice", "\x1b[1mAlice\x1b[0m"),
            TextCell::plain("1"),
        ]);
        t.add_row(vec![TextCell::plain("Bo"), TextCell::plain("22")]);

        assert_eq!(t.widths(), vec![5, 2]);
        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Name  | X");
        assert_eq!(lines[1], "----------");
        assert_eq!(lines[2], "\x1b[1mAlice\x1b[0m | 1");
        assert_eq!(lines[3], "Bo    | 22");
    }

    #[test]
    fn short_rows_are_padded() {
        let mut t = Table::new(vec![TextCell::plain("A"), TextCell::plain("B")], '=');
        t.add_row(vec![TextCell::plain("x")]);
        assert_eq!(t.render().lines().nth(2), Some("x |"));
    }
}
