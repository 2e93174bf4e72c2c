//! Extraction of cell tuples from raw solver output.

/// One coloured cell pulled out of a solver answer set.
///
/// Coordinates are grid positions; `label` is the colour token exactly as it
/// appeared in the solver's output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
    pub label: String,
}

/// Extracts every occurrence of `relation(<x>,<y>,<label>)` from `text`.
///
/// Matching is line-scoped and strict about shape: `<x>` and `<y>` must be
/// runs of ASCII digits and `<label>` a run of word characters (alphanumeric
/// or `_`), with nothing between the tokens. Near-matches such as
/// `cell( 1,2,red)` or `cell(-1,2,red)` are skipped without complaint, and
/// text containing no occurrences at all simply yields an empty vec. An
/// occurrence split across two lines is not recognised.
///
/// The returned cells preserve discovery order: by line, then left to right
/// within a line. Duplicate positions are kept; the renderer resolves them by
/// letting the last occurrence win.
///
/// The relation name is located as a literal substring followed by `(`, with
/// no word boundary required before it. Callers are expected to pass
/// identifier-like names such as `in_cell`.
pub fn extract_cells(text: &str, relation: &str) -> Vec<Cell> {
    let needle = format!("{relation}(");
    let mut cells = Vec::new();
    for line in text.lines() {
        let mut at = 0;
        while let Some(found) = line[at..].find(needle.as_str()) {
            let args_start = at + found + needle.len();
            match scan_arguments(&line[args_start..]) {
                Some((x, y, label, consumed)) => {
                    cells.push(Cell {
                        x,
                        y,
                        label: label.to_owned(),
                    });
                    at = args_start + consumed;
                }
                // Near-match; step past its first character and keep
                // scanning so a genuine occurrence later on the line is
                // still found.
                None => at = at + found + 1,
            }
        }
    }
    cells
}

/// Scans the argument tail `<digits>,<digits>,<word>)` of a candidate
/// occurrence. Returns the parsed coordinates, the label slice and the number
/// of bytes consumed including the closing parenthesis, or `None` when the
/// tail does not fit the grammar exactly.
fn scan_arguments(s: &str) -> Option<(u32, u32, &str, usize)> {
    let x_end = digit_run(s)?;
    let x = s[..x_end].parse().ok()?;

    let mut at = x_end;
    if !s[at..].starts_with(',') {
        return None;
    }
    at += 1;

    let y_end = at + digit_run(&s[at..])?;
    let y = s[at..y_end].parse().ok()?;

    at = y_end;
    if !s[at..].starts_with(',') {
        return None;
    }
    at += 1;

    let label_end = at + word_run(&s[at..])?;
    let label = &s[at..label_end];

    at = label_end;
    if !s[at..].starts_with(')') {
        return None;
    }
    Some((x, y, label, at + 1))
}

/// Byte length of the leading ASCII digit run, if there is one.
fn digit_run(s: &str) -> Option<usize> {
    let len = s.bytes().take_while(u8::is_ascii_digit).count();
    (len > 0).then_some(len)
}

/// Byte length of the leading word-character run (letters, digits, `_`), if
/// there is one.
fn word_run(s: &str) -> Option<usize> {
    let len = s
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .map(char::len_utf8)
        .sum::<usize>();
    (len > 0).then_some(len)
}
