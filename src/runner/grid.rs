//! Terminal rendering of cell grids.

use std::collections::HashMap;
use std::fmt::{self, Write};

use clap::ValueEnum;
use crossterm::style::{Color, StyledContent, Stylize};

use crate::runner::cells::Cell;

/// Inclusive upper coordinate of the fixed display window.
const FIXED_UPPER: u32 = 10;

/// How the renderer chooses the coordinate window to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DisplayPolicy {
    /// Always draw the window `0..=10` on both axes, whatever the data.
    /// Cells outside it are not drawn but still reach the legend.
    #[default]
    Fixed,
    /// Size the window to the data: `1..=max` on each axis, taken over the
    /// cells present. Cells at coordinate 0 fall outside this window.
    Fit,
}

/// Maps colour labels to terminal colours.
#[derive(Debug, Clone)]
pub struct Palette {
    colours: HashMap<&'static str, Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colours: HashMap::from([
                ("cyan", Color::Cyan),
                ("red", Color::Red),
                ("green", Color::Green),
                ("yellow", Color::Yellow),
                ("blue", Color::Blue),
                ("magenta", Color::Magenta),
                ("white", Color::White),
                // Dark grey rather than true black so the cell stays visible
                // on dark terminals.
                ("black", Color::DarkGrey),
            ]),
        }
    }
}

impl Palette {
    /// Returns the glyph for a colour label: a coloured `■` for known
    /// labels, an unstyled `?` for anything else.
    fn glyph(&self, label: &str) -> StyledContent<&'static str> {
        match self.colours.get(label) {
            Some(colour) => "■".with(*colour),
            None => "?".stylize(),
        }
    }
}

/// Renders extracted cells as a titled grid with a legend.
#[derive(Debug, Clone)]
pub struct GridRenderer {
    palette: Palette,
    policy: DisplayPolicy,
}

impl GridRenderer {
    pub fn new(palette: Palette, policy: DisplayPolicy) -> Self {
        Self { palette, policy }
    }

    /// Renders `cells` under `title` and returns the text, colour codes
    /// included, ready to print.
    pub fn render(&self, title: &str, cells: &[Cell]) -> String {
        let mut out = String::new();
        self.write_grid(&mut out, title, cells)
            .expect("writing to a String cannot fail");
        out
    }

    fn write_grid(&self, out: &mut String, title: &str, cells: &[Cell]) -> fmt::Result {
        if cells.is_empty() {
            return writeln!(out, "No cells found for {title}.");
        }

        // Last occurrence of a position wins, matching the order in which
        // the solver emitted the tuples.
        let occupied: HashMap<(u32, u32), &str> = cells
            .iter()
            .map(|cell| ((cell.x, cell.y), cell.label.as_str()))
            .collect();

        let (xs, ys) = match self.policy {
            DisplayPolicy::Fixed => (0..=FIXED_UPPER, 0..=FIXED_UPPER),
            DisplayPolicy::Fit => {
                let (max_x, max_y) = cells
                    .iter()
                    .fold((0, 0), |(mx, my), cell| (mx.max(cell.x), my.max(cell.y)));
                (1..=max_x, 1..=max_y)
            }
        };

        writeln!(out, "\n{title}:")?;

        write!(out, "  ")?;
        for x in xs.clone() {
            write!(out, "{x} ")?;
        }
        writeln!(out)?;

        for y in ys {
            write!(out, "{y:2} ")?;
            for x in xs.clone() {
                match occupied.get(&(x, y)) {
                    Some(label) => write!(out, "{} ", self.palette.glyph(label))?,
                    None => write!(out, ". ")?,
                }
            }
            writeln!(out)?;
        }

        // The legend is built from the cell list rather than the occupancy
        // map, so labels that were overwritten or fell outside the window
        // are still explained.
        let mut labels: Vec<&str> = cells.iter().map(|cell| cell.label.as_str()).collect();
        labels.sort_unstable();
        labels.dedup();

        writeln!(out, "\nLegend:")?;
        for label in labels {
            writeln!(out, "  {} = {label}", self.palette.glyph(label))?;
        }
        Ok(())
    }
}
