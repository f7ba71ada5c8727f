//! ASCII sketch of a capture, for eyeballing in a terminal or a log.
//!
//! Mechanical grid painting: map each box from the unit square onto a
//! fixed-size character grid, draw container outlines big enough to read,
//! and let role priority decide who wins a contested cell so overlays
//! (`MODAL`, `TOAST`, `DROPDOWN`) float over page structure. Interactive
//! leaves always get a marker, however small. This is a sketch, not a
//! layout engine; nothing here aims at pixel fidelity.

use core_grammar::{Capture, Node, Role};
use unicode_width::UnicodeWidthChar;

/// Grid size and visibility filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: usize,
    pub height: usize,
    /// Paint `visible: false` nodes too.
    pub show_hidden: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
            show_hidden: false,
        }
    }
}

/// Outline is only drawn when the mapped rectangle reaches this size;
/// anything smaller would be all border and no interior.
const MIN_BOX_COLS: usize = 4;
const MIN_BOX_ROWS: usize = 3;

fn is_container(role: Role) -> bool {
    matches!(
        role,
        Role::Page
            | Role::Nav
            | Role::Header
            | Role::Footer
            | Role::Section
            | Role::Card
            | Role::List
            | Role::Table
            | Role::Modal
            | Role::Toast
            | Role::Dropdown
            | Role::Form
            | Role::Pagination
    )
}

/// Paint precedence. Overlays beat interactive primitives beat structure
/// beats the page background.
fn role_priority(role: Role) -> u8 {
    match role {
        Role::Page => 0,
        Role::Section | Role::List | Role::Table | Role::Card => 2,
        Role::Nav | Role::Header | Role::Footer | Role::Pagination => 3,
        Role::Form => 4,
        Role::Image | Role::Text | Role::Icon => 5,
        Role::Input | Role::Button | Role::Link | Role::Checkbox | Role::Radio => 6,
        Role::Dropdown => 7,
        Role::Modal | Role::Toast => 8,
        Role::Unknown => 1,
    }
}

#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    priority: u8,
}

struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell { ch: ' ', priority: 0 }; width * height],
        }
    }

    fn put(&mut self, col: usize, row: usize, ch: char, priority: u8) {
        if col >= self.width || row >= self.height {
            return;
        }
        let cell = &mut self.cells[row * self.width + col];
        if priority >= cell.priority {
            *cell = Cell { ch, priority };
        }
    }

    /// Write a label starting at `(col, row)`, clipped to `max_cols` cells.
    /// Wide glyphs advance two columns; zero-width glyphs are skipped.
    fn put_label(&mut self, col: usize, row: usize, max_cols: usize, label: &str, priority: u8) {
        let mut cursor = 0usize;
        for ch in label.chars() {
            let w = ch.width().unwrap_or(0);
            if w == 0 {
                continue;
            }
            if cursor + w > max_cols {
                break;
            }
            self.put(col + cursor, row, ch, priority);
            cursor += w;
        }
    }

    fn into_text(self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in 0..self.height {
            for col in 0..self.width {
                out.push(self.cells[row * self.width + col].ch);
            }
            if row + 1 < self.height {
                out.push('\n');
            }
        }
        out
    }
}

/// Map a unit-square box to grid cells: `(col0, row0, cols, rows)`.
fn to_cells(node: &Node, width: usize, height: usize) -> (usize, usize, usize, usize) {
    let clamp01 = |v: f64| v.clamp(0.0, 1.0);
    let col0 = (clamp01(node.bbox.x()) * width as f64).round() as usize;
    let row0 = (clamp01(node.bbox.y()) * height as f64).round() as usize;
    let cols = (clamp01(node.bbox.w()) * width as f64).round() as usize;
    let rows = (clamp01(node.bbox.h()) * height as f64).round() as usize;
    (
        col0.min(width.saturating_sub(1)),
        row0.min(height.saturating_sub(1)),
        cols,
        rows,
    )
}

fn label_for(node: &Node) -> String {
    match &node.semantic {
        Some(semantic) => format!("[{}:{}]", node.role.as_tag(), semantic),
        None => format!("[{}]", node.role.as_tag()),
    }
}

fn paint(node: &Node, grid: &mut Grid, opts: &RenderOptions) {
    if !node.visible && !opts.show_hidden {
        return;
    }

    let priority = role_priority(node.role);
    let (col0, row0, cols, rows) = to_cells(node, grid.width, grid.height);

    let boxed = is_container(node.role) && cols >= MIN_BOX_COLS && rows >= MIN_BOX_ROWS;
    if boxed {
        let (col1, row1) = (col0 + cols - 1, row0 + rows - 1);
        for col in col0..=col1 {
            let ch = if col == col0 || col == col1 { '+' } else { '-' };
            grid.put(col, row0, ch, priority);
            grid.put(col, row1, ch, priority);
        }
        for row in row0 + 1..row1 {
            grid.put(col0, row, '|', priority);
            grid.put(col1, row, '|', priority);
        }
        grid.put_label(
            col0 + 1,
            row0 + 1,
            cols.saturating_sub(2),
            &label_for(node),
            priority,
        );
    } else if node.interactive && node.children().is_empty() {
        // Interactive leaves always show up, however small their box.
        grid.put_label(col0, row0, grid.width - col0, &label_for(node), priority);
    }

    for child in node.children() {
        paint(child, grid, opts);
    }
}

/// Render a capture onto a character grid and return it as one string with
/// `\n`-joined rows.
pub fn render_ascii(cap: &Capture, opts: &RenderOptions) -> String {
    let mut grid = Grid::new(opts.width.max(1), opts.height.max(1));
    paint(&cap.root, &mut grid, opts);
    grid.into_text()
}
