//! Terminal output of a maze. Only reads which directions of each cell are
//! blocked or open; never mutates the maze.

use std::io::Write;

use crossterm::{
    queue,
    style::{self, Color, Stylize},
};

use crate::maze::{CellGlyph, Maze};

const REMOVED_FILL: &str = "###";

/// Wall drawing of the maze, one string per text row, e.g. a 2x1 maze with a
/// passage between its cells:
///
/// ```text
/// +---+---+
/// |       |
/// +---+---+
/// ```
pub fn wall_lines(maze: &Maze) -> Vec<String> {
    let mut lines = Vec::with_capacity(maze.height() as usize * 2 + 1);
    for y in 0..maze.height() {
        let mut top = String::new();
        let mut middle = String::new();
        for x in 0..maze.width() {
            let blocked = maze.blocked_directions((x, y));
            top.push('+');
            top.push_str(if blocked.north { "---" } else { "   " });
            middle.push(if blocked.west { '|' } else { ' ' });
            middle.push_str(if maze.cell_at((x, y)).is_some() {
                "   "
            } else {
                REMOVED_FILL
            });
            if x + 1 == maze.width() {
                top.push('+');
                middle.push(if blocked.east { '|' } else { ' ' });
            }
        }
        lines.push(top);
        lines.push(middle);
    }

    let mut bottom = String::new();
    for x in 0..maze.width() {
        let blocked = maze.blocked_directions((x, maze.height() - 1));
        bottom.push('+');
        bottom.push_str(if blocked.south { "---" } else { "   " });
    }
    bottom.push('+');
    lines.push(bottom);
    lines
}

/// One box-drawing glyph per cell, one string per row.
pub fn compact_lines(maze: &Maze) -> Vec<String> {
    (0..maze.height())
        .map(|y| {
            (0..maze.width())
                .map(|x| glyph_at(maze, (x, y)).symbol())
                .collect()
        })
        .collect()
}

fn glyph_at(maze: &Maze, coord: (u16, u16)) -> CellGlyph {
    CellGlyph(
        maze.cell_at(coord)
            .map(|_| maze.unblocked_directions(coord)),
    )
}

/// Draws the wall view with styled output.
pub fn draw_walls<W: Write>(out: &mut W, maze: &Maze) -> std::io::Result<()> {
    for line in wall_lines(maze) {
        for segment in line.split_inclusive(REMOVED_FILL) {
            let (walls, removed) = match segment.strip_suffix(REMOVED_FILL) {
                Some(walls) => (walls, true),
                None => (segment, false),
            };
            queue!(out, style::PrintStyledContent(walls.with(Color::White)))?;
            if removed {
                queue!(
                    out,
                    style::PrintStyledContent(REMOVED_FILL.with(Color::DarkGrey))
                )?;
            }
        }
        queue!(out, style::Print("\r\n"))?;
    }
    out.flush()
}

/// Draws the compact glyph view with styled output.
pub fn draw_compact<W: Write>(out: &mut W, maze: &Maze) -> std::io::Result<()> {
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            write!(out, "{}", glyph_at(maze, (x, y)))?;
        }
        queue!(out, style::Print("\r\n"))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_lines_closed_cells() {
        let maze = Maze::new(2, 1).unwrap();
        assert_eq!(
            wall_lines(&maze),
            vec!["+---+---+", "|   |   |", "+---+---+"]
        );
    }

    #[test]
    fn test_wall_lines_follow_links() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.link((0, 0), (1, 0));
        maze.link((1, 0), (1, 1));
        assert_eq!(
            wall_lines(&maze),
            vec![
                "+---+---+",
                "|       |",
                "+---+   +",
                "|   |   |",
                "+---+---+",
            ]
        );
    }

    #[test]
    fn test_removed_cell_is_filled() {
        let mut maze = Maze::new_linked(3, 1).unwrap();
        maze.remove_cell((1, 0));
        assert_eq!(wall_lines(&maze)[1], "|   |###|   |");
    }

    #[test]
    fn test_compact_lines() {
        let mut maze = Maze::new_linked(3, 1).unwrap();
        maze.remove_cell((2, 0));
        assert_eq!(compact_lines(&maze), vec!["╞╡#"]);
    }

    #[test]
    fn test_draw_writes_every_row() {
        let maze = Maze::new(3, 2).unwrap();
        let mut out = Vec::new();
        draw_walls(&mut out, &maze).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\r\n").count(), 5);
    }
}
