//! Binary maze files.
//!
//! Layout:
//! - 4 bytes ASCII `MAZE`
//! - width, then height, each a little-endian `i32`
//! - `width * height` bytes in row-major order, one per cell:
//!
//! ```text
//! ---D WSEN
//! 0000 0000
//! ```
//!
//! `N`, `E`, `S`, `W` mark open directions. `D` marks a removed cell, in which
//! case the direction bits are zero. The top three bits are always zero.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::maze::{Coord, Direction, Maze};

pub const MAGIC: &[u8; 4] = b"MAZE";
const ABSENT: u8 = 1 << 4;

fn direction_bit(direction: Direction) -> u8 {
    1 << direction.index()
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("failed to read maze file")]
    Io(#[from] io::Error),
    #[error("not a maze file, found magic {0:?}")]
    BadMagic([u8; 4]),
    #[error("maze file ends before its {0}")]
    MissingHeader(&'static str),
    #[error("maze file has invalid dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
}

/// A maze read from a file, possibly cut short.
pub struct LoadedMaze {
    pub maze: Maze,
    /// Number of cell bytes the file was missing. Those cells are left present
    /// and unlinked.
    pub missing: usize,
}

impl LoadedMaze {
    pub fn is_complete(&self) -> bool {
        self.missing == 0
    }
}

/// Packs one slot into its file byte.
pub fn pack_cell(maze: &Maze, coord: Coord) -> u8 {
    if maze.cell_at(coord).is_none() {
        return ABSENT;
    }
    let open = maze.unblocked_directions(coord);
    Direction::ALL
        .iter()
        .filter(|&&dir| open.get(dir))
        .fold(0, |packed, &dir| packed | direction_bit(dir))
}

pub fn write_maze<W: Write>(writer: &mut W, maze: &Maze) -> io::Result<()> {
    writer.write_all(MAGIC)?;
    writer.write_all(&i32::from(maze.width()).to_le_bytes())?;
    writer.write_all(&i32::from(maze.height()).to_le_bytes())?;

    let body = (0..maze.height())
        .flat_map(|y| (0..maze.width()).map(move |x| (x, y)))
        .map(|coord| pack_cell(maze, coord))
        .collect::<Vec<u8>>();
    writer.write_all(&body)?;
    writer.flush()
}

/// Reads a maze. A body shorter than `width * height` bytes is not an error:
/// the cells read so far are kept and the shortfall is reported in
/// [`LoadedMaze::missing`].
pub fn read_maze<R: Read>(reader: &mut R) -> Result<LoadedMaze, ReadError> {
    let mut magic = [0u8; 4];
    read_header_field(reader, &mut magic, "magic")?;
    if &magic != MAGIC {
        return Err(ReadError::BadMagic(magic));
    }

    let mut field = [0u8; 4];
    read_header_field(reader, &mut field, "width")?;
    let width = i32::from_le_bytes(field);
    read_header_field(reader, &mut field, "height")?;
    let height = i32::from_le_bytes(field);

    let invalid = || ReadError::InvalidDimensions { width, height };
    let w = u16::try_from(width).map_err(|_| invalid())?;
    let h = u16::try_from(height).map_err(|_| invalid())?;
    let mut maze = Maze::new(w, h).map_err(|_| invalid())?;

    let size = w as usize * h as usize;
    let mut body = Vec::new();
    reader.take(size as u64).read_to_end(&mut body)?;

    for (i, &byte) in body.iter().enumerate() {
        let coord = ((i % w as usize) as u16, (i / w as usize) as u16);
        if byte & ABSENT != 0 {
            maze.remove_cell(coord);
            continue;
        }
        for dir in Direction::ALL {
            if byte & direction_bit(dir) != 0 {
                maze.link_in_direction(coord, dir);
            }
        }
    }

    let missing = size - body.len();
    if missing > 0 {
        tracing::warn!(
            "[io] missing cells in maze file: read {}/{}",
            body.len(),
            size
        );
    }
    Ok(LoadedMaze { maze, missing })
}

fn read_header_field<R: Read>(
    reader: &mut R,
    buf: &mut [u8; 4],
    name: &'static str,
) -> Result<(), ReadError> {
    match reader.read_exact(buf) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(ReadError::MissingHeader(name)),
        Err(e) => Err(ReadError::Io(e)),
    }
}

pub fn save(path: impl AsRef<Path>, maze: &Maze) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_maze(&mut writer, maze)
}

pub fn load(path: impl AsRef<Path>) -> Result<LoadedMaze, ReadError> {
    let mut reader = BufReader::new(File::open(path)?);
    read_maze(&mut reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Generator, generate_maze};

    fn to_bytes(maze: &Maze) -> Vec<u8> {
        let mut bytes = Vec::new();
        write_maze(&mut bytes, maze).unwrap();
        bytes
    }

    #[test]
    fn test_header_layout() {
        let mut maze = Maze::new(3, 2).unwrap();
        maze.link((0, 0), (1, 0));
        maze.remove_cell((2, 1));
        let bytes = to_bytes(&maze);
        assert_eq!(&bytes[..4], b"MAZE");
        assert_eq!(&bytes[4..8], &[3, 0, 0, 0]);
        assert_eq!(&bytes[8..12], &[2, 0, 0, 0]);
        assert_eq!(&bytes[12..], &[0b0010, 0b1000, 0, 0, 0, ABSENT]);
    }

    #[test]
    fn test_round_trip() {
        for generator in Generator::ALL {
            let mut maze = Maze::new(9, 7).unwrap();
            generate_maze(&mut maze, generator, Some(17)).unwrap();
            let loaded = read_maze(&mut to_bytes(&maze).as_slice()).unwrap();
            assert!(loaded.is_complete());
            assert_eq!(loaded.maze.live_cells(), maze.live_cells());
            for y in 0..7 {
                for x in 0..9 {
                    assert_eq!(
                        loaded.maze.unblocked_directions((x, y)),
                        maze.unblocked_directions((x, y))
                    );
                }
            }
        }
    }

    #[test]
    fn test_round_trip_removed_cells() {
        let mut maze = Maze::new_linked(4, 4).unwrap();
        maze.remove_cell((0, 0));
        maze.remove_cell((2, 3));
        let loaded = read_maze(&mut to_bytes(&maze).as_slice()).unwrap();
        assert_eq!(loaded.maze.live_cells(), 14);
        assert!(loaded.maze.cell_at((2, 3)).is_none());
        assert_eq!(loaded.maze.edge_count(), maze.edge_count());
        assert!(loaded.maze.is_symmetric());
    }

    #[test]
    fn test_truncated_body() {
        let mut maze = Maze::new(3, 3).unwrap();
        maze.link((0, 0), (1, 0));
        maze.link((2, 2), (2, 1));
        let mut bytes = to_bytes(&maze);
        bytes.truncate(bytes.len() - 3);
        let loaded = read_maze(&mut bytes.as_slice()).unwrap();
        assert_eq!(loaded.missing, 3);
        assert!(loaded.maze.is_linked((0, 0), (1, 0)));
        // (2, 1) was read and still links south into the unread cell.
        assert!(loaded.maze.is_linked((2, 1), (2, 2)));
        assert_eq!(loaded.maze.live_cells(), 9);
    }

    #[test]
    fn test_header_only() {
        let mut bytes = MAGIC.to_vec();
        bytes.extend_from_slice(&400i32.to_le_bytes());
        bytes.extend_from_slice(&300i32.to_le_bytes());
        let loaded = read_maze(&mut bytes.as_slice()).unwrap();
        assert_eq!(loaded.missing, 120_000);
        assert!(!loaded.is_complete());
        assert_eq!(loaded.maze.width(), 400);
        assert_eq!(loaded.maze.edge_count(), 0);
    }

    #[test]
    fn test_bad_input() {
        assert!(matches!(
            read_maze(&mut &b"MAZ"[..]),
            Err(ReadError::MissingHeader("magic"))
        ));
        assert!(matches!(
            read_maze(&mut &b"MOZE\x01\0\0\0\x01\0\0\0\0"[..]),
            Err(ReadError::BadMagic(_))
        ));
        assert!(matches!(
            read_maze(&mut &b"MAZE\x01\0\0\0"[..]),
            Err(ReadError::MissingHeader("height"))
        ));
        assert!(matches!(
            read_maze(&mut &b"MAZE\0\0\0\0\x01\0\0\0"[..]),
            Err(ReadError::InvalidDimensions { width: 0, height: 1 })
        ));
        assert!(matches!(
            read_maze(&mut &b"MAZE\xff\xff\xff\xff\x01\0\0\0"[..]),
            Err(ReadError::InvalidDimensions { width: -1, .. })
        ));
    }
}
