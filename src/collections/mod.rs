//! Scratch structures that generators build over a maze's cells and drop when
//! they finish.

mod cell_list;
mod cell_tree;

pub use cell_list::CellList;
pub use cell_tree::{CellTree, NodeId};
