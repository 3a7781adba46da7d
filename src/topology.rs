//! The fixed structure of the 9x9 grid: 27 houses and 20 peers per cell.

use crate::bitset::Set;
use crate::board::{Cell, House};
use crate::helper::{CellArray, HouseArray};

/// Which cells form the 27 houses (9 rows, 9 columns, 9 blocks) and which
/// cells see each other.
///
/// Constructed once with [`Topology::new`] and passed by reference into
/// solving; never mutated afterwards. Construction is pure combinatorics
/// over the fixed grid and cannot fail.
pub struct Topology {
    units: HouseArray<Set<Cell>>,
    houses_of: CellArray<[House; 3]>,
    peers: CellArray<Set<Cell>>,
}

impl Topology {
    /// Computes the units and peers of the standard 9x9 grid.
    pub fn new() -> Self {
        let mut units = HouseArray([Set::NONE; 27]);
        for cell in Cell::all() {
            units[cell.row()] |= cell;
            units[cell.col()] |= cell;
            units[cell.block()] |= cell;
        }

        let mut houses_of = CellArray([[House::new(0); 3]; 81]);
        let mut peers = CellArray([Set::NONE; 81]);
        for cell in Cell::all() {
            let houses = cell.houses();
            let mut surrounding = Set::NONE;
            for &house in &houses {
                surrounding |= units[house];
            }
            houses_of[cell] = houses;
            peers[cell] = surrounding.without(cell.as_set());
        }

        Topology {
            units,
            houses_of,
            peers,
        }
    }

    /// The 9 cells of one house.
    pub fn unit_cells(&self, house: House) -> Set<Cell> {
        self.units[house]
    }

    /// The row, column and block containing `cell`.
    pub fn units_of(&self, cell: Cell) -> [House; 3] {
        self.houses_of[cell]
    }

    /// The 20 cells sharing a house with `cell`, excluding `cell` itself.
    pub fn peers_of(&self, cell: Cell) -> Set<Cell> {
        self.peers[cell]
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_house_has_9_cells() {
        let topology = Topology::new();
        for house in House::all() {
            assert_eq!(topology.unit_cells(house).len(), 9);
        }
    }

    #[test]
    fn every_cell_has_20_peers() {
        let topology = Topology::new();
        for cell in Cell::all() {
            let peers = topology.peers_of(cell);
            assert_eq!(peers.len(), 20);
            assert!(!peers.contains(cell));
        }
    }

    #[test]
    fn units_of_cell_contain_the_cell() {
        let topology = Topology::new();
        for cell in Cell::all() {
            for house in topology.units_of(cell) {
                assert!(topology.unit_cells(house).contains(cell));
            }
        }
    }

    #[test]
    fn peers_are_symmetric() {
        let topology = Topology::new();
        for cell in Cell::all() {
            for peer in topology.peers_of(cell) {
                assert!(topology.peers_of(peer).contains(cell));
            }
        }
    }

    #[test]
    fn corner_cell_peers() {
        let topology = Topology::new();
        let corner = Cell::new(0);
        let expected = [
            1, 2, 3, 4, 5, 6, 7, 8, // rest of row 0
            9, 18, 27, 36, 45, 54, 63, 72, // rest of col 0
            10, 11, 19, 20, // rest of the top-left block
        ];
        let mut peers = Set::NONE;
        for &cell in &expected {
            peers |= Cell::new(cell);
        }
        assert_eq!(topology.peers_of(corner), peers);
    }
}
