#[cfg(test)]
mod tests {
    use conway_grid::{Grid, Traversal};

    fn advanced(mut grid: Grid) -> Grid {
        grid.advance();
        grid
    }

    fn alive_coords(grid: &Grid) -> Vec<(usize, usize)> {
        grid.cells()
            .filter(|&(_, _, alive)| alive)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_birth() {
        let life = Grid::from_coords(3, 3, &[(0, 0), (1, 0), (0, 1)]).unwrap();
        assert!(!life.get_cell(1, 1));
        assert_eq!(life.count_live_neighbors(1, 1), 3);

        let life = advanced(life);
        assert!(life.get_cell(1, 1));
        // the L-tromino becomes a block
        assert_eq!(alive_coords(&life), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_survival() {
        let life = Grid::from_coords(5, 5, &[(1, 2), (2, 2), (3, 2)]).unwrap();
        assert_eq!(life.count_live_neighbors(2, 2), 2);

        let life = advanced(life);
        assert!(life.get_cell(2, 2));
        assert_eq!(alive_coords(&life), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_block_is_still_life() {
        let block = Grid::from_coords(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]).unwrap();
        let mut life = block.clone();
        life.update(10, Traversal::Sequential);
        assert_eq!(life, block);
    }

    #[test]
    fn test_underpopulation() {
        let life = advanced(Grid::from_coords(5, 5, &[(2, 2)]).unwrap());
        assert_eq!(life.population(), 0);

        let life = advanced(Grid::from_coords(5, 5, &[(2, 2), (3, 2)]).unwrap());
        assert_eq!(life.population(), 0);
    }

    #[test]
    fn test_overpopulation() {
        // plus sign: the center has 4 neighbors
        let life = Grid::from_coords(5, 5, &[(2, 2), (1, 2), (3, 2), (2, 1), (2, 3)]).unwrap();
        assert_eq!(life.count_live_neighbors(2, 2), 4);
        let life = advanced(life);
        assert!(!life.get_cell(2, 2));

        let full = advanced(Grid::from_cells(3, 3, vec![true; 9]).unwrap());
        // only corners keep 3 neighbors
        assert_eq!(alive_coords(&full), vec![(0, 0), (2, 0), (0, 2), (2, 2)]);
    }

    #[test]
    fn test_corner_does_not_see_opposite_corner() {
        let (rows, columns) = (4, 6);
        let life = Grid::from_coords(
            rows,
            columns,
            &[(0, 0), (columns - 1, rows - 1), (columns - 1, 0), (0, rows - 1)],
        )
        .unwrap();
        assert_eq!(life.count_live_neighbors(0, 0), 0);
        assert_eq!(advanced(life).population(), 0);
    }

    #[test]
    fn test_blinker_on_the_edge_is_clipped() {
        // on a torus this would keep oscillating
        let life = Grid::from_coords(5, 5, &[(0, 1), (0, 2), (0, 3)]).unwrap();
        let life = advanced(life);
        assert_eq!(alive_coords(&life), vec![(0, 2), (1, 2)]);
        assert_eq!(advanced(life).population(), 0);
    }

    #[test]
    fn test_glider_dies_in_the_corner() {
        let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let mut life = Grid::from_coords(8, 8, &glider).unwrap();
        life.update(4, Traversal::Sequential);
        // moved by (1, 1)
        let shifted = glider.map(|(x, y)| (x + 1, y + 1));
        assert_eq!(life, Grid::from_coords(8, 8, &shifted).unwrap());

        // a glider hitting the bounds settles into a block
        life.update(40, Traversal::Sequential);
        assert_eq!(alive_coords(&life), vec![(6, 6), (7, 6), (6, 7), (7, 7)]);
    }

    #[test]
    fn test_dead_field_stays_dead() {
        let mut life = Grid::blank(30, 30).unwrap();
        for _ in 0..5 {
            life.advance();
            assert_eq!(life.population(), 0);
        }
        assert_eq!(life, Grid::blank(30, 30).unwrap());
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Grid::blank(0, 30).is_err());
        assert!(Grid::blank(30, 0).is_err());
        assert!(Grid::random(0, 0, Some(1)).is_err());
        assert!(Grid::from_cells(2, 2, vec![true; 3]).is_err());
        assert!(Grid::from_coords(2, 3, &[(3, 0)]).is_err());
        assert!(Grid::from_coords(2, 3, &[(0, 2)]).is_err());

        let err = Grid::blank(0, 5).unwrap_err();
        assert!(err.to_string().contains("0x5"), "{}", err);
    }

    #[test]
    fn test_display() {
        let life = Grid::from_coords(2, 3, &[(0, 0), (2, 1)]).unwrap();
        assert_eq!(life.to_string(), "#..\n..#\n");
        assert_eq!(life.rows(), 2);
        assert_eq!(life.columns(), 3);
    }
}
