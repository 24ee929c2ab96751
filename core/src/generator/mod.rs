use crate::*;
pub use fixed::*;
pub use random::*;
pub use sampler::*;

mod fixed;
mod random;
mod sampler;

/// Produces fresh boards for a fixed configuration, once per game and again on every restart.
pub trait BoardGenerator {
    fn config(&self) -> GameConfig;

    fn generate(&mut self) -> Board;
}

/// Generates a closed board of `rows` x `columns` with `bombs` randomly placed bombs.
pub fn generate_board<R: RandomSource + ?Sized>(
    rows: Coord,
    columns: Coord,
    bombs: CellCount,
    source: &mut R,
) -> Result<Board> {
    let config = GameConfig::new(rows, columns, bombs)?;
    Ok(RandomBoardGenerator::new(config, source).generate())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_boards_hold_invariants() {
        for seed in 0..50 {
            let board = generate_board(5, 6, 7, &mut SeededSource::new(seed)).unwrap();

            assert_eq!(board.bomb_count(), 7);
            assert_eq!(board.cells().filter(|cell| cell.is_bomb()).count(), 7);
            assert_eq!(board.remaining_safe_count(), 23);
            let bombs = board.bomb_positions();
            for cell in board.cells() {
                assert!(!cell.is_open());
                let expected = board
                    .neighbors(cell.index())
                    .iter()
                    .filter(|pos| bombs.contains(*pos))
                    .count();
                assert_eq!(usize::from(cell.neighbor_bomb_count()), expected);
            }
        }
    }

    #[test]
    fn full_and_empty_boards() {
        let mut source = SeededSource::new(1);

        let full = generate_board(3, 3, 9, &mut source).unwrap();
        assert!(full.cells().all(Cell::is_bomb));
        assert_eq!(full.cell(4).unwrap().neighbor_bomb_count(), 8);
        assert_eq!(full.remaining_safe_count(), 0);

        let empty = generate_board(3, 3, 0, &mut source).unwrap();
        assert!(empty.cells().all(|cell| !cell.is_bomb()));
        assert!(empty.cells().all(|cell| cell.neighbor_bomb_count() == 0));
    }

    #[test]
    fn invalid_parameters_propagate() {
        let mut source = SeededSource::new(1);

        assert_eq!(
            generate_board(0, 6, 0, &mut source),
            Err(InvalidParameter::RangeBelowOne.into())
        );
        assert_eq!(
            generate_board(2, 2, 5, &mut source),
            Err(InvalidParameter::CountExceedsRange { count: 5, range: 4 }.into())
        );
    }
}
