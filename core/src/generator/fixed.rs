use alloc::collections::BTreeSet;

use super::*;

/// Hands out the same predetermined layout on every call, for replays and reproducible setups.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedBoardGenerator {
    config: GameConfig,
    bomb_positions: BTreeSet<CellIndex>,
}

impl FixedBoardGenerator {
    pub fn new(
        config: GameConfig,
        bomb_positions: impl IntoIterator<Item = CellIndex>,
    ) -> Result<Self> {
        let bomb_positions: BTreeSet<_> = bomb_positions.into_iter().collect();
        if bomb_positions.len() != usize::from(config.bombs()) {
            return Err(InvalidParameter::PositionCountMismatch {
                expected: config.bombs(),
                actual: bomb_positions.len(),
            }
            .into());
        }
        let shape = config.shape();
        if let Some(&index) = bomb_positions.iter().find(|&&pos| !shape.contains(pos)) {
            return Err(GameError::IndexOutOfRange {
                index,
                cell_count: shape.total_cells(),
            });
        }
        Ok(Self {
            config,
            bomb_positions,
        })
    }
}

impl BoardGenerator for FixedBoardGenerator {
    fn config(&self) -> GameConfig {
        self.config
    }

    fn generate(&mut self) -> Board {
        Board::build(self.config.shape(), &self.bomb_positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_must_match_config() {
        let result = FixedBoardGenerator::new(GameConfig::STANDARD, [1, 2, 3]);

        assert_eq!(
            result,
            Err(InvalidParameter::PositionCountMismatch {
                expected: 7,
                actual: 3
            }
            .into())
        );
    }

    #[test]
    fn duplicates_do_not_count_twice() {
        let result = FixedBoardGenerator::new(GameConfig::STANDARD, [1, 1, 2, 3, 4, 5, 6]);

        assert!(matches!(
            result,
            Err(GameError::InvalidParameter(
                InvalidParameter::PositionCountMismatch { actual: 6, .. }
            ))
        ));
    }

    #[test]
    fn positions_must_be_on_board() {
        let config = GameConfig::new(2, 2, 1).unwrap();

        assert_eq!(
            FixedBoardGenerator::new(config, [4]),
            Err(GameError::IndexOutOfRange {
                index: 4,
                cell_count: 4
            })
        );
    }

    #[test]
    fn every_board_is_identical() {
        let mut generator =
            FixedBoardGenerator::new(GameConfig::STANDARD, [6, 7, 9, 15, 17, 22, 29]).unwrap();

        let first = generator.generate();

        assert_eq!(generator.generate(), first);
        assert_eq!(first.bomb_positions(), BTreeSet::from([6, 7, 9, 15, 17, 22, 29]));
    }
}
