use super::sampler::sample_unchecked;
use super::*;

/// Places bombs uniformly at random by rejection sampling from `source`.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator<R = SeededSource> {
    config: GameConfig,
    source: R,
}

impl<R: RandomSource> RandomBoardGenerator<R> {
    pub fn new(config: GameConfig, source: R) -> Self {
        Self { config, source }
    }
}

impl RandomBoardGenerator {
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::new(config, SeededSource::new(seed))
    }
}

impl<R: RandomSource> BoardGenerator for RandomBoardGenerator<R> {
    fn config(&self) -> GameConfig {
        self.config
    }

    fn generate(&mut self) -> Board {
        let positions =
            sample_unchecked(self.config.bombs(), self.config.total_cells(), &mut self.source);
        Board::build(self.config.shape(), &positions)
    }
}
