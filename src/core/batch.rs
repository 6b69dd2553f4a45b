/// Concurrent fan-out/fan-in of independent sentence generations.
///
/// Every unit of work owns its random source, so units never contend on
/// shared state. Results are collected in completion order.

use log::debug;
use std::sync::mpsc;
use std::thread;

use crate::core::composer::SentenceComposer;
use crate::core::lexicon::LexiconIndex;
use crate::core::random::{GenerationError, RandomSource};
use crate::schema::sentence::Sentence;

/// Generates batches of sentences over a pool of scoped worker threads.
#[derive(Debug, Clone, Copy)]
pub struct BatchCoordinator<'a> {
    composer: SentenceComposer<'a>,
    workers: usize,
}

impl<'a> BatchCoordinator<'a> {
    /// `workers` is clamped to at least one thread.
    pub fn new(index: &'a LexiconIndex, workers: usize) -> Self {
        Self {
            composer: SentenceComposer::new(index),
            workers: workers.max(1),
        }
    }

    /// Generate one sentence per source, spread over at most `workers`
    /// threads.
    ///
    /// The returned sentences follow completion order, not the order of
    /// `sources`. A panic in any unit propagates to the caller.
    pub fn generate<R>(&self, sources: Vec<R>) -> Result<Vec<Sentence>, GenerationError>
    where
        R: RandomSource,
    {
        let count = sources.len();
        if count == 0 {
            return Ok(Vec::new());
        }

        let workers = self.workers.min(count);
        let chunk_size = count.div_ceil(workers);
        debug!(
            "generating {} sentences on {} workers ({} per worker)",
            count, workers, chunk_size
        );

        let (tx, rx) = mpsc::channel();
        let composer = self.composer;

        thread::scope(|scope| {
            let mut remaining = sources;
            while !remaining.is_empty() {
                let rest = remaining.split_off(chunk_size.min(remaining.len()));
                let chunk = std::mem::replace(&mut remaining, rest);
                let tx = tx.clone();

                scope.spawn(move || {
                    for mut rng in chunk {
                        if tx.send(composer.compose(&mut rng)).is_err() {
                            break;
                        }
                    }
                });
            }
        });
        drop(tx);

        let sentences = rx.into_iter().collect::<Result<Vec<_>, _>>()?;
        if sentences.len() != count {
            return Err(GenerationError::InvariantViolation(format!(
                "batch of {} produced {} sentences",
                count,
                sentences.len()
            )));
        }
        Ok(sentences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::SeededSource;
    use crate::test_utils::{sample_lexicon, small_lexicon, ScriptedSource};

    fn seeded_sources(seed: u64, count: usize) -> Vec<SeededSource> {
        let mut parent = SeededSource::from_seed(seed);
        (0..count).map(|_| parent.fork()).collect()
    }

    #[test]
    fn empty_batch() {
        let index = LexiconIndex::new(&small_lexicon()).unwrap();
        let batch = BatchCoordinator::new(&index, 4);
        let sentences = batch.generate(Vec::<SeededSource>::new()).unwrap();
        assert!(sentences.is_empty());
    }

    #[test]
    fn batch_has_exact_length() {
        let index = LexiconIndex::new(&sample_lexicon()).unwrap();
        for workers in [1, 3, 8] {
            let batch = BatchCoordinator::new(&index, workers);
            for count in [1, 2, 7, 50] {
                let sentences = batch.generate(seeded_sources(count as u64, count)).unwrap();
                assert_eq!(sentences.len(), count);
            }
        }
    }

    #[test]
    fn zero_workers_still_runs() {
        let index = LexiconIndex::new(&sample_lexicon()).unwrap();
        let batch = BatchCoordinator::new(&index, 0);
        assert_eq!(batch.generate(seeded_sources(3, 5)).unwrap().len(), 5);
    }

    #[test]
    fn multiset_independent_of_worker_count() {
        let index = LexiconIndex::new(&sample_lexicon()).unwrap();
        let mut single = BatchCoordinator::new(&index, 1)
            .generate(seeded_sources(11, 40))
            .unwrap();
        let mut parallel = BatchCoordinator::new(&index, 6)
            .generate(seeded_sources(11, 40))
            .unwrap();
        single.sort();
        parallel.sort();
        assert_eq!(single, parallel);
    }

    #[test]
    fn scripted_units_replay_same_sentence() {
        let index = LexiconIndex::new(&small_lexicon()).unwrap();
        let mut parent = ScriptedSource::new([2, 1, 1, 0, 2, 3, 2, 2]);
        let sources: Vec<ScriptedSource> = (0..10).map(|_| parent.fork()).collect();
        let sentences = BatchCoordinator::new(&index, 4).generate(sources).unwrap();
        assert_eq!(sentences.len(), 10);
        assert!(sentences.iter().all(|s| s.text == "tomo li moku"));
    }
}
