use super::*;

/// Counts accumulated over a classification run.
///
/// Each worker keeps its own and partial tallies are merged at the end,
/// so no counter is ever shared between threads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    seen: usize,
    retained: usize,
    discarded: usize,
    emitted: usize,
}

impl Tally {
    pub fn seen(&self) -> usize {
        self.seen
    }
    pub fn retained(&self) -> usize {
        self.retained
    }
    pub fn discarded(&self) -> usize {
        self.discarded
    }
    pub fn emitted(&self) -> usize {
        self.emitted
    }
    pub fn witness(&mut self, outcome: &Outcome) {
        self.seen += 1;
        match outcome {
            Outcome::Discarded { .. } => self.discarded += 1,
            Outcome::Retained(records) => {
                self.retained += 1;
                self.emitted += records.len();
            }
        }
    }
    pub fn merge(self, other: Self) -> Self {
        Self {
            seen: self.seen + other.seen,
            retained: self.retained + other.retained,
            discarded: self.discarded + other.discarded,
            emitted: self.emitted + other.emitted,
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "seen {:>8}   retained {:>8}   discarded {:>8}   emitted {:>8}",
            self.seen, self.retained, self.discarded, self.emitted
        )
    }
}
