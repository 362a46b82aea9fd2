//! Best-score persistence seam.
//!
//! The engine keeps the running best in memory and calls [`BestScoreStore::save`]
//! only when a game's score beats it. Where the value actually lives is the
//! host's business.

/// Host-provided storage for the best score
pub trait BestScoreStore {
    fn load(&self) -> u32;
    fn save(&mut self, best: u32);
}

impl<S: BestScoreStore + ?Sized> BestScoreStore for &mut S {
    fn load(&self) -> u32 {
        (**self).load()
    }

    fn save(&mut self, best: u32) {
        (**self).save(best)
    }
}

impl<S: BestScoreStore + ?Sized> BestScoreStore for Box<S> {
    fn load(&self) -> u32 {
        (**self).load()
    }

    fn save(&mut self, best: u32) {
        (**self).save(best)
    }
}

/// In-process store; also counts writes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryBestScore {
    best: u32,
    saves: u32,
}

impl MemoryBestScore {
    pub fn new(best: u32) -> Self {
        Self { best, saves: 0 }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn save_count(&self) -> u32 {
        self.saves
    }
}

impl BestScoreStore for MemoryBestScore {
    fn load(&self) -> u32 {
        self.best
    }

    fn save(&mut self, best: u32) {
        self.best = best;
        self.saves += 1;
    }
}
