/// Lazy enumeration of every ordered partition of `0..len` into non-empty
/// contiguous pieces, driven by a binary break mask.
///
/// A string of length `n >= 1` has `2^(n-1)` partitions; a zero-length
/// string has exactly one, the empty partition. The iterator is finite and
/// restartable by constructing afresh.
#[derive(Debug, Clone)]
pub struct Partitions {
    len: usize,
    breaks: Vec<bool>,
    done: bool,
}

impl Partitions {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            breaks: vec![false; len.saturating_sub(1)],
            done: false,
        }
    }

    fn current(&self) -> Vec<(usize, usize)> {
        let mut pieces = Vec::new();
        if self.len == 0 {
            return pieces;
        }
        let mut start = 0;
        for (i, cut) in self.breaks.iter().enumerate() {
            if *cut {
                pieces.push((start, i + 1));
                start = i + 1;
            }
        }
        pieces.push((start, self.len));
        pieces
    }

    fn advance(&mut self) {
        // Binary counter over the break mask.
        for cut in &mut self.breaks {
            if *cut {
                *cut = false;
            } else {
                *cut = true;
                return;
            }
        }
        self.done = true;
    }
}

impl Iterator for Partitions {
    type Item = Vec<(usize, usize)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let pieces = self.current();
        self.advance();
        Some(pieces)
    }
}
