use std::path::PathBuf;

use crate::error::{Error, Result};

/// Splits an ordered list of artifact paths into contiguous, order-preserving
/// chunks of at most `size` elements for one provider call each.
pub struct Batcher {
    size: usize,
}

impl Batcher {
    pub fn new(size: usize) -> Result<Self> {
        if size < 1 {
            return Err(Error::Config(format!(
                "batch size must be at least 1, got {}",
                size
            )));
        }
        Ok(Self { size })
    }

    /// Every batch except possibly the last has exactly `size` elements.
    /// An empty input yields zero batches.
    pub fn split(&self, items: &[PathBuf]) -> Vec<Vec<PathBuf>> {
        items
            .chunks(self.size)
            .map(|chunk| chunk.to_vec())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(n: usize) -> Vec<PathBuf> {
        (0..n).map(|i| PathBuf::from(format!("file_{}.py", i))).collect()
    }

    #[test]
    fn test_exact_multiple() {
        let batcher = Batcher::new(5).unwrap();
        let batches = batcher.split(&paths(10));
        assert_eq!(batches.len(), 2);
        assert!(batches.iter().all(|b| b.len() == 5));
    }

    #[test]
    fn test_remainder_in_last_batch() {
        let batcher = Batcher::new(50).unwrap();
        let batches = batcher.split(&paths(120));
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].len(), 50);
        assert_eq!(batches[1].len(), 50);
        assert_eq!(batches[2].len(), 20);
    }

    #[test]
    fn test_empty_input_yields_zero_batches() {
        let batcher = Batcher::new(50).unwrap();
        assert!(batcher.split(&[]).is_empty());
    }

    #[test]
    fn test_concatenation_preserves_order() {
        let items = paths(13);
        let batcher = Batcher::new(4).unwrap();
        let rejoined: Vec<PathBuf> = batcher.split(&items).into_iter().flatten().collect();
        assert_eq!(rejoined, items);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(Batcher::new(0), Err(Error::Config(_))));
    }
}
