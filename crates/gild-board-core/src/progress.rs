//! Progress arithmetic shared by the header and the snapshot bar.

use crate::domain::Catalog;
use crate::filter::CompletionLookup;

/// Completed vs. total catalog items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn new(completed: usize, total: usize) -> Self {
        Self { completed, total }
    }

    /// Count only ids that exist in the catalog
    pub fn of<L: CompletionLookup + ?Sized>(catalog: &Catalog, done: &L) -> Self {
        let completed = catalog
            .items()
            .iter()
            .filter(|item| done.is_complete(&item.id))
            .count();
        Self::new(completed, catalog.len())
    }

    /// `round(completed / total * 100)`, half rounds up. 0 for an empty catalog.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        // integer form of floor(x + 0.5) avoids float drift at exact halves
        ((self.completed as u64 * 200 + self.total as u64) / (self.total as u64 * 2)) as u32
    }

    /// Completed fraction in [0, 1]
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.completed as f64 / self.total as f64).min(1.0)
        }
    }

    pub fn outstanding(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }

    /// "40 / 150"
    pub fn label(&self) -> String {
        format!("{} / {}", self.completed, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_rounding() {
        assert_eq!(Progress::new(40, 150).percent(), 27);
        assert_eq!(Progress::new(1, 200).percent(), 1); // 0.5 rounds up
        assert_eq!(Progress::new(1, 3).percent(), 33);
        assert_eq!(Progress::new(2, 3).percent(), 67);
        assert_eq!(Progress::new(150, 150).percent(), 100);
        assert_eq!(Progress::new(0, 150).percent(), 0);
    }

    #[test]
    fn test_empty_catalog() {
        let p = Progress::new(0, 0);
        assert_eq!(p.percent(), 0);
        assert_eq!(p.ratio(), 0.0);
        assert_eq!(p.outstanding(), 0);
    }

    #[test]
    fn test_label() {
        assert_eq!(Progress::new(40, 150).label(), "40 / 150");
        assert_eq!(Progress::new(40, 150).outstanding(), 110);
    }
}
