//! Domain Entities

use super::value_objects::Denomination;

/// Note count per denomination for one withdrawal
///
/// Always carries an entry for every [`Denomination`], zero included,
/// indexed in [`Denomination::ALL`] order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoteBreakdown {
    counts: [u64; Denomination::COUNT],
}

impl NoteBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, denomination: Denomination) -> u64 {
        self.counts[denomination.index()]
    }

    pub fn set_count(&mut self, denomination: Denomination, count: u64) {
        self.counts[denomination.index()] = count;
    }

    /// `(denomination, count)` pairs, largest denomination first
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, u64)> + '_ {
        Denomination::ALL.into_iter().map(|d| (d, self.count(d)))
    }

    pub fn total_notes(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Sum of face values; equals the requested amount for a valid breakdown
    pub fn total_value(&self) -> u64 {
        self.iter().map(|(d, count)| d.value() * count).sum()
    }
}
