use crate::classify::{Classifier, LuckyFizzBuzz};
use crate::types::label::Label;
use crate::types::range::Range;

/// Applies a classifier across an inclusive range, in order.
pub struct RangeGenerator<C> {
    classifier: C,
}

impl Default for RangeGenerator<LuckyFizzBuzz> {
    fn default() -> Self {
        Self {
            classifier: LuckyFizzBuzz,
        }
    }
}

impl<C> RangeGenerator<C>
where
    C: Classifier,
{
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// One label per integer in `range`, `min` first. Empty for an inverted range.
    pub fn generate(&self, range: Range) -> Vec<Label> {
        log::trace!("generating labels for [{}, {}]", range.min(), range.max());
        range.iter().map(|n| self.classifier.classify(n)).collect()
    }

    /// Labels from [`generate`](Self::generate) joined by `separator`.
    pub fn render_with(&self, range: Range, separator: &str) -> String {
        join(&self.generate(range), separator)
    }

    pub fn render(&self, range: Range) -> String {
        self.render_with(range, " ")
    }
}

pub(crate) fn join<T: ToString>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
