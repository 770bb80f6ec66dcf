//! Iterator adapters for line-based streaming.

use crate::error::EtsvError;

/// An iterator adapter giving exactly one item of lookahead: an item that
/// has been pulled out can be handed back with [`Pushback::step_back`] and
/// will be re-yielded by the following `next()` call.
///
/// # Developer Notes
/// The caller returns the item it holds, rather than the adapter retaining
/// a copy of the last yield, so nothing is ever cloned.
pub struct Pushback<I: Iterator> {
    inner: I,
    slot: Option<I::Item>,
}

impl<I: Iterator> Pushback<I> {
    pub fn new(inner: I) -> Self {
        Self { inner, slot: None }
    }

    /// Hand an item back, to be re-yielded before anything else.
    /// Only one step back is allowed: if an item is already waiting,
    /// this fails with [`EtsvError::InvalidOperation`].
    pub fn step_back(&mut self, item: I::Item) -> Result<(), EtsvError> {
        if self.slot.is_some() {
            return Err(EtsvError::InvalidOperation);
        }
        self.slot = Some(item);
        Ok(())
    }
}

impl<I: Iterator> Iterator for Pushback<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.slot.take().or_else(|| self.inner.next())
    }
}

#[cfg(test)]
mod tests {
    use super::Pushback;
    use crate::error::EtsvError;

    #[test]
    fn test_step_back_reyields() {
        let mut lines = Pushback::new(["one", "two", "three"].into_iter());
        assert_eq!(lines.next(), Some("one"));
        let line = lines.next().unwrap();
        lines.step_back(line).unwrap();
        assert_eq!(lines.next(), Some("two"));
        assert_eq!(lines.next(), Some("three"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_step_back_twice_fails() {
        let mut lines = Pushback::new(["one", "two"].into_iter());
        let line = lines.next().unwrap();
        lines.step_back(line).unwrap();
        let result = lines.step_back("two");
        assert!(matches!(result, Err(EtsvError::InvalidOperation)));
    }

    #[test]
    fn test_step_back_at_end() {
        let mut lines = Pushback::new(["only"].into_iter());
        assert_eq!(lines.next(), Some("only"));
        assert_eq!(lines.next(), None);
        // the stream can still be revived by a pushback
        lines.step_back("only").unwrap();
        assert_eq!(lines.next(), Some("only"));
        assert_eq!(lines.next(), None);
    }
}
