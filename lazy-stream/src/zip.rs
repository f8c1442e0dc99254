//! Pairwise zipping of sequences with unequal or infinite lengths.
//!
//! Both sides are first made infinite: every element is wrapped as
//! present (`Some`) and an endless run of absent markers (`None`) is
//! appended. Pairing then never has to ask up front which side is
//! shorter; it stops only where both sides are absent at once. A plain
//! [`LazySeq::zip`] keeps the prefix where both sides are present.
//!
//! Each side's tail is forced only when the next pair is demanded, so taking
//! `n` pairs never looks past the `n`th element of either side.
//!
//! Zipping two infinite sequences is itself infinite; zipping against at
//! least one finite side always terminates when consumed.

use crate::seq::LazySeq;

impl<T: Clone + 'static> LazySeq<T> {
    /// Pairs elements until both sequences are exhausted, marking the
    /// missing side with `None`.
    ///
    /// ```
    /// use lazy_stream::LazySeq;
    ///
    /// let left: LazySeq<i32> = [1, 2].into_iter().collect();
    /// let right: LazySeq<char> = ['a'].into_iter().collect();
    /// let pairs: Vec<_> = left.zip_all(&right).iter().collect();
    /// assert_eq!(pairs, vec![(Some(1), Some('a')), (Some(2), None)]);
    /// ```
    pub fn zip_all<U: Clone + 'static>(
        &self,
        other: &LazySeq<U>,
    ) -> LazySeq<(Option<T>, Option<U>)> {
        let left = self.map(Some).append_lazy(|| LazySeq::repeat(None));
        let right = other.map(Some).append_lazy(|| LazySeq::repeat(None));
        zip_padded(left, right)
    }

    /// Pairs elements up to the end of the shorter sequence.
    ///
    /// ```
    /// use lazy_stream::LazySeq;
    ///
    /// let numbers: LazySeq<i32> = [1, 2, 3].into_iter().collect();
    /// let pairs: Vec<_> = numbers.zip(&LazySeq::repeat("x")).iter().collect();
    /// assert_eq!(pairs, vec![(1, "x"), (2, "x"), (3, "x")]);
    /// ```
    pub fn zip<U: Clone + 'static>(&self, other: &LazySeq<U>) -> LazySeq<(T, U)> {
        self.zip_all(other).map_while(|(a, b)| a.zip(b))
    }
}

fn zip_padded<T, U>(
    left: LazySeq<Option<T>>,
    right: LazySeq<Option<U>>,
) -> LazySeq<(Option<T>, Option<U>)>
where
    T: Clone + 'static,
    U: Clone + 'static,
{
    let (LazySeq::Cell { head: a, tail: left_rest }, LazySeq::Cell { head: b, tail: right_rest }) =
        (left, right)
    else {
        return LazySeq::Empty;
    };
    let (a, b) = (a(), b());
    if a.is_none() && b.is_none() {
        return LazySeq::Empty;
    }
    LazySeq::cons((a, b), move || zip_padded(left_rest(), right_rest()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stream_common::list::list_of;

    fn seq_of(items: &[i64]) -> LazySeq<i64> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_zip_finite_with_infinite() {
        let zipped = seq_of(&[1, 2, 3]).zip(&LazySeq::repeat("x"));
        assert_eq!(
            zipped.iter().collect::<Vec<_>>(),
            vec![(1, "x"), (2, "x"), (3, "x")]
        );
    }

    #[test]
    fn test_zip_infinite_with_finite() {
        let zipped = LazySeq::integers_from(10).zip(&seq_of(&[7, 8]));
        assert_eq!(zipped.iter().collect::<Vec<_>>(), vec![(10, 7), (11, 8)]);
    }

    #[test]
    fn test_zip_with_empty_is_empty() {
        assert!(seq_of(&[1, 2]).zip(&LazySeq::<i64>::empty()).is_empty());
        assert!(LazySeq::<i64>::empty().zip(&LazySeq::integers_from(0)).is_empty());
    }

    #[test]
    fn test_zip_two_infinite() {
        let pairs = LazySeq::integers_from(0).zip(&LazySeq::fibs());
        assert_eq!(pairs.to_list(4), list_of([(0, 1), (1, 1), (2, 2), (3, 3)]));
    }

    #[test]
    fn test_zip_all_pads_shorter_side() {
        let padded = seq_of(&[1]).zip_all(&seq_of(&[5, 6, 7]));
        assert_eq!(
            padded.iter().collect::<Vec<_>>(),
            vec![(Some(1), Some(5)), (None, Some(6)), (None, Some(7))]
        );
    }

    #[test]
    fn test_zip_all_of_two_empties() {
        assert!(LazySeq::<i64>::empty().zip_all(&LazySeq::<i64>::empty()).is_empty());
    }

    #[test]
    fn test_zip_does_not_force_past_requested_pairs() {
        // The filtered side never settles after its second element.
        let below_three = LazySeq::integers_from(1).filter(|n| *n < 3);
        let pairs = below_three.zip(&seq_of(&[10, 20]));
        assert_eq!(pairs.to_list(2), list_of([(1, 10), (2, 20)]));
        assert_eq!(pairs.iter().take(2).count(), 2);

        let padded = seq_of(&[10, 20]).zip_all(&below_three);
        assert_eq!(
            padded.to_list(2),
            list_of([(Some(10), Some(1)), (Some(20), Some(2))])
        );
    }

    #[test]
    fn test_add_streams() {
        // (define (add-streams s1 s2) (stream-map + s1 s2))
        let sums = seq_of(&[1, 2, 3, 4, 5])
            .zip(&seq_of(&[10, 20, 30, 40, 50]))
            .map(|(a, b)| a + b);
        assert_eq!(sums.iter().collect::<Vec<_>>(), vec![11, 22, 33, 44, 55]);
    }
}
