//! Fixed, sliding and at-most windows.
//!
//! Each window is a finite [`List`] forced with
//! [`LazySeq::take_at_most_before_trigger`]; the sequence of windows stays
//! lazy. Sizes arrive as [`PositiveSize`], so a zero-width window cannot be
//! requested.
//!
//! For `[1, 2, 3, 4, 5]` and a size of 2:
//!
//! | operation              | windows                          |
//! |------------------------|----------------------------------|
//! | `window_fixed`         | `[1, 2] [3, 4]`                  |
//! | `window_fixed_at_most` | `[1, 2] [3, 4] [5]`              |
//! | `window_sliding`       | `[1, 2] [2, 3] [3, 4] [4, 5]`    |

use stream_common::list::List;
use stream_common::size::PositiveSize;

use crate::seq::LazySeq;

impl<T: Clone + 'static> LazySeq<T> {
    /// Consecutive windows of exactly `size` elements, advancing by one.
    ///
    /// A finite input shorter than `size` has no sliding windows.
    ///
    /// ```
    /// use lazy_stream::LazySeq;
    /// use stream_common::PositiveSize;
    ///
    /// let seq: LazySeq<i32> = (1..=4).collect();
    /// let windows: Vec<Vec<i32>> = seq
    ///     .window_sliding(PositiveSize::new(3).unwrap())
    ///     .iter()
    ///     .map(|w| w.into_iter().collect())
    ///     .collect();
    /// assert_eq!(windows, vec![vec![1, 2, 3], vec![2, 3, 4]]);
    /// ```
    #[must_use]
    pub fn window_sliding(&self, size: PositiveSize) -> LazySeq<List<T>> {
        let window = self.take_at_most_before_trigger(size);
        if window.len() < size.get() {
            return LazySeq::Empty;
        }
        let rest = self.clone();
        LazySeq::cons(window, move || rest.drop_at_most(1).window_sliding(size))
    }

    /// Non-overlapping windows of exactly `size` elements. A trailing partial
    /// window is dropped.
    #[must_use]
    pub fn window_fixed(&self, size: PositiveSize) -> LazySeq<List<T>> {
        self.window_fixed_at_most(size)
            .filter(move |window| window.len() == size.get())
    }

    /// Non-overlapping windows of up to `size` elements. A finite input that
    /// does not divide evenly ends with one shorter window.
    #[must_use]
    pub fn window_fixed_at_most(&self, size: PositiveSize) -> LazySeq<List<T>> {
        if self.is_empty() {
            return LazySeq::Empty;
        }
        let (window_src, rest) = (self.clone(), self.clone());
        LazySeq::cell(
            move || window_src.take_at_most_before_trigger(size),
            move || rest.drop_at_most(size.get()).window_fixed_at_most(size),
        )
    }
}
