//! Sliding-window maximum ("max pooling").
//!
//! One pass over the input keeps a [`BoundedDeque`] of indices whose values never increase
//! from front to back. The front is the largest value still inside the window. Each index is
//! pushed once and popped at most once, so the whole pass is linear however large the window.
//!
//! # Examples
//!
//! ```
//! use ordkit::window::max_pool;
//!
//! let values = [8, 3, -1, -3, 5, 3, 6, 7];
//! assert_eq!(max_pool(&values, 3), Ok(vec![8, 3, 5, 5, 6, 7]));
//! assert_eq!(max_pool(&values, 5), Ok(vec![8, 5, 6, 7]));
//! ```

use smart_default::SmartDefault;

use crate::deque::{BoundedDeque, OverflowMode};
use crate::error::WindowError;

/// Window size and stride for [`max_pool_strided`], as one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SmartDefault)]
pub struct Pooling {
    /// Number of values in each window.
    #[default = 2]
    pub window: usize,
    /// Distance between the starts of consecutive windows.
    #[default = 1]
    pub stride: usize,
}

impl Pooling {
    /// Windows of `window` values starting at every offset.
    pub fn new(window: usize) -> Self {
        Self { window, stride: 1 }
    }

    /// Same window, starting only at multiples of `stride`.
    pub fn with_stride(self, stride: usize) -> Self {
        Self { stride, ..self }
    }

    /// Number of maxima [`Pooling::apply`] produces for `len` values.
    pub fn output_len(&self, len: usize) -> Result<usize, WindowError> {
        if self.window == 0 {
            return Err(WindowError::EmptyWindow);
        }
        if self.stride == 0 {
            return Err(WindowError::ZeroStride);
        }
        if self.window > len {
            return Err(WindowError::WindowTooLarge {
                window: self.window,
                len,
            });
        }
        Ok((len - self.window) / self.stride + 1)
    }

    /// See [`max_pool_strided`].
    pub fn apply<T>(&self, values: &[T]) -> Result<Vec<T>, WindowError>
    where
        T: PartialOrd + Clone,
    {
        max_pool_strided(values, self.window, self.stride)
    }
}

/// The maximum of every run of `window` consecutive values, in order. There are
/// `values.len() - window + 1` of them.
pub fn max_pool<T>(values: &[T], window: usize) -> Result<Vec<T>, WindowError>
where
    T: PartialOrd + Clone,
{
    max_pool_strided(values, window, 1)
}

/// Like [`max_pool`] but only for windows starting at multiples of `stride`.
///
/// # Examples
///
/// ```
/// use ordkit::error::WindowError;
/// use ordkit::window::max_pool_strided;
///
/// let values = [1, 9, 2, 8, 3, 7, 4];
/// assert_eq!(max_pool_strided(&values, 2, 2), Ok(vec![9, 8, 7]));
/// assert_eq!(max_pool_strided(&values, 2, 0), Err(WindowError::ZeroStride));
/// ```
pub fn max_pool_strided<T>(
    values: &[T],
    window: usize,
    stride: usize,
) -> Result<Vec<T>, WindowError>
where
    T: PartialOrd + Clone,
{
    let pooling = Pooling { window, stride };
    let mut maxima = Vec::with_capacity(pooling.output_len(values.len())?);

    // The window never holds more than `window` indices, and one slot always stays unused.
    let mut indices = BoundedDeque::<usize>::with_capacity(window + 1, OverflowMode::Disabled);

    for (i, value) in values.iter().enumerate() {
        let formed = i + 1 >= window;

        if formed && indices.front().map_or(false, |&front| front + window <= i) {
            indices.pop_front();
        }
        while indices.back().map_or(false, |&back| values[back] < *value) {
            indices.pop_back();
        }
        debug_assert!(!indices.is_full());
        indices.push_back(i);

        if formed && (i + 1 - window) % stride == 0 {
            if let Some(&front) = indices.front() {
                maxima.push(values[front].clone());
            }
        }
    }

    Ok(maxima)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALUES: [i32; 8] = [8, 3, -1, -3, 5, 3, 6, 7];

    #[test]
    fn known_windows() {
        assert_eq!(max_pool(&VALUES, 3), Ok(vec![8, 3, 5, 5, 6, 7]));
        assert_eq!(max_pool(&VALUES, 2), Ok(vec![8, 3, -1, 5, 5, 6, 7]));
        assert_eq!(max_pool(&VALUES, 5), Ok(vec![8, 5, 6, 7]));
    }

    #[test]
    fn window_of_one_is_the_input() {
        assert_eq!(max_pool(&VALUES, 1), Ok(VALUES.to_vec()));
    }

    #[test]
    fn window_of_everything_is_the_max() {
        assert_eq!(max_pool(&VALUES, VALUES.len()), Ok(vec![8]));
    }

    #[test]
    fn equal_values_stay_in_the_window() {
        assert_eq!(max_pool(&[5, 5, 5, 1, 1], 2), Ok(vec![5, 5, 5, 1]));
        assert_eq!(max_pool(&[3, 1, 3, 1, 0], 3), Ok(vec![3, 3, 3]));
    }

    #[test]
    fn strictly_decreasing_input_fills_the_deque() {
        let values: Vec<i32> = (0..20).rev().collect();
        let expected: Vec<i32> = (4..=19).rev().collect();
        assert_eq!(max_pool(&values, 5), Ok(expected));
    }

    #[test]
    fn strides_skip_windows() {
        assert_eq!(max_pool_strided(&VALUES, 3, 2), Ok(vec![8, 5, 6]));
        assert_eq!(max_pool_strided(&VALUES, 2, 3), Ok(vec![8, 5, 7]));
        assert_eq!(max_pool_strided(&VALUES, 8, 4), Ok(vec![8]));
    }

    #[test]
    fn floats_work() {
        assert_eq!(max_pool(&[0.5, -1.0, 2.5, 2.0], 2), Ok(vec![0.5, 2.5, 2.5]));
    }

    #[test]
    fn bad_arguments() {
        assert_eq!(max_pool(&VALUES, 0), Err(WindowError::EmptyWindow));
        assert_eq!(max_pool_strided(&VALUES, 2, 0), Err(WindowError::ZeroStride));
        assert_eq!(
            max_pool(&VALUES, 9),
            Err(WindowError::WindowTooLarge { window: 9, len: 8 })
        );
        assert_eq!(
            max_pool::<i32>(&[], 1),
            Err(WindowError::WindowTooLarge { window: 1, len: 0 })
        );
    }

    #[test]
    fn pooling_config() {
        let pooling = Pooling::default();
        assert_eq!((pooling.window, pooling.stride), (2, 1));
        assert_eq!(pooling.apply(&VALUES), max_pool(&VALUES, 2));

        let pooling = Pooling::new(3).with_stride(2);
        assert_eq!(pooling.output_len(VALUES.len()), Ok(3));
        assert_eq!(pooling.apply(&VALUES), Ok(vec![8, 5, 6]));
    }
}
