//! Nested-closure environment capture.
//!
//! The snippet this models:
//!
//! ```python
//! def outer(x):
//!     def inner(y):
//!         return x + y
//!     return inner
//!
//! adding = outer(9)
//! result = adding(10)  # 19
//! ```
//!
//! In Rust the inner function becomes a `move` closure; the captured `x`
//! lives inside the returned closure's environment, so the value survives
//! the outer call without any heap indirection.

/// Returns a closure that adds `x` to its argument.
///
/// # Example
///
/// ```
/// use lazyseq::closures::adder;
///
/// let adding = adder(9);
/// assert_eq!(adding(10), 19);
/// ```
pub fn adder(x: i64) -> impl Fn(i64) -> i64 {
    move |y| x + y
}

/// Composes two functions: `compose(f, g)` applies `g` first, then `f`.
pub fn compose<A, B, C>(f: impl Fn(B) -> C, g: impl Fn(A) -> B) -> impl Fn(A) -> C {
    move |x| f(g(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captured_value_outlives_outer_call() {
        let adding = adder(9);
        assert_eq!(adding(10), 19);
        // The closure is reusable; the captured environment persists.
        assert_eq!(adding(1), 10);
    }

    #[test]
    fn independent_captures_do_not_interfere() {
        let add_one = adder(1);
        let add_ten = adder(10);
        assert_eq!(add_one(5), 6);
        assert_eq!(add_ten(5), 15);
    }

    #[test]
    fn compose_applies_right_to_left() {
        let inc_then_double = compose(|x: i64| x * 2, |x: i64| x + 1);
        assert_eq!(inc_then_double(3), 8);
    }
}
