// Copyright 2024 Martin Pool

//! Keep the even values from a sequence of integers.

/// True if `x` is exactly divisible by two.
///
/// `rem_euclid` is never negative, so this is correct for negative
/// values, including `i64::MIN`.
pub fn is_even(x: i64) -> bool {
    x.rem_euclid(2) == 0
}

/// Return the values matching `pred`, in their original order.
pub fn filter_by<P>(values: &[i64], pred: P) -> Vec<i64>
where
    P: Fn(i64) -> bool,
{
    values.iter().copied().filter(|&x| pred(x)).collect()
}

/// Return the even values, in their original order.
pub fn find_even_numbers(values: &[i64]) -> Vec<i64> {
    filter_by(values, is_even)
}
