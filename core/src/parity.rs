/// Returns `true` when `number` is evenly divisible by 2.
///
/// Sign does not matter: `-4` is even, `-7` is odd, and `0` is even.
pub fn is_even(number: i64) -> bool {
    number % 2 == 0
}
