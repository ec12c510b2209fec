//! Digit reductions over text.
//!
//! Only ASCII decimal digits (`'0'..='9'`) carry a value; every other
//! character contributes the identity of the reduction (zero for sums, one
//! for products).

use num_traits::{One, Zero};

/// Iterate over the values of the ASCII decimal digits in `s`, in order.
pub fn digit_values(s: &str) -> impl Iterator<Item = u8> + '_ {
    s.bytes().filter(u8::is_ascii_digit).map(|b| b - b'0')
}

/// Sum of the digit values in `s` (zero when `s` has no digits).
pub fn digit_sum<T>(s: &str) -> T
where
    T: Zero + From<u8>,
{
    digit_values(s).fold(T::zero(), |acc, d| acc + T::from(d))
}

/// Product of the digit values in `s` (one when `s` has no digits).
pub fn digit_product<T>(s: &str) -> T
where
    T: One + From<u8>,
{
    digit_values(s).fold(T::one(), |acc, d| acc * T::from(d))
}

/// XOR of all bytes of `s` (zero for the empty string).
pub fn xor_bytes(s: &str) -> u8 {
    s.bytes().fold(0, |acc, b| acc ^ b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn digits_in_order() {
        let v: Vec<u8> = digit_values("a1b20c9").collect();
        assert_eq!(v, vec![1, 2, 0, 9]);
    }

    #[test]
    fn no_digits_gives_identity() {
        assert_eq!(digit_sum::<f64>("Hello"), 0.0);
        assert_eq!(digit_product::<f64>("Hello"), 1.0);
        assert_eq!(digit_sum::<u32>(""), 0);
        assert_eq!(digit_product::<u32>(""), 1);
    }

    #[test]
    fn zero_digit_zeroes_product() {
        assert_eq!(digit_product::<f64>("x5y0z7"), 0.0);
        assert_eq!(digit_sum::<f64>("x5y0z7"), 12.0);
    }

    #[test]
    fn non_ascii_digits_ignored() {
        // Arabic-Indic three and a fullwidth seven are not ASCII digits.
        assert_eq!(digit_sum::<u32>("\u{663}\u{ff17}4"), 4);
    }

    #[test]
    fn xor_of_bytes() {
        assert_eq!(xor_bytes(""), 0);
        assert_eq!(xor_bytes("A"), b'A');
        assert_eq!(xor_bytes("AA"), 0);
        assert_eq!(xor_bytes("\u{2}"), 2);
    }

    proptest! {
        #[test]
        fn xor_splits_over_concatenation(a in ".*", b in ".*") {
            let joined = format!("{a}{b}");
            prop_assert_eq!(xor_bytes(&joined), xor_bytes(&a) ^ xor_bytes(&b));
        }

        #[test]
        fn sum_splits_over_concatenation(a in "[0-9a-z ]*", b in "[0-9a-z ]*") {
            let joined = format!("{a}{b}");
            prop_assert_eq!(
                digit_sum::<u64>(&joined),
                digit_sum::<u64>(&a) + digit_sum::<u64>(&b)
            );
        }
    }
}
