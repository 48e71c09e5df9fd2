use crate::types::label::Label;

pub trait Classifier {
    fn classify(&self, n: i64) -> Label;
}

/// Lucky-first fizzbuzz.
///
/// Any number whose decimal form contains the digit `3` is `lucky`, even when
/// it is also a multiple of 3, 5 or 15 (so 30 is lucky, not fizzbuzz).
/// The remaining checks run in order: 15, 5, 3, then the number itself.
///
/// Negative numbers use the digits of their absolute value. `%` truncates
/// towards zero, and only a zero remainder is tested, so sign does not matter.
#[derive(Debug, Default, Clone, Copy)]
pub struct LuckyFizzBuzz;

impl Classifier for LuckyFizzBuzz {
    fn classify(&self, n: i64) -> Label {
        if contains_digit_three(n) {
            Label::Lucky
        } else if n % 15 == 0 {
            Label::FizzBuzz
        } else if n % 5 == 0 {
            Label::Buzz
        } else if n % 3 == 0 {
            Label::Fizz
        } else {
            Label::Number(n)
        }
    }
}

/// Classify a single integer with the default rules.
pub fn classify(n: i64) -> Label {
    LuckyFizzBuzz.classify(n)
}

fn contains_digit_three(n: i64) -> bool {
    // unsigned_abs keeps i64::MIN in range
    let mut rest = n.unsigned_abs();
    loop {
        if rest % 10 == 3 {
            return true;
        }
        rest /= 10;
        if rest == 0 {
            return false;
        }
    }
}
