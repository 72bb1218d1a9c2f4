use crate::random::BASE36_ALPHABET;
use crate::Generator;
use pocketlink_core::ShortCode;
use std::sync::atomic::{AtomicU64, Ordering};

/// A deterministic generator producing sequential base-36 codes.
///
/// The counter is rendered in base 36 and left-padded with `0` to the
/// configured width: `000000`, `000001`, ..., `00000z`, `000010`.
/// Codes wrap around once the counter exceeds the width, which makes the
/// generator handy for exercising collision handling.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
    width: usize,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU64::new(self.counter.load(Ordering::SeqCst)),
            width: self.width,
        }
    }
}

impl SeqGenerator {
    /// Creates a generator whose codes are `width` characters long.
    pub fn new(width: usize) -> Self {
        Self::with_offset(width, 0)
    }

    /// Creates a generator starting from a specific counter value.
    pub fn with_offset(width: usize, offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
            width,
        }
    }
}

fn encode_base36(mut value: u64, width: usize) -> String {
    let mut digits = vec![b'0'; width];
    for slot in digits.iter_mut().rev() {
        *slot = BASE36_ALPHABET[(value % 36) as usize];
        value /= 36;
    }
    digits.into_iter().map(char::from).collect()
}

impl Generator for SeqGenerator {
    type Output = ShortCode;

    fn generate(&self) -> Self::Output {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        ShortCode::new_unchecked(encode_base36(count, self.width))
    }
}
