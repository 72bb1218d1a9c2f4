use crate::error::{Error, Result};
use crate::Generator;
use pocketlink_core::shortcode::{MAX_LENGTH, MIN_LENGTH};
use pocketlink_core::ShortCode;
use rand::{rng, Rng};
use typed_builder::TypedBuilder;

/// Digits followed by lowercase letters, as produced by a radix-36 encoding.
pub const BASE36_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Configures a [`RandomGenerator`].
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct RandomSettings {
    /// Number of characters in each generated code.
    #[builder(default = 6)]
    pub length: usize,
    /// Characters codes are drawn from. Must be non-empty ASCII alphanumerics.
    #[builder(default = BASE36_ALPHABET)]
    pub alphabet: &'static [u8],
}

impl Default for RandomSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl RandomSettings {
    /// Checks that every code drawn with these settings is a valid
    /// [`ShortCode`].
    pub fn validate(&self) -> Result<()> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(Error::InvalidLength {
                length: self.length,
                min: MIN_LENGTH,
                max: MAX_LENGTH,
            });
        }
        if self.alphabet.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        if let Some(&byte) = self.alphabet.iter().find(|b| !b.is_ascii_alphanumeric()) {
            return Err(Error::InvalidAlphabet { byte });
        }
        Ok(())
    }
}

/// Draws each character uniformly from the configured alphabet using the
/// thread-local RNG.
#[derive(Debug, Clone, Default)]
pub struct RandomGenerator {
    settings: RandomSettings,
}

impl RandomGenerator {
    /// Creates a generator, rejecting settings that could yield invalid codes.
    pub fn new(settings: RandomSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &RandomSettings {
        &self.settings
    }

    /// Number of distinct codes this generator can produce.
    ///
    /// Saturates at `u128::MAX` for very long codes.
    pub fn code_space(&self) -> u128 {
        let base = self.settings.alphabet.len() as u128;
        (0..self.settings.length).fold(1_u128, |acc, _| acc.saturating_mul(base))
    }
}

impl Generator for RandomGenerator {
    type Output = ShortCode;

    fn generate(&self) -> Self::Output {
        let alphabet = self.settings.alphabet;
        let mut rng = rng();
        let code: String = (0..self.settings.length)
            .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
            .collect();
        ShortCode::new_unchecked(code)
    }
}
