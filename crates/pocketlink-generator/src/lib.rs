pub mod error;
pub mod random;
pub mod seq;

use pocketlink_core::ShortCode;

pub use error::Error;
pub use random::{RandomGenerator, RandomSettings, BASE36_ALPHABET};
pub use seq::SeqGenerator;

/// Trait for generating candidate short codes.
///
/// Implementations are pure generators that don't interact with storage:
/// a candidate may collide with an existing code, and it is up to the
/// caller to check and draw again.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortCode>;
    /// Generates the next candidate short code.
    fn generate(&self) -> Self::Output;
}

impl<G: Generator> Generator for std::sync::Arc<G> {
    type Output = G::Output;

    fn generate(&self) -> Self::Output {
        (**self).generate()
    }
}
