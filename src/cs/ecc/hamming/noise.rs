//! Random bit-error injection for exercising the codec.

use crate::cs::ecc::hamming::codeword::Codeword;
use crate::cs::ecc::Result;
use crate::error::Error;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Flips `count` distinct positions of `codeword`, chosen uniformly without replacement.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `count` exceeds the codeword width.
///
/// # Examples
///
/// ```
/// use hamcode::cs::ecc::hamming::{inject_errors, HammingCode};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let code = HammingCode::ascii();
/// let word = code.encode_char('a').unwrap();
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
/// let noisy = inject_errors(&word, 1, &mut rng).unwrap();
/// assert_eq!(word.distance(&noisy), 1);
/// assert_eq!(code.decode_char(&noisy).unwrap(), 'a');
/// ```
pub fn inject_errors<R>(codeword: &Codeword, count: usize, rng: &mut R) -> Result<Codeword>
where
    R: Rng + ?Sized,
{
    let width = codeword.width();
    if count > width {
        return Err(Error::invalid(format!(
            "cannot flip {} distinct bits in a {}-bit codeword",
            count, width
        )));
    }

    let mut noisy = *codeword;
    for offset in index::sample(rng, width, count) {
        noisy.flip(offset + 1)?;
    }
    Ok(noisy)
}

/// Owns a random source and injects bit errors with it
#[derive(Debug, Clone)]
pub struct ErrorInjector<R = ChaCha20Rng> {
    rng: R,
}

impl ErrorInjector<ChaCha20Rng> {
    /// Reproducible injector seeded with `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }

    /// Injector seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha20Rng::from_entropy())
    }
}

impl<R: Rng> ErrorInjector<R> {
    /// Injector drawing from a caller-supplied random source
    pub fn with_rng(rng: R) -> Self {
        ErrorInjector { rng }
    }

    /// Copy of `codeword` with `count` distinct random bits flipped
    pub fn inject(&mut self, codeword: &Codeword, count: usize) -> Result<Codeword> {
        inject_errors(codeword, count, &mut self.rng)
    }
}
