use super::FuzzyEq;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy compared.
///
/// The [IndexableNum] bound allows the same number type to be used for region extents and spatial
/// indexes.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyEq
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + 'static
{
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Lossy conversion to `f64`, used for error reporting and logging.
    #[inline]
    fn to_f64_lossy(self) -> f64 {
        num_traits::cast(self).unwrap_or(f64::NAN)
    }
}

impl Real for f32 {
    #[inline]
    fn two() -> Self {
        2.0f32
    }
}

impl Real for f64 {
    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }
}
