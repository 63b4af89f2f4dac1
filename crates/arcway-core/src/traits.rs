use crate::error::Result;

/// Validate structural integrity of a built entity.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Compute an axis-aligned bound over sampled geometry.
pub trait Bounded {
    type Bounds;

    /// Returns `None` when there is no geometry to bound.
    fn bounds(&self) -> Option<Self::Bounds>;
}
