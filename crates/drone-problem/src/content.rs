//! Crate content categories.
//!
//! The set of content types is a static part of the planning domain. Every
//! generated problem contains at least one crate of each type, so the number
//! of variants also bounds the minimum crate count a configuration may ask
//! for.

use std::fmt;

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use serde::{Deserialize, Serialize};

/// A category of supplies that a crate can hold and a person can need.
///
/// Variants are declared in their canonical order. The ordinal only drives
/// deterministic iteration; it carries no meaning for the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Food supplies.
    Food,
    /// Medical supplies.
    Medicine,
}

impl ContentType {
    /// Every content type in ordinal order.
    pub const ALL: [Self; 2] = [Self::Food, Self::Medicine];

    /// Number of content types in the domain.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the position of this content type within [`Self::ALL`].
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Food => 0,
            Self::Medicine => 1,
        }
    }

    /// Returns the constant name used for this content type in problem files.
    ///
    /// # Example
    ///
    /// ```
    /// use drone_problem::ContentType;
    ///
    /// assert_eq!(ContentType::Medicine.name(), "medicine");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Medicine => "medicine",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Draws a content type uniformly at random.
impl Distribution<ContentType> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ContentType {
        if rng.random() {
            ContentType::Medicine
        } else {
            ContentType::Food
        }
    }
}
