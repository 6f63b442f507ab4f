//! Location coordinates and person placement.
//!
//! Neither generator has a feasibility constraint: every draw is accepted.

use std::fmt;
use std::ops::RangeInclusive;

use rand::Rng;
use serde::Serialize;

use crate::config::GenerationConfig;

/// Range each coordinate axis of a non-depot location is drawn from.
pub const COORDINATE_RANGE: RangeInclusive<i64> = 1..=200;

/// Identifies a location: the depot, or one of the numbered locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LocationId(usize);

impl LocationId {
    /// The depot, where every drone and crate starts.
    pub const DEPOT: Self = Self(0);

    /// Returns the location with the given index; index 0 is the depot and
    /// index `n` is `locn`.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Returns the location index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Returns whether this is the depot.
    #[must_use]
    pub const fn is_depot(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_depot() {
            f.write_str("depot")
        } else {
            write!(f, "loc{}", self.0)
        }
    }
}

/// Integer position of a location on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LocationCoordinate {
    /// Horizontal position.
    pub x: i64,
    /// Vertical position.
    pub y: i64,
}

impl LocationCoordinate {
    /// Position of the depot.
    pub const DEPOT: Self = Self { x: 0, y: 0 };

    /// Returns the squared Euclidean distance to `other`.
    #[must_use]
    pub const fn squared_distance_to(self, other: Self) -> u64 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
    }

    /// Returns the Euclidean distance to `other`, rounded down.
    #[must_use]
    pub const fn distance_to(self, other: Self) -> u64 {
        self.squared_distance_to(other).isqrt()
    }

    /// Returns the cost of flying to `other`: the rounded-down distance plus
    /// one, so no flight is free.
    ///
    /// # Example
    ///
    /// ```
    /// use drone_problem::LocationCoordinate;
    ///
    /// let depot = LocationCoordinate::DEPOT;
    /// let site = LocationCoordinate { x: 3, y: 4 };
    /// assert_eq!(depot.flight_cost_to(site), 6);
    /// assert_eq!(site.flight_cost_to(site), 1);
    /// ```
    #[must_use]
    pub const fn flight_cost_to(self, other: Self) -> u64 {
        self.distance_to(other).saturating_add(1)
    }
}

/// Draws a coordinate for every location, depot first.
///
/// The depot sits at the origin; each other location gets both axes drawn
/// independently from [`COORDINATE_RANGE`].
pub fn generate_location_coords<R>(
    rng: &mut R,
    config: &GenerationConfig,
) -> Vec<LocationCoordinate>
where
    R: Rng + ?Sized,
{
    let mut coords = Vec::with_capacity(config.locations() + 1);
    coords.push(LocationCoordinate::DEPOT);
    for _ in 0..config.locations() {
        let x = rng.random_range(COORDINATE_RANGE);
        let y = rng.random_range(COORDINATE_RANGE);
        coords.push(LocationCoordinate { x, y });
    }
    coords
}

/// Places every person at a uniformly drawn non-depot location.
///
/// The result is indexed by person.
pub fn place_persons<R>(rng: &mut R, config: &GenerationConfig) -> Vec<LocationId>
where
    R: Rng + ?Sized,
{
    (0..config.persons())
        .map(|_| LocationId(rng.random_range(1..=config.locations())))
        .collect()
}
