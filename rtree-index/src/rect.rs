//! Axis-aligned rectangles and the geometry the tree is built on.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::errors::{RTreeError, RTreeResult};

/// An axis-aligned bounding box over an arbitrary number of dimensions.
///
/// `Rect` is described by two coordinate vectors, `min` and `max`, with
/// `min[i] <= max[i]` on every axis. It is immutable once built; larger
/// rectangles are derived with [`Rect::try_union`].
///
/// Operations combining two rectangles fail with
/// [`RTreeError::DimensionMismatch`] when the operands have different
/// dimensionality.
///
/// # Examples
///
/// ```rust
/// use rtree_index::{Rect, RTreeError};
///
/// let a = Rect::new(vec![0.0, 0.0], vec![2.0, 2.0]).unwrap();
/// let b = Rect::from_point(&[3.0, 1.0]).unwrap();
///
/// let both = a.try_union(&b).unwrap();
/// assert_eq!(both.max(), &[3.0, 2.0]);
/// assert_eq!(both.size(), 6.0);
/// assert_eq!(a.try_enlargement(&b).unwrap(), 2.0);
///
/// let c = Rect::from_point(&[0.0, 0.0, 0.0]).unwrap();
/// assert!(matches!(a.try_intersects(&c), Err(RTreeError::DimensionMismatch { .. })));
/// ```
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RectParts")
)]
pub struct Rect {
    min: Vec<f64>,
    max: Vec<f64>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RectParts {
    min: Vec<f64>,
    max: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RectParts> for Rect {
    type Error = RTreeError;

    fn try_from(parts: RectParts) -> RTreeResult<Self> {
        Rect::new(parts.min, parts.max)
    }
}

impl Eq for Rect {}

impl Hash for Rect {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // adding 0.0 maps -0.0 to 0.0, which compare equal
        for v in self.min.iter().chain(self.max.iter()) {
            (v + 0.0).to_bits().hash(state);
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect({:?}, {:?})", self.min, self.max)
    }
}

impl Rect {
    /// Creates a rectangle from its lower and upper corners.
    ///
    /// Fails with [`RTreeError::InvalidRect`] if the corners are empty, have
    /// different lengths, or if `min[i] > max[i]` on any axis (NaN included).
    pub fn new(min: impl Into<Vec<f64>>, max: impl Into<Vec<f64>>) -> RTreeResult<Rect> {
        let min = min.into();
        let max = max.into();
        if min.is_empty() {
            return Err(RTreeError::InvalidRect(
                "rectangle must have at least one dimension".into(),
            ));
        }
        if min.len() != max.len() {
            return Err(RTreeError::InvalidRect(format!(
                "corner lengths differ: min has {}, max has {}",
                min.len(),
                max.len()
            )));
        }
        for (axis, (lo, hi)) in min.iter().zip(max.iter()).enumerate() {
            // written so that NaN fails the check
            if !(lo <= hi) {
                return Err(RTreeError::InvalidRect(format!(
                    "min {} exceeds max {} on axis {}",
                    lo, hi, axis
                )));
            }
        }
        Ok(Rect { min, max })
    }

    /// Creates a zero-size rectangle located at `point`.
    pub fn from_point(point: &[f64]) -> RTreeResult<Rect> {
        Rect::new(point.to_vec(), point.to_vec())
    }

    /// Creates a rectangle with lower corner `point` extending `lengths[i]`
    /// along each axis. Lengths must be non-negative.
    pub fn from_point_and_lengths(point: &[f64], lengths: &[f64]) -> RTreeResult<Rect> {
        if point.len() != lengths.len() {
            return Err(RTreeError::InvalidRect(format!(
                "point has {} coordinates but {} lengths were given",
                point.len(),
                lengths.len()
            )));
        }
        let max: Vec<f64> = point.iter().zip(lengths).map(|(p, l)| p + l).collect();
        Rect::new(point.to_vec(), max)
    }

    /// Number of axes.
    pub fn dim(&self) -> usize {
        self.min.len()
    }

    /// The lower corner.
    pub fn min(&self) -> &[f64] {
        &self.min
    }

    /// The upper corner.
    pub fn max(&self) -> &[f64] {
        &self.max
    }

    /// Extent along `axis`.
    pub fn length(&self, axis: usize) -> f64 {
        self.max[axis] - self.min[axis]
    }

    /// Hyper-volume of the rectangle. Degenerate rectangles have size 0.
    pub fn size(&self) -> f64 {
        (0..self.dim()).map(|axis| self.length(axis)).product()
    }

    /// Sum of the extents along every axis.
    pub fn margin(&self) -> f64 {
        (0..self.dim()).map(|axis| self.length(axis)).sum()
    }

    /// Smallest rectangle containing both `self` and `other`. Callers
    /// guarantee equal dimensionality.
    pub(crate) fn union(&self, other: &Rect) -> Rect {
        debug_assert_eq!(self.dim(), other.dim(), "union of rectangles of different dimensions");
        Rect {
            min: self
                .min
                .iter()
                .zip(&other.min)
                .map(|(a, b)| a.min(*b))
                .collect(),
            max: self
                .max
                .iter()
                .zip(&other.max)
                .map(|(a, b)| a.max(*b))
                .collect(),
        }
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn try_union(&self, other: &Rect) -> RTreeResult<Rect> {
        RTreeError::check_dimensions(self.dim(), other.dim())?;
        Ok(self.union(other))
    }

    /// Bounding rectangle of a sequence of equally dimensioned rectangles,
    /// `None` if it is empty.
    pub(crate) fn union_all<'a, I>(rects: I) -> Option<Rect>
    where
        I: IntoIterator<Item = &'a Rect>,
    {
        let mut iter = rects.into_iter();
        let first = iter.next()?.clone();
        Some(iter.fold(first, |acc, r| acc.union(r)))
    }

    /// Bounding rectangle of a sequence, `Ok(None)` if it is empty. Fails if
    /// any rectangle differs in dimensionality from the first.
    pub fn try_union_all<'a, I>(rects: I) -> RTreeResult<Option<Rect>>
    where
        I: IntoIterator<Item = &'a Rect>,
    {
        let mut iter = rects.into_iter();
        let Some(first) = iter.next() else {
            return Ok(None);
        };
        let mut acc = first.clone();
        for r in iter {
            acc = acc.try_union(r)?;
        }
        Ok(Some(acc))
    }

    pub(crate) fn contains(&self, other: &Rect) -> bool {
        debug_assert_eq!(self.dim(), other.dim(), "containment of rectangles of different dimensions");
        (0..self.dim()).all(|i| self.min[i] <= other.min[i] && other.max[i] <= self.max[i])
    }

    /// Checks if `other` lies entirely within this rectangle.
    pub fn try_contains(&self, other: &Rect) -> RTreeResult<bool> {
        RTreeError::check_dimensions(self.dim(), other.dim())?;
        Ok(self.contains(other))
    }

    /// Checks if this rectangle contains a point. Boundary points count.
    pub fn contains_point(&self, point: &[f64]) -> RTreeResult<bool> {
        RTreeError::check_dimensions(self.dim(), point.len())?;
        Ok(point
            .iter()
            .enumerate()
            .all(|(i, p)| self.min[i] <= *p && *p <= self.max[i]))
    }

    pub(crate) fn intersects(&self, other: &Rect) -> bool {
        debug_assert_eq!(self.dim(), other.dim(), "intersection of rectangles of different dimensions");
        (0..self.dim()).all(|i| self.min[i] <= other.max[i] && other.min[i] <= self.max[i])
    }

    /// Checks if the two rectangles overlap. Touching boundaries count.
    pub fn try_intersects(&self, other: &Rect) -> RTreeResult<bool> {
        RTreeError::check_dimensions(self.dim(), other.dim())?;
        Ok(self.intersects(other))
    }

    pub(crate) fn enlargement(&self, other: &Rect) -> f64 {
        self.union(other).size() - self.size()
    }

    /// Growth in size needed for this rectangle to also cover `other`.
    pub fn try_enlargement(&self, other: &Rect) -> RTreeResult<f64> {
        RTreeError::check_dimensions(self.dim(), other.dim())?;
        Ok(self.enlargement(other))
    }

    /// Squared Euclidean distance from `point` to the closest point of the
    /// rectangle; 0 when the point is inside.
    pub(crate) fn min_distance_squared(&self, point: &[f64]) -> f64 {
        point
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let d = p - p.clamp(self.min[i], self.max[i]);
                d * d
            })
            .sum()
    }
}
