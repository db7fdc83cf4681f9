use crate::Direction;
use enum_iterator::IntoEnumIterator;

/// Identifies a single cell position on a matrix.
///
/// A `Coord` carries no bounds of its own; whether it is valid for a particular
/// matrix is answered by `Matrix::contains`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "persist", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    #[inline]
    pub fn new(x: usize, y: usize) -> Self {
        Coord { x, y }
    }

    /// Offset this coordinate by a signed delta. Returns `None` when the result
    /// would leave the first quadrant; clipping against the upper bounds is the
    /// grid's job.
    #[inline]
    pub fn offset(self, (dx, dy): (isize, isize)) -> Option<Coord> {
        let x = self.x as isize + dx;
        let y = self.y as isize + dy;
        if x < 0 || y < 0 {
            None
        } else {
            Some(Coord::new(x as usize, y as usize))
        }
    }

    /// Iterate over the Moore neighborhood of this coordinate, skipping positions
    /// below the origin. The coordinate itself is not included.
    #[inline]
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        Direction::into_enum_iter().filter_map(move |dir| self.offset(dir.delta()))
    }
}

impl From<(usize, usize)> for Coord {
    #[inline]
    fn from((x, y): (usize, usize)) -> Self {
        Coord::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_clips_below_origin() {
        assert_eq!(Coord::new(0, 0).offset((-1, 0)), None);
        assert_eq!(Coord::new(0, 0).offset((0, -1)), None);
        assert_eq!(Coord::new(3, 1).offset((-1, 1)), Some(Coord::new(2, 2)));
    }

    #[test]
    fn corner_has_three_neighbors() {
        assert_eq!(Coord::new(0, 0).neighbors().count(), 3);
        assert_eq!(Coord::new(5, 5).neighbors().count(), 8);
    }
}
