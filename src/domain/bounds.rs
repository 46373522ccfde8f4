use super::LifeError;

/// A grid coordinate `(x, y)`.
pub type Coord = (i32, i32);

/// Moore neighborhood offsets, center excluded.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Fixed, closed grid bounds: `[0, width) x [0, height)`.
/// Off-grid positions are permanently dead, nothing wraps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    width: i32,
    height: i32,
}

impl Bounds {
    pub fn new(width: i32, height: i32) -> Result<Self, LifeError> {
        if width <= 0 || height <= 0 {
            return Err(LifeError::InvalidDimension { width, height });
        }
        Ok(Self { width, height })
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells in the grid
    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Reject coordinates outside the grid
    pub fn check(&self, x: i32, y: i32) -> Result<(), LifeError> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(LifeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// In-bounds Moore neighbors of `(x, y)`.
    /// Uses i64 arithmetic so coordinates near `i32::MAX` cannot overflow.
    pub fn neighbors(&self, x: i32, y: i32) -> impl Iterator<Item = Coord> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dx, dy)| {
            let nx = i32::try_from(x as i64 + dx as i64).ok()?;
            let ny = i32::try_from(y as i64 + dy as i64).ok()?;
            self.contains(nx, ny).then_some((nx, ny))
        })
    }

    /// The cell itself (if in bounds) followed by its in-bounds neighbors
    pub fn region(&self, x: i32, y: i32) -> impl Iterator<Item = Coord> + '_ {
        self.contains(x, y)
            .then_some((x, y))
            .into_iter()
            .chain(self.neighbors(x, y))
    }

    /// Every coordinate, row by row
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_dimensions() {
        assert!(matches!(
            Bounds::new(0, 5),
            Err(LifeError::InvalidDimension { width: 0, height: 5 })
        ));
        assert!(matches!(
            Bounds::new(5, -1),
            Err(LifeError::InvalidDimension { .. })
        ));
        assert!(Bounds::new(1, 1).is_ok());
    }

    #[test]
    fn test_contains() {
        let bounds = Bounds::new(10, 5).unwrap();
        assert!(bounds.contains(0, 0));
        assert!(bounds.contains(9, 4));
        assert!(!bounds.contains(10, 0));
        assert!(!bounds.contains(0, 5));
        assert!(!bounds.contains(-1, 0));
        assert_eq!(bounds.area(), 50);
    }

    #[test]
    fn test_interior_has_eight_neighbors() {
        let bounds = Bounds::new(10, 10).unwrap();
        let neighbors: Vec<_> = bounds.neighbors(5, 5).collect();
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(5, 5)));
    }

    #[test]
    fn test_corner_neighbors_do_not_wrap() {
        let bounds = Bounds::new(10, 10).unwrap();
        let mut neighbors: Vec<_> = bounds.neighbors(0, 0).collect();
        neighbors.sort();
        assert_eq!(neighbors, vec![(0, 1), (1, 0), (1, 1)]);

        let far: Vec<_> = bounds.neighbors(9, 9).collect();
        assert_eq!(far.len(), 3);
        assert!(far.iter().all(|&(x, y)| bounds.contains(x, y)));
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let bounds = Bounds::new(i32::MAX, 1).unwrap();
        let neighbors: Vec<_> = bounds.neighbors(i32::MAX - 1, 0).collect();
        assert_eq!(neighbors, vec![(i32::MAX - 2, 0)]);
        assert_eq!(bounds.neighbors(i32::MAX, i32::MAX).count(), 0);
    }

    #[test]
    fn test_region_includes_center() {
        let bounds = Bounds::new(3, 3).unwrap();
        let region: Vec<_> = bounds.region(0, 0).collect();
        assert_eq!(region.len(), 4);
        assert_eq!(region[0], (0, 0));
        assert_eq!(bounds.region(1, 1).count(), 9);
    }

    #[test]
    fn test_check_reports_coordinates() {
        let bounds = Bounds::new(4, 4).unwrap();
        assert!(bounds.check(3, 3).is_ok());
        match bounds.check(4, -2) {
            Err(LifeError::OutOfBounds { x, y, width, height }) => {
                assert_eq!((x, y, width, height), (4, -2, 4, 4));
            }
            other => panic!("expected OutOfBounds, got {:?}", other),
        }
    }
}
