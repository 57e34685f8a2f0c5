use std::fmt;

use super::InterpolationError;

/// A data point `(x, f(x))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Abscissa.
    pub x: f64,
    /// Function value.
    pub fx: f64,
}

impl Point {
    /// Creates a point.
    pub fn new(x: f64, fx: f64) -> Self {
        Self { x, fx }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, fx): (f64, f64)) -> Self {
        Self { x, fx }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.fx)
    }
}

/// Data points with a selection flag each.
///
/// Interpolation uses only the selected points, in their order in the set.
/// Newly added points are selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
    selected: Vec<bool>,
}

impl PointSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a selected point.
    pub fn push(&mut self, point: impl Into<Point>) {
        self.points.push(point.into());
        self.selected.push(true);
    }

    /// Number of points, selected or not.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether there are no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether the point at `index` is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.get(index).copied().unwrap_or(false)
    }

    /// Selects or deselects the point at `index`.
    pub fn set_selected(&mut self, index: usize, selected: bool) -> Result<(), InterpolationError> {
        let len = self.selected.len();
        let flag = self
            .selected
            .get_mut(index)
            .ok_or(InterpolationError::InvalidIndex { index, len })?;
        *flag = selected;
        Ok(())
    }

    /// Selects only the points at given indices.
    pub fn select_only(&mut self, indices: &[usize]) -> Result<(), InterpolationError> {
        let len = self.len();
        if let Some(&index) = indices.iter().find(|&&index| index >= len) {
            return Err(InterpolationError::InvalidIndex { index, len });
        }

        self.selected.iter_mut().for_each(|flag| *flag = false);
        for &index in indices {
            self.selected[index] = true;
        }

        Ok(())
    }

    /// Selected points together with their indices in the set.
    pub fn selected(&self) -> impl Iterator<Item = (usize, Point)> + '_ {
        self.points
            .iter()
            .zip(&self.selected)
            .enumerate()
            .filter(|(_, (_, &selected))| selected)
            .map(|(i, (&point, _))| (i, point))
    }

    /// Number of selected points.
    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|&&selected| selected).count()
    }
}

impl<P: Into<Point>> FromIterator<P> for PointSet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut set = Self::new();
        iter.into_iter().for_each(|point| set.push(point));
        set
    }
}

impl<P: Into<Point>> Extend<P> for PointSet {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        iter.into_iter().for_each(|point| self.push(point));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection() {
        let mut points: PointSet = [(0.0, 1.0), (1.0, 2.0), (2.0, 5.0)].into_iter().collect();

        assert_eq!(points.len(), 3);
        assert_eq!(points.selected_count(), 3);

        points.set_selected(1, false).unwrap();
        let selected: Vec<_> = points.selected().collect();
        assert_eq!(
            selected,
            vec![(0, Point::new(0.0, 1.0)), (2, Point::new(2.0, 5.0))]
        );
        assert!(!points.is_selected(1));
        assert!(!points.is_selected(10));

        points.select_only(&[1]).unwrap();
        assert_eq!(points.selected_count(), 1);
        assert!(points.is_selected(1));
    }

    #[test]
    fn invalid_index() {
        let mut points: PointSet = [(0.0, 1.0)].into_iter().collect();

        assert_eq!(
            points.set_selected(1, true),
            Err(InterpolationError::InvalidIndex { index: 1, len: 1 })
        );
        assert_eq!(
            points.select_only(&[0, 3]),
            Err(InterpolationError::InvalidIndex { index: 3, len: 1 })
        );
        // Selection is unchanged on error.
        assert!(points.is_selected(0));
    }
}
