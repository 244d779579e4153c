//! Layout helpers shared by the screens.

use std::cell::RefCell;

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Returns a rectangle covering `percent_x` × `percent_y` of `area`, centred.
pub fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Shifts `rect` horizontally by `offset`, clamped so it stays inside `bounds`.
pub fn shift_within(rect: Rect, offset: i32, bounds: Rect) -> Rect {
    let min_x = i32::from(bounds.x);
    let max_x = i32::from(bounds.right()) - i32::from(rect.width);
    if max_x < min_x {
        return rect;
    }
    let x = (i32::from(rect.x) + offset).clamp(min_x, max_x);
    Rect {
        x: u16::try_from(x).unwrap_or(rect.x),
        ..rect
    }
}

/// Clickable regions recorded during the last render.
///
/// Screens render through `&self`, so regions live behind a `RefCell`.
/// Later regions sit on top of earlier ones.
#[derive(Debug)]
pub struct HitMap<T> {
    regions: RefCell<Vec<(Rect, T)>>,
}

impl<T> Default for HitMap<T> {
    fn default() -> Self {
        Self {
            regions: RefCell::new(Vec::new()),
        }
    }
}

impl<T: Copy> HitMap<T> {
    /// Forgets every region. Called at the start of a render.
    pub fn clear(&self) {
        self.regions.borrow_mut().clear();
    }

    /// Records `target` at `area`. Empty areas are skipped.
    pub fn insert(&self, area: Rect, target: T) {
        if !area.is_empty() {
            self.regions.borrow_mut().push((area, target));
        }
    }

    /// The topmost target under the given cell, if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<T> {
        let position = Position::new(column, row);
        self.regions
            .borrow()
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_is_clamped_to_bounds() {
        let bounds = Rect::new(0, 0, 100, 10);
        let rect = Rect::new(40, 0, 20, 10);
        assert_eq!(shift_within(rect, 10, bounds).x, 50);
        assert_eq!(shift_within(rect, -100, bounds).x, 0);
        assert_eq!(shift_within(rect, 100, bounds).x, 80);
    }

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 120, 40);
        let inner = centered_rect(area, 90, 90);
        assert!(inner.x >= area.x && inner.right() <= area.right());
        assert!(inner.y >= area.y && inner.bottom() <= area.bottom());
    }

    #[test]
    fn hit_map_prefers_latest_region() {
        let hits = HitMap::default();
        hits.insert(Rect::new(0, 0, 10, 10), 'a');
        hits.insert(Rect::new(2, 2, 3, 1), 'b');
        hits.insert(Rect::new(5, 5, 0, 4), 'c');

        assert_eq!(hits.hit(3, 2), Some('b'));
        assert_eq!(hits.hit(3, 3), Some('a'));
        assert_eq!(hits.hit(5, 5), Some('a'));
        assert_eq!(hits.hit(10, 0), None);

        hits.clear();
        assert_eq!(hits.hit(0, 0), None);
    }
}
