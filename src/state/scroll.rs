use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Inclusive `(low, high)` range of rows currently drawn from a longer list.
/// The width never changes once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollWindow {
    low: usize,
    high: usize,
}

impl ScrollWindow {
    pub fn new(width: usize) -> Self {
        Self {
            low: 0,
            high: width.max(1) - 1,
        }
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.low, self.high)
    }

    pub fn width(&self) -> usize {
        self.high - self.low + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.low..=self.high).contains(&index)
    }

    /// Slides one row towards `direction` while the window stays inside `[0, limit]`.
    pub fn scroll(&mut self, direction: Direction, limit: usize) -> bool {
        match direction {
            Direction::Down if self.high < limit => {
                self.low += 1;
                self.high += 1;
                true
            }
            Direction::Up if self.low > 0 => {
                self.low -= 1;
                self.high -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn ensure_visible(&mut self, index: usize) {
        let width = self.width();
        if index < self.low {
            self.low = index;
            self.high = index + width - 1;
        } else if index > self.high {
            self.high = index;
            self.low = index + 1 - width;
        }
    }

    /// Half-open range of rows to draw for a list of `total` entries.
    pub fn visible_range(&self, total: usize) -> (usize, usize) {
        let start = self.low.min(total);
        let end = (self.high + 1).min(total);
        (start, end)
    }

    pub fn footer(&self, total: usize) -> Option<String> {
        if total <= self.width() {
            return None;
        }
        let (start, end) = self.visible_range(total);
        let can_up = start > 0;
        let can_down = end < total;
        let arrow = match (can_up, can_down) {
            (true, true) => " ↑↓",
            (true, false) => " ↑",
            (false, true) => " ↓",
            (false, false) => "",
        };
        Some(format!("[{}-{} of {}]{}", start + 1, end, total, arrow))
    }
}

/// A list with an optional highlighted row and a sliding window over it.
///
/// A `None` selection means the trailing "Cancel" row is highlighted.
#[derive(Debug, Clone, Serialize)]
pub struct WindowedList<T> {
    items: Vec<T>,
    selected: Option<usize>,
    window: ScrollWindow,
}

impl<T> WindowedList<T> {
    pub fn new(items: Vec<T>, width: usize) -> Self {
        let mut list = Self {
            items,
            selected: None,
            window: ScrollWindow::new(width),
        };
        list.select_first();
        list
    }

    pub fn items(&self) -> &[T] {
        self.items.as_slice()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.and_then(|idx| self.items.get(idx))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn window(&self) -> ScrollWindow {
        self.window
    }

    pub fn select_first(&mut self) {
        self.window = ScrollWindow::new(self.window.width());
        self.selected = if self.items.is_empty() { None } else { Some(0) };
    }

    /// Moves the highlight one row. Returns whether anything changed.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Down => self.move_down(),
            Direction::Up => self.move_up(),
            Direction::Left | Direction::Right => false,
        }
    }

    fn move_down(&mut self) -> bool {
        let Some(current) = self.selected else {
            return false;
        };
        if current + 1 < self.items.len() {
            self.selected = Some(current + 1);
            if current == self.window.high {
                self.window.scroll(Direction::Down, self.items.len() - 1);
            }
        } else {
            self.selected = None;
        }
        true
    }

    fn move_up(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        match self.selected {
            None => {
                let last = self.items.len() - 1;
                self.selected = Some(last);
                self.window.ensure_visible(last);
                true
            }
            Some(0) => false,
            Some(current) => {
                self.selected = Some(current - 1);
                if current == self.window.low {
                    self.window.scroll(Direction::Up, self.items.len() - 1);
                }
                true
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = (usize, &T)> {
        let (start, end) = self.window.visible_range(self.items.len());
        self.items[start..end]
            .iter()
            .enumerate()
            .map(move |(offset, item)| (start + offset, item))
    }

    pub fn footer(&self) -> Option<String> {
        self.window.footer(self.items.len())
    }
}
