use std::cell::Cell;

/// Cursor plus viewport offset for a list widget. Interior mutability lets
/// render reconcile the viewport through `&self`.
pub struct VerticalScroll {
    y_offset: Cell<usize>,
    pos: Cell<usize>,
}

impl VerticalScroll {
    pub fn new() -> Self {
        VerticalScroll {
            y_offset: Cell::new(0),
            pos: Cell::new(0),
        }
    }

    pub fn pos(&self) -> usize {
        self.pos.get()
    }

    pub fn y_offset(&self) -> usize {
        self.y_offset.get()
    }

    pub fn move_up(&self) {
        self.pos.set(self.pos.get().saturating_sub(1));
    }

    pub fn move_down(&self, len: usize) {
        let pos = self.pos.get();
        if pos + 1 < len {
            self.pos.set(pos + 1);
        }
    }

    /// Clamps the cursor to the list and scrolls the viewport so the cursor
    /// stays within the `visible_height` visible rows. Safe on an empty list.
    pub fn update(&self, visible_height: usize, len: usize) {
        if len == 0 {
            self.pos.set(0);
            self.y_offset.set(0);
            return;
        }

        let pos = self.pos.get().min(len - 1);
        self.pos.set(pos);

        if visible_height == 0 {
            return;
        }

        let mut offset = self.y_offset.get().min(pos);
        if pos >= offset + visible_height {
            offset = pos + 1 - visible_height;
        }
        self.y_offset.set(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_resets_cursor() {
        let scroll = VerticalScroll::new();
        scroll.move_down(0);
        scroll.update(5, 0);

        assert_eq!(scroll.pos(), 0);
        assert_eq!(scroll.y_offset(), 0);
    }

    #[test]
    fn cursor_stays_within_bounds() {
        let scroll = VerticalScroll::new();
        scroll.move_up();
        assert_eq!(scroll.pos(), 0);

        for _ in 0..10 {
            scroll.move_down(3);
        }
        assert_eq!(scroll.pos(), 2);
    }

    #[test]
    fn viewport_follows_cursor_down_and_up() {
        let scroll = VerticalScroll::new();
        for _ in 0..5 {
            scroll.move_down(10);
        }
        scroll.update(3, 10);
        assert_eq!(scroll.pos(), 5);
        assert_eq!(scroll.y_offset(), 3);

        for _ in 0..5 {
            scroll.move_up();
        }
        scroll.update(3, 10);
        assert_eq!(scroll.pos(), 0);
        assert_eq!(scroll.y_offset(), 0);
    }
}
