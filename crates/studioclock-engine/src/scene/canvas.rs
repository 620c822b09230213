use crate::paint::Color;

use super::DrawCmd;

/// Retained drawing surface.
///
/// Unlike a per-frame draw list, a `Canvas` keeps everything drawn on it until
/// [`clear`](Canvas::clear) is called, so each presented frame shows every mark
/// laid down since the last clear, in paint order. The renderers replay the
/// whole stream on top of the background every frame.
///
/// Drawing a command equal to one already on the canvas moves that command to
/// the top rather than appending a duplicate; the pixels are the same either
/// way, and it keeps the stream bounded by the number of distinct marks.
#[derive(Debug, Clone)]
pub struct Canvas {
    background: Color,
    items: Vec<DrawCmd>,
}

impl Canvas {
    pub fn new(background: Color) -> Self {
        Self {
            background,
            items: Vec::new(),
        }
    }

    /// Erases every mark and fills the surface with `background`.
    pub fn clear(&mut self, background: Color) {
        self.background = background;
        self.items.clear();
    }

    #[inline]
    pub fn background(&self) -> Color {
        self.background
    }

    /// Commands in paint order (back-to-front).
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, cmd: DrawCmd) {
        if let Some(pos) = self.items.iter().position(|c| *c == cmd) {
            self.items.remove(pos);
        }
        self.items.push(cmd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::scene::CircleCmd;

    fn red() -> Color {
        Color::opaque(255, 0, 0)
    }

    fn yellow() -> Color {
        Color::opaque(255, 255, 0)
    }

    #[test]
    fn marks_persist_until_clear() {
        let mut canvas = Canvas::new(Color::opaque(0, 0, 0));
        canvas.fill_circle(Vec2::new(10.0, 10.0), 4.0, red());
        canvas.fill_circle(Vec2::new(20.0, 10.0), 4.0, red());
        assert_eq!(canvas.items().len(), 2);

        canvas.clear(Color::opaque(0, 0, 0));
        assert!(canvas.is_empty());
    }

    #[test]
    fn circle_centres_snap_to_whole_pixels() {
        let mut canvas = Canvas::new(Color::default());
        canvas.fill_circle(Vec2::new(400.9, 49.99), 8.0, red());
        assert_eq!(
            canvas.items(),
            &[DrawCmd::Circle(CircleCmd::new(Vec2::new(400.0, 49.0), 8.0, red()))]
        );
    }

    #[test]
    fn redraw_moves_existing_mark_to_top() {
        let mut canvas = Canvas::new(Color::default());
        let p = Vec2::new(5.0, 5.0);
        canvas.fill_circle(p, 3.0, red());
        canvas.fill_circle(p, 3.0, yellow());
        canvas.fill_circle(p, 3.0, red());

        let colors: Vec<Color> = canvas
            .items()
            .iter()
            .map(|c| match c {
                DrawCmd::Circle(c) => c.color,
                DrawCmd::Text(t) => t.color,
            })
            .collect();
        assert_eq!(colors, vec![yellow(), red()]);
    }

    #[test]
    fn clear_changes_background() {
        let mut canvas = Canvas::new(Color::opaque(0, 0, 0));
        canvas.clear(Color::opaque(0, 50, 255));
        assert_eq!(canvas.background(), Color::opaque(0, 50, 255));
    }
}
