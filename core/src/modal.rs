use serde::{Deserialize, Serialize};

use crate::{Layout, Rect, Vec2};

const BUTTON_W: f32 = 90.0;
const BUTTON_H: f32 = 30.0;

/// Which modal button a pointer press landed on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModalChoice {
    Retry,
    Cancel,
}

/// The game-over overlay: a visibility flag plus two fixed hit regions.
/// Hover feedback is computed live by the renderer from the pointer position,
/// never stored here.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Modal {
    visible: bool,
    retry_rect: Rect,
    cancel_rect: Rect,
}

impl Modal {
    pub fn new(layout: Layout) -> Self {
        let center = layout.center();
        Self {
            visible: false,
            retry_rect: Rect::new(center.x - 100.0, center.y - 30.0, BUTTON_W, BUTTON_H),
            cancel_rect: Rect::new(center.x + 10.0, center.y - 30.0, BUTTON_W, BUTTON_H),
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn retry_rect(&self) -> Rect {
        self.retry_rect
    }

    pub fn cancel_rect(&self) -> Rect {
        self.cancel_rect
    }

    /// The button under `pos`, only while visible.
    pub fn hit(&self, pos: Vec2) -> Option<ModalChoice> {
        if !self.visible {
            return None;
        }
        if self.retry_rect.contains(pos) {
            Some(ModalChoice::Retry)
        } else if self.cancel_rect.contains(pos) {
            Some(ModalChoice::Cancel)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modal() -> Modal {
        Modal::new(Layout::DEFAULT)
    }

    #[test]
    fn hidden_modal_hits_nothing() {
        let modal = modal();
        assert_eq!(modal.hit(modal.retry_rect().center()), None);
    }

    #[test]
    fn visible_modal_resolves_buttons() {
        let mut modal = modal();
        modal.show();
        assert_eq!(modal.hit(modal.retry_rect().center()), Some(ModalChoice::Retry));
        assert_eq!(modal.hit(modal.cancel_rect().center()), Some(ModalChoice::Cancel));
        assert_eq!(modal.hit(Vec2::new(0.0, 0.0)), None);
    }

    #[test]
    fn buttons_flank_the_board_center() {
        let modal = modal();
        let center = Layout::DEFAULT.center();
        assert!(modal.retry_rect().x + modal.retry_rect().w <= center.x);
        assert!(modal.cancel_rect().x >= center.x);
    }
}
