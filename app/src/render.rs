//! Per-frame scene composition: board, sprite, then modal overlay.

use perrito_core::{Session, Vec2};

use crate::assets::Assets;
use crate::canvas::Canvas;
use crate::text::TextRenderer;
use crate::theme;

pub fn draw_frame(
    canvas: &mut Canvas,
    session: &Session,
    assets: &Assets,
    text: &mut TextRenderer,
    pointer: Vec2,
) {
    canvas.clear(theme::BACKGROUND);
    draw_board(canvas, session, assets, text);
    draw_sprite(canvas, session, assets);
    draw_modal(canvas, session, text, pointer);
}

fn draw_board(canvas: &mut Canvas, session: &Session, assets: &Assets, text: &mut TextRenderer) {
    let layout = session.layout();
    for (coords, tile) in session.minefield().tiles() {
        let rect = layout.tile_rect(coords);
        let fill = if tile.revealed {
            theme::TILE_REVEALED
        } else {
            theme::TILE_HIDDEN
        };
        canvas.fill_rect(rect, fill);
        canvas.stroke_rect(rect, 1, theme::TILE_BORDER);

        if !tile.revealed {
            continue;
        }
        if tile.mine {
            canvas.blit_scaled(assets.mine(), rect.center(), rect.w, false);
        } else if tile.adjacent > 0 {
            let color = if tile.adjacent == 1 {
                theme::COUNT_ONE
            } else {
                theme::COUNT_MANY
            };
            text.draw_centered(canvas, &tile.adjacent.to_string(), color, rect);
        }
    }
}

fn draw_sprite(canvas: &mut Canvas, session: &Session, assets: &Assets) {
    let frame = session.sprite().renderable();
    if let Some(img) = assets.frames(frame.state).get(frame.index) {
        canvas.blit_scaled(img, frame.center, frame.size, frame.flipped);
    }
}

fn draw_modal(canvas: &mut Canvas, session: &Session, text: &mut TextRenderer, pointer: Vec2) {
    let modal = session.modal();
    if !modal.is_visible() {
        return;
    }

    canvas.overlay(theme::SCRIM, theme::SCRIM_ALPHA);

    let retry = modal.retry_rect();
    let cancel = modal.cancel_rect();
    let retry_fill = if retry.contains(pointer) {
        theme::RETRY_HOVER
    } else {
        theme::BUTTON
    };
    let cancel_fill = if cancel.contains(pointer) {
        theme::CANCEL_HOVER
    } else {
        theme::BUTTON
    };

    canvas.fill_rect(retry, retry_fill);
    canvas.fill_rect(cancel, cancel_fill);
    canvas.stroke_rect(retry, 2, theme::BUTTON_BORDER);
    canvas.stroke_rect(cancel, 2, theme::BUTTON_BORDER);

    text.draw_centered(canvas, "Retry", theme::BUTTON_LABEL, retry);
    text.draw_centered(canvas, "Cancel", theme::BUTTON_LABEL, cancel);
}
