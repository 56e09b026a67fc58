use rand::prelude::*;

use crate::{
    GRID_SIZE, GameConfig, Layout, MINE_COUNT, Minefield, MinefieldGenerator, Modal, ModalChoice,
    RandomMinefieldGenerator, RevealOutcome, Sprite, TrackSet, Vec2,
};

/// Outcome of feeding a pointer press to the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// The press hit nothing actionable.
    Ignored,
    /// A tile was revealed; the game may just have ended.
    Updated,
    /// Retry was chosen; a fresh board is in place.
    Restarted,
    /// Cancel was chosen; the frontend should stop its loop.
    Quit,
}

impl PressOutcome {
    /// Whether this outcome could have caused an update to the game.
    pub const fn has_update(self) -> bool {
        use PressOutcome::*;
        match self {
            Ignored => false,
            Updated => true,
            Restarted => true,
            Quit => true,
        }
    }
}

/// One playthrough's full mutable state: board, companion sprite, game-over
/// modal, and the game-over flag. Owns an RNG so a retry draws a fresh,
/// independent mine layout; a session built from a fixed seed is fully
/// reproducible.
#[derive(Clone, Debug)]
pub struct Session {
    layout: Layout,
    config: GameConfig,
    tracks: TrackSet,
    rng: SmallRng,
    minefield: Minefield,
    sprite: Sprite,
    modal: Modal,
    game_over: bool,
}

impl Session {
    pub fn new(seed: u64, tracks: TrackSet) -> Self {
        let layout = Layout::DEFAULT;
        let config = GameConfig::new((GRID_SIZE, GRID_SIZE), MINE_COUNT);
        let mut rng = SmallRng::seed_from_u64(seed);
        let minefield = fresh_minefield(&mut rng, config);
        Self {
            layout,
            config,
            tracks,
            rng,
            minefield,
            sprite: Sprite::new(tracks, layout.center()),
            modal: Modal::new(layout),
            game_over: false,
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn minefield(&self) -> &Minefield {
        &self.minefield
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Discards the playthrough and builds a fresh one in place: new mine
    /// layout, sprite back to Idle at the board center, modal hidden.
    pub fn reset(&mut self) {
        log::debug!("restarting session");
        self.minefield = fresh_minefield(&mut self.rng, self.config);
        self.sprite = Sprite::new(self.tracks, self.layout.center());
        self.modal.hide();
        self.game_over = false;
    }

    /// Routes a pointer press: tile reveals while playing, modal buttons once
    /// the game is over.
    pub fn handle_press(&mut self, pos: Vec2) -> PressOutcome {
        use PressOutcome::*;

        if self.game_over {
            return match self.modal.hit(pos) {
                Some(ModalChoice::Retry) => {
                    self.reset();
                    Restarted
                }
                Some(ModalChoice::Cancel) => {
                    log::debug!("cancel chosen, quitting");
                    Quit
                }
                None => Ignored,
            };
        }

        let Some(coords) = self.layout.tile_at_point(pos) else {
            return Ignored;
        };
        // coords from the layout hit test are always in bounds
        match self.minefield.reveal(coords) {
            Ok(RevealOutcome::HitMine) => {
                self.lose();
                Updated
            }
            Ok(RevealOutcome::Revealed) => Updated,
            _ => Ignored,
        }
    }

    fn lose(&mut self) {
        log::debug!("game over");
        self.sprite.die();
        self.game_over = true;
        self.modal.show();
    }

    /// Per-frame tick. The sprite chases the pointer while the game runs and
    /// returns home to the board center to die.
    pub fn update(&mut self, dt: f32, pointer: Vec2) {
        let target = if self.game_over {
            self.layout.center()
        } else {
            pointer
        };
        self.sprite.update(dt, target);
    }
}

fn fresh_minefield(rng: &mut SmallRng, config: GameConfig) -> Minefield {
    RandomMinefieldGenerator::new(rng.random()).generate(config)
}
