use serde::{Deserialize, Serialize};

use crate::Vec2;

/// Distance to the target below which the sprite settles into Idle.
const ARRIVE_RADIUS: f32 = 5.0;
/// Movement step per update call, in pixels. Not dt-scaled: the loop runs at
/// a fixed rate, so the walk speed is constant in frames, not in seconds.
const WALK_STEP: f32 = 2.0;
/// Seconds each animation frame stays on screen.
const FRAME_INTERVAL: f32 = 0.1;
/// Unscaled frame edge, in pixels.
const BASE_SIZE: f32 = 32.0;
const DEFAULT_SCALE: f32 = 1.5;
/// Dead-state zoom growth per second, and its cap.
const DEATH_GROWTH: f32 = 10.0;
const MAX_SCALE: f32 = 20.0;

/// Valid transitions:
/// - Idle -> Walking (target farther than the arrive radius)
/// - Walking -> Idle (target within the arrive radius)
/// - any -> Dead (terminal)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteState {
    Idle,
    Walking,
    Dead,
}

impl SpriteState {
    pub const fn is_dead(self) -> bool {
        matches!(self, Self::Dead)
    }
}

impl Default for SpriteState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Frame counts of the three animation tracks. The frontend derives these
/// from its loaded assets; the sprite itself never touches bitmaps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSet {
    pub idle: usize,
    pub walking: usize,
    pub dead: usize,
}

impl TrackSet {
    pub const fn len(self, state: SpriteState) -> usize {
        use SpriteState::*;
        match state {
            Idle => self.idle,
            Walking => self.walking,
            Dead => self.dead,
        }
    }
}

/// Snapshot of everything the renderer needs for one frame, derived fresh
/// from the sprite state each call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpriteFrame {
    pub state: SpriteState,
    pub index: usize,
    pub flipped: bool,
    /// Display edge in pixels, already scaled.
    pub size: f32,
    pub center: Vec2,
}

/// The companion: a state machine over {Idle, Walking, Dead} that walks
/// toward a target point and zooms in on death.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    tracks: TrackSet,
    state: SpriteState,
    center: Vec2,
    /// Board center; spawn point and death anchor.
    home: Vec2,
    frame: usize,
    frame_timer: f32,
    dead_timer: f32,
    scale: f32,
    flipped: bool,
}

impl Sprite {
    pub fn new(tracks: TrackSet, home: Vec2) -> Self {
        Self {
            tracks,
            state: SpriteState::default(),
            center: home,
            home,
            frame: 0,
            frame_timer: 0.0,
            dead_timer: 0.0,
            scale: DEFAULT_SCALE,
            flipped: false,
        }
    }

    pub fn state(&self) -> SpriteState {
        self.state
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Seconds spent dead. Bookkeeping only; nothing transitions out of Dead.
    pub fn dead_timer(&self) -> f32 {
        self.dead_timer
    }

    /// Advances movement, state, and animation by one tick. `target` is the
    /// point the sprite walks toward while alive.
    pub fn update(&mut self, dt: f32, target: Vec2) {
        if !self.state.is_dead() {
            let offset = target - self.center;
            if offset.length() > ARRIVE_RADIUS {
                self.state = SpriteState::Walking;
                self.center += offset.normalized() * WALK_STEP;
            } else {
                self.state = SpriteState::Idle;
            }

            // mirror to face the walk direction
            self.flipped = target.x < self.center.x;

            if self.frame >= self.tracks.len(self.state) {
                self.frame = 0;
            }
        } else {
            self.dead_timer += dt;
            self.scale = (self.scale + dt * DEATH_GROWTH).min(MAX_SCALE);
            self.center = self.home;

            let last = self.tracks.dead.saturating_sub(1);
            if self.frame > last {
                self.frame = last;
            }
        }

        self.advance_animation(dt);
    }

    fn advance_animation(&mut self, dt: f32) {
        self.frame_timer += dt;
        if self.frame_timer >= FRAME_INTERVAL {
            self.frame_timer = 0.0;
            self.frame += 1;
            let len = self.tracks.len(self.state);
            if self.frame >= len {
                // dead track freezes on its last frame, the others loop
                self.frame = if self.state.is_dead() {
                    len.saturating_sub(1)
                } else {
                    0
                };
            }
        }
    }

    /// Terminal transition into Dead. Calling again is a no-op.
    pub fn die(&mut self) {
        if self.state.is_dead() {
            return;
        }
        log::debug!("sprite died");
        self.state = SpriteState::Dead;
        self.frame = 0;
        self.dead_timer = 0.0;
    }

    pub fn renderable(&self) -> SpriteFrame {
        SpriteFrame {
            state: self.state,
            index: self.frame,
            flipped: self.flipped,
            size: BASE_SIZE * self.scale,
            center: self.center,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACKS: TrackSet = TrackSet {
        idle: 4,
        walking: 6,
        dead: 8,
    };

    fn sprite() -> Sprite {
        Sprite::new(TRACKS, Vec2::new(100.0, 100.0))
    }

    #[test]
    fn walks_toward_a_distant_target() {
        let mut sprite = sprite();
        sprite.update(0.016, Vec2::new(200.0, 100.0));

        assert_eq!(sprite.state(), SpriteState::Walking);
        let moved = sprite.center() - Vec2::new(100.0, 100.0);
        assert!((moved.length() - 2.0).abs() < 1e-4);
        assert!(moved.x > 0.0);
    }

    #[test]
    fn idles_when_target_is_close() {
        let mut sprite = sprite();
        sprite.update(0.016, Vec2::new(103.0, 100.0));
        assert_eq!(sprite.state(), SpriteState::Idle);
        assert_eq!(sprite.center(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn idles_exactly_on_target() {
        let mut sprite = sprite();
        sprite.update(0.016, sprite.center());
        assert_eq!(sprite.state(), SpriteState::Idle);
    }

    #[test]
    fn flips_when_target_is_to_the_left() {
        let mut sprite = sprite();
        sprite.update(0.016, Vec2::new(0.0, 100.0));
        assert!(sprite.renderable().flipped);

        sprite.update(0.016, Vec2::new(300.0, 100.0));
        assert!(!sprite.renderable().flipped);
    }

    #[test]
    fn die_is_terminal() {
        let mut sprite = sprite();
        sprite.die();
        for _ in 0..100 {
            sprite.update(0.016, Vec2::new(500.0, 500.0));
            assert_eq!(sprite.state(), SpriteState::Dead);
        }
    }

    #[test]
    fn die_again_is_a_noop() {
        let mut sprite = sprite();
        sprite.die();
        sprite.update(0.3, Vec2::ZERO);
        let frame = sprite.renderable().index;
        let timer = sprite.dead_timer();

        sprite.die();
        assert_eq!(sprite.renderable().index, frame);
        assert_eq!(sprite.dead_timer(), timer);
    }

    #[test]
    fn dead_scale_grows_monotonically_to_the_cap() {
        let mut sprite = sprite();
        sprite.die();
        let mut prev = sprite.scale();
        for _ in 0..200 {
            sprite.update(0.016, Vec2::ZERO);
            assert!(sprite.scale() >= prev);
            assert!(sprite.scale() <= 20.0);
            prev = sprite.scale();
        }
        assert_eq!(prev, 20.0);
    }

    #[test]
    fn dead_sprite_recenters_home() {
        let mut sprite = sprite();
        for _ in 0..10 {
            sprite.update(0.016, Vec2::new(300.0, 300.0));
        }
        assert_ne!(sprite.center(), Vec2::new(100.0, 100.0));

        sprite.die();
        sprite.update(0.016, Vec2::new(300.0, 300.0));
        assert_eq!(sprite.center(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn looping_tracks_wrap_dead_track_clamps() {
        let mut sprite = sprite();
        // 4 idle frames at 0.1s each: one full cycle plus one step
        for _ in 0..5 {
            sprite.update(0.1, sprite.center());
        }
        assert_eq!(sprite.renderable().index, 1);

        sprite.die();
        for _ in 0..20 {
            sprite.update(0.1, Vec2::ZERO);
        }
        assert_eq!(sprite.renderable().index, TRACKS.dead - 1);
    }

    #[test]
    fn frames_advance_on_the_interval() {
        let mut sprite = sprite();
        sprite.update(0.05, sprite.center());
        assert_eq!(sprite.renderable().index, 0);
        sprite.update(0.05, sprite.center());
        assert_eq!(sprite.renderable().index, 1);
    }

    #[test]
    fn display_size_follows_scale() {
        let sprite = sprite();
        assert_eq!(sprite.renderable().size, 48.0);
    }
}
