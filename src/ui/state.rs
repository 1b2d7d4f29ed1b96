use std::time::Instant;

use crate::config::RenderMode;

/// What the overlay shows. Counts are fixed after setup, FPS is refreshed
/// about once per second by [`HudState::tick`].
pub struct HudState {
    pub visible: bool,
    pub mode: RenderMode,
    pub facets: usize,
    pub vertices: u32,
    pub fps: f32,

    frame_count: u32,
    fps_timer: Instant,
}

impl HudState {
    pub fn new(mode: RenderMode, facets: usize, vertices: u32) -> Self {
        Self {
            visible: true,
            mode,
            facets,
            vertices,
            fps: 0.0,
            frame_count: 0,
            fps_timer: Instant::now(),
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Counts one presented frame.
    pub fn tick(&mut self) {
        self.frame_count += 1;
        let elapsed = self.fps_timer.elapsed().as_secs_f32();
        if elapsed >= 1.0 {
            self.fps = self.frame_count as f32 / elapsed;
            log::trace!("{:.1} fps", self.fps);
            self.frame_count = 0;
            self.fps_timer = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_visibility() {
        let mut hud = HudState::new(RenderMode::Lines, 12, 72);
        assert!(hud.visible);
        hud.toggle();
        assert!(!hud.visible);
        hud.toggle();
        assert!(hud.visible);
    }

    #[test]
    fn fps_waits_for_a_full_second() {
        let mut hud = HudState::new(RenderMode::Triangles, 4, 12);
        for _ in 0..10 {
            hud.tick();
        }
        assert_eq!(hud.fps, 0.0);
        assert_eq!(hud.frame_count, 10);
    }
}
