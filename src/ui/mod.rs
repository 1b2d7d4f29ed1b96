pub mod overlay;
pub mod state;
pub mod theme;

pub use overlay::draw_hud;
pub use state::HudState;
pub use theme::apply_theme;
