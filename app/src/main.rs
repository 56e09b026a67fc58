use std::path::Path;

use anyhow::Context as _;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use perrito_core::Session;

use crate::app::Frontend;
use crate::assets::Assets;
use crate::text::TextRenderer;

mod app;
mod assets;
mod canvas;
mod render;
mod text;
mod theme;

/// Directory holding the sprite frames, mine glyph, and UI font.
const ASSET_DIR: &str = "assets";
const FONT_SIZE: f32 = 24.0;

/// Minesweeper with a companion puppy that chases your cursor.
#[derive(Debug, Parser)]
#[command(name = "perrito", version)]
struct Cli {
    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .init();

    let assets = Assets::load(Path::new(ASSET_DIR)).context("loading assets")?;
    let text = TextRenderer::new(&assets.font_data, FONT_SIZE).context("loading UI font")?;

    let seed = rand::random();
    log::info!("starting session with seed {seed}");
    let session = Session::new(seed, assets.tracks());

    Frontend::new(session, assets, text).run()
}
