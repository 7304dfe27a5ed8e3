//! Terminal maze runner (default binary).
//!
//! One thread, one frame at a time: poll input, move the player, cast one ray
//! per column, overlay minimap and status line, flush.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use tui_maze::core::{GridMap, Pose, World, WorldConfig};
use tui_maze::input::{should_quit, KeyState};
use tui_maze::logging::{self, LogConfig};
use tui_maze::term::{FrameBuffer, FrameStats, SceneView, TerminalRenderer};

fn main() -> Result<()> {
    logging::init(&LogConfig::from_env())?;

    let config = WorldConfig::from_env();
    tracing::info!(
        fov = config.fov,
        depth = config.depth,
        speed = config.speed,
        caster = config.caster.as_str(),
        "starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    tracing::info!(ok = result.is_ok(), "stopped");
    result
}

fn run(term: &mut TerminalRenderer, config: WorldConfig) -> Result<()> {
    let mut world = World::new(GridMap::default(), Pose::default(), config);
    let caster = world.caster();

    let view = SceneView::default();
    let mut fb = FrameBuffer::new(view.width(), view.height());
    let mut keys = KeyState::new().with_release_events(term.release_events());
    tracing::debug!(release_events = keys.release_events(), "input ready");

    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        let elapsed = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        // Drain pending input without blocking.
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    keys.handle_key_event(key);
                }
                Event::FocusLost => keys.reset(),
                _ => {}
            }
        }

        world.apply_actions(&keys.held(), elapsed);

        view.render_into(&world, caster.as_ref(), FrameStats::new(elapsed), &mut fb);
        term.draw(&fb)?;
    }
}
