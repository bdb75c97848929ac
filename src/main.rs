//! Terminal blockfall runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no widget/layout library).

use std::fs::File;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use log::LevelFilter;

use tui_blockfall::cli::Args;
use tui_blockfall::core::{dispatch_audio, FrameTimer, GameSnapshot, GameState, MonotonicClock};
use tui_blockfall::input::handle_key_event;
use tui_blockfall::term::{FrameBuffer, GameView, TerminalBell, TerminalRenderer, Viewport};
use tui_blockfall::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = args.config()?;
    let seed = args.seed_or_random();
    log::info!(
        "starting: seed={seed} board={}x{}",
        config.width,
        config.height
    );

    let mut game = GameState::with_config(config, seed);
    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &mut game));

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        log::warn!("terminal restore failed: {err:#}");
    }
    log::info!(
        "exiting: status={} score={} level={} lines={}",
        game.status().as_str(),
        game.score(),
        game.level(),
        game.lines()
    );
    result
}

fn init_logging(args: &Args) -> Result<()> {
    // The TUI owns the terminal, so logs only go to an explicit file, or to
    // stderr when RUST_LOG asks for them.
    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        env_logger::Builder::new()
            .filter_level(LevelFilter::Info)
            .parse_default_env()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    } else if std::env::var_os("RUST_LOG").is_some() {
        env_logger::init();
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let view = GameView::default();
    let mut bell = TerminalBell::new();
    let mut timer = FrameTimer::new(MonotonicClock::new());

    let mut snap = GameSnapshot::default();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(w, h);

    loop {
        // One clock read drives both gravity and the input wait.
        let frame = timer.frame(TICK_MS);
        game.tick(frame.delta_ms);
        dispatch_audio(game.drain_events(), &mut bell);

        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next tick.
        if event::poll(Duration::from_millis(frame.wait_ms.into()))? {
            match event::read()? {
                Event::Key(key) => match handle_key_event(key) {
                    Some(GameAction::Quit) => return Ok(()),
                    Some(action) => {
                        let applied = game.apply_action(action);
                        log::debug!("action {} applied={applied}", action.as_str());
                        dispatch_audio(game.drain_events(), &mut bell);
                    }
                    None => {}
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }
    }
}
