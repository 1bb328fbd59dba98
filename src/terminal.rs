//! Terminal front end.
//!
//! Draws the [`FrameSnapshot`] with `crossterm` and feeds key presses back
//! as held actions. Terminals only report presses (plus auto-repeat), so a
//! press counts as held for a few ticks; the core still sees a fresh
//! [`InputState`](crate::resources::input::InputState) every tick.
use std::io::{Write, stdout};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute, queue};
use log::info;

use crate::components::sprite::SpriteKey;
use crate::game;
use crate::resources::audio::{setup_audio, shutdown_audio};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::GameStates;
use crate::resources::input::InputAction;
use crate::resources::snapshot::FrameSnapshot;

/// Ticks a single key press keeps its action held.
const HOLD_TICKS: u8 = 6;

fn glyph(key: SpriteKey) -> char {
    match key {
        SpriteKey::Platform => '=',
        SpriteKey::Coin => 'o',
        SpriteKey::Enemy => 'M',
        SpriteKey::Player => '@',
    }
}

fn action_for(code: KeyCode) -> Option<InputAction> {
    match code {
        KeyCode::Left | KeyCode::Char('a') => Some(InputAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') => Some(InputAction::MoveRight),
        KeyCode::Up | KeyCode::Char(' ') | KeyCode::Char('w') => Some(InputAction::Jump),
        KeyCode::Char('r') => Some(InputAction::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(InputAction::Quit),
        _ => None,
    }
}

/// Remaining hold ticks per action, refreshed by key presses.
#[derive(Debug)]
struct HeldKeys {
    ticks: [(InputAction, u8); 5],
}

impl HeldKeys {
    fn new() -> Self {
        Self {
            ticks: [
                (InputAction::MoveLeft, 0),
                (InputAction::MoveRight, 0),
                (InputAction::Jump, 0),
                (InputAction::Restart, 0),
                (InputAction::Quit, 0),
            ],
        }
    }

    fn press(&mut self, action: InputAction) {
        for (a, t) in self.ticks.iter_mut() {
            if *a == action {
                *t = HOLD_TICKS;
            } else if (action == InputAction::MoveLeft && *a == InputAction::MoveRight)
                || (action == InputAction::MoveRight && *a == InputAction::MoveLeft)
            {
                // switching direction releases the other one at once
                *t = 0;
            }
        }
    }

    /// Actions held this tick; counts down afterwards.
    fn take(&mut self) -> Vec<InputAction> {
        let mut held = Vec::new();
        for (a, t) in self.ticks.iter_mut() {
            if *t > 0 {
                held.push(*a);
                *t -= 1;
            }
        }
        held
    }
}

/// Rasterise a snapshot into `rows` lines of `cols` characters. The last line
/// is the HUD.
pub fn render_lines(
    snapshot: &FrameSnapshot,
    screen_w: f32,
    screen_h: f32,
    cols: u16,
    rows: u16,
) -> Vec<String> {
    let cols = cols.max(1) as usize;
    let field_rows = rows.saturating_sub(1).max(1) as usize;
    let sx = screen_w / cols as f32;
    let sy = screen_h / field_rows as f32;

    let mut grid = vec![vec![' '; cols]; field_rows];
    // back-to-front: later sprites overwrite earlier cells
    for s in &snapshot.sprites {
        let c0 = (s.x / sx).floor().max(0.0) as usize;
        let c1 = (((s.x + s.w) / sx).ceil() as usize).min(cols);
        let r0 = (s.y / sy).floor().max(0.0) as usize;
        let r1 = (((s.y + s.h) / sy).ceil() as usize).min(field_rows);
        let ch = glyph(s.key);
        for row in grid.iter_mut().take(r1).skip(r0) {
            for cell in row.iter_mut().take(c1).skip(c0) {
                *cell = ch;
            }
        }
    }

    let mut lines: Vec<String> = grid.into_iter().map(|r| r.into_iter().collect()).collect();
    let hud = match snapshot.state {
        GameStates::GameOver => format!(
            "GAME OVER  score {}  best {}  [r] restart  [q] quit",
            snapshot.score, snapshot.best
        ),
        _ => format!(
            "score {}  best {}  [<-/->] move  [space] jump  [q] quit",
            snapshot.score, snapshot.best
        ),
    };
    lines.push(hud.chars().take(cols).collect());
    lines
}

/// Run the interactive game until the player quits.
pub fn run(config: &GameConfig) -> std::io::Result<()> {
    let mut world = game::build_world(config);
    setup_audio(&mut world, |cue| info!("[audio] {:?}", cue));
    let mut schedule = game::build_tick_schedule();
    game::start(&mut world);

    let mut out = stdout();
    terminal::enable_raw_mode()?;
    execute!(
        out,
        terminal::EnterAlternateScreen,
        terminal::Clear(ClearType::All),
        cursor::Hide
    )?;

    let result = (|| -> std::io::Result<()> {
        let (screen_w, screen_h) = config.screen_size();
        let tick_rate = config.tick_duration();
        let dt = tick_rate.as_secs_f32();
        let mut keys = HeldKeys::new();

        while !game::is_quitting(&world) {
            let start_time = Instant::now();

            while event::poll(Duration::from_millis(0))? {
                if let Event::Key(key_event) = event::read()? {
                    if key_event.kind == KeyEventKind::Release {
                        continue;
                    }
                    if let Some(action) = action_for(key_event.code) {
                        keys.press(action);
                    }
                }
            }

            game::tick(&mut world, &mut schedule, &keys.take(), dt);

            let (cols, rows) = terminal::size()?;
            let lines = render_lines(
                world.resource::<FrameSnapshot>(),
                screen_w,
                screen_h,
                cols,
                rows,
            );
            for (i, line) in lines.iter().enumerate() {
                queue!(
                    out,
                    cursor::MoveTo(0, i as u16),
                    terminal::Clear(ClearType::CurrentLine),
                    Print(line)
                )?;
            }
            out.flush()?;

            if let Some(time_to_wait) = tick_rate.checked_sub(start_time.elapsed()) {
                thread::sleep(time_to_wait);
            }
        }
        Ok(())
    })();

    execute!(out, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    shutdown_audio(&mut world);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::zindex::ZIndex;
    use crate::resources::snapshot::SpriteView;

    #[test]
    fn test_render_scales_sprites_into_grid() {
        let snapshot = FrameSnapshot {
            score: 12,
            best: 40,
            state: GameStates::Playing,
            sprites: vec![
                SpriteView {
                    key: SpriteKey::Platform,
                    x: 0.0,
                    y: 80.0,
                    w: 80.0,
                    h: 20.0,
                    flip_h: false,
                    z: ZIndex::PLATFORM,
                },
                SpriteView {
                    key: SpriteKey::Player,
                    x: 40.0,
                    y: 60.0,
                    w: 20.0,
                    h: 20.0,
                    flip_h: false,
                    z: ZIndex::PLAYER,
                },
            ],
            ..FrameSnapshot::default()
        };
        // 10x5 field of 20px cells plus the HUD line
        let lines = render_lines(&snapshot, 200.0, 100.0, 10, 6);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[3], "  @       ");
        assert_eq!(lines[4], "====      ");
        assert!(lines[5].starts_with("score 12"));
    }

    #[test]
    fn test_key_hold_counts_down() {
        let mut keys = HeldKeys::new();
        keys.press(InputAction::Jump);
        for _ in 0..HOLD_TICKS {
            assert_eq!(keys.take(), vec![InputAction::Jump]);
        }
        assert!(keys.take().is_empty());
    }

    #[test]
    fn test_direction_switch_releases_other_side() {
        let mut keys = HeldKeys::new();
        keys.press(InputAction::MoveLeft);
        keys.press(InputAction::MoveRight);
        assert_eq!(keys.take(), vec![InputAction::MoveRight]);
    }
}
