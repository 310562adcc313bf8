//! Replay application state and keyboard event loop.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame as TuiFrame, Terminal,
};

use crate::snapshot::Trace;
use crate::ui::render;

/// Delay between frames in auto-play mode. The engines know nothing about
/// this; pacing is purely a replay concern.
const PLAY_INTERVAL: Duration = Duration::from_millis(400);

/// The replay application: a recorded trace plus cursor and play state.
pub struct App {
    trace: Trace,
    title: String,
    status_message: String,
    should_quit: bool,
    is_playing: bool,
    last_play_time: Instant,
}

impl App {
    pub fn new(title: &str, trace: Trace) -> Self {
        App {
            trace,
            title: title.to_string(),
            status_message: String::from("Ready!"),
            should_quit: false,
            is_playing: false,
            last_play_time: Instant::now(),
        }
    }

    /// Run the event loop until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= PLAY_INTERVAL {
                if self.trace.step_forward() {
                    self.status_message = "Playing...".to_string();
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Poll with timeout so auto-play keeps ticking.
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, f: &mut TuiFrame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(f.area());

        render::render_frame(f, chunks[0], &self.title, self.trace.current());
        render::render_status_bar(
            f,
            chunks[1],
            &self.status_message,
            self.trace.position(),
            self.trace.len(),
            self.is_playing,
        );
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.status_message = if self.trace.step_forward() {
                    "Stepped forward".to_string()
                } else {
                    "At end of trace".to_string()
                };
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.status_message = if self.trace.step_backward() {
                    "Stepped backward".to_string()
                } else {
                    "At start of trace".to_string()
                };
            }
            KeyCode::Char(' ') => {
                self.is_playing = !self.is_playing;
                if self.is_playing {
                    // Fire the first auto-step immediately.
                    self.last_play_time = Instant::now()
                        .checked_sub(PLAY_INTERVAL)
                        .unwrap_or_else(Instant::now);
                    self.status_message = "Playing...".to_string();
                } else {
                    self.status_message = "Paused".to_string();
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.trace.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.trace.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }
}
