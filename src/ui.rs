use crate::input_state::InputState;
use color_eyre::Result;
use crossterm::ExecutableCommand;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::buffer::Cell;
use ratatui::layout::{Position, Rect};
use ratatui::style::Color;
use ratatui::style::Color::*;
use ratatui::{
    DefaultTerminal, Frame,
    style::Stylize,
    text::Line,
    widgets::{Block, Paragraph},
};
use std::time::{Duration, Instant};
use timesweeper::{Action, DisplayValue, GameConfig, Minesweeper, WinState};

const TICK: Duration = Duration::from_secs(1);

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = std::io::stdout().execute(event::DisableMouseCapture);
    }
}

pub fn main(config: GameConfig, seed: Option<u64>) -> Result<()> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let app = App::new(config, rng)?;

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result
}

/// Terminal front-end. Holds no game rules, it only feeds actions into the session and draws it.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    game: Minesweeper,
    input_state: InputState,
    rng: StdRng,
}

impl App {
    pub fn new(config: GameConfig, mut rng: StdRng) -> Result<Self> {
        let game = Minesweeper::new(config, &mut rng)?;
        Ok(Self {
            running: false,
            game,
            input_state: InputState::default(),
            rng,
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        std::io::stdout().execute(event::EnableMouseCapture)?;
        let _guard = TerminalGuard;

        self.running = true;
        self.input_state.last_tick = Instant::now();
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
            self.update()?;
        }
        Ok(())
    }

    /// Delivers due countdown ticks, then the pending player action.
    fn update(&mut self) -> Result<()> {
        while self.input_state.last_tick.elapsed() >= TICK {
            self.input_state.last_tick += TICK;
            self.game.apply(Action::Tick)?;
        }

        let Some(action) = self.input_state.action.take() else {
            return Ok(());
        };
        let diff = self.game.apply(action)?;
        log::debug!("{action:?} changed {} cells", diff.cells.len());
        Ok(())
    }

    fn restart(&mut self) -> Result<()> {
        self.game = self.game.restart(&mut self.rng)?;
        self.input_state.last_tick = Instant::now();
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        const RETRY: &str = "(R)etry (Q)uit";
        const RETRY_SHORT: &str = "(R) (Q)";

        let GameConfig { rows, cols, .. } = self.game.config();
        let width = cols.min(u16::MAX as usize - 2) as u16;
        let height = rows.min(u16::MAX as usize - 2) as u16;
        let retry = if (width as usize) < RETRY.len() {
            RETRY_SHORT
        } else {
            RETRY
        };

        let (title, bottom) = match self.game.status() {
            WinState::InProgress => {
                let mode = if self.game.flag_mode_active() {
                    "flag"
                } else {
                    "open"
                };
                (
                    Line::from(format!("{}s", self.game.remaining_seconds()))
                        .bold()
                        .light_blue()
                        .centered(),
                    Line::from(format!("{} {}", self.game.mines_remaining(), mode)).centered(),
                )
            }
            WinState::Won => (
                Line::from("won!").bold().light_green().centered(),
                Line::from(retry).bold().light_green().centered(),
            ),
            WinState::LostByMine => (
                Line::from("boom").bold().light_red().centered(),
                Line::from(retry).bold().light_red().centered(),
            ),
            WinState::LostByTimeout => (
                Line::from("time's up").bold().light_red().centered(),
                Line::from(retry).bold().light_red().centered(),
            ),
        };
        let area = frame.area().clamp(Rect::new(0, 0, width + 2, height + 2));

        frame.render_widget(
            Paragraph::new("")
                .block(Block::bordered().title(title).title_bottom(bottom))
                .centered(),
            area,
        );

        if area.height < 3 || area.width < 3 {
            return;
        }

        const HIDDEN_COLOR: Color = Reset;
        const WARN_COLOR: Color = LightYellow;
        const NUM_COLOR: Color = Black;

        let w = frame.area().width;
        for j in area.y + 1..area.y + area.height - 1 {
            for i in area.x + 1..area.x + area.width - 1 {
                let Ok((_, value)) = self.game.cell(((j - 1) as usize, (i - 1) as usize)) else {
                    continue;
                };

                let (char, bg, fg) = match value {
                    DisplayValue::Hidden => ('#', Reset, HIDDEN_COLOR),
                    DisplayValue::Flag => ('!', LightRed, WARN_COLOR),
                    DisplayValue::Blank => (' ', Black, Reset),
                    DisplayValue::Number(n) => match n {
                        1 => ('1', LightBlue, NUM_COLOR),
                        2 => ('2', LightCyan, NUM_COLOR),
                        3 => ('3', LightGreen, NUM_COLOR),
                        4 => ('4', LightYellow, NUM_COLOR),
                        5 => ('5', LightMagenta, NUM_COLOR),
                        6 => ('6', Gray, NUM_COLOR),
                        7 => ('7', White, NUM_COLOR),
                        _ => ('8', LightRed, NUM_COLOR),
                    },
                    DisplayValue::Mine => ('*', Black, LightRed),
                };

                let mut c = Cell::new("");
                c.set_char(char).set_fg(fg).set_bg(bg);
                frame.buffer_mut().content[w as usize * j as usize + i as usize] = c;
            }
        }

        let (row, col) = self.input_state.cursor;
        frame.set_cursor_position(Position {
            x: col as u16 + 1,
            y: row as u16 + 1,
        });
    }

    /// Waits for input until the next tick is due.
    fn handle_crossterm_events(&mut self) -> Result<()> {
        let timeout = TICK.saturating_sub(self.input_state.last_tick.elapsed());
        if !event::poll(timeout)? {
            return Ok(());
        }

        match event::read()? {
            // it's important to check KeyEventKind::Press to avoid handling key release events
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key)?,
            Event::Mouse(m) => {
                let GameConfig { rows, cols, .. } = self.game.config();
                if let MouseEventKind::Down(button) = m.kind {
                    let (row, col) = (m.row as usize, m.column as usize);
                    if (1..=rows).contains(&row) && (1..=cols).contains(&col) {
                        self.input_state.cursor = (row - 1, col - 1);
                        self.input_state.action = match button {
                            MouseButton::Left => Some(Action::CellAction(self.input_state.cursor)),
                            MouseButton::Right | MouseButton::Middle => {
                                Some(Action::ToggleFlagMode)
                            }
                        };
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) -> Result<()> {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('r' | 'R')) => self.restart()?,
            (_, KeyCode::Char('x' | ' ') | KeyCode::Enter) => {
                self.input_state.action = Some(Action::CellAction(self.input_state.cursor));
            }
            (_, KeyCode::Char('f' | 'b')) => {
                self.input_state.action = Some(Action::ToggleFlagMode);
            }
            (_, KeyCode::Left) => self.move_cursor(0, -1),
            (_, KeyCode::Right) => self.move_cursor(0, 1),
            (_, KeyCode::Up) => self.move_cursor(-1, 0),
            (_, KeyCode::Down) => self.move_cursor(1, 0),
            _ => {}
        }
        Ok(())
    }

    fn move_cursor(&mut self, dr: isize, dc: isize) {
        let GameConfig { rows, cols, .. } = self.game.config();
        let (row, col) = &mut self.input_state.cursor;
        *row = row.saturating_add_signed(dr).min(rows - 1);
        *col = col.saturating_add_signed(dc).min(cols - 1);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
