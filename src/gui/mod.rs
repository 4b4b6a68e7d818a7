//! eframe front end.
//!
//! The window only forwards clicks and frame time to the [`Session`] and
//! draws what it reports through [`Event`]s. While a dialog is open the
//! session is not advanced. Dialogs queue up, so a time's-up notice is still
//! shown when the forced computer shot also ends the game.

mod cell;
mod text;

pub use cell::{cell_face, CellFace};
pub use text::{describe_event, instructions, status_text, timer_text, winner_message};

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use eframe::egui::{self, Align2, RichText};
use log::{debug, info, trace};

use crate::core::{Board, Position, BOARD_SIZE};
use crate::session::{Event, Phase, Session, SessionError, Winner};

/// Upper bound between repaints so the countdown keeps moving without input.
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dialog {
    Start,
    Instructions,
    TimesUp,
    GameOver(Winner),
}

pub struct BattleshipApp {
    session: Session,
    /// Front dialog is on screen; the rest wait their turn.
    dialogs: VecDeque<Dialog>,
    time_left: u32,
    last_action: Option<String>,
    last_frame: Option<Instant>,
}

impl BattleshipApp {
    pub fn new(session: Session) -> Self {
        let time_left = session.config().turn_seconds;
        Self {
            session,
            dialogs: VecDeque::from([Dialog::Start]),
            time_left,
            last_action: None,
            last_frame: None,
        }
    }

    fn apply(&mut self, result: Result<Vec<Event>, SessionError>) {
        match result {
            Ok(events) => events.into_iter().for_each(|e| self.on_event(e)),
            Err(e) => debug!("click ignored: {}", e),
        }
    }

    fn on_event(&mut self, event: Event) {
        trace!("{:?}", event);
        if let Some(line) = describe_event(&event) {
            info!("{}", line);
            self.last_action = Some(line);
        }
        match event {
            Event::Countdown(seconds) => self.time_left = seconds,
            Event::Reset => self.time_left = self.session.config().turn_seconds,
            Event::TimeExpired => self.dialogs.push_back(Dialog::TimesUp),
            Event::GameOver(winner) => self.dialogs.push_back(Dialog::GameOver(winner)),
            _ => {}
        }
    }

    /// Replaces the dialog on screen with `next`, or just closes it.
    fn close_dialog(&mut self, next: Option<Dialog>) {
        self.dialogs.pop_front();
        if let Some(next) = next {
            self.dialogs.push_front(next);
        }
    }

    fn elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let dt = self.last_frame.map(|t| now - t).unwrap_or_default();
        self.last_frame = Some(now);
        dt
    }

    fn boards(&mut self, ui: &mut egui::Ui) {
        let phase = self.session.phase();
        let modal = !self.dialogs.is_empty();
        let engine = self.session.engine();
        let mut placed = None;
        let mut fired = None;

        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.label("User Board");
                placed = draw_board(ui, "user_board", engine.user_board(), true);
            });
            ui.add_space(cell::CELL_SIZE);
            ui.vertical(|ui| {
                ui.label("Computer Board");
                fired = draw_board(ui, "computer_board", engine.computer_board(), false);
            });
        });

        if modal {
            return;
        }
        if let Some(pos) = placed.filter(|_| phase == Phase::PlacingShips) {
            let result = self.session.place_ship(pos);
            self.apply(result);
        }
        if let Some(pos) = fired.filter(|_| phase == Phase::UserTurn) {
            let result = self.session.fire(pos);
            self.apply(result);
        }
    }

    fn dialogs(&mut self, ctx: &egui::Context) {
        let Some(&dialog) = self.dialogs.front() else {
            return;
        };
        match dialog {
            Dialog::Start => {
                modal_window(ctx, "Start Game", [300.0, 200.0], |ui| {
                    ui.label(RichText::new(text::WELCOME).size(16.0).strong());
                    ui.add_space(10.0);
                    if ui
                        .add(egui::Button::new(RichText::new("Start Game").size(14.0).strong())
                            .min_size(egui::vec2(120.0, 40.0)))
                        .clicked()
                    {
                        self.close_dialog(None);
                        let result = self.session.start();
                        self.apply(result);
                    }
                    if ui
                        .add(egui::Button::new(RichText::new("Instructions").size(13.0))
                            .min_size(egui::vec2(120.0, 35.0)))
                        .clicked()
                    {
                        self.close_dialog(Some(Dialog::Instructions));
                    }
                });
            }
            Dialog::Instructions => {
                let turn_seconds = self.session.config().turn_seconds;
                modal_window(ctx, text::INSTRUCTIONS_TITLE, [360.0, 240.0], |ui| {
                    ui.label(instructions(turn_seconds));
                    if ui.button("OK").clicked() {
                        self.close_dialog(Some(Dialog::Start));
                    }
                });
            }
            Dialog::TimesUp => {
                modal_window(ctx, text::TIMES_UP_TITLE, [300.0, 120.0], |ui| {
                    ui.label(text::TIMES_UP);
                    if ui.button("OK").clicked() {
                        self.close_dialog(None);
                    }
                });
            }
            Dialog::GameOver(winner) => {
                modal_window(ctx, "Game Over!", [300.0, 150.0], |ui| {
                    ui.label(RichText::new(text::winner_message(winner)).size(16.0).strong());
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        let size = egui::vec2(100.0, 35.0);
                        if ui.add(egui::Button::new("Play Again").min_size(size)).clicked() {
                            self.close_dialog(None);
                            let result = self.session.reset();
                            self.apply(result);
                        }
                        if ui.add(egui::Button::new("Exit").min_size(size)).clicked() {
                            self.close_dialog(None);
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
            }
        }
    }
}

impl eframe::App for BattleshipApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt = self.elapsed();
        if self.dialogs.is_empty() {
            let result = self.session.advance(dt);
            self.apply(result);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(status_text(self.session.phase()));
            ui.label(timer_text(self.time_left));
            ui.add_space(8.0);
            self.boards(ui);
            if let Some(line) = &self.last_action {
                ui.add_space(8.0);
                ui.label(line.as_str());
            }
        });
        self.dialogs(ctx);

        ctx.request_repaint_after(FRAME_INTERVAL);
    }
}

/// Draws a board as a grid of buttons and returns the clicked cell, if any.
fn draw_board(ui: &mut egui::Ui, id: &str, board: &Board, reveal_ships: bool) -> Option<Position> {
    let mut clicked = None;
    egui::Grid::new(id).spacing([4.0, 4.0]).show(ui, |ui| {
        for row in 0..BOARD_SIZE as usize {
            for col in 0..BOARD_SIZE as usize {
                let Ok(pos) = Position::new(row, col) else {
                    continue;
                };
                let face = cell_face(board.cell(pos), reveal_ships);
                if ui.add(face.button()).clicked() {
                    clicked = Some(pos);
                }
            }
            ui.end_row();
        }
    });
    clicked
}

fn modal_window(
    ctx: &egui::Context,
    title: &str,
    size: [f32; 2],
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .fixed_size(size)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(add_contents);
        });
}

/// Opens the game window and blocks until it is closed.
pub fn run(session: Session) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(text::WINDOW_TITLE)
            .with_inner_size([600.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        text::WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(BattleshipApp::new(session)))),
    )
    .map_err(|e| anyhow::anyhow!("window error: {}", e))
}
