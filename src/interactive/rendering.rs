//! TUI rendering with ratatui
//!
//! [`FrameSurface`] implements the [`Surface`] contract on a ratatui frame.

use super::surface::{Backdrop, MessageKind, Surface, present};
use crate::core::{Mark, WORD_LEN};
use crate::game::{Cell, Game, MAX_TRIES, Statistics};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const CELL_GAP: u16 = 1;
const BOARD_WIDTH: u16 = WORD_LEN as u16 * (CELL_WIDTH + CELL_GAP) - CELL_GAP;
const BOARD_HEIGHT: u16 = MAX_TRIES as u16 * CELL_HEIGHT;

const CORRECT: Color = Color::Rgb(100, 255, 100);
const WRONG_SPOT: Color = Color::Rgb(255, 255, 100);
const ABSENT: Color = Color::Rgb(100, 100, 100);
const BLANK: Color = Color::Rgb(150, 150, 150);

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, game: &Game<'_, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Length(BOARD_HEIGHT), // Board
            Constraint::Length(3),            // Message
            Constraint::Length(1),            // Status bar
            Constraint::Min(0),
        ])
        .split(f.area());

    let board = centered(chunks[1], BOARD_WIDTH);

    let mut surface = FrameSurface {
        frame: &mut *f,
        board,
        message: chunks[2],
    };
    present(game, &mut surface);

    render_header(f, chunks[0]);
    render_status(f, game.stats(), chunks[3]);
}

/// A [`Surface`] backed by a ratatui frame
pub struct FrameSurface<'f, 'a> {
    frame: &'f mut Frame<'a>,
    board: Rect,
    message: Rect,
}

impl FrameSurface<'_, '_> {
    fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let rect = Rect::new(
            self.board.x + col as u16 * (CELL_WIDTH + CELL_GAP),
            self.board.y + row as u16 * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        );
        rect.intersection(self.board)
    }
}

impl Surface for FrameSurface<'_, '_> {
    fn clear(&mut self, backdrop: Backdrop) {
        let bg = match backdrop {
            Backdrop::Neutral => Color::Rgb(255, 255, 255),
            Backdrop::Won => Color::Rgb(150, 255, 150),
            Backdrop::Lost => Color::Rgb(255, 150, 150),
            Backdrop::Flash(intensity) => {
                let fade = 255 - (255.0 * intensity.clamp(0.0, 1.0)) as u8;
                Color::Rgb(255, fade, fade)
            }
        };
        let area = self.frame.area();
        self.frame
            .render_widget(Block::default().style(Style::default().bg(bg)), area);
    }

    fn draw_cell(&mut self, row: usize, col: usize, cell: Cell) {
        let area = self.cell_rect(row, col);
        if area.is_empty() {
            return;
        }

        let (fg, bg) = match cell.mark {
            Mark::Correct => (Color::Black, CORRECT),
            Mark::WrongSpot => (Color::Black, WRONG_SPOT),
            Mark::Absent => (Color::White, ABSENT),
            Mark::Unknown => (Color::Black, BLANK),
        };
        let letter = cell
            .letter
            .map(|l| char::from(l.to_ascii_uppercase()).to_string())
            .unwrap_or_default();

        let tile = Paragraph::new(letter)
            .alignment(Alignment::Center)
            .style(Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        self.frame.render_widget(tile, area);
    }

    fn draw_message(&mut self, text: &str, kind: MessageKind) {
        let color = match kind {
            MessageKind::Info => Color::DarkGray,
            MessageKind::Success => Color::Green,
            MessageKind::Error => Color::Red,
        };
        let message = Paragraph::new(text.to_string())
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::TOP | Borders::BOTTOM));
        self.frame.render_widget(message, self.message);
    }

    fn present_frame(&mut self) {
        // `Terminal::draw` flushes once the closure returns
    }
}

fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WHYDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_status(f: &mut Frame, stats: &Statistics, area: Rect) {
    let text = format!(
        "Played: {} | Win: {:.0}% | Streak: {} (best {})",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    );
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::Key;
    use crate::wordlists::WordList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn word_list(words: &[&str]) -> WordList {
        WordList::new(words.iter().map(|w| Word::new(w).unwrap()).collect()).unwrap()
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn board_fits_standard_terminal() {
        assert_eq!(BOARD_WIDTH, 39);
        assert_eq!(BOARD_HEIGHT, 18);
    }

    #[test]
    fn renders_header_letters_and_help() {
        let words = word_list(&["crane", "slate"]);
        let mut game = Game::new(&words, StdRng::seed_from_u64(1));
        for c in "sla".chars() {
            game.handle_key(Key::from_char(c).unwrap());
        }

        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| ui(f, &game)).unwrap();
        let text = screen(&terminal);

        assert!(text.contains("WHYDLE"));
        assert!(text.contains('S'));
        assert!(text.contains('L'));
        assert!(text.contains("Try 1/6"));
        assert!(text.contains("Played: 0"));
    }

    #[test]
    fn renders_win_message_and_stats() {
        let words = word_list(&["crane"]);
        let mut game = Game::new(&words, StdRng::seed_from_u64(1));
        for c in "crane".chars() {
            game.handle_key(Key::from_char(c).unwrap());
        }
        game.handle_key(Key::Submit);

        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| ui(f, &game)).unwrap();
        let text = screen(&terminal);

        assert!(text.contains("Solved in 1/6"));
        assert!(text.contains("Played: 1"));
        assert!(text.contains("Win: 100%"));
    }

    #[test]
    fn cells_are_clipped_to_board_area() {
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        let tile = Cell {
            letter: Some(b'x'),
            mark: Mark::Correct,
        };
        terminal
            .draw(|f| {
                let mut surface = FrameSurface {
                    frame: &mut *f,
                    board: Rect::new(0, 0, BOARD_WIDTH, 2 * CELL_HEIGHT),
                    message: Rect::new(0, 10, 40, 2),
                };
                for row in 0..MAX_TRIES {
                    surface.draw_cell(row, 0, tile);
                }
            })
            .unwrap();

        let text = screen(&terminal);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[4].contains('X'));
        assert!(lines[6..].iter().all(|line| line.trim().is_empty()));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let words = word_list(&["crane"]);
        let game = Game::new(&words, StdRng::seed_from_u64(1));

        let mut terminal = Terminal::new(TestBackend::new(12, 6)).unwrap();
        terminal.draw(|f| ui(f, &game)).unwrap();
    }
}
