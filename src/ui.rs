use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::clock::Clock;
use crate::view::{BorderTone, Highlight};
use crate::words::WordSource;

const HORIZONTAL_MARGIN: u16 = 2;
const VERTICAL_MARGIN: u16 = 1;

/// Word board on top, input box below it, key help at the bottom.
fn areas(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .horizontal_margin(HORIZONTAL_MARGIN)
    .vertical_margin(VERTICAL_MARGIN)
    .areas(area)
}

fn highlight_style(highlight: Highlight) -> Style {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    match highlight {
        Highlight::Pending => bold.fg(Color::White),
        Highlight::Correct => bold.fg(Color::Green),
        Highlight::Incorrect => bold.fg(Color::Red),
    }
}

impl<S: WordSource, C: Clock> Widget for &App<S, C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [board_area, input_area, help_area] = areas(area);
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);

        match self.board.result_lines() {
            Some(lines) => {
                let text: Vec<Line> = lines
                    .into_iter()
                    .map(|l| Line::from(Span::styled(l, bold_style)))
                    .collect();
                Paragraph::new(text)
                    .alignment(Alignment::Left)
                    .render(board_area, buf);
            }
            None => {
                let current = self.session.state().current_index;
                let spans: Vec<Span> = self
                    .session
                    .words()
                    .iter()
                    .enumerate()
                    .map(|(idx, word)| {
                        let mut style = highlight_style(self.board.highlight(idx));
                        if idx == current {
                            style = style.add_modifier(Modifier::UNDERLINED);
                        }
                        Span::styled(format!("{word} "), style)
                    })
                    .collect();

                Paragraph::new(Line::from(spans))
                    .wrap(Wrap { trim: true })
                    .render(board_area, buf);
            }
        }

        let border_style = match (self.input.is_disabled(), self.board.border()) {
            (true, _) => dim_style,
            (false, BorderTone::Neutral) => Style::default().fg(Color::Gray),
            (false, BorderTone::Mismatch) => Style::default().fg(Color::Red),
        };
        Paragraph::new(self.input.text())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .render(input_area, buf);

        let state = self.session.state();
        let help = format!(
            "{}  {}/{}   (tab) reset  (ctrl+r) retry  (esc) quit",
            self.session.phase(),
            state.current_index,
            self.session.word_count()
        );
        Paragraph::new(Span::styled(help, dim_style))
            .alignment(Alignment::Center)
            .render(help_area, buf);
    }
}

/// Draw the whole app and park the cursor after the typed text.
pub fn draw<S: WordSource, C: Clock>(app: &App<S, C>, f: &mut Frame) {
    let area = f.area();
    f.render_widget(app, area);

    if !app.input.is_disabled() {
        let [_, input_area, _] = areas(area);
        let typed = u16::try_from(app.input.text().width()).unwrap_or(u16::MAX);
        let x = input_area.x.saturating_add(1).saturating_add(typed);
        f.set_cursor_position((x.min(input_area.right().saturating_sub(2)), input_area.y + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::session::SessionConfig;
    use crate::typing_policy::KeyAction;
    use crate::typing_session::TypingSession;
    use crate::words::MemoryWordSource;

    fn app(words: &[&str]) -> App<MemoryWordSource, ManualClock> {
        let mut session = TypingSession::new(
            MemoryWordSource::new(words.iter().copied()),
            ManualClock::new(),
            SessionConfig {
                number_of_words: words.len(),
            },
        )
        .unwrap();
        session.start(words.iter().copied().collect());
        App::new(session)
    }

    fn render(app: &App<MemoryWordSource, ManualClock>) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 12));
        app.render(buf.area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn all_text(buf: &Buffer) -> String {
        (0..buf.area.height)
            .map(|y| row_text(buf, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn fg_of(buf: &Buffer, needle: &str) -> Color {
        for y in 0..buf.area.height {
            if let Some(col) = row_text(buf, y).find(needle) {
                return buf[(col as u16, y)].fg;
            }
        }
        panic!("{needle} not rendered");
    }

    #[test]
    fn renders_words_and_help() {
        let app = app(&["cat", "dog", "fish"]);
        let text = all_text(&render(&app));

        assert!(text.contains("cat dog fish"));
        assert!(text.contains("ready  0/3"));
    }

    #[test]
    fn judged_words_are_coloured() {
        let mut app = app(&["cat", "dog", "fish"]);
        for action in [
            KeyAction::Type('c'),
            KeyAction::Type('a'),
            KeyAction::Type('t'),
            KeyAction::Submit,
            KeyAction::Type('d'),
            KeyAction::Submit,
        ] {
            app.apply(action).unwrap();
        }

        let buf = render(&app);
        assert_eq!(fg_of(&buf, "cat"), Color::Green);
        assert_eq!(fg_of(&buf, "dog"), Color::Red);
        assert_eq!(fg_of(&buf, "fish"), Color::White);
    }

    #[test]
    fn huge_buffer_keeps_cursor_inside_input_box() {
        use ratatui::{backend::TestBackend, layout::Position, Terminal};

        let mut app = app(&["cat"]);
        for _ in 0..70_000 {
            app.apply(KeyAction::Type('x')).unwrap();
        }

        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|f| draw(&app, f)).unwrap();

        let [_, input_area, _] = areas(Rect::new(0, 0, 60, 12));
        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!(
            cursor,
            Position::new(input_area.right() - 2, input_area.y + 1)
        );
    }

    #[test]
    fn finished_session_shows_results() {
        let mut app = app(&["a"]);
        app.apply(KeyAction::Type('a')).unwrap();
        app.apply(KeyAction::Submit).unwrap();

        let text = all_text(&render(&app));
        assert!(text.contains("Test completed!"));
        assert!(text.contains("Accuracy: 100.00%"));
        assert!(text.contains("Words Per Minute (WPM): 0.40"));
        assert!(text.contains("finished  1/1"));
    }
}
