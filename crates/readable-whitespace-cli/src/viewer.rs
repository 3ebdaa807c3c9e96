use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use readable_whitespace_engine::{DisplayLine, HintMarker, TextBuffer, render_lines};
use std::io::{Stdout, stdout};

/// Scrollable view of one file with its hint lines.
struct Viewer {
    title: String,
    lines: Vec<DisplayLine>,
    glyph: String,
    hint_count: usize,
    scroll: usize,
    /// Rows visible in the content area at the last draw
    page: usize,
}

impl Viewer {
    fn new(title: &str, source: &str, markers: &[HintMarker], glyph: &str) -> Self {
        Self {
            title: title.to_string(),
            lines: render_lines(&TextBuffer::new(source), markers),
            glyph: glyph.to_string(),
            hint_count: markers.len(),
            scroll: 0,
            page: 1,
        }
    }

    fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(self.page)
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll = self
            .scroll
            .saturating_add_signed(delta)
            .min(self.max_scroll());
    }

    fn page_step(&self) -> isize {
        isize::try_from(self.page.max(1)).unwrap_or(isize::MAX)
    }

    fn styled_lines(&self) -> Vec<Line<'static>> {
        let last_number = self
            .lines
            .iter()
            .rev()
            .find_map(|line| match line {
                DisplayLine::Source { number, .. } => Some(number + 1),
                DisplayLine::Hint => None,
            })
            .unwrap_or(1);
        let width = last_number.to_string().len();
        let gutter = Style::default().fg(Color::DarkGray);

        self.lines
            .iter()
            .map(|line| match line {
                DisplayLine::Source { number, text } => Line::from(vec![
                    Span::styled(format!("{:>width$} │ ", number + 1), gutter),
                    Span::raw(text.replace('\t', "    ")),
                ]),
                DisplayLine::Hint => Line::from(vec![
                    Span::styled(format!("{:>width$} │ ", ""), gutter),
                    Span::styled(self.glyph.clone(), Style::default().fg(Color::Cyan)),
                ])
                .style(Style::default().bg(Color::DarkGray)),
            })
            .collect()
    }
}

pub fn run(title: &str, source: &str, markers: &[HintMarker], glyph: &str) -> Result<()> {
    let mut viewer = Viewer::new(title, source, markers, glyph);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_viewer(&mut terminal, &mut viewer);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_viewer(terminal: &mut Terminal<CrosstermBackend<Stdout>>, viewer: &mut Viewer) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, viewer))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => viewer.scroll_by(1),
                KeyCode::Up | KeyCode::Char('k') => viewer.scroll_by(-1),
                KeyCode::PageDown | KeyCode::Char(' ') => viewer.scroll_by(viewer.page_step()),
                KeyCode::PageUp => viewer.scroll_by(-viewer.page_step()),
                KeyCode::Home | KeyCode::Char('g') => viewer.scroll = 0,
                KeyCode::End | KeyCode::Char('G') => viewer.scroll = viewer.max_scroll(),
                _ => {}
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => viewer.scroll_by(3),
                MouseEventKind::ScrollUp => viewer.scroll_by(-3),
                _ => {}
            },
            _ => {}
        }
    }
}

fn ui(f: &mut Frame, viewer: &mut Viewer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    // Borders take two rows
    viewer.page = usize::from(chunks[0].height.saturating_sub(2)).max(1);
    viewer.scroll = viewer.scroll.min(viewer.max_scroll());

    let title = format!("{} ({} hints)", viewer.title, viewer.hint_count);
    let content = Paragraph::new(viewer.styled_lines())
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((u16::try_from(viewer.scroll).unwrap_or(u16::MAX), 0));
    f.render_widget(content, chunks[0]);

    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Up | "),
        Span::raw("↓/j: Down | "),
        Span::raw("PgUp/PgDn: Page | g/G: Top/Bottom"),
    ]);
    f.render_widget(Paragraph::new(help_text), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;
    use readable_whitespace_engine::hints_for_source;

    const SOURCE: &str = "void f() {\n    a();\n    return 1;\n}\n";

    fn viewer() -> Viewer {
        Viewer::new("f.java", SOURCE, &hints_for_source(SOURCE), "~")
    }

    #[test]
    fn hint_lines_are_interleaved() {
        let viewer = viewer();
        assert_eq!(viewer.hint_count, 1);
        assert_eq!(viewer.lines.len(), 5);
        assert_eq!(viewer.lines[2], DisplayLine::Hint);
    }

    #[test]
    fn scrolling_is_clamped() {
        let mut viewer = viewer();
        viewer.page = 2;
        viewer.scroll_by(-5);
        assert_eq!(viewer.scroll, 0);
        viewer.scroll_by(100);
        assert_eq!(viewer.scroll, 3);
    }

    #[test]
    fn gutter_numbers_skip_hint_lines() {
        let lines = viewer().styled_lines();
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(
            text,
            vec![
                "1 │ void f() {",
                "2 │     a();",
                "  │ ~",
                "3 │     return 1;",
                "4 │ }",
            ]
        );
    }

    #[test]
    fn draws_title_and_source() {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        let mut viewer = viewer();
        terminal.draw(|f| ui(f, &mut viewer)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("f.java (1 hints)"));
        assert!(screen.contains("return 1;"));
        assert_eq!(viewer.page, 7);
    }
}
