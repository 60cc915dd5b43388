use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use sheetcards_core::{AnswerView, Difficulty, FlashcardRecord};

fn title_style() -> Style { Style::default().fg(Color::Cyan).bold() }
fn hint_style() -> Style { Style::default().fg(Color::DarkGray) }
fn selected_style() -> Style { Style::default().fg(Color::Yellow).bold() }
fn footer_style() -> Style { Style::default().fg(Color::Gray) }
fn error_style() -> Style { Style::default().fg(Color::Red) }

pub struct StudyView<'a> {
    pub card: &'a FlashcardRecord,
    pub revealed: bool,
    pub choice: Difficulty,
    pub shown: usize,
    pub total: usize,
    pub status: Option<&'a str>,
}

pub fn draw_ui(f: &mut Frame, area: Rect, view: &StudyView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Percentage(40),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::raw("Flashcards").style(title_style()),
        Span::raw(format!("  row {}  ", view.card.table_row())),
        Span::raw(format!("{}/{} seen this round", view.shown, view.total)).style(hint_style()),
    ]));
    f.render_widget(header, chunks[0]);

    let question = Paragraph::new(view.card.question.as_str())
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Question").borders(Borders::ALL));
    f.render_widget(question, chunks[1]);

    draw_answer(f, chunks[2], view);
    draw_choice(f, chunks[3], view.choice);

    let foot = match view.status {
        Some(msg) => Paragraph::new(msg).style(error_style()),
        None => Paragraph::new(Line::from(vec![
            Span::raw(" space reveal  "),
            Span::raw(" 1/2/3 or ←/→ difficulty  "),
            Span::raw(" Enter next  "),
            Span::raw(" q quit "),
        ]))
        .style(footer_style()),
    };
    f.render_widget(foot, chunks[4]);
}

fn draw_answer(f: &mut Frame, area: Rect, view: &StudyView) {
    let block = Block::default().title("Answer").borders(Borders::ALL);
    let text = if !view.revealed {
        Line::from(Span::raw("Press space to show the answer.").style(hint_style()))
    } else {
        match view.card.answer_view() {
            AnswerView::Text(a) => Line::from(a),
            AnswerView::Link(l) => Line::from(vec![
                Span::raw("View answer here: ").style(hint_style()),
                Span::raw(l).underlined(),
            ]),
            AnswerView::Missing => Line::from(Span::raw("No answer provided.").italic()),
        }
    };
    let p = Paragraph::new(text).wrap(Wrap { trim: true }).block(block);
    f.render_widget(p, area);
}

fn draw_choice(f: &mut Frame, area: Rect, choice: Difficulty) {
    let mut spans = vec![Span::raw("How difficult was this?  ")];
    for d in Difficulty::ALL {
        let (mark, style) = if d == choice {
            ("(•) ", selected_style())
        } else {
            ("( ) ", Style::default())
        };
        spans.push(Span::raw(format!("{mark}{d}   ")).style(style));
    }
    let p = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(p, area);
}
