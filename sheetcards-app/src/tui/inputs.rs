use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use sheetcards_core::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Reveal,
    Choose(Difficulty),
    PrevChoice,
    NextChoice,
    Next,
    None,
}

pub fn map_event(ev: Event) -> Action {
    if let Event::Key(KeyEvent { code, kind, .. }) = ev {
        if kind != KeyEventKind::Press {
            return Action::None;
        }
        match code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char(' ') => Action::Reveal,
            KeyCode::Char('1') | KeyCode::Char('e') => Action::Choose(Difficulty::Easy),
            KeyCode::Char('2') | KeyCode::Char('m') => Action::Choose(Difficulty::Medium),
            KeyCode::Char('3') | KeyCode::Char('h') => Action::Choose(Difficulty::Hard),
            KeyCode::Left => Action::PrevChoice,
            KeyCode::Right => Action::NextChoice,
            KeyCode::Enter | KeyCode::Char('n') => Action::Next,
            _ => Action::None,
        }
    } else {
        Action::None
    }
}
