use crate::tui::{inputs::{map_event, Action}, views::{self, StudyView}};
use crossterm::{
    event::{self},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::ThreadRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use sheetcards_core::{
    pick_next, record_review, ColumnLayout, Difficulty, FlashcardRecord, SessionState, SheetTable,
};
use std::io::{stdout, Stdout};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Interactive study screen. Owns the session state; every key press is
/// handled to completion, remote write included, before the next is read.
pub struct TuiApp {
    pub table: Arc<dyn SheetTable>,
    pub rt: Arc<Runtime>,
    layout: ColumnLayout,
    records: Vec<FlashcardRecord>,
    session: SessionState,
    choice: Difficulty,
    status: Option<String>,
    rng: ThreadRng,
}

impl TuiApp {
    pub fn new(table: Arc<dyn SheetTable>, rt: Arc<Runtime>) -> Self {
        Self {
            table,
            rt,
            layout: ColumnLayout::default(),
            records: vec![],
            session: SessionState::new(),
            choice: Difficulty::Easy,
            status: None,
            rng: rand::thread_rng(),
        }
    }

    fn load(&mut self) -> anyhow::Result<()> {
        let snapshot = self.rt.block_on(self.table.snapshot())?;
        self.layout = snapshot.layout;
        self.records = snapshot.records;
        self.session = SessionState::new();
        pick_next(&self.records, &mut self.session, &mut self.rng)?;
        Ok(())
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        // fail before touching the terminal when there is nothing to show
        self.load()?;

        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.mainloop(&mut terminal);

        disable_raw_mode().ok();
        let mut out: Stdout = std::io::stdout();
        execute!(out, LeaveAlternateScreen).ok();
        terminal.show_cursor().ok();

        res
    }

    fn mainloop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| {
                if let Some(card) = self.session.current_record(&self.records) {
                    let view = StudyView {
                        card,
                        revealed: self.session.answer_revealed,
                        choice: self.choice,
                        shown: self.session.shown.len(),
                        total: self.records.len(),
                        status: self.status.as_deref(),
                    };
                    let area = f.size();
                    views::draw_ui(f, area, &view);
                }
            })?;

            if event::poll(std::time::Duration::from_millis(100))? {
                match self.handle(map_event(event::read()?)) {
                    Flow::Continue => {}
                    Flow::Quit => break,
                }
            }
        }
        Ok(())
    }

    fn handle(&mut self, action: Action) -> Flow {
        match action {
            Action::Quit => return Flow::Quit,
            Action::Reveal => self.session.reveal(),
            Action::Choose(d) => self.choice = d,
            Action::PrevChoice => self.choice = step(self.choice, -1),
            Action::NextChoice => self.choice = step(self.choice, 1),
            Action::Next => self.next_card(),
            Action::None => {}
        }
        Flow::Continue
    }

    /// Saves the chosen difficulty for the card on screen and draws the next.
    /// On a failed save the same card stays up; pressing Next again retries.
    fn next_card(&mut self) {
        let res = self.rt.block_on(record_review(
            &*self.table,
            &self.layout,
            &mut self.records,
            &mut self.session,
            self.choice,
            &mut self.rng,
        ));
        match res {
            Ok(id) => {
                tracing::debug!(next = id, "advanced");
                self.status = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not save rating");
                self.status = Some(format!("{e} (Enter to retry)"));
            }
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

fn step(d: Difficulty, by: isize) -> Difficulty {
    let all = Difficulty::ALL;
    let i = all.iter().position(|x| *x == d).unwrap_or(0) as isize;
    let n = all.len() as isize;
    all[(i + by).rem_euclid(n) as usize]
}
