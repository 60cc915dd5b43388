use crate::cli::opts::*;
use crate::config::{self, GoogleSettings};

use anyhow::Result;
use sheetcards_core::{
    import_document, pick_next, record_review, AnswerView, CoreError, Difficulty, DocumentSource,
    FlashcardRecord, SessionState, SheetTable,
};
use sheetcards_google::{DocsClient, DocumentFile, SheetsTable};
use sheetcards_json::JsonTable;
use std::io::{stdin, stdout, BufRead, Write};
use std::sync::Arc;

pub async fn run_cli(args: Cli) -> Result<()> {
    let table = open_table(&args).await?;
    match args.cmd.clone() {
        Command::Review(cmd) => review_cmd(table, cmd).await,
        Command::Import(cmd) => import_cmd(&args, table, cmd).await,
        Command::List => list_cmd(table).await,
        // main routes Study to the TUI
        Command::Study => anyhow::bail!("study runs in the terminal UI"),
    }
}

pub async fn open_table(args: &Cli) -> Result<Arc<dyn SheetTable>> {
    match args.store {
        StoreKind::Google => {
            let s = GoogleSettings::from_cli(args)?;
            tracing::debug!(spreadsheet = %s.spreadsheet_id, worksheet = %s.worksheet, "using google sheet");
            let t = SheetsTable::new(s.token, s.spreadsheet_id, s.worksheet)?;
            Ok(Arc::new(t))
        }
        StoreKind::Json => {
            let t = match &args.table_file {
                Some(p) => JsonTable::open(p.clone()).await?,
                None => JsonTable::open_default().await?,
            };
            tracing::debug!(path = %t.path().display(), "using json table");
            Ok(Arc::new(t))
        }
    }
}

async fn review_cmd(table: Arc<dyn SheetTable>, cmd: ReviewCmd) -> Result<()> {
    let rated = review_session(&*table, cmd.max, &mut stdin().lock()).await?;
    println!("\nrated {rated}");
    Ok(())
}

/// Line-mode study loop over `input`. Ends on `q`, on `max` ratings or when
/// the input runs out, returning how many cards were rated.
async fn review_session<T, I>(table: &T, max: Option<usize>, input: &mut I) -> Result<usize>
where
    T: SheetTable + ?Sized,
    I: BufRead,
{
    let snapshot = table.snapshot().await?;
    let layout = snapshot.layout;
    let mut records = snapshot.records;
    let mut session = SessionState::new();
    let mut rng = rand::thread_rng();

    pick_next(&records, &mut session, &mut rng)?;
    let total = records.len();
    let mut rated = 0usize;

    loop {
        if max.is_some_and(|m| rated >= m) {
            break;
        }
        let Some(card) = session.current_record(&records) else { break };
        println!("\n[{}/{}] row {}", session.shown.len() + 1, total, card.table_row());
        println!("Q: {}", card.question);
        if !session.answer_revealed {
            if read_line(input, "[enter=show]")?.is_none() {
                break;
            }
            session.reveal();
        }
        print_answer(card);

        println!("[1=Easy, 2=Medium, 3=Hard, q=quit]");
        let difficulty = loop {
            let Some(line) = read_line(input, "difficulty> ")? else {
                return Ok(rated);
            };
            match parse_choice(&line) {
                Some(Choice::Rate(d)) => break d,
                Some(Choice::Quit) => return Ok(rated),
                None => println!("enter 1/2/3 or q"),
            }
        };

        match record_review(table, &layout, &mut records, &mut session, difficulty, &mut rng).await {
            Ok(_) => rated += 1,
            Err(e @ CoreError::RemoteWrite(_)) => {
                eprintln!("could not save rating: {e}");
                println!("rate again to retry, or q to quit");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(rated)
}

async fn import_cmd(args: &Cli, table: Arc<dyn SheetTable>, cmd: ImportCmd) -> Result<()> {
    let (source, doc_id): (Box<dyn DocumentSource>, String) = match cmd.doc_file {
        Some(path) => {
            let id = path.display().to_string();
            (Box::new(DocumentFile::new(path)), id)
        }
        None => {
            let id = config::required(cmd.doc.as_deref(), "SHEETCARDS_DOCUMENT_ID")?;
            let client = DocsClient::new(config::access_token(args)?)?;
            (Box::new(client), id)
        }
    };

    let report = import_document(&*table, &*source, &doc_id, cmd.dry_run).await?;
    if cmd.dry_run {
        println!("parsed {} question(s), {} new", report.parsed, report.new_pairs.len());
        for p in &report.new_pairs {
            println!("+ {}\t{}", p.question, p.answer);
        }
    } else if report.appended > 0 {
        println!("added {} new question(s)", report.appended);
    } else {
        println!("no new questions to add");
    }
    Ok(())
}

async fn list_cmd(table: Arc<dyn SheetTable>) -> Result<()> {
    let snapshot = table.snapshot().await?;
    for r in &snapshot.records {
        let difficulty = r.difficulty.map(|d| d.as_str()).unwrap_or("-");
        println!("{}\t{}\t{}", r.table_row(), difficulty, r.question);
    }
    Ok(())
}

// ===== Helpers =====
#[derive(Debug, PartialEq, Eq)]
enum Choice {
    Rate(Difficulty),
    Quit,
}

fn parse_choice(s: &str) -> Option<Choice> {
    match s.trim().to_lowercase().as_str() {
        "1" | "e" | "easy" => Some(Choice::Rate(Difficulty::Easy)),
        "2" | "m" | "med" | "medium" => Some(Choice::Rate(Difficulty::Medium)),
        "3" | "h" | "hard" => Some(Choice::Rate(Difficulty::Hard)),
        "q" | "quit" => Some(Choice::Quit),
        _ => None,
    }
}

fn print_answer(card: &FlashcardRecord) {
    match card.answer_view() {
        AnswerView::Text(a) => println!("A: {a}"),
        AnswerView::Link(l) => println!("A: view answer here: {l}"),
        AnswerView::Missing => println!("A: (no answer provided)"),
    }
}

/// `None` once the input is exhausted.
fn read_line<I: BufRead>(input: &mut I, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    stdout().flush().ok();
    let mut s = String::new();
    if input.read_line(&mut s)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(s))
}
