use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    Google,
    Json,
}

#[derive(Debug, Parser, Clone)]
#[command(name = "sheetcards", version, about = "Spreadsheet-backed flashcards: study, review and import")]
pub struct Cli {
    /// Where the flashcard table lives
    #[arg(long, value_enum, env = "SHEETCARDS_STORE", default_value_t = StoreKind::Google)]
    pub store: StoreKind,

    /// JSON table file when --store json (defaults to app data dir)
    #[arg(long)]
    pub table_file: Option<PathBuf>,

    /// Spreadsheet id, as found in the sheet's URL
    #[arg(long, env = "SHEETCARDS_SPREADSHEET_ID")]
    pub spreadsheet_id: Option<String>,

    /// Worksheet (tab) holding the flashcards
    #[arg(long, env = "SHEETCARDS_WORKSHEET", default_value = "Sheet1")]
    pub worksheet: String,

    /// OAuth bearer token for the Sheets and Docs APIs
    #[arg(long, env = "GOOGLE_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// -v for debug logs, -vv for trace (overrides RUST_LOG)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Study in the terminal UI
    Study,
    /// Review loop on plain stdin/stdout
    Review(ReviewCmd),
    /// Import new questions from a document
    Import(ImportCmd),
    /// List the flashcards in the table
    List,
}

#[derive(Debug, Args, Clone)]
pub struct ReviewCmd {
    /// Stop after this many ratings
    #[arg(long)]
    pub max: Option<usize>,
}

#[derive(Debug, Args, Clone)]
pub struct ImportCmd {
    /// Google Docs document id
    #[arg(long, env = "SHEETCARDS_DOCUMENT_ID")]
    pub doc: Option<String>,
    /// Read a saved documents.get JSON response instead of calling the API
    #[arg(long)]
    pub doc_file: Option<PathBuf>,
    /// Show what would be added without writing
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_import_flags() {
        let cli = Cli::try_parse_from([
            "sheetcards",
            "--store",
            "json",
            "--table-file",
            "/tmp/t.json",
            "import",
            "--doc-file",
            "doc.json",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(cli.store, StoreKind::Json);
        let Command::Import(cmd) = cli.cmd else { panic!("expected import") };
        assert!(cmd.dry_run);
        assert_eq!(cmd.doc_file, Some(PathBuf::from("doc.json")));
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["sheetcards", "review", "-vv", "--max", "3"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Review(cmd) = cli.cmd else { panic!("expected review") };
        assert_eq!(cmd.max, Some(3));
    }

    #[test]
    fn cli_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
