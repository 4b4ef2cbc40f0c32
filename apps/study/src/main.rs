use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use vocab_core::game::TileState;
use vocab_core::types::{AnswerStatus, PageSelection};
use vocab_core::RoundMode;
use vocab_study::audio::TerminalSpeech;
use vocab_study::commands::{self, PracticeTarget};
use vocab_study::config::Config;
use vocab_study::state::AppState;
use vocab_study::view::{Change, StateObserver};

#[derive(Parser, Debug)]
#[command(version, about = "Vocabulary trainer", long_about = None)]
struct Args {
    /// SQLite file backing local storage (overrides VOCAB_DB_PATH)
    #[arg(long)]
    db: Option<PathBuf>,
    /// Words per set (overrides VOCAB_PAGE_SIZE)
    #[arg(long)]
    page_size: Option<usize>,
    /// Two-column table (target, source) to load at startup
    #[arg(long, value_name = "FILE")]
    upload: Option<PathBuf>,
}

const HELP: &str = "\
commands:
  info | set <n|all> | next | prev | list | contexts | context <name>
  upload <file> | defaults | search <query>
  practice <a1; a2; ...> | practice-bm <a1; ...> | answer <n> <text>
  restore | restore-bm | score | progress | reset
  bm <n> | bookmarks | clear-bookmarks
  play | play-bm | say <n> | stop
  game [level] | mode <seq|random> | click <tile> | board | end
  export <file> | import <file>
  theme | shuffle | tab <name> | help | quit";

struct TerminalView;

impl StateObserver for TerminalView {
    fn on_change(&self, state: &AppState, change: Change) {
        match change {
            Change::Corpus | Change::Selection => {
                let info = commands::set_info(state);
                println!("[{}] {} words", info.label, info.size);
            }
            Change::Progress => {
                let summary = commands::progress_summary(state);
                println!(
                    "progress: {}/{} ({}%)",
                    summary.correct, summary.total, summary.percent
                );
            }
            Change::Bookmarks => println!("{} bookmarked", state.bookmarks.len()),
            Change::Preferences => {}
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    vocab_study::init_tracing();

    let args = Args::parse();
    let mut config = Config::from_env();
    if let Some(db) = args.db {
        config.db_path = db;
    }
    if let Some(page_size) = args.page_size.filter(|&size| size > 0) {
        config.page_size = page_size;
    }

    let mut state = vocab_study::open_state(config, Arc::new(TerminalSpeech::default()))?;
    if let Some(path) = args.upload {
        if let Err(e) = commands::upload_file(&mut state, &path) {
            eprintln!("error: {e}");
        }
    }
    state.set_observer(Box::new(TerminalView));

    println!("{HELP}");
    let info = commands::set_info(&state);
    println!("[{}] {} words", info.label, info.size);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        if command == "quit" || command == "exit" {
            break;
        }
        if let Err(e) = dispatch(&mut state, command, rest.trim()) {
            eprintln!("error: {e}");
        }
    }

    commands::stop_audio(&state);
    commands::stop_game(&state);
    Ok(())
}

fn dispatch(state: &mut AppState, command: &str, rest: &str) -> Result<()> {
    match command {
        "help" => println!("{HELP}"),
        "info" => print_info(state),
        "set" => {
            let selection: PageSelection = rest.parse()?;
            commands::select_set(state, selection);
        }
        "next" => {
            commands::next_set(state);
        }
        "prev" => {
            commands::prev_set(state);
        }
        "list" => {
            for (index, row) in commands::study_rows(state).iter().enumerate() {
                let mark = if row.bookmarked { "*" } else { " " };
                println!(
                    "{:>3}{mark} {}  =  {}  {}",
                    index + 1,
                    row.pair.source,
                    row.pair.target,
                    status_mark(row.status)
                );
            }
        }
        "contexts" => {
            for name in commands::list_contexts(state) {
                println!("  {name}");
            }
        }
        "context" => {
            commands::select_context(state, rest)?;
        }
        "upload" => {
            let summary = commands::upload_file(state, Path::new(rest))?;
            println!("loaded {} words in {} sets", summary.imported, summary.page_count);
        }
        "defaults" => {
            commands::load_default_words(state)?;
        }
        "search" => {
            for hit in commands::search(state, rest) {
                println!("{:>5.1}  {}  =  {}", hit.score, hit.pair.source, hit.pair.target);
            }
        }
        "practice" | "practice-bm" => {
            let target = practice_target(command);
            let answers: Vec<String> = rest.split(';').map(|a| a.trim().to_string()).collect();
            let report = commands::submit_practice(state, target, &answers)?;
            for outcome in &report.outcomes {
                println!(
                    "  {} {}  ->  {}",
                    status_mark(outcome.status),
                    outcome.pair.source,
                    outcome.answer
                );
            }
            println!("{}/{} correct", report.correct, report.total);
        }
        "answer" => {
            let (index, text) = rest.split_once(' ').unwrap_or((rest, ""));
            let pair = pair_at(state, index)?;
            commands::save_partial(state, &pair.source, text.trim())?;
        }
        "restore" | "restore-bm" => {
            for outcome in commands::restore_practice(state, practice_target(command)) {
                println!(
                    "  {} {}  ->  {}",
                    status_mark(outcome.status),
                    outcome.pair.source,
                    outcome.answer
                );
            }
        }
        "score" => {
            let score = commands::score(state, PracticeTarget::CurrentSet);
            println!("{}/{}", score.correct, score.total);
        }
        "progress" => {
            let summary = commands::progress_summary(state);
            println!("{}/{} ({}%)", summary.correct, summary.total, summary.percent);
        }
        "reset" => commands::reset_progress(state)?,
        "bm" => {
            let pair = pair_at(state, rest)?;
            commands::toggle_bookmark(state, &pair)?;
        }
        "bookmarks" => {
            for pair in commands::list_bookmarks(state) {
                println!("  {}  =  {}", pair.source, pair.target);
            }
        }
        "clear-bookmarks" => commands::clear_bookmarks(state)?,
        "play" => {
            commands::play_current_set(state);
        }
        "play-bm" => {
            commands::play_bookmarks(state);
        }
        "say" => {
            let pair = pair_at(state, rest)?;
            commands::play_pair(state, pair);
        }
        "stop" => commands::stop_audio(state),
        "game" => {
            let level = if rest.is_empty() {
                vocab_core::game::DEFAULT_LEVEL
            } else {
                rest.parse()?
            };
            commands::start_game(state, level);
            print_board(state);
        }
        "mode" => {
            let mode = match rest {
                "random" => RoundMode::Random,
                _ => RoundMode::Sequential,
            };
            commands::set_game_mode(state, mode);
        }
        "click" => {
            let selection = commands::click_tile(state, rest.parse()?);
            println!("{selection:?}");
        }
        "board" => print_board(state),
        "end" => commands::stop_game(state),
        "export" => {
            let records = commands::export_progress(state, Path::new(rest))?;
            println!("exported {records} records");
        }
        "import" => {
            let summary = commands::import_progress_file(state, Path::new(rest))?;
            println!("imported {} records", summary.records);
        }
        "theme" => {
            let theme = commands::toggle_theme(state)?;
            println!("theme: {}", theme.as_str());
        }
        "shuffle" => {
            let info = commands::toggle_shuffle(state)?;
            println!("shuffle {}", if info.shuffle { "on" } else { "off" });
        }
        "tab" => commands::set_active_tab(state, rest)?,
        other => println!("unknown command: {other} (try `help`)"),
    }
    Ok(())
}

fn practice_target(command: &str) -> PracticeTarget {
    if command.ends_with("-bm") {
        PracticeTarget::Bookmarks
    } else {
        PracticeTarget::CurrentSet
    }
}

fn pair_at(state: &AppState, index: &str) -> Result<vocab_core::WordPair> {
    let index: usize = index.trim().parse()?;
    state
        .current_view()
        .get(index.wrapping_sub(1))
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("no word #{index} in this set"))
}

fn status_mark(status: AnswerStatus) -> &'static str {
    match status {
        AnswerStatus::Correct => "✓",
        AnswerStatus::Incorrect => "✗",
        AnswerStatus::Unanswered => "·",
    }
}

fn print_info(state: &AppState) {
    let info = commands::set_info(state);
    let prefs = commands::preferences(state);
    println!(
        "[{}] {} words, {} sets, shuffle {}, theme {}",
        info.label,
        info.size,
        info.page_count,
        if info.shuffle { "on" } else { "off" },
        prefs.theme.as_str()
    );
}

fn print_board(state: &AppState) {
    let snapshot = commands::game_snapshot(state);
    println!(
        "score {}  time {}s  level {}{}",
        snapshot.score,
        snapshot.elapsed_seconds,
        snapshot.level,
        if snapshot.locked { "  (locked)" } else { "" }
    );
    for tile in &snapshot.tiles {
        let mark = match tile.state {
            TileState::Hidden => " ",
            TileState::Revealed => ">",
            TileState::Solved => "✓",
            TileState::Wrong => "✗",
        };
        println!("  {mark} {:>3}  {}", tile.id, tile.text);
    }
}
