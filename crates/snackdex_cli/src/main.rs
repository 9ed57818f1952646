//! Console presentation for the snackdex core.
//!
//! # Responsibility
//! - Drive `SnackController` from an interactive prompt.
//! - Keep all rendering concerns (table layout, image URL composition,
//!   confirmation prompt) out of the core crate.
//!
//! # Invariants
//! - Store failures after startup are printed and the loop continues.
//! - A failed initial connection is the one fatal case.

use snackdex_core::db::open_db;
use snackdex_core::{
    default_log_level, init_logging, DeleteDecision, DeleteOutcome, MutationOutcome,
    SnackController, SnackStore, SqliteSnackStore,
};
use std::io::{BufRead, Write};

const DEFAULT_DB_FILE: &str = "snackdex.db";
// Presentation-only: the store keeps bare file names.
const IMAGE_BASE_URL: &str = "http://www.xxx.com/";

fn main() {
    let db_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DB_FILE.to_string());

    let log_dir = std::env::temp_dir().join("snackdex-logs");
    if let Some(log_dir) = log_dir.to_str() {
        if let Err(err) = init_logging(default_log_level(), log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("cannot open database `{db_path}`: {err}");
            std::process::exit(1);
        }
    };

    let mut controller = SnackController::new(SqliteSnackStore::new(&conn));
    if let Err(err) = controller.refresh() {
        eprintln!("cannot load snack listing: {err}");
        std::process::exit(1);
    }

    println!(
        "snackdex {} ({} record(s) loaded)",
        snackdex_core::core_version(),
        controller.mirror().len()
    );
    println!("commands: list, select <row>, add, update, delete, refresh, quit");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();
        let Some(Ok(line)) = lines.next() else {
            break;
        };

        let mut words = line.split_whitespace();
        match words.next() {
            None => {}
            Some("list") => render_listing(&controller),
            Some("refresh") => run(controller.refresh().map(|()| "refreshed".to_string())),
            Some("select") => select(&mut controller, words.next()),
            Some("add") => {
                prompt_fields(&mut lines, &mut controller);
                run(controller.add().map(|id| format!("added record {id}")));
            }
            Some("update") => {
                if controller.selection().is_none() {
                    println!("select a row first");
                    continue;
                }
                prompt_fields(&mut lines, &mut controller);
                run(controller.update().map(describe_mutation));
            }
            Some("delete") => {
                if controller.selection().is_none() {
                    println!("select a row first");
                    continue;
                }
                let decision = confirm_delete(&mut lines);
                run(controller.delete(decision).map(describe_delete));
            }
            Some("quit") | Some("exit") => break,
            Some(other) => println!("unknown command `{other}`"),
        }
    }
}

fn run(result: Result<String, snackdex_core::CommandError>) {
    match result {
        Ok(message) => println!("{message}"),
        Err(err) => println!("error: {err}"),
    }
}

fn describe_mutation(outcome: MutationOutcome) -> String {
    match outcome {
        MutationOutcome::Applied => "updated".to_string(),
        MutationOutcome::MissingRow => "record no longer exists; listing refreshed".to_string(),
    }
}

fn describe_delete(outcome: DeleteOutcome) -> String {
    match outcome {
        DeleteOutcome::Deleted => "deleted".to_string(),
        DeleteOutcome::MissingRow => "record no longer exists; listing refreshed".to_string(),
        DeleteOutcome::Declined => "kept".to_string(),
    }
}

fn render_listing<S: SnackStore>(controller: &SnackController<S>) {
    if controller.mirror().is_empty() {
        println!("(no records)");
        return;
    }
    for (row, record) in controller.mirror().iter().enumerate() {
        let image = if record.fields.image_name.is_empty() {
            String::new()
        } else {
            format!("{IMAGE_BASE_URL}{}", record.fields.image_name)
        };
        println!(
            "{:>3}. [{}] {} | {} | {} | {} | {}",
            row + 1,
            record.id,
            record.fields.title,
            record.fields.japanese,
            record.fields.english,
            record.fields.description,
            image
        );
    }
}

fn select<S: SnackStore>(controller: &mut SnackController<S>, arg: Option<&str>) {
    let Some(row) = arg.and_then(|raw| raw.parse::<usize>().ok()).filter(|n| *n > 0) else {
        println!("usage: select <row>");
        return;
    };
    match controller.select_row(row - 1) {
        Some(id) => println!("selected record {id}"),
        None => println!("no such row"),
    }
}

fn prompt_fields<B: BufRead, S: SnackStore>(
    lines: &mut std::io::Lines<B>,
    controller: &mut SnackController<S>,
) {
    // Values are taken verbatim; an empty line stores an empty string.
    let prompts: [(&str, fn(&mut snackdex_core::SnackFields) -> &mut String); 5] = [
        ("title", |f| &mut f.title),
        ("japanese", |f| &mut f.japanese),
        ("english", |f| &mut f.english),
        ("description", |f| &mut f.description),
        ("image name", |f| &mut f.image_name),
    ];

    for (label, slot) in prompts {
        print!("{label} (now `{}`): ", slot(controller.form_mut()));
        let _ = std::io::stdout().flush();
        match lines.next() {
            Some(Ok(value)) => *slot(controller.form_mut()) = value,
            _ => return,
        }
    }
}

fn confirm_delete<B: BufRead>(lines: &mut std::io::Lines<B>) -> DeleteDecision {
    print!("really delete this record? [y/N]: ");
    let _ = std::io::stdout().flush();
    match lines.next() {
        Some(Ok(answer)) if answer.trim().eq_ignore_ascii_case("y") => DeleteDecision::Confirmed,
        _ => DeleteDecision::Declined,
    }
}
