//! Line-oriented driver for the roster core.
//!
//! Stands in for the GUI: reads one command per line from stdin, executes it
//! against the in-memory roster, and prints the feedback. A roster can be
//! seeded from a JSON file of students given as the first argument.

use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::info;

use classtrack_commands::{
    Command, DeleteCommand, MarkExerciseCommand, SortCommand, parse_mark_exercise,
};
use classtrack_core::Index;
use classtrack_roster::{Roster, SortOrder, Student};

const HELP: &str = "commands:
  list                      show all students (clears any find filter)
  find KEYWORD              show students whose name contains KEYWORD
  sort name|id              sort the displayed list
  delete INDEX              delete the student at INDEX
  marke INDEX[:INDEX] ei/N s/y|n
                            mark exercise N as done (y) or not done (n)
  help                      show this text
  exit                      quit";

fn main() -> anyhow::Result<()> {
    classtrack_observability::tracing::init();

    let mut roster = match std::env::args().nth(1) {
        Some(path) => load_roster(&path).with_context(|| format!("loading roster from {path}"))?,
        None => Roster::new(),
    };
    info!(students = roster.len(), "roster ready");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() && !dispatch(line, &mut roster) {
            break;
        }
        print!("> ");
        stdout.flush()?;
    }
    Ok(())
}

fn load_roster(path: &str) -> anyhow::Result<Roster> {
    let contents = std::fs::read_to_string(path)?;
    let students: Vec<Student> = serde_json::from_str(&contents)?;
    Ok(Roster::from_students(students)?)
}

/// Execute one input line. Returns false when the session should end.
fn dispatch(line: &str, roster: &mut Roster) -> bool {
    let (word, args) = match line.split_once(char::is_whitespace) {
        Some((word, args)) => (word, args.trim()),
        None => (line, ""),
    };

    let outcome = match word {
        "exit" => return false,
        "help" => {
            println!("{HELP}");
            return true;
        }
        "list" => {
            roster.clear_filter();
            print_listing(roster);
            return true;
        }
        "find" => {
            if args.is_empty() {
                println!("find: missing keyword");
                return true;
            }
            roster.set_filter(args);
            print_listing(roster);
            return true;
        }
        "sort" => match args {
            "name" => SortCommand::new(SortOrder::ByName).execute(roster),
            "id" => SortCommand::new(SortOrder::ById).execute(roster),
            _ => {
                println!("sort: expected 'name' or 'id'");
                return true;
            }
        },
        "delete" => match args.parse::<usize>().ok().and_then(|n| Index::from_one_based(n).ok()) {
            Some(index) => DeleteCommand::new(index).execute(roster),
            None => {
                println!("delete: expected a positive index");
                return true;
            }
        },
        MarkExerciseCommand::COMMAND_WORD => {
            parse_mark_exercise(args).and_then(|cmd| cmd.execute(roster))
        }
        other => {
            println!("unknown command '{other}' (try 'help')");
            return true;
        }
    };

    match outcome {
        Ok(result) => println!("{result}"),
        Err(err) => println!("{err}"),
    }
    true
}

fn print_listing(roster: &Roster) {
    let displayed = roster.displayed();
    if displayed.is_empty() {
        println!("no students to show");
        return;
    }
    for (i, student) in displayed.iter().enumerate() {
        let done = student
            .exercise_tracker()
            .statuses()
            .iter()
            .map(|s| match s {
                classtrack_roster::ExerciseStatus::Done => 'x',
                classtrack_roster::ExerciseStatus::NotDone => '.',
            })
            .collect::<String>();
        println!("{}. {} [{}]", i + 1, student.name_and_id(), done);
    }
}
