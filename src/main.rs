use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::Result;
use std::io::{self, BufRead};
use std::path::PathBuf;
use task_cli::{Status, Task, TaskError, TaskStore, validate_description};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "task-cli")]
#[command(about = "Track tasks in a local JSON file")]
#[command(version)]
struct Cli {
    /// Path to the backing file
    #[arg(short, long, default_value = "./db.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// What needs doing (at least 3 characters)
        description: String,
    },

    /// List tasks, optionally only those with a given status
    List {
        /// Show only tasks with this status
        status: Option<Status>,
    },

    /// Replace the description of an existing task
    Update { id: u32, description: String },

    /// Delete a task after confirmation
    Delete { id: u32 },

    /// Mark a task as in progress
    MarkInProgress { id: u32 },

    /// Mark a task as done
    MarkDone { id: u32 },
}

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout stays clean for task output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Every error kind ends the command with a message on stderr; none of
    // them change the exit code.
    if let Err(err) = run(&cli) {
        eprintln!("{err:#}");
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let mut store = TaskStore::open(&cli.file)?;

    match &cli.command {
        Commands::Add { description } => {
            validate_description(description)?;
            let task = store.add(description.clone())?;
            println!("Added task {}: {}", task.id, task.description);
        }
        Commands::List { status } => {
            print_tasks(&store.list(*status));
        }
        Commands::Update { id, description } => {
            let task = store.update(*id, description.clone())?;
            println!("Updated task {}: {}", task.id, task.description);
        }
        Commands::Delete { id } => {
            let task = store.find(*id).ok_or(TaskError::NotFound(*id))?;
            println!("Delete task \"{}\"? (y/n)", task.description);
            if !confirm(io::stdin().lock())? {
                return Err(TaskError::Cancelled.into());
            }
            let removed = store.delete(*id)?;
            println!("Deleted task {}: {}", removed.id, removed.description);
        }
        Commands::MarkInProgress { id } => {
            let task = store.change_status(*id, Status::InProgress)?;
            println!("Task \"{}\" is now in progress", task.description);
            print_tasks(&store.list(None));
        }
        Commands::MarkDone { id } => {
            let task = store.change_status(*id, Status::Done)?;
            println!("Task \"{}\" is now done", task.description);
            print_tasks(&store.list(None));
        }
    }

    Ok(())
}

/// Read one line and accept only a case-insensitive "y".
fn confirm<R: BufRead>(mut input: R) -> io::Result<bool> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}

/// Render tasks as an aligned table, one line per task.
fn print_tasks(tasks: &[&Task]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    println!(
        "{:<4}  {:<12}  {:<16}  {:<16}  {}",
        "ID", "STATUS", "CREATED", "UPDATED", "DESCRIPTION"
    );
    for task in tasks {
        // Pad before colorizing; escape codes would throw the width off
        let status = format!("{:<12}", task.status);
        let status = match task.status {
            Status::Todo => status.yellow(),
            Status::InProgress => status.blue(),
            Status::Done => status.green(),
        };
        println!(
            "{:<4}  {}  {}  {}  {}",
            task.id,
            status,
            task.created_at.format("%Y-%m-%d %H:%M"),
            task.updated_at.format("%Y-%m-%d %H:%M"),
            task.description
        );
    }
}
