use crate::task_board::TaskBoard;
use anyhow::Result;
use std::io::{self, Write};

pub fn run_app(board: &mut TaskBoard) -> Result<()> {
    loop {
        println!();
        println!("===== School Task Manager =====");
        println!("1. Add a new task");
        println!("2. View pending tasks");
        println!("3. Mark a task as completed");
        println!("4. View completed task history");
        println!("5. Save and exit");

        match prompt("Choose an option")?.as_str() {
            "1" => add_task(board)?,
            "2" => show_pending(board),
            "3" => complete_task(board)?,
            "4" => show_history(board),
            "5" => return Ok(()),
            _ => println!("\nInvalid option. Please choose again."),
        }
    }
}

fn add_task(board: &mut TaskBoard) -> Result<()> {
    println!("\n--- Add New Task ---");
    let subject = prompt("Subject")?;
    let description = prompt("Description")?;
    let due_date = prompt("Due date (YYYY-MM-DD)")?;
    board.add_task(subject, description, due_date);
    println!("\nTask added!");
    Ok(())
}

fn show_pending(board: &TaskBoard) {
    println!("\n--- Pending Tasks ---");
    let tasks = board.sorted_pending();
    if tasks.is_empty() {
        println!("No pending tasks. Well done!");
        return;
    }
    for (i, task) in tasks.iter().enumerate() {
        println!(
            "{}. {}: {} (due {}) [{}]",
            i + 1,
            task.subject,
            task.description,
            task.due_date,
            task.status
        );
    }
}

fn complete_task(board: &mut TaskBoard) -> Result<()> {
    show_pending(board);
    if board.pending.is_empty() {
        return Ok(());
    }

    println!();
    let input = prompt("Task number to mark as completed (0 to cancel)")?;
    let position = match input.parse::<usize>() {
        Ok(n) => n,
        Err(_) => {
            println!("\nError: invalid task number.");
            return Ok(());
        }
    };
    if position == 0 {
        return Ok(());
    }

    match board.complete_task(position) {
        Some(task) => println!("\nTask '{}' marked as completed!", task.description),
        None => println!("\nError: invalid task number."),
    }
    Ok(())
}

fn show_history(board: &TaskBoard) {
    println!("\n--- Completed Task History ---");
    if board.history.is_empty() {
        println!("No tasks completed yet.");
        return;
    }
    for (i, task) in board.history.iter().enumerate() {
        println!(
            "{}. Subject: {}, Description: {}, Due: {}",
            i + 1,
            task.subject,
            task.description,
            task.due_date
        );
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{}: ", message);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
