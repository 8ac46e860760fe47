//! Task command implementations

use anyhow::{bail, Result};
use chrono::Utc;
use taskify_core::{NewTask, Priority, Task, TaskBoard, TaskFilter, TaskUpdate};

use super::{resolve_id, short_id, truncate};

fn priority_icon(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "🔴",
        Priority::Medium => "🟡",
        Priority::Low => "🟢",
    }
}

/// One-line summary used by list and confirmation output
pub fn task_line(task: &Task) -> String {
    let status = if task.completed { "✓" } else { "○" };
    let mut line = format!(
        "[{}] {} {} {:40} │ {}",
        short_id(&task.id),
        status,
        priority_icon(task.priority),
        truncate(&task.title, 40),
        task.category
    );

    if let Some(due) = task.due_date {
        line.push_str(&format!(" │ due {}", due.format("%Y-%m-%d")));
        if task.is_overdue(Utc::now()) {
            line.push_str(" (overdue)");
        }
    }
    if task.ai_suggested {
        line.push_str(" │ 🤖");
    }
    line
}

pub fn cmd_list(board: &TaskBoard, filter: &TaskFilter) -> Result<()> {
    let tasks = board.filtered(filter)?;

    if tasks.is_empty() {
        if *filter == TaskFilter::default() {
            println!("No tasks yet. Add one with:");
            println!("  taskify add \"Write the quarterly report\"");
        } else {
            println!("No tasks match the given filters.");
        }
        return Ok(());
    }

    println!();
    println!("📋 Tasks ({})", tasks.len());
    println!("   ─────────────────────────────────────────────────────────────");

    for task in &tasks {
        println!("   {}", task_line(task));
        if let Some(description) = &task.description {
            println!("              {}", truncate(description, 60));
        }
    }

    Ok(())
}

pub fn cmd_add(board: &mut TaskBoard, new: NewTask) -> Result<()> {
    let task = board.create_task(new)?;

    println!("✅ Added task");
    println!("   {}", task_line(&task));

    Ok(())
}

pub fn cmd_edit(board: &mut TaskBoard, id: &str, update: TaskUpdate) -> Result<()> {
    if update.is_empty() {
        bail!("Nothing to change. Pass at least one field to update (see --help)");
    }

    let id = resolve_id(board, id)?;
    let task = board.update_task(&id, update)?;

    println!("✏️  Updated task");
    println!("   {}", task_line(&task));

    Ok(())
}

pub fn cmd_complete(board: &mut TaskBoard, id: &str) -> Result<()> {
    let id = resolve_id(board, id)?;
    let task = board.toggle_complete(&id)?;

    if task.completed {
        println!("🎉 Completed: {}", task.title);
    } else {
        println!("↩️  Reopened: {}", task.title);
    }

    Ok(())
}

pub fn cmd_delete(board: &mut TaskBoard, id: &str) -> Result<()> {
    let id = resolve_id(board, id)?;
    let task = board.task(&id)?;
    board.delete_task(&id)?;

    println!("🗑️  Deleted: {}", task.title);

    Ok(())
}

pub fn cmd_categories(board: &TaskBoard) -> Result<()> {
    let tasks = board.tasks()?;
    let categories = board.categories()?;

    println!();
    println!("🏷️  Categories");
    println!("   ─────────────────────────────");

    for category in categories {
        let count = tasks.iter().filter(|t| t.category == category).count();
        if count > 0 {
            println!("   {:12} {}", category, count);
        } else {
            println!("   {}", category);
        }
    }

    Ok(())
}
