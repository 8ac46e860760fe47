//! Insight and statistics commands

use anyhow::Result;
use taskify_core::{InsightKind, TaskBoard};

pub fn cmd_insights(board: &mut TaskBoard, json: bool) -> Result<()> {
    let insights = board.insights()?;

    if json {
        println!("{}", serde_json::to_string_pretty(insights)?);
        return Ok(());
    }

    if insights.is_empty() {
        println!("✨ No insights yet. Add some tasks to get started.");
        return Ok(());
    }

    println!();
    println!("🧠 Insights");
    println!("   ─────────────────────────────────────────────────────────────");

    for insight in insights {
        let icon = match insight.kind {
            InsightKind::Priority => "⚠️ ",
            InsightKind::Optimization => "🎯",
            InsightKind::Suggestion => "💡",
        };
        println!("   {} {}", icon, insight.title);
        println!("      {}", insight.description);
        if insight.actionable {
            println!("      → actionable ({})", insight.id);
        }
    }

    Ok(())
}

pub fn cmd_stats(board: &TaskBoard) -> Result<()> {
    let stats = board.stats()?;

    println!();
    println!("📊 Task Statistics");
    println!("   ─────────────────────────────");
    println!("   Total tasks:      {}", stats.total);
    println!("   Completed:        {}", stats.completed);
    println!("   High priority:    {}", stats.high_priority);
    println!("   AI suggested:     {}", stats.ai_suggested);
    println!("   Completion rate:  {}%", stats.completion_rate);

    Ok(())
}
