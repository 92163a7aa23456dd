use crate::catalog::{
    builtin_exercises, builtin_stats, builtin_templates, builtin_tutorials, format_minutes,
    format_points, Difficulty, Exercise, LearnerStats, Tutorial,
};
use crate::cli::CatalogKind;
use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

fn difficulty_cell(difficulty: Difficulty) -> Cell {
    let color = match difficulty {
        Difficulty::Beginner => Color::Green,
        Difficulty::Intermediate => Color::Yellow,
        Difficulty::Advanced => Color::Red,
    };
    Cell::new(difficulty.as_str()).fg(color)
}

fn base_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    table
}

pub fn exercises_table(exercises: &[Exercise]) -> Table {
    let mut table = base_table(&[
        "Exercise",
        "Difficulty",
        "Time",
        "Topics",
        "Progress",
        "Action",
    ]);
    for exercise in exercises {
        let progress = exercise
            .progress
            .map(|p| format!("{}%", p))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(exercise.title),
            difficulty_cell(exercise.difficulty),
            Cell::new(format_minutes(exercise.estimated_minutes)),
            Cell::new(exercise.topics.join(", ")),
            Cell::new(progress),
            Cell::new(exercise.action_label()),
        ]);
    }
    table
}

pub fn tutorials_table(tutorials: &[Tutorial]) -> Table {
    let mut table = base_table(&[
        "Tutorial",
        "Difficulty",
        "Duration",
        "Lessons",
        "Progress",
        "Action",
    ]);
    for tutorial in tutorials {
        table.add_row(vec![
            Cell::new(tutorial.title),
            difficulty_cell(tutorial.difficulty),
            Cell::new(format_minutes(tutorial.duration_minutes)),
            Cell::new(format!("{}/{}", tutorial.completed_lessons, tutorial.lessons)),
            Cell::new(format!("{}%", tutorial.progress_percent())),
            Cell::new(tutorial.action().label()),
        ]);
    }
    table
}

pub fn templates_table() -> Table {
    let mut table = base_table(&["Template", "Description", "Lines"]);
    for template in builtin_templates() {
        table.add_row(vec![
            Cell::new(template.name),
            Cell::new(template.description),
            Cell::new(template.body.lines().count()),
        ]);
    }
    table
}

pub fn stats_table(stats: &LearnerStats) -> Table {
    let progress = stats.exercise_progress();
    let mut table = base_table(&["Stat", "Value"]);
    table.add_row(vec![
        Cell::new("Exercises Completed"),
        Cell::new(format!(
            "{}/{} ({}%)",
            stats.exercises_completed, stats.total_exercises, progress
        )),
    ]);
    table.add_row(vec![
        Cell::new("Current Streak"),
        Cell::new(format!("{} days", stats.current_streak_days)),
    ]);
    table.add_row(vec![
        Cell::new("Total Points"),
        Cell::new(format_points(stats.total_points)),
    ]);
    table.add_row(vec![Cell::new("Rank"), Cell::new(stats.rank).fg(Color::Cyan)]);
    table
}

/// `codelab catalog <kind>`
pub fn print_catalog(kind: CatalogKind) -> Result<()> {
    let table = match kind {
        CatalogKind::Exercises => exercises_table(&builtin_exercises()),
        CatalogKind::Tutorials => tutorials_table(&builtin_tutorials()),
        CatalogKind::Templates => templates_table(),
        CatalogKind::Stats => stats_table(&builtin_stats()),
    };
    println!("{table}");
    Ok(())
}
