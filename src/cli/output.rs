//! CLI output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::auth::{AuthState, RouteDecision, RouteGuard};
use crate::catalog::{Category, Course, Level};
use crate::routes::Route;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Development => Color::Blue,
        Category::Design => Color::Magenta,
        Category::DataScience => Color::Green,
        Category::Marketing => Color::DarkYellow,
    }
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Beginner => Color::Green,
        Level::Intermediate => Color::Yellow,
        Level::Advanced => Color::Red,
    }
}

/// Print a table of courses
pub fn print_course_table(courses: &[&Course], favorites: &[u32]) {
    if courses.is_empty() {
        info("No courses match. Try another search or category.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").fg(Color::Cyan),
            Cell::new("Title").fg(Color::Cyan),
            Cell::new("Instructor").fg(Color::Cyan),
            Cell::new("Category").fg(Color::Cyan),
            Cell::new("Level").fg(Color::Cyan),
            Cell::new("Duration").fg(Color::Cyan),
            Cell::new("Rating").fg(Color::Cyan),
            Cell::new("Price").fg(Color::Cyan),
        ]);

    for course in courses {
        let title = if favorites.contains(&course.id) {
            format!("♥ {}", course.title)
        } else {
            course.title.clone()
        };

        table.add_row(vec![
            Cell::new(course.id),
            Cell::new(title),
            Cell::new(&course.instructor),
            Cell::new(course.category).fg(category_color(course.category)),
            Cell::new(course.level).fg(level_color(course.level)),
            Cell::new(&course.duration),
            Cell::new(format!("★ {:.1}", course.rating)),
            Cell::new(&course.price),
        ]);
    }

    println!("{table}");
}

/// Print a single course as the detail view shows it
pub fn print_course_detail(course: &Course, favorite: bool, downloaded: bool, progress: u8) {
    println!();
    println!("{}", course.title.bold());
    println!("{}", course.category.to_string().cyan());
    println!();
    println!("{}", course.description);
    println!();
    println!("  {} {}", "Instructor:".dimmed(), course.instructor);
    println!("  {} {}", "Level:".dimmed(), course.level);
    println!("  {} {}", "Duration:".dimmed(), course.duration);
    println!(
        "  {} {:.1} ({} students)",
        "Rating:".dimmed(),
        course.rating,
        course.students
    );
    println!("  {} {}", "Price:".dimmed(), course.price);
    println!(
        "  {} {}  {} {}  {} {}%",
        "Favorite:".dimmed(),
        yes_no(favorite),
        "Downloaded:".dimmed(),
        yes_no(downloaded),
        "Progress:".dimmed(),
        progress
    );
    println!();
}

fn yes_no(value: bool) -> String {
    if value {
        "yes".green().to_string()
    } else {
        "no".to_string()
    }
}

/// Print the route table with what each auth state sees
pub fn print_route_table(guard: &RouteGuard) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Route").fg(Color::Cyan),
            Cell::new("Path").fg(Color::Cyan),
            Cell::new("Protected").fg(Color::Cyan),
            Cell::new("Signed out").fg(Color::Cyan),
            Cell::new("Signed in").fg(Color::Cyan),
        ]);

    let mut routes: Vec<Route> = Route::STATIC.to_vec();
    routes.push(Route::Detail { course_id: 1 });

    for route in routes {
        let protected = if route.is_protected() {
            Cell::new("yes").fg(Color::Yellow)
        } else {
            Cell::new("no")
        };
        table.add_row(vec![
            Cell::new(route.title()),
            Cell::new(route.path()),
            protected,
            decision_cell(guard.check(AuthState::Unauthenticated, route)),
            decision_cell(guard.check(AuthState::Authenticated, route)),
        ]);
    }

    println!("{table}");
}

fn decision_cell(decision: RouteDecision) -> Cell {
    match decision {
        RouteDecision::Allow(_) => Cell::new("allow").fg(Color::Green),
        RouteDecision::Redirect { to, .. } => Cell::new(format!("→ {}", to)).fg(Color::Red),
    }
}

/// Print one routing decision
pub fn print_decision(action: &str, decision: &RouteDecision) {
    match decision {
        RouteDecision::Allow(route) => {
            println!("  {} {:<24} {}", "→".green(), action, route);
        }
        RouteDecision::Redirect { requested, to } => {
            println!(
                "  {} {:<24} {} {}",
                "↪".yellow(),
                action,
                to,
                format!("(wanted {})", requested).dimmed()
            );
        }
    }
}
