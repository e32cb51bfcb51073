//! Interactive session shell
//!
//! Drives an [`AppContext`] from the terminal: the login view asks for
//! credentials, the protected area offers the tabs and course actions. Every
//! move goes through the guard, so the menu shown always matches the session.

use anyhow::Result;
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::app::AppContext;
use crate::catalog::{CategoryFilter, CourseFilter};
use crate::cli::{error, info, print_course_detail, print_course_table, print_decision, success};
use crate::config;
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    LogIn,
    Home,
    Search,
    Favorites,
    Profile,
    Settings,
    OpenCourse,
    ToggleFavorite,
    ToggleDownload,
    SetProgress,
    Back,
    LogOut,
    Quit,
}

impl Action {
    fn label(&self) -> &'static str {
        match self {
            Action::LogIn => "Log in",
            Action::Home => "Home",
            Action::Search => "Search courses",
            Action::Favorites => "Favorites",
            Action::Profile => "Profile",
            Action::Settings => "Settings",
            Action::OpenCourse => "Open a course",
            Action::ToggleFavorite => "Toggle favorite",
            Action::ToggleDownload => "Toggle download",
            Action::SetProgress => "Set progress",
            Action::Back => "Back",
            Action::LogOut => "Log out",
            Action::Quit => "Quit",
        }
    }
}

/// Actions offered on `route`
fn actions_for(route: Route, can_go_back: bool) -> Vec<Action> {
    if !route.is_protected() {
        return vec![Action::LogIn, Action::Quit];
    }

    let mut actions = vec![
        Action::Home,
        Action::Search,
        Action::Favorites,
        Action::Profile,
        Action::Settings,
        Action::OpenCourse,
    ];
    if let Route::Detail { .. } = route {
        actions.extend([
            Action::ToggleFavorite,
            Action::ToggleDownload,
            Action::SetProgress,
        ]);
    }
    if can_go_back {
        actions.push(Action::Back);
    }
    actions.extend([Action::LogOut, Action::Quit]);
    actions
}

/// Run the interactive shell until the user quits
pub async fn run_shell() -> Result<()> {
    let term = Term::stdout();
    let theme = ColorfulTheme::default();
    let mut app = AppContext::new(config::load_config_or_default()?);

    term.clear_screen()?;
    println!("{}", "Studygate".bold().cyan());
    println!("{}", "Pick an action; the guard decides where you land.".dimmed());

    loop {
        app.sync();
        print_header(&app);

        let actions = actions_for(app.current_route(), app.navigator().can_go_back());
        let labels: Vec<&str> = actions.iter().map(Action::label).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[choice] {
            Action::Quit => break,
            action => {
                if let Err(e) = run_action(&mut app, &theme, action).await {
                    error(&e.to_string());
                }
            }
        }
    }

    Ok(())
}

fn print_header(app: &AppContext) {
    println!();
    let who = match app.current_user() {
        Some(user) => format!("{} <{}>", user.name, user.email).green().to_string(),
        None => "signed out".yellow().to_string(),
    };
    println!(
        "{} {}  {}",
        "●".cyan(),
        app.current_route().title().bold(),
        who
    );
}

async fn run_action(app: &mut AppContext, theme: &ColorfulTheme, action: Action) -> Result<()> {
    match action {
        Action::LogIn => log_in(app, theme).await?,
        Action::Home => print_decision("home", &app.navigate(Route::Home)?),
        Action::Search => search(app, theme)?,
        Action::Favorites => {
            print_decision("favorites", &app.navigate(Route::Favorites)?);
            let favorites = app.favorites()?;
            let ids: Vec<u32> = favorites.iter().map(|c| c.id).collect();
            println!("{} courses saved", favorites.len());
            print_course_table(&favorites, &ids);
        }
        Action::Profile => {
            print_decision("profile", &app.navigate(Route::Profile)?);
            if let Some(user) = app.current_user() {
                let library = app.library()?;
                println!("  {} {}", "Name:".dimmed(), user.name);
                println!("  {} {}", "Email:".dimmed(), user.email);
                println!(
                    "  {} {} completed, {} in progress",
                    "Courses:".dimmed(),
                    library.completed(),
                    library.in_progress()
                );
            }
        }
        Action::Settings => print_decision("settings", &app.navigate(Route::Settings)?),
        Action::OpenCourse => {
            let id: u32 = Input::with_theme(theme)
                .with_prompt("Course id")
                .interact_text()?;
            print_decision("open course", &app.open_course(id)?);
            show_current_course(app)?;
        }
        Action::ToggleFavorite => {
            if let Some(id) = current_course_id(app) {
                let favorite = app.toggle_favorite(id)?;
                success(if favorite { "Added to favorites" } else { "Removed from favorites" });
            }
        }
        Action::ToggleDownload => {
            if let Some(id) = current_course_id(app) {
                let downloaded = app.toggle_download(id)?;
                success(if downloaded { "Downloaded" } else { "Download removed" });
            }
        }
        Action::SetProgress => {
            if let Some(id) = current_course_id(app) {
                let percent: u8 = Input::with_theme(theme)
                    .with_prompt("Progress (%)")
                    .default(0)
                    .interact_text()?;
                let stored = app.set_progress(id, percent)?;
                success(&format!("Progress set to {}%", stored));
            }
        }
        Action::Back => {
            if let Some(route) = app.navigator_mut().back() {
                info(&format!("Back to {}", route));
            }
        }
        Action::LogOut => {
            let confirmed = Confirm::with_theme(theme)
                .with_prompt("Are you sure you want to logout?")
                .default(false)
                .interact()?;
            if confirmed {
                if let Some(decision) = app.logout() {
                    print_decision("logout", &decision);
                }
            }
        }
        Action::Quit => {}
    }
    Ok(())
}

async fn log_in(app: &mut AppContext, theme: &ColorfulTheme) -> Result<()> {
    let email: String = Input::with_theme(theme)
        .with_prompt("Email")
        .allow_empty(true)
        .interact_text()?;
    let password = Password::with_theme(theme)
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Logging in...");

    let outcome = app.login(&email, &password).await;
    pb.finish_and_clear();

    match (outcome.success, outcome.user) {
        (true, Some(user)) => success(&format!("Welcome back, {}!", user.name)),
        _ => error(&outcome.message.unwrap_or_else(|| "Login failed".to_string())),
    }
    Ok(())
}

fn search(app: &mut AppContext, theme: &ColorfulTheme) -> Result<()> {
    print_decision("home", &app.navigate(Route::Home)?);

    let query: String = Input::with_theme(theme)
        .with_prompt("Search courses")
        .allow_empty(true)
        .interact_text()?;
    let categories = ["All", "Development", "Design", "Data Science", "Marketing"];
    let idx = Select::with_theme(theme)
        .with_prompt("Category")
        .items(&categories)
        .default(0)
        .interact()?;
    let category: CategoryFilter = categories[idx].parse()?;

    let filter = CourseFilter::new(query, category);
    let favorites: Vec<u32> = app.favorites()?.iter().map(|c| c.id).collect();
    print_course_table(&app.search(&filter), &favorites);
    Ok(())
}

fn current_course_id(app: &AppContext) -> Option<u32> {
    match app.current_route() {
        Route::Detail { course_id } => Some(course_id),
        _ => None,
    }
}

fn show_current_course(app: &AppContext) -> Result<()> {
    if let Some(course) = app.current_course() {
        let library = app.library()?;
        print_course_detail(
            course,
            library.is_favorite(course.id),
            library.is_downloaded(course.id),
            library.progress(course.id),
        );
    }
    Ok(())
}
