//! CLI command implementations

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::app::AppContext;
use crate::catalog::{CategoryFilter, CourseFilter};
use crate::cli::{
    error, info, print_course_detail, print_course_table, print_decision, print_route_table,
    success, warn, OutputFormat,
};
use crate::config::{self, loader::CONFIG_FILENAME};
use crate::routes::Route;

/// Create a studygate.toml configuration file
pub async fn init(force: bool) -> Result<()> {
    let config_path = Path::new(CONFIG_FILENAME);

    if config_path.exists() && !force {
        warn(&format!("{} already exists (use --force to overwrite)", CONFIG_FILENAME));
        return Ok(());
    }

    fs::write(config_path, config::loader::default_config_content())?;

    success(&format!("Created {}", CONFIG_FILENAME));
    info("Run 'studygate shell' to start a session");

    Ok(())
}

/// List catalog courses matching a search
pub async fn courses(search: String, category: String, format: OutputFormat) -> Result<()> {
    let category: CategoryFilter = category.parse()?;
    let filter = CourseFilter::new(search, category);
    let app = AppContext::new(config::load_config_or_default()?);
    let matches = app.search(&filter);

    print_formatted(&matches, format, |courses| print_course_table(courses, &[]))
}

#[derive(Serialize)]
struct RouteRow {
    route: &'static str,
    path: String,
    protected: bool,
    signed_out: String,
    signed_in: String,
}

/// Show every route with the guard's answer for both auth states
pub async fn routes(format: OutputFormat) -> Result<()> {
    use crate::auth::{AuthState, RouteGuard};

    let config = config::load_config_or_default()?;
    let guard = RouteGuard::from_config(&config.navigation);

    let mut routes: Vec<Route> = Route::STATIC.to_vec();
    routes.push(Route::Detail { course_id: 1 });
    let rows: Vec<RouteRow> = routes
        .into_iter()
        .map(|route| RouteRow {
            route: route.title(),
            path: route.path(),
            protected: route.is_protected(),
            signed_out: guard.check(AuthState::Unauthenticated, route).to_string(),
            signed_in: guard.check(AuthState::Authenticated, route).to_string(),
        })
        .collect();

    print_formatted(&rows, format, |_| print_route_table(&guard))
}

fn print_formatted<T: Serialize>(
    value: &T,
    format: OutputFormat,
    table: impl FnOnce(&T),
) -> Result<()> {
    match format {
        OutputFormat::Table => table(value),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(value)?),
    }
    Ok(())
}

/// Scripted walk through a full session
pub async fn demo(email: &str, password: &str, course: u32) -> Result<()> {
    let mut app = AppContext::new(config::load_config_or_default()?);

    info(&format!("Starting at {}", app.current_route()));

    let blocked = app.navigate(Route::Profile)?;
    print_decision("open profile", &blocked);

    let outcome = app.login(email, password).await;
    if !outcome.success {
        let message = outcome.message.unwrap_or_default();
        error(&message);
        anyhow::bail!("login failed: {}", message);
    }
    if let Some(user) = &outcome.user {
        success(&format!("Welcome back, {}! ({})", user.name, user.email));
    }
    info(&format!("Now at {}", outcome.route));

    let decision = app.navigate(Route::Login)?;
    print_decision("open login", &decision);

    let decision = app.open_course(course)?;
    print_decision(&format!("open course {}", course), &decision);
    if let Some(course) = app.current_course() {
        let library = app.library()?;
        print_course_detail(
            course,
            library.is_favorite(course.id),
            library.is_downloaded(course.id),
            library.progress(course.id),
        );
    }

    let decision = app.navigate(Route::Favorites)?;
    print_decision("open favorites", &decision);
    let favorite_ids: Vec<u32> = app.favorites()?.iter().map(|c| c.id).collect();
    print_course_table(&app.favorites()?, &favorite_ids);

    if let Some(decision) = app.logout() {
        print_decision("logout", &decision);
    }
    success("Logged out");

    let decision = app.navigate(Route::Settings)?;
    print_decision("open settings", &decision);

    Ok(())
}
