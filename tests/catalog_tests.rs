//! Course catalog and library tests

use studygate::app::AppContext;
use studygate::catalog::{Catalog, Category, CategoryFilter, CourseFilter, Library, DEFAULT_FAVORITES};
use studygate::config::Config;
use studygate::error::Error;

fn ids(filter: &CourseFilter) -> Vec<u32> {
    Catalog::builtin().search(filter).iter().map(|c| c.id).collect()
}

#[test]
fn test_each_category_chip() {
    assert_eq!(ids(&CourseFilter::new("", CategoryFilter::All)), vec![1, 2, 3, 4, 5]);
    assert_eq!(
        ids(&CourseFilter::new("", CategoryFilter::Only(Category::Development))),
        vec![1, 3]
    );
    assert_eq!(
        ids(&CourseFilter::new("", CategoryFilter::Only(Category::Design))),
        vec![2]
    );
    assert_eq!(
        ids(&CourseFilter::new("", CategoryFilter::Only(Category::DataScience))),
        vec![4]
    );
    assert_eq!(
        ids(&CourseFilter::new("", CategoryFilter::Only(Category::Marketing))),
        vec![5]
    );
}

#[test]
fn test_search_by_title_substring() {
    assert_eq!(ids(&CourseFilter::new("design", CategoryFilter::All)), vec![2]);
    assert_eq!(ids(&CourseFilter::new("STRATEGY", CategoryFilter::All)), vec![5]);
    assert!(ids(&CourseFilter::new("rust", CategoryFilter::All)).is_empty());
}

#[test]
fn test_every_match_satisfies_both_predicates() {
    let catalog = Catalog::builtin();
    for query in ["", "a", "e", "in", "script", "x"] {
        for category in Category::ALL {
            let filter = CourseFilter::new(query, CategoryFilter::Only(category));
            for course in catalog.search(&filter) {
                assert_eq!(course.category, category);
                assert!(course.title.to_lowercase().contains(query));
            }
        }
    }
}

#[test]
fn test_course_serializes_for_cli_output() {
    let catalog = Catalog::builtin();
    let json = serde_json::to_value(catalog.find(4).unwrap()).unwrap();
    assert_eq!(json["category"], "Data Science");
    assert_eq!(json["level"], "Intermediate");
    assert_eq!(json["instructor"], "Dr. Emily Davis");
}

#[test]
fn test_library_starts_with_default_favorites() {
    let library = Library::new();
    for id in DEFAULT_FAVORITES {
        assert!(library.is_favorite(id));
    }
    assert!(!library.is_favorite(2));
}

#[tokio::test]
async fn test_library_is_reset_between_sessions() {
    let mut config = Config::default();
    config.auth.login_delay_ms = 0;
    let mut app = AppContext::new(config);

    app.login("a@b.com", "x").await;
    app.toggle_favorite(1).unwrap();
    app.toggle_download(2).unwrap();
    app.set_progress(3, 60).unwrap();
    app.logout();

    app.login("b@c.com", "y").await;
    let library = app.library().unwrap();
    assert!(library.is_favorite(1));
    assert!(!library.is_downloaded(2));
    assert_eq!(library.progress(3), 0);
}

#[test]
fn test_library_needs_a_session() {
    let mut app = AppContext::default();
    assert!(matches!(app.toggle_download(1), Err(Error::NotAuthenticated)));
    assert!(matches!(app.favorites(), Err(Error::NotAuthenticated)));
}
