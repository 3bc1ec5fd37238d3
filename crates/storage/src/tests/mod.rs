//! Test utilities and module declarations for storage tests.

use learning_tracker_core::{
    AppState, MediaItem, MediaType, Product, ProductLinks, ProductStatus, ShipLogItem, Skill,
    WeekGoal, WeekPlan,
};

pub fn create_test_state() -> AppState {
    let mut state = AppState::initial();
    state.products.push(Product {
        id: "prod-map".to_owned(),
        name: "Map".to_owned(),
        description: "Site map".to_owned(),
        status: ProductStatus::Flagship,
        links: ProductLinks { repo: Some("https://example.com/repo".to_owned()), ..ProductLinks::default() },
        kpis: [("Coverage %".to_owned(), "10 cities".to_owned())].into_iter().collect(),
        kpi_history: Vec::new(),
    });
    let mut done = Skill::new("s-sql", 0, "SQL");
    done.done = true;
    done.notes = Some("window functions".to_owned());
    state.skills = vec![done, Skill::new("s-rag", 2, "RAG").with_description("retrieval")];
    state.media.push(MediaItem {
        id: "media-1".to_owned(),
        date: "2024-01-02".to_owned(),
        media_type: MediaType::Book,
        title: "DDIA".to_owned(),
        author_or_channel: Some("Kleppmann".to_owned()),
        link: None,
        time_spent_minutes: 45,
        progress_label: "pp 1-20".to_owned(),
        takeaways: ["one".to_owned(), "two".to_owned(), "three".to_owned()],
        open_question: "why?".to_owned(),
        applied_action: "notes".to_owned(),
        tags: Some(vec!["data".to_owned()]),
        related_product_id: Some("prod-map".to_owned()),
    });
    state.weeks.push(WeekPlan {
        id: "week-1".to_owned(),
        week_start_date: "2024-01-01".to_owned(),
        flagship_product_id: Some("prod-map".to_owned()),
        ship_goal: WeekGoal::new("Ship upload"),
        ai_focus: WeekGoal::new("RAG"),
        eng_focus: WeekGoal::new("DynamoDB"),
        media_goal: WeekGoal::new("One talk"),
        metrics_moved: Vec::new(),
        review_text: String::new(),
    });
    state.ship_log.push(ShipLogItem {
        id: "ship-1".to_owned(),
        date: "2024-01-03".to_owned(),
        product_id: Some("prod-map".to_owned()),
        summary: "Uploaded dataset".to_owned(),
        links: vec!["https://example.com/v1".to_owned()],
        metric_delta: Some("+5".to_owned()),
        notes: None,
    });
    state.last_activity_date = Some("2024-01-03".to_owned());
    state.streak = 2;
    state
}

mod import_tests;
mod load_tests;
