//! Fixed demonstration dataset.

use chrono::NaiveDate;
use learning_tracker_core::constants::STATE_VERSION;
use learning_tracker_core::dates::{format_date, most_recent_monday};
use learning_tracker_core::{
    AppState, MediaItem, MediaType, Product, ProductLinks, ProductStatus, ShipLogItem, Skill,
    WeekGoal, WeekPlan,
};

/// (tier, id, name, description)
const SEED_SKILLS: &[(i32, &str, &str, Option<&str>)] = &[
    (0, "s-problem", "Problem solving / debugging / tradeoffs", None),
    (0, "s-communication", "Communication (specs, docs, decision logs)", None),
    (0, "s-craft", "Software engineering craft", Some("testing, code review, refactoring, architecture")),
    (0, "s-sql", "SQL + data literacy", None),
    (1, "s-ai-tools", "AI tools in dev workflows", None),
    (1, "s-llm", "LLM basics", Some("tokens, context, temperature, failure modes")),
    (1, "s-embeddings", "Embeddings + vector search basics", None),
    (1, "s-prompting", "Prompting/context engineering + structured outputs", None),
    (2, "s-rag", "RAG (ingestion, chunking, retrieval, citations/grounding)", None),
    (2, "s-extraction", "Structured extraction pipelines", None),
    (2, "s-eval", "Evaluation/testing for AI systems", None),
    (2, "s-agent", "Agent/tool workflows", None),
    (2, "s-llmops", "LLMOps basics", None),
    (3, "s-data-modeling", "Data modeling + data quality", None),
    (3, "s-etl", "ETL/ELT pipelines + schedulers + idempotency", None),
    (3, "s-search", "Search systems", Some("hybrid search, ranking basics, caching")),
    (4, "s-cloud", "Cloud fundamentals", Some("IAM, networking, storage, compute")),
    (4, "s-api", "API design", Some("auth, pagination, rate limits")),
    (4, "s-serverless", "Serverless + containers deployments", None),
    (
        4,
        "s-dynamo",
        "DynamoDB mastery",
        Some("single-table, access patterns, GSIs, TTL, streams, conditional writes, cost"),
    ),
    (5, "s-owasp", "OWASP basics, threat modeling, secrets mgmt", None),
    (5, "s-crypto", "Crypto literacy", Some("use proven protocols, do not invent crypto")),
    (5, "s-privacy", "Privacy/compliance thinking", None),
    (6, "s-obs", "Observability", Some("logs/metrics/traces, incident thinking")),
    (6, "s-perf", "Performance engineering", Some("caching, async, load testing")),
    (
        6,
        "s-media-perf",
        "Media performance",
        Some("progressive images, video loading, offline cache, retries"),
    ),
    (7, "s-hitl", "Human-in-the-loop UX", Some("review queues, evidence, editable outputs")),
    (7, "s-web-ux", "Modern web UX", Some("drag/drop, i18n, a11y, fast UI")),
    (7, "s-maps", "Maps/routing product skills", Some("geospatial data, routing, offline patterns")),
];

fn owned(s: &str) -> String {
    s.to_owned()
}

fn product(
    id: &str,
    name: &str,
    description: &str,
    status: ProductStatus,
    links: ProductLinks,
    kpis: [(&str, &str); 2],
) -> Product {
    Product {
        id: owned(id),
        name: owned(name),
        description: owned(description),
        status,
        links,
        kpis: kpis.into_iter().map(|(k, v)| (owned(k), owned(v))).collect(),
        kpi_history: Vec::new(),
    }
}

fn repo_link(url: &str) -> ProductLinks {
    ProductLinks { repo: Some(owned(url)), ..ProductLinks::default() }
}

fn seed_products() -> Vec<Product> {
    vec![
        product(
            "prod-map",
            "China Missionary Legacy Sites Map & Routes",
            "Map + site database + route planning for historical sites.",
            ProductStatus::Flagship,
            ProductLinks {
                demo: Some(owned("https://demo.example.com/map")),
                ..repo_link("https://github.com/example/map-routes")
            },
            [("Site coverage %", "Initial 10 cities"), ("Route usability score", "Prototype")],
        ),
        product(
            "prod-chat",
            "E2E Encrypted Chat with media performance",
            "Secure chat with better image/video loading UX and caching.",
            ProductStatus::Secondary,
            repo_link("https://github.com/example/secure-chat"),
            [("Image load p95 (ms)", "<800"), ("Video buffering incidents/week", "<5")],
        ),
        product(
            "prod-subtitles",
            "Bilingual Subtitle Webapp",
            "Drag/drop video to create perfectly aligned bilingual subtitles.",
            ProductStatus::Secondary,
            repo_link("https://github.com/example/bilingual-subtitles"),
            [("Alignment accuracy %", ">=95%"), ("Turnaround time", "<5 min")],
        ),
        product(
            "prod-crawler",
            "HK Admissions Crawler",
            "Extract full program application details with evaluation and citations.",
            ProductStatus::Background,
            repo_link("https://github.com/example/hk-admissions"),
            [("Crawler completeness %", ">=90%"), ("Citation correctness %", ">=98%")],
        ),
    ]
}

fn seed_skills() -> Vec<Skill> {
    SEED_SKILLS
        .iter()
        .map(|&(tier, id, name, description)| {
            let skill = Skill::new(id, tier, name);
            match description {
                Some(d) => skill.with_description(d),
                None => skill,
            }
        })
        .collect()
}

fn seed_ship_log(today: &str) -> Vec<ShipLogItem> {
    vec![
        ShipLogItem {
            id: owned("ship-1"),
            date: owned(today),
            product_id: Some(owned("prod-map")),
            summary: owned("Uploaded initial site dataset and basic map view"),
            links: vec![owned("https://demo.example.com/map/v1")],
            metric_delta: Some(owned("Site coverage +5")),
            notes: None,
        },
        ShipLogItem {
            id: owned("ship-2"),
            date: owned(today),
            product_id: Some(owned("prod-chat")),
            summary: owned("Improved media caching for chat images"),
            links: vec![owned("https://repo.example.com/commit/123")],
            metric_delta: Some(owned("Image p95 -120ms")),
            notes: None,
        },
    ]
}

fn seed_media(today: &str) -> Vec<MediaItem> {
    vec![
        MediaItem {
            id: owned("media-1"),
            date: owned(today),
            media_type: MediaType::Book,
            title: owned("Designing Data-Intensive Applications"),
            author_or_channel: Some(owned("Martin Kleppmann")),
            link: None,
            time_spent_minutes: 45,
            progress_label: owned("pp 1-20"),
            takeaways: [
                owned("Replication vs partitioning basics"),
                owned("Importance of schemas"),
                owned("Tradeoffs in storage engines"),
            ],
            open_question: owned("How to map DynamoDB to these patterns?"),
            applied_action: owned("Wrote notes in repo"),
            tags: Some(vec![owned("data"), owned("backend")]),
            related_product_id: Some(owned("prod-crawler")),
        },
        MediaItem {
            id: owned("media-2"),
            date: owned(today),
            media_type: MediaType::Video,
            title: owned("Vector search primer"),
            author_or_channel: Some(owned("Conference Talk")),
            link: None,
            time_spent_minutes: 30,
            progress_label: owned("15/30 min"),
            takeaways: [
                owned("Chunking importance"),
                owned("Embedding quality matters"),
                owned("Grounding via citations"),
            ],
            open_question: owned("Best eval metrics for retrieval?"),
            applied_action: owned("Planned eval set for subtitles app"),
            tags: Some(vec![owned("AI"), owned("RAG")]),
            related_product_id: Some(owned("prod-subtitles")),
        },
    ]
}

/// Demonstration state: four products, the full skill ladder, one week
/// starting on the Monday of `today`'s week, two ship entries and two media
/// sessions dated `today`, and a one-day streak.
#[must_use]
pub fn seed_state(today: NaiveDate) -> AppState {
    let today_str = format_date(today);
    let weeks = vec![WeekPlan {
        id: owned("week-1"),
        week_start_date: format_date(most_recent_monday(today)),
        flagship_product_id: Some(owned("prod-map")),
        ship_goal: WeekGoal { link: Some(String::new()), ..WeekGoal::new("Ship map data upload MVP") },
        ai_focus: WeekGoal::new("RAG fundamentals"),
        eng_focus: WeekGoal::new("DynamoDB single-table design basics"),
        media_goal: WeekGoal::new("Watch 1 vector search talk"),
        metrics_moved: Vec::new(),
        review_text: String::new(),
    }];

    AppState {
        version: owned(STATE_VERSION),
        products: seed_products(),
        skills: seed_skills(),
        media: seed_media(&today_str),
        weeks,
        ship_log: seed_ship_log(&today_str),
        last_activity_date: Some(today_str),
        streak: 1,
    }
}
