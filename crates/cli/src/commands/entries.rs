use anyhow::{anyhow, Context, Result};
use clap::{Subcommand, ValueEnum};
use learning_tracker_core::{
    filter_media, ship_log_for_product, skills_by_tier, MediaType, ProductLinks, ProductStatus,
};
use learning_tracker_service::parse::{
    kpis_to_text, metrics_moved_to_text, parse_kpis, parse_metrics_moved, parse_tags,
};
use learning_tracker_service::{
    GoalEdit, MediaDraft, ProductDraft, ProductEdit, ShipDraft, WeekDraft, WeekEdit,
};

use crate::{print_json, FileTracker};

#[derive(Subcommand)]
pub enum ProductCommands {
    Add {
        #[arg(short, long)]
        name: String,
        #[arg(short, long, default_value = "")]
        description: String,
        #[arg(short, long, default_value = "secondary")]
        status: ProductStatus,
        #[arg(long)]
        repo: Option<String>,
        #[arg(long)]
        demo: Option<String>,
        #[arg(long)]
        docs: Option<String>,
        #[arg(short, long = "kpi", help = "KPI as name:target, repeatable")]
        kpis: Vec<String>,
    },
    /// Edit an existing product; omitted fields are kept
    Update {
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        status: Option<ProductStatus>,
        #[arg(long, help = "Empty string removes the link")]
        repo: Option<String>,
        #[arg(long)]
        demo: Option<String>,
        #[arg(long)]
        docs: Option<String>,
        #[arg(short, long = "kpi", help = "Replaces all KPIs, repeatable")]
        kpis: Vec<String>,
    },
    /// Print a product's KPIs as editable name:target lines
    Kpis { id: String },
    List,
}

#[derive(Subcommand)]
pub enum SkillCommands {
    /// Mark a skill done (or not done with --undone)
    Toggle {
        id: String,
        #[arg(long)]
        undone: bool,
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Replace a skill's notes without changing its done flag
    Notes { id: String, notes: String },
    List {
        #[arg(short, long, default_value = "")]
        search: String,
    },
}

#[derive(Subcommand)]
pub enum MediaCommands {
    Add {
        #[arg(long, help = "YYYY-MM-DD, defaults to today")]
        date: Option<String>,
        #[arg(short = 't', long = "type", default_value = "book")]
        media_type: MediaType,
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        link: Option<String>,
        #[arg(short, long, default_value = "30")]
        minutes: u32,
        #[arg(short, long)]
        progress: String,
        #[arg(long = "takeaway", help = "Repeat exactly three times")]
        takeaways: Vec<String>,
        #[arg(long, default_value = "")]
        question: String,
        #[arg(long, default_value = "")]
        action: String,
        #[arg(long, default_value = "", help = "Comma-separated")]
        tags: String,
        #[arg(long)]
        product: Option<String>,
    },
    List {
        #[arg(short = 't', long = "type")]
        media_type: Option<MediaType>,
        #[arg(long)]
        tag: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum WeekCommands {
    Add {
        #[arg(long, help = "YYYY-MM-DD, defaults to this week's Monday")]
        start: Option<String>,
        #[arg(long)]
        flagship: Option<String>,
        #[arg(long, default_value = "")]
        ship_goal: String,
        #[arg(long, default_value = "")]
        ai_focus: String,
        #[arg(long, default_value = "")]
        eng_focus: String,
        #[arg(long, default_value = "")]
        media_goal: String,
        #[arg(long = "metric", help = "name:before->after (note), repeatable")]
        metrics: Vec<String>,
        #[arg(long, default_value = "")]
        review: String,
    },
    /// Edit an existing week; omitted fields are kept
    Update {
        id: String,
        #[arg(long, help = "Empty string clears the flagship")]
        flagship: Option<String>,
        #[arg(long, value_enum, help = "Goal the --goal-* options apply to")]
        goal: Option<GoalSlot>,
        #[arg(long, requires = "goal")]
        goal_text: Option<String>,
        #[arg(long, requires = "goal")]
        goal_link: Option<String>,
        #[arg(long, requires = "goal")]
        goal_done: Option<bool>,
        #[arg(long = "metric", help = "Replaces all metrics moved, repeatable")]
        metrics: Vec<String>,
        #[arg(long, conflicts_with = "review_template")]
        review: Option<String>,
        #[arg(long, help = "Fill the review with the weekly review skeleton")]
        review_template: bool,
    },
    /// Print a week's metrics moved as editable lines
    Metrics { id: String },
    List,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum GoalSlot {
    Ship,
    Ai,
    Eng,
    Media,
}

#[derive(Subcommand)]
pub enum ShipCommands {
    Add {
        #[arg(long, help = "YYYY-MM-DD, defaults to today")]
        date: Option<String>,
        #[arg(long)]
        product: Option<String>,
        #[arg(short, long)]
        summary: String,
        #[arg(short, long = "link", help = "Evidence URL, repeatable")]
        links: Vec<String>,
        #[arg(long)]
        metric_delta: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    List {
        #[arg(long)]
        product: Option<String>,
    },
}

pub(crate) fn run_product(tracker: &mut FileTracker, cmd: ProductCommands) -> Result<()> {
    match cmd {
        ProductCommands::Add { name, description, status, repo, demo, docs, kpis } => {
            let draft = ProductDraft {
                name,
                description,
                status,
                links: ProductLinks { repo, demo, docs },
                kpis: parse_kpis(&kpis.join("\n")),
            };
            let id = tracker.create_product(draft)?;
            println!("{id}");
            Ok(())
        },
        ProductCommands::Update { id, name, description, status, repo, demo, docs, kpis } => {
            let edit = ProductEdit {
                name,
                description,
                status,
                repo,
                demo,
                docs,
                kpis: (!kpis.is_empty()).then(|| parse_kpis(&kpis.join("\n"))),
            };
            tracker.edit_product(&id, edit)?;
            println!("{id}");
            Ok(())
        },
        ProductCommands::Kpis { id } => {
            let product = tracker.state().product(&id).with_context(|| format!("no product with id {id}"))?;
            println!("{}", kpis_to_text(&product.kpis));
            Ok(())
        },
        ProductCommands::List => print_json(&tracker.state().products),
    }
}

pub(crate) fn run_skill(tracker: &mut FileTracker, cmd: SkillCommands) -> Result<()> {
    match cmd {
        SkillCommands::Toggle { id, undone, notes } => {
            if tracker.state().skill(&id).is_none() {
                tracing::warn!(id = %id, "no skill with this id, nothing changed");
            }
            tracker.toggle_skill(&id, !undone, notes);
            println!("streak: {}", tracker.state().streak);
            Ok(())
        },
        SkillCommands::Notes { id, notes } => {
            tracker.set_skill_notes(&id, notes)?;
            println!("streak: {}", tracker.state().streak);
            Ok(())
        },
        SkillCommands::List { search } => print_json(&skills_by_tier(tracker.state(), &search)),
    }
}

pub(crate) fn run_media(tracker: &mut FileTracker, cmd: MediaCommands) -> Result<()> {
    match cmd {
        MediaCommands::Add {
            date,
            media_type,
            title,
            author,
            link,
            minutes,
            progress,
            takeaways,
            question,
            action,
            tags,
            product,
        } => {
            let takeaways: [String; 3] = takeaways
                .try_into()
                .map_err(|v: Vec<String>| anyhow!("exactly three takeaways are required, got {}", v.len()))?;
            let draft = MediaDraft {
                date,
                media_type,
                title,
                author_or_channel: author,
                link,
                time_spent_minutes: minutes,
                progress_label: progress,
                takeaways,
                open_question: question,
                applied_action: action,
                tags: parse_tags(&tags),
                related_product_id: product,
            };
            let id = tracker.create_media(draft)?;
            println!("{id}");
            Ok(())
        },
        MediaCommands::List { media_type, tag } => {
            print_json(&filter_media(tracker.state(), media_type, tag.as_deref()))
        },
    }
}

pub(crate) fn run_week(tracker: &mut FileTracker, cmd: WeekCommands) -> Result<()> {
    match cmd {
        WeekCommands::Add {
            start,
            flagship,
            ship_goal,
            ai_focus,
            eng_focus,
            media_goal,
            metrics,
            review,
        } => {
            let draft = WeekDraft {
                week_start_date: start,
                flagship_product_id: flagship,
                ship_goal,
                ai_focus,
                eng_focus,
                media_goal,
                metrics_moved: parse_metrics_moved(&metrics.join("\n")),
                review_text: review,
            };
            let id = tracker.create_week(draft)?;
            println!("{id}");
            Ok(())
        },
        WeekCommands::Update {
            id,
            flagship,
            goal,
            goal_text,
            goal_link,
            goal_done,
            metrics,
            review,
            review_template,
        } => {
            let mut edit = WeekEdit {
                flagship_product_id: flagship,
                metrics_moved: (!metrics.is_empty()).then(|| parse_metrics_moved(&metrics.join("\n"))),
                review_text: review,
                review_template,
                ..WeekEdit::default()
            };
            let goal_edit = GoalEdit { text: goal_text, link: goal_link, done: goal_done };
            match goal {
                Some(GoalSlot::Ship) => edit.ship_goal = goal_edit,
                Some(GoalSlot::Ai) => edit.ai_focus = goal_edit,
                Some(GoalSlot::Eng) => edit.eng_focus = goal_edit,
                Some(GoalSlot::Media) => edit.media_goal = goal_edit,
                None => {},
            }
            tracker.edit_week(&id, edit)?;
            println!("streak: {}", tracker.state().streak);
            Ok(())
        },
        WeekCommands::Metrics { id } => {
            let week = tracker.state().week(&id).with_context(|| format!("no week with id {id}"))?;
            println!("{}", metrics_moved_to_text(&week.metrics_moved));
            Ok(())
        },
        WeekCommands::List => print_json(&tracker.state().weeks),
    }
}

pub(crate) fn run_ship(tracker: &mut FileTracker, cmd: ShipCommands) -> Result<()> {
    match cmd {
        ShipCommands::Add { date, product, summary, links, metric_delta, notes } => {
            let draft = ShipDraft { date, product_id: product, summary, links, metric_delta, notes };
            let id = tracker.create_ship(draft)?;
            println!("{id}");
            Ok(())
        },
        ShipCommands::List { product } => {
            let entries: Vec<_> = ship_log_for_product(tracker.state(), product.as_deref()).collect();
            print_json(&entries)
        },
    }
}
