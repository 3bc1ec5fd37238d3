//! Entry drafts validated at the boundary before they become actions.
//!
//! The domain model accepts any shape; these drafts carry the rules the entry
//! forms enforce (a product needs a name, a ship entry needs evidence, ...).

use std::collections::BTreeMap;

use chrono::NaiveDate;
use learning_tracker_core::dates::{format_date, most_recent_monday, parse_strict};
use learning_tracker_core::{
    MediaItem, MediaType, MetricMove, Product, ProductLinks, ProductStatus, ShipLogItem, WeekGoal,
    WeekPlan,
};

use crate::ServiceError;

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn require(value: &str, what: &str) -> Result<String, ServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::InvalidInput(format!("{what} is required")));
    }
    Ok(trimmed.to_owned())
}

/// Default the date to `today`; reject anything that is not `YYYY-MM-DD`.
fn entry_date(date: Option<String>, today: NaiveDate) -> Result<String, ServiceError> {
    match non_blank(date) {
        None => Ok(format_date(today)),
        Some(raw) => Ok(format_date(parse_strict(&raw)?)),
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub status: ProductStatus,
    pub links: ProductLinks,
    pub kpis: BTreeMap<String, String>,
}

impl ProductDraft {
    /// # Errors
    /// Returns `InvalidInput` when the name is blank.
    pub fn into_product(self, id: String) -> Result<Product, ServiceError> {
        Ok(Product {
            id,
            name: require(&self.name, "product name")?,
            description: self.description,
            status: self.status,
            links: ProductLinks {
                repo: non_blank(self.links.repo),
                demo: non_blank(self.links.demo),
                docs: non_blank(self.links.docs),
            },
            kpis: self.kpis,
            kpi_history: Vec::new(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct MediaDraft {
    pub date: Option<String>,
    pub media_type: MediaType,
    pub title: String,
    pub author_or_channel: Option<String>,
    pub link: Option<String>,
    pub time_spent_minutes: u32,
    pub progress_label: String,
    pub takeaways: [String; 3],
    pub open_question: String,
    pub applied_action: String,
    pub tags: Vec<String>,
    pub related_product_id: Option<String>,
}

impl MediaDraft {
    /// # Errors
    /// Returns `InvalidInput` when the title, the progress label or any of the
    /// three takeaways is blank, and `Parse` when the date is malformed.
    pub fn into_item(self, id: String, today: NaiveDate) -> Result<MediaItem, ServiceError> {
        let title = require(&self.title, "title")?;
        let progress_label = require(&self.progress_label, "progress label")?;
        let [first, second, third] = self.takeaways;
        let takeaways =
            [require(&first, "takeaway 1")?, require(&second, "takeaway 2")?, require(&third, "takeaway 3")?];
        let tags: Vec<String> = self
            .tags
            .into_iter()
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty())
            .collect();
        Ok(MediaItem {
            id,
            date: entry_date(self.date, today)?,
            media_type: self.media_type,
            title,
            author_or_channel: non_blank(self.author_or_channel),
            link: non_blank(self.link),
            time_spent_minutes: self.time_spent_minutes,
            progress_label,
            takeaways,
            open_question: self.open_question,
            applied_action: self.applied_action,
            tags: (!tags.is_empty()).then_some(tags),
            related_product_id: non_blank(self.related_product_id),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct WeekDraft {
    /// Defaults to the Monday of the current week.
    pub week_start_date: Option<String>,
    pub flagship_product_id: Option<String>,
    pub ship_goal: String,
    pub ai_focus: String,
    pub eng_focus: String,
    pub media_goal: String,
    pub metrics_moved: Vec<MetricMove>,
    pub review_text: String,
}

impl WeekDraft {
    /// # Errors
    /// Returns `Parse` when the start date is not `YYYY-MM-DD`.
    pub fn into_plan(self, id: String, today: NaiveDate) -> Result<WeekPlan, ServiceError> {
        Ok(WeekPlan {
            id,
            week_start_date: entry_date(self.week_start_date, most_recent_monday(today))?,
            flagship_product_id: non_blank(self.flagship_product_id),
            ship_goal: WeekGoal::new(self.ship_goal.trim()),
            ai_focus: WeekGoal::new(self.ai_focus.trim()),
            eng_focus: WeekGoal::new(self.eng_focus.trim()),
            media_goal: WeekGoal::new(self.media_goal.trim()),
            metrics_moved: self.metrics_moved,
            review_text: self.review_text,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ShipDraft {
    pub date: Option<String>,
    pub product_id: Option<String>,
    pub summary: String,
    pub links: Vec<String>,
    pub metric_delta: Option<String>,
    pub notes: Option<String>,
}

impl ShipDraft {
    /// # Errors
    /// Returns `InvalidInput` when the summary is blank, no non-blank link
    /// remains, and `Parse` when the date is malformed.
    pub fn into_item(self, id: String, today: NaiveDate) -> Result<ShipLogItem, ServiceError> {
        let summary = require(&self.summary, "summary")?;
        let links: Vec<String> = self
            .links
            .into_iter()
            .map(|l| l.trim().to_owned())
            .filter(|l| !l.is_empty())
            .collect();
        if links.is_empty() {
            return Err(ServiceError::InvalidInput("at least one link is required".to_owned()));
        }
        Ok(ShipLogItem {
            id,
            date: entry_date(self.date, today)?,
            product_id: non_blank(self.product_id),
            summary,
            links,
            metric_delta: non_blank(self.metric_delta),
            notes: non_blank(self.notes),
        })
    }
}
