//! Partial edits to entries that already exist.
//!
//! Every field is optional; `None` leaves the stored value alone. For the
//! optional text fields of the model an empty string clears the value.

use std::collections::BTreeMap;

use learning_tracker_core::{MetricMove, Product, ProductStatus, WeekGoal, WeekPlan};

use crate::ServiceError;

/// Skeleton offered for a week's review text.
pub const REVIEW_TEMPLATE: &str =
    "What shipped?\nWhat broke?\nWhat I learned?\nOne thing for next week:";

fn set_optional(slot: &mut Option<String>, value: Option<String>) {
    if let Some(value) = value {
        let value = value.trim();
        *slot = (!value.is_empty()).then(|| value.to_owned());
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProductEdit {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProductStatus>,
    pub repo: Option<String>,
    pub demo: Option<String>,
    pub docs: Option<String>,
    /// Replaces the whole KPI map when present.
    pub kpis: Option<BTreeMap<String, String>>,
}

impl ProductEdit {
    /// # Errors
    /// Returns `InvalidInput` when the new name is blank; `product` is left
    /// untouched in that case.
    pub fn apply(self, product: &mut Product) -> Result<(), ServiceError> {
        if self.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(ServiceError::InvalidInput("product name is required".to_owned()));
        }
        if let Some(name) = self.name {
            product.name = name.trim().to_owned();
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(status) = self.status {
            product.status = status;
        }
        set_optional(&mut product.links.repo, self.repo);
        set_optional(&mut product.links.demo, self.demo);
        set_optional(&mut product.links.docs, self.docs);
        if let Some(kpis) = self.kpis {
            product.kpis = kpis;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct GoalEdit {
    pub text: Option<String>,
    pub link: Option<String>,
    pub done: Option<bool>,
}

impl GoalEdit {
    fn apply(self, goal: &mut WeekGoal) {
        if let Some(text) = self.text {
            goal.text = text.trim().to_owned();
        }
        set_optional(&mut goal.link, self.link);
        if let Some(done) = self.done {
            goal.done = done;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct WeekEdit {
    pub flagship_product_id: Option<String>,
    pub ship_goal: GoalEdit,
    pub ai_focus: GoalEdit,
    pub eng_focus: GoalEdit,
    pub media_goal: GoalEdit,
    /// Replaces every metric move when present.
    pub metrics_moved: Option<Vec<MetricMove>>,
    pub review_text: Option<String>,
    /// Fill the review with [`REVIEW_TEMPLATE`] unless `review_text` is set.
    pub review_template: bool,
}

impl WeekEdit {
    pub fn apply(self, week: &mut WeekPlan) {
        set_optional(&mut week.flagship_product_id, self.flagship_product_id);
        self.ship_goal.apply(&mut week.ship_goal);
        self.ai_focus.apply(&mut week.ai_focus);
        self.eng_focus.apply(&mut week.eng_focus);
        self.media_goal.apply(&mut week.media_goal);
        if let Some(moves) = self.metrics_moved {
            week.metrics_moved = moves;
        }
        let template = self.review_template.then(|| REVIEW_TEMPLATE.to_owned());
        if let Some(review) = self.review_text.or(template) {
            week.review_text = review;
        }
    }
}
