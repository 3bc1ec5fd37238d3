//! Owner of the live state: applies actions and persists after each one.

use std::path::Path;

use chrono::NaiveDate;
use learning_tracker_core::{
    create_id, AppState, DashboardSummary, MediaItem, Product, ShipLogItem, WeekPlan,
};
use learning_tracker_storage::{export_state, export_to_file, import_state, BlobStore, Storage};

use crate::action::{Action, SkillToggle};
use crate::clock::{Clock, SystemClock};
use crate::drafts::{MediaDraft, ProductDraft, ShipDraft, WeekDraft};
use crate::edits::{ProductEdit, WeekEdit};
use crate::reducer::reduce;
use crate::ServiceError;

/// Single owner of the tracker state.
///
/// Every dispatched action is followed by a full save. A failed save is
/// logged and not retried; the in-memory state stays authoritative.
#[derive(Debug)]
pub struct Tracker<S, C = SystemClock> {
    state: AppState,
    storage: Storage<S>,
    clock: C,
}

impl<S: BlobStore> Tracker<S, SystemClock> {
    pub fn open(storage: Storage<S>) -> Self {
        Self::with_clock(storage, SystemClock)
    }
}

impl<S: BlobStore, C: Clock> Tracker<S, C> {
    /// Load whatever the store holds, falling back to the empty state.
    pub fn with_clock(storage: Storage<S>, clock: C) -> Self {
        let state = storage.load(AppState::initial());
        Self { state, storage, clock }
    }

    pub const fn state(&self) -> &AppState {
        &self.state
    }

    pub const fn storage(&self) -> &Storage<S> {
        &self.storage
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn dispatch(&mut self, action: Action) {
        reduce(&mut self.state, action, self.clock.today());
        if let Err(e) = self.storage.save(&self.state) {
            tracing::error!(error = %e, "failed to persist state");
        }
    }

    pub fn seed(&mut self) {
        self.dispatch(Action::Seed);
    }

    /// Persist and adopt the empty state.
    pub fn reset(&mut self) {
        self.state = self.storage.reset(AppState::initial()).unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to persist reset state");
            AppState::initial()
        });
    }

    pub fn add_product(&mut self, product: Product) {
        self.dispatch(Action::AddProduct(product));
    }

    pub fn update_product(&mut self, product: Product) {
        self.dispatch(Action::UpdateProduct(product));
    }

    pub fn toggle_skill(&mut self, id: &str, done: bool, notes: Option<String>) {
        self.dispatch(Action::ToggleSkill(SkillToggle { id: id.to_owned(), done, notes }));
    }

    pub fn add_media(&mut self, item: MediaItem) {
        self.dispatch(Action::AddMedia(item));
    }

    pub fn add_week(&mut self, week: WeekPlan) {
        self.dispatch(Action::AddWeek(week));
    }

    pub fn update_week(&mut self, week: WeekPlan) {
        self.dispatch(Action::UpdateWeek(week));
    }

    pub fn add_ship(&mut self, item: ShipLogItem) {
        self.dispatch(Action::AddShip(item));
    }

    /// Validate a product draft, assign an id and add it. Returns the new id.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the draft is rejected; state is unchanged.
    pub fn create_product(&mut self, draft: ProductDraft) -> Result<String, ServiceError> {
        let product = draft.into_product(create_id("prod"))?;
        let id = product.id.clone();
        self.add_product(product);
        Ok(id)
    }

    /// # Errors
    /// Returns `InvalidInput` if the draft is rejected; state is unchanged.
    pub fn create_media(&mut self, draft: MediaDraft) -> Result<String, ServiceError> {
        let item = draft.into_item(create_id("media"), self.today())?;
        let id = item.id.clone();
        self.add_media(item);
        Ok(id)
    }

    /// # Errors
    /// Returns `InvalidInput` if the draft is rejected; state is unchanged.
    pub fn create_week(&mut self, draft: WeekDraft) -> Result<String, ServiceError> {
        let week = draft.into_plan(create_id("week"), self.today())?;
        let id = week.id.clone();
        self.add_week(week);
        Ok(id)
    }

    /// # Errors
    /// Returns `InvalidInput` if the draft is rejected; state is unchanged.
    pub fn create_ship(&mut self, draft: ShipDraft) -> Result<String, ServiceError> {
        let item = draft.into_item(create_id("ship"), self.today())?;
        let id = item.id.clone();
        self.add_ship(item);
        Ok(id)
    }

    /// Apply `edit` to a stored product and write it back.
    ///
    /// # Errors
    /// Returns `NotFound` for an unknown id and `InvalidInput` for a rejected
    /// edit; state is unchanged in both cases.
    pub fn edit_product(&mut self, id: &str, edit: ProductEdit) -> Result<(), ServiceError> {
        let mut product = self.state.product(id).cloned().ok_or_else(|| not_found("product", id))?;
        edit.apply(&mut product)?;
        self.update_product(product);
        Ok(())
    }

    /// Apply `edit` to a stored week and write it back. Counts as activity
    /// today.
    ///
    /// # Errors
    /// Returns `NotFound` for an unknown id.
    pub fn edit_week(&mut self, id: &str, edit: WeekEdit) -> Result<(), ServiceError> {
        let mut week = self.state.week(id).cloned().ok_or_else(|| not_found("week", id))?;
        edit.apply(&mut week);
        self.update_week(week);
        Ok(())
    }

    /// Replace a skill's notes, keeping its done flag.
    ///
    /// Goes through the toggle, so notes on a completed skill count as
    /// activity today.
    ///
    /// # Errors
    /// Returns `NotFound` for an unknown id.
    pub fn set_skill_notes(&mut self, id: &str, notes: String) -> Result<(), ServiceError> {
        let done = self.state.skill(id).ok_or_else(|| not_found("skill", id))?.done;
        self.toggle_skill(id, done, Some(notes));
        Ok(())
    }

    /// Pretty-printed backup of the current state.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn export(&self) -> Result<String, ServiceError> {
        Ok(export_state(&self.state)?)
    }

    /// # Errors
    /// Returns error if serialization or the file write fails.
    pub fn export_to(&self, path: &Path) -> Result<(), ServiceError> {
        Ok(export_to_file(&self.state, path)?)
    }

    /// Replace the state with a validated backup.
    ///
    /// # Errors
    /// Returns `Import` describing why the backup was rejected; the current
    /// state is left untouched in that case.
    pub fn import(&mut self, raw: &str) -> Result<(), ServiceError> {
        let next = import_state(raw, &self.state)?;
        self.dispatch(Action::Import(next));
        Ok(())
    }

    pub fn dashboard(&self, recent_ships: usize) -> DashboardSummary {
        DashboardSummary::build(&self.state, self.today(), recent_ships)
    }
}

fn not_found(kind: &'static str, id: &str) -> ServiceError {
    ServiceError::NotFound { kind, id: id.to_owned() }
}
