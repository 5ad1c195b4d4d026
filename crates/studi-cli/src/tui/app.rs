//! TUI application state and data model.

use std::time::Duration;

use anyhow::Result;

use studi_store::models::{DayEntry, SavedPlan};
use studi_store::{Store, plans};

/// Which view the TUI is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    PlanList,
    PlanDetail(String),
    Help,
}

/// Application state for the TUI.
pub struct App {
    pub store: Store,
    pub current_view: View,
    pub plans: Vec<SavedPlan>,
    pub selected_plan: usize,
    pub days: Vec<DayEntry>,
    pub selected_day: usize,
    pub tick_rate: Duration,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            current_view: View::PlanList,
            plans: Vec::new(),
            selected_plan: 0,
            days: Vec::new(),
            selected_day: 0,
            tick_rate: Duration::from_secs(1),
            should_quit: false,
            status_message: None,
        }
    }

    /// Refresh data from the store based on the current view.
    pub fn refresh(&mut self) -> Result<()> {
        match &self.current_view {
            View::PlanList => {
                self.plans = plans::list_plans(&self.store)?;
                if self.selected_plan >= self.plans.len() && !self.plans.is_empty() {
                    self.selected_plan = self.plans.len() - 1;
                }
            }
            View::PlanDetail(plan_id) => {
                let plan_id = plan_id.clone();
                self.days = match plans::find_plan(&self.store, &plan_id)? {
                    Some(saved) => saved.content.days,
                    None => Vec::new(),
                };
                if self.selected_day >= self.days.len() && !self.days.is_empty() {
                    self.selected_day = self.days.len() - 1;
                }
            }
            View::Help => {}
        }
        Ok(())
    }

    // -- Navigation --

    pub fn navigate_back(&mut self) {
        match &self.current_view {
            View::PlanList => self.should_quit = true,
            View::PlanDetail(_) => self.current_view = View::PlanList,
            View::Help => self.current_view = View::PlanList,
        }
    }

    pub fn navigate_enter(&mut self) {
        if let View::PlanList = &self.current_view {
            if let Some(saved) = self.plans.get(self.selected_plan) {
                self.current_view = View::PlanDetail(saved.id.clone());
                self.selected_day = 0;
            }
        }
    }

    pub fn move_up(&mut self) {
        match &self.current_view {
            View::PlanList => {
                if self.selected_plan > 0 {
                    self.selected_plan -= 1;
                }
            }
            View::PlanDetail(_) => {
                if self.selected_day > 0 {
                    self.selected_day -= 1;
                }
            }
            View::Help => {}
        }
    }

    pub fn move_down(&mut self) {
        match &self.current_view {
            View::PlanList => {
                if !self.plans.is_empty() && self.selected_plan < self.plans.len() - 1 {
                    self.selected_plan += 1;
                }
            }
            View::PlanDetail(_) => {
                if !self.days.is_empty() && self.selected_day < self.days.len() - 1 {
                    self.selected_day += 1;
                }
            }
            View::Help => {}
        }
    }

    pub fn show_help(&mut self) {
        self.current_view = View::Help;
    }

    // -- Actions --

    /// Delete the selected saved plan (list view only).
    pub fn delete_selected(&mut self) -> Result<()> {
        if let View::PlanList = &self.current_view {
            if let Some(saved) = self.plans.get(self.selected_plan) {
                let id = saved.id.clone();
                plans::delete_plan(&self.store, &id)?;
                self.status_message = Some("Plan deleted".to_string());
                self.refresh()?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
