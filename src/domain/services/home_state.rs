#[cfg(test)]
#[path = "home_state_test.rs"]
mod tests;

use std::collections::VecDeque;

use ratatui::prelude::Rect;

use super::Scroll;
use crate::domain::models::AlertMessage;
use crate::domain::models::Plant;
use crate::domain::models::PlantList;

/// Everything the home screen draws. Owned by the UI loop alone, and frozen
/// once the screen goes inactive so late results can't land on it.
pub struct HomeState {
    pub active: bool,
    pub alerts: VecDeque<AlertMessage>,
    pub card_lines: Vec<String>,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub plants: PlantList,
    pub scroll: Scroll,
}

impl Default for HomeState {
    fn default() -> HomeState {
        return HomeState {
            active: false,
            alerts: VecDeque::new(),
            card_lines: vec![],
            last_known_height: 0,
            last_known_width: 0,
            plants: PlantList::default(),
            scroll: Scroll::default(),
        };
    }
}

impl HomeState {
    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Replaces the displayed plants wholesale with the latest fetch.
    pub fn handle_plants_loaded(&mut self, plants: Vec<Plant>) {
        if !self.active {
            tracing::debug!(count = plants.len(), "Ignoring plants for inactive screen");
            return;
        }

        self.plants = PlantList::Loaded(plants);
        self.scroll.reset();
        self.sync_dependants();
    }

    pub fn handle_alert(&mut self, alert: AlertMessage) {
        if !self.active {
            tracing::debug!(message = %alert.message, "Ignoring alert for inactive screen");
            return;
        }

        self.alerts.push_back(alert);
    }

    pub fn current_alert(&self) -> Option<&AlertMessage> {
        return self.alerts.front();
    }

    pub fn dismiss_alert(&mut self) -> Option<AlertMessage> {
        return self.alerts.pop_front();
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    fn sync_dependants(&mut self) {
        // Leave a column for the scrollbar.
        let card_width = usize::from(self.last_known_width.saturating_sub(1));
        self.card_lines = self.plants.card_lines(card_width);

        let lines_len = u16::try_from(self.card_lines.len()).unwrap_or(u16::MAX);
        self.scroll.set_state(lines_len, self.last_known_height);
    }
}
