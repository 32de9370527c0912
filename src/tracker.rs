use crate::models::{Clip, Theme, Tier};
use std::num::NonZeroU64;

pub const DEFAULT_GOAL: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerState {
    pub count: u64,
    pub goal: u64,
    pub pending_goal_input: String,
    pub theme: Theme,
}

impl Default for TrackerState {
    fn default() -> Self {
        Self {
            count: 0,
            goal: DEFAULT_GOAL,
            pending_goal_input: String::new(),
            theme: Theme::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Increase,
    Reset,
    GoalInput(String),
    UpdateGoal,
    ToggleTheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Begin,
    WarmingUp,
    AlmostThere,
    Achieved,
}

impl Message {
    pub fn text(&self) -> &'static str {
        match self {
            Message::Begin => "Let's begin your workout 💪",
            Message::WarmingUp => "🔥 You're warming up!",
            Message::AlmostThere => "Almost there! Push harder!",
            Message::Achieved => "🎉 Goal achieved! Excellent work!",
        }
    }
}

impl TrackerState {
    pub fn increase(&self) -> (Self, Vec<Clip>) {
        let next = Self {
            count: self.count.saturating_add(1),
            ..self.clone()
        };

        let mut clips = vec![Clip::Click];
        if next.count >= next.goal {
            clips.push(Clip::Goal);
        }

        (next, clips)
    }

    pub fn reset(&self) -> Self {
        Self {
            count: 0,
            ..self.clone()
        }
    }

    pub fn with_goal_input(&self, input: impl Into<String>) -> Self {
        Self {
            pending_goal_input: input.into(),
            ..self.clone()
        }
    }

    /// Applies the pending goal input. Invalid input leaves every field,
    /// including the pending text, as it was.
    pub fn update_goal(&self) -> Self {
        match parse_goal(&self.pending_goal_input) {
            Some(goal) => Self {
                count: 0,
                goal,
                pending_goal_input: String::new(),
                theme: self.theme,
            },
            None => self.clone(),
        }
    }

    pub fn toggle_theme(&self) -> Self {
        Self {
            theme: self.theme.toggled(),
            ..self.clone()
        }
    }

    pub fn apply(&self, action: Action) -> (Self, Vec<Clip>) {
        match action {
            Action::Increase => self.increase(),
            Action::Reset => (self.reset(), Vec::new()),
            Action::GoalInput(input) => (self.with_goal_input(input), Vec::new()),
            Action::UpdateGoal => (self.update_goal(), Vec::new()),
            Action::ToggleTheme => (self.toggle_theme(), Vec::new()),
        }
    }

    pub fn progress(&self) -> f64 {
        progress(self.count, self.goal)
    }

    pub fn message(&self) -> Message {
        if self.count == 0 {
            return Message::Begin;
        }

        let progress = self.progress();
        if progress < 50.0 {
            Message::WarmingUp
        } else if progress < 100.0 {
            Message::AlmostThere
        } else {
            Message::Achieved
        }
    }

    pub fn tier(&self) -> Tier {
        let progress = self.progress();
        if progress >= 100.0 {
            Tier::Done
        } else if progress >= 50.0 {
            Tier::Mid
        } else {
            Tier::Low
        }
    }

    pub fn persisted(&self) -> (u64, u64, Theme) {
        (self.count, self.goal, self.theme)
    }
}

pub fn progress(count: u64, goal: u64) -> f64 {
    if goal == 0 {
        return 100.0;
    }
    (count as f64 / goal as f64 * 100.0).min(100.0)
}

pub fn parse_goal(input: &str) -> Option<u64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<NonZeroU64>().ok().map(NonZeroU64::get)
}
