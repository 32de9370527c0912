use crate::models::{Clip, Theme};
use crate::storage::KvStore;
use crate::tracker::{Action, TrackerState};
use tracing::{debug, warn};

pub const COUNT_KEY: &str = "count";
pub const GOAL_KEY: &str = "goal";
pub const THEME_KEY: &str = "theme";

pub trait SoundPlayer {
    fn play(&mut self, clip: Clip);
}

impl SoundPlayer for Vec<Clip> {
    fn play(&mut self, clip: Clip) {
        self.push(clip);
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    state: TrackerState,
    store: KvStore,
}

impl Session {
    pub fn restore(store: KvStore) -> Self {
        let mut state = TrackerState::default();

        if let Some(raw) = store.get(COUNT_KEY) {
            match raw.trim().parse::<u64>() {
                Ok(count) => state.count = count,
                Err(_) => warn!(value = raw, "ignoring stored count"),
            }
        }

        if let Some(raw) = store.get(GOAL_KEY) {
            match crate::tracker::parse_goal(raw) {
                Some(goal) => state.goal = goal,
                None => warn!(value = raw, "ignoring stored goal"),
            }
        }

        if let Some(raw) = store.get(THEME_KEY).filter(|raw| !raw.is_empty()) {
            match Theme::from_key(raw) {
                Some(theme) => state.theme = theme,
                None => warn!(value = raw, "ignoring stored theme"),
            }
        }

        let mut session = Self { state, store };
        session.save();
        session
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn store(&self) -> &KvStore {
        &self.store
    }

    pub fn apply(&mut self, action: Action, player: &mut impl SoundPlayer) -> bool {
        debug!(?action, "applying action");
        let before = self.state.persisted();

        let (next, clips) = self.state.apply(action);
        for clip in clips {
            player.play(clip);
        }
        self.state = next;

        let changed = self.state.persisted() != before;
        if changed {
            self.save();
        }
        changed
    }

    fn save(&mut self) {
        self.store.set(COUNT_KEY, self.state.count.to_string());
        self.store.set(GOAL_KEY, self.state.goal.to_string());
        self.store.set(THEME_KEY, self.state.theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(count: &str, goal: &str, theme: &str) -> KvStore {
        let mut store = KvStore::default();
        store.set(COUNT_KEY, count);
        store.set(GOAL_KEY, goal);
        store.set(THEME_KEY, theme);
        store
    }

    #[test]
    fn restore_from_empty_store_writes_defaults() {
        let session = Session::restore(KvStore::default());
        assert_eq!(session.state(), &TrackerState::default());
        assert_eq!(session.store().get(COUNT_KEY), Some("0"));
        assert_eq!(session.store().get(GOAL_KEY), Some("10"));
        assert_eq!(session.store().get(THEME_KEY), Some("light"));
    }

    #[test]
    fn restore_keeps_defaults_for_bad_values() {
        let session = Session::restore(stored("many", "zero", "sepia"));
        assert_eq!(session.state(), &TrackerState::default());
        assert_eq!(session.store().get(GOAL_KEY), Some("10"));
    }

    #[test]
    fn restore_mixes_valid_and_invalid_entries() {
        let session = Session::restore(stored("3", "0", ""));
        assert_eq!(session.state().count, 3);
        assert_eq!(session.state().goal, 10);
        assert_eq!(session.state().theme, Theme::Light);
    }

    #[test]
    fn state_survives_a_restart() {
        let mut session = Session::restore(KvStore::default());
        let mut sounds = Vec::new();
        session.apply(Action::GoalInput("20".into()), &mut sounds);
        session.apply(Action::UpdateGoal, &mut sounds);
        for _ in 0..7 {
            session.apply(Action::Increase, &mut sounds);
        }
        session.apply(Action::ToggleTheme, &mut sounds);

        let restarted = Session::restore(session.store().clone());
        assert_eq!(restarted.state().count, 7);
        assert_eq!(restarted.state().goal, 20);
        assert_eq!(restarted.state().theme, Theme::Dark);
        assert!(restarted.state().pending_goal_input.is_empty());
    }

    #[test]
    fn every_persisted_change_is_saved() {
        let mut session = Session::restore(KvStore::default());
        let mut sounds = Vec::new();

        assert!(session.apply(Action::Increase, &mut sounds));
        assert_eq!(session.store().get(COUNT_KEY), Some("1"));

        assert!(session.apply(Action::ToggleTheme, &mut sounds));
        assert_eq!(session.store().get(THEME_KEY), Some("dark"));

        assert!(session.apply(Action::Reset, &mut sounds));
        assert_eq!(session.store().get(COUNT_KEY), Some("0"));
    }

    #[test]
    fn goal_input_and_rejected_goal_skip_saving() {
        let mut session = Session::restore(KvStore::default());
        let mut sounds = Vec::new();

        assert!(!session.apply(Action::GoalInput("abc".into()), &mut sounds));
        assert!(!session.apply(Action::UpdateGoal, &mut sounds));
        assert_eq!(session.state().pending_goal_input, "abc");
        assert_eq!(session.state().goal, 10);
        assert!(sounds.is_empty());
    }

    #[test]
    fn reaching_goal_requests_both_clips() {
        let mut session = Session::restore(stored("9", "10", "light"));
        let mut sounds = Vec::new();
        session.apply(Action::Increase, &mut sounds);
        assert_eq!(sounds, vec![Clip::Click, Clip::Goal]);
    }
}
