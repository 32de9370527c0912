use crate::errors::AppError;
use crate::models::{ActionRequest, Clip, StateResponse};
use crate::state::AppState;
use crate::storage::persist_store;
use crate::tracker::{Action, TrackerState};
use crate::ui::render_index;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Json,
};
use tracing::error;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_index(&to_response(session.state(), Vec::new())))
}

pub async fn get_state(State(state): State<AppState>) -> Json<StateResponse> {
    let session = state.session.lock().await;
    Json(to_response(session.state(), Vec::new()))
}

pub async fn action(
    State(state): State<AppState>,
    Json(payload): Json<ActionRequest>,
) -> Result<Json<StateResponse>, AppError> {
    let actions = parse_action(payload)?;
    Ok(Json(apply_actions(&state, actions).await))
}

pub async fn rep_add(State(state): State<AppState>) -> Redirect {
    apply_actions(&state, vec![Action::Increase]).await;
    Redirect::to("/")
}

pub async fn rep_reset(State(state): State<AppState>) -> Redirect {
    apply_actions(&state, vec![Action::Reset]).await;
    Redirect::to("/")
}

pub async fn theme_toggle(State(state): State<AppState>) -> Redirect {
    apply_actions(&state, vec![Action::ToggleTheme]).await;
    Redirect::to("/")
}

fn parse_action(payload: ActionRequest) -> Result<Vec<Action>, AppError> {
    let actions = match (payload.action.trim(), payload.value) {
        ("increase", _) => vec![Action::Increase],
        ("reset", _) => vec![Action::Reset],
        ("toggle_theme", _) => vec![Action::ToggleTheme],
        ("goal_input", Some(value)) => vec![Action::GoalInput(value)],
        ("goal_input", None) => {
            return Err(AppError::bad_request("goal_input requires a value"));
        }
        ("update_goal", Some(value)) => vec![Action::GoalInput(value), Action::UpdateGoal],
        ("update_goal", None) => vec![Action::UpdateGoal],
        _ => {
            return Err(AppError::bad_request(
                "action must be one of increase, reset, goal_input, update_goal, toggle_theme",
            ));
        }
    };
    Ok(actions)
}

/// Storage writes are best-effort: a failed write is logged and the
/// in-memory state stays authoritative.
async fn apply_actions(state: &AppState, actions: Vec<Action>) -> StateResponse {
    let mut session = state.session.lock().await;
    let mut sounds: Vec<Clip> = Vec::new();

    let mut changed = false;
    for action in actions {
        changed |= session.apply(action, &mut sounds);
    }

    if changed {
        if let Err(err) = persist_store(&state.data_path, session.store()).await {
            error!("failed to persist tracker state: {err}");
        }
    }

    to_response(session.state(), sounds)
}

fn to_response(tracker: &TrackerState, sounds: Vec<Clip>) -> StateResponse {
    StateResponse {
        count: tracker.count,
        goal: tracker.goal,
        theme: tracker.theme,
        pending_goal_input: tracker.pending_goal_input.clone(),
        progress: tracker.progress(),
        tier: tracker.tier(),
        message: tracker.message().text().to_string(),
        sounds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use crate::storage::KvStore;

    fn request(action: &str, value: Option<&str>) -> ActionRequest {
        ActionRequest {
            action: action.to_string(),
            value: value.map(str::to_string),
        }
    }

    #[test]
    fn update_goal_with_value_sets_input_first() {
        let actions = parse_action(request("update_goal", Some("25"))).unwrap();
        assert_eq!(
            actions,
            vec![Action::GoalInput("25".into()), Action::UpdateGoal]
        );
    }

    #[test]
    fn goal_input_without_value_is_rejected() {
        let err = parse_action(request("goal_input", None)).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert!(parse_action(request("decrease", None)).is_err());
    }

    #[test]
    fn response_carries_derived_fields() {
        let tracker = TrackerState {
            count: 5,
            ..TrackerState::default()
        };
        let response = to_response(&tracker, vec![Clip::Click]);
        assert_eq!(response.progress, 50.0);
        assert_eq!(response.tier, crate::models::Tier::Mid);
        assert_eq!(response.message, "Almost there! Push harder!");
        assert_eq!(response.sounds, vec![Clip::Click]);
    }

    #[tokio::test]
    async fn failed_write_still_applies_action() {
        let mut data_path = std::env::temp_dir();
        data_path.push(format!("rep_tracker_missing_dir_{}", std::process::id()));
        data_path.push("state.json");
        let state = AppState::new(data_path.clone(), Session::restore(KvStore::default()));

        let response = apply_actions(&state, vec![Action::Increase]).await;
        assert_eq!(response.count, 1);
        assert_eq!(response.sounds, vec![Clip::Click]);
        assert!(!data_path.exists());

        let session = state.session.lock().await;
        assert_eq!(session.state().count, 1);
        assert_eq!(session.store().get(crate::session::COUNT_KEY), Some("1"));
    }
}
