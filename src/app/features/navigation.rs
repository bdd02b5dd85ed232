use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::AppState,
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Navigate(path) => UpdateResult::Handled(Some(Command::Navigate(path.clone()))),
        Action::NavigateBack => UpdateResult::Handled(Some(Command::NavigateBack)),
        Action::RouteChanged(route) => {
            state.route = route.clone();
            state.last_error = None;
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Route;

    #[test]
    fn test_navigate_requests_router() {
        let mut state = AppState::default();
        let res = update(&mut state, &Action::Navigate("/hub".to_string()));
        assert!(matches!(
            res,
            UpdateResult::Handled(Some(Command::Navigate(ref p))) if p == "/hub"
        ));
        // The route only changes once the router confirms.
        assert!(state.route.is_home());
    }

    #[test]
    fn test_route_changed_updates_state() {
        let mut state = AppState::default();
        update(
            &mut state,
            &Action::RouteChanged(Route("/settings".to_string())),
        );
        assert_eq!(state.route, Route("/settings".to_string()));
    }
}
