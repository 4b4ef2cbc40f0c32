//! Preference commands.

use super::deck::{set_info, SetInfo};
use super::CommandResult;
use crate::db::PreferencesRepository;
use crate::state::AppState;
use crate::view::Change;
use vocab_core::types::{Preferences, Theme};

pub fn preferences(state: &AppState) -> Preferences {
    state.preferences.clone()
}

pub fn set_theme(state: &mut AppState, theme: Theme) -> CommandResult<Theme> {
    state.preferences.theme = theme;
    state.repository.save_theme(theme)?;
    state.notify(Change::Preferences);
    Ok(theme)
}

pub fn toggle_theme(state: &mut AppState) -> CommandResult<Theme> {
    let next = match state.preferences.theme {
        Theme::Dark => Theme::Light,
        Theme::Light => Theme::Dark,
    };
    set_theme(state, next)
}

/// Persist the shuffle flag and reselect the current page.
pub fn set_shuffle(state: &mut AppState, shuffle: bool) -> CommandResult<SetInfo> {
    state.preferences.shuffle = shuffle;
    state.repository.save_shuffle(shuffle)?;
    state.store.set_shuffle(shuffle);
    tracing::debug!(shuffle, "shuffle changed");
    state.notify(Change::Preferences);
    state.notify(Change::Selection);
    Ok(set_info(state))
}

pub fn toggle_shuffle(state: &mut AppState) -> CommandResult<SetInfo> {
    let shuffle = !state.preferences.shuffle;
    set_shuffle(state, shuffle)
}

pub fn set_active_tab(state: &mut AppState, tab: &str) -> CommandResult<()> {
    state.preferences.active_tab = Some(tab.to_string());
    state.repository.save_active_tab(tab)?;
    state.notify(Change::Preferences);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::state;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_preferences_persist() {
        let mut state = state(50);
        assert_eq!(toggle_theme(&mut state).unwrap(), Theme::Light);
        set_active_tab(&mut state, "practice").unwrap();

        let stored = state.repository.load_preferences().unwrap();
        assert_eq!(stored.theme, Theme::Light);
        assert_eq!(stored.active_tab.as_deref(), Some("practice"));
        assert_eq!(preferences(&state), stored);
    }

    #[test]
    fn test_shuffle_off_restores_order() {
        let mut state = state(5);
        let ordered = state.store.view().to_vec();

        assert!(toggle_shuffle(&mut state).unwrap().shuffle);
        assert!(state.repository.load_preferences().unwrap().shuffle);
        let mut shuffled = state.store.view().to_vec();
        shuffled.sort_by(|a, b| a.source.cmp(&b.source));
        let mut expected = ordered.clone();
        expected.sort_by(|a, b| a.source.cmp(&b.source));
        assert_eq!(shuffled, expected);

        set_shuffle(&mut state, false).unwrap();
        assert_eq!(state.store.view(), ordered.as_slice());
    }
}
