//! Bookmark commands.

use super::CommandResult;
use crate::db::BookmarkRepository;
use crate::state::AppState;
use crate::view::Change;
use vocab_core::types::WordPair;

/// Flip a pair's bookmark. Returns whether it is now bookmarked.
pub fn toggle_bookmark(state: &mut AppState, pair: &WordPair) -> CommandResult<bool> {
    let bookmarked = state.bookmarks.toggle(pair);
    state.repository.save_bookmarks(&state.bookmarks.to_keys())?;
    tracing::debug!(source = %pair.source, bookmarked, "bookmark toggled");
    state.notify(Change::Bookmarks);
    Ok(bookmarked)
}

pub fn list_bookmarks(state: &AppState) -> Vec<WordPair> {
    state.bookmarks.all()
}

pub fn clear_bookmarks(state: &mut AppState) -> CommandResult<()> {
    state.bookmarks.clear();
    state.repository.save_bookmarks(&[])?;
    tracing::info!("bookmarks cleared");
    state.notify(Change::Bookmarks);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::KeyValueStore;
    use crate::db::BOOKMARKS_KEY;
    use crate::test_support::state;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_toggle_on_off_restores_storage() {
        let mut state = state(50);
        let kept = WordPair::new("house", "huis");
        toggle_bookmark(&mut state, &kept).unwrap();
        let original = state.repository.get_item(BOOKMARKS_KEY).unwrap();

        let pair = WordPair::new("cat", "kat/poes");
        assert!(toggle_bookmark(&mut state, &pair).unwrap());
        assert!(state.bookmarks.contains(&pair));
        assert!(!toggle_bookmark(&mut state, &pair).unwrap());
        assert!(!state.bookmarks.contains(&pair));

        assert_eq!(state.repository.get_item(BOOKMARKS_KEY).unwrap(), original);
        assert_eq!(list_bookmarks(&state), vec![kept]);
    }

    #[test]
    fn test_clear() {
        let mut state = state(50);
        toggle_bookmark(&mut state, &WordPair::new("cat", "kat")).unwrap();
        clear_bookmarks(&mut state).unwrap();
        assert!(state.bookmarks.is_empty());
        assert!(state.repository.load_bookmarks().unwrap().is_empty());
    }
}
