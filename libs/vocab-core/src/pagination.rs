//! Active corpus and its paginated, optionally shuffled views.

use crate::error::{Result, UploadError};
use crate::types::{PageSelection, WordPair};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Words per set unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Holds the active word-pair list and the currently visible slice.
#[derive(Debug, Clone)]
pub struct PairStore {
    pairs: Vec<WordPair>,
    page_size: usize,
    selection: PageSelection,
    view: Vec<WordPair>,
    shuffle: bool,
    rng: StdRng,
}

impl PairStore {
    /// Create an empty store seeded from the operating system.
    pub fn new(page_size: usize) -> Self {
        Self::with_rng(page_size, StdRng::from_os_rng())
    }

    /// Create an empty store with a fixed shuffle seed (for testing).
    pub fn with_seed(page_size: usize, seed: u64) -> Self {
        Self::with_rng(page_size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(page_size: usize, rng: StdRng) -> Self {
        Self {
            pairs: Vec::new(),
            page_size: page_size.max(1),
            selection: PageSelection::default(),
            view: Vec::new(),
            shuffle: false,
            rng,
        }
    }

    /// Replace the corpus and show page 1.
    ///
    /// An empty list is rejected and the previous corpus is kept.
    pub fn load(&mut self, pairs: Vec<WordPair>) -> Result<()> {
        if pairs.is_empty() {
            return Err(UploadError::NoValidPairs);
        }
        self.pairs = pairs;
        self.select_page(PageSelection::Page(1));
        Ok(())
    }

    /// Number of pages, never less than one.
    pub fn page_count(&self) -> usize {
        self.pairs.len().div_ceil(self.page_size).max(1)
    }

    /// Make `selection` the visible slice and return it.
    ///
    /// Out-of-range pages are clamped. With shuffle on the slice is
    /// reshuffled on every call.
    pub fn select_page(&mut self, selection: PageSelection) -> &[WordPair] {
        let selection = match selection {
            PageSelection::Page(page) => PageSelection::Page(page.clamp(1, self.page_count())),
            PageSelection::All => PageSelection::All,
        };

        let mut view = match selection {
            PageSelection::All => self.pairs.clone(),
            PageSelection::Page(page) => {
                let start = ((page - 1) * self.page_size).min(self.pairs.len());
                let end = (start + self.page_size).min(self.pairs.len());
                self.pairs[start..end].to_vec()
            }
        };
        if self.shuffle {
            view.shuffle(&mut self.rng);
        }

        self.selection = selection;
        self.view = view;
        &self.view
    }

    /// Advance one page, wrapping from the last page to the first.
    pub fn next(&mut self) -> &[WordPair] {
        let next = match self.selection {
            PageSelection::All => 1,
            PageSelection::Page(page) if page >= self.page_count() => 1,
            PageSelection::Page(page) => page + 1,
        };
        self.select_page(PageSelection::Page(next))
    }

    /// Go back one page, wrapping from the first page to the last.
    pub fn prev(&mut self) -> &[WordPair] {
        let prev = match self.selection {
            PageSelection::All => self.page_count(),
            PageSelection::Page(page) if page <= 1 => self.page_count(),
            PageSelection::Page(page) => page - 1,
        };
        self.select_page(PageSelection::Page(prev))
    }

    /// Turn shuffle on or off and reselect the current page.
    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.shuffle = shuffle;
        self.select_page(self.selection);
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn view(&self) -> &[WordPair] {
        &self.view
    }

    pub fn selection(&self) -> PageSelection {
        self.selection
    }

    pub fn pairs(&self) -> &[WordPair] {
        &self.pairs
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
