//! The in-memory game catalog.

use crate::types::VideoGame;

/// An ordered collection of games.
///
/// Fill it with [`Catalog::add`], then hand `&Catalog` to the functions in
/// [`crate::queries`]. Insertion order is preserved and is the tie-break
/// order for every query.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    games: Vec<VideoGame>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append games in order. Returns `false` only when `games` was empty.
    ///
    /// No deduplication and no validation of field values.
    pub fn add(&mut self, games: impl IntoIterator<Item = VideoGame>) -> bool {
        let before = self.games.len();
        self.games.extend(games);
        let added = self.games.len() - before;
        log::debug!("Added {} game(s) to catalog ({} total)", added, self.games.len());
        added > 0
    }

    /// All games in insertion order.
    pub fn all(&self) -> &[VideoGame] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VideoGame> {
        self.games.iter()
    }
}

impl FromIterator<VideoGame> for Catalog {
    fn from_iter<I: IntoIterator<Item = VideoGame>>(iter: I) -> Self {
        Self {
            games: iter.into_iter().collect(),
        }
    }
}

impl Extend<VideoGame> for Catalog {
    fn extend<I: IntoIterator<Item = VideoGame>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a VideoGame;
    type IntoIter = std::slice::Iter<'a, VideoGame>;

    fn into_iter(self) -> Self::IntoIter {
        self.games.iter()
    }
}
