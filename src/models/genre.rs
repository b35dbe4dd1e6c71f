use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of the catalog provider's genre list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

impl Genre {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Genre id → localized name lookup, built fresh for every request.
///
/// Entries keep the order in which the provider listed them; that order decides
/// which entry wins when two names match the same keyword.
#[derive(Debug, Clone, Default)]
pub struct GenreTaxonomy {
    genres: Vec<Genre>,
    index: HashMap<u64, usize>,
}

impl GenreTaxonomy {
    /// Builds a taxonomy from the provider list.
    ///
    /// A repeated id keeps its first position but takes the later name.
    pub fn from_genres(genres: impl IntoIterator<Item = Genre>) -> Self {
        let mut taxonomy = Self::default();
        for genre in genres {
            match taxonomy.index.get(&genre.id) {
                Some(&position) => taxonomy.genres[position].name = genre.name,
                None => {
                    taxonomy.index.insert(genre.id, taxonomy.genres.len());
                    taxonomy.genres.push(genre);
                }
            }
        }
        taxonomy
    }

    /// Localized name for a genre id
    pub fn name(&self, id: u64) -> Option<&str> {
        self.index
            .get(&id)
            .map(|&position| self.genres[position].name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Genre> {
        self.genres.iter()
    }

    pub fn len(&self) -> usize {
        self.genres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }
}

/// Keyword returned by the generative model, plus the genre it resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedKeyword {
    pub keyword: String,
    pub genre: Option<Genre>,
}
