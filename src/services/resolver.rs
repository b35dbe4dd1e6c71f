use crate::models::{Genre, GenreTaxonomy};

/// Matches a keyword against the taxonomy names, ignoring case.
///
/// The first entry in provider order wins. No match is a normal outcome.
pub fn resolve_genre(keyword: &str, taxonomy: &GenreTaxonomy) -> Option<Genre> {
    let keyword = keyword.to_lowercase();
    taxonomy
        .iter()
        .find(|genre| genre.name.to_lowercase() == keyword)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy() -> GenreTaxonomy {
        GenreTaxonomy::from_genres(vec![
            Genre::new(28, "Acción"),
            Genre::new(35, "comedia"),
            Genre::new(878, "Ciencia ficción"),
        ])
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(
            resolve_genre("Comedia", &taxonomy()),
            Some(Genre::new(35, "comedia"))
        );
    }

    #[test]
    fn test_returns_canonical_name() {
        assert_eq!(
            resolve_genre("ciencia ficción", &taxonomy()),
            Some(Genre::new(878, "Ciencia ficción"))
        );
        assert_eq!(
            resolve_genre("ACCIÓN", &taxonomy()),
            Some(Genre::new(28, "Acción"))
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(resolve_genre("space zombies", &taxonomy()), None);
        assert_eq!(resolve_genre("cienc", &taxonomy()), None);
        assert_eq!(resolve_genre("comedia", &GenreTaxonomy::default()), None);
    }

    #[test]
    fn test_first_match_wins() {
        let taxonomy = GenreTaxonomy::from_genres(vec![
            Genre::new(10749, "Romance"),
            Genre::new(99999, "ROMANCE"),
        ]);

        assert_eq!(resolve_genre("romance", &taxonomy).map(|g| g.id), Some(10749));
    }
}
