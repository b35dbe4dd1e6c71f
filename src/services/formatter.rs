use crate::models::{Genre, GenreTaxonomy, MovieRecord, RawMovie};

/// Provider results considered per response
pub const MAX_RESULTS: usize = 10;
/// Genre labels kept per movie
pub const MAX_GENRES: usize = 3;

pub const NO_OVERVIEW: &str = "Sin descripción.";
pub const NO_YEAR: &str = "----";

/// Shapes raw provider results into display records.
///
/// Only the first [`MAX_RESULTS`] entries are considered, and entries without a
/// poster are dropped. When a genre was resolved its name leads every genre list.
pub fn format_movies(
    movies: &[RawMovie],
    taxonomy: &GenreTaxonomy,
    resolved: Option<&Genre>,
    poster_base_url: &str,
) -> Vec<MovieRecord> {
    movies
        .iter()
        .take(MAX_RESULTS)
        .filter_map(|movie| format_movie(movie, taxonomy, resolved, poster_base_url))
        .collect()
}

fn format_movie(
    movie: &RawMovie,
    taxonomy: &GenreTaxonomy,
    resolved: Option<&Genre>,
    poster_base_url: &str,
) -> Option<MovieRecord> {
    let poster_path = movie.poster_path.as_deref().filter(|p| !p.is_empty())?;

    Some(MovieRecord {
        id: movie.id,
        title: movie.title.clone().unwrap_or_default(),
        overview: non_empty(movie.overview.as_deref())
            .unwrap_or(NO_OVERVIEW)
            .to_string(),
        poster_url: format!("{}{}", poster_base_url, poster_path),
        year: non_empty(movie.release_date.as_deref())
            .map(|date| date.chars().take(4).collect())
            .unwrap_or_else(|| NO_YEAR.to_string()),
        genres: genre_labels(&movie.genre_ids, taxonomy, resolved),
    })
}

/// Translates genre ids to names, resolved genre first, at most [`MAX_GENRES`].
pub fn genre_labels(
    genre_ids: &[u64],
    taxonomy: &GenreTaxonomy,
    resolved: Option<&Genre>,
) -> Vec<String> {
    let names = genre_ids.iter().filter_map(|&id| taxonomy.name(id));

    let labels: Vec<&str> = match resolved {
        Some(genre) => std::iter::once(genre.name.as_str())
            .chain(names.filter(|name| *name != genre.name))
            .collect(),
        None => names.collect(),
    };

    labels
        .into_iter()
        .take(MAX_GENRES)
        .map(str::to_string)
        .collect()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://image.tmdb.org/t/p/w500";

    fn taxonomy() -> GenreTaxonomy {
        GenreTaxonomy::from_genres(vec![
            Genre::new(28, "acción"),
            Genre::new(35, "comedia"),
            Genre::new(18, "drama"),
            Genre::new(10749, "romance"),
            Genre::new(53, "suspense"),
        ])
    }

    fn movie(id: u64, genre_ids: Vec<u64>) -> RawMovie {
        RawMovie {
            id,
            title: Some(format!("Película {}", id)),
            overview: Some("Una historia.".to_string()),
            poster_path: Some(format!("/{}.jpg", id)),
            release_date: Some("2019-05-24".to_string()),
            genre_ids,
        }
    }

    #[test]
    fn test_resolved_genre_leads_labels() {
        let comedia = Genre::new(35, "comedia");
        let records = format_movies(&[movie(1, vec![28, 35])], &taxonomy(), Some(&comedia), BASE);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].genres, vec!["comedia", "acción"]);
    }

    #[test]
    fn test_resolved_genre_is_prepended_even_if_movie_lacks_it() {
        let comedia = Genre::new(35, "comedia");
        let labels = genre_labels(&[18, 10749, 53], &taxonomy(), Some(&comedia));
        assert_eq!(labels, vec!["comedia", "drama", "romance"]);
    }

    #[test]
    fn test_unresolved_keeps_provider_order() {
        let labels = genre_labels(&[18, 28], &taxonomy(), None);
        assert_eq!(labels, vec!["drama", "acción"]);
    }

    #[test]
    fn test_unknown_genre_ids_are_dropped() {
        let labels = genre_labels(&[999, 18, 12345], &taxonomy(), None);
        assert_eq!(labels, vec!["drama"]);
    }

    #[test]
    fn test_labels_never_exceed_three() {
        let all = vec![28, 35, 18, 10749, 53];
        assert_eq!(genre_labels(&all, &taxonomy(), None).len(), 3);

        let drama = Genre::new(18, "drama");
        let labels = genre_labels(&all, &taxonomy(), Some(&drama));
        assert_eq!(labels, vec!["drama", "acción", "comedia"]);
    }

    #[test]
    fn test_movies_without_poster_are_dropped() {
        let mut no_poster = movie(2, vec![18]);
        no_poster.poster_path = None;
        let mut empty_poster = movie(3, vec![18]);
        empty_poster.poster_path = Some(String::new());

        let records = format_movies(
            &[movie(1, vec![18]), no_poster, empty_poster],
            &taxonomy(),
            None,
            BASE,
        );

        assert_eq!(records.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(records[0].poster_url, "https://image.tmdb.org/t/p/w500/1.jpg");
    }

    #[test]
    fn test_only_first_ten_results_are_considered() {
        let mut movies: Vec<RawMovie> = (1..=12).map(|id| movie(id, vec![])).collect();
        movies[0].poster_path = None;

        let records = format_movies(&movies, &taxonomy(), None, BASE);

        assert_eq!(records.len(), 9);
        assert_eq!(records.last().map(|r| r.id), Some(10));
    }

    #[test]
    fn test_missing_overview_and_date_use_placeholders() {
        let mut sparse = movie(4, vec![]);
        sparse.overview = None;
        sparse.release_date = None;
        let mut blank = movie(5, vec![]);
        blank.overview = Some(String::new());
        blank.release_date = Some(String::new());

        let records = format_movies(&[sparse, blank], &taxonomy(), None, BASE);

        for record in &records {
            assert_eq!(record.overview, "Sin descripción.");
            assert_eq!(record.year, "----");
        }
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_year_is_first_four_characters() {
        let records = format_movies(&[movie(6, vec![])], &taxonomy(), None, BASE);
        assert_eq!(records[0].year, "2019");
        assert_eq!(records[0].title, "Película 6");
        assert_eq!(records[0].overview, "Una historia.");
    }
}
