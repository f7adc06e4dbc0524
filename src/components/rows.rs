use ratatui::widgets::{Cell, Row};
use unicode_width::UnicodeWidthChar;

use crate::api::MovieSummary;
use crate::style::Theme;

/// Label substituted when a record's poster reference is absent or marked
/// unavailable.
pub const POSTER_PLACEHOLDER: &str = "no poster";
const POSTER_AVAILABLE: &str = "poster";
const ELLIPSIS: &str = "…";

/// Poster cell text for a record, substituting the placeholder when needed.
#[must_use]
pub fn poster_label(movie: &MovieSummary) -> &'static str {
	if movie.poster_url().is_some() {
		POSTER_AVAILABLE
	} else {
		POSTER_PLACEHOLDER
	}
}

/// Build one table row per loaded record, in list order.
#[must_use]
pub fn build_movie_rows<'a>(
	movies: &'a [MovieSummary],
	title_width: Option<u16>,
	theme: &Theme,
) -> Vec<Row<'a>> {
	movies
		.iter()
		.map(|movie| {
			let title = match title_width {
				// Leave one column of slack so the cell never touches the
				// column divider.
				Some(width) => truncate_to_width(&movie.title, width.saturating_sub(1) as usize),
				None => movie.title.clone(),
			};
			Row::new([
				Cell::from(title),
				Cell::from(movie.year.as_str()).style(theme.highlight),
				Cell::from(movie.media_type.as_str()),
				Cell::from(poster_label(movie)).style(if movie.poster_url().is_some() {
					ratatui::style::Style::default()
				} else {
					theme.empty_style()
				}),
				Cell::from(movie.imdb_id.as_str()).style(theme.empty_style()),
			])
		})
		.collect()
}

/// Truncate `text` to at most `max` display columns, appending an ellipsis
/// when anything was cut.
fn truncate_to_width(text: &str, max: usize) -> String {
	if max == 0 {
		return String::new();
	}

	let full_width: usize = text.chars().map(|ch| ch.width().unwrap_or(0)).sum();
	if full_width <= max {
		return text.to_string();
	}

	// Reserve one column for the ellipsis.
	let budget = max.saturating_sub(1);
	let mut truncated = String::new();
	let mut used = 0usize;
	for ch in text.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if used + ch_width > budget {
			break;
		}
		truncated.push(ch);
		used += ch_width;
	}
	truncated.push_str(ELLIPSIS);
	truncated
}

#[cfg(test)]
mod tests {
	use super::*;

	fn movie(poster: &str) -> MovieSummary {
		MovieSummary {
			imdb_id: "tt1".to_string(),
			title: "Iron Man".to_string(),
			year: "2008".to_string(),
			poster: poster.to_string(),
			media_type: "movie".to_string(),
		}
	}

	#[test]
	fn placeholder_substitutes_for_missing_posters() {
		assert_eq!(poster_label(&movie("N/A")), POSTER_PLACEHOLDER);
		assert_eq!(poster_label(&movie("")), POSTER_PLACEHOLDER);
		assert_eq!(poster_label(&movie("https://img.example/p.jpg")), "poster");
	}

	#[test]
	fn one_row_per_record() {
		let movies = vec![movie("N/A"), movie("https://img.example/p.jpg")];
		let rows = build_movie_rows(&movies, None, &Theme::default());
		assert_eq!(rows.len(), 2);
	}

	#[test]
	fn titles_are_truncated_with_an_ellipsis() {
		assert_eq!(truncate_to_width("Iron Man", 20), "Iron Man");
		assert_eq!(truncate_to_width("Iron Man", 5), "Iron…");
		assert_eq!(truncate_to_width("Iron Man", 0), "");
	}
}
