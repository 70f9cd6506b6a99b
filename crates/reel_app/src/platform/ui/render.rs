use reel_core::{AppViewModel, MovieCardView};

use super::constants::*;

/// Renders the view as text lines: loading, else error, else the result list.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    let title = if view.query.is_empty() {
        HEADER.to_string()
    } else {
        format!("{HEADER} matching \"{}\"", view.query)
    };
    lines.push(title);

    if view.loading {
        lines.push(LOADING_TEXT.to_string());
    } else if let Some(message) = &view.error_message {
        lines.push(format!("! {message}"));
    } else if view.movies.is_empty() {
        lines.push(EMPTY_TEXT.to_string());
    } else {
        lines.extend(view.movies.iter().map(format_movie_row));
    }

    lines
}

fn format_movie_row(card: &MovieCardView) -> String {
    let row = format!(
        "[#{id}] {title} ({rating} | {language} | {year})",
        id = card.id,
        title = card.title,
        rating = card.rating,
        language = card.language,
        year = card.year
    );
    match &card.poster_url {
        Some(url) => format!("{row} {url}"),
        None => row,
    }
}
