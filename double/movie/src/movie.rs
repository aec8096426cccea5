use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Identifier of the shared fixture movie.
pub const SHARED_MOVIE_ID: i32 = 9999;

/// Title of the shared fixture movie.
pub const SHARED_MOVIE_TITLE: &str = "GOT";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Movie {
	pub id: i32,
	pub title: String,
}

impl Movie {
	pub fn new(id: i32, title: impl Into<String>) -> Self {
		Self { id, title: title.into() }
	}

	pub fn id(&self) -> i32 {
		self.id
	}

	pub fn title(&self) -> &str {
		&self.title
	}
}

/// The movie shared by every test, built once on first use.
pub fn shared_movie() -> &'static Movie {
	static SHARED: OnceLock<Movie> = OnceLock::new();
	SHARED.get_or_init(|| {
		tracing::debug!(id = SHARED_MOVIE_ID, title = SHARED_MOVIE_TITLE, "building shared movie fixture");
		Movie::new(SHARED_MOVIE_ID, SHARED_MOVIE_TITLE)
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_shared_movie_is_built_once() {
		let first = shared_movie();
		let second = shared_movie();

		assert!(std::ptr::eq(first, second));
		assert_eq!(first.id(), 9999);
		assert_eq!(first.title(), "GOT");
	}

	#[test]
	fn test_movie_from_json() {
		let movie: Movie = serde_json::from_str(r#"{ "id": 9999, "title": "GOT" }"#).unwrap();
		assert_eq!(&movie, shared_movie());
	}
}
