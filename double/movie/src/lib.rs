//! Double Movie - a movie service and its hand-written test double
//!
//! The [MovieService] trait is the capability the code under test depends
//! on. [MockMovieService] implements it on top of `double-core`, and
//! [create_movie_service_mock] configures it the same way for every mode:
//!
//! - `save_movie(None)` fails with a generic error;
//! - `get_movie(9999)` returns the [shared_movie];
//! - `delete_movie` has no configuration at all.
//!
//! The integration tests show which combinations of mode and verification
//! pass and which fail.

pub mod mock;
pub mod movie;
pub mod service;

pub use mock::{create_movie_service_mock, MockMovieService};
pub use movie::{shared_movie, Movie, SHARED_MOVIE_ID, SHARED_MOVIE_TITLE};
pub use service::MovieService;

use double_core::DoubleError;

/// Errors thrown by a [MovieService].
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
	#[error("Test double error: {0}")]
	Double(#[from] DoubleError),
}

impl ServiceError {
	/// Check if a strict double rejected a call it was not configured for
	pub fn is_unconfigured_call(&self) -> bool {
		matches!(self, ServiceError::Double(DoubleError::UnconfiguredCall { .. }))
	}
}
