use crate::{shared_movie, Movie, MovieService, ServiceError};
use double_core::{unmet_of, MethodDouble, MockMode, Verify};

// ==============================================================================
// Hand-written double for MovieService
// ==============================================================================

/// Test double for [MovieService].
///
/// Each trait method forwards to its own [MethodDouble]; the `setup_*`
/// accessors expose them for configuration and the `*_double` accessors for
/// verification.
#[derive(Debug)]
pub struct MockMovieService {
	mode: MockMode,
	get_movie: MethodDouble<i32, Option<Movie>>,
	save_movie: MethodDouble<Option<Movie>, ()>,
	delete_movie: MethodDouble<Option<Movie>, ()>,
}

impl MockMovieService {
	pub fn new(mode: MockMode) -> Self {
		Self {
			mode,
			get_movie: MethodDouble::new("get_movie", mode),
			save_movie: MethodDouble::new("save_movie", mode),
			delete_movie: MethodDouble::new("delete_movie", mode),
		}
	}

	pub fn mode(&self) -> MockMode {
		self.mode
	}

	pub fn setup_get_movie(&mut self) -> &mut MethodDouble<i32, Option<Movie>> {
		&mut self.get_movie
	}

	pub fn setup_save_movie(&mut self) -> &mut MethodDouble<Option<Movie>, ()> {
		&mut self.save_movie
	}

	pub fn setup_delete_movie(&mut self) -> &mut MethodDouble<Option<Movie>, ()> {
		&mut self.delete_movie
	}

	pub fn get_movie_double(&self) -> &MethodDouble<i32, Option<Movie>> {
		&self.get_movie
	}

	pub fn save_movie_double(&self) -> &MethodDouble<Option<Movie>, ()> {
		&self.save_movie
	}

	pub fn delete_movie_double(&self) -> &MethodDouble<Option<Movie>, ()> {
		&self.delete_movie
	}
}

impl Default for MockMovieService {
	fn default() -> Self {
		Self::new(MockMode::default())
	}
}

impl MovieService for MockMovieService {
	fn get_movie(&self, id: i32) -> Result<Option<Movie>, ServiceError> {
		Ok(self.get_movie.invoke(id)?)
	}

	fn save_movie(&self, movie: Option<&Movie>) -> Result<(), ServiceError> {
		Ok(self.save_movie.invoke(movie.cloned())?)
	}

	fn delete_movie(&self, movie: Option<&Movie>) -> Result<(), ServiceError> {
		Ok(self.delete_movie.invoke(movie.cloned())?)
	}
}

impl Verify for MockMovieService {
	fn unmet_expectations(&self) -> Vec<String> {
		unmet_of(&[&self.get_movie, &self.save_movie, &self.delete_movie])
	}
}

/// Builds the canonical double: saving a missing movie fails, and looking up
/// the shared movie's id returns it. `delete_movie` is left unconfigured.
pub fn create_movie_service_mock(mode: MockMode) -> MockMovieService {
	let movie = shared_movie();
	let mut service = MockMovieService::new(mode);
	service.setup_save_movie().fails(None, "cannot save a missing movie");
	service.setup_get_movie().returns(movie.id(), Some(movie.clone()));
	service
}
