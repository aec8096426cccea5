use crate::{Movie, ServiceError};

/// Capability interface for movie storage.
///
/// A `None` movie stands for a missing reference, which implementations may
/// reject.
pub trait MovieService {
	fn get_movie(&self, id: i32) -> Result<Option<Movie>, ServiceError>;

	fn save_movie(&self, movie: Option<&Movie>) -> Result<(), ServiceError>;

	fn delete_movie(&self, movie: Option<&Movie>) -> Result<(), ServiceError>;
}
