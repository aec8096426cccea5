#[cfg(test)]
pub mod tests {

	use double_core::{MockMode, Verify};
	use double_movie::{create_movie_service_mock, shared_movie, MovieService};

	// The mode-strict feature selects strict doubles regardless of other enabled mode features.
	#[test]
	fn test_feature_selects_strict_mode() {
		assert_eq!(MockMode::from_features(), MockMode::Strict);
	}

	#[test]
	fn test_feature_mode_rejects_unconfigured_delete() {
		let service = create_movie_service_mock(MockMode::from_features());

		let err = service.delete_movie(Some(shared_movie())).unwrap_err();
		assert!(err.is_unconfigured_call());
	}

	#[test]
	fn test_feature_mode_still_answers_configured_calls() -> anyhow::Result<()> {
		let service = create_movie_service_mock(MockMode::from_features());

		assert_eq!(service.get_movie(shared_movie().id())?.as_ref(), Some(shared_movie()));
		assert!(service.save_movie(None).is_err());
		service.verify_all()?;
		Ok(())
	}
}
