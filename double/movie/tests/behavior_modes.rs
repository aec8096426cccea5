// Integration tests for how the mode of a double changes test outcomes.
//
// Every scenario saves the shared movie, looks it up by id and deletes it.
// `save_movie` is only configured for a missing movie and `delete_movie` is
// not configured at all, so only the lookup hits a configuration.

use double_core::{DoubleError, Matcher, MockMode, Times, Verify};
use double_movie::{
	create_movie_service_mock, shared_movie, Movie, MovieService, ServiceError,
};
use tracing_test::traced_test;

fn exercise(service: &impl MovieService) -> Result<Option<Movie>, ServiceError> {
	let movie = shared_movie();

	service.save_movie(Some(movie))?;
	let found = service.get_movie(movie.id())?;
	service.delete_movie(Some(movie))?;

	Ok(found)
}

#[test]
fn test_lenient_modes_pass() -> anyhow::Result<()> {
	for mode in [MockMode::Default, MockMode::Lenient] {
		let service = create_movie_service_mock(mode);

		let found = exercise(&service)?.ok_or_else(|| anyhow::anyhow!("no movie in {mode} mode"))?;

		assert_eq!(found.id(), shared_movie().id());
		assert_eq!(found.title(), shared_movie().title());
	}
	Ok(())
}

#[test]
fn test_strict_mode_fails_on_unconfigured_save() {
	let service = create_movie_service_mock(MockMode::Strict);

	let err = exercise(&service).unwrap_err();

	assert!(err.is_unconfigured_call());
	assert!(err.to_string().contains("save_movie"));
	// The failure is immediate: nothing after the save was reached
	assert!(service.get_movie_double().calls().is_empty());
	assert!(service.delete_movie_double().calls().is_empty());
}

#[test]
fn test_default_mode_with_verify_all_fails() -> anyhow::Result<()> {
	let service = create_movie_service_mock(MockMode::Default);

	let found = exercise(&service)?;
	assert_eq!(found.as_ref(), Some(shared_movie()));

	let err = service.verify_all().unwrap_err();
	assert_eq!(err, DoubleError::UnmetExpectation { unmet: vec!["save_movie(None)".to_string()] });
	Ok(())
}

#[test]
fn test_lenient_modes_behave_identically() {
	let default = create_movie_service_mock(MockMode::Default);
	let lenient = create_movie_service_mock(MockMode::Lenient);

	assert_eq!(exercise(&default).ok(), exercise(&lenient).ok());
	assert_eq!(default.unmet_expectations(), lenient.unmet_expectations());
}

#[test]
fn test_verify_all_passes_once_every_configuration_is_exercised() -> anyhow::Result<()> {
	let service = create_movie_service_mock(MockMode::Default);

	exercise(&service)?;
	assert!(service.save_movie(None).is_err());

	service.verify_all()?;
	Ok(())
}

#[test]
fn test_strict_mode_and_verify_all_fail_independently() {
	let mut service = create_movie_service_mock(MockMode::Strict);
	service.setup_save_movie().returns(Matcher::any(), ());

	// The catch-all save configuration answers, but delete is still unconfigured
	let err = exercise(&service).unwrap_err();
	assert!(err.is_unconfigured_call());
	assert!(err.to_string().contains("delete_movie"));

	// The save(None) configuration was shadowed and never matched
	let err = service.verify_all().unwrap_err();
	assert_eq!(err, DoubleError::UnmetExpectation { unmet: vec!["save_movie(None)".to_string()] });
}

#[test]
fn test_fully_configured_strict_double_passes() -> anyhow::Result<()> {
	let mut service = create_movie_service_mock(MockMode::Strict);
	service.setup_save_movie().returns(Some(shared_movie().clone()), ());
	service.setup_delete_movie().returns(Matcher::any(), ());

	let found = exercise(&service)?;
	assert_eq!(found.as_ref(), Some(shared_movie()));

	service.save_movie_double().verify(Some(shared_movie().clone()), Times::Once)?;
	service.delete_movie_double().verify(Matcher::any(), Times::Once)?;
	service.get_movie_double().verify(Matcher::predicate("positive id", |id: &i32| *id > 0), Times::AtLeast(1))?;
	Ok(())
}

#[test]
#[traced_test]
fn test_lenient_fall_through_is_logged() -> anyhow::Result<()> {
	let service = create_movie_service_mock(MockMode::Lenient);

	exercise(&service)?;

	assert!(logs_contain("unconfigured call returns default"));
	assert!(logs_contain("delete_movie"));
	Ok(())
}

#[test]
fn test_saved_history_survives_later_service_calls() -> anyhow::Result<()> {
	let service = create_movie_service_mock(MockMode::Default);
	service.save_movie(Some(shared_movie()))?;

	let saved = service.save_movie_double().calls();
	service.save_movie(Some(shared_movie()))?;

	assert_eq!(saved, vec![Some(shared_movie().clone())]);
	assert_eq!(service.save_movie_double().calls().len(), 2);
	Ok(())
}
