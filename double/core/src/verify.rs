use crate::DoubleError;

/// Post-test verification that every configured call was exercised.
pub trait Verify {
	/// Describes each configuration that no invocation ever matched.
	fn unmet_expectations(&self) -> Vec<String>;

	/// Fails with [DoubleError::UnmetExpectation] if any configuration was never matched.
	fn verify_all(&self) -> Result<(), DoubleError> {
		let unmet = self.unmet_expectations();
		if unmet.is_empty() {
			return Ok(());
		}

		tracing::warn!(?unmet, "unmet expectations");
		Err(DoubleError::UnmetExpectation { unmet })
	}
}

/// Collects the unmet expectations of several doubles.
pub fn unmet_of(doubles: &[&dyn Verify]) -> Vec<String> {
	doubles.iter().flat_map(|double| double.unmet_expectations()).collect()
}
