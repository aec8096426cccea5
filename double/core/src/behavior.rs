pub mod mode;
pub mod times;

pub use mode::{MockMode, MODE_ENV_VAR};
pub use times::Times;

/// What a double should do with a call that no configuration matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
	/// Produce the return type's default value
	DefaultValue,
	/// Reject the call
	Reject,
}

impl MockMode {
	/// Resolve the fallback for an unmatched call
	pub fn fallback(&self) -> Fallback {
		match self {
			MockMode::Default | MockMode::Lenient => Fallback::DefaultValue,
			MockMode::Strict => Fallback::Reject,
		}
	}
}
