use serde::{Deserialize, Serialize};

/// Environment variable consulted by [MockMode::from_env].
pub const MODE_ENV_VAR: &str = "DOUBLE_MODE";

/// How a double reacts to a call that no configuration matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MockMode {
	/// Default mode - unconfigured calls return the default value
	Default,
	/// Lenient mode - identical to [MockMode::Default]
	#[serde(alias = "loose")]
	Lenient,
	/// Strict mode - unconfigured calls fail immediately
	Strict,
}

impl MockMode {
	/// Parse from string
	pub fn from_str(s: &str) -> Result<Self, String> {
		match s.to_lowercase().as_str() {
			"default" => Ok(MockMode::Default),
			"lenient" | "loose" => Ok(MockMode::Lenient),
			"strict" => Ok(MockMode::Strict),
			_ => Err(format!("Invalid mock mode: '{}'. Valid values: default, lenient, strict", s)),
		}
	}

	/// Get from the DOUBLE_MODE environment variable or return default
	pub fn from_env() -> Self {
		match std::env::var(MODE_ENV_VAR) {
			Ok(value) => Self::from_str(&value).unwrap_or_else(|err| {
				tracing::warn!(%err, "ignoring {}", MODE_ENV_VAR);
				MockMode::default()
			}),
			Err(_) => MockMode::default(),
		}
	}

	/// Load the mode selected by feature flags
	pub fn from_features() -> Self {
		// Strict wins when several features are unified into one build
		#[cfg(feature = "mode-strict")]
		let mode = MockMode::Strict;
		#[cfg(all(feature = "mode-lenient", not(feature = "mode-strict")))]
		let mode = MockMode::Lenient;
		#[cfg(not(any(feature = "mode-strict", feature = "mode-lenient")))]
		let mode = MockMode::Default;

		mode
	}

	/// Convert to string representation
	pub fn as_str(&self) -> &'static str {
		match self {
			MockMode::Default => "default",
			MockMode::Lenient => "lenient",
			MockMode::Strict => "strict",
		}
	}

	/// Check if unconfigured calls should fail
	pub fn is_strict(&self) -> bool {
		matches!(self, MockMode::Strict)
	}

	/// Every mode, in declaration order
	pub fn all() -> [MockMode; 3] {
		[MockMode::Default, MockMode::Lenient, MockMode::Strict]
	}
}

impl Default for MockMode {
	fn default() -> Self {
		MockMode::Default
	}
}

impl std::fmt::Display for MockMode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}
