//! Double Core - hand-written test doubles with configurable strictness
//!
//! This crate provides the building blocks for test doubles that stand in for
//! a real dependency behind a trait. A double is written by hand: it
//! implements the production trait and forwards every method to a
//! [MethodDouble], which holds the call configurations for that method.
//!
//! # Modes
//!
//! A [MockMode] is fixed when the double is created and only matters for
//! calls that no configuration matches:
//!
//! - [MockMode::Default] and [MockMode::Lenient] return the default value of
//!   the return type (a no-op for `()`).
//! - [MockMode::Strict] fails the call with [DoubleError::UnconfiguredCall].
//!
//! ```rust
//! use double_core::{DoubleError, MethodDouble, MockMode};
//!
//! let mut lookup = MethodDouble::<i32, String>::new("lookup", MockMode::Strict);
//! lookup.returns(1, "one".to_string());
//!
//! assert_eq!(lookup.invoke(1).unwrap(), "one");
//! assert!(matches!(lookup.invoke(2), Err(DoubleError::UnconfiguredCall { .. })));
//! ```
//!
//! # Verification
//!
//! Independently of the mode, [Verify::verify_all] fails with
//! [DoubleError::UnmetExpectation] when a configuration was never matched.
//! Targeted checks use [MethodDouble::verify] with a [Times] constraint.
//!
//! ```rust
//! use double_core::{Matcher, MethodDouble, MockMode, Times, Verify};
//!
//! let mut save = MethodDouble::<Option<i32>, ()>::new("save", MockMode::Default);
//! save.fails(None, "refusing to save nothing");
//!
//! save.invoke(Some(7)).unwrap();
//!
//! assert!(save.verify(Matcher::any(), Times::Once).is_ok());
//! assert!(save.verify_all().is_err());
//! ```
//!
//! # Configuration
//!
//! The mode can be chosen explicitly, parsed with [MockMode::from_str], read
//! from the `DOUBLE_MODE` environment variable with [MockMode::from_env], or
//! selected at compile time through the `mode-strict` and `mode-lenient`
//! features with [MockMode::from_features].

pub mod behavior;
pub mod expectation;
pub mod matcher;
pub mod method;
pub mod outcome;
pub mod verify;

pub use behavior::{Fallback, MockMode, Times, MODE_ENV_VAR};
pub use expectation::Expectation;
pub use matcher::Matcher;
pub use method::MethodDouble;
pub use outcome::Outcome;
pub use verify::{unmet_of, Verify};

/// Errors raised by a double.
///
/// These are signals for the test, not conditions the code under test is
/// expected to recover from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DoubleError {
	#[error("Unconfigured call in strict mode: {method}({arguments})")]
	UnconfiguredCall { method: String, arguments: String },

	#[error("Unmet expectations: {}", .unmet.join(", "))]
	UnmetExpectation { unmet: Vec<String> },

	#[error("Configured failure in {method}: {message}")]
	Configured { method: String, message: String },

	#[error("Expected {method}({matcher}) to be called {expected}, but it was called {actual} time(s)")]
	CallCount { method: String, matcher: String, expected: Times, actual: usize },
}
