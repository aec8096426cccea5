use crate::{DoubleError, Expectation, Fallback, Matcher, MockMode, Outcome, Times, Verify};
use std::cell::RefCell;
use std::fmt::Debug;

/// Test double for a single method of an interface.
///
/// `A` is the argument (a tuple for methods with several parameters) and `R`
/// is the return type. Configurations are kept in insertion order and scanned
/// from the most recent one, so a later configuration overrides an earlier
/// overlapping one.
pub struct MethodDouble<A, R> {
	name: String,
	mode: MockMode,
	expectations: Vec<Expectation<A, R>>,
	calls: RefCell<Vec<A>>,
}

impl<A, R> MethodDouble<A, R> {
	pub fn new(name: impl Into<String>, mode: MockMode) -> Self {
		Self { name: name.into(), mode, expectations: Vec::new(), calls: RefCell::new(Vec::new()) }
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn mode(&self) -> MockMode {
		self.mode
	}

	pub fn expectations(&self) -> &[Expectation<A, R>] {
		&self.expectations
	}

}

impl<A: Clone, R> MethodDouble<A, R> {
	/// Snapshot of every argument this method has been invoked with, in call order.
	pub fn calls(&self) -> Vec<A> {
		self.calls.borrow().clone()
	}
}

impl<A: Debug, R: Debug> Debug for MethodDouble<A, R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MethodDouble")
			.field("name", &self.name)
			.field("mode", &self.mode)
			.field("expectations", &self.expectations)
			.field("calls", &self.calls.borrow())
			.finish()
	}
}

impl<A: Debug, R: Debug> MethodDouble<A, R> {
	/// Registers that calls whose argument satisfies `matcher` produce `outcome`.
	pub fn configure(&mut self, matcher: impl Into<Matcher<A>>, outcome: Outcome<R>) -> &mut Self {
		let matcher = matcher.into();
		tracing::debug!(method = %self.name, %matcher, ?outcome, "configured call");
		self.expectations.push(Expectation::new(matcher, outcome));
		self
	}

	pub fn returns(&mut self, matcher: impl Into<Matcher<A>>, value: R) -> &mut Self {
		self.configure(matcher, Outcome::returns(value))
	}

	pub fn fails(&mut self, matcher: impl Into<Matcher<A>>, message: impl Into<String>) -> &mut Self {
		self.configure(matcher, Outcome::fails(message))
	}
}

impl<A, R> MethodDouble<A, R>
where
	A: PartialEq + Debug,
	R: Clone + Default,
{
	/// Resolves a call against the configurations, falling back on the mode
	/// when none matches.
	pub fn invoke(&self, argument: A) -> Result<R, DoubleError> {
		let result = match self.expectations.iter().rev().find(|e| e.matches(&argument)) {
			Some(expectation) => {
				expectation.record_hit();
				tracing::trace!(method = %self.name, ?argument, matcher = %expectation.matcher(), "matched call");
				match expectation.outcome() {
					Outcome::Return(value) => Ok(value.clone()),
					Outcome::Fail(message) => Err(DoubleError::Configured {
						method: self.name.clone(),
						message: message.clone(),
					}),
				}
			}
			None => match self.mode.fallback() {
				Fallback::DefaultValue => {
					tracing::debug!(method = %self.name, ?argument, mode = %self.mode, "unconfigured call returns default");
					Ok(R::default())
				}
				Fallback::Reject => {
					tracing::warn!(method = %self.name, ?argument, "unconfigured call rejected");
					Err(DoubleError::UnconfiguredCall {
						method: self.name.clone(),
						arguments: format!("{:?}", argument),
					})
				}
			},
		};

		self.calls.borrow_mut().push(argument);
		result
	}
}

impl<A: PartialEq + Debug, R> MethodDouble<A, R> {
	/// Checks how many recorded calls satisfy `matcher`.
	pub fn verify(&self, matcher: impl Into<Matcher<A>>, times: Times) -> Result<(), DoubleError> {
		let matcher = matcher.into();
		let actual = self.calls.borrow().iter().filter(|call| matcher.matches(call)).count();
		if times.satisfied_by(actual) {
			Ok(())
		} else {
			Err(DoubleError::CallCount {
				method: self.name.clone(),
				matcher: matcher.to_string(),
				expected: times,
				actual,
			})
		}
	}
}

impl<A: Debug, R> Verify for MethodDouble<A, R> {
	fn unmet_expectations(&self) -> Vec<String> {
		self.expectations()
			.iter()
			.filter(|e| !e.is_matched())
			.map(|e| format!("{}({})", self.name(), e.matcher()))
			.collect()
	}
}
