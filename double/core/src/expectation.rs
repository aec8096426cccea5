use crate::{Matcher, Outcome};
use std::cell::Cell;
use std::fmt;

/// A single call configuration: which arguments it applies to, what it
/// produces, and how many invocations it has answered.
///
/// The hit counter only ever grows, so an expectation that was matched once
/// stays matched for the lifetime of its double.
pub struct Expectation<A, R> {
	matcher: Matcher<A>,
	outcome: Outcome<R>,
	hits: Cell<usize>,
}

impl<A, R> Expectation<A, R> {
	pub fn new(matcher: Matcher<A>, outcome: Outcome<R>) -> Self {
		Self { matcher, outcome, hits: Cell::new(0) }
	}

	pub fn matcher(&self) -> &Matcher<A> {
		&self.matcher
	}

	pub fn outcome(&self) -> &Outcome<R> {
		&self.outcome
	}

	pub fn hits(&self) -> usize {
		self.hits.get()
	}

	pub fn is_matched(&self) -> bool {
		self.hits.get() > 0
	}

	pub(crate) fn record_hit(&self) {
		self.hits.set(self.hits.get() + 1);
	}
}

impl<A: PartialEq, R> Expectation<A, R> {
	pub fn matches(&self, argument: &A) -> bool {
		self.matcher.matches(argument)
	}
}

impl<A: fmt::Debug, R: fmt::Debug> fmt::Debug for Expectation<A, R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Expectation")
			.field("matcher", &self.matcher)
			.field("outcome", &self.outcome)
			.field("hits", &self.hits.get())
			.finish()
	}
}
