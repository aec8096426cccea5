use std::fmt;

/// Describes which argument values a configuration applies to.
pub enum Matcher<A> {
	/// Matches every argument.
	Any,
	/// Matches arguments equal to the contained value.
	Eq(A),
	/// Matches arguments accepted by `predicate`.
	Predicate {
		description: String,
		predicate: Box<dyn Fn(&A) -> bool>,
	},
}

impl<A> Matcher<A> {
	/// Matcher for an exact value.
	pub fn eq(value: A) -> Self {
		Matcher::Eq(value)
	}

	/// Matcher for any value.
	pub fn any() -> Self {
		Matcher::Any
	}

	/// Matcher for arguments accepted by `predicate`, shown as `<description>`.
	pub fn predicate(description: impl Into<String>, predicate: impl Fn(&A) -> bool + 'static) -> Self {
		Matcher::Predicate { description: description.into(), predicate: Box::new(predicate) }
	}
}

impl<A: PartialEq> Matcher<A> {
	/// Check if `argument` satisfies this matcher.
	pub fn matches(&self, argument: &A) -> bool {
		match self {
			Matcher::Any => true,
			Matcher::Eq(expected) => expected == argument,
			Matcher::Predicate { predicate, .. } => predicate(argument),
		}
	}
}

impl<A: fmt::Debug> fmt::Display for Matcher<A> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Matcher::Any => write!(f, "<any>"),
			Matcher::Eq(value) => write!(f, "{:?}", value),
			Matcher::Predicate { description, .. } => write!(f, "<{}>", description),
		}
	}
}

impl<A: fmt::Debug> fmt::Debug for Matcher<A> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Matcher({})", self)
	}
}

impl<A> From<A> for Matcher<A> {
	fn from(value: A) -> Self {
		Matcher::Eq(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_any_matches_everything() {
		let matcher = Matcher::<Option<i32>>::any();
		assert!(matcher.matches(&None));
		assert!(matcher.matches(&Some(1)));
	}

	#[test]
	fn test_eq_matches_only_the_value() {
		let matcher = Matcher::eq(None::<i32>);
		assert!(matcher.matches(&None));
		assert!(!matcher.matches(&Some(9999)));
	}

	#[test]
	fn test_predicate() {
		let matcher = Matcher::predicate("positive", |id: &i32| *id > 0);
		assert!(matcher.matches(&9999));
		assert!(!matcher.matches(&-1));
		assert_eq!(matcher.to_string(), "<positive>");
	}

	#[test]
	fn test_display() {
		assert_eq!(Matcher::<i32>::Any.to_string(), "<any>");
		assert_eq!(Matcher::from(9999).to_string(), "9999");
		assert_eq!(Matcher::eq(None::<i32>).to_string(), "None");
	}
}
