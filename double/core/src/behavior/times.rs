/// Call-count constraint used by targeted verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Times {
	/// No matching call at all
	Never,
	/// Exactly one matching call
	Once,
	/// Exactly `n` matching calls
	Exactly(usize),
	/// `n` or more matching calls
	AtLeast(usize),
	/// `n` or fewer matching calls
	AtMost(usize),
}

impl Times {
	/// Check if `count` calls satisfy this constraint
	pub fn satisfied_by(&self, count: usize) -> bool {
		match *self {
			Times::Never => count == 0,
			Times::Once => count == 1,
			Times::Exactly(n) => count == n,
			Times::AtLeast(n) => count >= n,
			Times::AtMost(n) => count <= n,
		}
	}
}

impl std::fmt::Display for Times {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Times::Never => write!(f, "never"),
			Times::Once => write!(f, "exactly once"),
			Times::Exactly(n) => write!(f, "exactly {} time(s)", n),
			Times::AtLeast(n) => write!(f, "at least {} time(s)", n),
			Times::AtMost(n) => write!(f, "at most {} time(s)", n),
		}
	}
}
