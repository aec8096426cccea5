/// What a configured call produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<R> {
	/// Return a clone of the value
	Return(R),
	/// Fail with the message
	Fail(String),
}

impl<R> Outcome<R> {
	pub fn returns(value: R) -> Self {
		Outcome::Return(value)
	}

	pub fn fails(message: impl Into<String>) -> Self {
		Outcome::Fail(message.into())
	}
}
