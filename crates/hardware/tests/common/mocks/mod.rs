
/// Output sink mocks.
pub mod output;
