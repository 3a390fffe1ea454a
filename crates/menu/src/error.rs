use thiserror::Error;

/// Failures the picker core can surface to its caller.
///
/// User cancellation is not an error; it is a normal
/// [`RunResult`](crate::RunResult) terminal state.
#[derive(Debug, Error)]
pub enum MenuError {
	/// The display backend could not be acquired.
	#[error("display backend unavailable: {0}")]
	BackendInit(String),

	/// The display backend failed while rendering or polling.
	#[error("display backend i/o failed")]
	BackendIo(#[from] std::io::Error),
}
