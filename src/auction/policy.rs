//! Closure Policy Module
//!
//! Chooses which cancellation signal governs a freshly spawned closure task.

use tokio_util::sync::CancellationToken;

/// Governing-context policy for closure tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClosurePolicy {
    /// The closure outlives the creating request. It is cancelled only when
    /// the service shuts down.
    #[default]
    Detached,
    /// The closure is cancelled together with the creating request.
    RequestScoped,
}

impl ClosurePolicy {
    /// Returns the token the closure task will race its timer against.
    ///
    /// * `request` - cancellation signal of the creating request
    /// * `background` - service-wide token, cancelled at shutdown
    pub fn governing_context(
        self,
        request: &CancellationToken,
        background: &CancellationToken,
    ) -> CancellationToken {
        match self {
            ClosurePolicy::Detached => background.child_token(),
            ClosurePolicy::RequestScoped => request.clone(),
        }
    }
}
