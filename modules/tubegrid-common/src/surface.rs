use crate::render::ResultsView;

/// Ticket identifying one search cycle against the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// The single output surface. Each completed search replaces the whole
/// view. Completions carrying a stale ticket are discarded, so a slow
/// early response can never overwrite a newer search.
#[derive(Debug, Default)]
pub struct ResultsSurface {
    generation: u64,
    view: Option<ResultsView>,
}

impl ResultsSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new search cycle. Any cycle begun earlier becomes stale.
    pub fn begin(&mut self) -> SearchTicket {
        self.generation += 1;
        SearchTicket(self.generation)
    }

    /// Install a completed view. Returns `false` and changes nothing if a
    /// newer cycle has begun since this ticket was issued.
    pub fn complete(&mut self, ticket: SearchTicket, view: ResultsView) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "Discarding stale search completion"
            );
            return false;
        }
        self.view = Some(view);
        true
    }

    /// The last installed view, if any search has completed.
    pub fn current(&self) -> Option<&ResultsView> {
        self.view.as_ref()
    }
}
