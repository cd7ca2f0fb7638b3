use std::sync::atomic::{AtomicU64, Ordering};

/// Display region a response is rendered into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderTarget {
    SimilarList,
    UserList,
    Registration,
}

/// Issued when a request starts; checked when its response arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    target: RenderTarget,
    seq: u64,
}

impl Ticket {
    pub fn target(&self) -> RenderTarget {
        self.target
    }
}

/// Tracks the newest request issued for each render target
///
/// A response may only be rendered while its ticket is still the newest one
/// for its target. Callers must check and render under the same page lock.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    similar_list: AtomicU64,
    user_list: AtomicU64,
    registration: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    fn counter(&self, target: RenderTarget) -> &AtomicU64 {
        match target {
            RenderTarget::SimilarList => &self.similar_list,
            RenderTarget::UserList => &self.user_list,
            RenderTarget::Registration => &self.registration,
        }
    }

    pub fn issue(&self, target: RenderTarget) -> Ticket {
        let seq = self.counter(target).fetch_add(1, Ordering::SeqCst) + 1;
        Ticket { target, seq }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.counter(ticket.target).load(Ordering::SeqCst) == ticket.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let sequencer = RequestSequencer::new();
        let first = sequencer.issue(RenderTarget::SimilarList);
        let second = sequencer.issue(RenderTarget::SimilarList);

        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[test]
    fn test_targets_are_independent() {
        let sequencer = RequestSequencer::new();
        let similar = sequencer.issue(RenderTarget::SimilarList);
        let user = sequencer.issue(RenderTarget::UserList);
        sequencer.issue(RenderTarget::Registration);

        assert!(sequencer.is_current(similar));
        assert!(sequencer.is_current(user));
        assert_eq!(user.target(), RenderTarget::UserList);
    }
}
