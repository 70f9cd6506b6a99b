use tokio_util::sync::CancellationToken;

/// Holds the cancellation token of the one timer or request that may still report back.
///
/// Arming the slot cancels whatever it held before, so at most one token is live.
#[derive(Debug, Default)]
pub struct RequestSlot {
    current: Option<CancellationToken>,
}

impl RequestSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self) -> CancellationToken {
        self.cancel();
        let token = CancellationToken::new();
        self.current = Some(token.clone());
        token
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.current.take() {
            token.cancel();
        }
    }
}

impl Drop for RequestSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::RequestSlot;

    #[test]
    fn arming_cancels_previous_token() {
        let mut slot = RequestSlot::new();
        let first = slot.arm();
        let second = slot.arm();

        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
    }

    #[test]
    fn cancel_empties_the_slot() {
        let mut slot = RequestSlot::new();
        let token = slot.arm();
        slot.cancel();

        assert!(token.is_cancelled());
        slot.cancel();
        let next = slot.arm();
        assert!(!next.is_cancelled());
    }

    #[test]
    fn dropping_the_slot_cancels() {
        let token = {
            let mut slot = RequestSlot::new();
            slot.arm()
        };
        assert!(token.is_cancelled());
    }
}
