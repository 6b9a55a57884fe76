use crate::FormSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the validated form to the automation service.
    SendStart { query: String, max_pages: u32 },
    /// POST a cancellation request to the automation service.
    SendCancel,
    /// Remember the submitted form so the next session can prefill it.
    PersistForm(FormSnapshot),
}
