use crate::controllers::events::InputEvent;

/// External collaborator that delivers discrete input events.
///
/// `poll_events` drains everything received since the previous call. An
/// implementation may block briefly to pace the frame loop; the core never
/// paces itself.
pub trait InputSource {
    fn poll_events(&mut self) -> Vec<InputEvent>;
}
