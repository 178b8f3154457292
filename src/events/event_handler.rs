/// A component that consumes a typed stream of events or commands.
pub trait EventHandler<T> {
    fn handle_event(&mut self, event: &T);
}
