// implemented by components wired into a channel through a closure that keeps
// them alive; call destroy() to detach them before dropping
pub trait Destroyable {
    fn destroy(&mut self);
}
