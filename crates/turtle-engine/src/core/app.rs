use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called once per rendered frame, after the frame's input was collected.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Outcome reported by `Runtime::run` once the loop ends.
    ///
    /// Apps that stop because of a fatal runtime failure return it here.
    fn exit_status(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}
