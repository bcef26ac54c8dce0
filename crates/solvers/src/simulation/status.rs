use std::io::Write;

use pensim_core::{DynamicEntity, Observer};

use super::{Action, Event};

/// Observer that writes one status line per event to a text sink.
///
/// Lines look like `t = 0.010000, CVP: x = 0.010000, vel_x = 1.000000`.
/// Write failures are ignored.
#[derive(Debug)]
pub struct StatusWriter<W> {
    sink: W,
}

impl<W: Write> StatusWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<E, W, const N: usize> Observer<Event<E, N>, Action> for StatusWriter<W>
where
    E: DynamicEntity<N>,
    W: Write,
{
    fn observe(&mut self, event: &Event<E, N>) -> Option<Action> {
        let _ = writeln!(
            self.sink,
            "t = {:.6}, {}",
            event.elapsed,
            event.entity.report()
        );
        None
    }
}
