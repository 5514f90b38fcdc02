//! Scoped context frames folded into every error built inside the scope.
//!
//! Code that knows useful context (the file being parsed, the request being
//! served) but not whether anything below it will fail can push a frame for
//! the duration of a scope. Every [`Error`](crate::Error) constructed while
//! the frame is live picks up its template as an info line and its params
//! as defaults underneath the error's own data.

use crate::params::Params;
use crate::template::Template;
use std::cell::{Cell, RefCell};
use std::marker::PhantomData;

struct Frame {
    id: u64,
    template: Template,
    params: Params,
}

thread_local! {
    static FRAMES: RefCell<Vec<Frame>> = RefCell::new(Vec::new());
    static NEXT_ID: Cell<u64> = Cell::new(0);
}

/// Pushes a context frame for the current thread, returning a guard that
/// removes it again when dropped.
///
/// The frame's template is prepended (in push order, outermost first) to the
/// `info` list of every error constructed while the guard is live, and its
/// params become defaults under the error's own data: the error's params win
/// over any frame, and later frames win over earlier ones. Frame templates
/// resolve against that merged data, so a frame may reference a parameter
/// the error itself supplies.
pub fn add_info(template: impl Into<Template>, params: Params) -> InfoGuard {
    let id = NEXT_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    });
    FRAMES.with(|frames| {
        frames.borrow_mut().push(Frame {
            id,
            template: template.into(),
            params,
        });
    });
    InfoGuard {
        id,
        // Frames are per-thread; the guard must drop where it was created.
        _not_send: PhantomData,
    }
}

/// Removes its context frame when dropped. Returned by [`add_info`].
#[must_use = "the context frame is removed as soon as the guard drops"]
pub struct InfoGuard {
    id: u64,
    _not_send: PhantomData<*const ()>,
}

impl Drop for InfoGuard {
    fn drop(&mut self) {
        FRAMES.with(|frames| {
            let mut frames = frames.borrow_mut();
            if let Some(pos) = frames.iter().rposition(|f| f.id == self.id) {
                frames.remove(pos);
            }
        });
    }
}

/// Snapshot of the live frames: their templates in push order, and their
/// params merged with later frames overriding earlier ones.
pub(crate) fn snapshot() -> (Vec<Template>, Params) {
    FRAMES.with(|frames| {
        let frames = frames.borrow();
        let mut templates = Vec::with_capacity(frames.len());
        let mut params = Params::new();
        for frame in frames.iter() {
            templates.push(frame.template.clone());
            for (key, value) in frame.params.iter() {
                params.set(key, value);
            }
        }
        (templates, params)
    })
}
