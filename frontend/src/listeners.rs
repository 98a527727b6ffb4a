use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Something that delivers named events to callbacks.
pub trait EventSource {
    type Subscription;

    fn subscribe(&self, event: &'static str, callback: Box<dyn FnMut()>) -> Option<Self::Subscription>;
    fn unsubscribe(&self, event: &'static str, subscription: &Self::Subscription);
}

impl EventSource for Window {
    type Subscription = Closure<dyn FnMut()>;

    fn subscribe(&self, event: &'static str, callback: Box<dyn FnMut()>) -> Option<Self::Subscription> {
        let callback = Closure::wrap(callback);
        match self.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(callback),
            Err(e) => {
                warn!("Failed to subscribe to {}: {:?}", event, e);
                None
            }
        }
    }

    fn unsubscribe(&self, event: &'static str, subscription: &Self::Subscription) {
        let _ = self.remove_event_listener_with_callback(event, subscription.as_ref().unchecked_ref());
    }
}

/// An event subscription. Dropping it removes the listener, so a component
/// keeps it alive for exactly as long as it is mounted.
pub struct WindowListener<T: EventSource = Window> {
    source: T,
    event: &'static str,
    subscription: T::Subscription,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        Self::attach(web_sys::window()?, event, callback)
    }
}

impl<T: EventSource> WindowListener<T> {
    pub fn attach<F>(source: T, event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let subscription = source.subscribe(event, Box::new(callback))?;
        Some(Self {
            source,
            event,
            subscription,
        })
    }
}

impl<T: EventSource> Drop for WindowListener<T> {
    fn drop(&mut self) {
        self.source.unsubscribe(self.event, &self.subscription);
    }
}

/// Runs a bound callback once per requested frame.
pub trait FrameScheduler {
    type Handle: Copy + 'static;

    /// Installs the callback every later `request` runs.
    fn bind(&self, step: Box<dyn FnMut(f64)>);
    fn request(&self) -> Option<Self::Handle>;
    fn cancel(&self, handle: Self::Handle);
}

/// `requestAnimationFrame` on the browser window.
pub struct AnimationFrames {
    window: Window,
    step: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl AnimationFrames {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            step: RefCell::new(None),
        }
    }
}

impl FrameScheduler for AnimationFrames {
    type Handle = i32;

    fn bind(&self, step: Box<dyn FnMut(f64)>) {
        *self.step.borrow_mut() = Some(Closure::wrap(step));
    }

    fn request(&self) -> Option<i32> {
        let step = self.step.borrow();
        let step = step.as_ref()?;
        match self.window.request_animation_frame(step.as_ref().unchecked_ref()) {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!("requestAnimationFrame unavailable: {:?}", e);
                None
            }
        }
    }

    fn cancel(&self, handle: i32) {
        let _ = self.window.cancel_animation_frame(handle);
    }
}

/// A self-rescheduling frame loop. The frame handler gets the frame
/// timestamp in milliseconds and returns whether another frame is wanted.
/// Dropping the loop cancels the pending frame.
pub struct FrameLoop<S: FrameScheduler = AnimationFrames> {
    scheduler: Rc<S>,
    pending: Rc<Cell<Option<S::Handle>>>,
}

impl FrameLoop {
    pub fn start<F>(on_frame: F) -> Option<Self>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        Self::start_with(AnimationFrames::new(web_sys::window()?), on_frame)
    }
}

impl<S: FrameScheduler + 'static> FrameLoop<S> {
    pub fn start_with<F>(scheduler: S, mut on_frame: F) -> Option<Self>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let scheduler = Rc::new(scheduler);
        let pending = Rc::new(Cell::new(None));

        // The step only holds the scheduler weakly; the loop owns it.
        let step = {
            let scheduler: Weak<S> = Rc::downgrade(&scheduler);
            let pending = pending.clone();
            Box::new(move |timestamp: f64| {
                pending.set(None);
                let Some(scheduler) = scheduler.upgrade() else {
                    return;
                };
                if on_frame(timestamp) {
                    pending.set(scheduler.request());
                }
            }) as Box<dyn FnMut(f64)>
        };
        scheduler.bind(step);

        pending.set(Some(scheduler.request()?));
        Some(Self { scheduler, pending })
    }
}

impl<S: FrameScheduler> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }
}

/// In-memory stand-ins for the browser window.
#[cfg(test)]
pub mod testing {
    use super::*;

    type Subscriber = (u32, &'static str, Rc<RefCell<Box<dyn FnMut()>>>);

    #[derive(Clone, Default)]
    pub struct FakeEvents {
        subscribers: Rc<RefCell<Vec<Subscriber>>>,
        next_id: Rc<Cell<u32>>,
    }

    impl FakeEvents {
        pub fn dispatch(&self, event: &str) {
            let callbacks: Vec<_> = self
                .subscribers
                .borrow()
                .iter()
                .filter(|(_, name, _)| *name == event)
                .map(|(_, _, callback)| callback.clone())
                .collect();
            for callback in callbacks {
                (*callback.borrow_mut())();
            }
        }

        pub fn subscribers(&self, event: &str) -> usize {
            self.subscribers
                .borrow()
                .iter()
                .filter(|(_, name, _)| *name == event)
                .count()
        }
    }

    impl EventSource for FakeEvents {
        type Subscription = u32;

        fn subscribe(&self, event: &'static str, callback: Box<dyn FnMut()>) -> Option<u32> {
            let id = self.next_id.get() + 1;
            self.next_id.set(id);
            self.subscribers
                .borrow_mut()
                .push((id, event, Rc::new(RefCell::new(callback))));
            Some(id)
        }

        fn unsubscribe(&self, _event: &'static str, subscription: &u32) {
            self.subscribers.borrow_mut().retain(|(id, _, _)| id != subscription);
        }
    }

    #[derive(Clone, Default)]
    pub struct FakeFrames {
        step: Rc<RefCell<Option<Box<dyn FnMut(f64)>>>>,
        queued: Rc<RefCell<Vec<u32>>>,
        cancelled: Rc<RefCell<Vec<u32>>>,
        next_id: Rc<Cell<u32>>,
    }

    impl FakeFrames {
        /// Runs the oldest queued frame. False when nothing is queued.
        pub fn run_frame(&self, timestamp: f64) -> bool {
            if self.queued.borrow().is_empty() {
                return false;
            }
            self.queued.borrow_mut().remove(0);
            self.call_step(timestamp);
            true
        }

        /// Calls the bound step even though no frame is queued, like a
        /// callback the browser had already dispatched when it was cancelled.
        pub fn run_late(&self, timestamp: f64) {
            self.call_step(timestamp);
        }

        pub fn queued(&self) -> usize {
            self.queued.borrow().len()
        }

        pub fn cancelled(&self) -> Vec<u32> {
            self.cancelled.borrow().clone()
        }

        fn call_step(&self, timestamp: f64) {
            let step = self.step.borrow_mut().take();
            if let Some(mut step) = step {
                step(timestamp);
                *self.step.borrow_mut() = Some(step);
            }
        }
    }

    impl FrameScheduler for FakeFrames {
        type Handle = u32;

        fn bind(&self, step: Box<dyn FnMut(f64)>) {
            *self.step.borrow_mut() = Some(step);
        }

        fn request(&self) -> Option<u32> {
            let id = self.next_id.get() + 1;
            self.next_id.set(id);
            self.queued.borrow_mut().push(id);
            Some(id)
        }

        fn cancel(&self, handle: u32) {
            self.queued.borrow_mut().retain(|id| *id != handle);
            self.cancelled.borrow_mut().push(handle);
        }
    }
}
