//! The canvas's `requestAnimationFrame` loop and window resize listener,
//! owned in one place so unmounting can cancel and release both.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use web_sys::Window;

#[derive(Default)]
struct Inner {
	frame: Option<Closure<dyn FnMut()>>,
	handle: Option<i32>,
	resize: Option<Closure<dyn FnMut()>>,
}

/// Cloneable handle to a frame loop. The scheduled callback only holds a weak
/// reference back, so [`FrameLoop::stop`] frees everything it captured.
#[derive(Clone, Default)]
pub struct FrameLoop {
	inner: Rc<RefCell<Inner>>,
}

fn request_next(inner: &Rc<RefCell<Inner>>) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let inner = &mut *inner.borrow_mut();
	if let Some(ref cb) = inner.frame {
		inner.handle = window.request_animation_frame(cb.as_ref().unchecked_ref()).ok();
	}
}

impl FrameLoop {
	/// Run `on_frame` once per animation frame until stopped.
	pub fn start(&self, mut on_frame: impl FnMut() + 'static) {
		let weak: Weak<RefCell<Inner>> = Rc::downgrade(&self.inner);
		self.inner.borrow_mut().frame = Some(Closure::new(move || {
			on_frame();
			if let Some(inner) = weak.upgrade() {
				request_next(&inner);
			}
		}));
		request_next(&self.inner);
	}

	pub fn on_resize(&self, window: &Window, on_resize: impl FnMut() + 'static) {
		let cb = Closure::<dyn FnMut()>::new(on_resize);
		let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		self.inner.borrow_mut().resize = Some(cb);
	}

	pub fn is_running(&self) -> bool {
		self.inner.borrow().frame.is_some()
	}

	/// Cancel the pending frame, detach the resize listener and drop both closures.
	pub fn stop(&self) {
		let mut inner = self.inner.borrow_mut();
		if let Some(window) = web_sys::window() {
			if let Some(handle) = inner.handle.take() {
				let _ = window.cancel_animation_frame(handle);
			}
			if let Some(ref cb) = inner.resize {
				let _ =
					window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		inner.frame = None;
		inner.resize = None;
	}
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
	use std::cell::Cell;

	use wasm_bindgen_test::*;

	use super::*;

	wasm_bindgen_test_configure!(run_in_browser);

	#[wasm_bindgen_test]
	fn stop_releases_captured_state() {
		let window = web_sys::window().unwrap();
		let frames = Rc::new(Cell::new(0u32));
		let resizes = Rc::new(Cell::new(0u32));
		let frame_loop = FrameLoop::default();

		let counter = frames.clone();
		frame_loop.start(move || counter.set(counter.get() + 1));
		let counter = resizes.clone();
		frame_loop.on_resize(&window, move || counter.set(counter.get() + 1));
		assert!(frame_loop.is_running());
		assert_eq!(Rc::strong_count(&frames), 2);
		assert_eq!(Rc::strong_count(&resizes), 2);

		frame_loop.stop();
		assert!(!frame_loop.is_running());
		assert_eq!(Rc::strong_count(&frames), 1);
		assert_eq!(Rc::strong_count(&resizes), 1);
		assert_eq!(Rc::strong_count(&frame_loop.inner), 1);
	}

	#[wasm_bindgen_test]
	fn stopping_twice_is_harmless() {
		let frame_loop = FrameLoop::default();
		frame_loop.stop();
		frame_loop.start(|| {});
		frame_loop.stop();
		frame_loop.stop();
		assert!(!frame_loop.is_running());
	}
}
