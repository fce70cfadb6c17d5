//! Fixture windows shared by the unit tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Weak};

use crate::manager::WindowManager;
use crate::window::ManagerAware;
use crate::{Hint, KeyStroke, TerminalSize, Window, WindowRef};

type InputHook = Box<dyn Fn(&KeyStroke) -> bool + Send + Sync>;

/// A scriptable window that records what the manager does to it.
pub struct TestWindow {
    title: String,
    preferred: TerminalSize,
    hints: Vec<Hint>,
    enabled: AtomicBool,
    consumes_input: bool,
    manager_aware: bool,
    received: Mutex<Vec<KeyStroke>>,
    manager: Mutex<Option<Weak<dyn WindowManager>>>,
    on_input: Option<InputHook>,
}

impl TestWindow {
    pub fn new(columns: i32, rows: i32) -> Self {
        Self {
            title: String::new(),
            preferred: TerminalSize::new(columns, rows),
            hints: Vec::new(),
            enabled: AtomicBool::new(false),
            consumes_input: true,
            manager_aware: false,
            received: Mutex::new(Vec::new()),
            manager: Mutex::new(None),
            on_input: None,
        }
    }

    pub fn with_hints(mut self, hints: &[Hint]) -> Self {
        self.hints = hints.to_vec();
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.into();
        self
    }

    pub fn ignoring_input(mut self) -> Self {
        self.consumes_input = false;
        self
    }

    pub fn manager_aware(mut self) -> Self {
        self.manager_aware = true;
        self
    }

    pub fn on_input(mut self, hook: impl Fn(&KeyStroke) -> bool + Send + Sync + 'static) -> Self {
        self.on_input = Some(Box::new(hook));
        self
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn received(&self) -> Vec<KeyStroke> {
        self.received.lock().unwrap().clone()
    }

    pub fn manager(&self) -> Option<Arc<dyn WindowManager>> {
        self.manager.lock().unwrap().as_ref().and_then(Weak::upgrade)
    }

    /// Shares the window and returns both the typed and the manager-facing handle.
    pub fn into_shared(self) -> (Arc<TestWindow>, WindowRef) {
        let arc = Arc::new(self);
        let handle = WindowRef::from_arc(arc.clone());
        (arc, handle)
    }
}

impl Window for TestWindow {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn preferred_size(&self) -> TerminalSize {
        self.preferred
    }

    fn hints(&self) -> &[Hint] {
        &self.hints
    }

    fn handle_input(&self, key: &KeyStroke) -> bool {
        self.received.lock().unwrap().push(*key);
        match &self.on_input {
            Some(hook) => hook(key),
            None => self.consumes_input,
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    fn as_manager_aware(&self) -> Option<&dyn ManagerAware> {
        if self.manager_aware {
            Some(self as &dyn ManagerAware)
        } else {
            None
        }
    }
}

impl ManagerAware for TestWindow {
    fn attach_manager(&self, manager: Weak<dyn WindowManager>) {
        *self.manager.lock().unwrap() = Some(manager);
    }
}
