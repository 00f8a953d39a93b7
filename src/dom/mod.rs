//! Headless page model and event dispatch.
//!
//! A `Page` is a cheaply cloneable handle over the element arena, the
//! registered event handlers, the visibility watchers, and the timer queue.
//! Events enter through explicit calls (`click`, `submit`, `report_visibility`,
//! `advance`); handlers run outside the page lock, so they are free to mutate
//! the page or dispatch further events.
//!
//! Browser-level outcomes (following a link, submitting a form) are not
//! executed - the page is headless - but recorded in an effects log that the
//! embedder or tests can drain.

mod element;
mod observer;
mod timers;

#[cfg(test)]
#[path = "dom_tests.rs"]
mod tests;

pub use element::{ElementId, Tag};
pub use observer::VisibilityCallback;

use std::cell::Cell;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use element::ElementNode;
use observer::VisibilityWatcher;
use timers::{TimerCallback, TimerQueue};

/// A recorded browser-level outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Navigation to a URL (a followed link).
    Href(String),
    /// A form submission, with the form's `action` attribute if present.
    FormSubmit {
        form: ElementId,
        action: Option<String>,
    },
}

/// A click being dispatched. Handlers may suppress the default action.
pub struct ClickEvent {
    target: ElementId,
    default_prevented: Cell<bool>,
}

impl ClickEvent {
    fn new(target: ElementId) -> Self {
        Self {
            target,
            default_prevented: Cell::new(false),
        }
    }

    pub fn target(&self) -> ElementId {
        self.target
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

/// A form submission being dispatched.
pub struct SubmitEvent {
    form: ElementId,
    default_prevented: Cell<bool>,
}

impl SubmitEvent {
    fn new(form: ElementId) -> Self {
        Self {
            form,
            default_prevented: Cell::new(false),
        }
    }

    pub fn form(&self) -> ElementId {
        self.form
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

/// Handler invoked for clicks on a specific element.
pub type ClickHandler = Arc<dyn Fn(&Page, &ClickEvent) + Send + Sync>;
/// Handler invoked for submissions of a specific form.
pub type SubmitHandler = Arc<dyn Fn(&Page, &SubmitEvent) + Send + Sync>;

struct PageState {
    nodes: Vec<ElementNode>,
    body: ElementId,
    click_handlers: HashMap<ElementId, Vec<ClickHandler>>,
    submit_handlers: HashMap<ElementId, Vec<SubmitHandler>>,
    watchers: Vec<VisibilityWatcher>,
    timers: TimerQueue,
    navigations: Vec<Navigation>,
}

/// Cloneable handle to the page model.
#[derive(Clone)]
pub struct Page {
    inner: Arc<Mutex<PageState>>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    /// Create an empty page containing only a body element.
    pub fn new() -> Self {
        let body = ElementNode::new(Tag::Body);
        Self {
            inner: Arc::new(Mutex::new(PageState {
                nodes: vec![body],
                body: ElementId(0),
                click_handlers: HashMap::new(),
                submit_handlers: HashMap::new(),
                watchers: Vec::new(),
                timers: TimerQueue::new(),
                navigations: Vec::new(),
            })),
        }
    }

    pub fn body(&self) -> ElementId {
        self.inner.lock().body
    }

    // ------------------------------------------------------------------
    // Tree construction and mutation
    // ------------------------------------------------------------------

    /// Create a detached element. Attach it with [`Page::append_child`].
    pub fn create_element(&self, tag: Tag) -> ElementId {
        let mut state = self.inner.lock();
        let id = ElementId(state.nodes.len());
        state.nodes.push(ElementNode::new(tag));
        id
    }

    pub fn append_child(&self, parent: ElementId, child: ElementId) {
        let mut state = self.inner.lock();
        state.nodes[child.0].parent = Some(parent);
        state.nodes[parent.0].children.push(child);
    }

    /// Detach an element from the tree. It keeps its state but no longer
    /// matches queries.
    pub fn detach(&self, id: ElementId) {
        let mut state = self.inner.lock();
        if let Some(parent) = state.nodes[id.0].parent.take() {
            state.nodes[parent.0].children.retain(|c| *c != id);
        }
        state.nodes[id.0].detached = true;
    }

    pub fn is_detached(&self, id: ElementId) -> bool {
        self.inner.lock().nodes[id.0].detached
    }

    pub fn set_dom_id(&self, id: ElementId, dom_id: &str) {
        self.inner.lock().nodes[id.0].dom_id = Some(dom_id.to_string());
    }

    pub fn add_class(&self, id: ElementId, class: &str) {
        self.inner.lock().nodes[id.0].add_class(class);
    }

    pub fn remove_class(&self, id: ElementId, class: &str) {
        self.inner.lock().nodes[id.0].remove_class(class);
    }

    /// Flip a class on an element; returns whether it is present afterwards.
    pub fn toggle_class(&self, id: ElementId, class: &str) -> bool {
        self.inner.lock().nodes[id.0].toggle_class(class)
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.inner.lock().nodes[id.0].has_class(class)
    }

    pub fn set_attribute(&self, id: ElementId, name: &str, value: &str) {
        self.inner.lock().nodes[id.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn attribute(&self, id: ElementId, name: &str) -> Option<String> {
        self.inner.lock().nodes[id.0].attributes.get(name).cloned()
    }

    pub fn set_text(&self, id: ElementId, text: &str) {
        self.inner.lock().nodes[id.0].text = text.to_string();
    }

    pub fn text(&self, id: ElementId) -> String {
        self.inner.lock().nodes[id.0].text.clone()
    }

    pub fn tag(&self, id: ElementId) -> Tag {
        self.inner.lock().nodes[id.0].tag
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// First attached element with the given DOM id.
    pub fn element_by_dom_id(&self, dom_id: &str) -> Option<ElementId> {
        let state = self.inner.lock();
        state
            .nodes
            .iter()
            .enumerate()
            .find(|(_, n)| !n.detached && n.dom_id.as_deref() == Some(dom_id))
            .map(|(i, _)| ElementId(i))
    }

    /// All attached elements carrying the given class, in creation order.
    pub fn elements_with_class(&self, class: &str) -> Vec<ElementId> {
        let state = self.inner.lock();
        state
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| !n.detached && n.has_class(class))
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    /// All attached form elements, in creation order.
    pub fn forms(&self) -> Vec<ElementId> {
        let state = self.inner.lock();
        state
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| !n.detached && n.tag.is_form())
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    /// Nearest form among the element and its ancestors.
    pub fn closest_form(&self, id: ElementId) -> Option<ElementId> {
        let state = self.inner.lock();
        let mut current = Some(id);
        while let Some(c) = current {
            let node = &state.nodes[c.0];
            if node.tag.is_form() {
                return Some(c);
            }
            current = node.parent;
        }
        None
    }

    /// First attached descendant of `root`, in document order, carrying the
    /// given class.
    pub fn descendant_with_class(&self, root: ElementId, class: &str) -> Option<ElementId> {
        let state = self.inner.lock();
        // Children are pushed reversed so the stack pops in document order.
        let mut stack: Vec<ElementId> =
            state.nodes[root.0].children.iter().rev().copied().collect();
        while let Some(c) = stack.pop() {
            let node = &state.nodes[c.0];
            if node.detached {
                continue;
            }
            if node.has_class(class) {
                return Some(c);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }

    // ------------------------------------------------------------------
    // Event handlers and dispatch
    // ------------------------------------------------------------------

    pub fn on_click(&self, id: ElementId, handler: ClickHandler) {
        self.inner
            .lock()
            .click_handlers
            .entry(id)
            .or_default()
            .push(handler);
    }

    pub fn on_submit(&self, form: ElementId, handler: SubmitHandler) {
        self.inner
            .lock()
            .submit_handlers
            .entry(form)
            .or_default()
            .push(handler);
    }

    /// Dispatch a click: registered handlers first, then the default action
    /// unless one of them prevented it. The default action follows an `href`
    /// attribute, or submits the enclosing form for a button without one.
    pub fn click(&self, target: ElementId) {
        let handlers: Vec<ClickHandler> = {
            let state = self.inner.lock();
            state
                .click_handlers
                .get(&target)
                .map(|h| h.to_vec())
                .unwrap_or_default()
        };

        let event = ClickEvent::new(target);
        for handler in &handlers {
            handler(self, &event);
        }

        if !event.default_prevented() {
            self.default_click_action(target);
        }
    }

    fn default_click_action(&self, target: ElementId) {
        if let Some(href) = self.attribute(target, "href") {
            self.navigate(&href);
            return;
        }
        let tag = self.tag(target);
        if matches!(tag, Tag::Button | Tag::Input) {
            if let Some(form) = self.closest_form(target) {
                self.submit(form);
            }
        }
    }

    /// Dispatch a form submission: handlers first, then the submission is
    /// recorded unless prevented.
    pub fn submit(&self, form: ElementId) {
        let handlers: Vec<SubmitHandler> = {
            let state = self.inner.lock();
            state
                .submit_handlers
                .get(&form)
                .map(|h| h.to_vec())
                .unwrap_or_default()
        };

        let event = SubmitEvent::new(form);
        for handler in &handlers {
            handler(self, &event);
        }

        if !event.default_prevented() {
            self.record_submission(form);
        }
    }

    /// Programmatic submission: bypasses submit handlers, like `form.submit()`.
    pub fn submit_form(&self, form: ElementId) {
        self.record_submission(form);
    }

    fn record_submission(&self, form: ElementId) {
        let action = self.attribute(form, "action");
        debug!(form = form.0, action = ?action, "Form submitted");
        self.inner
            .lock()
            .navigations
            .push(Navigation::FormSubmit { form, action });
    }

    /// Record a navigation to `url`.
    pub fn navigate(&self, url: &str) {
        debug!(url, "Navigating");
        self.inner
            .lock()
            .navigations
            .push(Navigation::Href(url.to_string()));
    }

    /// The recorded browser-level outcomes, oldest first.
    pub fn navigations(&self) -> Vec<Navigation> {
        self.inner.lock().navigations.clone()
    }

    // ------------------------------------------------------------------
    // Visibility watchers
    // ------------------------------------------------------------------

    /// Watch `elements` at `threshold`; `callback` fires once per element the
    /// first time its reported visible fraction reaches the threshold.
    pub fn observe_visibility(
        &self,
        threshold: f32,
        elements: &[ElementId],
        callback: VisibilityCallback,
    ) {
        let mut watcher = VisibilityWatcher::new(threshold, callback);
        for id in elements {
            watcher.watch(*id);
        }
        self.inner.lock().watchers.push(watcher);
    }

    /// Report that an element's visible fraction changed.
    pub fn report_visibility(&self, id: ElementId, fraction: f32) {
        let fired: Vec<VisibilityCallback> = {
            let mut state = self.inner.lock();
            state
                .watchers
                .iter_mut()
                .filter_map(|w| w.on_report(id, fraction))
                .collect()
        };
        for callback in fired {
            callback(self, id);
        }
    }

    // ------------------------------------------------------------------
    // Timers
    // ------------------------------------------------------------------

    /// Schedule a one-shot callback after `delay` of virtual time.
    pub fn schedule(&self, delay: Duration, callback: impl FnOnce(&Page) + Send + 'static) {
        self.inner.lock().timers.schedule(delay, Box::new(callback));
    }

    /// Advance the virtual clock, firing every timer that comes due.
    pub fn advance(&self, dt: Duration) {
        let due: Vec<TimerCallback> = self.inner.lock().timers.advance(dt);
        for callback in due {
            callback(self);
        }
    }
}
