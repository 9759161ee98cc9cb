//! Leptos Reveal Utilities
//!
//! Browser side of the page behaviour rules in `site-core`:
//! - `IntersectionWatcher`: reveal-on-scroll through an IntersectionObserver
//! - `DocumentLayout`: section geometry and smooth scrolling
//! - `ListenerGuard`: window listeners removed on drop

use leptos::prelude::*;
use site_core::navigation::{self, NavKey, Section, SectionLayout};
use site_core::reveal::{watch_hidden, RevealState, VisibilityWatcher, REVEAL_THRESHOLD};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};

/// Reveal animation; elements carry the marker class and gain the visible
/// class once they scroll into view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStyle {
    FadeIn,
    SlideUp,
}

impl RevealStyle {
    pub fn selector(self) -> &'static str {
        match self {
            RevealStyle::FadeIn => ".fade-in",
            RevealStyle::SlideUp => ".slide-up",
        }
    }

    pub fn visible_class(self) -> &'static str {
        match self {
            RevealStyle::FadeIn => "fade-in-visible",
            RevealStyle::SlideUp => "slide-up-visible",
        }
    }
}

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// IntersectionObserver that adds `visible_class` to each target the first
/// time it intersects, then stops watching it. Disconnects when dropped.
pub struct IntersectionWatcher {
    observer: IntersectionObserver,
    visible_class: String,
    _callback: EntriesCallback,
}

impl IntersectionWatcher {
    pub fn new(visible_class: &str) -> Option<Self> {
        let class = visible_class.to_string();
        let callback: EntriesCallback = Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let state = if target.class_list().contains(&class) {
                    RevealState::Visible
                } else {
                    RevealState::Hidden
                };
                if state.reveals(entry.is_intersecting()) {
                    let _ = target.class_list().add_1(&class);
                    observer.unobserve(&target);
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => Some(Self {
                observer,
                visible_class: visible_class.to_string(),
                _callback: callback,
            }),
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                None
            }
        }
    }

    /// Watch every not-yet-revealed element under `root` matching `selector`.
    /// Observing an element twice is harmless.
    pub fn observe_within(&mut self, root: &Element, selector: &str) {
        let Ok(nodes) = root.query_selector_all(selector) else {
            return;
        };
        let visible_class = self.visible_class.clone();
        let candidates = (0..nodes.length())
            .filter_map(|i| nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()))
            .map(|element| {
                let state = if element.class_list().contains(&visible_class) {
                    RevealState::Visible
                } else {
                    RevealState::Hidden
                };
                (element, state)
            });
        watch_hidden(self, candidates);
    }
}

impl VisibilityWatcher for IntersectionWatcher {
    type Element = Element;

    fn observe(&mut self, element: &Element) {
        self.observer.observe(element);
    }

    fn unobserve_all(&mut self) {
        self.observer.disconnect();
    }
}

impl Drop for IntersectionWatcher {
    fn drop(&mut self) {
        self.unobserve_all();
    }
}

/// Reveal the `style` descendants of `root` as they scroll into view.
///
/// `track` is read inside the effect, so items rendered after a data load are
/// picked up on the next run. The observer lives as long as the calling
/// component.
pub fn use_scroll_reveal<T: 'static>(
    root: NodeRef<leptos::html::Section>,
    style: RevealStyle,
    track: impl Fn() -> T + 'static,
) {
    let watcher = StoredValue::new_local(None::<IntersectionWatcher>);
    Effect::new(move |_| {
        let _ = track();
        let Some(root) = root.get() else {
            return;
        };
        watcher.update_value(|slot| {
            if slot.is_none() {
                *slot = IntersectionWatcher::new(style.visible_class());
            }
            if let Some(w) = slot.as_mut() {
                w.observe_within(&root, style.selector());
            }
        });
    });
}

/// Section geometry read from the live document
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentLayout;

impl DocumentLayout {
    fn element(section: Section) -> Option<HtmlElement> {
        web_sys::window()?
            .document()?
            .get_element_by_id(section.id())?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl SectionLayout for DocumentLayout {
    fn offset_top(&self, section: Section) -> Option<f64> {
        Self::element(section).map(|el| el.offset_top() as f64)
    }

    fn viewport_bounds(&self, section: Section) -> Option<(f64, f64)> {
        let rect = Self::element(section)?.get_bounding_client_rect();
        Some((rect.top(), rect.bottom()))
    }

    fn scroll_to(&self, y: f64) {
        let options = ScrollToOptions::new();
        options.set_top(y);
        options.set_behavior(ScrollBehavior::Smooth);
        if let Some(win) = web_sys::window() {
            win.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Smooth-scroll to a section; false when it is not on the page
pub fn scroll_to(section: Section) -> bool {
    navigation::scroll_to_section(&DocumentLayout, section)
}

/// Arrow-key section navigation against the live document
pub fn navigate_by_key(key: NavKey) -> Option<Section> {
    navigation::navigate_by_key(&DocumentLayout, key)
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Event listener that is removed from its target when dropped
pub struct ListenerGuard {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl ListenerGuard {
    pub fn new(target: EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { target, event, callback })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Listen on `window` for the lifetime of the calling component
pub fn use_window_listener(event: &'static str, handler: impl FnMut(Event) + 'static) {
    let guard = web_sys::window().and_then(|win| ListenerGuard::new(win.into(), event, handler));
    if guard.is_none() {
        log::warn!("Failed to attach window listener for {}", event);
    }
    let _ = StoredValue::new_local(guard);
}

/// Toggle a class on `<html>`
pub fn set_root_class(class: &str, on: bool) {
    if let Some(root) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    {
        let _ = root.class_list().toggle_with_force(class, on);
    }
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Full navigation to another page of the site
pub fn redirect(path: &str) {
    let Some(win) = web_sys::window() else {
        return;
    };
    if let Err(e) = win.location().set_href(path) {
        log::error!("Redirect to {} failed: {:?}", path, e);
    }
}

pub fn open_in_new_tab(path: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.open_with_url_and_target(path, "_blank");
    }
}

/// Change the address bar without reloading; false when history is unavailable
pub fn push_path(path: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.history().ok())
        .is_some_and(|history| history.push_state_with_url(&JsValue::NULL, "", Some(path)).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_style_classes_pair_up() {
        for style in [RevealStyle::FadeIn, RevealStyle::SlideUp] {
            let marker = style.selector().trim_start_matches('.');
            assert_eq!(style.visible_class(), format!("{}-visible", marker));
        }
    }
}
