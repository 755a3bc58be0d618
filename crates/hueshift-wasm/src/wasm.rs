#![forbid(unsafe_code)]

//! `wasm-bindgen` exports and the live-DOM [`ElementProvider`].
//!
//! Only compiled on `wasm32` targets.

use std::cell::RefCell;
use std::rc::Rc;

use hueshift_page::{ElementProvider, ElementRole, InteractiveStyle, StyleConfig, StyleProperty};
use hueshift_page::{InteractionState, TRANSPARENT_BACKGROUND};
use js_sys::Reflect;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

use crate::controller::{ControlOutcome, Controller};
use crate::controls::{CONTROL_ATTRIBUTE, CONTROLS, ControlButton};

fn console_error(msg: &str) {
    let global = js_sys::global();
    let Ok(console) = Reflect::get(&global, &"console".into()) else {
        return;
    };
    let Ok(error) = Reflect::get(&console, &"error".into()) else {
        return;
    };
    let Ok(error_fn) = error.dyn_into::<js_sys::Function>() else {
        return;
    };
    let _ = error_fn.call1(&console, &JsValue::from_str(msg));
}

fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = if let Some(loc) = info.location() {
                format!(
                    "hueshift panic at {}:{}:{}: {info}",
                    loc.file(),
                    loc.line(),
                    loc.column()
                )
            } else {
                format!("hueshift panic: {info}")
            };
            console_error(&msg);
        }));
    });
}

fn random_seed() -> u64 {
    // 53 bits is all Math.random() carries.
    (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64
}

fn add_listener(target: &HtmlElement, event: &str, handler: impl FnMut() + 'static) {
    let closure = Closure::<dyn FnMut()>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        console_error(&format!("hueshift: cannot listen for {event}: {err:?}"));
        return;
    }
    // Listeners live as long as the page.
    closure.forget();
}

/// Set one inline property; an empty value removes it.
fn write_inline(element: &HtmlElement, property: StyleProperty, value: &str) {
    let style = element.style();
    let result = if value.is_empty() {
        style.remove_property(property.css_name()).map(drop)
    } else {
        style.set_property(property.css_name(), value)
    };
    if let Err(err) = result {
        tracing::debug!(property = property.css_name(), ?err, "inline style write failed");
    }
}

struct HoverBinding {
    element: HtmlElement,
    style: Rc<RefCell<InteractiveStyle>>,
}

/// [`ElementProvider`] over the page's live DOM.
///
/// Clones share hover bindings, so every clone sees listeners installed by
/// any other.
#[derive(Clone)]
struct DomProvider {
    window: Window,
    document: Document,
    hovers: Rc<RefCell<Vec<HoverBinding>>>,
}

impl DomProvider {
    fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self {
            window,
            document,
            hovers: Rc::default(),
        })
    }

    fn is_control(element: &HtmlElement) -> bool {
        element.has_attribute(CONTROL_ATTRIBUTE)
    }
}

impl ElementProvider for DomProvider {
    type Element = HtmlElement;

    fn query(&self, role: ElementRole) -> Vec<HtmlElement> {
        let Ok(list) = self.document.query_selector_all(role.selector()) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .filter(|el| !Self::is_control(el))
            .collect()
    }

    fn parent(&self, element: &HtmlElement) -> Option<HtmlElement> {
        element
            .parent_element()
            .and_then(|p| p.dyn_into::<HtmlElement>().ok())
    }

    fn tag_name(&self, element: &HtmlElement) -> String {
        element.tag_name()
    }

    fn computed_background(&self, element: &HtmlElement) -> String {
        self.window
            .get_computed_style(element)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("background-color").ok())
            .unwrap_or_else(|| TRANSPARENT_BACKGROUND.to_string())
    }

    fn inline_style(&self, element: &HtmlElement, property: StyleProperty) -> String {
        element
            .style()
            .get_property_value(property.css_name())
            .unwrap_or_default()
    }

    fn set_inline_style(&mut self, element: &HtmlElement, property: StyleProperty, value: &str) {
        write_inline(element, property, value);
    }

    fn style_text(&self, element: &HtmlElement) -> String {
        element.style().css_text()
    }

    fn set_style_text(&mut self, element: &HtmlElement, text: &str) {
        element.style().set_css_text(text);
    }

    fn is_attached(&self, element: &HtmlElement) -> bool {
        element.is_connected()
    }

    fn install_hover(&mut self, element: &HtmlElement, style: &InteractiveStyle) {
        let mut hovers = self.hovers.borrow_mut();
        if let Some(binding) = hovers.iter().find(|b| &b.element == element) {
            // Already listening; later applies only swap the declarations.
            *binding.style.borrow_mut() = style.clone();
            return;
        }

        let shared = Rc::new(RefCell::new(style.clone()));
        for (event, state) in [
            ("mouseenter", InteractionState::Hovered),
            ("mouseleave", InteractionState::Normal),
        ] {
            let target = element.clone();
            let shared = Rc::clone(&shared);
            add_listener(element, event, move || {
                let declarations = shared.borrow().resolve(state);
                for (property, value) in &declarations {
                    write_inline(&target, *property, value);
                }
            });
        }
        hovers.push(HoverBinding {
            element: element.clone(),
            style: shared,
        });
    }
}

type SharedController = Rc<RefCell<Controller<HtmlElement>>>;

thread_local! {
    /// Controller and provider of the first install; later installs share them.
    static INSTALLED: RefCell<Option<(SharedController, DomProvider)>> = const { RefCell::new(None) };
}

/// Handle returned by [`install`]; also scriptable from JS.
#[wasm_bindgen]
pub struct HueShift {
    controller: SharedController,
    provider: DomProvider,
}

#[wasm_bindgen]
impl HueShift {
    /// Apply a fresh random palette. Returns the primary color as hex.
    pub fn apply(&mut self) -> String {
        let Ok(mut controller) = self.controller.try_borrow_mut() else {
            return String::new();
        };
        controller.on_apply(&mut self.provider).primary.to_hex()
    }

    /// Undo the most recent apply. Returns `false` when nothing was applied.
    pub fn revert(&mut self) -> bool {
        let Ok(mut controller) = self.controller.try_borrow_mut() else {
            return false;
        };
        controller.on_revert(&mut self.provider).is_some()
    }

    /// `[primary, secondary, accent]` as hex, or empty when nothing is applied.
    #[wasm_bindgen(js_name = currentPalette)]
    pub fn current_palette(&self) -> Vec<String> {
        self.controller
            .borrow()
            .current_palette()
            .map(|p| p.colors().iter().map(|c| c.to_hex()).collect())
            .unwrap_or_default()
    }
}

fn create_control(
    provider: &DomProvider,
    control: &ControlButton,
    controller: &SharedController,
) -> Result<HtmlElement, JsValue> {
    let button: HtmlElement = provider.document.create_element("button")?.dyn_into()?;
    button.set_attribute(CONTROL_ATTRIBUTE, control.action.label())?;
    button.set_text_content(Some(control.text));
    button.set_title(control.title);
    let style = button.style();
    for (property, value) in control.declarations {
        style.set_property(property, value)?;
    }

    let action = control.action;
    let controller = Rc::clone(controller);
    let mut provider = provider.clone();
    add_listener(&button, "click", move || {
        let Ok(mut controller) = controller.try_borrow_mut() else {
            return;
        };
        if let ControlOutcome::Reverted(report) = controller.dispatch(action, &mut provider) {
            if report.skipped_stale > 0 {
                tracing::debug!(skipped = report.skipped_stale, "revert skipped detached elements");
            }
        }
    });
    Ok(button)
}

/// Inject the apply and revert controls into `<body>`.
///
/// Every call returns a handle onto the same controller, so the handles and
/// the injected controls all see one session. Controls are injected again
/// only if none are left on the page.
#[wasm_bindgen]
pub fn install() -> Result<HueShift, JsValue> {
    install_panic_hook();

    let (controller, provider) = match INSTALLED.with_borrow(Clone::clone) {
        Some(installed) => installed,
        None => {
            let provider = DomProvider::from_window()
                .ok_or_else(|| JsValue::from_str("hueshift: no document"))?;
            let controller = Rc::new(RefCell::new(Controller::new(
                StyleConfig::default(),
                random_seed(),
            )));
            let installed = (controller, provider);
            INSTALLED.set(Some(installed.clone()));
            installed
        }
    };

    let selector = format!("[{CONTROL_ATTRIBUTE}]");
    if provider.document.query_selector(&selector)?.is_none() {
        let body = provider
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("hueshift: document has no body"))?;
        for control in &CONTROLS {
            let button = create_control(&provider, control, &controller)?;
            body.append_child(&button)?;
        }
    }

    Ok(HueShift {
        controller,
        provider,
    })
}
