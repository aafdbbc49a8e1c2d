// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM glue: fetch, mount, event forwarding and the animation loop.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Point;
use scatterviz_app::{Controller, STYLESHEET, ScatterConfig, TooltipContent, responsive_size};
use scatterviz_data::Dataset;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, MouseEvent, Window};

use crate::{
    DEFAULT_CONTAINER_ID, DEFAULT_DATA_URL, STYLE_ELEMENT_ID, ViewTransform, WebTextMeasurer,
    error_html,
};

struct Mounted {
    controller: Controller,
    container: HtmlElement,
    host: HtmlElement,
    tooltip: HtmlElement,
    size: (f64, f64),
    frame_pending: bool,
}

type Shared = Rc<RefCell<Mounted>>;

impl Mounted {
    fn view(&self) -> ViewTransform {
        ViewTransform::new(self.controller.config(), self.size.0, self.size.1)
    }

    fn svg_element(&self) -> Option<Element> {
        self.host.first_element_child()
    }

    fn chart_point(&self, event: &MouseEvent) -> Point {
        let rect = match self.svg_element() {
            Some(svg) => svg.get_bounding_client_rect(),
            None => self.host.get_bounding_client_rect(),
        };
        let pixel = Point::new(
            f64::from(event.client_x()) - rect.left(),
            f64::from(event.client_y()) - rect.top(),
        );
        self.view().to_chart(pixel)
    }

    fn draw(&mut self, now_ms: f64) -> Result<(), JsValue> {
        let svg = self.controller.svg(now_ms);
        self.host.set_inner_html(&svg);
        if let Some(el) = self.svg_element() {
            let (width, height) = self.size;
            el.set_attribute("width", &width.to_string())?;
            el.set_attribute("height", &height.to_string())?;
        }
        Ok(())
    }
}

/// Mounts the chart into `#scatter` with the default data file.
#[wasm_bindgen(start)]
pub fn start() {
    mount(DEFAULT_CONTAINER_ID, DEFAULT_DATA_URL);
}

/// Fetches `data_url` and mounts the chart into the element with id `container_id`.
///
/// Failures are logged and shown inside the container.
#[wasm_bindgen]
pub fn mount(container_id: &str, data_url: &str) {
    let container_id = container_id.to_string();
    let data_url = data_url.to_string();
    spawn_local(async move {
        if let Err(err) = try_mount(&container_id, &data_url).await {
            let message = describe(&err);
            tracing::error!(%message, %container_id, %data_url, "failed to mount chart");
            web_sys::console::error_1(&err);
            let container = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(&container_id));
            if let Some(container) = container {
                container.set_inner_html(&error_html(&message));
            }
        }
    });
}

async fn try_mount(container_id: &str, data_url: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| js_error("missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| js_error("missing document"))?;
    let container: HtmlElement = document
        .get_element_by_id(container_id)
        .ok_or_else(|| js_error(&format!("no element with id `{container_id}`")))?
        .dyn_into()?;
    install_stylesheet(&document)?;

    let text = fetch_text(&window, data_url).await?;
    let dataset = Dataset::from_csv_str(&text).map_err(|e| js_error(&e.to_string()))?;
    tracing::info!(rows = dataset.len(), data_url, "data loaded");

    let mut controller = Controller::new(dataset, ScatterConfig::default());
    match WebTextMeasurer::new() {
        Ok(measurer) => controller = controller.with_measurer(Box::new(measurer)),
        Err(err) => tracing::warn!(error = %describe(&err), "canvas text measurement unavailable"),
    }

    let host: HtmlElement = document.create_element("div")?.dyn_into()?;
    host.set_class_name("chartHost");
    let tooltip: HtmlElement = document.create_element("div")?.dyn_into()?;
    tooltip.set_class_name("d3-tip");
    let style = tooltip.style();
    style.set_property("position", "absolute")?;
    style.set_property("display", "none")?;
    style.set_property("pointer-events", "none")?;
    style.set_property("transform", "translate(-50%, -100%)")?;
    container.style().set_property("position", "relative")?;
    container.set_inner_html("");
    container.append_child(&host)?;
    container.append_child(&tooltip)?;

    let shared: Shared = Rc::new(RefCell::new(Mounted {
        controller,
        container,
        host: host.clone(),
        tooltip,
        size: (0.0, 0.0),
        frame_pending: false,
    }));
    resize(&shared)?;

    listen(&host, "click", &shared, on_click)?;
    listen(&host, "mousemove", &shared, on_mouse_move)?;
    listen(&host, "mouseleave", &shared, on_mouse_leave)?;
    listen(&window, "resize", &shared, on_resize)?;
    Ok(())
}

/// Adds the chart stylesheet to the page head, once per page.
fn install_stylesheet(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let head = document.head().ok_or_else(|| js_error("missing <head>"))?;
    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(STYLESHEET));
    head.append_child(&style)?;
    Ok(())
}

async fn fetch_text(window: &Window, url: &str) -> Result<String, JsValue> {
    let response: web_sys::Response = JsFuture::from(window.fetch_with_str(url))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(js_error(&format!(
            "GET {url} returned HTTP {}",
            response.status()
        )));
    }
    JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| js_error("response body is not text"))
}

fn listen<E: JsCast + 'static>(
    target: &EventTarget,
    name: &str,
    shared: &Shared,
    handler: fn(&Shared, E),
) -> Result<(), JsValue> {
    let shared = shared.clone();
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(&shared, event);
        }
    });
    target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

fn on_click(shared: &Shared, event: MouseEvent) {
    let now = now_ms();
    let changed = {
        let mut state = shared.borrow_mut();
        let point = state.chart_point(&event);
        state
            .controller
            .click_at(point, now)
            .is_some_and(|outcome| outcome.is_changed())
    };
    if changed {
        request_frame(shared);
    }
}

fn on_mouse_move(shared: &Shared, event: MouseEvent) {
    let mut state = shared.borrow_mut();
    let point = state.chart_point(&event);
    let view = state.view();
    let content = state.controller.pointer_move(point, now_ms()).cloned();
    report(show_tooltip(&state.tooltip, content.as_ref(), view));
}

fn on_mouse_leave(shared: &Shared, _event: MouseEvent) {
    let mut state = shared.borrow_mut();
    state.controller.pointer_leave();
    let view = state.view();
    report(show_tooltip(&state.tooltip, None, view));
}

fn on_resize(shared: &Shared, _event: Event) {
    report(resize(shared));
}

fn resize(shared: &Shared) -> Result<(), JsValue> {
    let mut state = shared.borrow_mut();
    let width = f64::from(state.container.client_width());
    let size = responsive_size(width, state.controller.config().aspect());
    state.size = size;
    tracing::debug!(width = state.size.0, height = state.size.1, "resized");
    state.draw(now_ms())
}

fn show_tooltip(
    tooltip: &HtmlElement,
    content: Option<&TooltipContent>,
    view: ViewTransform,
) -> Result<(), JsValue> {
    let style = tooltip.style();
    match content {
        Some(content) => {
            let at = view.to_pixels(content.position);
            tooltip.set_inner_html(&content.html);
            style.set_property("left", &format!("{}px", at.x))?;
            style.set_property("top", &format!("{}px", at.y))?;
            style.set_property("display", "block")
        }
        None => style.set_property("display", "none"),
    }
}

/// Schedules frames until no transition is running.
fn request_frame(shared: &Shared) {
    {
        let mut state = shared.borrow_mut();
        if state.frame_pending {
            return;
        }
        state.frame_pending = true;
    }
    let next = shared.clone();
    let callback = Closure::once_into_js(move |now: f64| {
        let animating = {
            let mut state = next.borrow_mut();
            state.frame_pending = false;
            report(state.draw(now));
            state.controller.is_animating(now)
        };
        if animating {
            request_frame(&next);
        }
    });
    let scheduled = web_sys::window()
        .ok_or_else(|| js_error("missing window"))
        .and_then(|w| w.request_animation_frame(callback.unchecked_ref()));
    if let Err(err) = scheduled {
        shared.borrow_mut().frame_pending = false;
        report(Err(err));
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or(0.0, |p| p.now())
}

fn report(result: Result<(), JsValue>) {
    if let Err(err) = result {
        tracing::warn!(error = %describe(&err), "DOM update failed");
        web_sys::console::warn_1(&err);
    }
}

fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}

fn describe(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
