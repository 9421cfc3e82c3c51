use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use super::dom;
use crate::config::ParticleConfig;
use crate::error::{GalleryError, Result};
use crate::particles::{Bounds, ParticleField};

/// Fixed full-viewport canvas behind the page, never hit by the pointer.
const CANVAS_STYLE: [(&str, &str); 7] = [
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("z-index", "-1"),
    ("pointer-events", "none"),
];

/// Background particle canvas. Once started the animation runs until the page
/// goes away.
pub struct ParticleLayer {
    canvas: HtmlCanvasElement,
    field: Rc<RefCell<ParticleField>>,
}

impl ParticleLayer {
    /// Create the canvas, spawn the particles and start the render loop.
    pub fn start(window: &Window, document: &Document, config: &ParticleConfig) -> Result<Self> {
        let canvas: HtmlCanvasElement = dom::cast(document.create_element("canvas")?, "canvas")?;
        dom::set_styles(&canvas, &CANVAS_STYLE)?;
        dom::body(document)?.append_child(&canvas)?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| GalleryError::Js("2d canvas context not supported".into()))?;
        let ctx: CanvasRenderingContext2d = dom::cast(ctx, "2d context")?;

        let (w, h) = dom::viewport(window)?;
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);
        let bounds = Bounds::new(f64::from(canvas.width()), f64::from(canvas.height()));
        let field = Rc::new(RefCell::new(ParticleField::new(
            bounds,
            config,
            js_sys::Math::random,
        )));

        // Resize canvas to fit window
        let resize_closure = {
            let canvas = canvas.clone();
            let field = field.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move || match dom::viewport(&window) {
                Ok((w, h)) => {
                    canvas.set_width(w as u32);
                    canvas.set_height(h as u32);
                    field
                        .borrow_mut()
                        .resize(Bounds::new(f64::from(canvas.width()), f64::from(canvas.height())));
                    log::debug!("particle canvas resized to {}x{}", canvas.width(), canvas.height());
                }
                Err(err) => log::warn!("particle canvas resize skipped: {err}"),
            }) as Box<dyn FnMut()>)
        };
        window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
        resize_closure.forget();

        // Animation loop
        // `f` holds the animation-frame closure so that we can keep calling
        // `request_animation_frame` recursively. Storing it inside an `Option`
        // allows us to create the `Closure` first and then obtain a reference to
        // it from within itself.
        let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();
        let frame_field = field.clone();
        let frame_window = window.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let mut field = frame_field.borrow_mut();
            field.step();
            draw(&ctx, &field);

            // schedule next
            if let Some(next) = f.borrow().as_ref() {
                if let Err(err) = frame_window.request_animation_frame(next.as_ref().unchecked_ref()) {
                    log::error!("particle animation stopped: {err:?}");
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(first) = g.borrow().as_ref() {
            window.request_animation_frame(first.as_ref().unchecked_ref())?;
        }

        log::info!("particle field started with {} particles", field.borrow().len());
        Ok(Self { canvas, field })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn field(&self) -> std::cell::Ref<'_, ParticleField> {
        self.field.borrow()
    }
}

/// Clear the surface and fill one disc per particle.
fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
    let bounds = field.bounds();
    ctx.clear_rect(0.0, 0.0, bounds.width, bounds.height);
    for p in field.particles() {
        ctx.set_fill_style_str(p.css_color());
        ctx.begin_path();
        if ctx.arc(p.x, p.y, p.radius, 0.0, TAU).is_ok() {
            ctx.fill();
        }
    }
}
