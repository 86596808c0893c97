use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};
use yew::prelude::*;

use crate::config::PARTICLE_COUNT;
use crate::particles::field::ParticleField;
use crate::utils::scheduler::{BrowserScheduler, Scheduler, TaskHandle};

#[function_component(HeroBackground)]
pub fn hero_background() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let renderer = ParticleRenderer::activate(&canvas_ref, &BrowserScheduler);
                move || drop(renderer)
            },
            (),
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            class="absolute inset-0 w-full h-full pointer-events-none opacity-50 mix-blend-screen"
            style="filter: blur(1px);"
            aria-hidden="true"
        />
    }
}

/// Everything the running star field owns. Dropping it stops the frame loop
/// and detaches the window listeners.
struct ParticleRenderer {
    _frames: TaskHandle,
    _pointer: EventListener,
    _resize: EventListener,
}

impl ParticleRenderer {
    fn activate(canvas_ref: &NodeRef, scheduler: &dyn Scheduler) -> Option<Self> {
        let window = web_sys::window()?;
        let canvas = canvas_ref.cast::<HtmlCanvasElement>()?;
        let ctx = match canvas.get_context("2d") {
            Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok()?,
            _ => {
                log::debug!("no 2d context, hero background stays empty");
                return None;
            }
        };

        let (width, height) = viewport_size(&window);
        size_canvas(&canvas, width, height);
        let field = Rc::new(RefCell::new(ParticleField::new(
            PARTICLE_COUNT,
            width,
            height,
            &mut rand::thread_rng(),
        )));

        let pointer = {
            let field = Rc::clone(&field);
            EventListener::new(&window, "mousemove", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    field
                        .borrow_mut()
                        .set_pointer(f64::from(event.client_x()), f64::from(event.client_y()));
                }
            })
        };

        let resize = {
            let field = Rc::clone(&field);
            let canvas = canvas.clone();
            EventListener::new(&window, "resize", move |_| {
                if let Some(window) = web_sys::window() {
                    let (width, height) = viewport_size(&window);
                    size_canvas(&canvas, width, height);
                    field
                        .borrow_mut()
                        .resize(width, height, &mut rand::thread_rng());
                }
            })
        };

        let frames = scheduler.frames(Box::new(move |_| {
            let mut field = field.borrow_mut();
            field.step(&mut rand::thread_rng());
            paint(&ctx, &field);
        }));

        Some(Self {
            _frames: frames,
            _pointer: pointer,
            _resize: resize,
        })
    }
}

fn viewport_size(window: &Window) -> (f64, f64) {
    let dimension = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (dimension(window.inner_width()), dimension(window.inner_height()))
}

fn size_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

fn paint(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
    ctx.clear_rect(0.0, 0.0, field.width(), field.height());
    for stroke in field.strokes() {
        ctx.begin_path();
        ctx.set_stroke_style_str(stroke.tint.css());
        ctx.set_line_width(stroke.width);
        ctx.set_global_alpha(stroke.alpha);
        ctx.move_to(stroke.from.0, stroke.from.1);
        ctx.line_to(stroke.to.0, stroke.to.1);
        ctx.stroke();
    }
    ctx.set_global_alpha(1.0);
}
