use crate::dom;
use crate::fallback::DomFallback;
use crate::input::PointerState;
use instant::Instant;
use sphere_core::{FrameInput, SceneEvent, Status, Supervised};
use sphere_render::GpuState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type Visualization = Supervised<GpuState<'static>, DomFallback>;

pub struct FrameContext {
    pub visualization: Visualization,
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerState>>,
    pub last_instant: Instant,
    pub size: (u32, u32),
}

impl FrameContext {
    pub fn frame(&mut self) -> Status {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let size = dom::sync_canvas_backing_size(&self.canvas);
        if size != self.size {
            self.size = size;
            self.visualization.resize(size.0, size.1);
        }

        let (pointer, presses) = {
            let mut p = self.pointer.borrow_mut();
            (p.ndc, p.take_presses())
        };
        let events: Vec<SceneEvent> = presses
            .into_iter()
            .map(|ndc| SceneEvent::Press { ndc })
            .collect();

        self.visualization.frame(&FrameInput {
            dt: dt_sec,
            now,
            pointer,
            events: &events,
        })
    }
}

/// Handle to the running `requestAnimationFrame` loop.
pub struct FrameLoop {
    ctx: Rc<RefCell<FrameContext>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    /// Cancel the pending frame callback and release the visualization.
    pub fn stop(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Dropping the closure breaks the closure <-> handle cycle
        self.tick.borrow_mut().take();
        self.ctx.borrow_mut().visualization.unmount();
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let closure = tick.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

pub fn start_loop(frame_ctx: FrameContext) -> Rc<FrameLoop> {
    let ctx = Rc::new(RefCell::new(frame_ctx));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let ctx_tick = ctx.clone();
    let raf_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_tick.set(None);
        let status = ctx_tick.borrow_mut().frame();
        if status == Status::Active {
            raf_tick.set(request_frame(&tick_clone));
        } else {
            log::info!("[frame] loop stopped ({:?})", status);
        }
    }) as Box<dyn FnMut()>));
    raf_id.set(request_frame(&tick));

    Rc::new(FrameLoop { ctx, tick, raf_id })
}
