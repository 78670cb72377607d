#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, MOUNT_DELAY_MS};
use crate::fallback::DomFallback;
use crate::input::PointerState;
use instant::Instant;
use sphere_core::{Complexity, SceneConfig, Status, Supervised};
use sphere_render::GpuState;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod fallback;
mod frame;
mod input;
mod lifecycle;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("neural-sphere starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            if let Some(document) = dom::window_document() {
                fallback::show(&document);
            }
        }
    });
    Ok(())
}

async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web::window().map(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                .is_ok()
        });
        if scheduled != Some(true) {
            _ = resolve.call0(&JsValue::NULL);
        }
    });
    _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

async fn create_presenter(
    canvas: &web::HtmlCanvasElement,
    width: u32,
    height: u32,
) -> anyhow::Result<GpuState<'static>> {
    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
    GpuState::new(&instance, surface, width, height).await
}

fn wire_unmount(frame_loop: Rc<frame::FrameLoop>, document: web::Document) {
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        frame_loop.stop();
        if lifecycle::after_page_hide(ev.persisted()) == lifecycle::AfterHide::StaticFallback {
            log::info!("[init] page cached, leaving static fallback");
            fallback::show(&document);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Let the page paint before GPU setup
    sleep_ms(MOUNT_DELAY_MS).await;

    let complexity = Complexity::from_viewport(dom::viewport_width_css(), dom::prefers_reduced_motion());
    let config = SceneConfig::for_complexity(complexity).with_seed(rand::random());
    log::info!("[init] complexity={:?} nodes={}", complexity, config.node_count);

    let size = dom::sync_canvas_backing_size(&canvas);
    let presenter = create_presenter(&canvas, size.0, size.1).await;
    let mut visualization = Supervised::mount(config, presenter, DomFallback::new(document.clone()));
    if visualization.status() != Status::Active {
        return Ok(());
    }
    visualization.resize(size.0, size.1);
    fallback::hide(&document);

    let pointer = Rc::new(RefCell::new(PointerState::default()));
    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        pointer: pointer.clone(),
    });

    let frame_loop = frame::start_loop(frame::FrameContext {
        visualization,
        canvas,
        pointer,
        last_instant: Instant::now(),
        size,
    });
    wire_unmount(frame_loop, document);
    Ok(())
}
