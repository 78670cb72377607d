use glam::Vec2;
use instant::Instant;
use sphere_core::{Complexity, Fallback, FrameInput, SceneConfig, SceneEvent, Status, Supervised};
use sphere_render::GpuState;
use winit::{
    event::*,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

/// Native stand-in for the static hero image: just report why we stopped.
struct LogFallback;

impl Fallback for LogFallback {
    fn engage(&mut self, reason: &anyhow::Error) {
        log::error!("visualization unavailable, closing viewer: {:#}", reason);
    }
}

#[derive(Default)]
struct PointerInput {
    ndc: Vec2,
    presses: Vec<Vec2>,
}

fn cursor_ndc(window: &Window, x: f64, y: f64) -> Vec2 {
    let size = window.inner_size();
    if size.width == 0 || size.height == 0 {
        return Vec2::ZERO;
    }
    let u = (x / size.width as f64).clamp(0.0, 1.0) as f32;
    let v = (y / size.height as f64).clamp(0.0, 1.0) as f32;
    Vec2::new(u * 2.0 - 1.0, 1.0 - v * 2.0)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let complexity = if std::env::args().any(|a| a == "--reduced") {
        Complexity::Reduced
    } else {
        Complexity::Full
    };
    let config = SceneConfig::for_complexity(complexity);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Neural Sphere (native)")
        .build(&event_loop)?;
    let size = window.inner_size();

    let instance = wgpu::Instance::default();
    let presenter = instance
        .create_surface(&window)
        .map_err(anyhow::Error::from)
        .and_then(|surface| {
            pollster::block_on(GpuState::new(&instance, surface, size.width, size.height))
        });
    let mut visualization = Supervised::mount(config, presenter, LogFallback);
    visualization.resize(size.width, size.height);

    let mut pointer = PointerInput::default();
    let mut last_frame = Instant::now();
    let window = &window;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => visualization.resize(size.width, size.height),
            WindowEvent::CloseRequested => {
                visualization.unmount();
                elwt.exit();
            }
            WindowEvent::CursorMoved { position, .. } => {
                pointer.ndc = cursor_ndc(window, position.x, position.y);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => pointer.presses.push(pointer.ndc),
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            let dt = (now - last_frame).as_secs_f32();
            last_frame = now;
            let events: Vec<SceneEvent> = pointer
                .presses
                .drain(..)
                .map(|ndc| SceneEvent::Press { ndc })
                .collect();
            let status = visualization.frame(&FrameInput {
                dt,
                now,
                pointer: pointer.ndc,
                events: &events,
            });
            if status == Status::Active {
                window.request_redraw();
            } else {
                elwt.exit();
            }
        }
        _ => {}
    })?;
    Ok(())
}
