//! wgpu renderer for the neural sphere scene, shared by the web and native
//! front-ends. Draw order: stars, connection lines, then nodes and burst
//! particles on top.

use sphere_core::instance::{pack_lines, pack_points, LineVertex, PointInstance};
use sphere_core::{Presenter, RenderState};
use wgpu::util::DeviceExt;

mod fault;
mod pipelines;
pub use fault::DeviceFault;
use pipelines::{create_pipelines, create_vertex_buffer, Pipelines, SceneUniforms};

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipelines: Pipelines,
    quad_vb: wgpu::Buffer,
    point_vb: wgpu::Buffer,
    line_vb: wgpu::Buffer,
    point_capacity: usize,
    line_capacity: usize,
    // Reused CPU-side staging
    points: Vec<PointInstance>,
    lines: Vec<LineVertex>,
    clear_color: wgpu::Color,
    fault: DeviceFault,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'a>,
        width: u32,
        height: u32,
    ) -> anyhow::Result<Self> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // WebGL2 backends cannot meet the default limits
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let fault = DeviceFault::new();
        fault.attach(&device);
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[render] adapter={:?} format={:?} size={}x{}",
            adapter.get_info().backend,
            format,
            config.width,
            config.height
        );

        let pipelines = create_pipelines(&device, format);
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let point_vb = create_vertex_buffer(&device, "point_vb", 0);
        let line_vb = create_vertex_buffer(&device, "line_vb", 0);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipelines,
            quad_vb,
            point_vb,
            line_vb,
            point_capacity: 0,
            line_capacity: 0,
            points: Vec::new(),
            lines: Vec::new(),
            clear_color: wgpu::Color {
                r: 0.03,
                g: 0.04,
                b: 0.08,
                a: 1.0,
            },
            fault,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.config.width || height != self.config.height {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Grow GPU buffers to fit the staged data; never shrinks.
    fn ensure_capacity(&mut self) {
        if self.points.len() > self.point_capacity {
            self.point_capacity = self.points.len().next_power_of_two();
            let bytes = (self.point_capacity * std::mem::size_of::<PointInstance>()) as u64;
            self.point_vb = create_vertex_buffer(&self.device, "point_vb", bytes);
        }
        if self.lines.len() > self.line_capacity {
            self.line_capacity = self.lines.len().next_power_of_two();
            let bytes = (self.line_capacity * std::mem::size_of::<LineVertex>()) as u64;
            self.line_vb = create_vertex_buffer(&self.device, "line_vb", bytes);
        }
    }

    pub fn render(&mut self, state: &RenderState<'_>) -> Result<(), wgpu::SurfaceError> {
        pack_points(state, &mut self.points);
        pack_lines(state, &mut self.lines);
        self.ensure_capacity();

        let aspect = self.config.width as f32 / self.config.height.max(1) as f32;
        let uniforms = SceneUniforms {
            view_proj: state.camera.view_proj().to_cols_array_2d(),
            model_group: state.group_matrix().to_cols_array_2d(),
            model_stars: state.star_field_matrix().to_cols_array_2d(),
            params: [state.elapsed, aspect, 0.0, 0.0],
        };
        self.queue.write_buffer(
            &self.pipelines.uniform_buffer,
            0,
            bytemuck::bytes_of(&uniforms),
        );
        if !self.points.is_empty() {
            self.queue
                .write_buffer(&self.point_vb, 0, bytemuck::cast_slice(&self.points));
        }
        if !self.lines.is_empty() {
            self.queue
                .write_buffer(&self.line_vb, 0, bytemuck::cast_slice(&self.lines));
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.pipelines.bind_group, &[]);

            let total_points = self.points.len() as u32;
            let star_points = (state.stars.len() as u32).min(total_points);

            rpass.set_pipeline(&self.pipelines.points);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.point_vb.slice(..));
            if star_points > 0 {
                rpass.draw(0..6, 0..star_points);
            }

            if !self.lines.is_empty() {
                rpass.set_pipeline(&self.pipelines.lines);
                rpass.set_vertex_buffer(0, self.line_vb.slice(..));
                rpass.draw(0..self.lines.len() as u32, 0..1);
            }

            if total_points > star_points {
                rpass.set_pipeline(&self.pipelines.points);
                rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
                rpass.set_vertex_buffer(1, self.point_vb.slice(..));
                rpass.draw(0..6, star_points..total_points);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl Presenter for GpuState<'_> {
    fn present(&mut self, state: &RenderState<'_>) -> anyhow::Result<()> {
        self.fault.check()?;
        match self.render(state) {
            Ok(()) => self.fault.check(),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[render] surface lost, reconfiguring");
                self.reconfigure();
                Ok(())
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("[render] frame timeout, skipping");
                Ok(())
            }
            Err(e) => Err(anyhow::anyhow!("render error: {:?}", e)),
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.resize_surface(width, height);
    }
}
