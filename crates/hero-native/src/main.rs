use std::sync::Arc;

use hero_core::{Camera, PointerCell, Scene, SceneParams};
use hero_render::GpuState;
use instant::Instant;
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("hero-native")
            .with_inner_size(PhysicalSize::new(1280u32, 720u32))
            .build(&event_loop)?,
    );

    let size = window.inner_size();
    let mut camera = Camera::for_surface(size.width, size.height);
    let params = SceneParams::for_viewport(camera.viewport_at_target(), rand::random());
    let mut scene = Scene::new(params)?;
    log::info!(
        "[scene] {} particles, {} segment slots",
        scene.particles.len(),
        scene.graph.lines().capacity()
    );

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(window.clone())?;
    let mut gpu = pollster::block_on(GpuState::new(
        &instance,
        surface,
        size.width,
        size.height,
        &scene,
        false,
    ))?;

    let pointer = PointerCell::new();
    let started = Instant::now();
    let mut last = started;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(new_size) => {
                gpu.resize_if_needed(new_size.width, new_size.height);
                if new_size.height > 0 {
                    camera.set_aspect(new_size.width as f32 / new_size.height as f32);
                    if scene.fit_viewport(camera.viewport_at_target()) {
                        gpu.rebuild_scene_buffers(&scene);
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let (w, h) = gpu.size();
                pointer.set_pixels(position.x as f32, position.y as f32, w as f32, h as f32);
            }
            WindowEvent::CursorLeft { .. } => pointer.leave(),
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt_sec = (now - last).as_secs_f32();
                last = now;
                let elapsed_sec = (now - started).as_secs_f32();
                scene.update(
                    dt_sec,
                    elapsed_sec,
                    pointer.load(),
                    camera.viewport_at_target(),
                );
                match gpu.render(&scene, &camera) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        gpu.reconfigure()
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("surface out of memory; exiting");
                        elwt.exit();
                    }
                    Err(e) => log::warn!("render error: {:?}", e),
                }
            }
            _ => {}
        },
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;
    Ok(())
}
