use clap::Parser;
use std::{sync::Arc, time::Instant};
use torus_life::{Args, LifeConfig, Simulation};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

mod constants;
mod renderer;

use constants::{FPS_UPDATE_INTERVAL_SECS, WINDOW_TITLE};
use renderer::Renderer;

// --- Main Function ---
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = LifeConfig::try_from(Args::parse())?;
    let seed = config.resolve_seed();
    let mut simulation = Simulation::from_config(&config, seed)?;
    log::info!(
        "{}x{} board, {}px cells, {:?} per generation, seed {}",
        simulation.width(),
        simulation.height(),
        config.cell_size,
        config.frame_interval,
        seed
    );
    log::info!(
        "initial population: {} live cells",
        simulation.current().live_count()
    );

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(config.window_size, config.window_size))
            .with_resizable(false)
            .build(&event_loop)?,
    );
    let mut renderer = pollster::block_on(Renderer::new(
        window.clone(),
        simulation.width() * simulation.height(),
    ))?;

    let cell_size = config.cell_size as f32;
    let frame_interval = config.frame_interval;
    let mut last_step_time = Instant::now();
    let mut last_fps_update_time = Instant::now();
    let mut frames_since_last_fps_update = 0;
    let mut current_fps = 0.0;

    event_loop.run(move |event, elwt: &EventLoopWindowTarget<()>| {
        elwt.set_control_flow(ControlFlow::Poll);
        match event {
            Event::AboutToWait => {
                window.request_redraw();
            }
            Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::Resized(physical_size) => renderer.resize(physical_size),
                WindowEvent::ScaleFactorChanged { .. } => renderer.resize(window.inner_size()),
                WindowEvent::KeyboardInput {
                    event: key_event, ..
                } => {
                    if key_event.state == ElementState::Pressed
                        && key_event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                    {
                        elwt.exit();
                    }
                }
                WindowEvent::RedrawRequested => {
                    frames_since_last_fps_update += 1;
                    let now = Instant::now();
                    let elapsed_secs = now.duration_since(last_fps_update_time).as_secs_f64();
                    if elapsed_secs >= FPS_UPDATE_INTERVAL_SECS {
                        current_fps = frames_since_last_fps_update as f64 / elapsed_secs;
                        last_fps_update_time = now;
                        frames_since_last_fps_update = 0;
                    }

                    match renderer.render(simulation.current(), cell_size) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            log::warn!("surface lost, reconfiguring");
                            renderer.reconfigure();
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("WGPU Error: OutOfMemory");
                            elwt.exit();
                        }
                        Err(e) => log::warn!("WGPU Error: {:?}", e),
                    }

                    // Rendering follows vsync; generations follow the frame interval.
                    if now.duration_since(last_step_time) >= frame_interval {
                        simulation.advance();
                        last_step_time = now;
                    }

                    window.set_title(&format!(
                        "{} - Generation: {} - Live: {} - FPS: {:.1}",
                        WINDOW_TITLE,
                        simulation.generation(),
                        simulation.current().live_count(),
                        current_fps
                    ));
                }
                _ => {}
            },
            _ => {}
        }
    })?;
    Ok(())
}
