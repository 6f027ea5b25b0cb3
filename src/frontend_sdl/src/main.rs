use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::render::Canvas;
use sdl2::video::Window;

use field::fworld::FWorld;
use field::time_manager::TimeManager;
use sdlrender::renderer::Renderer;

const WINDOW_SIZE: [u32; 2] = [800, 600];

// the animation is cosmetic: no drawing surface means no-op, not panic
fn init_surface() -> Option<(sdl2::Sdl, Canvas<Window>)> {
	let sdl_context = match sdl2::init() {
		Ok(c) => c,
		Err(e) => {
			eprintln!("WARN: sdl unavailable, skipping animation: {}", e);
			return None;
		}
	};
	let video_subsystem = match sdl_context.video() {
		Ok(v) => v,
		Err(e) => {
			eprintln!("WARN: no video subsystem, skipping animation: {}", e);
			return None;
		}
	};
	let window = match video_subsystem
		.window("driftfield", WINDOW_SIZE[0], WINDOW_SIZE[1])
		.position_centered()
		.resizable()
		.build()
	{
		Ok(w) => w,
		Err(e) => {
			eprintln!("WARN: no window, skipping animation: {}", e);
			return None;
		}
	};
	match window.into_canvas().build() {
		Ok(canvas) => Some((sdl_context, canvas)),
		Err(e) => {
			eprintln!("WARN: no canvas, skipping animation: {}", e);
			None
		}
	}
}

pub fn main() {
	let (sdl_context, canvas) = match init_surface() {
		Some(s) => s,
		None => return,
	};
	let mut renderer = Renderer::new(canvas);
	let mut event_pump = match sdl_context.event_pump() {
		Ok(p) => p,
		Err(e) => {
			eprintln!("WARN: no event pump, skipping animation: {}", e);
			return;
		}
	};
	let mut world = FWorld::new([WINDOW_SIZE[0] as f32, WINDOW_SIZE[1] as f32]);
	let mut time_manager = TimeManager::default();
	'running: loop {
		for event in event_pump.poll_iter() {
			match event {
				Event::Quit { .. }
				| Event::KeyDown {
					keycode: Some(Keycode::Q),
					..
				} => break 'running,
				Event::Window {
					win_event: WindowEvent::SizeChanged(w, h),
					..
				} => world.resize([w as f32, h as f32]),
				_ => {}
			}
		}
		world.step();
		renderer.draw_frame(world.pr_frame());
		time_manager.take_time();
	}
}
