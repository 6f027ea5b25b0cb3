use std::time::SystemTime;
use field::fworld::FWorld;

fn main() {
	let start = SystemTime::now();
	let mut world = FWorld::new([800., 600.]).with_seed(0);
	let rframes = 10_000;
	for _ in 0..rframes {
		world.step();
		let frame = world.pr_frame();
		assert_eq!(frame.dots.len(), 60);
	}
	let duration = SystemTime::now().duration_since(start).unwrap().as_micros();
	eprintln!("{:.3}us per frame", duration as f32 / rframes as f32);
}
