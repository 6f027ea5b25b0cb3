use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use protocol::palette;
use protocol::pr_frame::PrFrame;

pub struct Renderer {
	canvas: Canvas<Window>,
}

impl Renderer {
	pub fn new(mut canvas: Canvas<Window>) -> Self {
		canvas.set_draw_color(Color::RGB(0, 0, 0));
		canvas.clear();
		canvas.present();
		Self { canvas }
	}

	pub fn draw_frame(&mut self, frame: PrFrame) {
		self.canvas.set_draw_color(Color::RGB(0, 0, 0));
		self.canvas.clear();
		let [lr, lg, lb] = palette::LINK_COLOR;
		for link in frame.links.into_iter() {
			let [p1, p2] = link.ends;
			// aa_line is a hairline, close enough to the 0.4 width
			let _ = self.canvas.aa_line(
				p1[0] as i16,
				p1[1] as i16,
				p2[0] as i16,
				p2[1] as i16,
				Color::RGBA(lr, lg, lb, (link.alpha * 255.) as u8),
			);
		}
		for dot in frame.dots.into_iter() {
			let [r, g, b] = dot.color;
			// gfx circles take integer radii, sub-pixel rounds up
			let _ = self.canvas.filled_circle(
				dot.pos[0] as i16,
				dot.pos[1] as i16,
				dot.radius.ceil() as i16,
				Color::RGBA(r, g, b, (dot.alpha * 255.) as u8),
			);
		}
		self.canvas.present();
	}
}
