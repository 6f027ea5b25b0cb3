use rand::Rng;

use crate::V2;
use protocol::palette;
use protocol::pr_frame::PrDot;

pub const RADIUS_MIN: f32 = 0.3;
pub const RADIUS_MAX: f32 = 1.8;
// per frame, not per second
pub const VEL_MAX: f32 = 0.15;
pub const ALPHA_MIN: f32 = 0.1;
pub const ALPHA_MAX: f32 = 0.5;
pub const PRIMARY_WEIGHT: f32 = 0.4;

#[derive(Clone)]
pub struct Particle {
	pub pos: V2,
	pub vel: V2,
	pub radius: f32,
	pub alpha: f32,
	pub color: [u8; 3],
}

impl Particle {
	pub fn spawn(rng: &mut impl Rng, size: V2) -> Self {
		let color = if rng.gen::<f32>() < PRIMARY_WEIGHT {
			palette::PRIMARY
		} else {
			palette::ACCENT
		};
		Self {
			pos: V2::new(
				rng.gen_range(0f32..=size[0]),
				rng.gen_range(0f32..=size[1]),
			),
			vel: V2::new(
				rng.gen_range(-VEL_MAX..=VEL_MAX),
				rng.gen_range(-VEL_MAX..=VEL_MAX),
			),
			radius: rng.gen_range(RADIUS_MIN..=RADIUS_MAX),
			alpha: rng.gen_range(ALPHA_MIN..=ALPHA_MAX),
			color,
		}
	}

	pub fn respawn(&mut self, rng: &mut impl Rng, size: V2) {
		*self = Self::spawn(rng, size);
	}

	pub fn get_pos(&self) -> V2 {
		self.pos
	}

	pub fn advance(&mut self) {
		self.pos += self.vel;
	}

	// boundary values survive, only strictly outside triggers respawn
	pub fn out_of_bounds(&self, size: V2) -> bool {
		self.pos[0] < 0f32
			|| self.pos[0] > size[0]
			|| self.pos[1] < 0f32
			|| self.pos[1] > size[1]
	}

	pub fn render(&self) -> PrDot {
		PrDot {
			pos: [self.pos[0], self.pos[1]],
			radius: self.radius,
			alpha: self.alpha,
			color: self.color,
		}
	}
}
