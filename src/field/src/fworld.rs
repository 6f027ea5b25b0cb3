use std::sync::mpsc::{Receiver, Sender};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::controller_message::ControllerMessage;
use crate::particle::Particle;
use crate::time_manager::TimeManager;
use crate::V2;
use protocol::pr_frame::{PrDot, PrFrame, PrLink};

pub const DEFAULT_COUNT: usize = 60;
pub const LINK_RADIUS: f32 = 120.;
pub const LINK_ALPHA: f32 = 0.08;

// fades linearly to zero at the link radius
pub fn link_alpha(dist: f32) -> Option<f32> {
	if dist < LINK_RADIUS {
		Some(LINK_ALPHA * (1. - dist / LINK_RADIUS))
	} else {
		None
	}
}

pub struct FWorld {
	size: V2,
	particles: Vec<Particle>,
	rng: StdRng,
}

impl FWorld {
	pub fn new(size: [f32; 2]) -> Self {
		let size = V2::new(size[0], size[1]);
		let mut rng = StdRng::from_entropy();
		let particles: Vec<Particle> = (0..DEFAULT_COUNT)
			.map(|_| Particle::spawn(&mut rng, size))
			.collect();
		eprintln!(
			"INFO: field: {} particles in {}x{}",
			particles.len(),
			size[0],
			size[1],
		);
		Self {
			size,
			particles,
			rng,
		}
	}

	// reseeds and respawns everything, for deterministic tests
	pub fn with_seed(mut self, seed: u64) -> Self {
		self.rng = StdRng::seed_from_u64(seed);
		let size = self.size;
		for p in self.particles.iter_mut() {
			p.respawn(&mut self.rng, size);
		}
		self
	}

	pub fn size(&self) -> [f32; 2] {
		self.size.into()
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	// advance everything, then respawn whatever left the viewport,
	// so emitted positions are always in bounds
	pub fn step(&mut self) {
		let size = self.size;
		for p in self.particles.iter_mut() {
			p.advance();
			if p.out_of_bounds(size) {
				p.respawn(&mut self.rng, size);
			}
		}
	}

	// particles keep their positions, strays respawn into the new
	// bounds on later steps
	pub fn resize(&mut self, size: [f32; 2]) {
		self.size = V2::new(size[0], size[1]);
	}

	// every unordered pair exactly once: the second endpoint
	// ranges strictly above the first
	fn pair_links(&self, i: usize) -> Vec<PrLink> {
		let p1 = self.particles[i].get_pos();
		self.particles[i + 1..]
			.iter()
			.filter_map(|p| {
				let p2 = p.get_pos();
				link_alpha((p2 - p1).magnitude()).map(|alpha| PrLink {
					ends: [p1.into(), p2.into()],
					alpha,
				})
			})
			.collect()
	}

	#[cfg(not(debug_assertions))]
	fn links(&self) -> Vec<PrLink> {
		use rayon::prelude::*;
		(0..self.particles.len())
			.into_par_iter()
			.flat_map(|i| self.pair_links(i))
			.collect()
	}

	#[cfg(debug_assertions)]
	fn links(&self) -> Vec<PrLink> {
		(0..self.particles.len())
			.flat_map(|i| self.pair_links(i))
			.collect()
	}

	pub fn pr_frame(&self) -> PrFrame {
		let dots: Vec<PrDot> =
			self.particles.iter().map(|p| p.render()).collect();
		PrFrame {
			size: self.size.into(),
			dots,
			links: self.links(),
		}
	}

	// paced frame loop, exits on Stop or when the receiver hangs up
	pub fn run(
		&mut self,
		tx: Sender<PrFrame>,
		rx: Receiver<ControllerMessage>,
	) {
		let mut time_manager = TimeManager::default();
		loop {
			self.step();
			if tx.send(self.pr_frame()).is_err() {
				return;
			}
			while let Ok(msg) = rx.try_recv() {
				match msg {
					ControllerMessage::Resize(size) => self.resize(size),
					ControllerMessage::Stop => return,
				}
			}
			time_manager.take_time();
		}
	}
}
