// pr_frame: one frame of the particle field, ready for rendering

pub struct PrDot {
	pub pos: [f32; 2],
	pub radius: f32,
	pub alpha: f32,
	pub color: [u8; 3],
}

pub struct PrLink {
	pub ends: [[f32; 2]; 2],
	pub alpha: f32,
}

pub struct PrFrame {
	pub size: [f32; 2],
	pub dots: Vec<PrDot>,
	pub links: Vec<PrLink>,
}
