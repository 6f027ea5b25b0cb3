use std::time::SystemTime;

pub enum TimeModel {
	// no pacing, frames run back to back
	Free,
	RtFrameLock,
}

pub struct TimeManager {
	pft: f32,
	model: TimeModel,
	start_time: SystemTime,
}

impl Default for TimeManager {
	fn default() -> Self {
		Self {
			pft: 1. / 60.,
			model: TimeModel::RtFrameLock,
			start_time: SystemTime::now(),
		}
	}
}

impl TimeManager {
	pub fn with_model(mut self, model: TimeModel) -> Self {
		self.model = model;
		self
	}

	// sleeps off the remainder of the frame budget, returns it
	pub fn take_time(&mut self) -> f32 {
		let now = SystemTime::now();
		let dt = now.duration_since(self.start_time).unwrap().as_micros();
		self.start_time = now;
		match self.model {
			TimeModel::Free => self.pft,
			TimeModel::RtFrameLock => {
				if dt < (self.pft * 1e6) as u128 {
					std::thread::sleep(std::time::Duration::from_micros(
						(self.pft * 1e6) as u64 - dt as u64,
					));
				}
				self.pft
			}
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_free_does_not_pace() {
		let mut tm = TimeManager::default().with_model(TimeModel::Free);
		let start = SystemTime::now();
		for _ in 0..10 {
			let pft = tm.take_time();
			assert!((pft - 1. / 60.).abs() < 1e-6);
		}
		let passed = SystemTime::now()
			.duration_since(start)
			.unwrap()
			.as_micros();
		// ten frame budgets would be ~166ms when paced
		assert!(passed < 100_000);
	}

	#[test]
	fn test_frame_lock_paces() {
		let mut tm = TimeManager::default();
		let start = SystemTime::now();
		for _ in 0..3 {
			tm.take_time();
		}
		let passed = SystemTime::now()
			.duration_since(start)
			.unwrap()
			.as_micros();
		// at least two full frame budgets must have been slept off
		assert!(passed >= 30_000);
	}
}
