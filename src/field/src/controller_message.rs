pub enum ControllerMessage {
	Resize([f32; 2]),
	Stop,
}
