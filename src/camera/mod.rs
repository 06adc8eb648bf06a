// Camera rig core: zoom targeting, focus-preserving pan, and the player
// controller that drives both.

pub mod controller;
pub mod zoom;

pub use controller::RigController;
