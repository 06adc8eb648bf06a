// Math helpers shared by the camera rig

pub mod interpolation;

pub use interpolation::*;
