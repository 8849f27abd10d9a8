// Frame-driven pose animation: a fixed-duration transition between two
// poses, and the looping demo script that chains transitions.

pub mod pose_loop;
pub mod transition;

pub use pose_loop::PoseLoop;
pub use transition::Transition;
