pub mod gpu;
pub mod hull_buffer;
pub mod spin;

pub use gpu::GpuState;
pub use spin::SpinTransform;
