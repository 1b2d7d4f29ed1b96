use glam::{Mat4, Vec3};

/// 60 degrees.
const FOV_Y: f32 = 1.0472;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 1000.0;
const VIEW_DISTANCE: f32 = 8.0;
const SPIN_AXIS: Vec3 = Vec3::new(1.0, 1.5, 0.5);

/// Fixed viewpoint with the model spinning about a tilted axis.
///
/// The projection is built once from the framebuffer size at startup and
/// never rebuilt, so a resized window shows a stretched image.
pub struct SpinTransform {
    projection: Mat4,
    axis: Vec3,
}

impl SpinTransform {
    pub fn new(width: u32, height: u32) -> Self {
        let aspect = width.max(1) as f32 / height.max(1) as f32;

        Self {
            projection: Mat4::perspective_rh(FOV_Y, aspect, Z_NEAR, Z_FAR),
            axis: SPIN_AXIS.normalize(),
        }
    }

    /// Pushes the model back along -Z and rotates it by `time` radians.
    pub fn model_view(&self, time: f32) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -VIEW_DISTANCE))
            * Mat4::from_axis_angle(self.axis, time)
    }

    pub fn uniform(&self, time: f32) -> TransformUniform {
        TransformUniform {
            model_view: self.model_view(time).to_cols_array_2d(),
            projection: self.projection.to_cols_array_2d(),
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformUniform {
    pub model_view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}
