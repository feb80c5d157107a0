//! Wireframe model of the field.

use std::f64::consts::TAU;

use bytemuck::{Pod, Zeroable};
use camsim_core::MountConfig;
use glam::{DVec3, Vec3};

/// Radius of the center circle in meters.
pub const CENTER_CIRCLE_RADIUS: f64 = 5.0;

/// Number of segments approximating the center circle.
pub const CENTER_CIRCLE_SEGMENTS: usize = 72;

/// Line colors.
pub mod colors {
    use glam::Vec3;

    pub const WEST_GOAL_LINE: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const EAST_GOAL_LINE: Vec3 = Vec3::new(0.0, 0.0, 1.0);
    pub const NORTH_SIDE_LINE: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const SOUTH_SIDE_LINE: Vec3 = Vec3::new(1.0, 1.0, 0.0);
    pub const HALFWAY_LINE: Vec3 = Vec3::new(0.5, 0.5, 0.5);
    pub const WEST_GOAL: Vec3 = Vec3::new(1.0, 0.7, 0.7);
    pub const EAST_GOAL: Vec3 = Vec3::new(0.7, 0.7, 1.0);
    pub const CENTER_CIRCLE: Vec3 = Vec3::new(0.0, 0.5, 0.5);
}

/// A vertex of the line list uploaded to the GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl LineVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    /// Vertex buffer layout matching the line shader.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// A colored line segment in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: DVec3,
    pub end: DVec3,
    pub color: Vec3,
}

/// The field drawn as line segments.
///
/// World frame: origin at the field center, +X east, +Y north, +Z up.
#[derive(Debug, Clone, Default)]
pub struct FieldScene {
    segments: Vec<Segment>,
}

impl FieldScene {
    /// Builds the field markings and goals for the given dimensions.
    #[must_use]
    pub fn from_mount(mount: &MountConfig) -> Self {
        let mut scene = Self::default();
        let hl = mount.field_length / 2.0;
        let hw = mount.field_width / 2.0;

        // Borders
        scene.line(
            DVec3::new(-hl, hw, 0.0),
            DVec3::new(-hl, -hw, 0.0),
            colors::WEST_GOAL_LINE,
        );
        scene.line(
            DVec3::new(hl, -hw, 0.0),
            DVec3::new(hl, hw, 0.0),
            colors::EAST_GOAL_LINE,
        );
        scene.line(
            DVec3::new(hl, hw, 0.0),
            DVec3::new(-hl, hw, 0.0),
            colors::NORTH_SIDE_LINE,
        );
        scene.line(
            DVec3::new(-hl, -hw, 0.0),
            DVec3::new(hl, -hw, 0.0),
            colors::SOUTH_SIDE_LINE,
        );
        scene.line(
            DVec3::new(0.0, -hw, 0.0),
            DVec3::new(0.0, hw, 0.0),
            colors::HALFWAY_LINE,
        );

        scene.goal(-hl, mount.goal_width, mount.goal_height, colors::WEST_GOAL);
        scene.goal(hl, mount.goal_width, mount.goal_height, colors::EAST_GOAL);
        scene.center_circle();
        scene
    }

    fn line(&mut self, start: DVec3, end: DVec3, color: Vec3) {
        self.segments.push(Segment { start, end, color });
    }

    fn polyline(&mut self, points: &[DVec3], color: Vec3) {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], color);
        }
    }

    /// Goal frame on the goal line at `x`, closed back to its first post.
    fn goal(&mut self, x: f64, width: f64, height: f64, color: Vec3) {
        let hg = width / 2.0;
        self.polyline(
            &[
                DVec3::new(x, -hg, 0.0),
                DVec3::new(x, hg, 0.0),
                DVec3::new(x, hg, height),
                DVec3::new(x, -hg, height),
                DVec3::new(x, -hg, 0.0),
            ],
            color,
        );
    }

    fn center_circle(&mut self) {
        let point = |i: usize| {
            let t = TAU * i as f64 / CENTER_CIRCLE_SEGMENTS as f64;
            DVec3::new(
                CENTER_CIRCLE_RADIUS * t.cos(),
                CENTER_CIRCLE_RADIUS * t.sin(),
                0.0,
            )
        };
        for i in 0..CENTER_CIRCLE_SEGMENTS {
            self.line(point(i), point(i + 1), colors::CENTER_CIRCLE);
        }
    }

    /// All segments, in drawing order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Flattens the segments into a `LineList` vertex stream.
    #[must_use]
    pub fn vertices(&self) -> Vec<LineVertex> {
        self.segments
            .iter()
            .flat_map(|segment| {
                let color = segment.color.to_array();
                [
                    LineVertex {
                        position: segment.start.as_vec3().to_array(),
                        color,
                    },
                    LineVertex {
                        position: segment.end.as_vec3().to_array(),
                        color,
                    },
                ]
            })
            .collect()
    }
}
