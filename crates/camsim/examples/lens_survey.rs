//! Compares every lens preset for a given mount without opening a window.
//!
//! For each lens this prints the effective aspect, the viewport inside a
//! 1600x900 window and where the far corners of the field land in the image.

use camsim::*;
use glam::DVec3;

fn main() -> Result<()> {
    let mount = MountConfig::default();
    let (window_w, window_h) = (1600, 900);
    let hl = mount.field_length / 2.0;
    let hw = mount.field_width / 2.0;
    let corners = [
        ("NE", DVec3::new(hl, hw, 0.0)),
        ("SE", DVec3::new(hl, -hw, 0.0)),
    ];

    for preset in &LENS_PRESETS {
        let camera = CameraModel::new(MountConfig {
            camera_type: preset.name.to_string(),
            ..mount.clone()
        })?;
        let vp = camera.compute_viewport(window_w, window_h);
        let view_proj =
            camera.compute_frustum().projection_matrix() * camera.compute_view_transform().matrix();

        print!(
            "{:<24} aspect {:.4}  viewport {}x{}+{}+{}",
            preset.name,
            camera.effective_aspect(),
            vp.width,
            vp.height,
            vp.origin_x,
            vp.origin_y
        );
        for (name, corner) in corners {
            let ndc = view_proj.project_point3(corner);
            let visible = ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0 && (0.0..=1.0).contains(&ndc.z);
            print!("  {name} {}", if visible { "in" } else { "out" });
        }
        println!();
    }

    Ok(())
}
