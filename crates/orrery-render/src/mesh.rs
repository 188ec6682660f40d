//! Procedural sphere mesh shared by every body.

/// Vertex format fed to the shader: interleaved position + normal.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SphereOptions {
    pub stacks: u32,
    pub slices: u32,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            stacks: 32,
            slices: 64,
        }
    }
}

/// Generate a unit UV sphere.
///
/// Returns `(vertices, indices)` where `indices` is a CCW triangle
/// list. On a unit sphere the outward normal is just the position.
pub fn generate_uv_sphere(opts: SphereOptions) -> (Vec<Vertex>, Vec<u32>) {
    let stacks = opts.stacks.max(2);
    let slices = opts.slices.max(3);

    let mut vertices = Vec::with_capacity(((stacks + 1) * (slices + 1)) as usize);

    for stack in 0..=stacks {
        let v = stack as f32 / stacks as f32;
        let phi = v * std::f32::consts::PI;

        let sin_phi = phi.sin();
        let cos_phi = phi.cos();

        for slice in 0..=slices {
            let u = slice as f32 / slices as f32;
            let theta = u * (2.0 * std::f32::consts::PI);

            let sin_theta = theta.sin();
            let cos_theta = theta.cos();

            let p = [sin_phi * cos_theta, cos_phi, sin_phi * sin_theta];
            vertices.push(Vertex {
                position: p,
                normal: p,
            });
        }
    }

    let ring = slices + 1;
    let mut indices = Vec::with_capacity((stacks * slices * 6) as usize);

    for stack in 0..stacks {
        for slice in 0..slices {
            let i0 = stack * ring + slice;
            let i1 = i0 + 1;
            let i2 = (stack + 1) * ring + slice;
            let i3 = i2 + 1;

            // Two triangles per quad (CCW)
            indices.push(i0);
            indices.push(i2);
            indices.push(i1);

            indices.push(i1);
            indices.push(i2);
            indices.push(i3);
        }
    }

    (vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_and_index_counts_match_tessellation() {
        let opts = SphereOptions {
            stacks: 8,
            slices: 12,
        };
        let (vertices, indices) = generate_uv_sphere(opts);

        assert_eq!(vertices.len(), (9 * 13) as usize);
        assert_eq!(indices.len(), (8 * 12 * 6) as usize);
    }

    #[test]
    fn indices_stay_in_range() {
        let (vertices, indices) = generate_uv_sphere(SphereOptions::default());
        let max = *indices.iter().max().unwrap();
        assert!((max as usize) < vertices.len());
    }

    #[test]
    fn vertices_lie_on_the_unit_sphere_with_unit_normals() {
        let (vertices, _) = generate_uv_sphere(SphereOptions {
            stacks: 6,
            slices: 9,
        });

        for v in vertices {
            let r = (v.position[0].powi(2) + v.position[1].powi(2) + v.position[2].powi(2)).sqrt();
            assert!((r - 1.0).abs() < 1e-5);
            assert_eq!(v.position, v.normal);
        }
    }

    #[test]
    fn degenerate_tessellation_is_clamped() {
        let (vertices, indices) = generate_uv_sphere(SphereOptions {
            stacks: 0,
            slices: 1,
        });
        // Clamped to 2 stacks x 3 slices.
        assert_eq!(vertices.len(), (3 * 4) as usize);
        assert_eq!(indices.len(), (2 * 3 * 6) as usize);
    }
}
