use super::helpers;
use crate::constants::{WATERMARK_OPACITY, WATERMARK_POINT_SIZE, WATERMARK_RGB};
use crate::particles::{Camera, FrameUniforms, ParticleBuffer};
use bytemuck::Zeroable;
use glam::Vec3;
use wgpu::util::DeviceExt;

/// One point sprite; mirrors `Instance` in points.wgsl.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PointInstance {
    pub(crate) pos_size: [f32; 4],
    pub(crate) color_phase: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PointUniforms {
    pub(crate) view: [[f32; 4]; 4],
    pub(crate) proj: [[f32; 4]; 4],
    pub(crate) mouse: [f32; 3],
    pub(crate) time: f32,
    pub(crate) resolution: [f32; 2],
    pub(crate) attenuation: f32,
    pub(crate) watermark_opacity: f32,
    pub(crate) watermark_color: [f32; 4],
}

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4];

pub(crate) fn instance_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<PointInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &INSTANCE_ATTRS,
    }
}

/// src * alpha + dst, alpha accumulates.
const ADDITIVE: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

pub(crate) fn pack_particles(buffer: &ParticleBuffer, out: &mut Vec<PointInstance>) {
    out.clear();
    out.extend(
        buffer
            .positions_flat()
            .chunks_exact(3)
            .zip(buffer.colors_flat().chunks_exact(3))
            .zip(buffer.sizes().iter().zip(buffer.phases()))
            .map(|((p, c), (s, ph))| PointInstance {
                pos_size: [p[0], p[1], p[2], *s],
                color_phase: [c[0], c[1], c[2], *ph],
            }),
    );
}

fn pack_watermark(points: &[Vec3]) -> Vec<PointInstance> {
    points
        .iter()
        .map(|p| PointInstance {
            pos_size: [p.x, p.y, p.z, WATERMARK_POINT_SIZE],
            color_phase: [0.0; 4],
        })
        .collect()
}

pub(crate) struct PointsResources {
    particle_pipeline: wgpu::RenderPipeline,
    watermark_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    particle_instances: wgpu::Buffer,
    particle_count: u32,
    watermark_instances: wgpu::Buffer,
    watermark_count: u32,
    staging: Vec<PointInstance>,
}

pub(crate) fn create_points_resources(
    device: &wgpu::Device,
    hdr_format: wgpu::TextureFormat,
    particle_count: usize,
    watermark: &[Vec3],
) -> PointsResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("points_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::particles::POINTS_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("points_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("points_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let particle_pipeline = helpers::make_points_pipeline(
        device,
        &pl,
        &shader,
        ("vs_points", "fs_heart"),
        hdr_format,
        ADDITIVE,
    );
    let watermark_pipeline = helpers::make_points_pipeline(
        device,
        &pl,
        &shader,
        ("vs_watermark", "fs_watermark"),
        hdr_format,
        wgpu::BlendState::ALPHA_BLENDING,
    );
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("points_uniforms"),
        size: std::mem::size_of::<PointUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("points_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    // Sized for at least one instance so an empty set still binds cleanly.
    let particle_instances = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("particle_instances"),
        size: (std::mem::size_of::<PointInstance>() * particle_count.max(1)) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let mut wm = pack_watermark(watermark);
    let watermark_count = wm.len() as u32;
    if wm.is_empty() {
        wm.push(PointInstance::zeroed());
    }
    let watermark_instances = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("watermark_instances"),
        contents: bytemuck::cast_slice(&wm),
        usage: wgpu::BufferUsages::VERTEX,
    });

    PointsResources {
        particle_pipeline,
        watermark_pipeline,
        uniform_buffer,
        bind_group,
        particle_instances,
        particle_count: particle_count as u32,
        watermark_instances,
        watermark_count,
        staging: Vec::with_capacity(particle_count),
    }
}

impl PointsResources {
    /// Re-upload per-particle attributes if the buffer changed since last time.
    pub(crate) fn upload_if_dirty(&mut self, queue: &wgpu::Queue, buffer: &mut ParticleBuffer) {
        if !buffer.take_dirty() {
            return;
        }
        pack_particles(buffer, &mut self.staging);
        let n = self.staging.len().min(self.particle_count as usize);
        queue.write_buffer(
            &self.particle_instances,
            0,
            bytemuck::cast_slice(&self.staging[..n]),
        );
    }

    pub(crate) fn write_uniforms(
        &self,
        queue: &wgpu::Queue,
        camera: &Camera,
        frame: &FrameUniforms,
        width: u32,
        height: u32,
    ) {
        let u = PointUniforms {
            view: camera.view_matrix().to_cols_array_2d(),
            proj: camera.projection_matrix().to_cols_array_2d(),
            mouse: frame.mouse_world.to_array(),
            time: frame.time_sec,
            resolution: [width.max(1) as f32, height.max(1) as f32],
            attenuation: height as f32 * 0.5,
            watermark_opacity: WATERMARK_OPACITY,
            watermark_color: [WATERMARK_RGB[0], WATERMARK_RGB[1], WATERMARK_RGB[2], 1.0],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    /// Watermark first so the card particles glow over it.
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_bind_group(0, &self.bind_group, &[]);
        if self.watermark_count > 0 {
            rpass.set_pipeline(&self.watermark_pipeline);
            rpass.set_vertex_buffer(0, self.watermark_instances.slice(..));
            rpass.draw(0..6, 0..self.watermark_count);
        }
        if self.particle_count > 0 {
            rpass.set_pipeline(&self.particle_pipeline);
            rpass.set_vertex_buffer(0, self.particle_instances.slice(..));
            rpass.draw(0..6, 0..self.particle_count);
        }
    }
}
