use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{Canvas, DrawCmd};

use super::common::{
    create_quad_pipeline, create_viewport_ubo, viewport_ubo_layout_entry, write_viewport_ubo,
    InstanceBuffer, QuadBuffers, QUAD_INDEX_COUNT,
};

/// Renderer for `DrawCmd::Circle`.
///
/// Every disc on the canvas becomes one instance of a unit quad; the fragment
/// shader evaluates a signed distance to the rim and anti-aliases over one pixel.
#[derive(Default)]
pub struct CircleRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bindings: Option<(wgpu::Buffer, wgpu::BindGroup)>,
    quad: Option<QuadBuffers>,
    instances: InstanceBuffer,
}

impl CircleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, canvas: &Canvas) {
        let instances = collect_instances(canvas);
        if instances.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        let quad = self
            .quad
            .get_or_insert_with(|| QuadBuffers::new(ctx, "studioclock circle quad"));
        let Some((ubo, bind_group)) = self.bindings.as_ref() else { return };
        let Some(pipeline) = self.pipeline.as_ref() else { return };

        write_viewport_ubo(ctx, ubo);
        let instance_vbo = self
            .instances
            .upload(ctx, "studioclock circle instances", &instances);

        let mut rpass = target.begin_load_pass("studioclock circle pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, quad.vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(quad.ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..QUAD_INDEX_COUNT, 0, 0..instances.len() as u32);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("studioclock circle bgl"),
            entries: &[viewport_ubo_layout_entry()],
        });

        let pipeline = create_quad_pipeline(
            ctx,
            "studioclock circle pipeline",
            include_str!("shaders/circle.wgsl"),
            &bgl,
            CircleInstance::layout(),
        );

        let ubo = create_viewport_ubo(ctx, "studioclock circle viewport ubo");
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("studioclock circle bind group"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bindings = Some((ubo, bind_group));
    }
}

fn collect_instances(canvas: &Canvas) -> Vec<CircleInstance> {
    canvas
        .items()
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCmd::Circle(c) if c.radius > 0.0 && c.center.is_finite() => Some(CircleInstance {
                center: [c.center.x, c.center.y],
                radius: [c.radius, 0.0],
                color: c.color.to_array(),
            }),
            _ => None,
        })
        .collect()
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (32 bytes):
///
///  offset  0  center  [f32; 2]   loc 1
///  offset  8  radius  [f32; 2]   loc 2  (.x = radius, .y unused)
///  offset 16  color   [f32; 4]   loc 3
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct CircleInstance {
    center: [f32; 2],
    radius: [f32; 2],
    color: [f32; 4],
}

impl CircleInstance {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        1 => Float32x2, // center
        2 => Float32x2, // radius
        3 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CircleInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::text::FontId;

    #[test]
    fn only_visible_circles_become_instances() {
        let mut canvas = Canvas::new(Color::default());
        canvas.fill_circle(Vec2::new(10.0, 20.0), 8.0, Color::opaque(255, 0, 0));
        canvas.fill_circle(Vec2::new(30.0, 20.0), 0.0, Color::opaque(255, 0, 0));
        canvas.draw_text(
            "12:00",
            FontId::default(),
            40.0,
            Color::opaque(255, 0, 0),
            Vec2::new(0.0, 0.0),
        );

        let instances = collect_instances(&canvas);
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].center, [10.0, 20.0]);
        assert_eq!(instances[0].radius[0], 8.0);
        assert_eq!(instances[0].color, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn instance_is_32_bytes() {
        assert_eq!(std::mem::size_of::<CircleInstance>(), 32);
    }
}
