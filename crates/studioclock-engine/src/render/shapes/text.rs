use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};
use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{Canvas, DrawCmd};
use crate::text::FontSystem;

use super::common::{
    create_quad_pipeline, create_viewport_ubo, viewport_ubo_layout_entry, write_viewport_ubo,
    InstanceBuffer, QuadBuffers, QUAD_INDEX_COUNT,
};

const ATLAS_SIZE: u32 = 1024;
const GLYPH_PADDING: u32 = 1; // pixels between glyphs in the atlas

#[derive(Debug, Copy, Clone, PartialEq)]
struct AtlasSlot {
    uv_min: [f32; 2],
    uv_max: [f32; 2],
}

/// Shelf packer for the glyph atlas: fills rows left to right, top to bottom.
#[derive(Debug)]
struct ShelfPacker {
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
    full: bool,
}

impl Default for ShelfPacker {
    fn default() -> Self {
        Self {
            cursor_x: GLYPH_PADDING,
            cursor_y: GLYPH_PADDING,
            row_height: 0,
            full: false,
        }
    }
}

impl ShelfPacker {
    /// Reserves a `w`×`h` cell and returns its top-left texel.
    fn allocate(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        if self.full {
            return None;
        }

        if self.cursor_x + w + GLYPH_PADDING > ATLAS_SIZE {
            self.cursor_y += self.row_height + GLYPH_PADDING;
            self.cursor_x = GLYPH_PADDING;
            self.row_height = 0;
        }

        if self.cursor_y + h + GLYPH_PADDING > ATLAS_SIZE {
            self.full = true;
            return None;
        }

        let pos = (self.cursor_x, self.cursor_y);
        self.cursor_x += w + GLYPH_PADDING;
        self.row_height = self.row_height.max(h);
        Some(pos)
    }
}

struct Atlas {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
}

/// Renderer for `DrawCmd::Text`.
///
/// Glyphs are rasterized by fontdue on first use and cached in an R8 atlas
/// for the renderer's lifetime. The cache key is fontdue's
/// `GlyphRasterConfig` (font, glyph index, pixel size), so the readout's few
/// distinct digits are rasterized once and reused every frame.
pub struct TextRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bindings: Option<(wgpu::Buffer, wgpu::BindGroup)>,
    atlas: Option<Atlas>,
    packer: ShelfPacker,
    glyph_cache: HashMap<GlyphRasterConfig, AtlasSlot>,
    quad: Option<QuadBuffers>,
    instances: InstanceBuffer,
    layout: Layout<()>,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            pipeline_format: None,
            pipeline: None,
            bindings: None,
            atlas: None,
            packer: ShelfPacker::default(),
            glyph_cache: HashMap::new(),
            quad: None,
            instances: InstanceBuffer::default(),
            layout: Layout::new(CoordinateSystem::PositiveYDown),
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders all `DrawCmd::Text` entries on `canvas`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        canvas: &Canvas,
        fonts: &FontSystem,
    ) {
        if !canvas.items().iter().any(|c| matches!(c, DrawCmd::Text(_))) {
            return;
        }

        self.ensure_atlas(ctx);
        self.ensure_pipeline(ctx);

        let instances = self.build_instances(ctx, canvas, fonts);
        if instances.is_empty() {
            return;
        }

        let quad = self
            .quad
            .get_or_insert_with(|| QuadBuffers::new(ctx, "studioclock text quad"));
        let Some((ubo, bind_group)) = self.bindings.as_ref() else { return };
        let Some(pipeline) = self.pipeline.as_ref() else { return };

        write_viewport_ubo(ctx, ubo);
        let instance_vbo = self
            .instances
            .upload(ctx, "studioclock text instances", &instances);

        let mut rpass = target.begin_load_pass("studioclock text pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, quad.vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(quad.ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..QUAD_INDEX_COUNT, 0, 0..instances.len() as u32);
    }

    fn build_instances(
        &mut self,
        ctx: &RenderCtx<'_>,
        canvas: &Canvas,
        fonts: &FontSystem,
    ) -> Vec<GlyphInstance> {
        let mut instances = Vec::new();

        for cmd in canvas.items() {
            let DrawCmd::Text(cmd) = cmd else { continue };
            let Some(font) = fonts.get(cmd.font) else {
                log::warn!("unknown {:?}, skipping text {:?}", cmd.font, cmd.text);
                continue;
            };

            self.layout.reset(&LayoutSettings {
                x: cmd.origin.x,
                y: cmd.origin.y,
                ..LayoutSettings::default()
            });
            self.layout.append(&[font], &TextStyle::new(&cmd.text, cmd.size, 0));

            // Snapshot positions so the borrow on `self.layout` ends before
            // glyphs are uploaded through `&mut self`.
            let glyphs: Vec<(GlyphRasterConfig, f32, f32, usize, usize)> = self
                .layout
                .glyphs()
                .iter()
                .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
                .map(|g| (g.key, g.x, g.y, g.width, g.height))
                .collect();

            for (key, x, y, w, h) in glyphs {
                if !self.glyph_cache.contains_key(&key) {
                    let (metrics, bitmap) = font.rasterize_config(key);
                    if metrics.width == 0 || metrics.height == 0 {
                        continue;
                    }
                    let (gw, gh) = (metrics.width as u32, metrics.height as u32);
                    match self.upload_glyph(ctx, &bitmap, gw, gh) {
                        Some(slot) => {
                            self.glyph_cache.insert(key, slot);
                        }
                        None => continue,
                    }
                }

                let Some(slot) = self.glyph_cache.get(&key) else { continue };
                instances.push(GlyphInstance {
                    dst_min: [x, y],
                    dst_max: [x + w as f32, y + h as f32],
                    uv_min: slot.uv_min,
                    uv_max: slot.uv_max,
                    color: cmd.color.to_array(),
                });
            }
        }

        instances
    }

    fn upload_glyph(
        &mut self,
        ctx: &RenderCtx<'_>,
        bitmap: &[u8],
        w: u32,
        h: u32,
    ) -> Option<AtlasSlot> {
        let atlas = self.atlas.as_ref()?;
        let Some((gx, gy)) = self.packer.allocate(w, h) else {
            log::warn!("glyph atlas full ({ATLAS_SIZE}x{ATLAS_SIZE}); glyph dropped");
            return None;
        };

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &atlas.texture,
                mip_level: 0,
                origin: wgpu::Origin3d { x: gx, y: gy, z: 0 },
                aspect: wgpu::TextureAspect::All,
            },
            bitmap,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(w),
                rows_per_image: Some(h),
            },
            wgpu::Extent3d { width: w, height: h, depth_or_array_layers: 1 },
        );

        let size = ATLAS_SIZE as f32;
        Some(AtlasSlot {
            uv_min: [gx as f32 / size, gy as f32 / size],
            uv_max: [(gx + w) as f32 / size, (gy + h) as f32 / size],
        })
    }

    fn ensure_atlas(&mut self, ctx: &RenderCtx<'_>) {
        if self.atlas.is_some() {
            return;
        }

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("studioclock glyph atlas"),
            size: wgpu::Extent3d {
                width: ATLAS_SIZE,
                height: ATLAS_SIZE,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("studioclock glyph sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        self.atlas = Some(Atlas { texture, view, sampler });
        self.packer = ShelfPacker::default();
        self.glyph_cache.clear();
        // Bindings reference the atlas view; force a rebuild.
        self.pipeline = None;
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }
        let Some(atlas) = self.atlas.as_ref() else { return };

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("studioclock text bgl"),
            entries: &[
                viewport_ubo_layout_entry(),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline = create_quad_pipeline(
            ctx,
            "studioclock text pipeline",
            include_str!("shaders/text.wgsl"),
            &bgl,
            GlyphInstance::layout(),
        );

        let ubo = create_viewport_ubo(ctx, "studioclock text viewport ubo");
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("studioclock text bind group"),
            layout: &bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&atlas.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&atlas.sampler),
                },
            ],
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bindings = Some((ubo, bind_group));
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (48 bytes):
///
///  offset  0  dst_min  [f32; 2]   loc 1
///  offset  8  dst_max  [f32; 2]   loc 2
///  offset 16  uv_min   [f32; 2]   loc 3
///  offset 24  uv_max   [f32; 2]   loc 4
///  offset 32  color    [f32; 4]   loc 5
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct GlyphInstance {
    dst_min: [f32; 2],
    dst_max: [f32; 2],
    uv_min: [f32; 2],
    uv_max: [f32; 2],
    color: [f32; 4],
}

impl GlyphInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x2, // dst_min
        2 => Float32x2, // dst_max
        3 => Float32x2, // uv_min
        4 => Float32x2, // uv_max
        5 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GlyphInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packer_fills_rows_then_wraps() {
        let mut packer = ShelfPacker::default();
        assert_eq!(packer.allocate(100, 40), Some((1, 1)));
        assert_eq!(packer.allocate(100, 60), Some((102, 1)));

        // Does not fit on the first shelf any more.
        let wide = ATLAS_SIZE - 10;
        assert_eq!(packer.allocate(wide, 10), Some((1, 62)));
    }

    #[test]
    fn packer_reports_full_and_stays_full() {
        let mut packer = ShelfPacker::default();
        assert!(packer.allocate(ATLAS_SIZE - 2, ATLAS_SIZE - 2).is_some());
        assert_eq!(packer.allocate(8, 8), None);
        assert_eq!(packer.allocate(1, 1), None);
    }

    #[test]
    fn glyph_instance_is_48_bytes() {
        assert_eq!(std::mem::size_of::<GlyphInstance>(), 48);
    }
}
