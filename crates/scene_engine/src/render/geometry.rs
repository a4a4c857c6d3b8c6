//! Vertex layouts, geometry data and GPU buffer upload
//!
//! Geometry is uploaded once before the render loop and never touched again.
//! No consistency check is made between vertex data, indices and draw
//! counts: malformed data renders garbage rather than failing.

use crate::render::backend::{BufferTarget, GraphicsBackend, Topology};
use crate::render::RenderResult;

const FLOAT_SIZE: usize = std::mem::size_of::<f32>();
const INDEX_SIZE: usize = std::mem::size_of::<u32>();

/// One float vertex attribute inside an interleaved vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader input location
    pub location: u32,
    /// Number of float components
    pub components: i32,
    /// Offset from the start of the vertex, in floats
    pub offset_floats: usize,
}

impl VertexAttribute {
    /// Offset from the start of the vertex in bytes
    pub const fn offset_bytes(&self) -> i32 {
        (self.offset_floats * FLOAT_SIZE) as i32
    }
}

/// Memory layout of one interleaved vertex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    /// Distance between consecutive vertices, in floats
    pub stride_floats: usize,
    /// Attributes in location order
    pub attributes: Vec<VertexAttribute>,
}

impl VertexLayout {
    /// Position only: location 0, three floats
    pub fn position() -> Self {
        Self {
            stride_floats: 3,
            attributes: vec![VertexAttribute { location: 0, components: 3, offset_floats: 0 }],
        }
    }

    /// Position at location 0 followed by an RGB color at location 1
    pub fn position_color() -> Self {
        Self {
            stride_floats: 6,
            attributes: vec![
                VertexAttribute { location: 0, components: 3, offset_floats: 0 },
                VertexAttribute { location: 1, components: 3, offset_floats: 3 },
            ],
        }
    }

    /// Distance between consecutive vertices in bytes
    pub const fn stride_bytes(&self) -> i32 {
        (self.stride_floats * FLOAT_SIZE) as i32
    }
}

/// CPU-side description of one geometry object
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryData {
    /// Attribute layout of `vertices`
    pub layout: VertexLayout,
    /// Interleaved vertex floats
    pub vertices: Vec<f32>,
    /// Triangle indices; when present every draw of this geometry is indexed
    pub indices: Option<Vec<u32>>,
}

impl GeometryData {
    /// Non-indexed geometry
    pub fn new(layout: VertexLayout, vertices: &[f32]) -> Self {
        Self { layout, vertices: vertices.to_vec(), indices: None }
    }

    /// Geometry drawn through an index list
    pub fn indexed(layout: VertexLayout, vertices: &[f32], indices: &[u32]) -> Self {
        Self { layout, vertices: vertices.to_vec(), indices: Some(indices.to_vec()) }
    }

    /// Number of whole vertices in the buffer
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / self.layout.stride_floats
    }

    /// Whether draws of this geometry go through the index list
    pub const fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }
}

/// One entry of a scene's fixed draw list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    /// Index into the scene's geometry objects
    pub geometry: usize,
    /// Primitive grouping
    pub topology: Topology,
    /// First vertex (array draws) or first index (indexed draws)
    pub first: i32,
    /// Number of vertices or indices
    pub count: i32,
    /// Constant color uploaded before the draw, if the scene uses one
    pub color: Option<[f32; 4]>,
}

/// Assembles one geometry object from consecutive named parts
///
/// Each part appends its vertices and yields a draw command whose `first` is
/// the running vertex offset, so the draw list is derived from the data
/// instead of being written out by hand.
#[derive(Debug)]
pub struct GeometryBuilder {
    geometry: usize,
    layout: VertexLayout,
    vertices: Vec<f32>,
    draws: Vec<DrawCommand>,
}

impl GeometryBuilder {
    /// Start geometry object number `geometry` with the given layout
    pub fn new(geometry: usize, layout: VertexLayout) -> Self {
        Self { geometry, layout, vertices: Vec::new(), draws: Vec::new() }
    }

    /// Append a part drawn with `topology` over all of its vertices
    pub fn part(mut self, topology: Topology, vertices: &[f32]) -> Self {
        let first = (self.vertices.len() / self.layout.stride_floats) as i32;
        let count = (vertices.len() / self.layout.stride_floats) as i32;
        self.vertices.extend_from_slice(vertices);
        self.draws.push(DrawCommand {
            geometry: self.geometry,
            topology,
            first,
            count,
            color: None,
        });
        self
    }

    /// Finish into the geometry object and its draws in order
    pub fn build(self) -> (GeometryData, Vec<DrawCommand>) {
        let data = GeometryData {
            layout: self.layout,
            vertices: self.vertices,
            indices: None,
        };
        (data, self.draws)
    }
}

/// GPU objects backing one geometry object
pub struct GeometryBuffers<B: GraphicsBackend> {
    vertex_array: B::VertexArray,
    vertex_buffer: B::Buffer,
    element_buffer: Option<B::Buffer>,
}

impl<B: GraphicsBackend> GeometryBuffers<B> {
    /// Upload `data` and record its attribute layout in a new vertex array
    ///
    /// If a buffer cannot be created, the objects created so far are
    /// released before the error is returned.
    pub fn upload(backend: &mut B, data: &GeometryData) -> RenderResult<Self> {
        let vertex_array = backend.create_vertex_array()?;
        backend.bind_vertex_array(Some(vertex_array));

        let vertices = bytemuck::cast_slice(&data.vertices);
        let vertex_buffer = match backend.create_buffer(BufferTarget::Array, vertices) {
            Ok(buffer) => buffer,
            Err(e) => {
                release_partial::<B>(backend, vertex_array, None);
                return Err(e);
            }
        };

        let element_buffer = match &data.indices {
            Some(indices) => {
                let indices = bytemuck::cast_slice(indices);
                match backend.create_buffer(BufferTarget::ElementArray, indices) {
                    Ok(buffer) => Some(buffer),
                    Err(e) => {
                        release_partial::<B>(backend, vertex_array, Some(vertex_buffer));
                        return Err(e);
                    }
                }
            }
            None => None,
        };

        let stride = data.layout.stride_bytes();
        for attribute in &data.layout.attributes {
            backend.enable_vertex_attribute(attribute, stride);
        }

        backend.bind_buffer(BufferTarget::Array, None);
        backend.bind_vertex_array(None);

        log::debug!(
            "Uploaded geometry: {} vertices, {} indices",
            data.vertex_count(),
            data.indices.as_ref().map_or(0, Vec::len)
        );

        Ok(Self { vertex_array, vertex_buffer, element_buffer })
    }

    /// Vertex array holding this geometry's layout
    pub fn vertex_array(&self) -> B::VertexArray {
        self.vertex_array
    }

    /// Whether draws should go through the element buffer
    pub fn is_indexed(&self) -> bool {
        self.element_buffer.is_some()
    }

    /// Byte offset of index number `first` in the element buffer
    pub fn index_offset_bytes(first: i32) -> i32 {
        first * INDEX_SIZE as i32
    }

    /// Release the vertex array, then the vertex buffer, then the element buffer
    pub fn destroy(self, backend: &mut B) {
        backend.delete_vertex_array(self.vertex_array);
        backend.delete_buffer(self.vertex_buffer);
        if let Some(element_buffer) = self.element_buffer {
            backend.delete_buffer(element_buffer);
        }
    }
}

/// Unbind and delete the objects of an upload that did not complete
fn release_partial<B: GraphicsBackend>(
    backend: &mut B,
    vertex_array: B::VertexArray,
    vertex_buffer: Option<B::Buffer>,
) {
    log::warn!("Geometry upload failed, releasing partial objects");
    backend.bind_vertex_array(None);
    backend.delete_vertex_array(vertex_array);
    if let Some(vertex_buffer) = vertex_buffer {
        backend.bind_buffer(BufferTarget::Array, None);
        backend.delete_buffer(vertex_buffer);
    }
}
