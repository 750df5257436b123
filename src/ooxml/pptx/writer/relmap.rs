/// Relationship ID mapper for tracking relationships during presentation generation.
///
/// Relationships are created before any XML is generated. The mapper records
/// which relationship ID belongs to which picture so the shape XML can
/// reference the actual IDs.
use std::collections::HashMap;

/// A part that owns a shape tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeOwner {
    /// Slide layout, by index in master definition order
    Layout(usize),
    /// Slide, by index in presentation order
    Slide(usize),
}

/// Maps pictures to their relationship IDs.
///
/// The mapper is organized per owning part, as each part has its own set of
/// relationships.
#[derive(Debug, Default)]
pub struct RelationshipMapper {
    /// Image relationship IDs per owner, in picture order
    image_ids: HashMap<TreeOwner, Vec<String>>,
}

impl RelationshipMapper {
    /// Create a new empty relationship mapper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the relationship ID of the next picture of `owner`.
    pub fn add_image(&mut self, owner: TreeOwner, rel_id: String) {
        self.image_ids.entry(owner).or_default().push(rel_id);
    }

    /// Get the image relationship IDs of `owner`, in picture order.
    pub fn image_ids(&self, owner: TreeOwner) -> &[String] {
        self.image_ids
            .get(&owner)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
