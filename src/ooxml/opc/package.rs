/// In-memory OPC package for writing.
///
/// This module provides the OpcPackage type, which collects parts and
/// package-level relationships before they are handed to the
/// [`PackageWriter`](crate::ooxml::opc::PackageWriter).
use std::collections::BTreeMap;

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;

/// An Open Packaging Convention package held in memory.
///
/// Parts are indexed by partname in a sorted map, so iteration order (and
/// therefore the order of ZIP entries) depends only on the partnames.
#[derive(Debug)]
pub struct OpcPackage {
    /// Package-level relationships
    rels: Relationships,

    /// All parts in the package, indexed by partname
    parts: BTreeMap<PackURI, Part>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI),
            parts: BTreeMap::new(),
        }
    }

    /// Add a new part to the package.
    ///
    /// Returns an error if a part with the same partname already exists.
    pub fn add_part(&mut self, part: Part) -> Result<()> {
        let partname = part.partname().clone();
        if self.parts.contains_key(&partname) {
            return Err(OpcError::DuplicatePart(partname.to_string()));
        }
        self.parts.insert(partname, part);
        Ok(())
    }

    /// Get a part by its partname.
    pub fn get_part(&self, partname: &PackURI) -> Result<&Part> {
        self.parts
            .get(partname)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Get a mutable reference to a part by its partname.
    pub fn get_part_mut(&mut self, partname: &PackURI) -> Result<&mut Part> {
        self.parts
            .get_mut(partname)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Get an iterator over all parts in partname order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.values()
    }

    /// Get the number of parts in the package.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Check if a part exists in the package.
    pub fn contains_part(&self, partname: &PackURI) -> bool {
        self.parts.contains_key(partname)
    }

    /// Get a reference to the package-level relationships.
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package to a part, returning the relationship ID.
    pub fn relate_to(&mut self, partname: &PackURI, reltype: &str) -> String {
        self.rels.get_or_add(reltype, partname)
    }

    /// Relate one part to another, returning the relationship ID.
    ///
    /// The source part must already be in the package; the target need not be.
    pub fn relate_part(&mut self, source: &PackURI, target: &PackURI, reltype: &str) -> Result<String> {
        Ok(self.get_part_mut(source)?.relate_to(target, reltype))
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};

    fn part(name: &str) -> Part {
        Part::new(PackURI::new(name).unwrap(), ct::XML, Vec::new())
    }

    #[test]
    fn test_parts_iterate_in_partname_order() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(part("/ppt/slides/slide2.xml")).unwrap();
        pkg.add_part(part("/docProps/core.xml")).unwrap();
        pkg.add_part(part("/ppt/presentation.xml")).unwrap();

        let names: Vec<&str> = pkg.iter_parts().map(|p| p.partname().as_str()).collect();
        assert_eq!(names, ["/docProps/core.xml", "/ppt/presentation.xml", "/ppt/slides/slide2.xml"]);
    }

    #[test]
    fn test_duplicate_part_rejected() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(part("/ppt/presentation.xml")).unwrap();
        assert!(matches!(
            pkg.add_part(part("/ppt/presentation.xml")),
            Err(OpcError::DuplicatePart(_))
        ));
    }

    #[test]
    fn test_relate_part() {
        let mut pkg = OpcPackage::new();
        let pres = PackURI::new("/ppt/presentation.xml").unwrap();
        pkg.add_part(part(pres.as_str())).unwrap();

        let slide = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        assert_eq!(pkg.relate_part(&pres, &slide, rt::SLIDE).unwrap(), "rId1");

        let missing = PackURI::new("/ppt/missing.xml").unwrap();
        assert!(pkg.relate_part(&missing, &slide, rt::SLIDE).is_err());
    }
}
