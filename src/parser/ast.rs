//! SIF Line Types
//!
//! Plain data produced by the lexer. One value per input line, nothing retained.

use std::fmt;

/// Identifier of a SIF section, as used for dictionary lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Header,
    Simulation,
    Constants,
    Equation,
    Solver,
    Material,
    Body,
    BodyForce,
    BoundaryCondition,
    InitialCondition,
    Component,
    Boundary,
}

impl SectionId {
    pub const ALL: [SectionId; 12] = [
        SectionId::Header,
        SectionId::Simulation,
        SectionId::Constants,
        SectionId::Equation,
        SectionId::Solver,
        SectionId::Material,
        SectionId::Body,
        SectionId::BodyForce,
        SectionId::BoundaryCondition,
        SectionId::InitialCondition,
        SectionId::Component,
        SectionId::Boundary,
    ];

    /// Map a normalized header name ("body force", "boundary condition", ...)
    /// to its section identifier
    pub fn from_header_name(name: &str) -> Option<Self> {
        let id = match name {
            "header" => SectionId::Header,
            "simulation" => SectionId::Simulation,
            "constants" => SectionId::Constants,
            "equation" => SectionId::Equation,
            "solver" => SectionId::Solver,
            "material" => SectionId::Material,
            "body" => SectionId::Body,
            "body force" => SectionId::BodyForce,
            "boundary condition" => SectionId::BoundaryCondition,
            "initial condition" => SectionId::InitialCondition,
            "component" => SectionId::Component,
            "boundary" => SectionId::Boundary,
            _ => return None,
        };
        Some(id)
    }

    /// Dictionary key for this section
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Header => "header",
            SectionId::Simulation => "simulation",
            SectionId::Constants => "constants",
            SectionId::Equation => "equation",
            SectionId::Solver => "solver",
            SectionId::Material => "material",
            SectionId::Body => "body",
            SectionId::BodyForce => "bodyforce",
            SectionId::BoundaryCondition => "bc",
            SectionId::InitialCondition => "ic",
            SectionId::Component => "component",
            SectionId::Boundary => "boundary",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized block-header line like `Boundary Condition 3`
#[derive(Debug, Clone, PartialEq)]
pub struct SectionHeader {
    /// Header name, lower-cased with whitespace collapsed
    pub name: String,
    /// Optional block index following the name
    pub index: Option<String>,
}

impl SectionHeader {
    /// Section this header opens, if the name is mapped
    pub fn section(&self) -> Option<SectionId> {
        SectionId::from_header_name(&self.name)
    }
}

/// Keyword token extracted from an assignment line
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordToken {
    /// Keyword exactly as written (trimmed)
    pub raw: String,
    /// Lower-cased, whitespace-collapsed form used for lookups
    pub normalized: String,
    /// Start column (in chars) of the first occurrence of `raw` in the line
    pub start: usize,
    /// End column (exclusive)
    pub end: usize,
}

/// Structural classification of a single line
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    Empty,
    Comment,
    BlockHeader(SectionHeader),
    BlockEnd,
    /// Anything else: candidate for keyword checking
    Content,
}
