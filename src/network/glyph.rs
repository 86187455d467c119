use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum GlyphClass {
    Macromolecule,
    Process,
    Compartment,
    Complex,
    NucleicAcidFeature,
    SimpleChemical,
    SourceAndSink,
    Protein,
    Drug,
    Other(String),
}

impl GlyphClass {
    pub fn label(&self) -> &str {
        match self {
            Self::Macromolecule => "macromolecule",
            Self::Process => "process",
            Self::Compartment => "compartment",
            Self::Complex => "complex",
            Self::NucleicAcidFeature => "nucleic acid feature",
            Self::SimpleChemical => "simple chemical",
            Self::SourceAndSink => "source and sink",
            Self::Protein => "Protein",
            Self::Drug => "Drug",
            Self::Other(name) => name.as_str(),
        }
    }

    pub fn is_process(&self) -> bool {
        matches!(self, Self::Process)
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Self::Complex)
    }

    pub fn is_compartment(&self) -> bool {
        matches!(self, Self::Compartment)
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Self::Compartment | Self::Complex)
    }

    /// Glyphs whose label names a gene, so every state of that gene shares it.
    pub fn carries_gene_label(&self) -> bool {
        matches!(self, Self::Macromolecule | Self::NucleicAcidFeature)
    }
}

impl From<&str> for GlyphClass {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "macromolecule" => Self::Macromolecule,
            "process" => Self::Process,
            "compartment" => Self::Compartment,
            "complex" => Self::Complex,
            "nucleic acid feature" => Self::NucleicAcidFeature,
            "simple chemical" => Self::SimpleChemical,
            "source and sink" => Self::SourceAndSink,
            "protein" => Self::Protein,
            "drug" => Self::Drug,
            _ => Self::Other(value.trim().to_string()),
        }
    }
}

impl From<String> for GlyphClass {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<GlyphClass> for String {
    fn from(value: GlyphClass) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for GlyphClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
