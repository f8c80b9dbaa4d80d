//! Registry of the knowledge-base retrieval tools exposed to the agent
//! runtime. Both tools share the same processor and collaborator; they
//! differ only in backing knowledge base and wording.

use crate::config::Config;

/// The knowledge-base tools this service dispatches by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnowledgeBaseTool {
    /// Pet care advice reference material.
    PetCare,
    /// Store catalog and product information.
    ProductInfo,
}

pub const ALL_TOOLS: [KnowledgeBaseTool; 2] =
    [KnowledgeBaseTool::PetCare, KnowledgeBaseTool::ProductInfo];

impl KnowledgeBaseTool {
    /// Look up a tool by its registered name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_TOOLS.into_iter().find(|tool| tool.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::PetCare => "retrieve_pet_care",
            Self::ProductInfo => "retrieve_product_info",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::PetCare => {
                "Retrieves pet care advice knowledge base containing reference \
                 sources which should be the only authoritative references on \
                 pet caring information."
            }
            Self::ProductInfo => {
                "Retrieves product information knowledge base covering the \
                 store's catalog, descriptions, and pricing."
            }
        }
    }

    /// Topic word used in success and error messages.
    pub fn topic(&self) -> &'static str {
        match self {
            Self::PetCare => "pet care",
            Self::ProductInfo => "product info",
        }
    }

    /// Knowledge base backing this tool.
    pub fn knowledge_base_id<'c>(&self, config: &'c Config) -> &'c str {
        match self {
            Self::PetCare => &config.pet_care_kb_id,
            Self::ProductInfo => &config.product_info_kb_id,
        }
    }
}
