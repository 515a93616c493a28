// Template + dispatch: the one piece of logic every feature panel shares.
// Panels own their template text; this module only renders and forwards.

pub mod runner;
pub mod template;

pub use runner::{ChainError, ChainRunner};
pub use template::{PromptTemplate, RenderContext, TemplateError};

#[cfg(test)]
pub mod testing;
