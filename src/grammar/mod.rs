//! Grammar matching - turns raw strings into [`Version`] values
//!
//! Grammars are tried in order and the first one that recognizes the whole
//! input wins:
//! - `strict` - standard semantic versioning (`1.0.0-rc.1+build.5`)
//! - `compatibility` - legacy shorthand tags (`1.0.1b2`, `1.0.10rc3`)

use regex::Captures;

use crate::config::ParserConfig;
use crate::domain::Version;
use crate::error::{Result, SemverCompatError};

pub mod compatibility;
pub mod strict;

pub use compatibility::{normalize_tag, CompatibilityGrammar};
pub use strict::StrictGrammar;

/// A recognizer for one version-string grammar
///
/// `recognize` must either accept the whole input and build the finished
/// value, or return `None`. Any normalization belongs to the grammar itself.
pub trait Grammar: Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Build a version from `input` if it matches this grammar start to end
    fn recognize(&self, input: &str) -> Option<Version>;
}

static DEFAULT_GRAMMARS: [&dyn Grammar; 2] = [&StrictGrammar, &CompatibilityGrammar];

/// Parse with the default grammar order: strict, then compatibility.
pub fn parse(input: &str) -> Result<Version> {
    recognize_first(DEFAULT_GRAMMARS.iter().copied(), input)
}

fn recognize_first<'g>(
    grammars: impl Iterator<Item = &'g (dyn Grammar + 'static)>,
    input: &str,
) -> Result<Version> {
    for grammar in grammars {
        if let Some(version) = grammar.recognize(input) {
            log::trace!("'{}' matched {} grammar", input, grammar.name());
            return Ok(version);
        }
    }

    log::debug!("'{}' matched no version grammar", input);
    Err(SemverCompatError::invalid_version(input))
}

/// Read the three core components out of a grammar match.
///
/// Digit runs that do not fit in a `u64` yield `None`, so the grammar
/// reports no match.
pub(crate) fn core_from_captures(caps: &Captures<'_>) -> Option<(u64, u64, u64)> {
    let component = |name: &str| caps.name(name)?.as_str().parse::<u64>().ok();
    Some((component("major")?, component("minor")?, component("patch")?))
}

/// Ordered list of grammars used to parse version strings
pub struct Parser {
    grammars: Vec<Box<dyn Grammar>>,
}

impl Parser {
    /// Parser that only accepts standard semantic versions
    pub fn strict() -> Self {
        Parser {
            grammars: vec![Box::new(StrictGrammar)],
        }
    }

    /// Parser built from the `[parser]` configuration section
    pub fn from_config(config: &ParserConfig) -> Self {
        if config.compatibility {
            Parser::default()
        } else {
            Parser::strict()
        }
    }

    /// Append a grammar, tried after every grammar already present
    pub fn with_grammar(mut self, grammar: impl Grammar + 'static) -> Self {
        self.grammars.push(Box::new(grammar));
        self
    }

    /// Names of the grammars in the order they are tried
    pub fn grammar_names(&self) -> Vec<&'static str> {
        self.grammars.iter().map(|g| g.name()).collect()
    }

    pub fn parse(&self, input: &str) -> Result<Version> {
        recognize_first(self.grammars.iter().map(|g| &**g), input)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Parser {
            grammars: vec![Box::new(StrictGrammar), Box::new(CompatibilityGrammar)],
        }
    }
}

impl std::fmt::Debug for Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("grammars", &self.grammar_names())
            .finish()
    }
}
