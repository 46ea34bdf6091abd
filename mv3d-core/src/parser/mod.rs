//! Format parsers and the chain that picks one for a given path
//!
//! A parser first decides whether it *claims* a path. Claiming is a
//! commitment: the claimant's result, success or failure, is the chain's
//! result and later links are never consulted.

use std::fmt;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::geometry::GeometryBuffer;

mod obj;

pub use obj::{parse_obj_str, ObjParser};

/// One link of a [`ParserChain`]
///
/// Links are `Send + Sync` so a [`crate::Session`] can sit behind a `Mutex`
/// shared between threads.
pub trait FormatParser: Send + Sync {
    /// Short format name used in logs
    fn name(&self) -> &str;

    /// Whether this parser takes responsibility for `path`
    fn claims(&self, path: &Path) -> bool;

    /// Parse a claimed file. Only called when [`claims`](Self::claims) returned true.
    fn parse(&self, path: &Path) -> Result<GeometryBuffer>;

    /// `None` when the path is declined, otherwise the full outcome of the parse
    fn attempt(&self, path: &Path) -> Option<Result<GeometryBuffer>> {
        if self.claims(path) {
            Some(self.parse(path))
        } else {
            None
        }
    }
}

/// Ordered list of parsers, tried front to back
pub struct ParserChain {
    links: Vec<Box<dyn FormatParser>>,
}

impl ParserChain {
    /// An empty chain. Every parse fails with [`Error::UnsupportedFormat`] until a link is pushed.
    pub fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// Append a parser at the tail of the chain
    pub fn push<P: FormatParser + 'static>(&mut self, parser: P) {
        self.links.push(Box::new(parser));
    }

    /// Builder-style [`push`](Self::push)
    pub fn with<P: FormatParser + 'static>(mut self, parser: P) -> Self {
        self.push(parser);
        self
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn parse(&self, path: impl AsRef<Path>) -> Result<GeometryBuffer> {
        let path = path.as_ref();
        for link in &self.links {
            match link.attempt(path) {
                Some(outcome) => {
                    debug!("{} parser claimed {}", link.name(), path.display());
                    return outcome;
                }
                None => debug!("{} parser declined {}", link.name(), path.display()),
            }
        }
        Err(Error::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    }
}

impl Default for ParserChain {
    /// A chain holding every built-in format
    fn default() -> Self {
        Self::new().with(ObjParser)
    }
}

impl fmt::Debug for ParserChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.links.iter().map(|link| link.name()))
            .finish()
    }
}
