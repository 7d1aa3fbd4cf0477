//! Runtime template merging.
//!
//! The runtime template is a complete C++ file with four placeholder
//! comments. Each must appear exactly once; [`RuntimeTemplate::parse`]
//! checks that up front and fails otherwise, so a merged file can never
//! silently lose a section or keep a stray marker.
//!
//! Substitution splices the generated text in at the offsets found in the
//! original template. Generated text is never rescanned, so a marker token
//! inside a translated body is left as-is.

use std::fmt;

/// Placeholder markers in the runtime template.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Top-level declarations.
    Declarations,
    /// Library module initializer calls.
    ObjectInit,
    /// One-time bootstrap before the body runs.
    EvalInit,
    /// The translated body.
    EvalBody,
}

impl Marker {
    pub const ALL: [Marker; 4] = [
        Marker::Declarations,
        Marker::ObjectInit,
        Marker::EvalInit,
        Marker::EvalBody,
    ];

    /// The literal token written in the template.
    pub fn token(self) -> &'static str {
        match self {
            Marker::Declarations => "/*GARNET_DECLARATIONS*/",
            Marker::ObjectInit => "/*GARNET_OBJ_INIT*/",
            Marker::EvalInit => "/*GARNET_EVAL_INIT*/",
            Marker::EvalBody => "/*GARNET_EVAL_BODY*/",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Template marker contract violation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("marker `{0}` not found")]
    MissingMarker(Marker),
    #[error("marker `{marker}` appears {count} times, expected exactly once")]
    DuplicateMarker { marker: Marker, count: usize },
    #[error("markers `{first}` and `{second}` overlap")]
    OverlappingMarkers { first: Marker, second: Marker },
}

/// Generated text for each template section.
#[derive(Clone, Copy, Debug, Default)]
pub struct TemplateSections<'a> {
    pub declarations: &'a str,
    pub object_init: &'a str,
    pub eval_init: &'a str,
    pub eval_body: &'a str,
}

impl<'a> TemplateSections<'a> {
    fn get(&self, marker: Marker) -> &'a str {
        match marker {
            Marker::Declarations => self.declarations,
            Marker::ObjectInit => self.object_init,
            Marker::EvalInit => self.eval_init,
            Marker::EvalBody => self.eval_body,
        }
    }
}

/// A validated runtime template.
#[derive(Clone, Debug)]
pub struct RuntimeTemplate<'t> {
    text: &'t str,
    /// Marker positions, sorted by offset.
    slots: [(usize, Marker); 4],
}

impl<'t> RuntimeTemplate<'t> {
    /// Validate that every marker occurs exactly once.
    ///
    /// Markers are checked in declaration order; the first violation found
    /// is reported.
    pub fn parse(text: &'t str) -> Result<Self, TemplateError> {
        let mut slots = [(0, Marker::Declarations); 4];
        for (slot, marker) in slots.iter_mut().zip(Marker::ALL) {
            let mut found = occurrences(text, marker.token());
            let Some(offset) = found.next() else {
                return Err(TemplateError::MissingMarker(marker));
            };
            let extra = found.count();
            if extra > 0 {
                return Err(TemplateError::DuplicateMarker {
                    marker,
                    count: extra + 1,
                });
            }
            *slot = (offset, marker);
        }
        slots.sort_unstable_by_key(|&(offset, _)| offset);
        for pair in slots.windows(2) {
            let (offset, first) = pair[0];
            let (next, second) = pair[1];
            if offset + first.token().len() > next {
                return Err(TemplateError::OverlappingMarkers { first, second });
            }
        }
        Ok(Self { text, slots })
    }

    /// Replace each marker with its section text.
    pub fn merge(&self, sections: &TemplateSections<'_>) -> String {
        let extra: usize = Marker::ALL.iter().map(|&m| sections.get(m).len()).sum();
        let mut out = String::with_capacity(self.text.len() + extra);
        let mut cursor = 0;
        for &(offset, marker) in &self.slots {
            out.push_str(&self.text[cursor..offset]);
            out.push_str(sections.get(marker));
            cursor = offset + marker.token().len();
        }
        out.push_str(&self.text[cursor..]);
        out
    }
}

/// Start offsets of every occurrence of `token`, overlapping ones included.
///
/// `/*GARNET_EVAL_BODY*/*GARNET_EVAL_BODY*/` holds two occurrences sharing
/// the `*/` in the middle; a non-overlapping scan would only see one.
fn occurrences<'a>(text: &'a str, token: &'a str) -> impl Iterator<Item = usize> + 'a {
    let step = token.chars().next().map_or(1, char::len_utf8);
    let mut start = 0;
    std::iter::from_fn(move || {
        let offset = start + text.get(start..)?.find(token)?;
        start = offset + step;
        Some(offset)
    })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
